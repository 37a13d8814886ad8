//! Conversion session state
//!
//! The GUI owns one [`Session`]. Every file selection calls [`Session::begin`]
//! and gets a [`Ticket`]; the worker result is handed back through
//! [`Session::finish`] together with that ticket. Only the ticket from the
//! most recent `begin` can change the state, so a slow decode of an older
//! file never overwrites a newer result.

use crate::ascii::AsciiArt;
use crate::error::{AsciiError, Result};
use crate::processor::Conversion;

/// Identifies one conversion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Where the session currently is
#[derive(Debug, Default)]
pub enum ConversionState {
    /// Nothing converted yet
    #[default]
    Idle,
    /// A request is in flight; the last committed result is kept aside
    Converting {
        generation: u64,
        previous: Option<Conversion>,
    },
    /// A conversion is available for display and export
    Ready(Conversion),
}

/// What [`Session::finish`] did with a result
#[derive(Debug)]
pub enum Outcome {
    /// The result replaced the current conversion
    Committed,
    /// The request failed; the previous conversion (if any) is back in place
    Failed(AsciiError),
    /// The result belongs to a superseded request and was dropped
    Stale,
}

#[derive(Debug, Default)]
pub struct Session {
    state: ConversionState,
    latest: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    /// Start a new request, superseding any in flight
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        let previous = match std::mem::take(&mut self.state) {
            ConversionState::Idle => None,
            ConversionState::Converting { previous, .. } => previous,
            ConversionState::Ready(conversion) => Some(conversion),
        };
        self.state = ConversionState::Converting {
            generation: self.latest,
            previous,
        };
        Ticket(self.latest)
    }

    /// Hand back the result for `ticket`
    pub fn finish(&mut self, ticket: Ticket, result: Result<Conversion>) -> Outcome {
        let previous = match std::mem::take(&mut self.state) {
            ConversionState::Converting {
                generation,
                previous,
            } if generation == ticket.0 => previous,
            other => {
                self.state = other;
                return Outcome::Stale;
            }
        };

        match result {
            Ok(conversion) => {
                self.state = ConversionState::Ready(conversion);
                Outcome::Committed
            }
            Err(err) => {
                self.state = match previous {
                    Some(conversion) => ConversionState::Ready(conversion),
                    None => ConversionState::Idle,
                };
                Outcome::Failed(err)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ConversionState::Converting { .. })
    }

    /// The committed conversion, only while not converting
    pub fn conversion(&self) -> Option<&Conversion> {
        match &self.state {
            ConversionState::Ready(conversion) => Some(conversion),
            _ => None,
        }
    }

    /// The conversion to show on screen
    ///
    /// Unlike [`Session::conversion`] this keeps the last committed result
    /// visible while a newer request is in flight.
    pub fn displayed(&self) -> Option<&Conversion> {
        match &self.state {
            ConversionState::Idle => None,
            ConversionState::Converting { previous, .. } => previous.as_ref(),
            ConversionState::Ready(conversion) => Some(conversion),
        }
    }

    /// The ASCII art available for export, if any
    pub fn art(&self) -> Option<&AsciiArt> {
        self.conversion()
            .map(|conversion| &conversion.art)
            .filter(|art| !art.is_empty())
    }

    pub fn exports_enabled(&self) -> bool {
        self.art().is_some()
    }
}

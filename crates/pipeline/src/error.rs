//! Admission-boundary errors.
//!
//! All pipeline math is pure and total; the only fallible operation is
//! admitting a block. A rejected admission leaves the engine untouched: the
//! tick does not occur.

use core::fmt;

use crate::MessageId;

/// A block admission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AdmissionError {
  /// An earlier block of the same message has not yet retired.
  ///
  /// Blocks of one message must be serialized: wait for the previous block's
  /// [`Retirement`](crate::Retirement) and admit the next with
  /// [`Chaining::Continue`](crate::Chaining::Continue).
  MessageInFlight(MessageId),
}

impl fmt::Display for AdmissionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MessageInFlight(id) => {
        write!(f, "message {} already has a block in flight", id.0)
      }
    }
  }
}

impl core::error::Error for AdmissionError {}

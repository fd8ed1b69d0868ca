//! Channel-level failures.
//!
//! These are the only errors a read operation ever returns. Validation
//! failures are absorbed by the retry loop (see [`crate::rules::Rejected`]).

use std::io;
use thiserror::Error;

/// The text channel could not produce or consume a line.
///
/// Not recoverable by re-prompting: every read operation returns it to the
/// caller as soon as it happens.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The input side reached end of stream.
    #[error("input stream closed, no more lines to read")]
    Closed,
    /// The underlying transport failed.
    #[error("text channel i/o failure: {0}")]
    Io(#[from] io::Error),
}

impl ChannelError {
    /// `true` when the channel simply ran out of input.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_display() {
        assert_eq!(
            ChannelError::Closed.to_string(),
            "input stream closed, no more lines to read"
        );
        assert!(ChannelError::Closed.is_closed());
    }

    #[test]
    fn test_io_from() {
        let err: ChannelError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe gone").into();
        assert!(!err.is_closed());
        assert_eq!(err.to_string(), "text channel i/o failure: pipe gone");
    }
}

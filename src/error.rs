use std::io;
use std::process::ExitCode;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// Reading stdin failed before end of stream.
    #[error("failed to read input after {lines} line(s)")]
    ReadFailure {
        lines: usize,
        #[source]
        source: io::Error,
    },
}

/// How a run ended, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
    NotAPipe,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
            Exit::NotAPipe => 3,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(Exit::Success.code(), 0);
        assert_eq!(Exit::Failure.code(), 1);
        assert_eq!(Exit::NotAPipe.code(), 3);
        // clap exits with 2 on usage errors
        assert_ne!(Exit::NotAPipe.code(), 2);
    }

    #[test]
    fn read_failure_keeps_source() {
        let err = InputError::ReadFailure {
            lines: 3,
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert_eq!(err.to_string(), "failed to read input after 3 line(s)");
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "boom");
    }
}

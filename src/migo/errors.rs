//! Errors that can occur during the lifetime of the tool.
use std::io::Error as IOError;
use std::process::ExitCode;

use itertools::Itertools as _;
use thiserror::Error;

use crate::migo::token::scanner;

/// An error that occurred inside the MiGo front end.
///
/// To support the [`std::process::Termination`] trait, a `From<EngineError> for ExitCode`
/// implementation is provided, using the exit codes of the
/// [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Errors that happened when trying to load the file
    /// or read the REPL line.
    #[error("Error reading source: {0}")]
    FileError(#[from] IOError),
    /// Errors that happened during the scanning phase.
    #[error("Errors when scanning:\n{}", .0.iter().join("\n"))]
    LexingErrors(Vec<scanner::LexingError>),
}

impl From<EngineError> for ExitCode {
    #[inline]
    fn from(value: EngineError) -> Self {
        ExitCode::from(match value {
            // Technically, 66 only specifies missing or unreadable files
            // any other errors during I/O for both the file, and the REPL command,
            // should be presented as 74, EX_IOERR
            EngineError::FileError(_) => 66,    // EX_NOINPUT
            EngineError::LexingErrors(_) => 65, // EX_DATAERR
        })
    }
}

#[cfg(test)]
mod test {
    use super::EngineError;
    use crate::migo::token::scanner::tokenize;

    #[test]
    fn lexing_errors_are_listed_line_by_line() {
        let errs = tokenize("@ ?").expect_err("both characters are illegal");
        assert_eq!(
            EngineError::LexingErrors(errs).to_string(),
            "Errors when scanning:\nillegal character at 1:0-1:1\nillegal character at 1:2-1:3"
        );
    }
}

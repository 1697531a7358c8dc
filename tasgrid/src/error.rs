//! Top-level error type.
//!
//! Wraps the per-module errors so callers can handle every failure through a
//! single type, and classifies each one as fatal at startup or recoverable
//! per call.

use crate::config::ConfigFileError;
use crate::grid::GridError;
use crate::sheet::SheetTableError;

/// How a caller should treat an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The process cannot do useful work (bad sheet table or configuration).
    FatalStartup,
    /// Only the current query failed; later queries may succeed.
    Recoverable,
}

/// Any error raised by the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    SheetTable(#[from] SheetTableError),

    #[error(transparent)]
    Config(#[from] ConfigFileError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SheetTable(_) | Error::Config(_) => ErrorKind::FatalStartup,
            Error::Grid(_) => ErrorKind::Recoverable,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::FatalStartup
    }
}

/// Result alias using the library [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

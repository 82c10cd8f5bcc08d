use std::{fmt, io};

/// Errors that can occur when working with a mock file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileError {
    /// No bytes are available at the requested position.
    Eof,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Eof => write!(f, "End of file"),
        }
    }
}

impl std::error::Error for FileError {}

impl From<FileError> for io::Error {
    fn from(err: FileError) -> Self {
        match err {
            FileError::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, err),
        }
    }
}

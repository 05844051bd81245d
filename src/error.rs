use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A directory could not be opened or read for listing.
    #[error("cannot open directory {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Percentage requested against a zero grand total.
    #[error("percentage of an empty total is undefined")]
    DivisionUndefined,

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 1,
            Self::Usage(_) => 2,
            Self::DivisionUndefined => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

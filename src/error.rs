//! Error taxonomy for the load → infer → write pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// The inference engine itself is total; everything that can fail lives at
/// the file boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not resolve to a readable file.
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Input exists but is not valid JSON. `json_path` locates the point of
    /// failure inside the document.
    #[error("invalid JSON in {} at {json_path}: {source}", .path.display())]
    InputMalformed {
        path: PathBuf,
        json_path: String,
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode schema: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Load-phase failures the driver reports and swallows, as opposed to
    /// fatal conditions that propagate.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound { .. } | Error::InputMalformed { .. }
        )
    }

    /// Short kind label used in operator diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InputNotFound { .. } => "InputNotFound",
            Error::InputMalformed { .. } => "InputMalformed",
            Error::Io(_) => "Io",
            Error::Serialize(_) => "Serialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

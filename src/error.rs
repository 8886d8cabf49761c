//! Error type for generation runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a generation run.
///
/// There is no retry policy anywhere in this crate: a run either completes
/// or fails outright, and a failed run may leave a partially written output
/// tree behind. The next successful run starts with a full wipe of the
/// output directory, which restores consistency.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The api description could not be parsed.
    #[error("failed to parse api description: {0}")]
    Description(#[from] serde_json::Error),

    /// A filesystem operation failed. Fatal; nothing already written is
    /// rolled back.
    #[error("i/o failure at {}: {source}", path.display())]
    Io {
        /// Path the operation targeted.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// A render collaborator failed while producing source text for an
    /// entity or a module template. Propagated unchanged to the caller.
    #[error("render failed for `{entity}`: {message}")]
    Render {
        /// Name of the entity or module being rendered.
        entity: String,
        /// Collaborator-supplied failure message.
        message: String,
    },
}

impl GenerateError {
    /// Wrap an i/o error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

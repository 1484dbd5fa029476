use thiserror::Error;

/// Errors that can occur while persisting progress.
///
/// Reads never surface these to callers of `ProgressStore::load`; a failed
/// read falls back to the default state instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading or writing the backing file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Progress could not be encoded as JSON
    #[error("Failed to encode progress: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

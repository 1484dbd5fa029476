use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be loaded or is invalid
    #[error("{0}")]
    Catalog(#[from] arc_logistics_lib::catalog::CatalogError),

    /// Progress could not be saved
    #[error("Failed to save progress: {0}")]
    Store(#[from] arc_logistics_lib::StoreError),

    /// Unknown workshop id or name
    #[error("Unknown workshop: {0}")]
    UnknownWorkshop(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn unknown_workshop(msg: impl Into<String>) -> Self {
        Self::UnknownWorkshop(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

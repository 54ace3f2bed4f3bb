use thiserror::Error;

/// Failure while assembling the catalog. Any one of these aborts the load.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("source '{source_name}' is unreachable: {reason}")]
    SourceUnreachable { source_name: String, reason: String },
    #[error("source '{source_name}' answered with status {status}")]
    SourceStatus { source_name: String, status: u16 },
    #[error("failed to read source '{source_name}': {error}")]
    SourceRead {
        source_name: String,
        #[source]
        error: std::io::Error,
    },
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Invalid filter specification input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("unknown deadline window '{0}'")]
    UnknownDeadlineWindow(String),
    #[error("unknown demonstrated interest level '{0}'")]
    UnknownInterestLevel(String),
    #[error("unknown housing requirement '{0}'")]
    UnknownHousingRequirement(String),
    #[error("unknown quick filter '{0}' (use: free, noessays, aid, ed2, intl)")]
    UnknownQuickFilter(String),
}

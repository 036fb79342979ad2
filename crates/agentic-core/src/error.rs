use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgenticError {
    #[error("manifest contains no entries")]
    EmptyManifest,

    #[error("duplicate manifest entry: {0}")]
    DuplicateEntry(String),

    #[error("invalid manifest entry path '{0}': must be relative and stay inside the target root")]
    InvalidEntryPath(String),

    #[error("unsupported manifest version {found} (expected {expected})")]
    UnsupportedManifestVersion { found: u32, expected: u32 },

    #[error("manifest is not valid UTF-8: {0}")]
    ManifestEncoding(#[from] std::str::Utf8Error),

    #[error("bundled resource missing: {0}")]
    BundledResourceMissing(String),

    #[error("failed to create target root {}: {source}", .path.display())]
    TargetRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("http client setup failed: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AgenticError>;

/// Failure reported by a content source for a single identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("timed out: {0}")]
    Timeout(String),
}

impl FetchError {
    pub fn kind(&self) -> crate::types::FailureKind {
        match self {
            FetchError::NotFound(_) => crate::types::FailureKind::NotFound,
            FetchError::Network(_) | FetchError::Timeout(_) => {
                crate::types::FailureKind::NetworkOrIo
            }
        }
    }
}

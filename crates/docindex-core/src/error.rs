use thiserror::Error;

/// Boxed cause carried by the pipeline's fatal error kinds.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Document source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("No documents left after validation ({rejected} rejected)")]
    ValidationExhausted { rejected: usize },

    #[error("Provisioning index '{index}' failed")]
    Provisioning {
        index: String,
        #[source]
        source: BoxError,
    },

    #[error("Refusing to upload an empty batch")]
    EmptyBatch,

    #[error("Batch upload failed")]
    Transport {
        #[source]
        source: BoxError,
    },

    #[error("{failed} of {total} documents were rejected by the search service")]
    DocumentsRejected { failed: usize, total: usize },
}

impl Error {
    pub fn provisioning(index: &str, source: anyhow::Error) -> Self {
        Error::Provisioning { index: index.to_string(), source: source.into() }
    }

    pub fn transport(source: anyhow::Error) -> Self {
        Error::Transport { source: source.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

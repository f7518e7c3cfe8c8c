/// Failures raised inside the pipeline. These never reach the caller; the
/// orchestrator logs them and reports [`ResolveError::ProcessingFailed`].
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("url {url} returned 404")]
    NotFound { url: String },

    #[error("url {url} returned {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unable to find {what} in {url}")]
    IdentifierNotFound { what: &'static str, url: String },

    #[error("unexpected payload shape: {0}")]
    StructuralMismatch(String),

    #[error("transport error: {0:?}")]
    Transport(#[from] reqwest::Error),
}

impl PipelineError {
    pub fn identifier(what: &'static str, url: &str) -> Self {
        Self::IdentifierNotFound {
            what,
            url: url.to_string(),
        }
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Self::StructuralMismatch(message.into())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::StructuralMismatch(err.to_string())
    }
}

/// The only error a caller of the resolver observes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("something went wrong when parsing {0}")]
    ProcessingFailed(String),
}

impl ResolveError {
    pub fn url(&self) -> &str {
        match self {
            ResolveError::ProcessingFailed(url) => url,
        }
    }
}

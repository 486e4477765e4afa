use crate::services::dedalus::models::errors::ApiClientError;

/// Errors that can occur while submitting a run through a [`Runner`].
///
/// [`Runner`]: crate::Runner
#[derive(Debug)]
pub enum RunnerError {
    /// Failure inside the underlying service client.
    Client(ApiClientError),
    /// No model identifier was set on the request.
    ModelNotSet,
    /// Attempted to use a feature the runner does not support.
    Unsupported(String),
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerError::Client(e) => write!(f, "Client Error: {e}"),
            RunnerError::ModelNotSet => write!(f, "Model not set on run request"),
            RunnerError::Unsupported(s) => write!(f, "Unsupported: {s}"),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunnerError::Client(e) => Some(e),
            RunnerError::ModelNotSet => None,
            RunnerError::Unsupported(_) => None,
        }
    }
}

impl From<ApiClientError> for RunnerError {
    fn from(err: ApiClientError) -> Self {
        RunnerError::Client(err)
    }
}

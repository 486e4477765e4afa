mod error;

pub use error::RunnerError;

use tracing::instrument;

use crate::services::dedalus::{
    models::run::{RunRequest, RunResult},
    DedalusClient,
};

/// Submits tasks to the hosted agent-execution service.
///
/// A `Runner` is a thin wrapper around one [`DedalusClient`]; it holds no
/// other state and references the same client for its entire lifetime.
#[derive(Debug, Clone)]
pub struct Runner {
    client: DedalusClient,
}

impl Runner {
    pub fn new(client: DedalusClient) -> Self {
        Self { client }
    }

    /// Execute one run to completion.
    ///
    /// Validates the request, then awaits exactly one submission to the
    /// platform. Failures from the service are surfaced as-is; there is no
    /// retry and no timeout beyond what the transport applies.
    #[instrument(level = "debug", skip(self, request), fields(model = ?request.model))]
    pub async fn run(&self, request: RunRequest) -> Result<RunResult, RunnerError> {
        if request.model.as_ref().map(|m| m.is_empty()).unwrap_or(true) {
            return Err(RunnerError::ModelNotSet);
        }
        if request.stream {
            return Err(RunnerError::Unsupported(
                "streaming runs are not supported".into(),
            ));
        }

        let result = self.client.submit_run(&request).await?;
        Ok(result)
    }
}

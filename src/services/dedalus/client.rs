use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, error, info_span, instrument, trace, Instrument};

use super::{
    client_config::ClientConfig,
    models::{
        errors::ApiClientError,
        run::{RunRequest, RunResult},
    },
};

/// Authenticated handle to the hosted agent-execution service.
///
/// Created once from a [`ClientConfig`] and held for the life of the
/// process; `reqwest::Client` pools connections internally so cloning is
/// cheap and no explicit teardown is needed.
#[derive(Debug, Clone)]
pub struct DedalusClient {
    client: Client,
    config: ClientConfig,
}

impl DedalusClient {
    pub fn get_config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a run and wait for the platform to finish executing it.
    ///
    /// The model invocation and any MCP tool dispatch happen on the
    /// platform side; this is a single request/response exchange.
    pub async fn submit_run(&self, request: &RunRequest) -> Result<RunResult, ApiClientError> {
        self.post("/v1/runs", request).await
    }

    /// Executes a POST request against the service API.
    ///
    /// Serializes `request_body` to JSON, attaches bearer auth and any
    /// configured extra headers, and deserializes the response body.
    #[instrument(
        name = "dedalus.post",
        skip_all,
        fields(
            endpoint,
        )
    )]
    async fn post<T, R>(&self, endpoint: &str, request_body: &T) -> Result<R, ApiClientError>
    where
        T: serde::Serialize + fmt::Debug,
        R: DeserializeOwned + fmt::Debug,
    {
        let base_url = self.config.base_url.as_deref().unwrap_or_default();
        let url = format!("{base_url}{endpoint}");
        let span = info_span!("http.request", %url);
        async {
            let mut builder = self.client.post(&url).json(request_body);

            if let Some(key) = &self.config.api_key {
                builder = builder.bearer_auth(key);
            }
            if let Some(headers) = &self.config.extra_headers {
                for (name, value) in headers {
                    builder = builder.header(name, value);
                }
            }

            let response = builder.send().await?;

            let status = response.status();
            debug!(%status, "received response");

            if !status.is_success() {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read error body".into());

                error!(%status, body = %error_text, "request failed");

                return Err(ApiClientError::Api(format!(
                    "Request failed: {status} - {error_text}"
                )));
            }

            let response_text = response
                .text()
                .await
                .map_err(|e| ApiClientError::Api(format!("Failed to read response text: {e}")))?;

            match serde_json::from_str::<R>(&response_text) {
                Ok(parsed) => {
                    trace!(?parsed, "deserialized response");
                    Ok(parsed)
                }
                Err(e) => {
                    error!(%e, raw = %response_text, "deserialization error");
                    Err(ApiClientError::Serialization(format!(
                        "Error decoding response body: {e}. Raw JSON was: '{response_text}'"
                    )))
                }
            }
        }
        .instrument(span)
        .await
    }
}

impl TryFrom<ClientConfig> for DedalusClient {
    type Error = ApiClientError;

    fn try_from(config: ClientConfig) -> Result<Self, Self::Error> {
        if config.api_key.as_ref().map(|s| s.is_empty()).unwrap_or(true) {
            return Err(ApiClientError::Config("Dedalus requires api_key".into()));
        }
        Ok(Self {
            client: Client::new(),
            config,
        })
    }
}

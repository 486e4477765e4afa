use std::collections::HashMap;
use std::env;

use crate::services::dedalus::{client::DedalusClient, models::errors::ApiClientError};

pub const DEFAULT_BASE_URL: &str = "https://api.dedaluslabs.ai";

const API_KEY_VAR: &str = "DEDALUS_API_KEY";
const BASE_URL_VAR: &str = "DEDALUS_BASE_URL";

#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub extra_headers: Option<HashMap<String, String>>,
}

impl ClientConfig {
    /// Read credentials and endpoint from the process environment.
    ///
    /// `DEDALUS_API_KEY` carries the key, `DEDALUS_BASE_URL` optionally
    /// overrides the hosted endpoint. Call `dotenvy::dotenv()` beforehand
    /// if the values live in a `.env` file.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(BASE_URL_VAR).ok(),
            api_key: env::var(API_KEY_VAR).ok(),
            extra_headers: None,
        }
    }
}

pub trait ClientBuilder {
    fn base_url(self, base_url: Option<impl Into<String>>) -> Self;
    fn api_key(self, api_key: Option<impl Into<String>>) -> Self;
    fn extra_headers(self, extra_headers: Option<HashMap<String, String>>) -> Self;
    fn build(self) -> Result<DedalusClient, ApiClientError>;
}

impl ClientBuilder for ClientConfig {
    fn base_url(mut self, base_url: Option<impl Into<String>>) -> Self {
        self.base_url = base_url.map(|s| s.into());
        self
    }

    fn api_key(mut self, api_key: Option<impl Into<String>>) -> Self {
        self.api_key = api_key.map(|s| s.into());
        self
    }

    fn extra_headers(mut self, extra_headers: Option<HashMap<String, String>>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    fn build(self) -> Result<DedalusClient, ApiClientError> {
        DedalusClient::try_from(ClientConfig {
            base_url: self.base_url.or(Some(DEFAULT_BASE_URL.into())),
            api_key: self.api_key,
            extra_headers: self.extra_headers,
        })
    }
}

#[derive(Debug)]
pub enum ApiClientError {
    Request(String),
    Api(String),
    Serialization(String),
    Config(String),
}

impl std::fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiClientError::Request(s) => write!(f, "Request Error: {s}"),
            ApiClientError::Api(s) => write!(f, "API Error: {s}"),
            ApiClientError::Serialization(s) => write!(f, "Serialization Error: {s}"),
            ApiClientError::Config(s) => write!(f, "Config Error: {s}"),
        }
    }
}

impl std::error::Error for ApiClientError {}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self { ApiClientError::Request(err.to_string()) }
}

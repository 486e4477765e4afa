pub(crate) mod services;
pub mod runner;

pub use runner::{Runner, RunnerError};

pub use services::dedalus::models::errors::ApiClientError;
pub use services::dedalus::models::run::{RunRequest, RunResult, RunUsage};
pub use services::dedalus::{ClientBuilder, ClientConfig, DedalusClient};
pub use services::logging::init_default_tracing;

pub mod client;
pub mod client_config;
pub mod models;

pub use client::DedalusClient;
pub use client_config::{ClientBuilder, ClientConfig};

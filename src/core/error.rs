//! Server startup errors

use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load Leptos configuration: {0}")]
    Leptos(#[from] leptos::config::errors::LeptosConfigError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

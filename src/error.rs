use thiserror::Error;

/// Failures inside the fetchers. These never leave a public fetch call:
/// every one is logged and turned into an empty or absent result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected payload: {0}")]
    Payload(String),

    #[error("no champion matches '{0}'")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("{0} is unavailable right now, try again later")]
    Unavailable(String),
}

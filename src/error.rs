use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error in {method} {path}: {message}")]
    Request {
        method: &'static str,
        path: String,
        message: String,
    },
    #[error("Unexpected payload shape: expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Unknown {kind} token: {token}")]
    UnknownToken { kind: &'static str, token: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersoError {
    #[error("Manifest unavailable: {0}")]
    ManifestUnavailable(String),

    #[error("Poem unavailable '{0}': {1}")]
    PoemUnavailable(String, String),

    #[error("Malformed poem '{0}': {1}")]
    MalformedPoem(String, String),

    #[error("Poem not found: {0}")]
    PoemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, VersoError>;

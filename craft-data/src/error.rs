use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error communicating with XIVAPI {0}")]
    XivApiError(#[from] xivapi::Error),
    #[error("IO Error {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

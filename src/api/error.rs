use thiserror::Error;

/// Why a fetch produced no data. Only ever logged; callers see `None`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("API returned code {code}: {status}")]
    Api { code: u16, status: String },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

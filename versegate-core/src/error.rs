use thiserror::Error;

/// Why a verse fetch produced no result. Reported once; never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected http status {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("response contained no verse rows")]
    NoVerses,
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

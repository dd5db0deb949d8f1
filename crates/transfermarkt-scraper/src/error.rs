use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("player id must not be empty")]
    InvalidPlayerId,

    #[error("player not found: {0}")]
    NotFound(String),

    #[error("transfermarkt answered HTTP {0}")]
    Upstream(StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

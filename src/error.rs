use thiserror::Error;

pub type ScrollerResult<T> = Result<T, ScrollerError>;

#[derive(Debug, Error)]
pub enum ScrollerError {
    #[error("invalid interval range: min={min}, max={max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid observer: {0}")]
    InvalidObserver(String),

    #[error("invalid time text: {0}")]
    InvalidTimeText(String),
}

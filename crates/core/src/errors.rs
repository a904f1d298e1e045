use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type TimeResult<T> = Result<T, TimeError>;

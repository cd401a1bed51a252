use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Worker count must be at least 1")]
    NoWorkers,
}

pub type Result<T> = std::result::Result<T, ProbeError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid site configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Site configuration lists no projects")]
    NoProjects,
}

pub type Result<T> = std::result::Result<T, SiteError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema validation failed:\n{}", .0.join("\n"))]
    Schema(Vec<String>),

    #[error("Validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("Items per page must be greater than zero")]
    InvalidPageSize,
}

pub type Result<T> = std::result::Result<T, FolioError>;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("profile {0} not found")]
    ProfileNotFound(String),
    #[error("failed to parse profile {}: {reason}", .path.display())]
    ProfileParse { path: PathBuf, reason: String },
    #[error("tag {0} not found")]
    TagNotFound(String),
    #[error("tag {0} has content of an unsupported shape")]
    UnsupportedTagType(String),
    #[error("substitution error: {0}")]
    Substitution(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

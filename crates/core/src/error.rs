use thiserror::Error;

#[derive(Error, Debug)]
pub enum SigdocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid document: {member}: {reason}")]
    InvalidDocument { member: String, reason: String },
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SigdocError {
    pub(crate) fn invalid(member: impl Into<String>, reason: impl Into<String>) -> Self {
        SigdocError::InvalidDocument {
            member: member.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SigdocError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanitizeError {
    #[error("Potentially malicious content detected: {0}")]
    MaliciousContent(String),
}

pub type Result<T> = std::result::Result<T, SanitizeError>;

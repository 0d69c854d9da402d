use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkdownError {
    #[error("Markdown conversion failed: {0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

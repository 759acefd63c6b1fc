use thiserror::Error;

/// Errors that can occur when checking a charset
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CharsetError {
    #[error("Charset cannot be empty")]
    EmptyCharset,
}

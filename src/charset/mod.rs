//! Charset module split into submodules

mod constants;
mod errors;
mod validation;

pub use constants::DEFAULT_CHARSET;
pub use errors::CharsetError;
pub use validation::validate_charset;

#[cfg(test)]
mod tests;

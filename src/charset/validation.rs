use std::collections::HashSet;

use log::{debug, warn};

use crate::charset::errors::CharsetError;

/// # Errors
///
/// Returns an error if the charset contains no symbols. Duplicate symbols are
/// tolerated; they make some candidates reachable more than once, which
/// wastes work but does not affect correctness, so they only log a warning.
pub fn validate_charset(charset: &str) -> Result<(), CharsetError> {
    debug!("Validating charset with {} symbols", charset.chars().count());

    if charset.is_empty() {
        warn!("Charset is empty");
        return Err(CharsetError::EmptyCharset);
    }

    let mut seen = HashSet::new();
    for symbol in charset.chars() {
        if !seen.insert(symbol) {
            warn!("Charset repeats symbol '{}'", symbol);
        }
    }

    debug!("Charset validation successful");
    Ok(())
}

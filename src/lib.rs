//! Bruteforge - bounded exhaustive string search
//!
//! This library enumerates every string over a configurable charset, shortest
//! first, and tests each candidate against a caller-supplied predicate until
//! one matches or the bounded space is exhausted.

pub mod charset;
pub mod enumerator;
pub mod generator;

// Re-export the main public API
pub use charset::{CharsetError, DEFAULT_CHARSET, validate_charset};
pub use enumerator::{Enumerator, EnumeratorError, SearchConfig};
pub use generator::CandidateIterator;

/// Search for a literal target string over the default charset
///
/// This is a convenience function that creates a default enumerator with
/// lengths `1..=max_length` and matches candidates against `target`.
///
/// # Arguments
///
/// * `target` - The string to search for
/// * `max_length` - Maximum candidate length to try
///
/// # Returns
///
/// * `Some(String)` - The target, once enumeration reaches it
/// * `None` - If the target is not reachable within the bounds
///
/// # Examples
///
/// ```
/// use bruteforge::find_string;
///
/// // Reachable: two symbols from the default charset
/// assert_eq!(find_string("hi", 2), Some("hi".to_string()));
///
/// // Out of range: longer than any candidate the bounds allow
/// assert_eq!(find_string("toolong", 2), None);
/// ```
pub fn find_string(target: &str, max_length: usize) -> Option<String> {
    let enumerator = Enumerator::new(max_length);
    enumerator.search(|candidate| candidate == target)
}

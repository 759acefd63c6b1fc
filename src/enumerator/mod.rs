mod core;
mod errors;

pub use core::{Enumerator, SearchConfig};
pub use errors::EnumeratorError;

pub mod core;
pub mod state;

pub use core::{CandidateIterator, candidate_count};

#[cfg(test)]
mod tests;

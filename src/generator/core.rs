use log::debug;

use super::state::OdometerState;

/// Total number of candidates in the space, saturating at `u128::MAX`.
///
/// This is `symbols^min_length + ... + symbols^max_length`; an inverted
/// length range contributes nothing.
pub fn candidate_count(symbols: usize, min_length: usize, max_length: usize) -> u128 {
    let mut total: u128 = 0;
    for length in min_length..=max_length {
        let Ok(exponent) = u32::try_from(length) else {
            return u128::MAX;
        };
        let per_length = (symbols as u128).checked_pow(exponent).unwrap_or(u128::MAX);
        total = total.saturating_add(per_length);
    }
    total
}

/// Lazy generator of every string over a charset, shortest first.
///
/// Within a fixed length, candidates follow the charset's own order with the
/// rightmost position advancing fastest. The space is never materialized;
/// state is one index vector for the length currently being walked.
#[derive(Debug, Clone)]
pub struct CandidateIterator {
    charset: Vec<char>,
    max_length: usize,
    length: usize,
    state: Option<OdometerState>,
}

impl CandidateIterator {
    pub fn new(charset: &str, min_length: usize, max_length: usize) -> Self {
        let charset: Vec<char> = charset.chars().collect();
        debug!(
            "Generating candidates over {} symbols, lengths {}..={}",
            charset.len(),
            min_length,
            max_length
        );
        Self {
            charset,
            max_length,
            length: min_length,
            state: None,
        }
    }

    fn render(&self, state: &OdometerState) -> String {
        state
            .indices
            .iter()
            .filter_map(|&i| self.charset.get(i).copied())
            .collect()
    }
}

impl Iterator for CandidateIterator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if self.length > self.max_length {
                return None;
            }

            if self.state.is_none() {
                // An empty charset has no tuples of positive length; the
                // single length-0 tuple (the empty string) still exists.
                if self.length > 0 && self.charset.is_empty() {
                    return None;
                }
                let state = OdometerState::new(self.length);
                let candidate = self.render(&state);
                self.state = Some(state);
                return Some(candidate);
            }

            let base = self.charset.len();
            let advanced = match self.state.as_mut() {
                Some(state) => state.advance(base),
                None => false,
            };

            if advanced {
                if let Some(state) = self.state.as_ref() {
                    return Some(self.render(state));
                }
            }

            // Wrapped past the last tuple of this length.
            self.state = None;
            self.length += 1;
        }
    }
}

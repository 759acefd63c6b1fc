use log::{debug, info};

use crate::charset::{DEFAULT_CHARSET, validate_charset};
use crate::enumerator::errors::EnumeratorError;
use crate::generator::{CandidateIterator, candidate_count};

/// Search configuration beyond the required maximum length
pub struct SearchConfig {
    pub min_length: usize,
    pub charset: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

/// Bounded exhaustive searcher over every string a charset can form.
///
/// Configuration is fixed at construction; one instance serves any number of
/// independent searches.
pub struct Enumerator {
    charset: String,
    min_length: usize,
    max_length: usize,
}

impl Enumerator {
    /// Searcher over the default charset with lengths `1..=max_length`.
    pub fn new(max_length: usize) -> Self {
        Self::with_config(max_length, SearchConfig::default())
    }

    /// Searcher with an explicit minimum length and charset.
    ///
    /// Nothing is validated here: `min_length > max_length` leaves the
    /// search space empty, so every search returns `None` without calling
    /// the predicate. Use [`Enumerator::checked`] to reject such
    /// configurations up front instead.
    pub fn with_config(max_length: usize, config: SearchConfig) -> Self {
        Self {
            charset: config.charset,
            min_length: config.min_length,
            max_length,
        }
    }

    /// Strict variant of [`Enumerator::with_config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the charset is empty, `min_length` is zero, or
    /// `min_length` exceeds `max_length`.
    pub fn checked(max_length: usize, config: SearchConfig) -> Result<Self, EnumeratorError> {
        validate_charset(&config.charset)?;
        if config.min_length == 0 {
            return Err(EnumeratorError::ZeroMinLength);
        }
        if config.min_length > max_length {
            return Err(EnumeratorError::InvalidBounds {
                min: config.min_length,
                max: max_length,
            });
        }
        Ok(Self::with_config(max_length, config))
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of candidates a full search would test, saturating at
    /// `u128::MAX`. Always finite, which is what guarantees termination.
    pub fn space_size(&self) -> u128 {
        candidate_count(
            self.charset.chars().count(),
            self.min_length,
            self.max_length,
        )
    }

    fn candidates(&self) -> CandidateIterator {
        CandidateIterator::new(&self.charset, self.min_length, self.max_length)
    }

    /// Test every candidate in order until the predicate accepts one.
    ///
    /// Candidates come shortest first; within a length they follow the
    /// charset's own order with the rightmost position advancing fastest.
    /// Returns the first accepted candidate, or `None` once the space is
    /// exhausted. The predicate runs exactly once per candidate, up to and
    /// including the match.
    ///
    /// The predicate is an ordinary `FnMut(&str) -> bool`, so the historical
    /// runtime checks for "is this callable with one argument" are enforced
    /// by the compiler and need no error path. A predicate that can itself
    /// fail belongs in [`Enumerator::try_search`].
    pub fn search<F>(&self, mut predicate: F) -> Option<String>
    where
        F: FnMut(&str) -> bool,
    {
        info!(
            "Searching {} candidates over {} symbols, lengths {}..={}",
            self.space_size(),
            self.charset.chars().count(),
            self.min_length,
            self.max_length
        );

        let mut tested: u128 = 0;
        for candidate in self.candidates() {
            tested = tested.saturating_add(1);
            if predicate(&candidate) {
                info!(
                    "Match of length {} after {} candidates",
                    candidate.chars().count(),
                    tested
                );
                return Some(candidate);
            }
        }

        debug!("Search space exhausted after {} candidates", tested);
        None
    }

    /// Like [`Enumerator::search`], for predicates that can fail.
    ///
    /// The first `Err` aborts the search immediately and is returned
    /// unchanged; no partial result is kept and the enumerator stays usable
    /// for further searches.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the predicate returns.
    pub fn try_search<F, E>(&self, mut predicate: F) -> Result<Option<String>, E>
    where
        F: FnMut(&str) -> Result<bool, E>,
    {
        for candidate in self.candidates() {
            if predicate(&candidate)? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}

//! Random content collaborators: the primitive provider, the body text
//! generator and the session uniqueness ledger they share.

pub mod content;
pub mod pattern;
pub mod unique;

pub use content::{ContentGenerator, ParagraphContentGenerator};
pub use unique::UniqueLedger;

use crate::errors::ContentError;

/// Source of randomized primitives used to compose entities.
///
/// Implementations own the session [`UniqueLedger`]; the `unique_*` methods
/// consult it so callers never keep their own duplicate sets.
pub trait ContentProvider {
    fn paragraph(&mut self) -> String;

    /// Person name.
    fn name(&mut self) -> String;

    fn email(&mut self) -> String;

    /// Short marketing phrase used for category, tag and product names.
    fn catch_phrase(&mut self) -> String;

    /// Uniform integer in `min..=max`.
    fn number_between(&mut self, min: i64, max: i64) -> Result<i64, ContentError>;

    /// `true` with the given percent chance.
    fn boolean(&mut self, chance_percent: u8) -> bool;

    /// Uniform index in `0..len`.
    fn random_index(&mut self, len: usize) -> Result<usize, ContentError>;

    /// `count` distinct indices in `0..len`, drawn without replacement.
    fn random_indices(&mut self, len: usize, count: usize) -> Result<Vec<usize>, ContentError>;

    fn shuffle(&mut self, value: &str) -> String;

    /// Expand a `#`/`?`/`*` mask, see [`pattern::expand_pattern`].
    fn pattern(&mut self, pattern: &str) -> Result<String, ContentError>;

    fn ledger_mut(&mut self) -> &mut UniqueLedger;

    /// Catch phrase not yet handed out in `scope` this session.
    fn unique_catch_phrase(&mut self, scope: &str) -> Result<String, ContentError> {
        claim_unique(self, scope, |provider| Ok(provider.catch_phrase()))
    }

    /// Pattern expansion not yet handed out in `scope` this session.
    fn unique_pattern(&mut self, scope: &str, pattern: &str) -> Result<String, ContentError> {
        claim_unique(self, scope, |provider| provider.pattern(pattern))
    }

    fn reset_unique(&mut self) {
        self.ledger_mut().reset();
    }
}

/// Draw from `next` until it yields a value not yet claimed in `scope`.
pub fn claim_unique<P, F>(provider: &mut P, scope: &str, mut next: F) -> Result<String, ContentError>
where
    P: ContentProvider + ?Sized,
    F: FnMut(&mut P) -> Result<String, ContentError>,
{
    let attempts = provider.ledger_mut().max_attempts();
    for _ in 0..attempts {
        let value = next(provider)?;
        if provider.ledger_mut().claim(scope, &value) {
            return Ok(value);
        }
    }
    Err(ContentError::UniqueExhausted {
        scope: scope.to_string(),
        attempts,
    })
}

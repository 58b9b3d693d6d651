use std::collections::{BTreeMap, HashSet};

use crate::config::DEFAULT_UNIQUE_MAX_ATTEMPTS;

/// Session-scoped record of values already handed out, keyed by scope.
#[derive(Debug, Clone)]
pub struct UniqueLedger {
    seen: BTreeMap<String, HashSet<String>>,
    max_attempts: u32,
}

impl Default for UniqueLedger {
    fn default() -> Self {
        Self::new(DEFAULT_UNIQUE_MAX_ATTEMPTS)
    }
}

impl UniqueLedger {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            seen: BTreeMap::new(),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Records `value` under `scope`; returns false if it was already taken.
    pub fn claim(&mut self, scope: &str, value: &str) -> bool {
        self.seen
            .entry(scope.to_string())
            .or_default()
            .insert(value.to_string())
    }

    pub fn contains(&self, scope: &str, value: &str) -> bool {
        self.seen
            .get(scope)
            .is_some_and(|values| values.contains(value))
    }

    pub fn len(&self, scope: &str) -> usize {
        self.seen.get(scope).map_or(0, HashSet::len)
    }

    /// Forget every claimed value. Called at session start.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_are_scoped() {
        let mut ledger = UniqueLedger::new(3);
        assert!(ledger.claim("name", "Alpha"));
        assert!(!ledger.claim("name", "Alpha"));
        assert!(ledger.claim("sku", "Alpha"));
        assert_eq!(ledger.len("name"), 1);
        assert!(ledger.contains("sku", "Alpha"));
    }

    #[test]
    fn reset_forgets_values() {
        let mut ledger = UniqueLedger::default();
        ledger.claim("name", "Alpha");
        ledger.reset();
        assert!(!ledger.contains("name", "Alpha"));
        assert!(ledger.claim("name", "Alpha"));
    }

    #[test]
    fn zero_attempts_is_raised_to_one() {
        assert_eq!(UniqueLedger::new(0).max_attempts(), 1);
    }
}

//! Agent State
//!
//! Holds one scanning run's configuration: which agent this is, how chatty
//! it should be, and the ordered list of matchers to apply. The state is the
//! single source of truth the scanner queries when deciding what patterns to
//! test against input text.
//!
//! Usage is build-then-freeze: setup code appends matchers through `&mut`,
//! the scanning phase only ever holds `&AgentState`, so the borrow checker
//! rules out mutation while a scan is reading.

use crate::matcher::RegexMatcher;

/// Per-run state for one scanning agent.
#[derive(Clone, Debug)]
pub struct AgentState {
    agent_id: i32,
    verbosity: i32,
    matchers: Vec<RegexMatcher>,
}

impl AgentState {
    /// Create a state with no matchers. `agent_id` and `verbosity` are
    /// opaque values chosen by the caller; nothing here validates them.
    pub fn new(agent_id: i32, verbosity: i32) -> Self {
        Self {
            agent_id,
            verbosity,
            matchers: Vec::new(),
        }
    }

    pub fn agent_id(&self) -> i32 {
        self.agent_id
    }

    pub fn verbosity(&self) -> i32 {
        self.verbosity
    }

    /// Append a matcher. Matchers are applied in the order they were added;
    /// there is no dedup, and a matcher can never be removed or reordered.
    pub fn add_matcher(&mut self, matcher: RegexMatcher) {
        self.matchers.push(matcher);
    }

    /// The matchers in insertion order. This is a live view, not a snapshot:
    /// calling it again after further `add_matcher` calls reflects the
    /// additions.
    pub fn regex_matchers(&self) -> &[RegexMatcher] {
        &self.matchers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchType;

    fn matcher(id: &str, pattern: &str) -> RegexMatcher {
        RegexMatcher::new(id, MatchType::Statement, pattern).unwrap()
    }

    #[test]
    fn test_construct_stores_id_and_verbosity() {
        let state = AgentState::new(7, 2);
        assert_eq!(state.agent_id(), 7);
        assert_eq!(state.verbosity(), 2);
        assert!(state.regex_matchers().is_empty());
    }

    #[test]
    fn test_any_integer_values_accepted() {
        let state = AgentState::new(-3, 0);
        assert_eq!(state.agent_id(), -3);
        assert_eq!(state.verbosity(), 0);
    }

    #[test]
    fn test_add_matcher_preserves_order() {
        let mut state = AgentState::new(1, 0);
        state.add_matcher(matcher("gpl", "GPL-pattern"));
        state.add_matcher(matcher("mit", "MIT-pattern"));

        let matchers = state.regex_matchers();
        assert_eq!(matchers.len(), 2);
        assert_eq!(matchers[0].id(), "gpl");
        assert_eq!(matchers[1].id(), "mit");
    }

    #[test]
    fn test_repeated_reads_are_idempotent() {
        let mut state = AgentState::new(1, 0);
        state.add_matcher(matcher("a", "a"));

        let first: Vec<String> = state.regex_matchers().iter().map(|m| m.id().into()).collect();
        let second: Vec<String> = state.regex_matchers().iter().map(|m| m.id().into()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_view_is_live_not_snapshotted() {
        let mut state = AgentState::new(1, 0);
        assert_eq!(state.regex_matchers().len(), 0);

        state.add_matcher(matcher("a", "a"));
        assert_eq!(state.regex_matchers().len(), 1);

        state.add_matcher(matcher("b", "b"));
        assert_eq!(state.regex_matchers().len(), 2);
    }

    #[test]
    fn test_duplicates_accepted_silently() {
        let mut state = AgentState::new(1, 0);
        state.add_matcher(matcher("dup", "same"));
        state.add_matcher(matcher("dup", "same"));
        assert_eq!(state.regex_matchers().len(), 2);
    }

    #[test]
    fn test_stored_matcher_independent_of_caller_copy() {
        let mut state = AgentState::new(1, 0);
        let mut local = matcher("gpl", "GPL-pattern");
        state.add_matcher(local.clone());

        // Rebinding the caller's copy must not affect the stored sequence.
        local = matcher("bsd", "BSD-pattern");
        assert_eq!(local.id(), "bsd");
        assert_eq!(state.regex_matchers()[0].id(), "gpl");
        assert_eq!(state.regex_matchers()[0].pattern(), "GPL-pattern");
    }
}

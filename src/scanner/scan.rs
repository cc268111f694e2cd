//! Text Scanning
//!
//! Applies an agent's matchers to a block of text. Matchers run strictly in
//! the order they were added to the state; what that order means (priority,
//! first-match-wins) is the caller's business, the scan just labels each
//! finding with the matcher that produced it.

use tracing::{debug, trace};

use crate::state::AgentState;
use crate::types::CopyrightMatch;

/// Scan `text` with every matcher in `state`, in insertion order.
///
/// Hits from one matcher are in ascending offset order. Hits whose content
/// cleans down to nothing are dropped. No dedup is performed across matchers
/// that hit the same span.
pub fn scan_text(state: &AgentState, text: &str) -> Vec<CopyrightMatch> {
    let mut matches = Vec::new();

    for matcher in state.regex_matchers() {
        let hits = matcher.find_all(text);
        debug!(
            matcher = matcher.id(),
            hits = hits.len(),
            "matcher applied"
        );

        for hit in hits {
            let content = super::clean_match(&hit.text);
            if content.is_empty() {
                trace!(matcher = matcher.id(), start = hit.start, "hit cleaned to empty, dropped");
                continue;
            }
            matches.push(CopyrightMatch {
                matcher_id: matcher.id().to_string(),
                match_type: matcher.match_type(),
                start: hit.start,
                end: hit.end,
                content,
            });
        }
    }

    matches
}

//! Regex Matcher
//!
//! A matcher descriptor pairs a compiled regex with an identifier and a
//! match type. Descriptors are immutable once built and cheap to clone
//! (`regex::Regex` is internally reference-counted), so they can be passed
//! by value into the agent state.

use regex::Regex;
use thiserror::Error;

use crate::types::MatchType;

#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("invalid regex pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
    #[error("invalid matcher spec '{0}': expected [id[:type]=]pattern")]
    BadSpec(String),
}

/// A raw, uncleaned hit: byte offsets plus the matched text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawHit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// One pattern to test against scanned content.
#[derive(Clone, Debug)]
pub struct RegexMatcher {
    id: String,
    match_type: MatchType,
    pattern: String,
    regex: Regex,
}

impl RegexMatcher {
    /// Compile `pattern` into a matcher. The only failure mode is a regex
    /// that does not compile.
    pub fn new(id: &str, match_type: MatchType, pattern: &str) -> Result<Self, MatcherError> {
        let regex = Regex::new(pattern).map_err(|e| MatcherError::BadPattern {
            pattern: pattern.to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: id.to_string(),
            match_type,
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Return every non-overlapping hit in `text`, in ascending offset order.
    pub fn find_all(&self, text: &str) -> Vec<RawHit> {
        self.regex
            .find_iter(text)
            .map(|m| RawHit {
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
            })
            .collect()
    }
}

// ─── CLI Matcher Specs ───────────────────────────────────────────

/// Parse a user matcher spec of the form `[id[:type]=]pattern`.
///
/// Without a prefix the whole spec is the pattern, with id `user` and type
/// `statement`. The prefix is only recognized when the text before the first
/// `=` looks like an identifier, so patterns containing `=` still parse.
pub fn parse_matcher_spec(spec: &str) -> Result<RegexMatcher, MatcherError> {
    if spec.is_empty() {
        return Err(MatcherError::BadSpec(spec.to_string()));
    }

    let (id, match_type, pattern) = match spec.split_once('=') {
        Some((head, rest)) if is_spec_prefix(head) => {
            let (id, type_name) = match head.split_once(':') {
                Some((id, type_name)) => (id, Some(type_name)),
                None => (head, None),
            };
            let match_type = match type_name {
                Some(name) => {
                    MatchType::parse(name).ok_or_else(|| MatcherError::BadSpec(spec.to_string()))?
                }
                None => MatchType::Statement,
            };
            (id, match_type, rest)
        }
        _ => ("user", MatchType::Statement, spec),
    };

    if pattern.is_empty() {
        return Err(MatcherError::BadSpec(spec.to_string()));
    }

    RegexMatcher::new(id, match_type, pattern)
}

/// Returns `true` if `head` is usable as the `id[:type]` prefix of a spec.
fn is_spec_prefix(head: &str) -> bool {
    let (id, type_name) = match head.split_once(':') {
        Some((id, type_name)) => (id, Some(type_name)),
        None => (head, None),
    };

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return false;
    }

    match type_name {
        Some(name) => !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()),
        None => true,
    }
}

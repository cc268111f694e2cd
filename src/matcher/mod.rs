//! Matcher Module
//!
//! Regex matcher descriptors: the built-in pattern set and user-supplied
//! matchers parsed from CLI specs.

mod defaults;
mod regex_matcher;

pub use defaults::{default_matchers, DEFAULT_PATTERNS};
pub use regex_matcher::{parse_matcher_spec, MatcherError, RawHit, RegexMatcher};

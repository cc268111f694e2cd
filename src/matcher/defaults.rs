//! Default Matchers
//!
//! The built-in pattern set: copyright statements, email addresses, URLs,
//! and author attributions. Patterns deliberately over-match a little and
//! rely on the cleanup pass to trim the result; a missed statement is worse
//! than a noisy one.

use crate::types::MatchType;

use super::RegexMatcher;

/// Copyright statements: the word "copyright", a `(c)` followed by a year,
/// or the © sign, plus the rest of the line (capped).
const STATEMENT_PATTERN: &str =
    r"(?i)(\bcopyright(s)?\b|\(c\)\s*(19|20)\d{2}|©)[^\n]{0,200}";

/// Email addresses, optionally wrapped in `<...>` by the cleanup pass later.
const EMAIL_PATTERN: &str =
    r"[A-Za-z0-9._%+-]{1,100}@[A-Za-z0-9.-]{1,100}\.[A-Za-z]{2,6}";

/// http/https/ftp/ftps URLs.
const URL_PATTERN: &str = r#"(?i)\b(ht|f)tps?://[^\s<>"')]{4,500}"#;

/// Author attributions: "author:", "written by", and similar lead-ins.
const AUTHOR_PATTERN: &str =
    r"(?i)\b(authors?\s*[:=]|written\s+by|developed\s+by|maintained\s+by|contributed\s+by)[^\n]{0,200}";

/// (id, type, pattern) for every built-in matcher, in the order they are
/// applied.
pub const DEFAULT_PATTERNS: [(&str, MatchType, &str); 4] = [
    ("copyright", MatchType::Statement, STATEMENT_PATTERN),
    ("email", MatchType::Email, EMAIL_PATTERN),
    ("url", MatchType::Url, URL_PATTERN),
    ("author", MatchType::Author, AUTHOR_PATTERN),
];

/// Build the built-in matchers for the requested types, preserving the
/// `DEFAULT_PATTERNS` order.
pub fn default_matchers(types: &[MatchType]) -> Vec<RegexMatcher> {
    DEFAULT_PATTERNS
        .iter()
        .filter(|(_, mt, _)| types.contains(mt))
        .filter_map(|(id, mt, pattern)| RegexMatcher::new(id, *mt, pattern).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_default_patterns_compile() {
        // filter_map would silently drop a broken built-in; catch it here.
        let all = default_matchers(&MatchType::all());
        assert_eq!(all.len(), DEFAULT_PATTERNS.len());
    }

    #[test]
    fn test_default_matchers_filters_by_type() {
        let only_email = default_matchers(&[MatchType::Email]);
        assert_eq!(only_email.len(), 1);
        assert_eq!(only_email[0].id(), "email");
    }

    #[test]
    fn test_statement_pattern_hits_common_forms() {
        let m = &default_matchers(&[MatchType::Statement])[0];
        assert!(!m.find_all("Copyright 2014 Siemens AG").is_empty());
        assert!(!m.find_all("(c) 2020 Example Corp").is_empty());
        assert!(!m.find_all("© 1999 Someone").is_empty());
        assert!(m.find_all("no statement here").is_empty());
    }

    #[test]
    fn test_email_pattern() {
        let m = &default_matchers(&[MatchType::Email])[0];
        let hits = m.find_all("Contact: jane.doe+dev@example.co.uk for details");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "jane.doe+dev@example.co.uk");
    }

    #[test]
    fn test_url_pattern() {
        let m = &default_matchers(&[MatchType::Url])[0];
        let hits = m.find_all("See https://www.gnu.org/licenses/gpl-2.0.html for terms");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].text.starts_with("https://www.gnu.org"));
        // trailing prose is not part of the URL
        assert!(!hits[0].text.contains("for"));
    }

    #[test]
    fn test_author_pattern() {
        let m = &default_matchers(&[MatchType::Author])[0];
        assert!(!m.find_all("Author: Johannes Najjar").is_empty());
        assert!(!m.find_all("written by a contributor").is_empty());
        assert!(m.find_all("authorized personnel only").is_empty());
    }
}

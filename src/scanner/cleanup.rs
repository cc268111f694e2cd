//! Match Cleanup
//!
//! Raw regex hits pick up whatever junk surrounds a statement in real files:
//! comment decoration, control characters, half a line of dashes. This pass
//! trims a hit down to the text worth reporting.

/// Cleaned match content is capped at this many bytes.
pub const MAX_MATCH_LEN: usize = 256;

/// Characters stripped from the ends of a hit after whitespace trimming.
const EDGE_JUNK: &[char] = &['*', '-', '=', '#', '/', '\\', '|', '_', ',', ';', ':', '.'];

/// Normalize a raw hit into printable, single-line content.
///
/// Control characters become spaces, whitespace runs collapse to one space,
/// leading/trailing comment decoration is stripped, and the result is capped
/// at [`MAX_MATCH_LEN`] bytes (on a char boundary). Returns an empty string
/// when nothing printable is left.
pub fn clean_match(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len().min(MAX_MATCH_LEN));
    let mut last_was_space = true;

    for c in raw.chars() {
        let c = if c.is_control() || c == '\u{feff}' { ' ' } else { c };
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }

    let trimmed = out
        .trim_matches(|c: char| c.is_whitespace() || EDGE_JUNK.contains(&c))
        .to_string();

    truncate_at_boundary(trimmed, MAX_MATCH_LEN)
}

fn truncate_at_boundary(mut s: String, max: usize) -> String {
    if s.len() <= max {
        return s;
    }
    let mut cut = max;
    while cut > 0 && !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s.truncate(cut);
    s
}

//! Scanner Module
//!
//! The scanning loop that consumes the agent state: apply matchers to text,
//! clean up raw hits, and walk files and directories.

mod cleanup;
mod files;
mod scan;

pub use cleanup::{clean_match, MAX_MATCH_LEN};
pub use files::scan_path;
pub use scan::scan_text;

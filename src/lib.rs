//! Copyscan -- Copyright Scanning Agent
//!
//! Applies an ordered set of regex matchers to file content to find
//! copyright statements, email addresses, URLs, and author attributions.

pub mod types;
pub mod config;
pub mod matcher;
pub mod scanner;
pub mod state;
pub mod report;

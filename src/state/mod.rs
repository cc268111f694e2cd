//! Agent State Module
//!
//! Per-run agent state plus the SQLite-backed findings store.

mod agent_state;
mod database;
mod schema;

pub use agent_state::AgentState;
pub use database::Database;
pub use schema::{CREATE_TABLES, SCHEMA_VERSION};

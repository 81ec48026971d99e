/// Notelog REST client
///
/// A thin wrapper over the research-log endpoint contract: list rows, append
/// a row, merge-update by id, delete by id. The base URL is injected by the
/// caller (relay for browsers, upstream directly elsewhere); the client is
/// topology-agnostic.

pub mod client;
pub mod error;
pub mod parse;

// Re-export key types
pub use client::ResearchLogClient;
pub use error::{ClientError, Result};
pub use notelog_core::{CreateResearchLogInput, FilterOptions, ResearchLog, UpdateResearchLogInput};

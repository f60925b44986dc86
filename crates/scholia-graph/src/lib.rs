//! scholia-graph — Graph store access layer.
//!
//! Wraps the process-wide Neo4j handle behind the injectable [`GraphStore`]
//! trait so the query and ingestion layers can be exercised against a test
//! double. All statements are declarative pattern matches with bound
//! parameters; statement text never embeds caller-supplied values.

pub mod client;
pub mod statement;
pub mod store;
#[cfg(feature = "test-utils")]
pub mod testutil;

pub use client::Neo4jStore;
pub use statement::CypherStatement;
pub use store::GraphStore;

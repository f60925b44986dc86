//! The injectable store-client interface.

use async_trait::async_trait;
use scholia_common::{Row, StoreError};

use crate::statement::CypherStatement;

/// A graph store that accepts one pattern-match statement per call and
/// returns the matched rows in store order.
///
/// Zero rows is a successful outcome, distinguishable from an execution
/// error. Implementations perform no locking of their own; cross-request
/// concurrency control is the store's concern.
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn run(&self, stmt: &CypherStatement) -> Result<Vec<Row>, StoreError>;
}

//! Neo4j-backed store implementation.

use async_trait::async_trait;
use neo4rs::{BoltBoolean, BoltFloat, BoltInteger, BoltNull, BoltString, BoltType, Graph};
use serde_json::Value;
use tracing::debug;

use scholia_common::{Row, StoreError};

use crate::statement::CypherStatement;
use crate::store::GraphStore;

/// Process-lifetime Neo4j handle. Cloning shares the underlying connection
/// pool; the pool is released when the last clone is dropped.
#[derive(Clone)]
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    /// Connect to a Neo4j instance over Bolt.
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, StoreError> {
        let graph = Graph::new(uri, user, password)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;
        debug!(uri, user, "Connected to graph store");
        Ok(Self { graph })
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn run(&self, stmt: &CypherStatement) -> Result<Vec<Row>, StoreError> {
        let mut q = neo4rs::query(stmt.text());
        for (key, value) in stmt.params() {
            q = q.param(key.as_str(), to_bolt(value));
        }

        let mut stream = self
            .graph
            .execute(q)
            .await
            .map_err(|e| StoreError::Execution(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(row) = stream
            .next()
            .await
            .map_err(|e| StoreError::Execution(e.to_string()))?
        {
            let row: Row = row.to().map_err(|e| StoreError::Decode(e.to_string()))?;
            rows.push(row);
        }
        Ok(rows)
    }
}

/// Convert a JSON parameter value into the driver's wire type.
fn to_bolt(value: &Value) -> BoltType {
    match value {
        Value::Null => BoltType::Null(BoltNull),
        Value::Bool(b) => BoltType::Boolean(BoltBoolean::new(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => BoltType::Integer(BoltInteger::new(i)),
            None => BoltType::Float(BoltFloat::new(n.as_f64().unwrap_or(0.0))),
        },
        Value::String(s) => BoltType::String(BoltString::new(s)),
        Value::Array(items) => items.iter().map(to_bolt).collect::<Vec<_>>().into(),
        // Templates never bind nested objects; stringify rather than drop.
        Value::Object(_) => BoltType::String(BoltString::new(&value.to_string())),
    }
}

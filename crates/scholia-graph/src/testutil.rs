//! In-memory store double for tests.
//!
//! Records every statement it receives and replays scripted responses in
//! order. Once the script is exhausted every call succeeds with zero rows.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use scholia_common::{Row, StoreError};

use crate::statement::CypherStatement;
use crate::store::GraphStore;

#[derive(Default)]
pub struct ScriptedStore {
    responses: Mutex<VecDeque<Result<Vec<Row>, StoreError>>>,
    statements: Mutex<Vec<CypherStatement>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn push_rows(&self, rows: Vec<Row>) {
        self.responses.lock().unwrap().push_back(Ok(rows));
    }

    /// Queue an execution failure.
    pub fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(StoreError::Execution(message.to_string())));
    }

    /// Every statement run so far, in submission order.
    pub fn recorded(&self) -> Vec<CypherStatement> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphStore for ScriptedStore {
    async fn run(&self, stmt: &CypherStatement) -> Result<Vec<Row>, StoreError> {
        self.statements.lock().unwrap().push(stmt.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Build a single-column row, handy for scripting results.
pub fn row(pairs: &[(&str, serde_json::Value)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

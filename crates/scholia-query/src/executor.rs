//! Sequential query execution with per-query failure isolation.

use scholia_common::QueryOutcome;
use scholia_graph::GraphStore;
use tracing::{debug, warn};

use crate::orchestrator::PlannedQuery;

/// Run each planned query in order. A store-level failure on one query is
/// logged and skipped; the batch continues and no error escapes. Successes
/// keep their input order, so the outcome list is at most as long as the
/// plan.
pub async fn execute_queries(
    store: &dyn GraphStore,
    planned: Vec<PlannedQuery>,
) -> Vec<QueryOutcome> {
    let mut outcomes = Vec::with_capacity(planned.len());

    for query in planned {
        match store.run(&query.statement).await {
            Ok(rows) => {
                debug!(
                    entity = %query.entity.name,
                    intent = %query.intent,
                    rows = rows.len(),
                    "Query executed"
                );
                outcomes.push(QueryOutcome {
                    entity: query.entity,
                    intent: query.intent,
                    results: rows,
                });
            }
            Err(e) => {
                warn!(
                    entity = %query.entity.name,
                    intent = %query.intent,
                    error = %e,
                    "Query execution failed, skipping"
                );
            }
        }
    }

    outcomes
}

//! scholia-query — Deterministic query generation and dispatch.
//!
//! The request flow: the orchestrator resolves extractor output into
//! (entity, intent) pairs, the keyword classifier maps each intent phrase to
//! a canonical category, the dispatcher binds the (type, category) template,
//! and the executor runs the batch against the graph store. Every step is
//! strictly sequential. No failure in this path is fatal: bad pairs degrade
//! to fewer or zero results.

pub mod dispatch;
pub mod executor;
pub mod intent;
pub mod orchestrator;
pub mod render;

pub use dispatch::dispatch;
pub use executor::execute_queries;
pub use intent::{classify, IntentCategory};
pub use orchestrator::{plan_queries, PlannedQuery};
pub use render::render_outcomes;

//! scholia-ingestion — Builds the scholarly knowledge graph from a JSON
//! corpus of article records.
//!
//! The pipeline is an idempotent batch: every node write is a MERGE on the
//! record's identity key and every edge write is a MERGE on
//! (source, type, target), so re-ingesting an unchanged corpus leaves the
//! graph's node and edge sets untouched.

pub mod models;
pub mod pipeline;

pub use models::{ArticleRecord, AuthorRecord};
pub use pipeline::{load_corpus, GraphIngestion, IngestSummary};

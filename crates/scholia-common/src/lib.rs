//! scholia-common — Shared types, errors, and contracts used across all Scholia crates.

pub mod error;
pub mod entities;

pub use entities::{Analysis, EntityRecord, EntityType, IntentPair, QueryOutcome, Row};
pub use error::{Result, ScholiaError, StoreError};

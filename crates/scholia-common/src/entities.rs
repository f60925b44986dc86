/// Contract types exchanged with the upstream extractor and the downstream
/// formatter. These are Rust representations of the fixed JSON shapes; they
/// are produced per request and never persisted.

use serde::{Deserialize, Serialize};

/// A result row: column alias → value, as returned by the graph store.
pub type Row = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Entity types
// ---------------------------------------------------------------------------

/// The seven node labels queries can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Author,
    Article,
    Journal,
    Discipline,
    Topic,
    Method,
    Scenario,
}

impl EntityType {
    /// Parse an extractor-supplied type label. Anything outside the seven
    /// supported labels yields `None` and the pair is dropped downstream.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Author"     => Some(EntityType::Author),
            "Article"    => Some(EntityType::Article),
            "Journal"    => Some(EntityType::Journal),
            "Discipline" => Some(EntityType::Discipline),
            "Topic"      => Some(EntityType::Topic),
            "Method"     => Some(EntityType::Method),
            "Scenario"   => Some(EntityType::Scenario),
            _            => None,
        }
    }

    /// The node label as it appears in the graph.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Author     => "Author",
            EntityType::Article    => "Article",
            EntityType::Journal    => "Journal",
            EntityType::Discipline => "Discipline",
            EntityType::Topic      => "Topic",
            EntityType::Method     => "Method",
            EntityType::Scenario   => "Scenario",
        }
    }
}

// ---------------------------------------------------------------------------
// Upstream extractor contract
// ---------------------------------------------------------------------------

/// One recognized entity. The type is kept as the raw extractor label so an
/// unsupported label degrades to a dropped pair instead of a parse failure
/// for the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
}

/// One (entity, intent phrase) pair. Either field may be missing or empty;
/// such pairs are silently dropped by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPair {
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
}

/// The full extractor output for one question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub entities: Vec<EntityRecord>,
    #[serde(default)]
    pub intents: Vec<IntentPair>,
}

// ---------------------------------------------------------------------------
// Downstream formatter contract
// ---------------------------------------------------------------------------

/// One executed query's result set, tagged with its origin. An empty
/// `results` list means "no information", not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub entity: EntityRecord,
    pub intent: String,
    pub results: Vec<Row>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_round_trips_through_label() {
        for label in ["Author", "Article", "Journal", "Discipline", "Topic", "Method", "Scenario"] {
            let ty = EntityType::from_label(label).unwrap();
            assert_eq!(ty.as_str(), label);
        }
        assert_eq!(EntityType::from_label("Organization"), None);
        assert_eq!(EntityType::from_label("author"), None); // labels are case-sensitive
    }

    #[test]
    fn analysis_tolerates_incomplete_pairs() {
        let raw = r#"{
            "entities": [{"name": "陈钢", "type": "Author"}],
            "intents": [{"entity": "陈钢"}, {"intent": "查询论文"}, {}]
        }"#;
        let analysis: Analysis = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.entities.len(), 1);
        assert_eq!(analysis.intents.len(), 3);
        assert_eq!(analysis.intents[0].intent, None);
        assert_eq!(analysis.intents[1].entity, None);
    }
}

//! Multi-intent orchestration.
//!
//! Resolves the extractor's entities and (entity, intent) pairs into planned
//! queries. Pairs that cannot be resolved (missing fields, unknown entity,
//! classification miss, unsupported template) are dropped silently; the
//! plan may legitimately be empty.

use std::collections::HashMap;

use scholia_common::{Analysis, EntityRecord};
use scholia_graph::CypherStatement;

use crate::{dispatch, intent};

/// A bound template tagged with its origin, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedQuery {
    pub entity: EntityRecord,
    pub intent: String,
    pub statement: CypherStatement,
}

/// Plan queries for every resolvable pair, preserving input order among
/// survivors.
pub fn plan_queries(analysis: &Analysis) -> Vec<PlannedQuery> {
    // Last write wins on name collision.
    let mut lookup: HashMap<&str, &EntityRecord> = HashMap::new();
    for entity in &analysis.entities {
        lookup.insert(entity.name.as_str(), entity);
    }

    let mut planned = Vec::new();
    for pair in &analysis.intents {
        let (Some(entity_name), Some(phrase)) = (pair.entity.as_deref(), pair.intent.as_deref())
        else {
            continue;
        };
        if entity_name.is_empty() || phrase.is_empty() {
            continue;
        }
        let Some(entity) = lookup.get(entity_name) else {
            continue;
        };
        let Some(category) = intent::classify(&entity.entity_type, phrase) else {
            continue;
        };
        let Some(statement) = dispatch::dispatch(entity, category) else {
            continue;
        };
        planned.push(PlannedQuery {
            entity: (*entity).clone(),
            intent: phrase.to_string(),
            statement,
        });
    }
    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholia_common::IntentPair;

    fn entity(name: &str, type_label: &str) -> EntityRecord {
        EntityRecord {
            name: name.to_string(),
            entity_type: type_label.to_string(),
        }
    }

    fn pair(entity: &str, intent: &str) -> IntentPair {
        IntentPair {
            entity: Some(entity.to_string()),
            intent: Some(intent.to_string()),
        }
    }

    #[test]
    fn unknown_entity_is_dropped_and_the_rest_survive() {
        let analysis = Analysis {
            entities: vec![entity("陈钢", "Author")],
            intents: vec![
                pair("王某", "查询论文列表"), // not in the entity list
                pair("陈钢", "查询合作学者"),
            ],
        };
        let planned = plan_queries(&analysis);
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].entity.name, "陈钢");
        assert_eq!(planned[0].intent, "查询合作学者");
    }

    #[test]
    fn incomplete_and_unclassifiable_pairs_are_dropped() {
        let analysis = Analysis {
            entities: vec![entity("陈钢", "Author"), entity("深度学习", "Topic")],
            intents: vec![
                IntentPair { entity: None, intent: Some("查询论文".into()) },
                IntentPair { entity: Some("陈钢".into()), intent: None },
                pair("陈钢", ""),
                pair("陈钢", "今天天气如何"),   // classification miss
                pair("深度学习", "相关论文有哪些"),
            ],
        };
        let planned = plan_queries(&analysis);
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].entity.name, "深度学习");
    }

    #[test]
    fn survivors_keep_input_order() {
        let analysis = Analysis {
            entities: vec![entity("陈钢", "Author"), entity("深度学习", "Topic")],
            intents: vec![
                pair("深度学习", "相关论文"),
                pair("陈钢", "合作学者"),
                pair("陈钢", "发表的论文"),
            ],
        };
        let planned = plan_queries(&analysis);
        let order: Vec<&str> = planned.iter().map(|p| p.intent.as_str()).collect();
        assert_eq!(order, ["相关论文", "合作学者", "发表的论文"]);
    }

    #[test]
    fn name_collision_resolves_to_the_last_entity() {
        let analysis = Analysis {
            entities: vec![entity("人工智能", "Topic"), entity("人工智能", "Discipline")],
            intents: vec![pair("人工智能", "相关论文")],
        };
        let planned = plan_queries(&analysis);
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].entity.entity_type, "Discipline");
        assert!(planned[0].statement.text().contains("(d:Discipline)"));
    }

    #[test]
    fn empty_plan_is_legitimate() {
        assert!(plan_queries(&Analysis::default()).is_empty());
    }
}

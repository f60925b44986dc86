//! Query template dispatch.
//!
//! Two-level lookup: entity type → intent category → one fixed
//! pattern-match template. Every template binds the entity name (or the
//! containment pattern derived from it) as a parameter; statement text never
//! embeds caller-supplied values.
//!
//! Matching policy: Author by exact equality on either name field; every
//! other type by case-insensitive containment on its name field, with the
//! entity name regex-escaped before it enters the pattern.

use scholia_common::{EntityRecord, EntityType};
use scholia_graph::CypherStatement;

use crate::intent::IntentCategory;

/// Bind the template for (entity type, category), or `None` when the pair
/// has no defined template. Pure and deterministic.
pub fn dispatch(entity: &EntityRecord, category: IntentCategory) -> Option<CypherStatement> {
    let entity_type = EntityType::from_label(&entity.entity_type)?;
    let name = entity.name.as_str();
    match entity_type {
        EntityType::Author => author_query(name, category),
        EntityType::Article => article_query(name, category),
        EntityType::Topic => topic_query(name, category),
        EntityType::Journal => journal_query(name, category),
        EntityType::Discipline => discipline_query(name, category),
        EntityType::Method => method_query(name, category),
        EntityType::Scenario => scenario_query(name, category),
    }
}

/// Case-insensitive containment pattern with the name matched literally.
fn containment_pattern(name: &str) -> String {
    format!("(?i).*{}.*", regex::escape(name))
}

// ---------------------------------------------------------------------------
// Author: exact equality on either name field
// ---------------------------------------------------------------------------

fn author_query(name: &str, category: IntentCategory) -> Option<CypherStatement> {
    let text = match category {
        IntentCategory::Topics => {
            "MATCH (a:Author)-[:PUBLISH]->(p:Article)-[:INVOLVE]->(t:Topic)
             WHERE a.chinese_name = $name OR a.english_name = $name
             RETURN p.date AS year, count(p) AS papers
             ORDER BY year"
        }
        IntentCategory::Disciplines => {
            "MATCH (a:Author)-[:PUBLISH]->(p:Article)-[:BELONG_TO]->(d:Discipline)
             WHERE a.chinese_name = $name OR a.english_name = $name
             RETURN DISTINCT d.chinese_name AS chinese_name, d.english_name AS english_name"
        }
        IntentCategory::Journals => {
            "MATCH (a:Author)-[:PUBLISH]->(p:Article)-[:BE_PUBLISHED_IN]->(j:Journal)
             WHERE a.chinese_name = $name OR a.english_name = $name
             RETURN DISTINCT j.name AS journal, j.impact_factor AS impact_factor
             ORDER BY impact_factor DESC"
        }
        IntentCategory::Methods => {
            "MATCH (a:Author)-[:PUBLISH]->(p:Article)-[:USE]->(m:Method)
             WHERE a.chinese_name = $name OR a.english_name = $name
             RETURN DISTINCT m.chinese_name AS method"
        }
        IntentCategory::Scenarios => {
            "MATCH (a:Author)-[:PUBLISH]->(p:Article)-[:APPLY_TO]->(s:Scenario)
             WHERE a.chinese_name = $name OR a.english_name = $name
             RETURN DISTINCT s.chinese_name AS scenario"
        }
        IntentCategory::Papers => {
            // The Article node carries no journal name; resolve it through
            // the BE_PUBLISHED_IN edge, optionally so unlinked papers keep
            // their row.
            "MATCH (a:Author)-[:PUBLISH]->(p:Article)
             WHERE a.chinese_name = $name OR a.english_name = $name
             OPTIONAL MATCH (p)-[:BE_PUBLISHED_IN]->(j:Journal)
             RETURN p.title AS title, p.date AS date, j.name AS journal
             ORDER BY p.date DESC"
        }
        IntentCategory::Collaborators => {
            "MATCH (a:Author)-[:COLLABORATE]-(c:Author)
             WHERE a.chinese_name = $name OR a.english_name = $name
             RETURN c.chinese_name AS chinese_name, c.english_name AS english_name"
        }
        _ => return None,
    };
    Some(CypherStatement::new(text).param("name", name))
}

// ---------------------------------------------------------------------------
// Article: containment on title
// ---------------------------------------------------------------------------

fn article_query(name: &str, category: IntentCategory) -> Option<CypherStatement> {
    let text = match category {
        IntentCategory::Abstract => {
            "MATCH (p:Article)
             WHERE p.title =~ $pattern
             RETURN p.title AS title, p.abstract AS abstract
             LIMIT 1"
        }
        IntentCategory::Authors => {
            "MATCH (p:Article)<-[:PUBLISH]-(a:Author)
             WHERE p.title =~ $pattern
             RETURN a.chinese_name AS chinese_name, a.english_name AS english_name"
        }
        IntentCategory::Journals => {
            "MATCH (p:Article)-[:BE_PUBLISHED_IN]->(j:Journal)
             WHERE p.title =~ $pattern
             RETURN j.name AS journal, j.impact_factor AS impact_factor, p.date AS date"
        }
        IntentCategory::PublicationDate => {
            "MATCH (p:Article)
             WHERE p.title =~ $pattern
             RETURN p.date AS date"
        }
        IntentCategory::Keywords => {
            "MATCH (p:Article)
             WHERE p.title =~ $pattern
             RETURN p.keywords AS keywords"
        }
        IntentCategory::Disciplines => {
            "MATCH (p:Article)-[:BELONG_TO]->(d:Discipline)
             WHERE p.title =~ $pattern
             RETURN d.chinese_name AS discipline"
        }
        IntentCategory::Topics => {
            "MATCH (p:Article)-[:INVOLVE]->(t:Topic)
             WHERE p.title =~ $pattern
             RETURN t.chinese_name AS topic"
        }
        IntentCategory::Methods => {
            "MATCH (p:Article)-[:USE]->(m:Method)
             WHERE p.title =~ $pattern
             RETURN m.chinese_name AS method"
        }
        IntentCategory::Scenarios => {
            "MATCH (p:Article)-[:APPLY_TO]->(s:Scenario)
             WHERE p.title =~ $pattern
             RETURN s.chinese_name AS scenario"
        }
        _ => return None,
    };
    Some(CypherStatement::new(text).param("pattern", containment_pattern(name)))
}

// ---------------------------------------------------------------------------
// Classification and Journal types: containment on their name fields
// ---------------------------------------------------------------------------

fn topic_query(name: &str, category: IntentCategory) -> Option<CypherStatement> {
    let text = match category {
        IntentCategory::Papers => {
            "MATCH (t:Topic)<-[:INVOLVE]-(p:Article)
             WHERE t.chinese_name =~ $pattern OR t.english_name =~ $pattern
             RETURN p.title AS title, p.date AS date
             ORDER BY p.date DESC"
        }
        IntentCategory::Authors => {
            "MATCH (t:Topic)<-[:INVOLVE]-(p:Article)<-[:PUBLISH]-(a:Author)
             WHERE t.chinese_name =~ $pattern OR t.english_name =~ $pattern
             RETURN DISTINCT a.chinese_name AS chinese_name, a.english_name AS english_name"
        }
        _ => return None,
    };
    Some(CypherStatement::new(text).param("pattern", containment_pattern(name)))
}

fn journal_query(name: &str, category: IntentCategory) -> Option<CypherStatement> {
    let text = match category {
        IntentCategory::Papers => {
            "MATCH (j:Journal)<-[:BE_PUBLISHED_IN]-(p:Article)
             WHERE j.name =~ $pattern
             RETURN p.title AS title, p.date AS date
             ORDER BY p.date DESC"
        }
        IntentCategory::ImpactFactor => {
            "MATCH (j:Journal)
             WHERE j.name =~ $pattern
             RETURN j.impact_factor AS impact_factor"
        }
        _ => return None,
    };
    Some(CypherStatement::new(text).param("pattern", containment_pattern(name)))
}

fn discipline_query(name: &str, category: IntentCategory) -> Option<CypherStatement> {
    let text = match category {
        IntentCategory::Papers => {
            "MATCH (d:Discipline)<-[:BELONG_TO]-(p:Article)
             WHERE d.chinese_name =~ $pattern OR d.english_name =~ $pattern
             RETURN p.title AS title, p.date AS date
             ORDER BY p.date DESC"
        }
        IntentCategory::Authors => {
            "MATCH (d:Discipline)<-[:BELONG_TO]-(p:Article)<-[:PUBLISH]-(a:Author)
             WHERE d.chinese_name =~ $pattern OR d.english_name =~ $pattern
             RETURN DISTINCT a.chinese_name AS chinese_name, a.english_name AS english_name"
        }
        _ => return None,
    };
    Some(CypherStatement::new(text).param("pattern", containment_pattern(name)))
}

fn method_query(name: &str, category: IntentCategory) -> Option<CypherStatement> {
    let text = match category {
        IntentCategory::Authors => {
            "MATCH (m:Method)<-[:USE]-(p:Article)<-[:PUBLISH]-(a:Author)
             WHERE m.chinese_name =~ $pattern OR m.english_name =~ $pattern
             RETURN DISTINCT a.chinese_name AS chinese_name, a.english_name AS english_name"
        }
        IntentCategory::Papers => {
            "MATCH (m:Method)<-[:USE]-(p:Article)
             WHERE m.chinese_name =~ $pattern OR m.english_name =~ $pattern
             RETURN p.title AS title, p.date AS date
             ORDER BY p.date DESC"
        }
        _ => return None,
    };
    Some(CypherStatement::new(text).param("pattern", containment_pattern(name)))
}

fn scenario_query(name: &str, category: IntentCategory) -> Option<CypherStatement> {
    let text = match category {
        IntentCategory::Papers => {
            "MATCH (s:Scenario)<-[:APPLY_TO]-(p:Article)
             WHERE s.chinese_name =~ $pattern OR s.english_name =~ $pattern
             RETURN p.title AS title, p.date AS date
             ORDER BY p.date DESC"
        }
        IntentCategory::Authors => {
            "MATCH (s:Scenario)<-[:APPLY_TO]-(p:Article)<-[:PUBLISH]-(a:Author)
             WHERE s.chinese_name =~ $pattern OR s.english_name =~ $pattern
             RETURN DISTINCT a.chinese_name AS chinese_name, a.english_name AS english_name"
        }
        _ => return None,
    };
    Some(CypherStatement::new(text).param("pattern", containment_pattern(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str, type_label: &str) -> EntityRecord {
        EntityRecord {
            name: name.to_string(),
            entity_type: type_label.to_string(),
        }
    }

    #[test]
    fn unknown_entity_type_has_no_template_for_any_category() {
        let record = entity("something", "Organization");
        for category in IntentCategory::ALL {
            assert!(dispatch(&record, category).is_none(), "{category:?}");
        }
    }

    #[test]
    fn author_papers_template_binds_exact_name() {
        let stmt = dispatch(&entity("陈钢", "Author"), IntentCategory::Papers).unwrap();
        assert!(stmt.text().contains("(a:Author)-[:PUBLISH]->(p:Article)"));
        assert!(stmt.text().contains("a.chinese_name = $name OR a.english_name = $name"));
        assert!(stmt.text().contains("p.title AS title"));
        assert!(stmt.text().contains("j.name AS journal"));
        assert!(stmt.text().contains("ORDER BY p.date DESC"));
        assert_eq!(stmt.param_value("name"), Some(&serde_json::Value::from("陈钢")));
    }

    #[test]
    fn author_journals_orders_by_impact_factor() {
        let stmt = dispatch(&entity("陈钢", "Author"), IntentCategory::Journals).unwrap();
        assert!(stmt.text().contains("ORDER BY impact_factor DESC"));
    }

    #[test]
    fn containment_patterns_escape_metacharacters() {
        let stmt = dispatch(
            &entity("Graph (Theory) 2.0", "Topic"),
            IntentCategory::Papers,
        )
        .unwrap();
        let pattern = stmt.param_value("pattern").unwrap().as_str().unwrap();
        assert_eq!(pattern, r"(?i).*Graph \(Theory\) 2\.0.*");
        // The name itself never reaches the statement text.
        assert!(!stmt.text().contains("Graph"));
    }

    #[test]
    fn article_journal_lookup_is_escaped_like_the_rest() {
        let stmt = dispatch(&entity("A+B", "Article"), IntentCategory::Journals).unwrap();
        assert!(stmt.text().contains("p.title =~ $pattern"));
        assert_eq!(
            stmt.param_value("pattern").unwrap().as_str().unwrap(),
            r"(?i).*A\+B.*"
        );
    }

    #[test]
    fn abstract_lookup_is_limited_to_one_row() {
        let stmt = dispatch(&entity("监测", "Article"), IntentCategory::Abstract).unwrap();
        assert!(stmt.text().contains("LIMIT 1"));
    }

    #[test]
    fn unsupported_pairs_yield_none() {
        assert!(dispatch(&entity("x", "Author"), IntentCategory::ImpactFactor).is_none());
        assert!(dispatch(&entity("x", "Journal"), IntentCategory::Collaborators).is_none());
        assert!(dispatch(&entity("x", "Method"), IntentCategory::Abstract).is_none());
    }
}

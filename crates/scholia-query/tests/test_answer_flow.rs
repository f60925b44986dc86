//! End-to-end flow: extractor output → plan → execute against the scripted
//! store double.

use std::sync::Arc;

use scholia_common::{Analysis, EntityRecord, IntentPair};
use scholia_graph::testutil::{row, ScriptedStore};
use scholia_query::{execute_queries, plan_queries};

fn analysis_for(name: &str, type_label: &str, phrase: &str) -> Analysis {
    Analysis {
        entities: vec![EntityRecord {
            name: name.to_string(),
            entity_type: type_label.to_string(),
        }],
        intents: vec![IntentPair {
            entity: Some(name.to_string()),
            intent: Some(phrase.to_string()),
        }],
    }
}

#[tokio::test]
async fn author_paper_listing_end_to_end() {
    let analysis = analysis_for("陈钢", "Author", "查询学者的论文列表");
    let planned = plan_queries(&analysis);
    assert_eq!(planned.len(), 1);

    // Classifier resolved Papers; the template walks PUBLISH and projects
    // title/date/journal ordered by date descending, with the name bound.
    let stmt = &planned[0].statement;
    assert!(stmt.text().contains("(a:Author)-[:PUBLISH]->(p:Article)"));
    assert!(stmt.text().contains("a.chinese_name = $name OR a.english_name = $name"));
    assert!(stmt.text().contains("p.title AS title"));
    assert!(stmt.text().contains("p.date AS date"));
    assert!(stmt.text().contains("j.name AS journal"));
    assert!(stmt.text().contains("ORDER BY p.date DESC"));
    assert_eq!(stmt.param_value("name"), Some(&serde_json::Value::from("陈钢")));

    let store = Arc::new(ScriptedStore::new());
    store.push_rows(vec![row(&[
        ("title", serde_json::Value::from("基于振动的桥梁损伤识别")),
        ("date", serde_json::Value::from("2023")),
        ("journal", serde_json::Value::from("振动工程学报")),
    ])]);

    let outcomes = execute_queries(store.as_ref(), planned).await;
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].entity.name, "陈钢");
    assert_eq!(outcomes[0].intent, "查询学者的论文列表");
    assert_eq!(outcomes[0].results.len(), 1);
}

#[tokio::test]
async fn failing_query_is_skipped_and_order_preserved() {
    let analysis = Analysis {
        entities: vec![EntityRecord {
            name: "陈钢".to_string(),
            entity_type: "Author".to_string(),
        }],
        intents: vec![
            IntentPair {
                entity: Some("陈钢".to_string()),
                intent: Some("查询合作学者".to_string()),
            },
            IntentPair {
                entity: Some("陈钢".to_string()),
                intent: Some("发表的论文".to_string()),
            },
            IntentPair {
                entity: Some("陈钢".to_string()),
                intent: Some("研究领域".to_string()),
            },
        ],
    };
    let planned = plan_queries(&analysis);
    assert_eq!(planned.len(), 3);

    let store = Arc::new(ScriptedStore::new());
    store.push_rows(vec![row(&[
        ("chinese_name", serde_json::Value::from("刘丹")),
        ("english_name", serde_json::Value::from("Liu Dan")),
    ])]);
    store.push_error("connection reset by peer");
    store.push_rows(vec![row(&[
        ("chinese_name", serde_json::Value::from("结构工程")),
        ("english_name", serde_json::Value::from("Structural Engineering")),
    ])]);

    let outcomes = execute_queries(store.as_ref(), planned).await;

    // Second query failed: two outcomes, original order, no gap record.
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].intent, "查询合作学者");
    assert_eq!(outcomes[1].intent, "研究领域");
}

#[tokio::test]
async fn zero_rows_is_a_success_not_a_failure() {
    let analysis = analysis_for("冷门主题", "Topic", "相关论文");
    let planned = plan_queries(&analysis);

    let store = Arc::new(ScriptedStore::new());
    store.push_rows(vec![]);

    let outcomes = execute_queries(store.as_ref(), planned).await;
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].results.is_empty());
}

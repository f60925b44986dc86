//! Data models for the ingestion corpus.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One article record as it appears in the corpus JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    /// Crossref-style nested date: the first element of the first group is
    /// the publication year.
    pub date_parts: Vec<Vec<i64>>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub author: Vec<AuthorRecord>,
    #[serde(default)]
    pub container_title: String,
    #[serde(rename = "ISSN_ISBN", default)]
    pub issn_isbn: String,
    #[serde(default)]
    pub impact_factor: Option<f64>,
    /// English classification labels, keyed by dimension.
    #[serde(default)]
    pub class_en: HashMap<String, Vec<String>>,
    /// Chinese counterparts, aligned by index with `class_en`.
    #[serde(default)]
    pub class_zh: HashMap<String, Vec<String>>,
}

impl ArticleRecord {
    /// Publication year as the string stored on the Article node.
    pub fn publication_date(&self) -> Option<String> {
        self.date_parts
            .first()
            .and_then(|group| group.first())
            .map(|year| year.to_string())
    }

    /// Three-letter uppercase abbreviation of the first token of the
    /// article's first-listed secondary discipline; empty when absent.
    /// Folded into each author's `unique_id`.
    pub fn primary_discipline_abbrev(&self) -> String {
        self.class_en
            .get(CLASS_DISCIPLINES_EN)
            .and_then(|labels| labels.first())
            .and_then(|label| label.split_whitespace().next())
            .map(|token| token.chars().take(3).collect::<String>().to_uppercase())
            .unwrap_or_default()
    }

    /// English/Chinese label pairs for one classification dimension, zipped
    /// by index. A Chinese array shorter than the English one backfills
    /// empty strings for the excess indices.
    pub fn zipped_labels(&self, dim: &ClassificationDimension) -> Vec<(String, String)> {
        let en = match self.class_en.get(dim.en_key) {
            Some(labels) => labels,
            None => return Vec::new(),
        };
        let zh = self
            .class_zh
            .get(dim.zh_key)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        en.iter()
            .enumerate()
            .map(|(i, label)| {
                let chinese = zh.get(i).cloned().unwrap_or_default();
                (label.clone(), chinese)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub given: String,
    #[serde(default)]
    pub chinese_name: String,
}

impl AuthorRecord {
    /// Authors with neither a family nor a given name are invalid data and
    /// are skipped by the pipeline.
    pub fn has_name(&self) -> bool {
        !self.family.is_empty() || !self.given.is_empty()
    }

    pub fn english_name(&self) -> String {
        format!("{} {}", self.family, self.given).trim().to_string()
    }
}

/// Author identity key: names plus the current article's primary-discipline
/// abbreviation. The same physical author publishing under different primary
/// disciplines yields distinct nodes; this policy is deliberate (see
/// DESIGN.md) and confined to this function.
pub fn author_unique_id(author: &AuthorRecord, discipline_abbrev: &str) -> String {
    format!("{}{}{}", author.family, author.given, discipline_abbrev)
}

// ---------------------------------------------------------------------------
// Classification dimensions
// ---------------------------------------------------------------------------

const CLASS_DISCIPLINES_EN: &str = "Secondary disciplines";

/// One of the four Article classification dimensions: the node label it
/// populates, the relation from Article, and the corpus keys the parallel
/// label arrays live under.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationDimension {
    pub label: &'static str,
    pub relation: &'static str,
    pub en_key: &'static str,
    pub zh_key: &'static str,
}

pub const DIMENSIONS: [ClassificationDimension; 4] = [
    ClassificationDimension {
        label: "Discipline",
        relation: "BELONG_TO",
        en_key: CLASS_DISCIPLINES_EN,
        zh_key: "二级学科",
    },
    ClassificationDimension {
        label: "Topic",
        relation: "INVOLVE",
        en_key: "Research direction clusters",
        zh_key: "研究主题",
    },
    ClassificationDimension {
        label: "Method",
        relation: "USE",
        en_key: "Methods and technologies",
        zh_key: "方法技术",
    },
    ClassificationDimension {
        label: "Scenario",
        relation: "APPLY_TO",
        en_key: "Application scenarios",
        zh_key: "应用场景",
    },
];

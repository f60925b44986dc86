//! Graph build pipeline.
//!
//! For each article record:
//!   1. Upsert the Article node by id
//!   2. Upsert the Journal node by name, merge BE_PUBLISHED_IN
//!   3. Upsert each named Author by unique_id, merge PUBLISH
//!   4. Merge one undirected COLLABORATE edge per unordered author pair
//!   5. Upsert the four classification dimensions, merge their relations
//!
//! A malformed record aborts the whole batch: a partially built graph would
//! break the schema the query templates assume.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use scholia_common::{Result, ScholiaError};
use scholia_graph::{CypherStatement, GraphStore};

use crate::models::{author_unique_id, ArticleRecord, AuthorRecord, ClassificationDimension, DIMENSIONS};

/// Read the corpus JSON array. One read per ingestion run.
pub fn load_corpus(path: &Path) -> Result<Vec<ArticleRecord>> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<ArticleRecord> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), records = records.len(), "Corpus loaded");
    Ok(records)
}

/// Counters for one ingestion run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestSummary {
    pub articles: usize,
    pub authors: usize,
    pub collaborations: usize,
    pub classification_links: usize,
    pub duration_ms: u64,
}

/// One-shot batch builder for the scholarly graph.
pub struct GraphIngestion {
    store: Arc<dyn GraphStore>,
}

impl GraphIngestion {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Drop every node and edge. Destructive; only ever triggered by an
    /// explicit rebuild request, never by a normal ingest run.
    pub async fn clear(&self) -> Result<()> {
        self.store
            .run(&CypherStatement::new("MATCH (n) DETACH DELETE n"))
            .await?;
        info!("Graph cleared");
        Ok(())
    }

    /// Ingest the full batch. Idempotent: re-running on the same corpus
    /// issues the identical key-addressed MERGE statements.
    pub async fn ingest(&self, records: &[ArticleRecord]) -> Result<IngestSummary> {
        let t0 = std::time::Instant::now();
        let mut summary = IngestSummary::default();

        for record in records {
            self.ingest_record(record, &mut summary).await?;
        }

        summary.duration_ms = t0.elapsed().as_millis() as u64;
        info!(
            articles = summary.articles,
            authors = summary.authors,
            collaborations = summary.collaborations,
            classification_links = summary.classification_links,
            duration_ms = summary.duration_ms,
            "Ingestion complete"
        );
        Ok(summary)
    }

    async fn ingest_record(
        &self,
        record: &ArticleRecord,
        summary: &mut IngestSummary,
    ) -> Result<()> {
        let date = record.publication_date().ok_or_else(|| {
            ScholiaError::MalformedRecord(format!("article {}: empty date_parts", record.id))
        })?;

        self.upsert_article(record, &date).await?;
        summary.articles += 1;

        self.upsert_journal(record).await?;

        // Authors, then one COLLABORATE edge per unordered pair of this
        // record's author list.
        let abbrev = record.primary_discipline_abbrev();
        let mut author_ids: Vec<String> = Vec::new();
        for author in record.author.iter().filter(|a| a.has_name()) {
            let unique_id = author_unique_id(author, &abbrev);
            self.upsert_author(record, author, &unique_id).await?;
            summary.authors += 1;
            author_ids.push(unique_id);
        }

        for i in 0..author_ids.len() {
            for j in (i + 1)..author_ids.len() {
                // Same unique_id twice would merge a self-loop; skip it.
                if author_ids[i] == author_ids[j] {
                    continue;
                }
                self.merge_collaboration(&author_ids[i], &author_ids[j]).await?;
                summary.collaborations += 1;
            }
        }

        for dim in &DIMENSIONS {
            summary.classification_links += self.upsert_classification(record, dim).await?;
        }

        debug!(article = %record.id, "Record ingested");
        Ok(())
    }

    async fn upsert_article(&self, record: &ArticleRecord, date: &str) -> Result<()> {
        let stmt = CypherStatement::new(
            "MERGE (p:Article {id: $id})
             SET p.title = $title,
                 p.date = $date,
                 p.keywords = $keywords,
                 p.abstract = $abstract,
                 p.language = $language",
        )
        .param("id", record.id.as_str())
        .param("title", record.title.as_str())
        .param("date", date)
        .param("keywords", record.keywords.clone())
        .param("abstract", record.abstract_text.as_str())
        .param("language", record.language.as_str());

        self.store.run(&stmt).await?;
        Ok(())
    }

    async fn upsert_journal(&self, record: &ArticleRecord) -> Result<()> {
        let stmt = CypherStatement::new(
            "MERGE (j:Journal {name: $name})
             SET j.issn_isbn = $issn_isbn,
                 j.impact_factor = $impact_factor
             WITH j
             MATCH (p:Article {id: $article_id})
             MERGE (p)-[:BE_PUBLISHED_IN]->(j)",
        )
        .param("name", record.container_title.as_str())
        .param("issn_isbn", record.issn_isbn.as_str())
        .param("impact_factor", record.impact_factor)
        .param("article_id", record.id.as_str());

        self.store.run(&stmt).await?;
        Ok(())
    }

    async fn upsert_author(
        &self,
        record: &ArticleRecord,
        author: &AuthorRecord,
        unique_id: &str,
    ) -> Result<()> {
        let stmt = CypherStatement::new(
            "MERGE (a:Author {unique_id: $unique_id})
             SET a.english_name = $english_name,
                 a.chinese_name = $chinese_name
             WITH a
             MATCH (p:Article {id: $article_id})
             MERGE (a)-[:PUBLISH]->(p)",
        )
        .param("unique_id", unique_id)
        .param("english_name", author.english_name())
        .param("chinese_name", author.chinese_name.as_str())
        .param("article_id", record.id.as_str());

        self.store.run(&stmt).await?;
        Ok(())
    }

    /// Undirected merge: an existing edge in either direction satisfies the
    /// pattern, so each unordered pair carries exactly one edge no matter
    /// how many articles the two authors share.
    async fn merge_collaboration(&self, left: &str, right: &str) -> Result<()> {
        let stmt = CypherStatement::new(
            "MATCH (x:Author {unique_id: $left})
             MATCH (y:Author {unique_id: $right})
             MERGE (x)-[:COLLABORATE]-(y)",
        )
        .param("left", left)
        .param("right", right);

        self.store.run(&stmt).await?;
        Ok(())
    }

    async fn upsert_classification(
        &self,
        record: &ArticleRecord,
        dim: &ClassificationDimension,
    ) -> Result<usize> {
        let pairs = record.zipped_labels(dim);
        // Labels and relation types come from the fixed dimension table,
        // never from the corpus; only they are formatted into the text.
        let text = format!(
            "MERGE (c:{label} {{english_name: $english_name}})
             SET c.chinese_name = $chinese_name
             WITH c
             MATCH (p:Article {{id: $article_id}})
             MERGE (p)-[:{relation}]->(c)",
            label = dim.label,
            relation = dim.relation,
        );

        for (english, chinese) in &pairs {
            let stmt = CypherStatement::new(text.as_str())
                .param("english_name", english.as_str())
                .param("chinese_name", chinese.as_str())
                .param("article_id", record.id.as_str());
            self.store.run(&stmt).await?;
        }
        Ok(pairs.len())
    }
}

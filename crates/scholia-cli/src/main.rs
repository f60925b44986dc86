//! Scholia — scholarly knowledge-graph question answering backend.
//!
//! Two entry points: `ingest` builds the graph from the article corpus,
//! `answer` turns one extractor-output document into executed query results.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use scholia_graph::Neo4jStore;
use scholia_ingestion::{load_corpus, GraphIngestion};
use scholia_query::{execute_queries, plan_queries, render_outcomes};

#[derive(Parser)]
#[command(name = "scholia", about = "Scholarly knowledge-graph query backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build or update the graph from the article corpus.
    Ingest {
        /// Corpus JSON path; defaults to the configured data.corpus_path.
        #[arg(long)]
        data: Option<PathBuf>,
        /// Drop the existing graph before ingesting.
        #[arg(long)]
        clear: bool,
    },
    /// Execute the queries for one extractor-output document.
    Answer {
        /// Path to the extractor JSON: {"entities": [...], "intents": [...]}.
        #[arg(long)]
        analysis: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = config::Config::load()?;

    let store = Arc::new(
        Neo4jStore::connect(&config.graph.uri, &config.graph.user, &config.graph.password)
            .await?,
    );

    match cli.command {
        Command::Ingest { data, clear } => {
            let path = data.unwrap_or(config.data.corpus_path);
            let records = load_corpus(&path)?;
            let pipeline = GraphIngestion::new(store);
            if clear {
                pipeline.clear().await?;
            }
            let summary = pipeline.ingest(&records).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Answer { analysis } => {
            let raw = std::fs::read_to_string(&analysis)?;
            let analysis: scholia_common::Analysis = serde_json::from_str(&raw)?;
            let planned = plan_queries(&analysis);
            info!(queries = planned.len(), "Query plan built");

            let outcomes = execute_queries(store.as_ref(), planned).await;
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
            println!();
            println!("{}", render_outcomes(&outcomes));
        }
    }

    Ok(())
}

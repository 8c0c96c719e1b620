//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use glonav_core::{Error, Result};
use glonav_retrieval::{Predicate, RetrievalFilters, RetrievalRequest};
use std::path::PathBuf;

/// Glonav - hybrid retrieval over policy and public-data corpora
#[derive(Parser, Debug)]
#[command(name = "glonav", version)]
#[command(about = "Hybrid vector, keyword and graph retrieval for policy questions", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "GLONAV_CONFIG")]
    pub config: Option<String>,

    /// Log at debug level (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve ranked context for a query
    Retrieve(RetrieveArgs),

    /// Show backend counts for a corpus
    Stats {
        /// Corpus JSON file
        #[arg(long)]
        corpus: PathBuf,
    },

    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Print one value by dotted key (e.g. retrieval.top_k)
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// How `retrieve` prints its results.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Ranked summary lines
    #[default]
    Text,
    /// Fused documents as JSON
    Json,
    /// The rendered LLM context block
    Context,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RetrieveArgs {
    /// Natural-language query
    pub query: String,

    /// Corpus JSON file
    #[arg(long)]
    pub corpus: PathBuf,

    /// Maximum results (defaults to retrieval.top_k)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Skip knowledge-graph search
    #[arg(long)]
    pub no_graph: bool,

    /// Allowed source (repeatable)
    #[arg(long = "source")]
    pub sources: Vec<String>,

    /// Allowed document type (repeatable)
    #[arg(long = "document-type")]
    pub document_types: Vec<String>,

    /// Allowed dataset id (repeatable)
    #[arg(long = "dataset")]
    pub datasets: Vec<String>,

    /// Filter configuration as JSON, merged with the flags above
    #[arg(long)]
    pub filters: Option<String>,

    /// Context character budget (defaults to retrieval.max_context_length)
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl RetrieveArgs {
    /// Build the filter set from `--filters` JSON and the repeatable flags.
    pub fn retrieval_filters(&self) -> Result<RetrievalFilters> {
        let mut filters = match &self.filters {
            Some(json) => serde_json::from_str::<RetrievalFilters>(json)
                .map_err(|e| Error::parse(format!("Invalid --filters JSON: {e}")))?,
            None => RetrievalFilters::new(),
        };

        filters.sources.extend(self.sources.iter().cloned());
        if let Some(predicate) = predicate_from(&self.document_types) {
            filters.document_type = Some(predicate);
        }
        if let Some(predicate) = predicate_from(&self.datasets) {
            filters.dataset_id = Some(predicate);
        }
        Ok(filters)
    }

    /// Translate the arguments into a retrieval request.
    pub fn to_request(&self) -> Result<RetrievalRequest> {
        let mut request = RetrievalRequest::new(self.query.clone());
        if let Some(top_k) = self.top_k {
            request = request.with_top_k(top_k);
        }
        if self.no_graph {
            request = request.with_graph_context(false);
        }
        if let Some(max_chars) = self.max_chars {
            request = request.with_max_context_length(max_chars);
        }

        let filters = self.retrieval_filters()?;
        if !filters.is_empty() {
            request = request.with_filters(filters);
        }
        Ok(request)
    }
}

/// One value is an exact match; several are a membership test.
fn predicate_from(values: &[String]) -> Option<Predicate> {
    match values {
        [] => None,
        [single] => Some(Predicate::exact(single.clone())),
        many => Some(Predicate::any_of(many.iter().cloned())),
    }
}

// ============================================================================
// Tests
// ============================================================================

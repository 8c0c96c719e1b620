//! `retrieve` and `stats` command handlers.

use glonav_core::{Error, FusedDocument, Result};
use glonav_retrieval::render_context;
use std::path::Path;

use crate::cli::{OutputFormat, RetrieveArgs};
use crate::config::GlonavConfig;
use crate::corpus::Corpus;

/// Characters of content shown per result in text output.
const PREVIEW_CHARS: usize = 120;

/// Load the corpus, run one retrieval and print the formatted results.
pub async fn run_retrieve(args: &RetrieveArgs, config: &GlonavConfig) -> Result<()> {
    let request = args.to_request()?;
    let retriever = Corpus::load(&args.corpus)?.into_retriever(config).await?;

    let results = retriever.retrieve(&request).await;
    println!("{}", format_results(&results, args.format)?);
    Ok(())
}

/// Load the corpus and print backend counts.
pub async fn run_stats(corpus: &Path, config: &GlonavConfig) -> Result<()> {
    let retriever = Corpus::load(corpus)?.into_retriever(config).await?;
    println!("{}", retriever.stats()?);
    Ok(())
}

/// Render results in the requested output format.
pub fn format_results(results: &[FusedDocument], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(results).map_err(Error::from),
        OutputFormat::Context => Ok(render_context(results)),
        OutputFormat::Text => Ok(format_text(results)),
    }
}

fn format_text(results: &[FusedDocument]) -> String {
    if results.is_empty() {
        return "No results.".to_string();
    }

    let mut out = String::new();
    for (rank, result) in results.iter().enumerate() {
        let document = result.document();
        let methods = result
            .retrieval_methods
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join("+");

        let source = if document.source.is_empty() {
            String::new()
        } else {
            format!(" ({})", document.source)
        };

        out.push_str(&format!(
            "{:>2}. {} [{:.3}] {methods}{source}\n",
            rank + 1,
            document.id,
            result.combined_score,
        ));
        if !document.title.is_empty() {
            out.push_str(&format!("    {}\n", document.title));
        }
        out.push_str(&format!("    {}\n", preview(&document.content)));
    }
    out.trim_end().to_string()
}

/// First line of `content`, capped at [`PREVIEW_CHARS`] characters.
fn preview(content: &str) -> String {
    let line = content.lines().next().unwrap_or_default();
    if line.chars().count() > PREVIEW_CHARS {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

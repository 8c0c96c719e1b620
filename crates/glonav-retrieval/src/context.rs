//! Rendering retrieved documents as a language-model context block.

use glonav_core::FusedDocument;

/// Render documents as `Source: ...` / `Content: ...` sections separated
/// by blank lines. An empty list renders as an empty string.
pub fn render_context(documents: &[FusedDocument]) -> String {
    documents
        .iter()
        .map(|doc| {
            let document = doc.document();
            format!("Source: {}\nContent: {}", document.source, document.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

//! Context Budgeter: fit the ranked list into a character budget.
//!
//! Lengths are counted in characters. Documents are taken whole, in rank
//! order, while they fit. The first document that would overflow is
//! included as a truncated copy ending in [`ELLIPSIS`] when more than
//! [`MIN_PARTIAL_CHARS`] characters remain; nothing after it is kept.
//! The ellipsis is counted against the budget, so the output never
//! exceeds it.

use glonav_core::FusedDocument;

/// Remaining budget must exceed this for a partial document to be kept.
pub const MIN_PARTIAL_CHARS: usize = 100;

/// Marker appended to a truncated document.
pub const ELLIPSIS: &str = "...";

/// Truncate `documents` so total content length is at most `max_chars`.
///
/// Returns a prefix of the input; only the last element may have had its
/// content shortened.
pub fn truncate_context(documents: Vec<FusedDocument>, max_chars: usize) -> Vec<FusedDocument> {
    let mut total = 0usize;
    let mut kept = Vec::with_capacity(documents.len());

    for mut doc in documents {
        let len = doc.document().content_len();
        if total + len <= max_chars {
            total += len;
            kept.push(doc);
            continue;
        }

        let remaining = max_chars - total;
        if remaining > MIN_PARTIAL_CHARS {
            let content = &mut doc.candidate.document.content;
            let mut truncated: String = content
                .chars()
                .take(remaining - ELLIPSIS.len())
                .collect();
            truncated.push_str(ELLIPSIS);
            *content = truncated;
            log::debug!(
                "Context budget: truncated '{}' from {} to {} chars",
                doc.id(),
                len,
                remaining
            );
            kept.push(doc);
        }
        break;
    }

    kept
}

// ============================================================================
// Tests
// ============================================================================

//! Filter Stage: caller-supplied predicates over the fused list.
//!
//! All predicates are optional and combined with logical AND. Filtering
//! only removes documents; survivors keep their fused order.
//!
//! # Configuration surface
//!
//! Filters arrive as JSON or TOML and are parsed once into typed
//! predicates. A predicate is either a literal (exact match) or a
//! membership test written `{"in": [...]}` (`{"$in": [...]}` is also
//! accepted):
//!
//! ```rust
//! use glonav_retrieval::{Predicate, RetrievalFilters};
//!
//! let filters: RetrievalFilters = serde_json::from_str(
//!     r#"{"sources": ["EPA"], "document_type": {"$in": ["report", "dataset"]}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(filters.sources, vec!["EPA"]);
//! assert_eq!(
//!     filters.document_type,
//!     Some(Predicate::any_of(["report", "dataset"]))
//! );
//! ```
//!
//! Unknown keys are ignored. `date_range` is accepted but not applied.

use chrono::NaiveDate;
use glonav_core::{Document, FusedDocument};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Predicate
// ============================================================================

/// A match condition on one string-valued document field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PredicateRepr", into = "PredicateRepr")]
pub enum Predicate {
    /// Field equals this value.
    Exact(String),
    /// Field is one of these values. An empty set matches nothing.
    AnyOf(Vec<String>),
}

impl Predicate {
    /// Exact-match predicate.
    pub fn exact(value: impl Into<String>) -> Self {
        Self::Exact(value.into())
    }

    /// Set-membership predicate.
    pub fn any_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(values.into_iter().map(Into::into).collect())
    }

    /// Test a field value. A missing value never matches.
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Self::Exact(expected) => expected == value,
            Self::AnyOf(allowed) => allowed.iter().any(|a| a == value),
        }
    }
}

/// Wire form of a predicate: a bare string or an operator object.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum PredicateRepr {
    Exact(String),
    Operators(Operators),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Operators {
    #[serde(
        default,
        rename = "in",
        alias = "$in",
        skip_serializing_if = "Option::is_none"
    )]
    any_of: Option<Vec<String>>,
}

impl PredicateRepr {
    /// Blank literals and operator objects without a known operator carry
    /// no condition.
    fn into_predicate(self) -> Option<Predicate> {
        match self {
            Self::Exact(value) if value.is_empty() => None,
            Self::Exact(value) => Some(Predicate::Exact(value)),
            Self::Operators(ops) => ops.any_of.map(Predicate::AnyOf),
        }
    }
}

impl TryFrom<PredicateRepr> for Predicate {
    type Error = String;

    fn try_from(repr: PredicateRepr) -> Result<Self, Self::Error> {
        repr.into_predicate()
            .ok_or_else(|| "predicate needs a non-empty value or an `in` operator".to_string())
    }
}

impl From<Predicate> for PredicateRepr {
    fn from(predicate: Predicate) -> Self {
        match predicate {
            Predicate::Exact(value) => Self::Exact(value),
            Predicate::AnyOf(values) => Self::Operators(Operators {
                any_of: Some(values),
            }),
        }
    }
}

/// Deserialize an optional predicate, treating condition-free forms as absent.
fn lenient_predicate<'de, D>(deserializer: D) -> Result<Option<Predicate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PredicateRepr>::deserialize(deserializer)?.and_then(PredicateRepr::into_predicate))
}

// ============================================================================
// DateRange
// ============================================================================

/// Inclusive date window. Accepted in configuration, not applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Last day of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

// ============================================================================
// RetrievalFilters
// ============================================================================

/// Predicate configuration for one retrieval call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalFilters {
    /// Allowed `source` values. Empty means no source filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Condition on `document_type`.
    #[serde(
        default,
        alias = "data_type",
        deserialize_with = "lenient_predicate",
        skip_serializing_if = "Option::is_none"
    )]
    pub document_type: Option<Predicate>,

    /// Condition on `metadata.dataset_id`.
    #[serde(
        default,
        deserialize_with = "lenient_predicate",
        skip_serializing_if = "Option::is_none"
    )]
    pub dataset_id: Option<Predicate>,

    /// Reserved; has no filtering effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl RetrievalFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given sources.
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Set the document type condition.
    pub fn with_document_type(mut self, predicate: Predicate) -> Self {
        self.document_type = Some(predicate);
        self
    }

    /// Set the dataset condition.
    pub fn with_dataset_id(mut self, predicate: Predicate) -> Self {
        self.dataset_id = Some(predicate);
        self
    }

    /// Set the (ignored) date range.
    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }

    /// True when no predicate is configured.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
            && self.document_type.is_none()
            && self.dataset_id.is_none()
            && self.date_range.is_none()
    }

    /// Test one document against every configured predicate.
    pub fn matches(&self, document: &Document) -> bool {
        if !self.sources.is_empty() && !self.sources.iter().any(|s| *s == document.source) {
            return false;
        }
        if let Some(predicate) = &self.document_type
            && !predicate.matches(Some(document.document_type.as_str()))
        {
            return false;
        }
        if let Some(predicate) = &self.dataset_id
            && !predicate.matches(document.dataset_id().as_deref())
        {
            return false;
        }
        true
    }
}

/// Keep only documents satisfying `filters`, preserving order.
pub fn apply_filters(documents: Vec<FusedDocument>, filters: &RetrievalFilters) -> Vec<FusedDocument> {
    if let Some(range) = &filters.date_range {
        log::debug!("date_range filter {range:?} is not applied");
    }

    let before = documents.len();
    let kept: Vec<FusedDocument> = documents
        .into_iter()
        .filter(|doc| filters.matches(doc.document()))
        .collect();

    log::debug!("Filter stage kept {} of {} documents", kept.len(), before);
    kept
}

// ============================================================================
// Tests
// ============================================================================

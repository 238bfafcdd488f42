//! Article metadata as returned by the PubMed summary endpoint.

use serde::{Deserialize, Serialize};

/// One author entry from an article summary.
///
/// Both fields may be absent in the source record. Absence is kept as `None`
/// here so downstream code can tell "no affiliation" apart from a real value;
/// the output placeholders are applied only when rows are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
    pub affiliation: Option<String>,
}

impl Author {
    /// Name as it appears in output rows; nameless authors render as "Unknown".
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// One publication's metadata, flattened from an esummary record.
///
/// Invariant: `authors` keeps the order of the source response, and anything
/// derived per author must stay positionally aligned with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// PubMed identifier the record was fetched under
    pub pmid: String,
    pub title: Option<String>,
    pub pub_date: Option<String>,
    pub authors: Vec<Author>,
    /// DOI as reported in the record's article id list
    pub doi: Option<String>,
}

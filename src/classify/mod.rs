//! Keyword heuristic for spotting commercial author affiliations.

use crate::models::Author;

/// Flags affiliations that look commercial rather than academic.
///
/// An affiliation matches when ANY configured keyword is a case-insensitive
/// substring of it. The default keyword list mixes legal-entity suffixes
/// ("Inc.", "Ltd.") with industry terms and named companies. The heuristic
/// has known false positives ("University Inc. of X" matches "Inc.") and
/// misses companies absent from the list; both are accepted behavior, not
/// bugs to fix here.
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    /// Keywords, lowercased at construction
    keywords: Vec<String>,
}

impl AffiliationClassifier {
    /// Build a classifier from a keyword list.
    ///
    /// Keywords are lowercased once here so each affiliation test is a plain
    /// substring scan.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True if the affiliation contains any keyword, ignoring case.
    pub fn is_non_academic(&self, affiliation: &str) -> bool {
        let affiliation = affiliation.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| affiliation.contains(keyword.as_str()))
    }

    /// Display names of the flagged authors, in author order.
    ///
    /// Authors without an affiliation are never flagged.
    pub fn classify_authors(&self, authors: &[Author]) -> Vec<String> {
        authors
            .iter()
            .filter(|author| {
                author
                    .affiliation
                    .as_deref()
                    .map_or(false, |affiliation| self.is_non_academic(affiliation))
            })
            .map(|author| author.display_name().to_string())
            .collect()
    }
}

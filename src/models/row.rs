//! Export-ready row representation.

use serde::{Deserialize, Serialize};

use crate::classify::AffiliationClassifier;
use crate::models::Article;

/// Placeholder for absent values at the output boundary.
const NA: &str = "N/A";

/// One flattened, export-ready row.
///
/// Field order here fixes the CSV column order, so new fields go at the end.
/// Rows are built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRow {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Authors")]
    pub authors: String,
    #[serde(rename = "DOI Link")]
    pub doi_link: String,
    #[serde(rename = "Non-Academic Authors")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation")]
    pub company_affiliation: String,
    #[serde(rename = "Non-Academic Detected")]
    pub non_academic_detected: String,
}

impl PaperRow {
    /// Flatten an article into a row.
    ///
    /// Author names and affiliations are joined with ", " in source order;
    /// affiliations are not deduplicated, and a missing one contributes an
    /// "N/A" placeholder to the joined string. The DOI turns into an
    /// `https://doi.org/` link when present. This is where absent values
    /// become the literal "N/A" (or "Unknown" for author names).
    pub fn from_article(article: &Article, classifier: &AffiliationClassifier) -> Self {
        let author_names: Vec<&str> = article
            .authors
            .iter()
            .map(|author| author.display_name())
            .collect();
        let affiliations: Vec<&str> = article
            .authors
            .iter()
            .map(|author| author.affiliation.as_deref().unwrap_or(NA))
            .collect();
        let non_academic = classifier.classify_authors(&article.authors);
        let detected = if non_academic.is_empty() { "No" } else { "Yes" };

        Self {
            pubmed_id: article.pmid.clone(),
            title: article.title.clone().unwrap_or_else(|| NA.to_string()),
            publication_date: article
                .pub_date
                .clone()
                .unwrap_or_else(|| NA.to_string()),
            authors: author_names.join(", "),
            doi_link: article
                .doi
                .as_ref()
                .map(|doi| format!("https://doi.org/{}", doi))
                .unwrap_or_else(|| NA.to_string()),
            non_academic_authors: if non_academic.is_empty() {
                NA.to_string()
            } else {
                non_academic.join(", ")
            },
            company_affiliation: if affiliations.is_empty() {
                NA.to_string()
            } else {
                affiliations.join(", ")
            },
            non_academic_detected: detected.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    fn classifier() -> AffiliationClassifier {
        AffiliationClassifier::new(["Inc.", "Pfizer", "Biotech"])
    }

    fn author(name: &str, affiliation: Option<&str>) -> Author {
        Author {
            name: Some(name.to_string()),
            affiliation: affiliation.map(|a| a.to_string()),
        }
    }

    fn article_with_authors(authors: Vec<Author>) -> Article {
        Article {
            pmid: "111".to_string(),
            title: Some("A study".to_string()),
            pub_date: Some("2024 Jan 15".to_string()),
            authors,
            doi: Some("10.1234/x".to_string()),
        }
    }

    #[test]
    fn test_row_with_zero_authors() {
        let article = Article {
            pmid: "42".to_string(),
            title: None,
            pub_date: None,
            authors: Vec::new(),
            doi: None,
        };
        let row = PaperRow::from_article(&article, &classifier());

        assert_eq!(row.pubmed_id, "42");
        assert_eq!(row.title, "N/A");
        assert_eq!(row.publication_date, "N/A");
        assert_eq!(row.authors, "");
        assert_eq!(row.doi_link, "N/A");
        assert_eq!(row.non_academic_authors, "N/A");
        assert_eq!(row.company_affiliation, "N/A");
        assert_eq!(row.non_academic_detected, "No");
    }

    #[test]
    fn test_row_doi_link() {
        let article = article_with_authors(vec![author("Smith J", Some("Harvard"))]);
        let row = PaperRow::from_article(&article, &classifier());
        assert_eq!(row.doi_link, "https://doi.org/10.1234/x");
    }

    #[test]
    fn test_row_without_doi() {
        let mut article = article_with_authors(vec![author("Smith J", Some("Harvard"))]);
        article.doi = None;
        let row = PaperRow::from_article(&article, &classifier());
        assert_eq!(row.doi_link, "N/A");
    }

    #[test]
    fn test_row_flags_industry_author() {
        let article = article_with_authors(vec![
            author("Smith J", Some("Pfizer Inc., New York")),
            author("Doe A", Some("Harvard Medical School")),
        ]);
        let row = PaperRow::from_article(&article, &classifier());

        assert_eq!(row.authors, "Smith J, Doe A");
        assert_eq!(row.non_academic_authors, "Smith J");
        assert_eq!(row.non_academic_detected, "Yes");
        assert_eq!(
            row.company_affiliation,
            "Pfizer Inc., New York, Harvard Medical School"
        );
    }

    #[test]
    fn test_row_all_academic() {
        let article = article_with_authors(vec![
            author("Smith J", Some("Harvard Medical School")),
            author("Doe A", Some("MIT")),
        ]);
        let row = PaperRow::from_article(&article, &classifier());

        assert_eq!(row.non_academic_authors, "N/A");
        assert_eq!(row.non_academic_detected, "No");
    }

    #[test]
    fn test_row_missing_affiliation_becomes_placeholder() {
        let article = article_with_authors(vec![
            author("Smith J", None),
            author("Doe A", Some("Moderna Biotech")),
        ]);
        let row = PaperRow::from_article(&article, &classifier());

        // The missing affiliation still occupies its slot in the joined list
        // and never counts as a match.
        assert_eq!(row.company_affiliation, "N/A, Moderna Biotech");
        assert_eq!(row.non_academic_authors, "Doe A");
        assert_eq!(row.non_academic_detected, "Yes");
    }

    #[test]
    fn test_row_nameless_author_renders_unknown() {
        let article = article_with_authors(vec![Author {
            name: None,
            affiliation: Some("Pfizer Inc.".to_string()),
        }]);
        let row = PaperRow::from_article(&article, &classifier());

        assert_eq!(row.authors, "Unknown");
        assert_eq!(row.non_academic_authors, "Unknown");
    }
}

//! # papersift
//!
//! Searches PubMed for papers and flags authors with commercial
//! (non-academic) affiliations, exporting the results as CSV rows.
//!
//! The pipeline is linear: search for PMIDs, fetch per-article summaries one
//! at a time, classify each author's affiliation against a keyword list,
//! flatten to rows, export.
//!
//! ## Architecture
//!
//! - [`pubmed`]: E-utilities search and summary clients
//! - [`classify`]: the affiliation keyword heuristic
//! - [`models`]: article records and export rows
//! - [`export`]: CSV and console output
//! - [`config`]: configuration management
//! - [`utils`]: HTTP client plumbing

pub mod classify;
pub mod config;
pub mod export;
pub mod models;
pub mod pubmed;
pub mod utils;

// Re-export commonly used types
pub use classify::AffiliationClassifier;
pub use models::{Article, Author, PaperRow};
pub use pubmed::PubMedClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

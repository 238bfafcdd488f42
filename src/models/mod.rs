//! Core data models for articles and export rows.

mod article;
mod row;

pub use article::{Article, Author};
pub use row::PaperRow;

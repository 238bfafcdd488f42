//! Row export: CSV file or raw console echo.

use std::io;
use std::path::Path;

use crate::models::PaperRow;

/// Errors while writing the CSV output
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error while flushing the output file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write rows as CSV, replacing any existing file at `path`.
///
/// The header row and column order come from the [`PaperRow`] field order.
pub fn write_csv(rows: &[PaperRow], path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Echo rows to stdout in their raw structured form.
///
/// The file path gets a proper table; the console deliberately does not.
pub fn print_rows(rows: &[PaperRow]) {
    println!("{:?}", rows);
}

/// Render the full row set for the `--debug` echo, printed to stdout ahead
/// of export.
pub fn debug_dump(rows: &[PaperRow]) -> String {
    format!("DEBUG: full result set: {:?}", rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(pmid: &str) -> PaperRow {
        PaperRow {
            pubmed_id: pmid.to_string(),
            title: "A study, with a comma".to_string(),
            publication_date: "2024 Jan 15".to_string(),
            authors: "Smith J, Doe A".to_string(),
            doi_link: "https://doi.org/10.1234/x".to_string(),
            non_academic_authors: "Smith J".to_string(),
            company_affiliation: "Pfizer Inc., New York, Harvard".to_string(),
            non_academic_detected: "Yes".to_string(),
        }
    }

    #[test]
    fn test_csv_header_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[sample_row("111")], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "PubmedID,Title,Publication Date,Authors,DOI Link,\
             Non-Academic Authors,Company Affiliation,Non-Academic Detected"
        );
    }

    #[test]
    fn test_csv_round_trip() {
        let rows = vec![sample_row("111"), sample_row("222")];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&rows, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let back: Vec<PaperRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[sample_row("111"), sample_row("222")], &path).unwrap();
        write_csv(&[sample_row("333")], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let back: Vec<PaperRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].pubmed_id, "333");
    }

    #[test]
    fn test_debug_dump_lists_every_row() {
        let dump = debug_dump(&[sample_row("111"), sample_row("222")]);
        assert!(dump.starts_with("DEBUG: full result set: ["));
        assert!(dump.contains("\"111\""));
        assert!(dump.contains("\"222\""));
    }
}

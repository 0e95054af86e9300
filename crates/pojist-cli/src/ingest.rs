//! Decode, extract and record a single PDF, then archive it.

use std::path::{Path, PathBuf};

use pojist_core::{DocumentPipeline, FieldRecord};
use tracing::{error, info, warn};

use crate::archive::move_into;
use crate::table::CsvTable;

/// Where a file ended up after ingestion.
#[derive(Debug)]
pub enum Outcome {
    /// Row appended; file moved to the sorted folder when archiving.
    Recorded(FieldRecord),
    /// Processing failed; file moved to the error folder when archiving.
    Rejected(String),
}

/// Destination folders for processed files.
#[derive(Debug, Clone)]
pub struct ArchiveDirs {
    pub sorted: PathBuf,
    pub error: PathBuf,
}

/// Runs documents through the pipeline and into the table.
pub struct Ingestor {
    pipeline: DocumentPipeline,
    table: CsvTable,
    archive: Option<ArchiveDirs>,
}

impl Ingestor {
    pub fn new(table: CsvTable) -> Self {
        Self {
            pipeline: DocumentPipeline::new(),
            table,
            archive: None,
        }
    }

    /// Move files into the sorted or error folder after processing.
    pub fn with_archive(mut self, dirs: ArchiveDirs) -> Self {
        self.archive = Some(dirs);
        self
    }

    pub fn table(&self) -> &CsvTable {
        &self.table
    }

    /// Extract one PDF and append its row.
    pub fn record(&self, path: &Path) -> anyhow::Result<FieldRecord> {
        let record = self.pipeline.process_path(path)?;
        self.table.append(&record)?;
        Ok(record)
    }

    /// Like [`Ingestor::record`], but also archives the file and never fails.
    pub fn ingest(&self, path: &Path) -> Outcome {
        let outcome = match self.record(path) {
            Ok(record) => {
                info!("Recorded {}", path.display());
                Outcome::Recorded(record)
            }
            Err(e) => {
                warn!("Rejected {}: {}", path.display(), e);
                Outcome::Rejected(e.to_string())
            }
        };

        if let Some(dirs) = &self.archive {
            let dest = match outcome {
                Outcome::Recorded(_) => &dirs.sorted,
                Outcome::Rejected(_) => &dirs.error,
            };
            if let Err(e) = move_into(path, dest) {
                error!(
                    "Failed to move {} to {}: {}",
                    path.display(),
                    dest.display(),
                    e
                );
            }
        }

        outcome
    }
}

/// Regular file with a `.pdf` extension in any letter case.
pub fn is_pdf(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pojist_core::Field;
    use std::fs;
    use tempfile::TempDir;

    const ALLIANZ_PDF: &[u8] = include_bytes!("../tests/fixtures/allianz.pdf");

    fn dirs(root: &Path) -> ArchiveDirs {
        ArchiveDirs {
            sorted: root.join("sorted"),
            error: root.join("errors"),
        }
    }

    #[test]
    fn test_recognized_pdf_is_recorded_and_sorted() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("novak.pdf");
        fs::write(&src, ALLIANZ_PDF).unwrap();

        let ingestor = Ingestor::new(CsvTable::new(root.path().join("pojistky.csv")))
            .with_archive(dirs(root.path()));

        let Outcome::Recorded(record) = ingestor.ingest(&src) else {
            panic!("expected the document to be recorded");
        };

        assert_eq!(record.get(Field::LiabilityLimits), "100/100");
        assert_eq!(record.get(Field::Email), "jan.novak@example.cz");
        assert_eq!(record.get(Field::SourceFile), "novak.pdf");
        assert!(!src.exists());
        assert!(root.path().join("sorted").join("novak.pdf").exists());

        let csv = fs::read_to_string(root.path().join("pojistky.csv")).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_unreadable_pdf_goes_to_error_folder() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("rozbite.pdf");
        fs::write(&src, b"not a pdf").unwrap();

        let ingestor = Ingestor::new(CsvTable::new(root.path().join("pojistky.csv")))
            .with_archive(dirs(root.path()));

        let outcome = ingestor.ingest(&src);

        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert!(!src.exists());
        assert!(root.path().join("errors").join("rozbite.pdf").exists());
        assert!(!root.path().join("pojistky.csv").exists());
    }

    #[test]
    fn test_without_archive_file_stays() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("rozbite.pdf");
        fs::write(&src, b"not a pdf").unwrap();

        let ingestor = Ingestor::new(CsvTable::new(root.path().join("pojistky.csv")));

        assert!(matches!(ingestor.ingest(&src), Outcome::Rejected(_)));
        assert!(src.exists());
    }

    #[test]
    fn test_is_pdf_ignores_case_and_directories() {
        let root = TempDir::new().unwrap();
        for name in ["a.pdf", "b.PDF", "c.txt"] {
            fs::write(root.path().join(name), b"x").unwrap();
        }
        fs::create_dir(root.path().join("d.pdf")).unwrap();

        assert!(is_pdf(&root.path().join("a.pdf")));
        assert!(is_pdf(&root.path().join("b.PDF")));
        assert!(!is_pdf(&root.path().join("c.txt")));
        assert!(!is_pdf(&root.path().join("d.pdf")));
    }
}

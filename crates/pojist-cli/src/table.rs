//! Append-only CSV table of extracted records.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use pojist_core::{Field, FieldRecord};
use tracing::debug;

/// CSV file that receives one row per processed document.
#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
}

impl CsvTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first when the file is missing or empty.
    pub fn append(&self, record: &FieldRecord) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let needs_header = fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true);

        let mut wtr = csv::Writer::from_writer(vec![]);
        if needs_header {
            wtr.write_record(Field::header())?;
        }
        wtr.write_record(record.values())?;
        let bytes = wtr.into_inner()?;

        // One write per call keeps concurrent appenders from interleaving rows
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&bytes)?;

        debug!(
            "Appended row for {} to {}",
            record.get(Field::SourceFile),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(name: &str, file: &str) -> FieldRecord {
        let mut record = FieldRecord::for_source(file);
        record.set(Field::FullName, name);
        record
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_first_append_writes_header() {
        let dir = TempDir::new().unwrap();
        let table = CsvTable::new(dir.path().join("out").join("pojistky.csv"));

        table.append(&record("Jan Novák", "a.pdf")).unwrap();

        let rows = read_rows(table.path());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], Field::header().map(str::to_string).to_vec());
        assert_eq!(rows[1][0], "Jan Novák");
        assert_eq!(rows[1][Field::COUNT - 1], "a.pdf");
    }

    #[test]
    fn test_appends_preserve_existing_rows() {
        let dir = TempDir::new().unwrap();
        let table = CsvTable::new(dir.path().join("pojistky.csv"));

        table.append(&record("Jan Novák", "a.pdf")).unwrap();
        table.append(&record("Marie Svobodová", "b.pdf")).unwrap();

        let rows = read_rows(table.path());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], "Jan Novák");
        assert_eq!(rows[2][0], "Marie Svobodová");
    }

    #[test]
    fn test_empty_file_gets_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pojistky.csv");
        fs::write(&path, "").unwrap();

        CsvTable::new(&path).append(&record("Jan", "a.pdf")).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[0][0], Field::FullName.column());
    }

    #[test]
    fn test_values_with_commas_are_quoted() {
        let dir = TempDir::new().unwrap();
        let table = CsvTable::new(dir.path().join("pojistky.csv"));
        let mut rec = record("Jan", "a.pdf");
        rec.set(Field::Address, "Dlouhá 12, Praha");

        table.append(&rec).unwrap();

        let rows = read_rows(table.path());
        assert_eq!(rows[1][Field::Address as usize], "Dlouhá 12, Praha");
    }
}

//! Watch command - poll a folder and ingest PDFs as they arrive.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use console::style;
use glob::{glob, Pattern};
use tracing::{debug, info, warn};

use crate::ingest::{is_pdf, ArchiveDirs, Ingestor, Outcome};
use crate::table::CsvTable;

/// Arguments for the watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Folder scanned for incoming PDFs
    #[arg(long, env = "POJIST_WATCH_DIR")]
    watch_dir: Option<PathBuf>,

    /// Destination for recorded PDFs
    #[arg(long, env = "POJIST_SORTED_DIR")]
    sorted_dir: Option<PathBuf>,

    /// Destination for PDFs that could not be processed
    #[arg(long, env = "POJIST_ERROR_DIR")]
    error_dir: Option<PathBuf>,

    /// CSV table to append to
    #[arg(long, env = "POJIST_CSV")]
    csv: Option<PathBuf>,

    /// Poll interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,
}

/// Tracks file sizes between polls so half-copied files are not picked up.
///
/// A file is handed out once. It stays remembered while it is still in the
/// folder (for instance when it could not be moved away) and becomes eligible
/// again only after it has disappeared from a scan.
#[derive(Debug, Default)]
pub struct StableFiles {
    sizes: HashMap<PathBuf, u64>,
    handed_out: HashSet<PathBuf>,
}

impl StableFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current sizes and return the files whose size did not
    /// change since the previous poll.
    pub fn poll(&mut self, current: Vec<(PathBuf, u64)>) -> Vec<PathBuf> {
        let mut ready = Vec::new();
        let mut sizes = HashMap::with_capacity(current.len());
        let mut handed_out = HashSet::new();

        for (path, size) in current {
            if self.handed_out.contains(&path) {
                handed_out.insert(path);
            } else if self.sizes.get(&path) == Some(&size) {
                handed_out.insert(path.clone());
                ready.push(path);
            } else {
                sizes.insert(path, size);
            }
        }

        self.sizes = sizes;
        self.handed_out = handed_out;
        ready.sort();
        ready
    }
}

pub async fn run(args: WatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let watch_dir = args.watch_dir.unwrap_or(config.watch.watch_folder);
    let dirs = ArchiveDirs {
        sorted: args.sorted_dir.unwrap_or(config.watch.sorted_folder),
        error: args.error_dir.unwrap_or(config.watch.error_folder),
    };
    let csv_path = args.csv.unwrap_or(config.output.csv_path);
    let interval_ms = args.interval_ms.unwrap_or(config.watch.poll_interval_ms).max(1);

    for dir in [&watch_dir, &dirs.sorted, &dirs.error] {
        fs::create_dir_all(dir)?;
    }

    let ingestor = Ingestor::new(CsvTable::new(&csv_path)).with_archive(dirs);

    println!(
        "{} Watching {} (table: {}), press Ctrl-C to stop",
        style("ℹ").blue(),
        watch_dir.display(),
        csv_path.display()
    );

    let mut stable = StableFiles::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = &mut shutdown => {
                result?;
                info!("Shutdown requested");
                break;
            }
            _ = ticker.tick() => {
                for (path, outcome) in poll_folder(&watch_dir, &mut stable, &ingestor) {
                    report(&path, &outcome);
                }
            }
        }
    }

    println!("{} Stopped", style("✓").green());
    Ok(())
}

/// One watcher step: scan the folder and ingest every file that became stable.
fn poll_folder(
    dir: &Path,
    stable: &mut StableFiles,
    ingestor: &Ingestor,
) -> Vec<(PathBuf, Outcome)> {
    let candidates = match scan(dir) {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!("Scan of {} failed: {}", dir.display(), e);
            return Vec::new();
        }
    };

    stable
        .poll(candidates)
        .into_iter()
        .map(|path| {
            let outcome = ingestor.ingest(&path);
            (path, outcome)
        })
        .collect()
}

/// PDFs currently in the folder together with their sizes.
fn scan(dir: &Path) -> anyhow::Result<Vec<(PathBuf, u64)>> {
    let pattern = format!("{}/*", Pattern::escape(&dir.to_string_lossy()));

    let mut found = Vec::new();
    for path in glob(&pattern)?.filter_map(|r| r.ok()) {
        if !is_pdf(&path) {
            continue;
        }
        match fs::metadata(&path) {
            Ok(meta) => found.push((path, meta.len())),
            // removed between listing and stat
            Err(e) => debug!("Skipping {}: {}", path.display(), e),
        }
    }
    Ok(found)
}

fn report(path: &Path, outcome: &Outcome) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match outcome {
        Outcome::Recorded(record) => println!(
            "{} {} ({} fields)",
            style("✓").green(),
            name,
            record.filled_count()
        ),
        Outcome::Rejected(reason) => println!("{} {}: {}", style("✗").red(), name, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_file_ready_after_two_equal_sizes() {
        let mut stable = StableFiles::new();
        let a = PathBuf::from("a.pdf");

        assert!(stable.poll(vec![(a.clone(), 10)]).is_empty());
        assert_eq!(stable.poll(vec![(a.clone(), 10)]), vec![a.clone()]);
        assert!(stable.poll(vec![(a.clone(), 10)]).is_empty());
        assert!(stable.poll(vec![(a, 10)]).is_empty());
    }

    #[test]
    fn test_handed_out_file_returns_after_it_disappears() {
        let mut stable = StableFiles::new();
        let a = PathBuf::from("a.pdf");

        stable.poll(vec![(a.clone(), 10)]);
        assert_eq!(stable.poll(vec![(a.clone(), 10)]), vec![a.clone()]);
        stable.poll(vec![]);
        stable.poll(vec![(a.clone(), 10)]);
        assert_eq!(stable.poll(vec![(a.clone(), 10)]), vec![a]);
    }

    #[test]
    fn test_file_that_cannot_be_moved_is_ingested_once() {
        let root = TempDir::new().unwrap();
        let inbox = root.path().join("inbox");
        fs::create_dir_all(&inbox).unwrap();
        fs::write(inbox.join("rozbite.pdf"), b"not a pdf").unwrap();

        // Regular files where the archive folders should be
        let blocked = root.path().join("blocked");
        fs::write(&blocked, b"").unwrap();
        let ingestor = Ingestor::new(CsvTable::new(root.path().join("pojistky.csv")))
            .with_archive(ArchiveDirs {
                sorted: blocked.join("sorted"),
                error: blocked.join("errors"),
            });

        let mut stable = StableFiles::new();
        let ingested: usize = (0..6)
            .map(|_| poll_folder(&inbox, &mut stable, &ingestor).len())
            .sum();

        assert_eq!(ingested, 1);
        assert!(inbox.join("rozbite.pdf").exists());
    }

    #[test]
    fn test_recorded_file_left_in_inbox_adds_one_row() {
        let root = TempDir::new().unwrap();
        let inbox = root.path().join("inbox");
        fs::create_dir_all(&inbox).unwrap();
        fs::write(
            inbox.join("novak.pdf"),
            include_bytes!("../../tests/fixtures/allianz.pdf"),
        )
        .unwrap();

        let blocked = root.path().join("blocked");
        fs::write(&blocked, b"").unwrap();
        let csv_path = root.path().join("pojistky.csv");
        let ingestor = Ingestor::new(CsvTable::new(&csv_path)).with_archive(ArchiveDirs {
            sorted: blocked.join("sorted"),
            error: blocked.join("errors"),
        });

        let mut stable = StableFiles::new();
        for _ in 0..6 {
            poll_folder(&inbox, &mut stable, &ingestor);
        }

        let csv = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(inbox.join("novak.pdf").exists());
    }

    #[test]
    fn test_growing_file_is_not_ready() {
        let mut stable = StableFiles::new();
        let a = PathBuf::from("a.pdf");

        stable.poll(vec![(a.clone(), 10)]);
        assert!(stable.poll(vec![(a.clone(), 20)]).is_empty());
        assert_eq!(stable.poll(vec![(a.clone(), 20)]), vec![a]);
    }

    #[test]
    fn test_vanished_file_is_dropped() {
        let mut stable = StableFiles::new();
        let a = PathBuf::from("a.pdf");

        stable.poll(vec![(a.clone(), 10)]);
        stable.poll(vec![]);
        assert!(stable.poll(vec![(a, 10)]).is_empty());
    }

    #[test]
    fn test_scan_lists_only_pdfs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.pdf"), b"12345").unwrap();
        fs::write(dir.path().join("B.PDF"), b"1").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let mut found = scan(dir.path()).unwrap();
        found.sort();

        assert_eq!(
            found,
            vec![
                (dir.path().join("B.PDF"), 1),
                (dir.path().join("a.pdf"), 5),
            ]
        );
    }
}

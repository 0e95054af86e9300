//! Moving processed PDFs into the sorted and error folders.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

/// Move `src` into `dir`, keeping its file name.
///
/// An existing file of the same name is never overwritten: the moved file
/// gets a timestamp inserted before its extension instead.
pub fn move_into(src: &Path, dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let file_name = src
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Not a file path: {}", src.display()))?;

    let mut target = dir.join(file_name);
    if target.exists() {
        target = dir.join(timestamped_name(src));
    }

    if let Err(e) = fs::rename(src, &target) {
        // rename fails across filesystems
        warn!("Rename of {} failed ({}), copying instead", src.display(), e);
        fs::copy(src, &target)?;
        fs::remove_file(src)?;
    }

    debug!("Moved {} to {}", src.display(), target.display());
    Ok(target)
}

fn timestamped_name(src: &Path) -> String {
    let stem = src
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stamp = Local::now().format("%Y%m%d-%H%M%S%.3f");

    match src.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    }
}

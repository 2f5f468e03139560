use std::fs;
use std::path::{Path, PathBuf};
use crate::utils::{ConvertError, ConvertResult};

/// Get file size in bytes
pub fn get_file_size(path: impl AsRef<Path>) -> ConvertResult<u64> {
    fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| ConvertError::Io(format!(
            "Failed to get size of {}: {}", path.as_ref().display(), e
        )))
}

/// Create the output directory (and parents) if it does not exist yet.
pub fn ensure_dir(dir: impl AsRef<Path>) -> ConvertResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| ConvertError::Io(format!(
        "Cannot create output directory {}: {}", dir.display(), e
    )))
}

/// Builds `<dir>/<prefix><stem>.webp` for an input path.
pub fn webp_output_path(dir: &Path, prefix: &str, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    dir.join(format!("{prefix}{stem}.webp"))
}

/// File name of `path` for log lines, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

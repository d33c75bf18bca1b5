//! # File I/O Module
//!
//! Output files are written atomically: content goes to a sibling temp file,
//! is synced, and is then renamed over the destination. A half-written plot
//! or report never replaces a previous good one, and an existing file at the
//! destination is overwritten.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::write_atomic;
//! use std::path::Path;
//!
//! write_atomic(Path::new("result.json"), b"{}")?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Sibling temp path for `dest`, keeping the original extension last.
///
/// Encoders that pick a format from the extension (e.g. PNG writers) still
/// see the right one: `out/beam.png` becomes `out/beam.tmp.png`.
pub fn temp_path_for(dest: &Path) -> PathBuf {
    let stem = dest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match dest.extension() {
        Some(ext) => format!("{}.tmp.{}", stem, ext.to_string_lossy()),
        None => format!("{}.tmp", stem),
    };
    dest.with_file_name(name)
}

/// Move a fully written temp file over `dest`.
///
/// The temp file is removed if the rename fails.
pub fn replace_file(tmp_path: &Path, dest: &Path) -> CalcResult<()> {
    fs::rename(tmp_path, dest).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        CalcError::file_error("rename to final", dest.display().to_string(), e.to_string())
    })?;
    debug!(path = %dest.display(), "replaced output file");
    Ok(())
}

fn write_temp(tmp_path: &Path, contents: &[u8]) -> CalcResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })
}

/// Write `contents` to `dest` via temp file, sync, and rename.
///
/// No temp file is left behind on failure.
pub fn write_atomic(dest: &Path, contents: &[u8]) -> CalcResult<()> {
    let tmp_path = temp_path_for(dest);

    if let Err(e) = write_temp(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    replace_file(&tmp_path, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_keeps_extension() {
        let tmp = temp_path_for(Path::new("out/beam_deflection.png"));
        assert_eq!(tmp, PathBuf::from("out/beam_deflection.tmp.png"));

        let tmp = temp_path_for(Path::new("report"));
        assert_eq!(tmp, PathBuf::from("report.tmp"));
    }

    #[test]
    fn test_write_atomic_creates_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");

        write_atomic(&path, b"{\"ok\":true}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"ok\":true}");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_replace_missing_temp_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = replace_file(&dir.path().join("missing.tmp.png"), &dir.path().join("out.png")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_write_removes_temp_file() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let tmp = temp_path_for(&path);
        // Every write to /dev/full fails with ENOSPC
        std::os::unix::fs::symlink(full, &tmp).unwrap();

        let err = write_atomic(&path, b"{\"ok\":true}").unwrap_err();

        assert!(matches!(&err, CalcError::FileError { operation, .. } if operation != "create temp file"));
        assert!(fs::symlink_metadata(&tmp).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("result.json");
        let err = write_atomic(&path, b"x").unwrap_err();
        assert!(matches!(err, CalcError::FileError { .. }));
    }
}

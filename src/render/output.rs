use crate::render::error::RenderError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Fails with [`RenderError::OutputDirMissing`] unless `dir` is an existing directory.
pub(crate) fn require_dir(dir: &Path) -> Result<(), RenderError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(RenderError::OutputDirMissing(dir.to_path_buf()))
    }
}

/// Creates an empty temp file next to `target`, so the final rename stays on one filesystem.
fn temp_beside(target: &Path) -> Result<NamedTempFile, RenderError> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    require_dir(dir)?;
    NamedTempFile::new_in(dir).map_err(|e| RenderError::Write(target.to_path_buf(), e))
}

/// Replaces `target` with `temp`.
fn persist(temp: NamedTempFile, target: &Path) -> Result<PathBuf, RenderError> {
    temp.persist(target)
        .map_err(|e| RenderError::Persist(target.to_path_buf(), e))?;
    Ok(target.to_path_buf())
}

/// Writes `contents` to `target` through a temp file, so readers never see a partial page.
pub(crate) fn write_atomic(target: &Path, contents: &str) -> Result<PathBuf, RenderError> {
    let mut temp = temp_beside(target)?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| RenderError::Write(target.to_path_buf(), e))?;
    temp.flush()
        .map_err(|e| RenderError::Write(target.to_path_buf(), e))?;
    persist(temp, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic_replaces_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("page.html");

        write_atomic(&target, "first")?;
        write_atomic(&target, "second")?;

        assert_eq!(std::fs::read_to_string(&target)?, "second");
        // No temp files left behind.
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_write_atomic_missing_dir() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("absent").join("page.html");

        let err = write_atomic(&target, "x").expect_err("missing directory must fail");
        assert!(matches!(err, RenderError::OutputDirMissing(_)));
        Ok(())
    }
}

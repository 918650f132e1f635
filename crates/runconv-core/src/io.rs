use crate::error::{ConvertError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Replaces any existing file at `path`.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write rendered text to `<output_dir>/<basename>.xml`, creating the
/// directory (and parents) if needed. Fails if `output_dir` exists as a
/// non-directory. Returns the written path.
pub fn write_rendered(output_dir: &Path, basename: &str, text: &str) -> Result<PathBuf> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(ConvertError::OutputDirIsFile(output_dir.to_path_buf()));
    }
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{basename}.xml"));
    atomic_write(&path, text.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_basename_dot_xml() {
        let dir = TempDir::new().unwrap();
        let path = write_rendered(dir.path(), "my_Build", "<xml/>").unwrap();
        assert_eq!(path, dir.path().join("my_Build.xml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<xml/>");
    }

    #[test]
    fn creates_missing_output_dir_with_parents() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("deep/nested/out");
        let path = write_rendered(&out, "cfg", "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn replaces_existing_file_silently() {
        let dir = TempDir::new().unwrap();
        write_rendered(dir.path(), "cfg", "first").unwrap();
        let path = write_rendered(dir.path(), "cfg", "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn output_dir_colliding_with_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let collision = dir.path().join("not-a-dir");
        std::fs::write(&collision, "occupied").unwrap();
        let err = write_rendered(&collision, "cfg", "x").unwrap_err();
        assert!(matches!(err, ConvertError::OutputDirIsFile(p) if p == collision));
    }
}

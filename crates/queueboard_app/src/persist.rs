use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Atomically replace `{dir}/{filename}` by writing a temp file then
/// renaming, so a reader never observes a partial page.
pub struct AtomicPageWriter {
    dir: PathBuf,
}

impl AtomicPageWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PublishError> {
        ensure_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Windows rename does not replace; clear the old page first.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PublishError::Io(e.error))?;
        Ok(target)
    }
}

fn ensure_dir(dir: &Path) -> Result<(), PublishError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PublishError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PublishError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PublishError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::AtomicPageWriter;

    #[test]
    fn write_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let writer = AtomicPageWriter::new(temp.path().to_path_buf());

        let first = writer.write("queue.html", "before").unwrap();
        assert_eq!(fs::read_to_string(&first).unwrap(), "before");

        let second = writer.write("queue.html", "after").unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "after");
    }

    #[test]
    fn creates_missing_output_dir() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("public");
        let writer = AtomicPageWriter::new(out.clone());

        writer.write("queue.html", "page").unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn no_partial_file_when_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("not_a_dir");
        fs::write(&not_a_dir, "x").unwrap();

        let writer = AtomicPageWriter::new(not_a_dir.clone());
        assert!(writer.write("queue.html", "page").is_err());
        assert!(!not_a_dir.with_file_name("queue.html").exists());
    }
}

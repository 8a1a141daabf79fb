use std::io::Write;
use std::path::Path;
use weekplan_core::WeekplanResult;

/// Write-to-temp-then-rename file writer. The target either keeps its old
/// contents or gets the complete new ones.
pub struct AtomicWriter;

impl AtomicWriter {
    /// The parent directory must already exist.
    pub fn write_atomic(path: &Path, data: &[u8]) -> WeekplanResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    pub fn read_all(path: &Path) -> std::io::Result<Vec<u8>> {
        let data = std::fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_overwrite() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("tasks.json");

        AtomicWriter::write_atomic(&file_path, b"first").unwrap();
        AtomicWriter::write_atomic(&file_path, b"second").unwrap();

        assert_eq!(AtomicWriter::read_all(&file_path).unwrap(), b"second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("absent").join("tasks.json");

        assert!(AtomicWriter::write_atomic(&file_path, b"data").is_err());
        assert!(!file_path.exists());
    }
}

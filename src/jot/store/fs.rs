use super::KvStore;
use crate::error::{JotError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed key-value storage. Each key is a `{key}.json` file under
/// the root directory; the directory is created on first write.
pub struct FileKv {
    root: PathBuf,
}

impl FileKv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(JotError::Io)?;
        }
        Ok(())
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JotError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value).map_err(JotError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::new(dir.path());
        assert!(kv.get("notes").unwrap().is_none());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::new(dir.path());
        kv.set("notes", "[]").unwrap();
        assert_eq!(kv.get("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("jot");
        let mut kv = FileKv::new(&nested);
        kv.set("notes", "[]").unwrap();
        assert!(nested.join("notes.json").exists());
    }

    #[test]
    fn set_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::new(dir.path());
        kv.set("notes", "old").unwrap();
        kv.set("notes", "new").unwrap();
        assert_eq!(kv.get("notes").unwrap().as_deref(), Some("new"));
    }
}

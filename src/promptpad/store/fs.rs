use super::StorageBackend;
use crate::error::{PromptError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed storage for the prompt file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "prompts".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StorageBackend for FileStore {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PromptError::Io(e)),
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PromptError::Io)?;
            }
        }
        // Write to a sibling temp file and rename over the target, so a
        // failed write cannot truncate the existing file.
        let tmp = self.tmp_path();
        fs::write(&tmp, text).map_err(PromptError::Io)?;
        fs::rename(&tmp, &self.path).map_err(PromptError::Io)?;
        Ok(())
    }
}

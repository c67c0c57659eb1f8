use super::StorageBackend;
use crate::error::{PromptError, Result};
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    text: Option<String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            fail_writes: false,
        }
    }

    /// Current file contents, as a backend consumer would see them.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl StorageBackend for InMemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        if self.fail_writes {
            return Err(PromptError::Io(io::Error::new(
                io::ErrorKind::Other,
                "simulated write failure",
            )));
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
impl InMemoryStore {
    /// Make subsequent writes fail, to exercise I/O error paths.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

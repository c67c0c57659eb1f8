//! # Storage Layer
//!
//! The [`StorageBackend`] trait abstracts the persisted prompt file so the
//! record store can work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (sync targets, databases) without changing
//!   core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! The backend is a single-file blob store, not a directory tree: the whole
//! file is read as text and rewritten as text, and backends never interpret
//! the contents. Encoding and decoding live in [`crate::codec`];
//! [`prompt_store::PromptStore`] owns the in-memory record list and decides
//! when to rewrite.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. Writes go through a
//!   sibling temp file plus rename, so an interrupted write never leaves a
//!   truncated prompt file.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence, plus a gated write-failure switch for exercising I/O
//!   error paths.
//!
//! ## Single-Writer Assumption
//!
//! One active writer per file is assumed. The quick-capture path re-reads
//! the file instead of sharing an open session's memory, so a capture
//! racing a session write resolves last-write-wins.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod prompt_store;

/// Abstract interface to the persisted prompt file.
pub trait StorageBackend {
    /// Read the full file as text. `Ok(None)` when the file does not exist
    /// yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the full file contents, creating the file if absent.
    fn write(&mut self, text: &str) -> Result<()>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for &mut S {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}

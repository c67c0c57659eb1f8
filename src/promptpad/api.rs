//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all promptpad operations, regardless of the UI driving
//! them. It owns the session state — the record store and the current
//! filter — and dispatches intents to the command functions.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation concerns**: it returns data structures, not strings
//! - **Terminal or file-dialog I/O**: persistence happens through the
//!   injected [`StorageBackend`]
//!
//! ## Generic Over StorageBackend
//!
//! `PromptApi<S: StorageBackend>` is generic over the storage backend:
//! production uses `PromptApi<FileStore>`, tests use
//! `PromptApi<InMemoryStore>`.
//!
//! The one operation deliberately NOT on the facade is quick capture
//! ([`crate::commands::capture`]): it must not share an open session's
//! memory, so it takes a bare backend instead.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::filter::{self, Axis, FilterState};
use crate::index::ClassificationIndex;
use crate::model::Record;
use crate::store::prompt_store::PromptStore;
use crate::store::StorageBackend;
use std::path::Path;

pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::store::prompt_store::{ImportReport, RecordDraft};

/// The main API facade for promptpad operations.
///
/// Owns the record store and the filter session; every mutation reconciles
/// the filter selections against the new record set before returning.
pub struct PromptApi<S: StorageBackend> {
    store: PromptStore<S>,
    filter: FilterState,
}

impl<S: StorageBackend> PromptApi<S> {
    /// Open the store behind `backend`. An unreadable or mismatched file is
    /// reinitialized, never a hard failure.
    pub fn open(backend: S) -> Result<Self> {
        Ok(Self {
            store: PromptStore::open(backend)?,
            filter: FilterState::default(),
        })
    }

    pub fn create(&mut self, draft: RecordDraft) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, draft)?;
        self.reconcile(None);
        Ok(result)
    }

    pub fn update(&mut self, id: &str, draft: RecordDraft) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, id, draft)?;
        self.reconcile(None);
        Ok(result)
    }

    pub fn delete(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.reconcile(None);
        Ok(result)
    }

    pub fn import_text(&mut self, text: &str) -> Result<CmdResult> {
        let result = commands::import::run(&mut self.store, text)?;
        self.reconcile(None);
        Ok(result)
    }

    pub fn export_to(&self, dir: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, dir)
    }

    /// The visible listing under the current filter.
    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.filter)
    }

    /// Select a group (or clear it with `None`) and return the fresh
    /// listing. The subgroup selection survives only where it still occurs.
    pub fn set_group(&mut self, group: Option<String>) -> Result<CmdResult> {
        self.filter.group = group;
        self.reconcile(Some(Axis::Group));
        self.list()
    }

    /// Select a subgroup (or clear it with `None`) and return the fresh
    /// listing. The group selection survives only where it still applies.
    pub fn set_subgroup(&mut self, subgroup: Option<String>) -> Result<CmdResult> {
        self.filter.subgroup = subgroup;
        self.reconcile(Some(Axis::Subgroup));
        self.list()
    }

    pub fn set_query(&mut self, query: String) -> Result<CmdResult> {
        self.filter.query = query;
        self.list()
    }

    pub fn clear_filter(&mut self) -> Result<CmdResult> {
        self.filter = FilterState::default();
        self.list()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.store.get(id)
    }

    pub fn rows_dropped(&self) -> usize {
        self.store.rows_dropped()
    }

    fn reconcile(&mut self, just_changed: Option<Axis>) {
        let index = ClassificationIndex::build(self.store.records());
        filter::reconcile(&mut self.filter, &index, just_changed);
    }
}

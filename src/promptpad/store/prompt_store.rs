//! The record store: owns the authoritative in-memory record list and keeps
//! the persisted file in sync after every mutation.

use super::StorageBackend;
use crate::codec::{self, RawRow};
use crate::error::{PromptError, Result};
use crate::model::{self, Record, RecordKey};
use std::collections::HashSet;
use uuid::Uuid;

/// Input fields for create/update. Classification labels may be empty;
/// title and content must survive trimming.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub group: String,
    pub subgroup: String,
    pub title: String,
    pub content: String,
}

/// Outcome of a bulk import.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
}

pub struct PromptStore<S: StorageBackend> {
    backend: S,
    records: Vec<Record>,
    rows_dropped: usize,
}

impl<S: StorageBackend> PromptStore<S> {
    /// Open the store, loading the record list from the backend.
    ///
    /// A missing file, an empty file, or a header that does not match the
    /// expected columns reinitializes the file to a header-only state
    /// instead of failing; only backend I/O errors propagate.
    pub fn open(backend: S) -> Result<Self> {
        let mut store = Self {
            backend,
            records: Vec::new(),
            rows_dropped: 0,
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-read the backend, replacing the in-memory list.
    pub fn reload(&mut self) -> Result<()> {
        let text = self.backend.read()?.unwrap_or_default();
        match codec::decode(&text) {
            Ok(rows) => {
                let (records, dropped) = records_from_rows(rows);
                self.records = records;
                self.rows_dropped = dropped;
            }
            Err(PromptError::HeaderMismatch) => {
                self.records = Vec::new();
                self.rows_dropped = 0;
                self.save()?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Rows discarded by the last load because they failed the record
    /// invariants (empty title or content after trimming).
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn create(&mut self, draft: RecordDraft) -> Result<Record> {
        let draft = validate_draft(draft)?;
        self.ensure_unique(
            &RecordKey::new(&draft.group, &draft.subgroup, &draft.title),
            None,
        )?;
        let record = Record::new(draft.group, draft.subgroup, draft.title, draft.content);
        self.records.push(record.clone());
        self.save()?;
        Ok(record)
    }

    /// Replace a record's fields, preserving its id and creation time and
    /// bumping `updated_at`.
    pub fn update(&mut self, id: &str, draft: RecordDraft) -> Result<Record> {
        let draft = validate_draft(draft)?;
        self.ensure_unique(
            &RecordKey::new(&draft.group, &draft.subgroup, &draft.title),
            Some(id),
        )?;
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| PromptError::RecordNotFound(id.to_string()))?;
        {
            let record = &mut self.records[pos];
            record.group = draft.group;
            record.subgroup = draft.subgroup;
            record.title = draft.title;
            record.content = draft.content;
            record.updated_at = model::now();
        }
        self.save()?;
        Ok(self.records[pos].clone())
    }

    /// Remove a record. Returns whether anything was removed; an unknown id
    /// is a no-op, not an error.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Merge externally provided prompt-file text into the store.
    ///
    /// The header must match or the whole import is rejected with nothing
    /// applied. Rows matching an existing record's uniqueness key are
    /// skipped; everything else is appended, with a fresh id whenever the
    /// incoming id is empty or already taken (imports never overwrite).
    pub fn import_merge(&mut self, text: &str) -> Result<ImportReport> {
        let rows = codec::decode(text)?;
        let (incoming, _) = records_from_rows(rows);

        let mut keys: HashSet<RecordKey> = self.records.iter().map(|r| r.key()).collect();
        let mut ids: HashSet<String> = self.records.iter().map(|r| r.id.clone()).collect();
        let mut report = ImportReport::default();

        for mut record in incoming {
            if keys.contains(&record.key()) {
                report.skipped += 1;
                continue;
            }
            if ids.contains(&record.id) {
                record.id = Uuid::new_v4().to_string();
            }
            keys.insert(record.key());
            ids.insert(record.id.clone());
            self.records.push(record);
            report.added += 1;
        }

        if report.added > 0 {
            self.save()?;
        }
        Ok(report)
    }

    /// The current encoding of the full record list, as written to disk.
    pub fn export_text(&self) -> String {
        codec::encode(&self.records)
    }

    /// Re-encode and rewrite the persisted file. Mutations call this
    /// automatically; callers only need it to retry after a failed write
    /// (the in-memory list is kept as the dirty truth, never rolled back).
    pub fn save(&mut self) -> Result<()> {
        let text = codec::encode(&self.records);
        self.backend.write(&text)
    }

    fn ensure_unique(&self, key: &RecordKey, exclude_id: Option<&str>) -> Result<()> {
        let clash = self
            .records
            .iter()
            .any(|r| Some(r.id.as_str()) != exclude_id && r.key() == *key);
        if clash {
            return Err(PromptError::Validation(
                "a record with this title already exists in this group/subgroup".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl<S: StorageBackend> PromptStore<S> {
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}

fn validate_draft(mut draft: RecordDraft) -> Result<RecordDraft> {
    draft.group = draft.group.trim().to_string();
    draft.subgroup = draft.subgroup.trim().to_string();
    draft.title = draft.title.trim().to_string();
    if draft.title.is_empty() {
        return Err(PromptError::Validation("title cannot be empty".into()));
    }
    if draft.content.trim().is_empty() {
        return Err(PromptError::Validation("content cannot be empty".into()));
    }
    Ok(draft)
}

/// Map decoded rows to records, dropping rows that fail the record
/// invariants. Rows with an empty id get a fresh one; missing or
/// unparseable timestamps default to now.
fn records_from_rows(rows: Vec<RawRow>) -> (Vec<Record>, usize) {
    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0;
    for row in rows {
        if row.title.trim().is_empty() || row.content.trim().is_empty() {
            dropped += 1;
            continue;
        }
        let now = model::now();
        let id = if row.id.trim().is_empty() {
            Uuid::new_v4().to_string()
        } else {
            row.id
        };
        records.push(Record {
            id,
            group: row.group,
            subgroup: row.subgroup,
            title: row.title,
            content: row.content,
            created_at: codec::parse_timestamp(&row.created_at).unwrap_or(now),
            updated_at: codec::parse_timestamp(&row.updated_at).unwrap_or(now),
        });
    }
    (records, dropped)
}

//! Quick capture: the single-record append path invoked outside any open
//! editing session (e.g. from a selection-triggered shell binding).

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PromptError, Result};
use crate::store::prompt_store::{PromptStore, RecordDraft};
use crate::store::StorageBackend;

/// Longest title a capture produces, ellipsis included.
const TITLE_MAX: usize = 80;
const ELLIPSIS: &str = "...";

/// Append one record built from raw text: empty classification, title =
/// the text capped at [`TITLE_MAX`] characters, content = the text itself.
///
/// Takes a bare backend rather than an open store: the file is read fresh,
/// the record appended, and the whole file written back, sharing no memory
/// with any concurrently open session.
pub fn run<S: StorageBackend>(backend: S, text: &str) -> Result<CmdResult> {
    if text.trim().is_empty() {
        return Err(PromptError::Validation("nothing to capture".into()));
    }

    let mut store = PromptStore::open(backend)?;
    let record = store.create(RecordDraft {
        group: String::new(),
        subgroup: String::new(),
        title: capture_title(text),
        content: text.to_string(),
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Captured: {}",
        record.title
    )));
    result.affected_records.push(record);
    Ok(result)
}

fn capture_title(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= TITLE_MAX {
        return text.to_string();
    }
    let keep = TITLE_MAX - ELLIPSIS.chars().count();
    let mut title: String = text.chars().take(keep).collect();
    title.push_str(ELLIPSIS);
    title
}

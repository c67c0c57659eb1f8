use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::prompt_store::{PromptStore, RecordDraft};
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(store: &mut PromptStore<S>, draft: RecordDraft) -> Result<CmdResult> {
    let record = store.create(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Prompt created: {}",
        record.title
    )));
    result.affected_records.push(record);
    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::prompt_store::PromptStore;
use crate::store::StorageBackend;

/// Merge externally provided prompt-file text. A header mismatch rejects
/// the whole import with nothing applied; duplicates under the uniqueness
/// key are skipped, never overwritten.
pub fn run<S: StorageBackend>(store: &mut PromptStore<S>, text: &str) -> Result<CmdResult> {
    let report = store.import_merge(text)?;

    let mut result = CmdResult::default();
    if report.skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "Skipped {} duplicate prompt(s).",
            report.skipped
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Imported {} prompt(s).",
        report.added
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn merges_and_reports_counts() {
        let mut store = PromptStore::open(InMemoryStore::new()).unwrap();
        let text = "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\na,G,S,t1,c1,,\r\nb,G,S,t2,c2,,\r\n";
        let result = run(&mut store, text).unwrap();
        assert_eq!(store.records().len(), 2);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn bad_header_rejects_the_whole_file() {
        let mut store = PromptStore::open(InMemoryStore::new()).unwrap();
        let err = run(
            &mut store,
            "ID,Group,Subgroup,Title,Body,Created,Modified\r\na,G,S,t1,c1,,\r\n",
        )
        .unwrap_err();
        assert!(matches!(err, PromptError::HeaderMismatch));
        assert!(store.records().is_empty());
    }
}

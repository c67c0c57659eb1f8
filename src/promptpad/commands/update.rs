use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::prompt_store::{PromptStore, RecordDraft};
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(
    store: &mut PromptStore<S>,
    id: &str,
    draft: RecordDraft,
) -> Result<CmdResult> {
    let record = store.update(id, draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Prompt updated: {}",
        record.title
    )));
    result.affected_records.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::PromptError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn updates_content_in_place() {
        let mut store = PromptStore::open(InMemoryStore::new()).unwrap();
        let created = create::run(
            &mut store,
            RecordDraft {
                group: String::new(),
                subgroup: String::new(),
                title: "Title".into(),
                content: "Old".into(),
            },
        )
        .unwrap();
        let id = created.affected_records[0].id.clone();

        run(
            &mut store,
            &id,
            RecordDraft {
                group: String::new(),
                subgroup: String::new(),
                title: "Title".into(),
                content: "New".into(),
            },
        )
        .unwrap();
        assert_eq!(store.get(&id).unwrap().content, "New");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = PromptStore::open(InMemoryStore::new()).unwrap();
        let err = run(
            &mut store,
            "missing",
            RecordDraft {
                group: String::new(),
                subgroup: String::new(),
                title: "t".into(),
                content: "c".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, PromptError::RecordNotFound(_)));
    }
}

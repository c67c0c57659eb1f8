use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::prompt_store::PromptStore;
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(store: &mut PromptStore<S>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.delete(id)? {
        result.add_message(CmdMessage::success("Prompt deleted."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "No prompt with id {}; nothing deleted.",
            id
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;
    use crate::store::prompt_store::RecordDraft;

    #[test]
    fn deleting_twice_is_harmless() {
        let mut store = PromptStore::open(InMemoryStore::new()).unwrap();
        let created = create::run(
            &mut store,
            RecordDraft {
                group: String::new(),
                subgroup: String::new(),
                title: "t".into(),
                content: "c".into(),
            },
        )
        .unwrap();
        let id = created.affected_records[0].id.clone();

        run(&mut store, &id).unwrap();
        assert!(store.records().is_empty());
        // Second delete is a no-op, not an error.
        run(&mut store, &id).unwrap();
    }
}

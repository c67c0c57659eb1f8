use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PromptError, Result};
use crate::store::prompt_store::PromptStore;
use crate::store::StorageBackend;
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Write the full record list, in the persisted encoding, to a
/// timestamp-suffixed file under `dir`. The suffix keeps repeated exports
/// from colliding.
pub fn run<S: StorageBackend>(store: &PromptStore<S>, dir: &Path) -> Result<CmdResult> {
    let filename = format!("prompts-{}.csv", Utc::now().format("%Y-%m-%d_%H%M%S"));
    let path = dir.join(filename);
    fs::write(&path, store.export_text()).map_err(PromptError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} prompt(s) to {}",
        store.records().len(),
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;
    use crate::store::prompt_store::RecordDraft;
    use tempfile::TempDir;

    #[test]
    fn writes_the_store_encoding_to_a_timestamped_file() {
        let mut store = PromptStore::open(InMemoryStore::new()).unwrap();
        create::run(
            &mut store,
            RecordDraft {
                group: "Work".into(),
                subgroup: String::new(),
                title: "Greeting".into(),
                content: "Hi, \"friend\"".into(),
            },
        )
        .unwrap();

        let dir = TempDir::new().unwrap();
        let result = run(&store, dir.path()).unwrap();
        let path = result.export_path.unwrap();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("prompts-"));
        assert!(name.ends_with(".csv"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, store.export_text());
    }

    #[test]
    fn an_empty_store_exports_a_header_only_file() {
        let store = PromptStore::open(InMemoryStore::new()).unwrap();
        let dir = TempDir::new().unwrap();
        let result = run(&store, dir.path()).unwrap();
        let written = fs::read_to_string(result.export_path.unwrap()).unwrap();
        assert_eq!(written, "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\n");
    }
}

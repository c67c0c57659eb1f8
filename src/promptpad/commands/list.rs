use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FilterState};
use crate::index::ClassificationIndex;
use crate::store::prompt_store::PromptStore;
use crate::store::StorageBackend;

/// The listing intent: the visible subset under the current filter plus the
/// constrained selector contents, derived fresh from the store snapshot.
pub fn run<S: StorageBackend>(store: &PromptStore<S>, state: &FilterState) -> Result<CmdResult> {
    let index = ClassificationIndex::build(store.records());
    let options = filter::option_lists(&index, state);
    let listed = filter::visible(store.records(), state);

    let mut result = CmdResult::default()
        .with_listed_records(listed)
        .with_options(options);
    if store.rows_dropped() > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} malformed row(s) skipped while loading the prompt file.",
            store.rows_dropped()
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

    fn seed(store: &mut PromptStore<InMemoryStore>, group: &str, subgroup: &str, title: &str) {
        create::run(
            store,
            RecordDraft {
                group: group.into(),
                subgroup: subgroup.into(),
                title: title.into(),
                content: format!("{} content", title),
            },
        )
        .unwrap();
    }

    #[test]
    fn lists_everything_with_no_filter() {
        let mut store = PromptStore::open(InMemoryStore::new()).unwrap();
        seed(&mut store, "A", "x", "one");
        seed(&mut store, "B", "y", "two");
        let result = run(&store, &FilterState::default()).unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.options.groups, vec!["A", "B"]);
    }

    #[test]
    fn filter_and_query_narrow_the_listing() {
        let mut store = PromptStore::open(InMemoryStore::new()).unwrap();
        seed(&mut store, "A", "x", "alpha");
        seed(&mut store, "A", "y", "beta");
        seed(&mut store, "B", "y", "gamma");

        let state = FilterState {
            group: Some("A".into()),
            subgroup: None,
            query: "beta".into(),
        };
        let result = run(&store, &state).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].title, "beta");
        assert_eq!(result.options.subgroups, vec!["x", "y"]);
    }

    #[test]
    fn reports_rows_skipped_during_load() {
        let text = "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\n1,g,s,ok,c,,\r\n2,g,s,,missing-title,,\r\n";
        let store = PromptStore::open(InMemoryStore::with_text(text)).unwrap();
        let result = run(&store, &FilterState::default()).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }
}

use crate::filter::OptionLists;
use crate::model::Record;
use std::path::PathBuf;

pub mod capture;
pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result every command returns. The presentation layer decides
/// how (and whether) to render each part.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records the command created, changed or removed.
    pub affected_records: Vec<Record>,
    /// The visible subset under the current filter, newest update first.
    pub listed_records: Vec<Record>,
    /// Constrained Group/Subgroup selector contents for the current filter.
    pub options: OptionLists,
    /// Where an export landed, when one happened.
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_options(mut self, options: OptionLists) -> Self {
        self.options = options;
        self
    }
}

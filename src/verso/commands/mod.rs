//! Command layer.
//!
//! One module per CLI verb. Commands are pure: they take already-loaded
//! data (or a source, for `check`), produce a [`CmdResult`], and never
//! print or exit. The CLI layer decides how a result reaches the screen.

pub mod check;
pub mod config;
pub mod list;
pub mod show;
pub mod tags;

use crate::model::Poem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// What a command produced. Fields are additive: each command fills the
/// ones it uses and the CLI renders whatever is present.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Poems to render, as cards or in full.
    pub listed: Vec<Poem>,
    /// Tag names with the number of poems carrying each.
    pub tag_counts: Vec<(String, usize)>,
    /// Ids with missing documents, from `check`.
    pub problems: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, poems: Vec<Poem>) -> Self {
        self.listed = poems;
        self
    }

    pub fn with_tag_counts(mut self, tag_counts: Vec<(String, usize)>) -> Self {
        self.tag_counts = tag_counts;
        self
    }
}

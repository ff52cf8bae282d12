//! Decoded commands
//!
//! A [`Command`] is the typed result of decoding one command line. Indices
//! are still positions in the listed contacts; they are resolved to contact
//! ids only when the command runs (see [`Command::execute`]).

use serde::Serialize;

use crate::model::{
    ContactDraft, ContactEdit, FieldKey, FieldValue, FindScope, Index, LinkLabel, Tag,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a contact
    Add { draft: ContactDraft },

    /// Change or clear core fields of a contact
    Edit { index: Index, edit: ContactEdit },

    Delete { index: Index },

    /// Add and remove tags in one step
    Tag {
        index: Index,
        add: Vec<Tag>,
        remove: Vec<Tag>,
    },

    Untag { index: Index, tags: Vec<Tag> },

    /// Set (`/key:value`) and remove (`/key`) custom fields
    Field {
        index: Index,
        set: Vec<(FieldKey, FieldValue)>,
        unset: Vec<FieldKey>,
    },

    Link {
        from: Index,
        label: LinkLabel,
        to: Index,
    },

    Unlink {
        from: Index,
        label: LinkLabel,
        to: Index,
    },

    /// Narrow the listed contacts
    Find {
        keywords: Vec<String>,
        scope: FindScope,
    },

    /// Drop any filter and list every contact
    List,

    /// Remove every contact
    Clear,

    Help,
    Exit,
}

impl Command {
    /// Imperative word this command is bound to in the standard bindings
    pub fn imperative(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Edit { .. } => "edit",
            Command::Delete { .. } => "delete",
            Command::Tag { .. } => "tag",
            Command::Untag { .. } => "untag",
            Command::Field { .. } => "field",
            Command::Link { .. } => "link",
            Command::Unlink { .. } => "unlink",
            Command::Find { .. } => "find",
            Command::List => "list",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

/// What a command reports back to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub feedback: String,

    /// Non-fatal notes, such as a tag that was already present
    pub warnings: Vec<String>,

    /// The caller should display usage for every command
    pub show_help: bool,

    /// The caller should stop reading commands
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn help() -> Self {
        Self {
            show_help: true,
            ..Self::new("Showing help.")
        }
    }

    pub fn exit() -> Self {
        Self {
            exit: true,
            ..Self::new("Goodbye.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_constructors() {
        let help = CommandResult::help();
        assert!(help.show_help);
        assert!(!help.exit);

        let exit = CommandResult::exit();
        assert!(exit.exit);
        assert!(exit.warnings.is_empty());
    }

    #[test]
    fn test_result_serializes() {
        let result = CommandResult::new("Deleted Alice").with_warnings(vec!["w".into()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["feedback"], "Deleted Alice");
        assert_eq!(json["warnings"][0], "w");
        assert_eq!(json["exit"], false);
    }
}

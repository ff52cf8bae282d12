//! Extractors for the standard commands
//!
//! Every extractor checks in the same order: structure (parameter count and
//! kinds, option keys), then value formats, then domain rules that relate
//! several values. The first failure is returned.

mod contact;
mod fields;
mod links;
mod listing;
mod session;
mod tags;

pub use contact::{extract_add, extract_delete, extract_edit};
pub use fields::extract_field;
pub use links::{extract_link, extract_unlink};
pub use listing::{extract_find, extract_list};
pub use session::{extract_clear, extract_exit, extract_help};
pub use tags::{extract_tag, extract_untag};

use super::bare_command::BareCommand;
use super::bindings::Extractor;
use super::validation::{validate_no_parameters_after, validate_options};
use crate::errors::ValidationError;

type Result<T> = std::result::Result<T, ValidationError>;

/// Word, usage line and extractor for every standard command, in help order
pub(crate) const STANDARD: &[(&str, &str, Extractor)] = &[
    (
        "add",
        "add /name:NAME [/phone:PHONE] [/email:EMAIL] [/address:ADDRESS] [/tag:TAG]...",
        extract_add,
    ),
    (
        "edit",
        "edit INDEX [/name:NAME] [/phone[:PHONE]] [/email[:EMAIL]] [/address[:ADDRESS]]",
        extract_edit,
    ),
    ("delete", "delete INDEX", extract_delete),
    ("tag", "tag INDEX [+|-]TAG...", extract_tag),
    ("untag", "untag INDEX TAG...", extract_untag),
    ("field", "field INDEX /KEY[:VALUE]...", extract_field),
    ("link", "link INDEX LABEL INDEX", extract_link),
    ("unlink", "unlink INDEX LABEL INDEX", extract_unlink),
    (
        "find",
        "find KEYWORD... [/name] [/phone] [/email] [/address] [/tag] [/field]",
        extract_find,
    ),
    ("list", "list", extract_list),
    ("clear", "clear", extract_clear),
    ("help", "help", extract_help),
    ("exit", "exit", extract_exit),
];

/// The command takes nothing after the imperative
fn validate_no_arguments(cmd: &BareCommand) -> Result<()> {
    validate_no_parameters_after(cmd, 0)?;
    validate_options(cmd, &[])
}

/// Value of an option that must carry one when present
fn required_value<'a>(key: &str, occurrence: Option<Option<&'a str>>) -> Result<Option<&'a str>> {
    match occurrence {
        Some(None) => Err(ValidationError::MissingOptionValue {
            key: key.to_string(),
        }),
        Some(Some(value)) => Ok(Some(value)),
        None => Ok(None),
    }
}

//! Command execution against an [`AddressBook`]
//!
//! Every index is resolved against the listed contacts before anything is
//! changed, so a command that fails leaves the book exactly as it was.

use std::collections::BTreeSet;

use rolo_core_types::schema::OP_EXECUTE;

use crate::commands::{Command, CommandResult};
use crate::errors::Result;
use crate::model::{Contact, ContactFilter, Tag};
use crate::ops::{contact_ops, field_ops, link_ops, tag_ops, AddressBook};
use crate::{log_op_end, log_op_error, log_op_start};

impl Command {
    /// Run this command against `book`
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`](crate::errors::CommandError) when an index
    /// is past the listed contacts, a name or link would be duplicated, or a
    /// link to remove does not exist. The book is unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use rolo_core::grammar::Decoder;
    /// use rolo_core::ops::AddressBook;
    ///
    /// let decoder = Decoder::standard();
    /// let mut book = AddressBook::new();
    ///
    /// let add = decoder.interpret(r#"add /name:"Alice Tan" /tag:friend"#).unwrap();
    /// let result = add.execute(&mut book).unwrap();
    /// assert_eq!(result.feedback, "Added Alice Tan; tags: friend");
    /// assert_eq!(book.contacts().len(), 1);
    /// ```
    pub fn execute(&self, book: &mut AddressBook) -> Result<CommandResult> {
        let imperative = self.imperative();
        log_op_start!(OP_EXECUTE, imperative = imperative);
        let start = std::time::Instant::now();

        let result = run(self, book).map_err(|e| {
            log_op_error!(
                OP_EXECUTE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                imperative = imperative
            );
            e
        })?;

        log_op_end!(
            OP_EXECUTE,
            duration_ms = start.elapsed().as_millis() as u64,
            imperative = imperative,
            warning_count = result.warnings.len() as u64
        );
        Ok(result)
    }
}

fn run(cmd: &Command, book: &mut AddressBook) -> Result<CommandResult> {
    match cmd {
        Command::Add { draft } => {
            let warnings = repeated_tag_warnings(&draft.tags);
            let id = contact_ops::add_contact(book, draft.clone())?;
            let summary = book.get(&id)?.summary();
            Ok(CommandResult::new(format!("Added {}", summary)).with_warnings(warnings))
        }

        Command::Edit { index, edit } => {
            let id = book.resolve(*index)?;
            contact_ops::edit_contact(book, &id, edit.clone())?;
            let summary = book.get(&id)?.summary();
            Ok(CommandResult::new(format!("Edited {}", summary)))
        }

        Command::Delete { index } => {
            let id = book.resolve(*index)?;
            let removed = contact_ops::delete_contact(book, &id)?;
            Ok(CommandResult::new(format!("Deleted {}", removed.name)))
        }

        Command::Tag { index, add, remove } => {
            let id = book.resolve(*index)?;
            let changes = tag_ops::update_tags(book, &id, add, remove)?;

            let mut warnings = repeated_tag_warnings(add);
            warnings.extend(repeated_tag_warnings(remove));
            warnings.extend(unchanged(add, &changes.added, "already has tag"));
            warnings.extend(unchanged(remove, &changes.removed, "does not have tag"));

            let contact = book.get(&id)?;
            Ok(CommandResult::new(format!("Tagged {}", contact.summary())).with_warnings(warnings))
        }

        Command::Untag { index, tags } => {
            let id = book.resolve(*index)?;
            let changes = tag_ops::update_tags(book, &id, &[], tags)?;

            let mut warnings = repeated_tag_warnings(tags);
            warnings.extend(unchanged(tags, &changes.removed, "does not have tag"));

            let contact = book.get(&id)?;
            Ok(CommandResult::new(format!("Untagged {}", contact.summary()))
                .with_warnings(warnings))
        }

        Command::Field { index, set, unset } => {
            let id = book.resolve(*index)?;
            let missing = field_ops::update_fields(book, &id, set, unset)?;
            let warnings = missing
                .iter()
                .map(|key| format!("contact has no field '{}'", key))
                .collect();
            let contact = book.get(&id)?;
            Ok(CommandResult::new(format!("Updated fields of {}", contact.summary()))
                .with_warnings(warnings))
        }

        Command::Link { from, label, to } => {
            let from_id = book.resolve(*from)?;
            let to_id = book.resolve(*to)?;
            link_ops::link(book, &from_id, label, &to_id)?;
            Ok(CommandResult::new(format!(
                "Linked {} to {} as '{}'",
                book.get(&from_id)?.name,
                book.get(&to_id)?.name,
                label
            )))
        }

        Command::Unlink { from, label, to } => {
            let from_id = book.resolve(*from)?;
            let to_id = book.resolve(*to)?;
            link_ops::unlink(book, &from_id, label, &to_id)?;
            Ok(CommandResult::new(format!(
                "Removed '{}' link from {} to {}",
                label,
                book.get(&from_id)?.name,
                book.get(&to_id)?.name
            )))
        }

        Command::Find { keywords, scope } => {
            book.set_filter(Some(ContactFilter {
                keywords: keywords.clone(),
                scope: *scope,
            }));
            let listed = book.listed();
            let feedback = format!("{} contacts listed{}", listed.len(), numbered(&listed));
            Ok(CommandResult::new(feedback))
        }

        Command::List => {
            book.set_filter(None);
            let listed = book.listed();
            Ok(CommandResult::new(format!("Listed all contacts{}", numbered(&listed))))
        }

        Command::Clear => {
            book.clear();
            Ok(CommandResult::new("Address book has been cleared"))
        }

        Command::Help => Ok(CommandResult::help()),

        Command::Exit => Ok(CommandResult::exit()),
    }
}

fn numbered(contacts: &[&Contact]) -> String {
    contacts
        .iter()
        .enumerate()
        .map(|(i, c)| format!("\n{}. {}", i + 1, c.summary()))
        .collect()
}

/// One warning per tag given more than once, in first-seen order
fn repeated_tag_warnings(tags: &[Tag]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    tags.iter()
        .filter(|tag| !seen.insert(*tag) && reported.insert(*tag))
        .map(|tag| format!("tag '{}' was given more than once", tag))
        .collect()
}

/// Warnings for tags in `requested` that are missing from `changed`
fn unchanged(requested: &[Tag], changed: &[Tag], what: &str) -> Vec<String> {
    let mut reported = BTreeSet::new();
    requested
        .iter()
        .filter(|tag| !changed.contains(tag) && reported.insert(*tag))
        .map(|tag| format!("contact {} '{}'", what, tag))
        .collect()
}

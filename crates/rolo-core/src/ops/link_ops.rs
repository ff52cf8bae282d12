use super::address_book::AddressBook;
use crate::errors::{CommandError, Result};
use crate::model::{Link, LinkLabel};

/// Add a labelled link from one contact to another
///
/// # Errors
/// * `ContactNotFound` - either id is unknown
/// * `DuplicateLink` - the same link already exists
pub fn link(book: &mut AddressBook, from_id: &str, label: &LinkLabel, to_id: &str) -> Result<()> {
    let to_name = book.get(to_id)?.name.to_string();
    let from = book.get_mut(from_id)?;

    if from.has_link(label, to_id) {
        return Err(CommandError::DuplicateLink {
            from: from.name.to_string(),
            label: label.to_string(),
            to: to_name,
        });
    }

    from.links.push(Link {
        label: label.clone(),
        target_id: to_id.to_string(),
    });
    from.touch();
    Ok(())
}

/// Remove a labelled link from one contact to another
///
/// # Errors
/// * `ContactNotFound` - either id is unknown
/// * `LinkNotFound` - no such link exists
pub fn unlink(book: &mut AddressBook, from_id: &str, label: &LinkLabel, to_id: &str) -> Result<()> {
    let to_name = book.get(to_id)?.name.to_string();
    let from = book.get_mut(from_id)?;

    if !from.has_link(label, to_id) {
        return Err(CommandError::LinkNotFound {
            from: from.name.to_string(),
            label: label.to_string(),
            to: to_name,
        });
    }

    from.links
        .retain(|l| !(&l.label == label && l.target_id == to_id));
    from.touch();
    Ok(())
}

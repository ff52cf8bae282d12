use super::address_book::AddressBook;
use crate::errors::Result;
use crate::model::Tag;

/// Tags that actually changed on a contact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagChanges {
    pub added: Vec<Tag>,
    pub removed: Vec<Tag>,
}

/// Add and remove tags on the contact with `id`
///
/// Adding a present tag or removing an absent one is not an error; such
/// tags are simply missing from the returned changes.
///
/// # Errors
/// * `ContactNotFound` - no contact has this id
pub fn update_tags(
    book: &mut AddressBook,
    id: &str,
    add: &[Tag],
    remove: &[Tag],
) -> Result<TagChanges> {
    let contact = book.get_mut(id)?;
    let mut changes = TagChanges::default();

    for tag in add {
        if contact.tags.insert(tag.clone()) {
            changes.added.push(tag.clone());
        }
    }
    for tag in remove {
        if contact.tags.remove(tag) {
            changes.removed.push(tag.clone());
        }
    }

    if !changes.added.is_empty() || !changes.removed.is_empty() {
        contact.touch();
    }
    Ok(changes)
}

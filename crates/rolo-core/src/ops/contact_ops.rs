use uuid::Uuid;

use super::address_book::AddressBook;
use crate::errors::{CommandError, Result};
use crate::model::{Contact, ContactDraft, ContactEdit};

/// Create a contact from a draft
///
/// Generates a UUID v7 id. Repeated tags in the draft collapse into one.
///
/// # Returns
/// The id of the new contact
///
/// # Errors
/// * `DuplicateContact` - another contact already has this name (ignoring case)
pub fn add_contact(book: &mut AddressBook, draft: ContactDraft) -> Result<String> {
    if book.name_taken(&draft.name, None) {
        return Err(CommandError::DuplicateContact {
            name: draft.name.to_string(),
        });
    }

    let id = Uuid::now_v7().to_string();
    let mut contact = Contact::new(id.clone(), draft.name);
    contact.phone = draft.phone;
    contact.email = draft.email;
    contact.address = draft.address;
    contact.tags.extend(draft.tags);

    book.insert(contact);
    Ok(id)
}

/// Apply an edit to the contact with `id`
///
/// # Errors
/// * `ContactNotFound` - no contact has this id
/// * `DuplicateContact` - the new name belongs to another contact
pub fn edit_contact(book: &mut AddressBook, id: &str, edit: ContactEdit) -> Result<()> {
    if let Some(name) = &edit.name {
        if book.name_taken(name, Some(id)) {
            return Err(CommandError::DuplicateContact {
                name: name.to_string(),
            });
        }
    }

    let contact = book.get_mut(id)?;
    if let Some(name) = edit.name {
        contact.name = name;
    }
    if let Some(phone) = edit.phone {
        contact.phone = phone;
    }
    if let Some(email) = edit.email {
        contact.email = email;
    }
    if let Some(address) = edit.address {
        contact.address = address;
    }
    contact.touch();
    Ok(())
}

/// Delete the contact with `id`, along with links pointing at it
///
/// # Errors
/// * `ContactNotFound` - no contact has this id
pub fn delete_contact(book: &mut AddressBook, id: &str) -> Result<Contact> {
    book.remove(id)
}

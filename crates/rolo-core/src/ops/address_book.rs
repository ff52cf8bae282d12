use crate::errors::{CommandError, Result};
use crate::model::{Contact, ContactFilter, Index, Name};

/// In-memory contact storage
///
/// Contacts keep insertion order. An optional filter, set by `find`,
/// narrows the listed contacts; every index a command carries refers to
/// that listed view. Not thread-safe - designed for single-threaded use.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    pub(crate) contacts: Vec<Contact>,
    pub(crate) filter: Option<ContactFilter>,
}

impl AddressBook {
    /// Create a new empty AddressBook
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            filter: None,
        }
    }

    /// All contacts, ignoring the filter
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts currently listed, in insertion order
    pub fn listed(&self) -> Vec<&Contact> {
        match &self.filter {
            Some(filter) => self.contacts.iter().filter(|c| filter.matches(c)).collect(),
            None => self.contacts.iter().collect(),
        }
    }

    pub fn filter(&self) -> Option<&ContactFilter> {
        self.filter.as_ref()
    }

    pub fn set_filter(&mut self, filter: Option<ContactFilter>) {
        self.filter = filter;
    }

    /// Map a listed-view index to a contact id
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the index is past the listed contacts.
    pub fn resolve(&self, index: Index) -> Result<String> {
        let listed = self.listed();
        listed
            .get(index.zero_based())
            .map(|c| c.id.clone())
            .ok_or(CommandError::IndexOutOfRange {
                index: index.one_based(),
                size: listed.len(),
            })
    }

    /// Get a contact by id
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no contact has this id.
    pub fn get(&self, id: &str) -> Result<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CommandError::ContactNotFound {
                contact_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a contact by id
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no contact has this id.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CommandError::ContactNotFound {
                contact_id: id.to_string(),
            })
    }

    /// True if another contact (not `except_id`) has this name, ignoring case
    pub fn name_taken(&self, name: &Name, except_id: Option<&str>) -> bool {
        let wanted = name.as_str().to_lowercase();
        self.contacts
            .iter()
            .filter(|c| Some(c.id.as_str()) != except_id)
            .any(|c| c.name.as_str().to_lowercase() == wanted)
    }

    /// Append a contact
    ///
    /// Internal method used by contact operations and test helpers; does
    /// not check for duplicate names.
    pub fn insert(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Remove a contact and every link pointing at it
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no contact has this id.
    pub fn remove(&mut self, id: &str) -> Result<Contact> {
        let position = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CommandError::ContactNotFound {
                contact_id: id.to_string(),
            })?;
        let removed = self.contacts.remove(position);
        for contact in &mut self.contacts {
            contact.links.retain(|l| l.target_id != removed.id);
        }
        Ok(removed)
    }

    /// Remove every contact and the filter
    pub fn clear(&mut self) {
        self.contacts.clear();
        self.filter = None;
    }
}

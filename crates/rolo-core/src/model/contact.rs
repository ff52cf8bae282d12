use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::values::{Address, Email, FieldKey, FieldValue, LinkLabel, Name, Phone, Tag};

/// A person in the address book
///
/// Contacts are identified internally by a UUID v7 `id`; commands address
/// them by their 1-based position in the listed contacts instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier (UUID v7)
    pub id: String,

    pub name: Name,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,

    /// Tags in sorted order
    pub tags: BTreeSet<Tag>,

    /// User-defined fields such as `company` or `birthday`
    pub fields: BTreeMap<FieldKey, FieldValue>,

    /// Outgoing relationships to other contacts
    pub links: Vec<Link>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Directed, labelled relationship to another contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: LinkLabel,
    pub target_id: String,
}

impl Contact {
    /// Create a contact with only a name and current timestamps
    pub fn new(id: String, name: Name) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            phone: None,
            email: None,
            address: None,
            tags: BTreeSet::new(),
            fields: BTreeMap::new(),
            links: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn has_link(&self, label: &LinkLabel, target_id: &str) -> bool {
        self.links
            .iter()
            .any(|l| &l.label == label && l.target_id == target_id)
    }

    /// One-line summary used in command feedback
    pub fn summary(&self) -> String {
        let mut parts = vec![self.name.to_string()];
        if let Some(phone) = &self.phone {
            parts.push(format!("phone: {}", phone));
        }
        if let Some(email) = &self.email {
            parts.push(format!("email: {}", email));
        }
        if let Some(address) = &self.address {
            parts.push(format!("address: {}", address));
        }
        if !self.tags.is_empty() {
            let tags: Vec<_> = self.tags.iter().map(Tag::as_str).collect();
            parts.push(format!("tags: {}", tags.join(", ")));
        }
        for (key, value) in &self.fields {
            parts.push(format!("{}: {}", key, value));
        }
        parts.join("; ")
    }
}

/// Everything needed to create a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: Name,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// In the order given, duplicates included
    pub tags: Vec<Tag>,
}

/// Changes to the core fields of an existing contact
///
/// For the optional fields, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactEdit {
    pub name: Option<Name>,
    pub phone: Option<Option<Phone>>,
    pub email: Option<Option<Email>>,
    pub address: Option<Option<Address>>,
}

impl ContactEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
    }
}

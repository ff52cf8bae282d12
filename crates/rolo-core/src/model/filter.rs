use super::contact::Contact;

/// Which contact fields `find` searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindScope {
    pub name: bool,
    pub phone: bool,
    pub email: bool,
    pub address: bool,
    pub tag: bool,
    pub field: bool,
}

impl FindScope {
    /// Option keys `find` accepts, one per searchable field
    pub const KEYS: [&'static str; 6] = ["name", "phone", "email", "address", "tag", "field"];

    /// Search nothing; callers switch fields on one by one
    pub fn none() -> Self {
        Self {
            name: false,
            phone: false,
            email: false,
            address: false,
            tag: false,
            field: false,
        }
    }

    /// Switch on the field named by one of [`FindScope::KEYS`]
    ///
    /// Returns false for an unknown key.
    pub fn enable(&mut self, key: &str) -> bool {
        let slot = match key {
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            "address" => &mut self.address,
            "tag" => &mut self.tag,
            "field" => &mut self.field,
            _ => return false,
        };
        *slot = true;
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}

impl Default for FindScope {
    /// Names only
    fn default() -> Self {
        Self {
            name: true,
            ..Self::none()
        }
    }
}

/// Active `find` filter: a contact is listed when any keyword occurs,
/// case-insensitively, in any searched field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilter {
    pub keywords: Vec<String>,
    pub scope: FindScope,
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact) -> bool {
        let haystacks = self.haystacks(contact);
        self.keywords.iter().any(|keyword| {
            let needle = keyword.to_lowercase();
            haystacks.iter().any(|h| h.contains(&needle))
        })
    }

    fn haystacks(&self, contact: &Contact) -> Vec<String> {
        let mut out = Vec::new();
        if self.scope.name {
            out.push(contact.name.as_str().to_lowercase());
        }
        if self.scope.phone {
            out.extend(contact.phone.as_ref().map(|p| p.as_str().to_lowercase()));
        }
        if self.scope.email {
            out.extend(contact.email.as_ref().map(|e| e.as_str().to_lowercase()));
        }
        if self.scope.address {
            out.extend(contact.address.as_ref().map(|a| a.as_str().to_lowercase()));
        }
        if self.scope.tag {
            out.extend(contact.tags.iter().map(|t| t.as_str().to_lowercase()));
        }
        if self.scope.field {
            out.extend(contact.fields.values().map(|v| v.as_str().to_lowercase()));
        }
        out
    }
}

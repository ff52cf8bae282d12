use super::address_book::AddressBook;
use crate::errors::Result;
use crate::model::{FieldKey, FieldValue};

/// Set and remove custom fields on the contact with `id`
///
/// # Returns
/// Keys in `unset` that the contact did not have
///
/// # Errors
/// * `ContactNotFound` - no contact has this id
pub fn update_fields(
    book: &mut AddressBook,
    id: &str,
    set: &[(FieldKey, FieldValue)],
    unset: &[FieldKey],
) -> Result<Vec<FieldKey>> {
    let contact = book.get_mut(id)?;

    for (key, value) in set {
        contact.fields.insert(key.clone(), value.clone());
    }
    let missing = unset
        .iter()
        .filter(|key| contact.fields.remove(*key).is_none())
        .cloned()
        .collect();

    contact.touch();
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Name};

    #[test]
    fn test_update_fields() {
        let mut book = AddressBook::new();
        book.insert(Contact::new("a".into(), Name::parse("Alice").unwrap()));
        let company = FieldKey::parse("company").unwrap();
        let nickname = FieldKey::parse("nickname").unwrap();
        let acme = FieldValue::parse("Acme", &company).unwrap();

        let missing = update_fields(
            &mut book,
            "a",
            &[(company.clone(), acme)],
            &[nickname.clone()],
        )
        .unwrap();

        assert_eq!(missing, vec![nickname]);
        let fields = &book.get("a").unwrap().fields;
        assert_eq!(fields.get(&company).map(FieldValue::as_str), Some("Acme"));
    }
}

//! Validated contact values
//!
//! Each type can only be built through its `parse` function, which trims the
//! input and reports a [`ValidationError`] naming the offending field. The
//! extractors call these after structural checks have passed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

type Result<T> = std::result::Result<T, ValidationError>;

/// 1-based position of a contact in the currently listed contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Index(usize);

impl Index {
    /// Parse the parameter at `position` as a 1-based index
    ///
    /// # Errors
    ///
    /// * `InvalidIndex` - not a plain decimal number
    /// * `IndexTooLarge` - more digits than any index can hold
    /// * `IndexOutOfRange` - zero
    pub fn parse(value: &str, position: usize) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidIndex {
                position,
                value: value.to_string(),
            });
        }
        // All digits, so parsing fails only on overflow
        let Ok(n) = trimmed.parse::<usize>() else {
            return Err(ValidationError::IndexTooLarge {
                position,
                value: trimmed.to_string(),
            });
        };
        Self::from_one_based(n).ok_or(ValidationError::IndexOutOfRange { position })
    }

    pub fn from_one_based(n: usize) -> Option<Self> {
        (n > 0).then_some(Self(n))
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Defines a trimmed string newtype with the shared accessors
macro_rules! text_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_value!(
    /// Contact display name
    Name
);
text_value!(Phone);
text_value!(Email);
text_value!(Address);
text_value!(
    /// Single-word label attached to contacts
    Tag
);
text_value!(
    /// Relationship label on a link between two contacts (`mentor`, `spouse`)
    LinkLabel
);
text_value!(
    /// Key of a user-defined contact field
    FieldKey
);
text_value!(FieldValue);

fn non_blank(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankValue {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl Name {
    /// # Errors
    ///
    /// `BlankValue`, or `InvalidValue` for characters other than letters,
    /// digits, spaces, apostrophes, hyphens and periods.
    pub fn parse(value: &str) -> Result<Self> {
        let name = non_blank(value, "name")?;
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '\'' | '-' | '.'))
        {
            return Err(ValidationError::InvalidValue {
                field: "name",
                value: name,
                reason: "names may contain only letters, digits, spaces, apostrophes, hyphens and periods",
            });
        }
        Ok(Self(name))
    }
}

impl Phone {
    /// # Errors
    ///
    /// `BlankValue`, or `InvalidValue` unless the value is digits with
    /// optional spaces or hyphens, an optional leading `+`, and at least
    /// three digits.
    pub fn parse(value: &str) -> Result<Self> {
        let phone = non_blank(value, "phone")?;
        let body = phone.strip_prefix('+').unwrap_or(&phone);
        let well_formed = body
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
        let digits = body.chars().filter(char::is_ascii_digit).count();
        if !well_formed || digits < 3 {
            return Err(ValidationError::InvalidValue {
                field: "phone",
                value: phone,
                reason: "phone numbers need at least 3 digits and may contain only digits, spaces, hyphens and a leading '+'",
            });
        }
        Ok(Self(phone))
    }
}

impl Email {
    /// # Errors
    ///
    /// `BlankValue`, or `InvalidValue` unless the value is `local@domain`
    /// with no whitespace and dot-separated, non-empty domain labels.
    pub fn parse(value: &str) -> Result<Self> {
        let email = non_blank(value, "email")?;
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && !email.chars().any(char::is_whitespace)
                    && domain.split('.').all(|label| {
                        !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
                    })
            }
            None => false,
        };
        if !valid {
            return Err(ValidationError::InvalidValue {
                field: "email",
                value: email,
                reason: "emails must look like local@domain",
            });
        }
        Ok(Self(email))
    }
}

impl Address {
    /// # Errors
    ///
    /// `BlankValue` for a blank address.
    pub fn parse(value: &str) -> Result<Self> {
        Ok(Self(non_blank(value, "address")?))
    }
}

impl Tag {
    /// # Errors
    ///
    /// `BlankValue`, or `InvalidValue` for characters other than letters,
    /// digits, hyphens and underscores.
    pub fn parse(value: &str) -> Result<Self> {
        let tag = non_blank(value, "tag")?;
        if !tag.chars().all(is_word_char) {
            return Err(ValidationError::InvalidValue {
                field: "tag",
                value: tag,
                reason: "tags may contain only letters, digits, hyphens and underscores",
            });
        }
        Ok(Self(tag))
    }
}

impl LinkLabel {
    /// # Errors
    ///
    /// Same rules as [`Tag::parse`], reported against `link label`.
    pub fn parse(value: &str) -> Result<Self> {
        let label = non_blank(value, "link label")?;
        if !label.chars().all(is_word_char) {
            return Err(ValidationError::InvalidValue {
                field: "link label",
                value: label,
                reason: "link labels may contain only letters, digits, hyphens and underscores",
            });
        }
        Ok(Self(label))
    }
}

impl FieldKey {
    /// # Errors
    ///
    /// `BlankValue` for a blank key.
    pub fn parse(value: &str) -> Result<Self> {
        Ok(Self(non_blank(value, "field key")?))
    }
}

impl FieldValue {
    /// # Errors
    ///
    /// `BlankValue` naming the key the value belongs to.
    pub fn parse(value: &str, key: &FieldKey) -> Result<Self> {
        Ok(Self(non_blank(value, &format!("value of field '{}'", key))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_parse() {
        assert_eq!(Index::parse("3", 0).unwrap().one_based(), 3);
        assert_eq!(Index::parse(" 3 ", 0).unwrap().zero_based(), 2);
        assert_eq!(
            Index::parse("0", 2),
            Err(ValidationError::IndexOutOfRange { position: 2 })
        );
        assert_eq!(
            Index::parse("one", 1),
            Err(ValidationError::InvalidIndex {
                position: 1,
                value: "one".into(),
            })
        );
        assert_eq!(
            Index::parse(" 18446744073709551616", 0),
            Err(ValidationError::IndexTooLarge {
                position: 0,
                value: "18446744073709551616".into(),
            })
        );
    }

    #[test]
    fn test_name_parse() {
        let name = Name::parse("  Mary-Jane O'Neil ").unwrap();
        assert_eq!(name.as_str(), "Mary-Jane O'Neil");
        assert_eq!(
            Name::parse("  "),
            Err(ValidationError::BlankValue {
                field: "name".into(),
            })
        );
        assert!(Name::parse("Alice!").is_err());
    }

    #[test]
    fn test_phone_parse() {
        assert!(Phone::parse("+65 9123-4567").is_ok());
        assert!(Phone::parse("12").is_err());
        assert!(Phone::parse("12a45").is_err());
    }

    #[test]
    fn test_email_parse() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("alice@localhost").is_ok());
        assert!(Email::parse("alice").is_err());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("alice@example..com").is_err());
        assert!(Email::parse("a@b@c").is_err());
    }

    #[test]
    fn test_tag_parse() {
        assert_eq!(Tag::parse("close_friend").unwrap().as_str(), "close_friend");
        assert!(Tag::parse("best friend").is_err());
    }

    #[test]
    fn test_field_value_blank_names_key() {
        let key = FieldKey::parse("company").unwrap();
        let err = FieldValue::parse(" ", &key).unwrap_err();
        assert_eq!(err.to_string(), "value of field 'company' cannot be blank");
    }
}

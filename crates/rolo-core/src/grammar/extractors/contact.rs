use super::{required_value, Result};
use crate::commands::Command;
use crate::errors::ValidationError;
use crate::grammar::bare_command::{BareCommand, ParameterKind};
use crate::grammar::validation::{
    validate_no_parameters_after, validate_options, validate_parameter, validate_single_option,
};
use crate::model::{Address, ContactDraft, ContactEdit, Email, Index, Name, Phone, Tag};

const ADD_OPTIONS: [&str; 5] = ["name", "phone", "email", "address", "tag"];
const EDIT_OPTIONS: [&str; 4] = ["name", "phone", "email", "address"];

/// `add /name:NAME [/phone:P] [/email:E] [/address:A] [/tag:T]...`
///
/// # Errors
///
/// Structural errors for positional parameters, unknown or repeated
/// options, a missing `/name`, or a value-less option; then format errors
/// from the value parsers.
pub fn extract_add(cmd: &BareCommand) -> Result<Command> {
    validate_no_parameters_after(cmd, 0)?;
    validate_options(cmd, &ADD_OPTIONS)?;

    let name = required_value("name", validate_single_option(cmd, "name")?)?.ok_or(
        ValidationError::MissingOption {
            key: "name".to_string(),
        },
    )?;
    let phone = required_value("phone", validate_single_option(cmd, "phone")?)?;
    let email = required_value("email", validate_single_option(cmd, "email")?)?;
    let address = required_value("address", validate_single_option(cmd, "address")?)?;
    let tags = cmd
        .option_all_values("tag")
        .into_iter()
        .map(|value| {
            value.ok_or(ValidationError::MissingOptionValue {
                key: "tag".to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let draft = ContactDraft {
        name: Name::parse(name)?,
        phone: phone.map(Phone::parse).transpose()?,
        email: email.map(Email::parse).transpose()?,
        address: address.map(Address::parse).transpose()?,
        tags: tags
            .into_iter()
            .map(Tag::parse)
            .collect::<Result<Vec<_>>>()?,
    };
    Ok(Command::Add { draft })
}

/// `edit INDEX [/name:N] [/phone[:P]] [/email[:E]] [/address[:A]]`
///
/// A value-less `/phone`, `/email` or `/address` clears that value. The name
/// can be changed but never cleared.
///
/// # Errors
///
/// As for [`extract_add`], plus `NoChanges` when no option is given.
pub fn extract_edit(cmd: &BareCommand) -> Result<Command> {
    let index = validate_parameter(cmd, 0, &[ParameterKind::Normal])?;
    validate_no_parameters_after(cmd, 1)?;
    validate_options(cmd, &EDIT_OPTIONS)?;

    let name = required_value("name", validate_single_option(cmd, "name")?)?;
    let phone = validate_single_option(cmd, "phone")?;
    let email = validate_single_option(cmd, "email")?;
    let address = validate_single_option(cmd, "address")?;
    if name.is_none() && phone.is_none() && email.is_none() && address.is_none() {
        return Err(ValidationError::NoChanges {
            expected: "/name, /phone, /email or /address".to_string(),
        });
    }

    let index = Index::parse(index, 0)?;
    let edit = ContactEdit {
        name: name.map(Name::parse).transpose()?,
        phone: clearable(phone, Phone::parse)?,
        email: clearable(email, Email::parse)?,
        address: clearable(address, Address::parse)?,
    };
    Ok(Command::Edit { index, edit })
}

/// `delete INDEX`
///
/// # Errors
///
/// Structural errors for a missing, marked or surplus parameter, or any
/// option; then `InvalidIndex`, `IndexTooLarge` or `IndexOutOfRange`.
pub fn extract_delete(cmd: &BareCommand) -> Result<Command> {
    let index = validate_parameter(cmd, 0, &[ParameterKind::Normal])?;
    validate_no_parameters_after(cmd, 1)?;
    validate_options(cmd, &[])?;

    Ok(Command::Delete {
        index: Index::parse(index, 0)?,
    })
}

fn clearable<T>(
    occurrence: Option<Option<&str>>,
    parse: fn(&str) -> Result<T>,
) -> Result<Option<Option<T>>> {
    match occurrence {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(value)) => parse(value).map(|v| Some(Some(v))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(raw: &str) -> BareCommand {
        BareCommand::parse(raw).unwrap()
    }

    #[test]
    fn test_add_full() {
        let cmd = extract_add(&bare(
            r#"add /name:"Alice Tan" /phone:91234567 /tag:friend /tag:work"#,
        ))
        .unwrap();
        match cmd {
            Command::Add { draft } => {
                assert_eq!(draft.name.as_str(), "Alice Tan");
                assert_eq!(draft.phone.unwrap().as_str(), "91234567");
                assert!(draft.email.is_none());
                assert_eq!(draft.tags.len(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_add_requires_name() {
        assert_eq!(
            extract_add(&bare("add /phone:91234567")),
            Err(ValidationError::MissingOption { key: "name".into() })
        );
        assert_eq!(
            extract_add(&bare("add /name")),
            Err(ValidationError::MissingOptionValue { key: "name".into() })
        );
    }

    #[test]
    fn test_add_structure_before_format() {
        // Bad phone format, but the repeated name is structural and wins
        assert_eq!(
            extract_add(&bare("add /name:A /name:B /phone:x")),
            Err(ValidationError::RepeatedOption { key: "name".into() })
        );
    }

    #[test]
    fn test_add_rejects_positional_parameters() {
        assert_eq!(
            extract_add(&bare("add Alice")),
            Err(ValidationError::UnexpectedParameter { position: 0 })
        );
    }

    #[test]
    fn test_edit_clears_with_flag() {
        let cmd = extract_edit(&bare("edit 2 /phone /email:bob@example.com")).unwrap();
        let Command::Edit { index, edit } = cmd else {
            panic!("expected edit");
        };
        assert_eq!(index.one_based(), 2);
        assert_eq!(edit.phone, Some(None));
        assert_eq!(edit.email.unwrap().unwrap().as_str(), "bob@example.com");
        assert!(edit.name.is_none());
    }

    #[test]
    fn test_edit_needs_a_change() {
        assert!(matches!(
            extract_edit(&bare("edit 1")),
            Err(ValidationError::NoChanges { .. })
        ));
    }

    #[test]
    fn test_edit_cannot_clear_name() {
        assert_eq!(
            extract_edit(&bare("edit 1 /name")),
            Err(ValidationError::MissingOptionValue { key: "name".into() })
        );
    }

    #[test]
    fn test_delete() {
        assert_eq!(
            extract_delete(&bare("delete 3")).unwrap(),
            Command::Delete {
                index: Index::from_one_based(3).unwrap(),
            }
        );
        assert!(matches!(
            extract_delete(&bare("delete +3")),
            Err(ValidationError::IncorrectParameterKind { position: 0, .. })
        ));
        assert_eq!(
            extract_delete(&bare("delete 1 2")),
            Err(ValidationError::UnexpectedParameter { position: 1 })
        );
    }
}

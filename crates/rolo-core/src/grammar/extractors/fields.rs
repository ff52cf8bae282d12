use super::Result;
use crate::commands::Command;
use crate::errors::ValidationError;
use crate::grammar::bare_command::{BareCommand, ParameterKind};
use crate::grammar::validation::{validate_no_parameters_after, validate_parameter};
use crate::model::{FieldKey, FieldValue, Index};

/// `field INDEX /KEY[:VALUE]...`
///
/// `/key:value` sets a custom field and a value-less `/key` removes it. Any
/// key is accepted.
///
/// # Errors
///
/// * Structural - missing or marked index, surplus parameters, no option
/// * Format - index, blank key or blank value
/// * Domain - `DuplicateKey` when a key appears more than once
pub fn extract_field(cmd: &BareCommand) -> Result<Command> {
    let index = validate_parameter(cmd, 0, &[ParameterKind::Normal])?;
    validate_no_parameters_after(cmd, 1)?;
    if cmd.option_count() == 0 {
        return Err(ValidationError::NoChanges {
            expected: "/KEY:VALUE or /KEY".to_string(),
        });
    }

    let index = Index::parse(index, 0)?;
    let mut set = Vec::new();
    let mut unset = Vec::new();
    let mut duplicate = None;
    for (raw_key, _) in cmd.all_options() {
        let key = FieldKey::parse(raw_key)?;
        let values = cmd.option_all_values(raw_key);
        for value in &values {
            match value {
                Some(value) => set.push((key.clone(), FieldValue::parse(value, &key)?)),
                None => unset.push(key.clone()),
            }
        }
        if values.len() > 1 && duplicate.is_none() {
            duplicate = Some(key);
        }
    }

    if let Some(key) = duplicate {
        return Err(ValidationError::DuplicateKey {
            key: key.to_string(),
        });
    }
    Ok(Command::Field { index, set, unset })
}

use super::{validate_no_arguments, Result};
use crate::commands::Command;
use crate::errors::ValidationError;
use crate::grammar::bare_command::{BareCommand, ParameterKind};
use crate::grammar::validation::{
    validate_options, validate_variable_parameters_with_minimum_multiplicity,
};
use crate::model::FindScope;

/// `find KEYWORD... [/name] [/phone] [/email] [/address] [/tag] [/field]`
///
/// Flags pick the fields to search; without any, only names are searched.
///
/// # Errors
///
/// * Structural - no keyword, a marked keyword, an unknown flag, or a flag
///   with a value
/// * Format - a blank keyword
pub fn extract_find(cmd: &BareCommand) -> Result<Command> {
    let parameters = validate_variable_parameters_with_minimum_multiplicity(
        cmd,
        0,
        1,
        &[ParameterKind::Normal],
    )?;
    validate_options(cmd, &FindScope::KEYS)?;

    let mut scope = FindScope::none();
    for (key, _) in cmd.all_options() {
        if cmd.option_all_values(key).iter().any(Option::is_some) {
            return Err(ValidationError::UnexpectedOptionValue {
                key: key.to_string(),
            });
        }
        scope.enable(key);
    }
    if scope.is_empty() {
        scope = FindScope::default();
    }

    let keywords = parameters
        .into_iter()
        .map(|p| {
            let keyword = p.value().trim();
            if keyword.is_empty() {
                Err(ValidationError::BlankValue {
                    field: "keyword".to_string(),
                })
            } else {
                Ok(keyword.to_string())
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Command::Find { keywords, scope })
}

/// `list`
///
/// # Errors
///
/// `UnexpectedParameter` or `UnknownOption` for anything after the word.
pub fn extract_list(cmd: &BareCommand) -> Result<Command> {
    validate_no_arguments(cmd)?;
    Ok(Command::List)
}

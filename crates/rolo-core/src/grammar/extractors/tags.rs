use super::Result;
use crate::commands::Command;
use crate::errors::ValidationError;
use crate::grammar::bare_command::{BareCommand, ParameterKind};
use crate::grammar::validation::{
    validate_options, validate_parameter, validate_variable_parameters_with_minimum_multiplicity,
};
use crate::model::{Index, Tag};

/// `tag INDEX TAG...` where `TAG` and `+TAG` add and `-TAG` removes
///
/// Repeated tags are kept; they only produce warnings when the command
/// runs.
///
/// # Errors
///
/// Structural errors for the index or an empty tag list, format errors for
/// the index or a tag, then `ConflictingTag` when one tag is both added and
/// removed.
pub fn extract_tag(cmd: &BareCommand) -> Result<Command> {
    let index = validate_parameter(cmd, 0, &[ParameterKind::Normal])?;
    let parameters = validate_variable_parameters_with_minimum_multiplicity(
        cmd,
        1,
        1,
        &[
            ParameterKind::Normal,
            ParameterKind::Additive,
            ParameterKind::Subtractive,
        ],
    )?;
    validate_options(cmd, &[])?;

    let index = Index::parse(index, 0)?;
    let mut add = Vec::new();
    let mut remove = Vec::new();
    for parameter in parameters {
        let tag = Tag::parse(parameter.value())?;
        match parameter.kind() {
            ParameterKind::Normal | ParameterKind::Additive => add.push(tag),
            ParameterKind::Subtractive => remove.push(tag),
        }
    }

    if let Some(tag) = add.iter().find(|tag| remove.contains(tag)) {
        return Err(ValidationError::ConflictingTag {
            tag: tag.to_string(),
        });
    }
    Ok(Command::Tag { index, add, remove })
}

/// `untag INDEX TAG...`
///
/// # Errors
///
/// As for [`extract_tag`], except that marked tags are a kind error.
pub fn extract_untag(cmd: &BareCommand) -> Result<Command> {
    let index = validate_parameter(cmd, 0, &[ParameterKind::Normal])?;
    let parameters = validate_variable_parameters_with_minimum_multiplicity(
        cmd,
        1,
        1,
        &[ParameterKind::Normal],
    )?;
    validate_options(cmd, &[])?;

    let index = Index::parse(index, 0)?;
    let tags = parameters
        .into_iter()
        .map(|p| Tag::parse(p.value()))
        .collect::<Result<Vec<_>>>()?;
    Ok(Command::Untag { index, tags })
}

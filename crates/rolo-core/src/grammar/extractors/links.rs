use super::Result;
use crate::commands::Command;
use crate::errors::ValidationError;
use crate::grammar::bare_command::{BareCommand, ParameterKind};
use crate::grammar::validation::{
    validate_no_parameters_after, validate_options, validate_parameter,
};
use crate::model::{Index, LinkLabel};

/// `link INDEX LABEL INDEX`
///
/// # Errors
///
/// Structural errors for the three parameters, format errors for the
/// indices and label, then `SelfLink` when both indices are equal.
pub fn extract_link(cmd: &BareCommand) -> Result<Command> {
    let (from, label, to) = link_parameters(cmd)?;
    if from == to {
        return Err(ValidationError::SelfLink {
            index: from.one_based(),
        });
    }
    Ok(Command::Link { from, label, to })
}

/// `unlink INDEX LABEL INDEX`
///
/// # Errors
///
/// Structural and format errors as for [`extract_link`].
pub fn extract_unlink(cmd: &BareCommand) -> Result<Command> {
    let (from, label, to) = link_parameters(cmd)?;
    Ok(Command::Unlink { from, label, to })
}

fn link_parameters(cmd: &BareCommand) -> Result<(Index, LinkLabel, Index)> {
    let from = validate_parameter(cmd, 0, &[ParameterKind::Normal])?;
    let label = validate_parameter(cmd, 1, &[ParameterKind::Normal])?;
    let to = validate_parameter(cmd, 2, &[ParameterKind::Normal])?;
    validate_no_parameters_after(cmd, 3)?;
    validate_options(cmd, &[])?;

    Ok((
        Index::parse(from, 0)?,
        LinkLabel::parse(label)?,
        Index::parse(to, 2)?,
    ))
}

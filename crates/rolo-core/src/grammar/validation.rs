//! Reusable structural checks for extractors
//!
//! Every extractor validates arity and parameter kinds through these helpers
//! so the messages stay identical across commands. Positions are 0-based and
//! count parameters only (the imperative is not a parameter).

use super::bare_command::{BareCommand, KindSet, Parameter, ParameterKind};
use crate::errors::ValidationError;

type Result<T> = std::result::Result<T, ValidationError>;

/// Value of the parameter at `position`, which must have an allowed kind
///
/// # Errors
///
/// * `InsufficientParameters` - fewer than `position + 1` parameters
/// * `IncorrectParameterKind` - the parameter's kind is not in `allowed`
pub fn validate_parameter<'a>(
    cmd: &'a BareCommand,
    position: usize,
    allowed: &[ParameterKind],
) -> Result<&'a str> {
    let parameter = cmd
        .parameter(position)
        .ok_or(ValidationError::InsufficientParameters {
            position,
            count: cmd.parameter_count(),
        })?;
    check_kind(parameter, position, allowed)?;
    Ok(parameter.value())
}

/// Every parameter from `start` to the end, in order
///
/// An empty list is fine; use the minimum-multiplicity variant when at
/// least one value is required.
///
/// # Errors
///
/// `IncorrectParameterKind` for the first parameter with a disallowed kind,
/// citing its absolute position.
pub fn validate_variable_parameters<'a>(
    cmd: &'a BareCommand,
    start: usize,
    allowed: &[ParameterKind],
) -> Result<Vec<&'a Parameter>> {
    cmd.parameters()
        .iter()
        .enumerate()
        .skip(start)
        .map(|(position, parameter)| check_kind(parameter, position, allowed).map(|_| parameter))
        .collect()
}

/// As [`validate_variable_parameters`], then require at least `minimum` values
///
/// # Errors
///
/// Kind errors are reported first; `InsufficientVariableParameters` only
/// when every kind was acceptable but there are too few parameters.
pub fn validate_variable_parameters_with_minimum_multiplicity<'a>(
    cmd: &'a BareCommand,
    start: usize,
    minimum: usize,
    allowed: &[ParameterKind],
) -> Result<Vec<&'a Parameter>> {
    let parameters = validate_variable_parameters(cmd, start, allowed)?;
    if parameters.len() < minimum {
        return Err(ValidationError::InsufficientVariableParameters {
            start,
            minimum,
            actual: parameters.len(),
        });
    }
    Ok(parameters)
}

/// Reject any parameter at or past `expected`
///
/// # Errors
///
/// `UnexpectedParameter` citing the first surplus position.
pub fn validate_no_parameters_after(cmd: &BareCommand, expected: usize) -> Result<()> {
    if cmd.parameter_count() > expected {
        return Err(ValidationError::UnexpectedParameter { position: expected });
    }
    Ok(())
}

/// Reject options whose key is not in `known`
///
/// # Errors
///
/// `UnknownOption` for the first unrecognised key in insertion order.
pub fn validate_options(cmd: &BareCommand, known: &[&str]) -> Result<()> {
    match cmd
        .all_options()
        .into_iter()
        .find(|(key, _)| !known.contains(key))
    {
        Some((key, _)) => Err(ValidationError::UnknownOption {
            key: key.to_string(),
        }),
        None => Ok(()),
    }
}

/// The single value of an option that may appear at most once
///
/// `None` when absent, `Some(None)` for a value-less occurrence.
///
/// # Errors
///
/// `RepeatedOption` when the key occurs more than once.
pub fn validate_single_option<'a>(
    cmd: &'a BareCommand,
    key: &str,
) -> Result<Option<Option<&'a str>>> {
    let values = cmd.option_all_values(key);
    match values.as_slice() {
        [] => Ok(None),
        [value] => Ok(Some(*value)),
        _ => Err(ValidationError::RepeatedOption {
            key: key.to_string(),
        }),
    }
}

fn check_kind(parameter: &Parameter, position: usize, allowed: &[ParameterKind]) -> Result<()> {
    let allowed = KindSet::new(allowed);
    if allowed.contains(parameter.kind()) {
        Ok(())
    } else {
        Err(ValidationError::IncorrectParameterKind {
            position,
            allowed,
            actual: parameter.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ParameterKind::{Additive, Normal, Subtractive};
    use super::*;

    fn command(params: &[(ParameterKind, &str)]) -> BareCommand {
        params
            .iter()
            .fold(BareCommand::builder().with_imperative("test"), |b, (k, v)| {
                b.with_parameter(*k, *v)
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_validate_parameter_ok() {
        let cmd = command(&[(Normal, "1")]);
        assert_eq!(validate_parameter(&cmd, 0, &[Normal]), Ok("1"));
    }

    #[test]
    fn test_validate_parameter_insufficient() {
        let cmd = command(&[(Normal, "1")]);
        assert_eq!(
            validate_parameter(&cmd, 1, &[Normal]),
            Err(ValidationError::InsufficientParameters {
                position: 1,
                count: 1,
            })
        );
    }

    #[test]
    fn test_validate_parameter_wrong_kind_message() {
        let cmd = command(&[(Subtractive, "1")]);
        let err = validate_parameter(&cmd, 0, &[Additive, Normal]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incorrect parameter kind at position 0: expected [NORMAL, ADDITIVE], found SUBTRACTIVE"
        );
    }

    #[test]
    fn test_variable_parameters_cite_absolute_position() {
        let cmd = command(&[(Normal, "1"), (Normal, "a"), (Additive, "b")]);
        let err = validate_variable_parameters(&cmd, 1, &[Normal]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::IncorrectParameterKind { position: 2, .. }
        ));
    }

    #[test]
    fn test_variable_parameters_may_be_empty() {
        let cmd = command(&[(Normal, "1")]);
        assert!(validate_variable_parameters(&cmd, 1, &[Normal])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_minimum_multiplicity() {
        let cmd = command(&[(Normal, "1")]);
        assert_eq!(
            validate_variable_parameters_with_minimum_multiplicity(&cmd, 1, 1, &[Normal]),
            Err(ValidationError::InsufficientVariableParameters {
                start: 1,
                minimum: 1,
                actual: 0,
            })
        );
    }

    #[test]
    fn test_kind_error_wins_over_multiplicity() {
        let cmd = command(&[(Normal, "1"), (Subtractive, "x")]);
        let err = validate_variable_parameters_with_minimum_multiplicity(&cmd, 1, 5, &[Normal])
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::IncorrectParameterKind { position: 1, .. }
        ));
    }

    #[test]
    fn test_no_parameters_after() {
        let cmd = command(&[(Normal, "1"), (Normal, "2")]);
        assert_eq!(validate_no_parameters_after(&cmd, 2), Ok(()));
        assert_eq!(
            validate_no_parameters_after(&cmd, 1),
            Err(ValidationError::UnexpectedParameter { position: 1 })
        );
    }

    #[test]
    fn test_unknown_option() {
        let cmd = BareCommand::builder()
            .with_imperative("find")
            .with_flag("name")
            .with_flag("nickname")
            .build()
            .unwrap();
        assert_eq!(
            validate_options(&cmd, &["name", "email"]),
            Err(ValidationError::UnknownOption {
                key: "nickname".into(),
            })
        );
    }

    #[test]
    fn test_single_option() {
        let cmd = BareCommand::builder()
            .with_imperative("edit")
            .with_flag("phone")
            .with_option_value("name", "A")
            .with_option_value("name", "B")
            .build()
            .unwrap();
        assert_eq!(validate_single_option(&cmd, "email"), Ok(None));
        assert_eq!(validate_single_option(&cmd, "phone"), Ok(Some(None)));
        assert_eq!(
            validate_single_option(&cmd, "name"),
            Err(ValidationError::RepeatedOption { key: "name".into() })
        );
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;

use rolo_core::errors::ValidationError;
use rolo_core::grammar::validation::{
    validate_parameter, validate_variable_parameters,
    validate_variable_parameters_with_minimum_multiplicity,
};
use rolo_core::grammar::{BareCommand, ParameterKind};

fn command(params: &[(ParameterKind, String)]) -> BareCommand {
    params
        .iter()
        .fold(BareCommand::builder().with_imperative("cmd"), |b, (k, v)| {
            b.with_parameter(*k, v.clone())
        })
        .build()
        .unwrap()
}

fn kind() -> impl Strategy<Value = ParameterKind> {
    prop_oneof![
        Just(ParameterKind::Normal),
        Just(ParameterKind::Additive),
        Just(ParameterKind::Subtractive),
    ]
}

proptest! {
    #[test]
    fn prop_multiplicity_floor(count in 0usize..8, minimum in 0usize..8) {
        let params: Vec<_> = (0..count)
            .map(|i| (ParameterKind::Normal, i.to_string()))
            .collect();
        let cmd = command(&params);

        let result = validate_variable_parameters_with_minimum_multiplicity(
            &cmd, 0, minimum, &[ParameterKind::Normal],
        );
        if count >= minimum {
            prop_assert_eq!(result.unwrap().len(), count);
        } else {
            prop_assert_eq!(
                result,
                Err(ValidationError::InsufficientVariableParameters {
                    start: 0,
                    minimum,
                    actual: count,
                })
            );
        }
    }

    #[test]
    fn prop_kind_errors_beat_multiplicity(
        kinds in prop::collection::vec(kind(), 0..8),
        minimum in 0usize..10,
    ) {
        let params: Vec<_> = kinds.iter().map(|k| (*k, "v".to_string())).collect();
        let cmd = command(&params);

        let result = validate_variable_parameters_with_minimum_multiplicity(
            &cmd, 0, minimum, &[ParameterKind::Normal],
        );
        match kinds.iter().position(|k| *k != ParameterKind::Normal) {
            Some(position) => prop_assert!(matches!(
                result,
                Err(ValidationError::IncorrectParameterKind { position: p, .. }) if p == position
            ), "expected IncorrectParameterKind at {}, got {:?}", position, result),
            None if kinds.len() < minimum => prop_assert!(matches!(
                result,
                Err(ValidationError::InsufficientVariableParameters { .. })
            ), "expected InsufficientVariableParameters, got {:?}", result),
            None => prop_assert!(result.is_ok()),
        }
    }

    #[test]
    fn prop_validate_parameter_respects_allowed_kinds(
        actual in kind(),
        allowed in prop::collection::vec(kind(), 1..3)
    ) {
        let cmd = command(&[(actual, "x".to_string())]);
        let result = validate_parameter(&cmd, 0, &allowed);
        prop_assert_eq!(result.is_ok(), allowed.contains(&actual));
    }
}

#[test]
fn test_messages_are_deterministic() {
    let cmd = command(&[(ParameterKind::Additive, "x".to_string())]);
    let subtractive_first = [ParameterKind::Subtractive, ParameterKind::Normal];
    let normal_first = [ParameterKind::Normal, ParameterKind::Subtractive];
    let first = validate_parameter(&cmd, 0, &subtractive_first)
        .unwrap_err()
        .to_string();
    let second = validate_parameter(&cmd, 0, &normal_first)
        .unwrap_err()
        .to_string();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "incorrect parameter kind at position 0: expected [NORMAL, SUBTRACTIVE], found ADDITIVE"
    );
}

#[test]
fn test_variable_parameters_from_offset() {
    let cmd = command(&[
        (ParameterKind::Normal, "1".to_string()),
        (ParameterKind::Additive, "a".to_string()),
        (ParameterKind::Subtractive, "b".to_string()),
    ]);
    let values: Vec<_> = validate_variable_parameters(
        &cmd,
        1,
        &[ParameterKind::Additive, ParameterKind::Subtractive],
    )
    .unwrap()
    .into_iter()
    .map(|p| p.value())
    .collect();
    assert_eq!(values, vec!["a", "b"]);
}

#[test]
fn test_insufficient_parameters_message() {
    let cmd = command(&[]);
    assert_eq!(
        validate_parameter(&cmd, 0, &[ParameterKind::Normal])
            .unwrap_err()
            .to_string(),
        "insufficient parameters: expected a parameter at position 0, but only 0 given"
    );
}

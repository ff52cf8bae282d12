#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use rolo_core::errors::{CommandError, RoloError, RoloErrorKind};

fn decode_error(line: &str) -> RoloError {
    common::decoder().interpret(line).unwrap_err().into()
}

#[test]
fn test_each_grammar_level_has_its_own_code() {
    let cases = [
        (r#"add /name:"Al"#, RoloErrorKind::Lexer, "ERR_LEXER"),
        ("", RoloErrorKind::Parser, "ERR_PARSER"),
        ("zzz", RoloErrorKind::Resolution, "ERR_RESOLUTION"),
        ("delete x", RoloErrorKind::Validation, "ERR_VALIDATION"),
    ];
    for (line, kind, code) in cases {
        let err = decode_error(line);
        assert_eq!(err.kind(), kind, "wrong kind for {:?}", line);
        assert_eq!(err.code(), code);
    }
}

#[test]
fn test_unintelligible_levels_share_user_wording() {
    let err = decode_error("zzz");
    assert_eq!(
        err.user_message(),
        "could not understand that command: no binding matched the imperative 'zzz'"
    );
    assert_eq!(err.imperative(), Some("zzz"));

    let err = decode_error("delete x");
    let message = err.user_message();
    assert!(message.starts_with("invalid index 'x' at position 0"));
    assert_eq!(err.position(), Some(0));
}

#[test]
fn test_command_errors_map_to_kinds() {
    let cases = [
        (
            CommandError::IndexOutOfRange { index: 5, size: 2 },
            RoloErrorKind::IndexOutOfRange,
        ),
        (
            CommandError::DuplicateContact {
                name: "Alice".into(),
            },
            RoloErrorKind::Duplicate,
        ),
        (
            CommandError::LinkNotFound {
                from: "A".into(),
                label: "l".into(),
                to: "B".into(),
            },
            RoloErrorKind::NotFound,
        ),
    ];
    for (err, kind) in cases {
        let rolo: RoloError = err.into();
        assert_eq!(rolo.kind(), kind);
        assert_eq!(rolo.op(), Some("execute"));
    }
}

#[test]
fn test_display_format() {
    let err: RoloError = CommandError::IndexOutOfRange { index: 5, size: 2 }.into();
    assert_eq!(
        err.to_string(),
        "[ERR_INDEX_OUT_OF_RANGE] in operation 'execute': index 5 is out of range: 2 contacts are listed"
    );
}

#[test]
fn test_grammar_errors_carry_decode_op() {
    let err = decode_error("zzz");
    assert_eq!(err.op(), Some("decode"));
    assert!(err
        .to_string()
        .starts_with("[ERR_RESOLUTION] in operation 'decode': "));
}

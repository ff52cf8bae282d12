//! Token sequence -> [`BareCommand`]
//!
//! Checks only the flat grammar: the line starts with a word and every
//! option has a key. Arity and kind rules belong to the extractors.

use super::bare_command::{BareCommand, ParameterKind};
use super::lexer::Token;
use crate::errors::ParserError;

/// Assemble a [`BareCommand`] from tokens
///
/// # Errors
///
/// * `MissingImperative` - no tokens
/// * `ImperativeNotWord` - the first token is quoted, marked, or an option
/// * `EmptyOptionKey` - an option key is blank
pub fn parse(tokens: Vec<Token>) -> Result<BareCommand, ParserError> {
    let mut tokens = tokens.into_iter();

    let imperative = match tokens.next() {
        None => return Err(ParserError::MissingImperative),
        Some(Token::Word(word)) => word,
        Some(other) => {
            return Err(ParserError::ImperativeNotWord {
                found: describe(&other),
            })
        }
    };

    let mut builder = BareCommand::builder().with_imperative(imperative);
    for token in tokens {
        builder = match token {
            Token::Word(value) | Token::QuotedString(value) => {
                builder.with_parameter(ParameterKind::Normal, value)
            }
            Token::Additive(value) => builder.with_parameter(ParameterKind::Additive, value),
            Token::Subtractive(value) => builder.with_parameter(ParameterKind::Subtractive, value),
            Token::Option { key, value } => {
                let key = key.trim();
                if key.is_empty() {
                    return Err(ParserError::EmptyOptionKey);
                }
                builder.with_option(key, value)
            }
        };
    }

    builder.build()
}

fn describe(token: &Token) -> String {
    match token {
        Token::Word(w) => format!("word '{}'", w),
        Token::QuotedString(_) => "a quoted string".to_string(),
        Token::Option { key, .. } => format!("option '/{}'", key),
        Token::Additive(_) => "an additive parameter".to_string(),
        Token::Subtractive(_) => "a subtractive parameter".to_string(),
    }
}

//! Grammar-level parse result
//!
//! A [`BareCommand`] is the command-agnostic shape of one input line: the
//! imperative word, the positional parameters with their kinds, and the
//! option multimap. It knows nothing about specific commands.

use std::fmt;

use crate::errors::{GrammarResult, ParserError};

/// Marker a positional parameter was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParameterKind {
    /// No marker
    Normal,
    /// Leading `+`
    Additive,
    /// Leading `-`
    Subtractive,
}

impl ParameterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Normal => "NORMAL",
            ParameterKind::Additive => "ADDITIVE",
            ParameterKind::Subtractive => "SUBTRACTIVE",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of parameter kinds accepted at a position
///
/// Always sorted and deduplicated so its rendering is stable regardless of
/// the order callers list the kinds in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSet(Vec<ParameterKind>);

impl KindSet {
    pub fn new(kinds: &[ParameterKind]) -> Self {
        let mut kinds = kinds.to_vec();
        kinds.sort();
        kinds.dedup();
        Self(kinds)
    }

    pub fn contains(&self, kind: ParameterKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn kinds(&self) -> &[ParameterKind] {
        &self.0
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.as_str())?;
        }
        f.write_str("]")
    }
}

/// One positional parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    value: String,
    kind: ParameterKind,
}

impl Parameter {
    pub fn new(kind: ParameterKind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }
}

/// Immutable parse result of one command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BareCommand {
    imperative: String,
    parameters: Vec<Parameter>,
    /// Keys in first-seen order, each with every value given for it
    options: Vec<(String, Vec<Option<String>>)>,
}

impl BareCommand {
    /// Start building a command by hand
    pub fn builder() -> BareCommandBuilder {
        BareCommandBuilder::default()
    }

    /// Lex and parse one raw input line
    ///
    /// This is the only supported way to turn user text into a
    /// `BareCommand`.
    ///
    /// # Errors
    ///
    /// Returns `GrammarError::Lexer` for a malformed character stream and
    /// `GrammarError::Parser` for a malformed token sequence.
    pub fn parse(raw: &str) -> GrammarResult<Self> {
        let tokens = super::lexer::tokenize(raw)?;
        Ok(super::parser::parse(tokens)?)
    }

    /// The lower-cased imperative word
    pub fn imperative(&self) -> &str {
        &self.imperative
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Parameter at `position`, or `None` past the end
    pub fn parameter(&self, position: usize) -> Option<&Parameter> {
        self.parameters.get(position)
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn has_option(&self, key: &str) -> bool {
        self.options.iter().any(|(k, _)| k == key)
    }

    /// Value of the first occurrence of `key`
    ///
    /// `None` when the option is absent or its first occurrence has no value.
    pub fn option_value(&self, key: &str) -> Option<&str> {
        self.option_all_values(key).first().copied().flatten()
    }

    /// Every occurrence of `key` in insertion order
    pub fn option_all_values(&self, key: &str) -> Vec<Option<&str>> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.iter().map(Option::as_deref).collect())
            .unwrap_or_default()
    }

    /// Each key with its first value, in insertion order
    ///
    /// Use [`BareCommand::option_all_values`] when repeated keys matter.
    pub fn all_options(&self) -> Vec<(&str, Option<&str>)> {
        self.options
            .iter()
            .map(|(k, values)| (k.as_str(), values.first().and_then(Option::as_deref)))
            .collect()
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// Mutable builder for [`BareCommand`]
#[derive(Debug, Clone, Default)]
pub struct BareCommandBuilder {
    imperative: String,
    parameters: Vec<Parameter>,
    options: Vec<(String, Vec<Option<String>>)>,
}

impl BareCommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the imperative word (stored lower-cased)
    pub fn with_imperative(mut self, imperative: impl Into<String>) -> Self {
        self.imperative = imperative.into().trim().to_lowercase();
        self
    }

    /// Append a positional parameter
    pub fn with_parameter(mut self, kind: ParameterKind, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(kind, value));
        self
    }

    /// Append an occurrence of `key`; repeated keys accumulate values
    pub fn with_option(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        let key = key.into();
        match self.options.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.options.push((key, vec![value])),
        }
        self
    }

    /// Append a value-less occurrence of `key`
    pub fn with_flag(self, key: impl Into<String>) -> Self {
        self.with_option(key, None)
    }

    /// Append an occurrence of `key` carrying `value`
    pub fn with_option_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_option(key, Some(value.into()))
    }

    /// # Errors
    ///
    /// Returns `ParserError::MissingImperative` when no imperative was set.
    pub fn build(self) -> std::result::Result<BareCommand, ParserError> {
        if self.imperative.is_empty() {
            return Err(ParserError::MissingImperative);
        }
        Ok(BareCommand {
            imperative: self.imperative,
            parameters: self.parameters,
            options: self.options,
        })
    }
}

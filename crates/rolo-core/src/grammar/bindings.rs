//! Imperative word -> extractor dispatch
//!
//! A [`Bindings`] table is built once, then handed to a [`Decoder`]. Nothing
//! here is global, so tests and embedders can decode against a table of
//! their own.

use std::collections::BTreeMap;
use std::fmt;

use rolo_core_types::schema::OP_DECODE;
use rolo_core_types::Sensitive;
use thiserror::Error;

use super::bare_command::BareCommand;
use super::extractors;
use crate::commands::Command;
use crate::errors::{GrammarResult, ResolutionError, ValidationError};
use crate::{log_op_end, log_op_error, log_op_start};

/// Turns a structurally parsed command into a typed [`Command`]
///
/// Extractors are pure: they only read the `BareCommand`.
pub type Extractor = fn(&BareCommand) -> Result<Command, ValidationError>;

/// One registered imperative
#[derive(Clone)]
pub struct Binding {
    word: String,
    usage: String,
    extract: Extractor,
}

impl Binding {
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Usage line shown by `help` and appended to validation failures
    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn extract(&self, cmd: &BareCommand) -> Result<Command, ValidationError> {
        (self.extract)(cmd)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("word", &self.word)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingsError {
    #[error("imperative '{word}' is bound more than once")]
    DuplicateImperative { word: String },

    #[error("imperative word cannot be blank")]
    BlankImperative,
}

/// Immutable table of bindings, in registration order
#[derive(Debug, Clone)]
pub struct Bindings {
    entries: Vec<Binding>,
    by_word: BTreeMap<String, usize>,
}

impl Bindings {
    pub fn builder() -> BindingsBuilder {
        BindingsBuilder::default()
    }

    /// Every command the contact manager understands
    pub fn standard() -> Self {
        let mut builder = Self::builder();
        for (word, usage, extract) in extractors::STANDARD {
            builder = builder.bind(*word, *usage, *extract);
        }
        Self::from_unique(builder.entries)
    }

    fn from_unique(entries: Vec<Binding>) -> Self {
        let by_word = entries
            .iter()
            .enumerate()
            .map(|(i, b)| (b.word.clone(), i))
            .collect();
        Self { entries, by_word }
    }

    /// Exact, case-sensitive lookup of a lower-cased imperative
    pub fn get(&self, word: &str) -> Option<&Binding> {
        self.by_word.get(word).map(|&i| &self.entries[i])
    }

    /// # Errors
    ///
    /// `UnknownImperative` when nothing is bound to `imperative`.
    pub fn resolve(&self, imperative: &str) -> Result<&Binding, ResolutionError> {
        match self.get(imperative) {
            Some(binding) => Ok(binding),
            None => Err(ResolutionError::UnknownImperative {
                imperative: imperative.to_string(),
            }),
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.entries
    }

    /// Usage lines in registration order
    pub fn usages(&self) -> Vec<&str> {
        self.entries.iter().map(Binding::usage).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct BindingsBuilder {
    entries: Vec<Binding>,
}

impl BindingsBuilder {
    /// Register `extract` for `word`; the word is trimmed and lower-cased
    pub fn bind(
        mut self,
        word: impl Into<String>,
        usage: impl Into<String>,
        extract: Extractor,
    ) -> Self {
        self.entries.push(Binding {
            word: word.into().trim().to_lowercase(),
            usage: usage.into(),
            extract,
        });
        self
    }

    /// # Errors
    ///
    /// `BlankImperative` for an empty word, `DuplicateImperative` when two
    /// registrations share a word.
    pub fn build(self) -> Result<Bindings, BindingsError> {
        let mut seen = BTreeMap::new();
        for binding in &self.entries {
            if binding.word.is_empty() {
                return Err(BindingsError::BlankImperative);
            }
            if seen.insert(binding.word.as_str(), ()).is_some() {
                return Err(BindingsError::DuplicateImperative {
                    word: binding.word.clone(),
                });
            }
        }
        Ok(Bindings::from_unique(self.entries))
    }
}

/// Dispatches bare commands through a bindings table
///
/// Holds no per-call state; one decoder can serve any number of lines.
#[derive(Debug, Clone)]
pub struct Decoder {
    bindings: Bindings,
}

impl Decoder {
    pub fn new(bindings: Bindings) -> Self {
        Self { bindings }
    }

    /// Decoder over [`Bindings::standard`]
    pub fn standard() -> Self {
        Self::new(Bindings::standard())
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Resolve the imperative and run its extractor
    ///
    /// # Errors
    ///
    /// * `GrammarError::Resolution` - no binding for the imperative
    /// * `GrammarError::Validation` - the extractor rejected the command; the
    ///   binding's usage line is appended to the message
    pub fn decode(&self, cmd: &BareCommand) -> GrammarResult<Command> {
        let binding = self.bindings.resolve(cmd.imperative())?;

        binding
            .extract(cmd)
            .map_err(|e| e.with_context(format!("usage: {}", binding.usage())).into())
    }

    /// Lex, parse and decode one raw line
    ///
    /// # Errors
    ///
    /// Any of the four [`GrammarError`](crate::errors::GrammarError) levels.
    pub fn interpret(&self, raw: &str) -> GrammarResult<Command> {
        let input = Sensitive::new(raw);
        log_op_start!(OP_DECODE, input = %input);
        let start = std::time::Instant::now();

        let command = BareCommand::parse(input.expose())
            .and_then(|bare| {
                tracing::debug!(
                    imperative = bare.imperative(),
                    parameter_count = bare.parameter_count() as u64,
                    option_count = bare.option_count() as u64,
                    "parsed bare command"
                );
                self.decode(&bare)
            })
            .map_err(|e| {
                log_op_error!(
                    OP_DECODE,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            OP_DECODE,
            duration_ms = start.elapsed().as_millis() as u64,
            imperative = command.imperative()
        );
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GrammarError;

    fn always_list(_: &BareCommand) -> Result<Command, ValidationError> {
        Ok(Command::List)
    }

    fn always_fail(_: &BareCommand) -> Result<Command, ValidationError> {
        Err(ValidationError::NoChanges {
            expected: "anything".into(),
        })
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let result = Bindings::builder()
            .bind("ls", "ls", always_list)
            .bind("LS", "ls again", always_list)
            .build();
        assert_eq!(
            result.unwrap_err(),
            BindingsError::DuplicateImperative { word: "ls".into() }
        );
    }

    #[test]
    fn test_blank_binding_rejected() {
        let result = Bindings::builder().bind("  ", "", always_list).build();
        assert_eq!(result.unwrap_err(), BindingsError::BlankImperative);
    }

    #[test]
    fn test_custom_table() {
        let bindings = Bindings::builder()
            .bind("ls", "ls", always_list)
            .build()
            .unwrap();
        let decoder = Decoder::new(bindings);

        assert_eq!(decoder.interpret("ls").unwrap(), Command::List);
        assert!(matches!(decoder.interpret("list"), Err(GrammarError::Resolution(_))));
    }

    #[test]
    fn test_validation_failure_carries_usage() {
        let bindings = Bindings::builder()
            .bind("bad", "bad THING", always_fail)
            .build()
            .unwrap();
        let err = Decoder::new(bindings).interpret("bad").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected at least one of anything\nusage: bad THING"
        );
    }

    #[test]
    fn test_standard_table_has_unique_words() {
        let standard = Bindings::standard();
        let rebuilt = standard
            .bindings()
            .iter()
            .fold(Bindings::builder(), |b, binding| {
                b.bind(binding.word(), binding.usage(), binding.extract)
            })
            .build()
            .unwrap();
        assert_eq!(rebuilt.len(), standard.len());
        assert_eq!(standard.usages().len(), 13);
    }
}

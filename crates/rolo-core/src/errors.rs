use rolo_core_types::schema::{OP_DECODE, OP_EXECUTE};
use thiserror::Error;

use crate::grammar::{KindSet, ParameterKind};

/// Result type for command execution
pub type Result<T> = std::result::Result<T, CommandError>;

/// Result type for the text -> command pipeline
pub type GrammarResult<T> = std::result::Result<T, GrammarError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the pipeline or the address book can report maps to one
/// kind with a stable code, so callers and tests can branch on the code
/// instead of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoloErrorKind {
    // Grammar levels, outermost first
    Lexer,
    Parser,
    Resolution,
    Validation,

    // Execution
    IndexOutOfRange,
    Duplicate,
    NotFound,
}

impl RoloErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            RoloErrorKind::Lexer => "ERR_LEXER",
            RoloErrorKind::Parser => "ERR_PARSER",
            RoloErrorKind::Resolution => "ERR_RESOLUTION",
            RoloErrorKind::Validation => "ERR_VALIDATION",
            RoloErrorKind::IndexOutOfRange => "ERR_INDEX_OUT_OF_RANGE",
            RoloErrorKind::Duplicate => "ERR_DUPLICATE",
            RoloErrorKind::NotFound => "ERR_NOT_FOUND",
        }
    }

    /// True for the levels a user sees as "could not understand that command"
    pub fn is_unintelligible(&self) -> bool {
        matches!(
            self,
            RoloErrorKind::Lexer | RoloErrorKind::Parser | RoloErrorKind::Resolution
        )
    }
}

/// Canonical structured error type
///
/// Flattened view over [`GrammarError`] and [`CommandError`] used for
/// logging and for the user-facing message.
#[derive(Debug, Clone)]
pub struct RoloError {
    kind: RoloErrorKind,
    op: Option<String>,
    imperative: Option<String>,
    position: Option<usize>,
    message: String,
}

impl RoloError {
    /// Create a new error with the specified kind
    pub fn new(kind: RoloErrorKind) -> Self {
        Self {
            kind,
            op: None,
            imperative: None,
            position: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the imperative the failure belongs to
    pub fn with_imperative(mut self, imperative: impl Into<String>) -> Self {
        self.imperative = Some(imperative.into());
        self
    }

    /// Add the parameter position the failure was detected at
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> RoloErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn imperative(&self) -> Option<&str> {
        self.imperative.as_deref()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message shown to the user
    ///
    /// Lexer, parser and resolution failures collapse into one generic
    /// sentence with the detail appended; validation and execution failures
    /// are shown as they are.
    pub fn user_message(&self) -> String {
        if self.kind.is_unintelligible() {
            format!("could not understand that command: {}", self.message)
        } else {
            self.message.clone()
        }
    }
}

impl std::fmt::Display for RoloError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(imperative) = &self.imperative {
            write!(f, " (imperative: {})", imperative)?;
        }
        if let Some(position) = self.position {
            write!(f, " (position: {})", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for RoloError {}

// ========== End Error Facility ==========

/// Malformed character stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A `"` was opened and never closed
    #[error("unterminated quoted string starting at column {column}")]
    UnterminatedQuote { column: usize },

    /// A backslash is the last character of the input
    #[error("dangling escape character at column {column}")]
    DanglingEscape { column: usize },

    /// A `+` or `-` marker with no value after it
    #[error("expected a value after '{marker}' at column {column}")]
    MissingMarkedValue { marker: char, column: usize },
}

/// Malformed token structure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// The line holds no tokens at all
    #[error("missing imperative: the command line is empty")]
    MissingImperative,

    /// The first token is not a plain word
    #[error("the command must start with a plain word, found {found}")]
    ImperativeNotWord { found: String },

    /// An option was written as `/` or `/:value`
    #[error("option key cannot be empty")]
    EmptyOptionKey,
}

/// Well-formed command with no matching binding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no binding matched the imperative '{imperative}'")]
    UnknownImperative { imperative: String },
}

/// Well-formed, resolvable command that is invalid for its binding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ===== Structural =====
    #[error(
        "insufficient parameters: expected a parameter at position {position}, but only {count} given"
    )]
    InsufficientParameters { position: usize, count: usize },

    #[error("incorrect parameter kind at position {position}: expected {allowed}, found {actual}")]
    IncorrectParameterKind {
        position: usize,
        allowed: KindSet,
        actual: ParameterKind,
    },

    #[error(
        "insufficient variable parameters: expected at least {minimum} from position {start}, found {actual}"
    )]
    InsufficientVariableParameters {
        start: usize,
        minimum: usize,
        actual: usize,
    },

    #[error("unexpected parameter at position {position}")]
    UnexpectedParameter { position: usize },

    #[error("unknown option '/{key}'")]
    UnknownOption { key: String },

    #[error("option '/{key}' is required")]
    MissingOption { key: String },

    #[error("option '/{key}' requires a value")]
    MissingOptionValue { key: String },

    #[error("option '/{key}' does not take a value")]
    UnexpectedOptionValue { key: String },

    #[error("option '/{key}' is given more than once")]
    RepeatedOption { key: String },

    #[error("expected at least one of {expected}")]
    NoChanges { expected: String },

    // ===== Format =====
    #[error("invalid index '{value}' at position {position}: must be a positive integer")]
    InvalidIndex { position: usize, value: String },

    #[error("index '{value}' at position {position} is too large")]
    IndexTooLarge { position: usize, value: String },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    // ===== Domain =====
    #[error("index out of range at position {position}: indices start at 1")]
    IndexOutOfRange { position: usize },

    #[error("{field} cannot be blank")]
    BlankValue { field: String },

    #[error("duplicate key '{key}'")]
    DuplicateKey { key: String },

    #[error("tag '{tag}' is both added and removed")]
    ConflictingTag { tag: String },

    #[error("a contact cannot be linked to itself (index {index})")]
    SelfLink { index: usize },

    // ===== Enrichment =====
    #[error("{error}\n{context}")]
    WithContext {
        error: Box<ValidationError>,
        context: String,
    },
}

impl ValidationError {
    /// Concatenate extra text onto this error's message
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ValidationError::WithContext {
            error: Box::new(self),
            context: context.into(),
        }
    }

    /// The innermost error, with all context layers removed
    pub fn root(&self) -> &ValidationError {
        match self {
            ValidationError::WithContext { error, .. } => error.root(),
            other => other,
        }
    }

    /// Parameter position the error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self.root() {
            ValidationError::InsufficientParameters { position, .. }
            | ValidationError::IncorrectParameterKind { position, .. }
            | ValidationError::UnexpectedParameter { position }
            | ValidationError::InvalidIndex { position, .. }
            | ValidationError::IndexTooLarge { position, .. }
            | ValidationError::IndexOutOfRange { position } => Some(*position),
            ValidationError::InsufficientVariableParameters { start, .. } => Some(*start),
            _ => None,
        }
    }
}

/// Four-level taxonomy of text -> command failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl GrammarError {
    pub fn kind(&self) -> RoloErrorKind {
        match self {
            GrammarError::Lexer(_) => RoloErrorKind::Lexer,
            GrammarError::Parser(_) => RoloErrorKind::Parser,
            GrammarError::Resolution(_) => RoloErrorKind::Resolution,
            GrammarError::Validation(_) => RoloErrorKind::Validation,
        }
    }
}

/// Failures raised while a decoded command runs against the address book
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("index {index} is out of range: {size} contacts are listed")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("a contact named '{name}' already exists")]
    DuplicateContact { name: String },

    #[error("{from} is already linked to {to} as '{label}'")]
    DuplicateLink {
        from: String,
        label: String,
        to: String,
    },

    #[error("{from} has no '{label}' link to {to}")]
    LinkNotFound {
        from: String,
        label: String,
        to: String,
    },

    #[error("contact not found: {contact_id}")]
    ContactNotFound { contact_id: String },
}

impl From<GrammarError> for RoloError {
    fn from(err: GrammarError) -> Self {
        let base = RoloError::new(err.kind())
            .with_op(OP_DECODE)
            .with_message(err.to_string());
        match &err {
            GrammarError::Validation(v) => match v.position() {
                Some(position) => base.with_position(position),
                None => base,
            },
            GrammarError::Resolution(ResolutionError::UnknownImperative { imperative }) => {
                base.with_imperative(imperative.clone())
            }
            _ => base,
        }
    }
}

impl From<CommandError> for RoloError {
    fn from(err: CommandError) -> Self {
        let kind = match &err {
            CommandError::IndexOutOfRange { .. } => RoloErrorKind::IndexOutOfRange,
            CommandError::DuplicateContact { .. } | CommandError::DuplicateLink { .. } => {
                RoloErrorKind::Duplicate
            }
            CommandError::LinkNotFound { .. } | CommandError::ContactNotFound { .. } => {
                RoloErrorKind::NotFound
            }
        };
        RoloError::new(kind)
            .with_op(OP_EXECUTE)
            .with_message(err.to_string())
    }
}

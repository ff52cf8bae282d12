//! Text -> [`Command`](crate::commands::Command) pipeline
//!
//! ```text
//! raw line -> lexer -> tokens -> parser -> BareCommand -> Decoder -> extractor -> Command
//! ```
//!
//! Each stage reports its own [`GrammarError`](crate::errors::GrammarError)
//! level. The grammar is flat: one imperative word, kind-tagged positional
//! parameters, and a multimap of `/key[:value]` options.

pub mod bare_command;
pub mod bindings;
pub mod extractors;
pub mod lexer;
pub mod parser;
pub mod validation;

pub use bare_command::{BareCommand, BareCommandBuilder, KindSet, Parameter, ParameterKind};
pub use bindings::{Binding, Bindings, BindingsBuilder, BindingsError, Decoder, Extractor};
pub use lexer::{tokenize, Token};
pub use parser::parse;

//! Rolo Core - command language and in-memory address book
//!
//! This crate provides:
//! - The grammar pipeline: lexer, parser, [`BareCommand`](grammar::BareCommand),
//!   validation helpers, bindings and the [`Decoder`](grammar::Decoder)
//! - Typed [`Command`]s and their execution against an [`AddressBook`]
//! - The contact model and the operations that mutate it
//! - The error facility ([`RoloError`]) and the logging facility
//!
//! # Example
//!
//! ```
//! use rolo_core::{AddressBook, Decoder};
//!
//! let decoder = Decoder::standard();
//! let mut book = AddressBook::new();
//!
//! for line in ["add /name:Alice", "add /name:Bob", "tag 1 friend -colleague"] {
//!     let command = decoder.interpret(line).unwrap();
//!     command.execute(&mut book).unwrap();
//! }
//! assert_eq!(book.contacts()[0].tags.len(), 1);
//! ```

pub mod commands;
pub mod errors;
pub mod execute;
pub mod grammar;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use commands::{Command, CommandResult};
pub use errors::{
    CommandError, GrammarError, GrammarResult, Result, RoloError, RoloErrorKind, ValidationError,
};
pub use grammar::{BareCommand, Bindings, Decoder};
pub use ops::AddressBook;

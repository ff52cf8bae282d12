use rolo_core::grammar::BareCommand;
use rolo_core::{AddressBook, CommandResult, Decoder};

/// Decoder over the standard bindings
#[allow(dead_code)]
pub fn decoder() -> Decoder {
    Decoder::standard()
}

/// Parse a line that is known to be well-formed
#[allow(dead_code)]
pub fn bare(line: &str) -> BareCommand {
    BareCommand::parse(line).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", line, e))
}

/// Decode and execute a line that is expected to succeed
#[allow(dead_code)]
pub fn run(book: &mut AddressBook, line: &str) -> CommandResult {
    let command = decoder()
        .interpret(line)
        .unwrap_or_else(|e| panic!("failed to decode {:?}: {}", line, e));
    command
        .execute(book)
        .unwrap_or_else(|e| panic!("failed to execute {:?}: {}", line, e))
}

/// Address book holding one contact per name, in order
///
/// Goes through the real `add` command so the contacts get proper ids and
/// timestamps.
#[allow(dead_code)]
pub fn book_with(names: &[&str]) -> AddressBook {
    let mut book = AddressBook::new();
    for name in names {
        run(&mut book, &format!("add /name:\"{}\"", name));
    }
    book
}

/// Names of the listed contacts, in listed order
#[allow(dead_code)]
pub fn listed_names(book: &AddressBook) -> Vec<String> {
    book.listed().iter().map(|c| c.name.to_string()).collect()
}

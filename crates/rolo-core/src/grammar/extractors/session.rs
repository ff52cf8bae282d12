use super::{validate_no_arguments, Result};
use crate::commands::Command;
use crate::grammar::bare_command::BareCommand;

/// `clear`
///
/// # Errors
///
/// `UnexpectedParameter` or `UnknownOption` for anything after the word.
pub fn extract_clear(cmd: &BareCommand) -> Result<Command> {
    validate_no_arguments(cmd)?;
    Ok(Command::Clear)
}

/// `help`
///
/// # Errors
///
/// As for [`extract_clear`].
pub fn extract_help(cmd: &BareCommand) -> Result<Command> {
    validate_no_arguments(cmd)?;
    Ok(Command::Help)
}

/// `exit`
///
/// # Errors
///
/// As for [`extract_clear`].
pub fn extract_exit(cmd: &BareCommand) -> Result<Command> {
    validate_no_arguments(cmd)?;
    Ok(Command::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn test_no_arguments() {
        let exit = BareCommand::parse("exit").unwrap();
        assert_eq!(extract_exit(&exit), Ok(Command::Exit));
        assert_eq!(
            extract_help(&BareCommand::parse("help /all").unwrap()),
            Err(ValidationError::UnknownOption { key: "all".into() })
        );
        assert_eq!(
            extract_clear(&BareCommand::parse("clear now").unwrap()),
            Err(ValidationError::UnexpectedParameter { position: 0 })
        );
    }
}

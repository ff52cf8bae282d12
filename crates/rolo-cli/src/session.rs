//! One address book plus the decoder that drives it

use std::io::Write;

use anyhow::Result;
use rolo_core::{AddressBook, CommandResult, Decoder, RoloError};
use rolo_core_types::{RequestContext, SessionId};
use serde_json::json;

/// What the caller should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Failed,
    Exit,
}

pub struct Session {
    decoder: Decoder,
    book: AddressBook,
    id: SessionId,
    json: bool,
}

impl Session {
    pub fn new(json: bool) -> Self {
        Self {
            decoder: Decoder::standard(),
            book: AddressBook::new(),
            id: SessionId::new(),
            json,
        }
    }

    /// Decode and execute one line, writing feedback to `out` and failures
    /// to `err`
    pub fn handle(
        &mut self,
        line: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Outcome> {
        let ctx = RequestContext::in_session(&self.id);
        let span = tracing::info_span!(
            "request",
            request_id = %ctx.request_id,
            session_id = ctx.session_str()
        );
        let _guard = span.enter();

        let result = self
            .decoder
            .interpret(line)
            .map_err(RoloError::from)
            .and_then(|command| command.execute(&mut self.book).map_err(RoloError::from));

        match result {
            Ok(result) => {
                self.print_result(&result, out)?;
                Ok(if result.exit {
                    Outcome::Exit
                } else {
                    Outcome::Continue
                })
            }
            Err(e) => {
                self.print_error(&e, out, err)?;
                Ok(Outcome::Failed)
            }
        }
    }

    fn print_result(&self, result: &CommandResult, out: &mut impl Write) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(result)?)?;
            return Ok(());
        }

        writeln!(out, "{}", result.feedback)?;
        for warning in &result.warnings {
            writeln!(out, "warning: {}", warning)?;
        }
        if result.show_help {
            for usage in self.decoder.bindings().usages() {
                writeln!(out, "  {}", usage)?;
            }
        }
        Ok(())
    }

    fn print_error(&self, e: &RoloError, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
        if self.json {
            let body = json!({
                "error": {
                    "code": e.code(),
                    "message": e.user_message(),
                    "position": e.position(),
                }
            });
            writeln!(out, "{}", body)?;
        } else {
            writeln!(err, "{}", e.user_message())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(session: &mut Session, line: &str) -> (Outcome, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = session.handle(line, &mut out, &mut err).unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_feedback_and_warnings() {
        let mut session = Session::new(false);
        handle(&mut session, "add /name:Alice");
        let (outcome, out, err) = handle(&mut session, "tag 1 a a");

        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(
            out,
            "Tagged Alice; tags: a\nwarning: tag 'a' was given more than once\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_unintelligible_line() {
        let mut session = Session::new(false);
        let (outcome, out, err) = handle(&mut session, "zzz");

        assert_eq!(outcome, Outcome::Failed);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "could not understand that command: no binding matched the imperative 'zzz'\n"
        );
    }

    #[test]
    fn test_help_lists_usages() {
        let mut session = Session::new(false);
        let (_, out, _) = handle(&mut session, "help");
        assert!(out.contains("  delete INDEX\n"));
        assert!(out.contains("  link INDEX LABEL INDEX\n"));
    }

    #[test]
    fn test_json_error() {
        let mut session = Session::new(true);
        let (_, out, err) = handle(&mut session, "delete x");
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();

        assert_eq!(value["error"]["code"], "ERR_VALIDATION");
        assert_eq!(value["error"]["position"], 0);
        assert!(err.is_empty());
    }

    #[test]
    fn test_exit() {
        let mut session = Session::new(false);
        assert_eq!(handle(&mut session, "exit").0, Outcome::Exit);
    }
}

//! Interactive prompt
//!
//! Usage: rolo [repl]

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;

use crate::session::{Outcome, Session};

/// Read lines until `exit` or end of input
///
/// Failed lines are reported and the prompt continues, so this always
/// succeeds unless stdin or stdout break.
pub fn execute(json: bool) -> Result<bool> {
    let mut session = Session::new(json);
    let interactive = io::stdin().is_terminal();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let mut lines = io::stdin().lock().lines();
    loop {
        if interactive {
            print!("> ");
            stdout.lock().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = session.handle(&line, &mut stdout.lock(), &mut stderr.lock())?;
        if outcome == Outcome::Exit {
            break;
        }
    }
    Ok(true)
}

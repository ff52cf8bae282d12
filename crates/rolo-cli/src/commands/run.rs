//! One-shot execution
//!
//! Usage: rolo run <LINE>...

use std::io;

use anyhow::Result;
use clap::Args;

use crate::session::{Outcome, Session};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Command lines, executed in order against one fresh address book
    #[arg(required = true)]
    pub lines: Vec<String>,
}

/// Returns false when a line fails; later lines are skipped
pub fn execute(args: RunArgs, json: bool) -> Result<bool> {
    let mut session = Session::new(json);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    for line in &args.lines {
        match session.handle(line, &mut stdout, &mut stderr)? {
            Outcome::Continue => {}
            Outcome::Exit => break,
            Outcome::Failed => return Ok(false),
        }
    }
    Ok(true)
}

//! Parse and decode without executing
//!
//! Usage: rolo check <LINE>

use anyhow::Result;
use clap::Args;
use rolo_core::grammar::BareCommand;
use rolo_core::{Decoder, RoloError};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Command line to check
    pub line: String,
}

/// Print the bare command and the decoded command; false if either fails
pub fn execute(args: CheckArgs) -> Result<bool> {
    let bare = match BareCommand::parse(&args.line) {
        Ok(bare) => bare,
        Err(e) => {
            eprintln!("{}", RoloError::from(e).user_message());
            return Ok(false);
        }
    };
    println!("{:#?}", bare);

    match Decoder::standard().decode(&bare) {
        Ok(command) => {
            println!("{:#?}", command);
            Ok(true)
        }
        Err(e) => {
            eprintln!("{}", RoloError::from(e).user_message());
            Ok(false)
        }
    }
}

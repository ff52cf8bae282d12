pub mod check;
pub mod repl;
pub mod run;

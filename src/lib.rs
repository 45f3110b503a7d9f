//! A tiny interactive shell-emulator prototype.
//!
//! This crate implements the skeleton of a UNIX-shell-like interpreter: it
//! renders a `user@host:path$ ` prompt, expands `$NAME` references against
//! an environment snapshot captured at startup, splits the line into words
//! with shell quoting rules, and dispatches to placeholder command
//! handlers. Nothing is executed for real — `ls`, `cd` and friends only
//! report what they were called with — which keeps the focus on the input
//! pipeline and the loop around it.
//!
//! The main entry point is [`Interpreter`]; the public modules expose the
//! pieces it is built from.

mod builtin;
pub mod command;
pub mod env;
mod interpreter;
pub mod lexer;
pub mod parser;
pub mod prompt;

pub use interpreter::Interpreter;

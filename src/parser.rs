//! Turning one raw input line into a token sequence.
//!
//! Parsing is a two-step pipeline: `$NAME` references are expanded against
//! the environment snapshot, then the expanded text is split into shell
//! words. Expansion runs first, so a reference inside double quotes is
//! substituted like any other occurrence.

use std::fmt;

use crate::env::Environment;
use crate::lexer::{self, LexError};

/// Errors a line can fail with.
///
/// All of them are recoverable: the REPL prints the message and moves on
/// to the next line as if no tokens had been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The expanded line could not be split into words.
    Syntax(LexError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(e) => write!(f, "syntax error: {}", e),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Syntax(e)
    }
}

/// Parse one raw input line into tokens.
///
/// Blank lines produce an empty token list without touching the expander
/// or the lexer.
pub fn parse_line(line: &str, env: &Environment) -> Result<Vec<String>, ParseError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    let expanded = expand_vars(line, env);
    Ok(lexer::split_words(&expanded)?)
}

/// Replace every literal `$NAME` occurrence with the snapshot value.
///
/// Names are substituted longest first (ties broken alphabetically), so
/// when one name is a prefix of another (`$HOME` vs `$HOMEDIR`) the longer
/// reference always wins. References to names absent from the snapshot are
/// left as-is.
fn expand_vars(line: &str, env: &Environment) -> String {
    let mut names: Vec<&String> = env.vars.keys().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut result = line.to_string();
    for name in names {
        if !result.contains('$') {
            break;
        }
        let reference = format!("${name}");
        if result.contains(&reference) {
            result = result.replace(&reference, &env.vars[name]);
        }
    }
    result
}

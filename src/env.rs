use std::collections::HashMap;
use std::env as stdenv;
use std::path::PathBuf;

/// Interpreter-owned view of the process environment.
///
/// Everything the REPL has to remember between iterations lives here:
/// - `vars`: the variable snapshot consulted by `$NAME` expansion;
/// - `current_dir`: the directory shown in the prompt;
/// - `should_exit`: the flag the `exit` builtin flips to stop the loop.
///
/// The snapshot is captured once at startup and is read-only afterwards;
/// restarting the process is the only way to refresh it.
///
/// Note: fields are public for simplicity to keep the prototype small.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Variables visible to `$NAME` expansion.
    pub vars: HashMap<String, String>,
    /// Working directory captured at startup. The `cd` stub never updates it.
    pub current_dir: PathBuf,
    /// When set to true, the interactive loop terminates before the next prompt.
    pub should_exit: bool,
}

impl Environment {
    /// Capture the current process state into a new `Environment`.
    ///
    /// Copies every entry of `std::env::vars()` and the working directory,
    /// then guarantees that `USER`, `HOME` and `PWD` are present, defaulting
    /// them when the host environment does not provide them. The real
    /// process environment is never mutated.
    pub fn new() -> Self {
        let mut vars: HashMap<String, String> = stdenv::vars().collect();
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        vars.entry("USER".to_string())
            .or_insert_with(|| "user".to_string());
        vars.entry("HOME".to_string())
            .or_insert_with(|| "/home/user".to_string());
        vars.insert(
            "PWD".to_string(),
            current_dir.to_string_lossy().into_owned(),
        );

        Self {
            vars,
            current_dir,
            should_exit: false,
        }
    }

    /// Look up a variable in the snapshot.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

//! Mapping the first token of a line to a command and running it.

use std::io::Write;

use crate::builtin;
use crate::env::Environment;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Every command the dispatcher knows about, resolved from the first token
/// of a line. Anything unrecognized is carried in `Unknown` so the fallback
/// handler can name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Ls,
    Cd,
    Exit,
    Unknown(String),
}

impl CommandKind {
    /// Resolve a command name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ls" => CommandKind::Ls,
            "cd" => CommandKind::Cd,
            "exit" => CommandKind::Exit,
            other => CommandKind::Unknown(other.to_string()),
        }
    }
}

/// Dispatch a tokenized line.
///
/// An empty token list is a no-op. A handler failure is reported to `out`
/// together with the command name and becomes exit code 1; it never aborts
/// the caller. An `Err` from this function means even the failure report
/// could not be written, and the REPL should stop.
pub fn execute(
    tokens: &[String],
    out: &mut dyn Write,
    env: &mut Environment,
) -> anyhow::Result<ExitCode> {
    let Some((name, args)) = tokens.split_first() else {
        return Ok(0);
    };

    let result = match CommandKind::from_name(name) {
        CommandKind::Ls => builtin::ls(args, out),
        CommandKind::Cd => builtin::cd(args, out),
        CommandKind::Exit => builtin::exit(args, out, env),
        CommandKind::Unknown(cmd) => builtin::unknown(&cmd, args, out),
    };

    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            writeln!(out, "error running command '{}': {}", name, e)?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_known_names() {
        assert_eq!(CommandKind::from_name("ls"), CommandKind::Ls);
        assert_eq!(CommandKind::from_name("cd"), CommandKind::Cd);
        assert_eq!(CommandKind::from_name("exit"), CommandKind::Exit);
    }

    #[test]
    fn resolution_is_case_sensitive() {
        assert_eq!(
            CommandKind::from_name("LS"),
            CommandKind::Unknown("LS".to_string())
        );
    }

    #[test]
    fn empty_tokens_do_nothing() {
        let mut env = Environment::new();
        let mut out = Vec::new();

        let code = execute(&[], &mut out, &mut env).unwrap();

        assert_eq!(code, 0);
        assert!(out.is_empty());
        assert!(!env.should_exit);
    }

    #[test]
    fn exit_stops_the_interpreter() {
        let mut env = Environment::new();
        let mut out = Vec::new();

        let code = execute(&strings(&["exit"]), &mut out, &mut env).unwrap();

        assert_eq!(code, 0);
        assert!(env.should_exit);
    }

    #[test]
    fn unknown_commands_leave_state_alone() {
        let mut env = Environment::new();
        let dir_before = env.current_dir.clone();
        let mut out = Vec::new();

        let code = execute(&strings(&["foobar", "x", "y"]), &mut out, &mut env).unwrap();

        assert_eq!(code, 0);
        assert!(!env.should_exit);
        assert_eq!(env.current_dir, dir_before);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("foobar"));
        assert!(text.contains("x y"));
    }

    #[test]
    fn cd_never_changes_the_current_directory() {
        let mut env = Environment::new();
        let dir_before = env.current_dir.clone();
        let mut out = Vec::new();

        execute(&strings(&["cd", "/somewhere/else"]), &mut out, &mut env).unwrap();

        assert_eq!(env.current_dir, dir_before);
    }

    /// Fails the first write, then behaves like a normal buffer. Simulates
    /// a handler hitting a broken stream while the error report still goes
    /// through.
    struct FailFirstWrite {
        failed: bool,
        out: Vec<u8>,
    }

    impl io::Write for FailFirstWrite {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::other("stream closed"));
            }
            self.out.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn handler_failures_are_reported_not_propagated() {
        let mut env = Environment::new();
        let mut out = FailFirstWrite {
            failed: false,
            out: Vec::new(),
        };

        let code = execute(&strings(&["ls"]), &mut out, &mut env).unwrap();

        assert_eq!(code, 1);
        let text = String::from_utf8(out.out).unwrap();
        assert!(text.contains("error running command 'ls'"));
    }

    /// Always-broken stream: even the failure report cannot be written.
    struct BrokenWrite;

    impl io::Write for BrokenWrite {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("stream closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unreportable_failures_propagate() {
        let mut env = Environment::new();
        assert!(execute(&strings(&["ls"]), &mut BrokenWrite, &mut env).is_err());
    }
}

use std::io::{self, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::command;
use crate::env::Environment;
use crate::parser;
use crate::prompt;

/// The interactive shell emulator: the environment snapshot plus the
/// Read-Eval-Print Loop driving prompt, parser and dispatcher.
///
/// Two error classes are handled inside the loop and keep it running:
/// syntax errors from parsing and failures inside a command handler. Only
/// an error that escapes both layers terminates the loop.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Create an interpreter over a fresh snapshot of the process state.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Feed one line through the parse/dispatch pipeline.
    ///
    /// A parse error is printed to `out` and swallowed, leaving the line
    /// with no effect. An `Err` from here means the dispatcher could not
    /// even report a failure; the loop treats that as fatal.
    pub fn process_line(&mut self, line: &str, out: &mut dyn Write) -> anyhow::Result<()> {
        match parser::parse_line(line, &self.env) {
            Ok(tokens) => {
                if !tokens.is_empty() {
                    command::execute(&tokens, out, &mut self.env)?;
                }
                Ok(())
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                Ok(())
            }
        }
    }

    /// Run the interactive loop until `exit`, end of input or a fatal error.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut editor = DefaultEditor::new()?;

        while !self.env.should_exit {
            let prompt = prompt::render(&self.env);
            match editor.readline(&prompt) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    if let Err(e) = self.process_line(&line, &mut io::stdout()) {
                        println!("unexpected error: {e}");
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("use 'exit' to leave");
                }
                Err(ReadlineError::Eof) => {
                    println!("shutting down...");
                    break;
                }
                Err(e) => {
                    println!("unexpected error: {e}");
                    break;
                }
            }
        }

        Ok(())
    }

    /// One-time startup walkthrough.
    ///
    /// Exercises the same code paths the interactive loop uses, with canned
    /// inputs: the stub commands, variable expansion, the prompt, and
    /// recovery from a syntax error. Purely illustrative.
    pub fn demo(&mut self, out: &mut dyn Write) -> anyhow::Result<()> {
        let rule = "=".repeat(60);
        writeln!(out, "{rule}")?;
        writeln!(out, "prototype walkthrough")?;
        writeln!(out, "{rule}")?;

        writeln!(out, "\n1. stub commands:")?;
        command::execute(&tokens(&["ls"]), out, &mut self.env)?;
        writeln!(out)?;
        command::execute(&tokens(&["cd", "/home/user"]), out, &mut self.env)?;
        writeln!(out)?;
        command::execute(&tokens(&["unknown_cmd", "arg1", "arg2"]), out, &mut self.env)?;

        writeln!(out, "\n2. variable expansion:")?;
        let input = "echo home: $HOME, user: $USER";
        writeln!(out, "input: {input}")?;
        match parser::parse_line(input, &self.env) {
            Ok(words) => writeln!(out, "tokens after expansion: {words:?}")?,
            Err(e) => writeln!(out, "{e}")?,
        }

        writeln!(out, "\n3. prompt:")?;
        writeln!(out, "example prompt: {}", prompt::render(&self.env))?;

        writeln!(out, "\n4. error recovery:")?;
        let broken = "ls -la \"unterminated";
        writeln!(out, "input with an error: {broken}")?;
        self.process_line(broken, out)?;

        writeln!(out, "\n{rule}")?;
        Ok(())
    }

    /// Greeting printed before the first prompt.
    pub fn banner(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "welcome to the shell emulator prototype")?;
        writeln!(out, "available commands: ls, cd, exit")?;
        writeln!(out, "references like $HOME, $USER and $PWD are expanded")?;
        writeln!(out, "leave with 'exit' or Ctrl-D")?;
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_produces_no_output() {
        let mut sh = Interpreter::new();
        let mut out = Vec::new();

        sh.process_line("   ", &mut out).unwrap();

        assert!(out.is_empty());
        assert!(!sh.env.should_exit);
    }

    #[test]
    fn exit_line_stops_the_loop_on_the_next_check() {
        let mut sh = Interpreter::new();
        let mut out = Vec::new();

        sh.process_line("exit", &mut out).unwrap();

        assert!(sh.env.should_exit);
    }

    #[test]
    fn syntax_errors_are_printed_and_swallowed() {
        let mut sh = Interpreter::new();
        let mut out = Vec::new();

        sh.process_line("ls -la \"unterminated", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("syntax error"));
        assert!(!sh.env.should_exit);
    }

    #[test]
    fn expansion_reaches_the_dispatcher() {
        let mut sh = Interpreter::new();
        sh.env.vars.insert("TARGET".to_string(), "/tmp".to_string());
        let mut out = Vec::new();

        sh.process_line("ls $TARGET", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("arguments: /tmp"));
    }

    #[test]
    fn demo_runs_without_stopping_the_interpreter() {
        let mut sh = Interpreter::new();
        let mut out = Vec::new();

        sh.demo(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("prototype walkthrough"));
        assert!(text.contains("command: ls"));
        assert!(text.contains("syntax error"));
        assert!(!sh.env.should_exit);
    }

    #[test]
    fn banner_lists_the_commands() {
        let sh = Interpreter::new();
        let mut out = Vec::new();

        sh.banner(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ls, cd, exit"));
    }
}

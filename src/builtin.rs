//! Placeholder command handlers.
//!
//! None of these do the real thing yet: each one reports which command ran
//! and the arguments it received. `exit` is the only handler with an
//! effect, and that effect is flipping the interpreter's exit flag.

use std::io::Write;

use anyhow::Result;

use crate::env::Environment;

/// `ls` stub: names itself and echoes its arguments. No filesystem access.
pub(crate) fn ls(args: &[String], out: &mut dyn Write) -> Result<()> {
    stub("ls", args, out)
}

/// `cd` stub: names itself and echoes its arguments. The working directory
/// stays untouched until a real implementation lands.
pub(crate) fn cd(args: &[String], out: &mut dyn Write) -> Result<()> {
    stub("cd", args, out)
}

/// `exit`: echoes any arguments, announces shutdown and asks the REPL to stop.
pub(crate) fn exit(args: &[String], out: &mut dyn Write, env: &mut Environment) -> Result<()> {
    if !args.is_empty() {
        writeln!(out, "exit arguments: {}", args.join(" "))?;
    }
    writeln!(out, "shutting down...")?;
    env.should_exit = true;
    Ok(())
}

/// Fallback for anything the dispatcher does not recognize.
pub(crate) fn unknown(name: &str, args: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "stub command: {name}")?;
    echo_args(args, out)
}

fn stub(name: &str, args: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "command: {name}")?;
    echo_args(args, out)?;
    writeln!(out, "{name} is not implemented yet")?;
    Ok(())
}

fn echo_args(args: &[String], out: &mut dyn Write) -> Result<()> {
    if !args.is_empty() {
        writeln!(out, "arguments: {}", args.join(" "))?;
    }
    Ok(())
}

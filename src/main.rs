use std::io;

use minish::Interpreter;

/// An interactive UNIX-shell emulator prototype. Commands are stubs; the
/// interesting parts are the prompt, `$NAME` expansion and the tokenizer.
#[derive(argh::FromArgs)]
struct Options {
    /// skip the startup walkthrough and go straight to the prompt
    #[argh(switch)]
    no_demo: bool,
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();
    let mut shell = Interpreter::new();
    let mut stdout = io::stdout();

    if !options.no_demo {
        shell.demo(&mut stdout)?;
    }
    shell.banner(&mut stdout)?;
    shell.run()
}

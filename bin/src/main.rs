use std::{
    fs::File,
    io::{stdin, stdout, BufReader, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;

use repl::Session;

/// Evaluates integer expressions with named variables, one command per line.
#[derive(clap::Parser)]
#[command(version)]
struct Args {
    /// Script to run instead of reading commands from stdin
    file: Option<PathBuf>,
}

fn run_file(path: PathBuf, session: &mut Session) -> anyhow::Result<()> {
    let file = File::open(&path).with_context(|| format!("Could not open {}", path.display()))?;
    let mut input = BufReader::new(file);
    let mut output = stdout().lock();
    while let Some(line) = repl::read_line(&mut input)
        .with_context(|| format!("Could not read {}", path.display()))?
    {
        session.run_line(&line, &mut output)?;
    }
    Ok(())
}

fn run_prompt(session: &mut Session) -> anyhow::Result<()> {
    let interactive = stdin().is_terminal();
    let mut input = stdin().lock();
    loop {
        if interactive {
            print!("> ");
            stdout().flush()?;
        }
        let Some(line) = repl::read_line(&mut input)? else {
            log::debug!("Reached end of input");
            return Ok(());
        };
        session.run_line(&line, &mut stdout())?;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut session = Session::default();

    match args.file {
        Some(file) => run_file(file, &mut session),
        None => run_prompt(&mut session),
    }
}

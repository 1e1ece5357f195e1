//! Interactive killer sudoku cage calculator.
//!
//! This is the entry point for the `cagelace` terminal application. It
//! reads commands from standard input (or from `--eval` arguments) and
//! prints the digit combinations that can fill a cage.

use std::io;

use clap::Parser;

mod command;
mod repl;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Evaluate a command and exit instead of starting the prompt.
    ///
    /// May be given multiple times; commands are evaluated in order.
    #[arg(short, long, value_name = "COMMAND")]
    eval: Vec<String>,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    if !args.eval.is_empty() {
        for line in &args.eval {
            if !repl::eval_line(line, &mut stdout)? {
                break;
            }
        }
        return Ok(());
    }

    repl::run(io::stdin().lock(), stdout)
}

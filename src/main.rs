use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

use calcline::{
    run_line,
    util::logger::{init_with_level, level_for_verbosity},
};
use clap::Parser;
use tracing::{error, info};

/// calcline evaluates arithmetic expressions, one line at a time, and prints
/// each result with two decimal places.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of the given file instead of reading standard
    /// input.
    #[arg(short, long, value_name = "FILE", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Raises the log level; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate. Without it, lines are read from standard input
    /// until it is closed.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_with_level(level_for_verbosity(args.verbose));

    if let Some(expression) = args.expression {
        println!("{}", run_line(&expression));
        return;
    }

    if let Some(path) = args.file {
        let contents = fs::read_to_string(&path).unwrap_or_else(|_| {
                                                    eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                              path.display());
                                                    std::process::exit(1);
                                                });
        info!(file = %path.display(), "evaluating file");
        contents.lines().for_each(evaluate_line);
        return;
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => evaluate_line(&line),
            Err(e) => {
                error!(%e, "failed to read standard input");
                break;
            },
        }
    }
}

/// Prints the result of one input line. Blank lines produce no output.
fn evaluate_line(line: &str) {
    if line.trim().is_empty() {
        return;
    }
    println!("{}", run_line(line));
}

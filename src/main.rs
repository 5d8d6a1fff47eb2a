use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rcalc::{Environment, Value, interpret};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{Level, debug};

/// rcalc is an interactive calculator for a tiny R-like language of numbers,
/// strings, vectors and matrices.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Interprets a single line and exits.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Interprets every line of a file in order, sharing one environment.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enables debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The prompt shown by the interactive loop.
    #[arg(long, default_value = "> ")]
    prompt: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(log_level)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();

    if let Some(line) = &args.eval {
        return run_eval(line);
    }
    if let Some(path) = &args.file {
        return run_file(path);
    }
    run_repl(&args.prompt)
}

/// Prints a value; matrices already end with a newline.
fn show(value: &Value) {
    println!("{}", value.to_string().trim_end_matches('\n'));
}

fn run_eval(line: &str) -> ExitCode {
    match interpret(line, &Environment::new()) {
        Ok(outcome) => {
            if let Some(value) = outcome.value {
                show(&value);
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run_file(path: &Path) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    let mut environment = Environment::new();
    for (number, line) in script.lines().enumerate() {
        match interpret(line, &environment) {
            Ok(outcome) => {
                if let Some(value) = &outcome.value {
                    show(value);
                }
                environment = outcome.environment;
            },
            Err(e) => {
                eprintln!("line {}: {e}", number + 1);
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

fn run_repl(prompt: &str) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to start the line editor: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut environment = Environment::new();
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match interpret(&line, &environment) {
                    Ok(outcome) => {
                        if let Some(value) = &outcome.value {
                            show(value);
                        }
                        environment = outcome.environment;
                    },
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            },
        }
    }
    debug!(bindings = environment.len(), "session ended");
    ExitCode::SUCCESS
}

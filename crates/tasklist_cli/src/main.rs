use clap::Parser;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tasklist_cli::cli::{Cli, Command};
use tasklist_core::error::AppError;
use tasklist_core::list::TaskList;

const STORE_ENV_VAR: &str = "TASKLIST_FILE";
const DEFAULT_STORE_FILE: &str = ".tasklist.json";

/// Resolves the store file once, here at the boundary. The core never
/// reads the environment.
fn store_path() -> PathBuf {
    match std::env::var(STORE_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_STORE_FILE),
    }
}

/// Joins trailing arguments into the task text, or reads one line from
/// stdin when none were given.
fn task_text(args: &[String]) -> Result<String, AppError> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| AppError::io(err.to_string()))?;

    let text = line.trim();
    if text.is_empty() {
        return Err(AppError::input("task cannot be blank"));
    }

    Ok(text.to_string())
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::input(message)
}

fn run_command(cli: Cli, store_path: &Path) -> Result<(), AppError> {
    let mut list = TaskList::load(store_path)?;

    match cli.command {
        Command::Add { text } => {
            let text = task_text(&text)?;
            list.add(&text);
            list.save(store_path)?;
        }
        Command::Complete { number } => {
            list.complete(number)?;
            list.save(store_path)?;
        }
        Command::Delete { number } => {
            list.delete(number)?;
            list.save(store_path)?;
        }
        Command::List => print!("{}", list.render()),
        Command::Incomplete => print!("{}", list.incomplete()),
    }

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version surface as clap "errors"
            if !err.use_stderr() {
                print!("{err}");
                return;
            }
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli, &store_path()) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

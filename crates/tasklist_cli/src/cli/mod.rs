use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tasklist", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: tasklist add Buy milk
    /// With no TEXT, one line is read from standard input.
    Add {
        text: Vec<String>,
    },
    /// Mark a task as completed by its list number
    ///
    /// Example: tasklist complete 2
    Complete {
        number: usize,
    },
    /// Delete a task by its list number
    ///
    /// Example: tasklist delete 1
    Delete {
        number: usize,
    },
    /// List all tasks
    ///
    /// Example: tasklist list
    List,
    /// List only incomplete tasks
    ///
    /// Example: tasklist incomplete
    Incomplete,
}

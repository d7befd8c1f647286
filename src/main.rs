use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use handoff::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "handoff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Session handoff state tracker", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Handoff document path
    #[arg(long, global = true, default_value = "HANDOFF.md")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a fresh handoff document
    Init {
        /// Session identifier
        #[arg(short, long)]
        session: Option<String>,
    },

    /// Print the handoff document (read this first when resuming work)
    Show,

    /// Show a snapshot of the current state
    Status {
        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the immediate next action
    Next {
        /// What to do next
        action: String,
    },

    /// Add an item to Blocked On
    Block {
        /// What is blocking progress
        item: String,
    },

    /// Remove an item from Blocked On without completing it
    Unblock {
        /// Blocked item to drop
        item: String,
    },

    /// Mark an item completed (also unblocks it)
    Done {
        /// Completed item
        item: String,
    },

    /// Track a time-sensitive item
    Remind {
        /// Item to track
        item: String,

        /// Deadline annotation (e.g., "2026-03-01")
        #[arg(long)]
        by: Option<String>,
    },

    /// Drop time-sensitive items matching a substring
    Resolve {
        /// Substring to match against tracked items
        pattern: String,
    },

    /// Clear the Already Did log (use at session start)
    #[command(name = "clear-log")]
    ClearLog,

    /// Tag the handoff with a session identifier
    Session {
        /// Session identifier
        id: String,
    },

    /// Archive the current handoff and reset for a new session
    Archive {
        /// Archive destination (default: timestamp-suffixed copy)
        #[arg(long)]
        to: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(long)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = cli.file.as_path();

    match cli.command {
        Commands::Init { session } => {
            handoff::cli::init::run(file, session.as_deref())?;
        }

        Commands::Show => {
            handoff::cli::show::run(file)?;
        }

        Commands::Status { json } => {
            handoff::cli::status::run(file, json)?;
        }

        Commands::Next { action } => {
            handoff::cli::track::next(file, &action)?;
        }

        Commands::Block { item } => {
            handoff::cli::track::block(file, &item)?;
        }

        Commands::Unblock { item } => {
            handoff::cli::track::unblock(file, &item)?;
        }

        Commands::Done { item } => {
            handoff::cli::track::done(file, &item)?;
        }

        Commands::Remind { item, by } => {
            handoff::cli::track::remind(file, &item, by.as_deref())?;
        }

        Commands::Resolve { pattern } => {
            handoff::cli::track::resolve(file, &pattern)?;
        }

        Commands::ClearLog => {
            handoff::cli::track::clear_log(file)?;
        }

        Commands::Session { id } => {
            handoff::cli::track::session(file, &id)?;
        }

        Commands::Archive { to } => {
            handoff::cli::archive::run(file, to.as_deref())?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "handoff", &mut io::stdout());
        }
    }

    Ok(())
}

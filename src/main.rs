//! goto: bookmark directories and jump to them by alias
//!
//! The binary prints data only. Run `goto init <shell>` and evaluate the
//! output to get a `goto` shell function that changes directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use goto::config;
use goto::shell::Shell;
use goto::AliasStore;

mod commands;

#[derive(Parser)]
#[command(name = "goto")]
#[command(about = "Bookmark directories under short aliases", long_about = None)]
#[command(version)]
struct Cli {
    /// Alias store file (default: ~/.goto)
    #[arg(long, global = true, env = config::DB_ENV)]
    db: Option<PathBuf>,

    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register an alias for a directory
    #[command(short_flag = 'r', long_flag = "register")]
    Register {
        /// Alias name (letters, digits, '_' and '-')
        alias: String,

        /// Target directory; relative paths and ~ are expanded
        directory: String,
    },

    /// Remove an alias
    #[command(short_flag = 'u', long_flag = "unregister")]
    Unregister {
        /// Alias name
        alias: String,
    },

    /// List registered aliases
    #[command(short_flag = 'l', long_flag = "list")]
    List {
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the directory an alias points to
    #[command(short_flag = 'x', long_flag = "expand", visible_alias = "expand")]
    Resolve {
        /// Alias name
        alias: String,
    },

    /// Remove aliases whose directories no longer exist
    #[command(short_flag = 'c', long_flag = "cleanup")]
    Cleanup {
        /// Show what would be removed without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Print alias names starting with a prefix (used by shell completion)
    #[command(hide = true)]
    Complete {
        /// Alias name prefix
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Print the shell integration script
    Init {
        /// Shell to generate the script for: bash, zsh or fish
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = AliasStore::open(config::db_path(cli.db)?);
    tracing::debug!(store = %store.path().display(), "using alias store");

    match cli.command {
        Commands::Register { alias, directory } => {
            commands::register::execute(&store, &alias, &directory)?;
        }

        Commands::Unregister { alias } => {
            commands::unregister::execute(&store, &alias)?;
        }

        Commands::List { json } => {
            let options = commands::list::ListOptions { json };
            let output = commands::list::execute(&store, options)?;
            println!("{}", output);
        }

        Commands::Resolve { alias } => {
            commands::resolve::execute(&store, &alias)?;
        }

        Commands::Cleanup { dry_run } => {
            commands::cleanup::execute(&store, dry_run)?;
        }

        Commands::Complete { prefix } => {
            commands::complete::execute(&store, &prefix)?;
        }

        Commands::Init { shell } => {
            commands::init::execute(shell);
        }
    }

    Ok(())
}

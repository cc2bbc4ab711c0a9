//! Command-line interface for `git-tessera`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::logging;

/// `git-tessera` - git intrinsic issue tracking.
#[derive(Parser, Debug)]
#[command(name = "git-tessera")]
#[command(
    author,
    version,
    about = "Git intrinsic issue tracking",
    long_about = None,
    after_help = "Each tessera is a directory of plain text under .tesserae/; every change is a commit."
)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an empty tesserae repository inside the git working tree
    Init,

    /// Create a new tessera and open it in the editor
    Create {
        /// Title of the new tessera
        title: String,
    },

    /// List tesserae as a table
    Ls(LsArgs),

    /// Print a tessera's body verbatim
    Show {
        /// Tessera id or unique prefix
        id: String,
    },

    /// Open an existing tessera in the editor
    Edit {
        /// Tessera id or unique prefix
        id: String,
    },

    /// Remove a tessera
    Rm {
        /// Tessera id or unique prefix
        id: String,
    },

    /// Show version information
    Version,
}

/// Sort direction for `ls`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Asc,
    Desc,
}

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Column to order by (id, title, status, type, priority, author, updated)
    #[arg(long, default_value = "priority")]
    pub order_by: String,

    /// Ascending or descending order
    #[arg(long, value_enum, default_value_t = OrderType::Asc)]
    pub order_type: OrderType,

    /// Keep only tesserae whose type matches one of these values
    #[arg(long, value_delimiter = ',')]
    pub filter_types: Vec<String>,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    match cli.command {
        Some(Commands::Init) => commands::init::execute()?,
        Some(Commands::Create { title }) => commands::create::execute(&title)?,
        Some(Commands::Ls(args)) => commands::ls::execute(&args)?,
        Some(Commands::Show { id }) => commands::show::execute(&id)?,
        Some(Commands::Edit { id }) => commands::edit::execute(&id)?,
        Some(Commands::Rm { id }) => commands::rm::execute(&id)?,
        Some(Commands::Version) => {
            println!("git-tessera {}", env!("CARGO_PKG_VERSION"));
        }
        None => println!("git-tessera - git intrinsic issue tracking. Use --help for usage."),
    }

    Ok(())
}

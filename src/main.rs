mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notebook")]
#[command(about = "Notebook of named text notes, served over MCP", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "NOTEBOOK_DB",
        default_value = "notes.db",
        help = "Path to the notes database"
    )]
    db: PathBuf,

    #[arg(
        long,
        global = true,
        env = "NOTEBOOK_LOG",
        default_value = "info",
        help = "Log level (RUST_LOG overrides)"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored notes
    List {
        #[arg(long, help = "JSON output")]
        json: bool,
    },

    // ===== MCP Server =====
    /// Start the MCP server on stdin/stdout
    #[cfg(feature = "mcp")]
    Serve,
    /// Show MCP client configuration instructions
    #[cfg(feature = "mcp")]
    Install,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    notebook_mcp::logging::init(&cli.log_level)?;

    match cli.command {
        Commands::List { json } => commands::list::run(&cli.db, json),

        #[cfg(feature = "mcp")]
        Commands::Serve => run_mcp_server(cli.db),
        #[cfg(feature = "mcp")]
        Commands::Install => commands::install::run(&cli.db),
    }
}

#[cfg(feature = "mcp")]
fn run_mcp_server(db_path: PathBuf) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(notebook_mcp::mcp::run_mcp_server(db_path))
}

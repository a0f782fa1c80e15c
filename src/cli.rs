use crate::commands::{create, edit, list, run};
use crate::config::Config;
use crate::store::Store;
use crate::utils::clipboard::SystemClipboard;
use crate::utils::interactive::Terminal;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prompta")]
#[command(about = "A CLI tool for managing prompts for LLMs")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new prompt
    Create,

    /// List all saved prompts
    List,

    /// Edit an existing prompt
    Edit,

    /// Execute a prompt with parameters
    Run,
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        let store = Store::new(&config);
        let mut ui = Terminal::new();
        let mut clipboard = SystemClipboard;

        match self {
            Commands::Create => create::handle_create_command(&config, &store, &mut ui),
            Commands::List => list::handle_list_command(&config, &store, &mut ui, &mut clipboard),
            Commands::Edit => edit::handle_edit_command(&config, &store, &mut ui),
            Commands::Run => run::handle_run_command(&store, &mut ui, &mut clipboard),
        }
    }
}

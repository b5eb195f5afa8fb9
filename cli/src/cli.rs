use crate::commands::add::AddCommand;
use crate::commands::delete::DeleteCommand;
use crate::commands::edit::EditCommand;
use crate::commands::misc::{InfoCommand, OpenCommand, PrintCommand};
use crate::commands::{AppContext, CommandEnum};
use crate::interactive;
use crate::prompt::ArgsPrompt;
use clap::{Parser, Subcommand};
use links_widget::browser::UrlOpener;
use links_widget::config::Config;
use links_widget::display::LinksDisplay;
use links_widget::error::Result;
use links_widget::LinksWidget;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Terminal host for the Links dashboard widget", long_about = None)]
pub struct Cli {
    /// Optional custom state file path
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Application used to open links (overrides the config file)
    #[arg(long)]
    pub browser: Option<String>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List bookmarks
    List,

    /// Add a new bookmark
    Add {
        /// Bookmark title
        #[arg(long)]
        title: Option<String>,

        /// Bookmark URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Edit the bookmark at a row (1-based)
    Edit {
        row: usize,

        /// New title (kept when omitted)
        #[arg(long)]
        title: Option<String>,

        /// New URL (kept when omitted)
        #[arg(long)]
        url: Option<String>,
    },

    /// Delete the bookmark at a row (1-based)
    Delete { row: usize },

    /// Open the bookmark at a row (1-based) in the browser
    Open { row: usize },

    /// Show widget metadata
    Info,

    /// Interactive mode (default)
    Shell,
}

/// Everything a command run needs besides the prompt
pub struct Host<'a> {
    pub widget: &'a LinksWidget,
    pub display: &'a mut LinksDisplay,
    pub opener: &'a dyn UrlOpener,
    pub config: &'a Config,
    pub state_path: &'a Path,
    pub nc: bool,
}

pub fn handle_args(command: Option<Commands>, host: Host<'_>) -> Result<()> {
    let (command, mut prompt) = match command {
        None | Some(Commands::Shell) => return interactive::run(host),
        Some(Commands::List) => (CommandEnum::Print(PrintCommand), ArgsPrompt::default()),
        Some(Commands::Info) => (CommandEnum::Info(InfoCommand), ArgsPrompt::default()),
        Some(Commands::Add { title, url }) => {
            (CommandEnum::Add(AddCommand), ArgsPrompt::new(title, url))
        }
        Some(Commands::Edit { row, title, url }) => (
            CommandEnum::Edit(EditCommand { row }),
            ArgsPrompt::new(title, url),
        ),
        Some(Commands::Delete { row }) => {
            (CommandEnum::Delete(DeleteCommand { row }), ArgsPrompt::default())
        }
        Some(Commands::Open { row }) => {
            (CommandEnum::Open(OpenCommand { row }), ArgsPrompt::default())
        }
    };

    let mut ctx = AppContext {
        widget: host.widget,
        display: host.display,
        prompt: &mut prompt,
        opener: host.opener,
        config: host.config,
        state_path: host.state_path,
        nc: host.nc,
    };
    command.execute(&mut ctx)
}

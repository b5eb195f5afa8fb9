mod cli;
mod commands;
mod interactive;
mod output;
mod prompt;
mod state;

use clap::Parser;
use links_widget::browser::SystemOpener;
use links_widget::config::Config;
use links_widget::error::Result;
use links_widget::plugin::{DashboardWidget, WidgetContext};
use links_widget::LinksWidget;
use log::{debug, LevelFilter};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load()
    };

    let state_path = args.state.clone().unwrap_or_else(|| cfg.state_path());
    let data_dir = state_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();
    debug!("Using state file {:?}", state_path);

    let opener = SystemOpener::new(args.browser.clone().or_else(|| cfg.browser.clone()));

    let mut widget = LinksWidget::new();
    widget.initialize(&WidgetContext::new(data_dir));
    widget.deserialize(&state::load_state(&state_path)?);
    let mut display = widget.create_widget();

    let host = cli::Host {
        widget: &widget,
        display: &mut display,
        opener: &opener,
        config: &cfg,
        state_path: &state_path,
        nc: args.nc,
    };
    cli::handle_args(args.command, host)
}

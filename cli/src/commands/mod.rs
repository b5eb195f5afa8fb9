use crate::state;
use links_widget::browser::UrlOpener;
use links_widget::config::Config;
use links_widget::display::LinksDisplay;
use links_widget::error::Result;
use links_widget::form::BookmarkPrompt;
use links_widget::plugin::DashboardWidget;
use links_widget::LinksWidget;
use std::path::Path;

pub struct AppContext<'a> {
    pub widget: &'a LinksWidget,
    pub display: &'a mut LinksDisplay,
    pub prompt: &'a mut dyn BookmarkPrompt,
    pub opener: &'a dyn UrlOpener,
    pub config: &'a Config,
    pub state_path: &'a Path,
    pub nc: bool,
}

impl AppContext<'_> {
    /// Persist the widget's current state to the state file
    pub fn save(&self) -> Result<()> {
        state::save_state(self.state_path, &self.widget.serialize(), self.config.pretty)
    }
}

pub mod add;
pub mod delete;
pub mod edit;
pub mod misc;

pub trait LinksCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn LinksCommand>)
pub enum CommandEnum {
    Add(add::AddCommand),
    Edit(edit::EditCommand),
    Delete(delete::DeleteCommand),
    Open(misc::OpenCommand),
    Print(misc::PrintCommand),
    Info(misc::InfoCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        match self {
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Edit(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Open(cmd) => cmd.execute(ctx),
            Self::Print(cmd) => cmd.execute(ctx),
            Self::Info(cmd) => cmd.execute(ctx),
        }
    }
}

/// Convert a 1-based row number into a display index
///
/// Prints a notice and returns `None` when nothing is shown at that row.
pub fn row_index(display: &LinksDisplay, row: usize) -> Option<usize> {
    match row.checked_sub(1) {
        Some(index) if index < display.row_count() => Some(index),
        _ => {
            eprintln!("No bookmark at row {}", row);
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use links_widget::display::DisplayHooks;
    use links_widget::Bookmark;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(0))]
    #[case(2, Some(1))]
    #[case(0, None)]
    #[case(3, None)]
    fn test_row_index(#[case] row: usize, #[case] expected: Option<usize>) {
        let display = LinksDisplay::new(
            &[
                Bookmark::new("A", "https://a.example"),
                Bookmark::new("B", "https://b.example"),
            ],
            DisplayHooks::noop(),
        );
        assert_eq!(row_index(&display, row), expected);
    }
}

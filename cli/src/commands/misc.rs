use super::{row_index, AppContext, LinksCommand};
use crate::output::colorize::{Colorize, ColorizeMetadata, ColorizeRow};
use links_widget::display::LinksDisplay;
use links_widget::error::Result;
use links_widget::plugin::DashboardWidget;
use owo_colors::OwoColorize;

/// Open the bookmark at a 1-based row
#[derive(Debug, Clone)]
pub struct OpenCommand {
    pub row: usize,
}

impl LinksCommand for OpenCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let Some(index) = row_index(ctx.display, self.row) else {
            return Ok(());
        };
        if let Some(row) = ctx.display.row(index) {
            eprintln!("Opening: {}", row.url);
        }
        ctx.display.open_row(index, ctx.opener)?;
        Ok(())
    }
}

/// Print every row with its 1-based number
#[derive(Debug, Clone, Default)]
pub struct PrintCommand;

impl PrintCommand {
    pub fn render(display: &LinksDisplay, nc: bool) -> String {
        display
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| ColorizeRow(i + 1, row).render(nc))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl LinksCommand for PrintCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        if ctx.display.row_count() == 0 {
            eprintln!("No bookmarks yet. Add one with 'a' or 'links add'.");
            return Ok(());
        }
        if ctx.nc {
            println!("{}", LinksDisplay::HEADER);
        } else {
            println!("{}", LinksDisplay::HEADER.bold());
        }
        print!("{}", Self::render(ctx.display, ctx.nc));
        Ok(())
    }
}

/// Print the widget's metadata
#[derive(Debug, Clone, Default)]
pub struct InfoCommand;

impl LinksCommand for InfoCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let metadata = ctx.widget.metadata();
        print!("{}", ColorizeMetadata(&metadata).render(ctx.nc));
        Ok(())
    }
}

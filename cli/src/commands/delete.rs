use super::{row_index, AppContext, LinksCommand};
use links_widget::error::Result;

/// Delete the bookmark at a 1-based row
#[derive(Debug, Clone)]
pub struct DeleteCommand {
    pub row: usize,
}

impl LinksCommand for DeleteCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let Some(index) = row_index(ctx.display, self.row) else {
            return Ok(());
        };

        let title = ctx
            .display
            .row(index)
            .map(|r| r.text.clone())
            .unwrap_or_default();

        if ctx.display.delete_row(index) {
            ctx.save()?;
            eprintln!("Deleted {}. {}", self.row, title);
        }
        Ok(())
    }
}

use super::{row_index, AppContext, LinksCommand};
use links_widget::error::{LinksError, Result};

/// Edit the bookmark at a 1-based row through the edit dialog
#[derive(Debug, Clone)]
pub struct EditCommand {
    pub row: usize,
}

impl LinksCommand for EditCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let Some(index) = row_index(ctx.display, self.row) else {
            return Ok(());
        };

        if !ctx.display.edit_row(index, &mut *ctx.prompt) {
            if let Some(message) = ctx.prompt.rejected() {
                return Err(LinksError::Validation(message.to_string()));
            }
            eprintln!("Edit cancelled.");
            return Ok(());
        }

        ctx.save()?;
        if let Some(row) = ctx.display.row(index) {
            eprintln!("Updated {}. {}", self.row, row.text);
        }
        Ok(())
    }
}

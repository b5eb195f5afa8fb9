use super::{AppContext, LinksCommand};
use links_widget::error::{LinksError, Result};

/// Add a bookmark through the add dialog
#[derive(Debug, Clone, Default)]
pub struct AddCommand;

impl LinksCommand for AddCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        if !ctx.display.add_bookmark(&mut *ctx.prompt) {
            if let Some(message) = ctx.prompt.rejected() {
                return Err(LinksError::Validation(message.to_string()));
            }
            eprintln!("Add cancelled.");
            return Ok(());
        }

        ctx.save()?;
        if let Some(row) = ctx.display.rows().last() {
            eprintln!("Added {}. {}", ctx.display.row_count(), row.text);
        }
        Ok(())
    }
}

use links_widget::display::DisplayRow;
use links_widget::plugin::WidgetMetadata;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
    fn to_plain(&self) -> String;

    fn render(&self, nc: bool) -> String {
        if nc {
            self.to_plain()
        } else {
            self.to_colored()
        }
    }
}

/// A display row with its 1-based row number
pub struct ColorizeRow<'a>(pub usize, pub &'a DisplayRow);

impl<'a> Colorize for ColorizeRow<'a> {
    fn to_colored(&self) -> String {
        let number = self.0.to_string();
        let padding = number.len() + 3;
        format!(
            "{}. {}\n{:>padding$} {}\n",
            number.bright_blue(),
            self.1.text.bold().green(),
            ">".red(),
            self.1.tooltip().yellow()
        )
    }

    fn to_plain(&self) -> String {
        let number = self.0.to_string();
        let padding = number.len() + 3;
        format!(
            "{}. {}\n{:>padding$} {}\n",
            number,
            self.1.text,
            ">",
            self.1.tooltip()
        )
    }
}

pub struct ColorizeMetadata<'a>(pub &'a WidgetMetadata);

impl<'a> Colorize for ColorizeMetadata<'a> {
    fn to_colored(&self) -> String {
        let m = self.0;
        format!(
            "{} {}\n  {}\n  author: {}\n  size: {} (min {}, max {})\n",
            m.name.bold().green(),
            format!("v{}", m.version).bright_blue(),
            m.description,
            m.author,
            m.default_size.yellow(),
            m.min_size,
            m.max_size
        )
    }

    fn to_plain(&self) -> String {
        let m = self.0;
        format!(
            "{} v{}\n  {}\n  author: {}\n  size: {} (min {}, max {})\n",
            m.name, m.version, m.description, m.author, m.default_size, m.min_size, m.max_size
        )
    }
}

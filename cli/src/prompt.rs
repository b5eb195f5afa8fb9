//! Terminal implementations of the add/edit dialog

use links_widget::form::{
    BookmarkForm, BookmarkPrompt, PromptOutcome, TITLE_PLACEHOLDER, URL_PLACEHOLDER,
};
use log::warn;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Dialog driven by line editing; fields start pre-filled, Ctrl-C or Ctrl-D cancels
pub struct ReadlinePrompt<'a> {
    editor: &'a mut DefaultEditor,
    nc: bool,
}

impl<'a> ReadlinePrompt<'a> {
    pub fn new(editor: &'a mut DefaultEditor, nc: bool) -> Self {
        Self { editor, nc }
    }

    fn read_field(&mut self, label: &str, placeholder: &str, initial: &str) -> Option<String> {
        let prompt = if initial.is_empty() {
            format!("{} ({}): ", label, placeholder)
        } else {
            format!("{}: ", label)
        };

        match self.editor.readline_with_initial(&prompt, (initial, "")) {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(err) => {
                warn!("Failed to read {}: {:?}", label, err);
                None
            }
        }
    }
}

impl BookmarkPrompt for ReadlinePrompt<'_> {
    fn ask(&mut self, form: &mut BookmarkForm) -> PromptOutcome {
        if self.nc {
            println!("{}", form.window_title());
        } else {
            println!("{}", form.window_title().bold());
        }

        let Some(title) = self.read_field("Title", TITLE_PLACEHOLDER, &form.title) else {
            return PromptOutcome::Cancel;
        };
        form.title = title;

        let Some(url) = self.read_field("URL", URL_PLACEHOLDER, &form.url) else {
            return PromptOutcome::Cancel;
        };
        form.url = url;

        PromptOutcome::Submit
    }

    fn warn(&mut self, message: &str) {
        if self.nc {
            eprintln!("Validation: {}", message);
        } else {
            eprintln!("{} {}", "Validation:".yellow().bold(), message);
        }
    }
}

/// Dialog answered once from command-line arguments
///
/// Fields given on the command line overwrite the form; omitted ones keep the
/// pre-filled value. A rejected submission is not retried; its message is
/// kept for [`BookmarkPrompt::rejected`].
#[derive(Debug, Default)]
pub struct ArgsPrompt {
    title: Option<String>,
    url: Option<String>,
    answered: bool,
    rejected: Option<String>,
}

impl ArgsPrompt {
    pub fn new(title: Option<String>, url: Option<String>) -> Self {
        Self {
            title,
            url,
            answered: false,
            rejected: None,
        }
    }
}

impl BookmarkPrompt for ArgsPrompt {
    fn ask(&mut self, form: &mut BookmarkForm) -> PromptOutcome {
        if self.answered {
            return PromptOutcome::Cancel;
        }
        self.answered = true;

        if let Some(title) = &self.title {
            form.title = title.clone();
        }
        if let Some(url) = &self.url {
            form.url = url.clone();
        }
        PromptOutcome::Submit
    }

    fn warn(&mut self, message: &str) {
        self.rejected = Some(message.to_string());
    }

    fn rejected(&self) -> Option<&str> {
        self.rejected.as_deref()
    }
}

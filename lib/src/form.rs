//! Add/edit form for a single bookmark
//!
//! The form is the model behind the modal dialog a UI toolkit shows when the
//! user adds or edits an entry. Showing it is delegated to a
//! [`BookmarkPrompt`]; this module owns the field handling and the validation
//! loop.

use crate::error::{LinksError, Result};
use crate::models::bookmark::Bookmark;
use log::debug;

pub const TITLE_PLACEHOLDER: &str = "e.g. GitHub";
pub const URL_PLACEHOLDER: &str = "https://";
pub const EMPTY_FIELDS_MESSAGE: &str = "Title and URL must not be empty.";

/// Whether the form creates a new bookmark or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Editable title/url fields for the add/edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkForm {
    pub mode: FormMode,
    pub title: String,
    pub url: String,
}

impl BookmarkForm {
    /// An empty form for a new bookmark
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            title: String::new(),
            url: String::new(),
        }
    }

    /// A form pre-filled from an existing bookmark
    pub fn edit(bookmark: &Bookmark) -> Self {
        Self {
            mode: FormMode::Edit,
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
        }
    }

    pub fn window_title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Bookmark",
            FormMode::Edit => "Edit Bookmark",
        }
    }

    /// Trim both fields and turn them into a bookmark
    ///
    /// Fails when either field is empty after trimming.
    pub fn validate(&self) -> Result<Bookmark> {
        let title = self.title.trim();
        let url = self.url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(LinksError::Validation(EMPTY_FIELDS_MESSAGE.to_string()));
        }
        Ok(Bookmark::new(title, url))
    }
}

/// What the user did with the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Submit,
    Cancel,
}

/// UI seam that presents the form to the user
pub trait BookmarkPrompt {
    /// Let the user fill `form` in place, then report submit or cancel
    fn ask(&mut self, form: &mut BookmarkForm) -> PromptOutcome;

    /// Show a blocking warning; the dialog stays open afterwards
    fn warn(&mut self, message: &str);

    /// Validation message of a submission the prompt could not re-ask for
    ///
    /// Lets callers tell a rejected one-shot answer apart from a cancel.
    fn rejected(&self) -> Option<&str> {
        None
    }
}

/// Run the dialog until it yields a valid bookmark or is cancelled
///
/// Invalid input is reported through [`BookmarkPrompt::warn`] and the same
/// form, edits included, is asked again.
pub fn run_dialog(prompt: &mut dyn BookmarkPrompt, mut form: BookmarkForm) -> Option<Bookmark> {
    loop {
        match prompt.ask(&mut form) {
            PromptOutcome::Cancel => {
                debug!("{} dialog cancelled", form.window_title());
                return None;
            }
            PromptOutcome::Submit => match form.validate() {
                Ok(bookmark) => return Some(bookmark),
                Err(e) => prompt.warn(&e.to_string()),
            },
        }
    }
}

//! Headless view-controller for the Links widget
//!
//! [`LinksDisplay`] is what `create_widget` hands to the host. It keeps only
//! the rows it shows and reports every change back through [`DisplayHooks`],
//! so the plugin's store stays the single source of truth. The host toolkit
//! maps its gestures onto the methods here:
//!
//! - "+" button: [`LinksDisplay::add_bookmark`]
//! - click on a row: [`LinksDisplay::open_row`]
//! - double-click on a row: [`LinksDisplay::edit_row`]
//! - context menu "Delete": [`LinksDisplay::delete_row`]

use crate::browser::UrlOpener;
use crate::error::Result;
use crate::form::{run_dialog, BookmarkForm, BookmarkPrompt};
use crate::models::bookmark::Bookmark;
use log::debug;

pub type BookmarkAddedHook = Box<dyn FnMut(&Bookmark)>;
pub type BookmarkEditedHook = Box<dyn FnMut(usize, &Bookmark)>;
pub type BookmarkRemovedHook = Box<dyn FnMut(usize)>;

/// Callbacks through which the display reports committed changes
pub struct DisplayHooks {
    pub on_added: BookmarkAddedHook,
    pub on_edited: BookmarkEditedHook,
    pub on_removed: BookmarkRemovedHook,
}

impl DisplayHooks {
    /// Hooks that ignore every change
    pub fn noop() -> Self {
        Self {
            on_added: Box::new(|_| {}),
            on_edited: Box::new(|_, _| {}),
            on_removed: Box::new(|_| {}),
        }
    }
}

/// One visible list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Row text (the bookmark title)
    pub text: String,
    /// Link target, also used as the tooltip
    pub url: String,
}

impl DisplayRow {
    pub fn tooltip(&self) -> &str {
        &self.url
    }
}

impl From<&Bookmark> for DisplayRow {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            text: bookmark.title.clone(),
            url: bookmark.url.clone(),
        }
    }
}

pub struct LinksDisplay {
    rows: Vec<DisplayRow>,
    hooks: DisplayHooks,
}

impl LinksDisplay {
    /// Header label shown above the list
    pub const HEADER: &'static str = "Links";

    pub fn new(bookmarks: &[Bookmark], hooks: DisplayHooks) -> Self {
        let mut display = Self {
            rows: Vec::new(),
            hooks,
        };
        display.populate(bookmarks);
        display
    }

    /// Rebuild every row from `bookmarks`
    pub fn populate(&mut self, bookmarks: &[Bookmark]) {
        self.rows = bookmarks.iter().map(DisplayRow::from).collect();
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&DisplayRow> {
        self.rows.get(row)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Ask for a new bookmark and append it
    ///
    /// Returns `false` when the dialog was cancelled.
    pub fn add_bookmark(&mut self, prompt: &mut dyn BookmarkPrompt) -> bool {
        let Some(bookmark) = run_dialog(prompt, BookmarkForm::add()) else {
            return false;
        };
        (self.hooks.on_added)(&bookmark);
        self.rows.push(DisplayRow::from(&bookmark));
        debug!("Added row {}", self.rows.len() - 1);
        true
    }

    /// Open the URL shown at `row`
    ///
    /// Returns `Ok(false)` when there is no such row.
    pub fn open_row(&self, row: usize, opener: &dyn UrlOpener) -> Result<bool> {
        let Some(entry) = self.rows.get(row) else {
            return Ok(false);
        };
        opener.open(&entry.url)?;
        Ok(true)
    }

    /// Edit the bookmark at `row` in a pre-filled dialog
    ///
    /// Returns `false` when there is no such row or the dialog was cancelled.
    pub fn edit_row(&mut self, row: usize, prompt: &mut dyn BookmarkPrompt) -> bool {
        let Some(entry) = self.rows.get(row) else {
            return false;
        };
        let current = Bookmark::new(entry.text.clone(), entry.url.clone());
        let Some(bookmark) = run_dialog(prompt, BookmarkForm::edit(&current)) else {
            return false;
        };
        (self.hooks.on_edited)(row, &bookmark);
        self.rows[row] = DisplayRow::from(&bookmark);
        debug!("Edited row {}", row);
        true
    }

    /// Remove the bookmark at `row`
    ///
    /// Returns `false` when there is no such row.
    pub fn delete_row(&mut self, row: usize) -> bool {
        if row >= self.rows.len() {
            return false;
        }
        (self.hooks.on_removed)(row);
        self.rows.remove(row);
        debug!("Deleted row {}", row);
        true
    }
}

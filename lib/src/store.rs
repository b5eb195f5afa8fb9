//! The ordered bookmark list backing the Links widget

use crate::models::bookmark::Bookmark;
use log::{debug, warn};

/// Authoritative, ordered list of bookmarks
///
/// Insertion order is the display order and survives serialization.
/// Index-based mutations outside `[0, len)` are ignored: the display may
/// briefly disagree with the store, and a stale index must never disturb
/// other entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bookmark at the end of the list
    pub fn append(&mut self, bookmark: Bookmark) {
        debug!("Appending bookmark '{}'", bookmark.title);
        self.bookmarks.push(bookmark);
    }

    /// Overwrite the bookmark at `index`
    ///
    /// Returns `false` and leaves the store untouched when `index` is out of range.
    pub fn replace_at(&mut self, index: usize, bookmark: Bookmark) -> bool {
        match self.bookmarks.get_mut(index) {
            Some(slot) => {
                debug!("Replacing bookmark at index {}", index);
                *slot = bookmark;
                true
            }
            None => {
                warn!(
                    "Ignoring replace at index {} (store holds {} bookmarks)",
                    index,
                    self.bookmarks.len()
                );
                false
            }
        }
    }

    /// Remove the bookmark at `index`, shifting later entries down by one
    ///
    /// Returns `None` and leaves the store untouched when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Bookmark> {
        if index < self.bookmarks.len() {
            debug!("Removing bookmark at index {}", index);
            Some(self.bookmarks.remove(index))
        } else {
            warn!(
                "Ignoring remove at index {} (store holds {} bookmarks)",
                index,
                self.bookmarks.len()
            );
            None
        }
    }

    /// Read-only view of the current bookmarks, in order
    pub fn snapshot(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Replace the entire contents, keeping the given order
    pub fn replace_all<I>(&mut self, bookmarks: I)
    where
        I: IntoIterator<Item = Bookmark>,
    {
        self.bookmarks = bookmarks.into_iter().collect();
        debug!("Store replaced with {} bookmarks", self.bookmarks.len());
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.bookmarks.get(index)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.bookmarks.iter()
    }
}

impl From<Vec<Bookmark>> for BookmarkStore {
    fn from(bookmarks: Vec<Bookmark>) -> Self {
        Self { bookmarks }
    }
}

impl<'a> IntoIterator for &'a BookmarkStore {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

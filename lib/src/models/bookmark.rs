use serde::{Deserialize, Serialize};

/// A single link entry: a display title and the URL it opens
///
/// Bookmarks have no identity beyond their position in the list, so two
/// entries may carry the same title and url.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

impl Bookmark {
    /// Create a new Bookmark
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

//! The Links widget: a clickable, editable list of bookmarks

use crate::codec;
use crate::display::{DisplayHooks, LinksDisplay};
use crate::models::bookmark::Bookmark;
use crate::plugin::{DashboardWidget, Size, WidgetContext, WidgetMetadata};
use crate::store::BookmarkStore;
use log::debug;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

pub const NAME: &str = "Links";
pub const VERSION: &str = "1.0.0";
pub const AUTHOR: &str = "Dashboard";
pub const DESCRIPTION: &str = "Clickable bookmark list";
pub const MIN_SIZE: Size = Size::new(180, 150);
pub const MAX_SIZE: Size = Size::new(500, 800);
pub const DEFAULT_SIZE: Size = Size::new(240, 320);

/// Plugin instance owning the bookmark store
///
/// Displays created by [`DashboardWidget::create_widget`] share the store
/// through their hooks, so [`DashboardWidget::serialize`] always sees the
/// latest edits.
#[derive(Debug, Default)]
pub struct LinksWidget {
    store: Rc<RefCell<BookmarkStore>>,
}

impl LinksWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current bookmarks, in display order
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.store.borrow().snapshot().to_vec()
    }

    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    fn hooks(&self) -> DisplayHooks {
        let added = Rc::clone(&self.store);
        let edited = Rc::clone(&self.store);
        let removed = Rc::clone(&self.store);
        DisplayHooks {
            on_added: Box::new(move |bookmark| added.borrow_mut().append(bookmark.clone())),
            on_edited: Box::new(move |index, bookmark| {
                edited.borrow_mut().replace_at(index, bookmark.clone());
            }),
            on_removed: Box::new(move |index| {
                removed.borrow_mut().remove_at(index);
            }),
        }
    }
}

impl From<BookmarkStore> for LinksWidget {
    fn from(store: BookmarkStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }
}

impl DashboardWidget for LinksWidget {
    type Display = LinksDisplay;

    fn initialize(&mut self, ctx: &WidgetContext) {
        debug!("{} initialized (data dir {:?})", NAME, ctx.data_dir);
    }

    fn create_widget(&mut self) -> LinksDisplay {
        let store = self.store.borrow();
        debug!("Creating {} display with {} bookmarks", NAME, store.len());
        LinksDisplay::new(store.snapshot(), self.hooks())
    }

    fn serialize(&self) -> Value {
        codec::encode(self.store.borrow().snapshot())
    }

    fn deserialize(&mut self, data: &Value) {
        self.store.borrow_mut().replace_all(codec::decode(data));
    }

    fn metadata(&self) -> WidgetMetadata {
        WidgetMetadata {
            name: NAME.to_string(),
            version: VERSION.to_string(),
            author: AUTHOR.to_string(),
            description: DESCRIPTION.to_string(),
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            default_size: DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedPrompt;
    use serde_json::json;
    use std::path::PathBuf;

    fn three() -> LinksWidget {
        LinksWidget::from(BookmarkStore::from(vec![
            Bookmark::new("A", "https://a.example"),
            Bookmark::new("B", "https://b.example"),
            Bookmark::new("C", "https://c.example"),
        ]))
    }

    #[test]
    fn test_metadata_is_static() {
        let widget = LinksWidget::new();
        let metadata = widget.metadata();

        assert_eq!(metadata.name, "Links");
        assert_eq!(metadata.version, "1.0.0");
        assert_eq!(metadata.author, "Dashboard");
        assert_eq!(metadata.description, "Clickable bookmark list");
        assert_eq!(metadata.min_size, Size::new(180, 150));
        assert_eq!(metadata.max_size, Size::new(500, 800));
        assert_eq!(metadata.default_size, Size::new(240, 320));
        assert_eq!(
            metadata.to_string(),
            "Links v1.0.0 - Clickable bookmark list (by Dashboard)"
        );
    }

    #[test]
    fn test_initialize_leaves_state_alone() {
        let mut widget = three();
        widget.initialize(&WidgetContext::new(PathBuf::from("/test/data")));
        assert_eq!(widget.len(), 3);
    }

    #[test]
    fn test_two_appends_encode_then_restore() {
        let mut widget = LinksWidget::new();
        let mut display = widget.create_widget();
        let mut prompt = ScriptedPrompt::new(vec![
            Some(("Docs", "https://example.com/docs")),
            Some(("Mail", "https://mail.example.com")),
        ]);

        assert!(display.add_bookmark(&mut prompt));
        assert!(display.add_bookmark(&mut prompt));

        let saved = widget.serialize();
        assert_eq!(
            saved,
            json!({
                "bookmarks": [
                    { "title": "Docs", "url": "https://example.com/docs" },
                    { "title": "Mail", "url": "https://mail.example.com" }
                ]
            })
        );

        let mut restored = LinksWidget::new();
        restored.deserialize(&saved);
        assert_eq!(restored.bookmarks(), widget.bookmarks());
        assert_eq!(
            restored.bookmarks(),
            vec![
                Bookmark::new("Docs", "https://example.com/docs"),
                Bookmark::new("Mail", "https://mail.example.com"),
            ]
        );
    }

    #[test]
    fn test_delete_through_display_shifts_store() {
        let mut widget = three();
        let mut display = widget.create_widget();

        assert!(display.delete_row(1));

        assert_eq!(
            widget.bookmarks(),
            vec![
                Bookmark::new("A", "https://a.example"),
                Bookmark::new("C", "https://c.example"),
            ]
        );
    }

    #[test]
    fn test_edit_through_display_updates_store() {
        let mut widget = three();
        let mut display = widget.create_widget();
        let mut prompt = ScriptedPrompt::new(vec![Some(("Bee", "https://bee.example"))]);

        assert!(display.edit_row(1, &mut prompt));

        assert_eq!(widget.bookmarks()[1], Bookmark::new("Bee", "https://bee.example"));
        assert_eq!(widget.len(), 3);
        assert_eq!(widget.serialize()["bookmarks"][1]["title"], "Bee");
    }

    #[test]
    fn test_cancelled_dialogs_leave_store_unchanged() {
        let mut widget = three();
        let before = widget.bookmarks();
        let mut display = widget.create_widget();
        let mut prompt = ScriptedPrompt::new(vec![None, None]);

        assert!(!display.add_bookmark(&mut prompt));
        assert!(!display.edit_row(0, &mut prompt));

        assert_eq!(widget.bookmarks(), before);
    }

    #[test]
    fn test_deserialize_replaces_existing_state() {
        let mut widget = three();
        widget.deserialize(&json!({ "bookmarks": [{ "title": "GitHub", "url": "https://github.com" }] }));

        assert_eq!(widget.bookmarks(), vec![Bookmark::new("GitHub", "https://github.com")]);
    }

    #[test]
    fn test_deserialize_malformed_yields_empty_widget() {
        let mut widget = three();
        widget.deserialize(&json!({ "bookmarks": 7 }));

        assert!(widget.is_empty());
        assert_eq!(widget.serialize(), json!({ "bookmarks": [] }));
    }

    #[test]
    fn test_display_created_after_deserialize_shows_saved_rows() {
        let mut widget = LinksWidget::new();
        widget.deserialize(&json!({
            "bookmarks": [
                { "title": "GitHub", "url": "https://github.com" },
                { "title": "Docs", "url": "https://example.com/docs" }
            ]
        }));

        let display = widget.create_widget();

        let titles: Vec<&str> = display.rows().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(titles, vec!["GitHub", "Docs"]);
    }
}

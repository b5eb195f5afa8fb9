//! Links: a dashboard widget holding an ordered list of titled URL bookmarks
//!
//! The [`store::BookmarkStore`] is the widget's state, [`codec`] converts it
//! to and from the JSON blob the host persists, and [`widget::LinksWidget`]
//! exposes both through the host lifecycle in [`plugin::DashboardWidget`].

pub mod browser;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod plugin;
pub mod store;
pub mod utils;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types for convenience
pub use error::LinksError;
pub use models::bookmark::Bookmark;
pub use plugin::DashboardWidget;
pub use store::BookmarkStore;
pub use widget::LinksWidget;

//! Shared fixtures for the links-widget benchmarks

use links_widget::Bookmark;

/// `count` distinct bookmarks with realistic title and url lengths
pub fn sample_bookmarks(count: usize) -> Vec<Bookmark> {
    (0..count)
        .map(|i| {
            Bookmark::new(
                format!("Bookmark {} - project documentation", i),
                format!("https://example.com/projects/{}/docs/index.html", i),
            )
        })
        .collect()
}

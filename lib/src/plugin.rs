//! Dashboard host contract
//!
//! A dashboard host drives every widget through the same five calls:
//!
//! 1. [`DashboardWidget::initialize`] once, with the host context
//! 2. [`DashboardWidget::deserialize`] with the previously saved state
//! 3. [`DashboardWidget::create_widget`] to obtain the live display
//! 4. [`DashboardWidget::serialize`] whenever the host saves
//! 5. [`DashboardWidget::metadata`] at any time, for the widget picker and layout
//!
//! All calls happen on one thread, one at a time.
//!
//! # Example Widget
//!
//! ```rust,ignore
//! use links_widget::plugin::{DashboardWidget, Size, WidgetMetadata};
//! use serde_json::{json, Value};
//!
//! pub struct Clock;
//!
//! impl DashboardWidget for Clock {
//!     type Display = ();
//!
//!     fn create_widget(&mut self) -> Self::Display {}
//!     fn serialize(&self) -> Value { json!({}) }
//!     fn deserialize(&mut self, _data: &Value) {}
//!
//!     fn metadata(&self) -> WidgetMetadata {
//!         WidgetMetadata {
//!             name: "Clock".to_string(),
//!             version: "1.0.0".to_string(),
//!             author: "Dashboard".to_string(),
//!             description: "Current time".to_string(),
//!             min_size: Size::new(100, 60),
//!             max_size: Size::new(400, 200),
//!             default_size: Size::new(160, 80),
//!         }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Width and height in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Static description of a widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetMetadata {
    /// Display name, also the widget's identifier in the host
    pub name: String,
    /// Version string (semver recommended)
    pub version: String,
    pub author: String,
    /// Human-readable description
    pub description: String,
    pub min_size: Size,
    pub max_size: Size,
    pub default_size: Size,
}

impl fmt::Display for WidgetMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} - {} (by {})",
            self.name, self.version, self.description, self.author
        )
    }
}

/// Context handed to a widget by the host before it is displayed
#[derive(Debug, Clone, Default)]
pub struct WidgetContext {
    /// Directory the host reserves for this widget's own files
    pub data_dir: PathBuf,
    /// Widget-specific settings from the host configuration
    pub config: HashMap<String, String>,
}

impl WidgetContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: HashMap::new(),
        }
    }

    pub fn with_config(mut self, config: HashMap<String, String>) -> Self {
        self.config = config;
        self
    }
}

/// Lifecycle every dashboard widget implements
pub trait DashboardWidget {
    /// Live view returned to the host
    type Display;

    /// Called once before the widget is created
    fn initialize(&mut self, _ctx: &WidgetContext) {
        // Default: do nothing
    }

    /// Build the live display bound to the widget's current state
    fn create_widget(&mut self) -> Self::Display;

    /// Snapshot the current state for the host to persist
    fn serialize(&self) -> Value;

    /// Restore state previously produced by [`DashboardWidget::serialize`]
    fn deserialize(&mut self, data: &Value);

    /// Static descriptor: name, version, author, description and sizes
    fn metadata(&self) -> WidgetMetadata;
}

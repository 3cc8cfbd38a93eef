//! # Lightswitch - a persisted light/dark theme toggle
//!
//! Lightswitch keeps one preference, `"light"` or `"dark"`, in an
//! origin-scoped key/value store and reflects it as a `light-theme` class on a
//! document's root element. Dark is the default: an unmarked root is dark.
//!
//! ## Quick Start
//!
//! ```rust
//! use lightswitch::{MemoryStore, Page, PageEvent, ThemeMode};
//!
//! let mut page = Page::open(MemoryStore::new());
//! assert_eq!(page.dispatch(PageEvent::Load).unwrap(), ThemeMode::Dark);
//! assert_eq!(page.dispatch(PageEvent::Click).unwrap(), ThemeMode::Light);
//!
//! // The choice survives a reload.
//! let mut reloaded = Page::open(page.into_store());
//! assert_eq!(reloaded.dispatch(PageEvent::Load).unwrap(), ThemeMode::Light);
//! ```
//!
//! ## Pieces
//!
//! - [`ThemeController`]: `initialize` and `toggle` over any
//!   [`PreferenceStore`] and [`ClassTarget`]
//! - [`MemoryStore`] and [`FileStore`]: preference storage backends
//! - [`Page`]: load/click event handling and HTML rendering
//! - [`render_status`]: styled terminal status using a [`ThemePair`]

pub mod config;
mod controller;
mod document;
mod error;
mod page;
mod render;
mod store;
mod theme;

pub use config::Config;
pub use controller::{ThemeController, LIGHT_MARKER, THEME_KEY};
pub use document::{ClassList, ClassTarget};
pub use error::Error;
pub use page::{Page, PageEvent};
pub use render::{render_status, OutputMode, ParseOutputModeError, Renderer};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use theme::{ParseModeError, Theme, ThemeMode, ThemePair};

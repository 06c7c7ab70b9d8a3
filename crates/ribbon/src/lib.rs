//! **ribbon** -- Responsive components for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need to build
//! width-aware terminal UI from a single dependency:
//!
//! ```toml
//! [dependencies]
//! ribbon = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`ribbon_core`] are available at the crate root
//!   ([`Component`], [`Command`], [`TextMeasurer`], the [`overflow`] layout
//!   engine, etc.).
//! * The [`widgets`] module re-exports everything from [`ribbon_widgets`]
//!   (action bars, carousels, pills, menus, paginators).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use ribbon::widgets::action_bar::{Action, ActionBar};
//! use ribbon::Component;
//!
//! let mut bar = ActionBar::new()
//!     .with_title("Deploy")
//!     .with_content("3 services pending");
//! bar.set_actions(vec![
//!     Action::new("Approve"),
//!     Action::new("Reject"),
//!     Action::new("View logs"),
//! ]);
//! // Render `bar` inside any ratatui frame; actions that do not fit the
//! // area collapse behind an overflow menu automatically.
//! ```

pub use ribbon_core::*;
pub mod widgets {
    pub use ribbon_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;

//! Ready-made responsive widgets for the **ribbon** TUI framework.
//!
//! Every widget in this crate implements [`ribbon_core::Component`] and can be
//! composed freely within [`ratatui`] layouts. Widgets that must fit a variable
//! number of items into a fixed width (the action bar, the carousel) measure
//! their content with a [`ribbon_core::TextMeasurer`] and lay it out through
//! [`ribbon_core::overflow`], collapsing whatever does not fit behind an
//! overflow affordance.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`action_bar`] | Title/content bar with right-aligned actions and an overflow menu |
//! | [`carousel`] | Horizontally scrolling item strip with optional autoplay and dots |
//! | [`menu`] | Anchored overlay menu used as the overflow surface |
//! | [`paginator`] | Dot, fraction, and numbered page indicators |
//! | [`pill`] | Compact themed badge, optionally closable or with a button |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`locale`] | Overridable display strings for widget chrome |
//! | [`text`] | Unicode-aware string width and truncation utilities |

pub mod action_bar;
pub mod carousel;
pub mod locale;
pub mod menu;
pub mod paginator;
pub mod pill;
pub mod text;

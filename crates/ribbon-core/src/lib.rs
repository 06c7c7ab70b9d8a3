//! Core contracts for the **ribbon** widget library.
//!
//! `ribbon-core` provides the small set of types every ribbon widget is built
//! on: the overflow layout engine that decides which items fit inline, the
//! text measurement seam, the [`Component`] trait widgets implement, and the
//! [`Command`] type they return for side effects.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`overflow::compute`] | Decide how many items fit inline and whether a "more" trigger is needed |
//! | [`TextMeasurer`] | Source of rendered text widths (real cells or scripted) |
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect for the host application to execute |
//! | [`Harness`](testing::Harness) | Headless harness for unit-testing a [`Component`] without a terminal |
//!
//! # The overflow cycle
//!
//! 1. **measure** -- A widget asks its [`TextMeasurer`] for the rendered width
//!    of each candidate item.
//! 2. **compute** -- [`overflow::compute`] folds the measured widths against
//!    the available width and returns how many leading items stay visible and
//!    whether the rest move behind an overflow trigger.
//! 3. **render** -- The widget draws the visible items and, when the layout
//!    overflows, the trigger granting access to the hidden ones.
//! 4. **repeat** -- Any resize or content change re-runs the cycle; the
//!    layout has no persistent state to migrate.
//!
//! # Quick example
//!
//! ```ignore
//! use ribbon_core::overflow::{compute, Constraints, Item};
//!
//! let items = [Item::new(50.0), Item::new(50.0), Item::new(50.0)];
//! let layout = compute(
//!     &items,
//!     &Constraints::new(120.0).with_trigger_width(10.0),
//! )?;
//! assert_eq!(layout.visible, 2);
//! assert!(layout.overflow);
//! ```

pub mod command;
pub mod component;
pub mod measure;
pub mod overflow;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use measure::{CellMeasurer, TextMeasurer};
pub use overflow::{Constraints, Item, Layout, OverflowError};

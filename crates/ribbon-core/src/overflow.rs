//! Overflow layout engine.
//!
//! Given the width available to a container and the measured widths of a
//! sequence of candidate items, [`compute`] determines how many leading
//! items fit inline and whether the rest must move behind an overflow
//! trigger (a "more" affordance granting access to the hidden items).
//!
//! The engine is a pure function over its inputs: it holds no state, does
//! no measuring of its own, and is re-run on every relevant measurement
//! change (a resize, a content change). Widths are expressed in `f64`
//! display units; terminal cells map 1:1.

/// One candidate element to place inline.
///
/// The ordinal position of an item is its index in the slice passed to
/// [`compute`]; earlier items are preferred to stay visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// Measured rendered width, in display units. Must be finite and
    /// non-negative.
    pub width: f64,
}

impl Item {
    /// Create an item with the given measured width.
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

/// Layout constraints for a single overflow computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Width available to the container, in display units.
    ///
    /// Zero means "not yet measured": with a non-empty item list the
    /// result is the conservative `{visible: 0, overflow: true}` and the
    /// caller should re-invoke once a real measurement exists.
    pub available_width: f64,
    /// Fixed extra width consumed per item (margins/padding) beyond its
    /// intrinsic content width.
    pub item_overhead: f64,
    /// Width reserved for the overflow trigger when at least one item
    /// must be hidden.
    pub trigger_width: f64,
    /// Maximum number of display lines before overflow is forced. Values
    /// greater than one multiply the effective width budget.
    pub max_lines: usize,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            available_width: 0.0,
            item_overhead: 0.0,
            trigger_width: 0.0,
            max_lines: 1,
        }
    }
}

impl Constraints {
    /// Create constraints for the given available width, with no per-item
    /// overhead, no trigger reservation, and a single line.
    pub fn new(available_width: f64) -> Self {
        Self {
            available_width,
            ..Self::default()
        }
    }

    /// Set the fixed per-item overhead.
    pub fn with_item_overhead(mut self, overhead: f64) -> Self {
        self.item_overhead = overhead;
        self
    }

    /// Set the width reserved for the overflow trigger.
    pub fn with_trigger_width(mut self, width: f64) -> Self {
        self.trigger_width = width;
        self
    }

    /// Set the maximum number of display lines (minimum 1).
    pub fn with_max_lines(mut self, lines: usize) -> Self {
        self.max_lines = lines.max(1);
        self
    }
}

/// The result of an overflow computation.
///
/// Has no persistent identity: it is recomputed on demand and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Number of leading items that remain visible inline.
    pub visible: usize,
    /// Whether an overflow trigger must be shown. When `true`, `visible`
    /// is strictly less than the total item count.
    pub overflow: bool,
}

impl Layout {
    /// Number of items hidden behind the trigger, given the total count.
    pub fn hidden(&self, total: usize) -> usize {
        total.saturating_sub(self.visible)
    }
}

/// Error raised for out-of-range layout inputs.
#[derive(Debug, thiserror::Error)]
pub enum OverflowError {
    /// A width was negative or non-finite, or `max_lines` was zero.
    #[error("invalid layout input: {0}")]
    InvalidInput(&'static str),
}

/// Compute how many leading items fit inline and whether an overflow
/// trigger is required.
///
/// Item widths (each plus `item_overhead`) are accumulated in ordinal
/// order against the available budget; a running total exactly equal to
/// the budget still fits. The first item that would exceed the budget
/// forces overflow, at which point the trigger width is reserved and the
/// visible count is recomputed against the reduced budget — reserving the
/// trigger can demote one further item that depended on that space.
///
/// # Errors
///
/// Returns [`OverflowError::InvalidInput`] when any width is negative or
/// non-finite, or when `max_lines` is zero.
pub fn compute(items: &[Item], constraints: &Constraints) -> Result<Layout, OverflowError> {
    validate(items, constraints)?;

    if items.is_empty() {
        return Ok(Layout {
            visible: 0,
            overflow: false,
        });
    }

    let budget = constraints.available_width * constraints.max_lines as f64;
    if budget == 0.0 {
        // Unmeasured container: show nothing until a real width arrives.
        return Ok(Layout {
            visible: 0,
            overflow: true,
        });
    }

    let fit = |limit: f64| -> usize {
        let mut total = 0.0;
        let mut count = 0;
        for item in items {
            total += item.width + constraints.item_overhead;
            if total > limit {
                break;
            }
            count += 1;
        }
        count
    };

    let unreserved = fit(budget);
    if unreserved == items.len() {
        return Ok(Layout {
            visible: items.len(),
            overflow: false,
        });
    }

    let visible = fit(budget - constraints.trigger_width);
    Ok(Layout {
        visible,
        overflow: true,
    })
}

fn validate(items: &[Item], constraints: &Constraints) -> Result<(), OverflowError> {
    if !(constraints.available_width.is_finite() && constraints.available_width >= 0.0) {
        return Err(OverflowError::InvalidInput(
            "available width must be finite and non-negative",
        ));
    }
    if !(constraints.item_overhead.is_finite() && constraints.item_overhead >= 0.0) {
        return Err(OverflowError::InvalidInput(
            "item overhead must be finite and non-negative",
        ));
    }
    if !(constraints.trigger_width.is_finite() && constraints.trigger_width >= 0.0) {
        return Err(OverflowError::InvalidInput(
            "trigger width must be finite and non-negative",
        ));
    }
    if constraints.max_lines == 0 {
        return Err(OverflowError::InvalidInput("max lines must be at least 1"));
    }
    if items
        .iter()
        .any(|item| !(item.width.is_finite() && item.width >= 0.0))
    {
        return Err(OverflowError::InvalidInput(
            "item widths must be finite and non-negative",
        ));
    }
    Ok(())
}

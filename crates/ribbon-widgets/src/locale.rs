//! Overridable UI strings.
//!
//! Widgets that render fixed text (the overflow trigger label, pagination
//! navigation) take their strings from these structs so hosts can localize
//! them. Defaults are English.

/// Strings rendered by [`ActionBar`](crate::action_bar::ActionBar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBarStrings {
    /// Label announced for the overflow trigger that reveals hidden actions.
    pub overflow_menu: String,
}

impl Default for ActionBarStrings {
    fn default() -> Self {
        Self {
            overflow_menu: "More actions".into(),
        }
    }
}

/// Strings rendered by [`Paginator`](crate::paginator::Paginator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatorStrings {
    /// Label for the previous-page control.
    pub previous: String,
    /// Label for the next-page control.
    pub next: String,
    /// Separator word in the fraction display ("2 of 5").
    pub of: String,
}

impl Default for PaginatorStrings {
    fn default() -> Self {
        Self {
            previous: "Previous".into(),
            next: "Next".into(),
            of: "of".into(),
        }
    }
}

//! Action enum — session mutations produced by components, applied by the
//! App.

/// Unique identifier for a focusable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    FilterPanel,
    GroupList,
}

/// Components never touch the session directly; they return these and the
/// App event loop applies them.
#[derive(Debug, Clone)]
pub enum Action {
    AddFilter(String),
    RemoveFilter(String),
    ClearFilters,
    ToggleGroup(String),
}

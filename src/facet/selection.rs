//! Facet selection state machine
//!
//! Releases are browsed by filtering on exactly one facet at a time.
//! Encoding the selection as a single tagged variant (rather than three
//! independent per-facet values) makes "two facets active at once"
//! unrepresentable.

/// The three classification dimensions releases are counted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Artist,
    Genre,
    Style,
}

impl FacetKind {
    /// Display label, also used as the name-column header of result tables
    pub fn label(&self) -> &'static str {
        match self {
            FacetKind::Artist => "Artist",
            FacetKind::Genre => "Genre",
            FacetKind::Style => "Style",
        }
    }
}

/// The currently active filter: at most one (kind, value) pair
///
/// Invariant: `Active.value` is never empty. The constructors normalize an
/// empty value to `Empty`, so every reachable `Active` state carries a real
/// facet value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Active { kind: FacetKind, value: String },
}

impl Selection {
    /// Build a selection from a selector change. An empty value clears the
    /// selection, matching the placeholder row of the select widgets.
    pub fn select(kind: FacetKind, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Selection::Empty
        } else {
            Selection::Active { kind, value }
        }
    }

    /// Replace the current selection. Valid from any prior state; selecting
    /// a different kind supersedes the previous selection.
    pub fn select_facet(&mut self, kind: FacetKind, value: impl Into<String>) {
        *self = Selection::select(kind, value);
    }

    /// Clear the selection. Idempotent.
    pub fn reset(&mut self) {
        *self = Selection::Empty;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// Whether the selector for `kind` should accept input. While a facet
    /// is active the other two selectors are disabled until reset.
    pub fn is_selectable(&self, kind: FacetKind) -> bool {
        match self {
            Selection::Empty => true,
            Selection::Active { kind: active, .. } => *active == kind,
        }
    }

    pub fn active_kind(&self) -> Option<FacetKind> {
        match self {
            Selection::Empty => None,
            Selection::Active { kind, .. } => Some(*kind),
        }
    }

    pub fn active_value(&self) -> Option<&str> {
        match self {
            Selection::Empty => None,
            Selection::Active { value, .. } => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let selection = Selection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.active_kind(), None);
        assert_eq!(selection.active_value(), None);
    }

    #[test]
    fn test_select_sets_active_kind_and_value() {
        let mut selection = Selection::default();
        selection.select_facet(FacetKind::Artist, "Boards of Canada");
        assert_eq!(selection.active_kind(), Some(FacetKind::Artist));
        assert_eq!(selection.active_value(), Some("Boards of Canada"));
    }

    #[test]
    fn test_select_with_empty_value_is_reset() {
        let mut selection = Selection::select(FacetKind::Genre, "Electronic");
        selection.select_facet(FacetKind::Genre, "");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_same_kind_replaces_value() {
        let mut selection = Selection::select(FacetKind::Style, "Ambient");
        selection.select_facet(FacetKind::Style, "Downtempo");
        assert_eq!(selection, Selection::select(FacetKind::Style, "Downtempo"));
    }

    #[test]
    fn test_select_different_kind_supersedes() {
        let mut selection = Selection::select(FacetKind::Artist, "Autechre");
        selection.select_facet(FacetKind::Genre, "Electronic");
        assert_eq!(selection.active_kind(), Some(FacetKind::Genre));
        assert_eq!(selection.active_value(), Some("Electronic"));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut selection = Selection::select(FacetKind::Style, "Downtempo");
        selection.reset();
        let after_first = selection.clone();
        selection.reset();
        assert!(selection.is_empty());
        assert_eq!(selection, after_first);
    }

    #[test]
    fn test_everything_selectable_when_empty() {
        let selection = Selection::default();
        assert!(selection.is_selectable(FacetKind::Artist));
        assert!(selection.is_selectable(FacetKind::Genre));
        assert!(selection.is_selectable(FacetKind::Style));
    }

    #[test]
    fn test_only_active_kind_selectable_while_active() {
        let selection = Selection::select(FacetKind::Genre, "Electronic");
        assert!(selection.is_selectable(FacetKind::Genre));
        assert!(!selection.is_selectable(FacetKind::Artist));
        assert!(!selection.is_selectable(FacetKind::Style));
    }
}

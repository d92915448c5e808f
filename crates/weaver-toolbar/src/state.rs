//! Toolbar state: the action list, the mirrored selection, and the row
//! projection the renderer draws from.
//!
//! Rows are never edited in place. Every change to either input rebuilds the
//! whole projection, which is linear in the number of buttons.

use std::sync::Arc;

use serde::Serialize;

use crate::actions::{ActionList, ToolbarAction};
use crate::editor::SelectedSet;

/// One render-ready toolbar button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub action: ToolbarAction,
    pub selected: bool,
}

/// Project an action list against a selection, preserving list order.
pub fn project_rows(actions: &ActionList, selected: &SelectedSet) -> Vec<Row> {
    actions
        .iter()
        .map(|action| Row {
            action: action.clone(),
            selected: selected.contains(action),
        })
        .collect()
}

/// Indices of rows in `next` that differ from the row at the same index in
/// `previous`. Rows past the end of `previous` always count as changed.
pub fn changed_rows(previous: &[Row], next: &[Row]) -> Vec<usize> {
    next.iter()
        .enumerate()
        .filter(|(i, row)| previous.get(*i) != Some(*row))
        .map(|(i, _)| i)
        .collect()
}

/// Owns the action list and the current selection.
#[derive(Debug, Clone)]
pub struct ToolbarState {
    actions: ActionList,
    selected: SelectedSet,
    rows: Arc<[Row]>,
    /// Number of row recomputations so far.
    generation: u64,
}

impl ToolbarState {
    /// Create state with an empty selection.
    pub fn new(actions: ActionList) -> Self {
        let selected = SelectedSet::new();
        let rows = project_rows(&actions, &selected).into();
        Self {
            actions,
            selected,
            rows,
            generation: 0,
        }
    }

    pub fn actions(&self) -> &ActionList {
        &self.actions
    }

    pub fn selected(&self) -> &SelectedSet {
        &self.selected
    }

    /// Current rows. Cheap to clone and hand to a renderer.
    pub fn rows(&self) -> Arc<[Row]> {
        self.rows.clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the action list and recompute against the current selection.
    pub fn set_actions(&mut self, actions: ActionList) {
        self.actions = actions;
        self.recompute();
    }

    /// Mirror a new selection from the editor.
    ///
    /// Returns false without touching anything when `selected` equals the
    /// set already held.
    pub fn apply_selection_update(&mut self, selected: SelectedSet) -> bool {
        if selected == self.selected {
            return false;
        }
        self.selected = selected;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.rows = project_rows(&self.actions, &self.selected).into();
        self.generation += 1;
    }
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self::new(ActionList::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::DEFAULT_ACTIONS;

    fn selection(ids: &[&str]) -> SelectedSet {
        ids.iter().map(|id| ToolbarAction::from(*id)).collect()
    }

    #[test]
    fn test_initial_rows_unselected() {
        let state = ToolbarState::default();
        let rows = state.rows();
        assert_eq!(rows.len(), DEFAULT_ACTIONS.len());
        assert!(rows.iter().all(|row| !row.selected));
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_rows_follow_list_order() {
        let actions = ActionList::from_ids(["link", "h2", "bold", "custom"]).unwrap();
        let rows = project_rows(&actions, &SelectedSet::new());
        let order: Vec<&str> = rows.iter().map(|r| r.action.as_str()).collect();
        assert_eq!(order, ["link", "h2", "bold", "custom"]);
    }

    #[test]
    fn test_selection_update_marks_rows() {
        let mut state = ToolbarState::default();
        assert!(state.apply_selection_update(selection(&["bold", "orderedList"])));

        for row in state.rows().iter() {
            let expected = matches!(
                row.action,
                ToolbarAction::SetBold | ToolbarAction::InsertOrderedList
            );
            assert_eq!(row.selected, expected, "{}", row.action);
        }

        // Last write wins, no merging.
        assert!(state.apply_selection_update(selection(&["italic"])));
        let selected: Vec<_> = state
            .rows()
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.action.clone())
            .collect();
        assert_eq!(selected, [ToolbarAction::SetItalic]);
    }

    #[test]
    fn test_same_selection_is_noop() {
        let mut state = ToolbarState::default();
        let set = selection(&["bold"]);
        assert!(state.apply_selection_update(set.clone()));
        let rows = state.rows();
        let generation = state.generation();

        assert!(!state.apply_selection_update(set));
        assert!(!state.apply_selection_update(selection(&["bold"])));
        assert_eq!(state.generation(), generation);
        assert!(Arc::ptr_eq(&rows, &state.rows()));
    }

    #[test]
    fn test_set_actions_keeps_selection() {
        let mut state = ToolbarState::default();
        state.apply_selection_update(selection(&["bold", "h1"]));
        state.set_actions(ActionList::from_ids(["h1", "h2"]).unwrap());

        let rows = state.rows();
        assert_eq!(
            rows.as_ref(),
            &[
                Row {
                    action: ToolbarAction::Heading1,
                    selected: true,
                },
                Row {
                    action: ToolbarAction::Heading2,
                    selected: false,
                },
            ]
        );
    }

    #[test]
    fn test_selected_outside_list_is_ignored() {
        let mut state = ToolbarState::default();
        state.apply_selection_update(selection(&["justifyCenter", "unknownThing"]));
        assert!(state.rows().iter().all(|r| !r.selected));
    }

    #[test]
    fn test_changed_rows() {
        let actions = ActionList::default();
        let before = project_rows(&actions, &SelectedSet::new());
        let after = project_rows(&actions, &selection(&["bold", "text"]));
        assert_eq!(changed_rows(&before, &after), [2, 5]);
        assert!(changed_rows(&after, &after).is_empty());

        let shorter = &after[..2];
        assert_eq!(changed_rows(shorter, &after), [2, 3, 4, 5]);
    }
}

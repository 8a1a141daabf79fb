//! Cursor over an ordered list.
//!
//! Tracks which item of a panel is selected. Every operation takes the
//! current list length so the cursor never points past the end.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Selected index, if any.
    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    /// Select `index`, clamped into a list of `len` items.
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected_index = if len == 0 {
            None
        } else {
            Some(index.min(len - 1))
        };
    }

    /// Move to the next item, stopping at the last one.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move to the previous item, stopping at the first one.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Re-fit the cursor after the list changed length. A non-empty list
    /// always ends up with a selection.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = SelectionState::new();
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_select_clamps_to_len() {
        let mut selection = SelectionState::new();
        selection.select(10, 3);
        assert_eq!(selection.get(), Some(2));

        selection.select(1, 0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_next_stops_at_last() {
        let mut selection = SelectionState::new();
        selection.next(3);
        assert_eq!(selection.get(), Some(0));
        selection.next(3);
        selection.next(3);
        selection.next(3);
        assert_eq!(selection.get(), Some(2));
    }

    #[test]
    fn test_prev_stops_at_first() {
        let mut selection = SelectionState::new();
        selection.select(1, 3);
        selection.prev(3);
        selection.prev(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.prev(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut selection = SelectionState::new();
        selection.select(2, 3);
        selection.clamp(2);
        assert_eq!(selection.get(), Some(1));

        selection.clamp(0);
        assert!(selection.get().is_none());

        selection.clamp(4);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_is_selected() {
        let mut selection = SelectionState::new();
        selection.select(1, 3);
        assert!(selection.is_selected(1));
        assert!(!selection.is_selected(0));
    }
}

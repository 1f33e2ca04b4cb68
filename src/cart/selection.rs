//! Selection

use smallvec::SmallVec;

use crate::products::ProductId;

/// Product ids marked for bulk deletion or checkout, in the order they were picked.
///
/// Ids are not required to have a cart line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: SmallVec<[ProductId; 8]>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected.as_str() == id)
    }

    /// Select `id` if it is not selected, otherwise deselect it.
    ///
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(ProductId::from(id));
            true
        }
    }

    /// Deselect `id`, returning whether it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected.as_str() != id);

        self.ids.len() != before
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over selected ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

impl<'a> FromIterator<&'a str> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut selection = SelectionSet::new();

        for id in iter {
            if !selection.contains(id) {
                selection.ids.push(ProductId::from(id));
            }
        }

        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SelectionSet::new();

        assert!(selection.toggle("1"));
        assert!(selection.contains("1"));

        assert!(!selection.toggle("1"));
        assert!(!selection.contains("1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let before: SelectionSet = ["1", "2"].into_iter().collect();
        let mut selection = before.clone();

        selection.toggle("3");
        selection.toggle("3");

        assert_eq!(selection, before);
    }

    #[test]
    fn remove_reports_whether_selected() {
        let mut selection: SelectionSet = ["1"].into_iter().collect();

        assert!(selection.remove("1"));
        assert!(!selection.remove("1"));
    }

    #[test]
    fn keeps_selection_order() {
        let mut selection = SelectionSet::new();
        selection.toggle("4");
        selection.toggle("2");

        let ids: Vec<&str> = selection.iter().map(ProductId::as_str).collect();

        assert_eq!(ids, ["4", "2"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn from_iter_ignores_repeats() {
        let selection: SelectionSet = ["1", "1", "2"].into_iter().collect();

        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn clear_empties_selection() {
        let mut selection: SelectionSet = ["1", "2"].into_iter().collect();
        selection.clear();

        assert!(selection.is_empty());
    }
}

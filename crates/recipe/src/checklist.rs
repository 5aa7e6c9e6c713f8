use std::collections::BTreeSet;

/// Ingredients the cook has gathered so far on a recipe page.
///
/// Owned by a single page view and rebuilt from the request every time, it is
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientChecklist {
    total: usize,
    checked: BTreeSet<usize>,
}

impl IngredientChecklist {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            checked: BTreeSet::new(),
        }
    }

    /// Indices past the end of the ingredient list are dropped.
    pub fn from_indices(total: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            total,
            checked: indices.into_iter().filter(|i| *i < total).collect(),
        }
    }

    /// Flips one ingredient and returns its new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.total {
            return false;
        }

        if self.checked.remove(&index) {
            false
        } else {
            self.checked.insert(index);
            true
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    pub fn gathered(&self) -> usize {
        self.checked.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn all_checked(&self) -> bool {
        self.total > 0 && self.checked.len() == self.total
    }

    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }

        ((self.checked.len() * 100) / self.total) as u8
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.checked.iter().copied()
    }

    /// The checked set as it would be after toggling `index`.
    pub fn toggled_indices(&self, index: usize) -> Vec<usize> {
        let mut next = self.clone();
        next.toggle(index);
        next.indices().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_checks_and_unchecks() {
        let mut list = IngredientChecklist::new(3);

        assert!(list.toggle(1));
        assert!(list.is_checked(1));
        assert_eq!(list.gathered(), 1);

        assert!(!list.toggle(1));
        assert!(!list.is_checked(1));
        assert_eq!(list.gathered(), 0);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut list = IngredientChecklist::from_indices(2, [0, 5, 9]);

        assert_eq!(list.indices().collect::<Vec<_>>(), vec![0]);
        assert!(!list.toggle(2));
        assert_eq!(list.gathered(), 1);
    }

    #[test]
    fn test_progress_and_ready() {
        let mut list = IngredientChecklist::new(4);
        assert_eq!(list.progress_percent(), 0);
        assert!(!list.all_checked());

        list.toggle(0);
        assert_eq!(list.progress_percent(), 25);

        for i in 1..4 {
            list.toggle(i);
        }
        assert_eq!(list.progress_percent(), 100);
        assert!(list.all_checked());
    }

    #[test]
    fn test_empty_list_is_never_ready() {
        let list = IngredientChecklist::new(0);

        assert!(!list.all_checked());
        assert_eq!(list.progress_percent(), 0);
    }

    #[test]
    fn test_toggled_indices_leaves_checklist_untouched() {
        let list = IngredientChecklist::from_indices(5, [1, 3]);

        assert_eq!(list.toggled_indices(2), vec![1, 2, 3]);
        assert_eq!(list.toggled_indices(3), vec![1]);
        assert_eq!(list.indices().collect::<Vec<_>>(), vec![1, 3]);
    }
}

/// Ordered, duplicate-free set of selected values for one field.
///
/// Values keep their insertion order. Mutation goes through [`change`] so
/// shrinkage is detected in one place.
///
/// [`change`]: SelectionStore::change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    items: Vec<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Run `body` against the store and report whether it shrank.
    ///
    /// `on_shrink` runs with the remaining values only when the store ended
    /// up smaller than it started. Growth is never reported here.
    pub(crate) fn change<F, H>(&mut self, body: F, on_shrink: H) -> bool
    where
        F: FnOnce(&mut Self),
        H: FnOnce(&[String]),
    {
        let start = self.items.len();
        body(self);
        let shrank = self.items.len() < start;
        if shrank {
            on_shrink(&self.items);
        }
        shrank
    }

    /// Append `value` unless it is already present. Returns whether it was added.
    pub(crate) fn insert(&mut self, value: String) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Drop every stored occurrence of `value`. Returns how many were removed.
    pub(crate) fn remove(&mut self, value: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != value);
        before - self.items.len()
    }

    pub(crate) fn remove_all(&mut self) {
        self.items.clear();
    }
}

use super::Tree;
use crate::raw::RawTree;

impl<T> Tree<T> {
    /// Creates an empty set with room for at least `capacity` keys before the
    /// node arena reallocates.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let tree: Tree<i32> = Tree::with_capacity(16);
    /// assert!(tree.empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns how many keys the set can hold before the node arena reallocates.
    ///
    /// Slots freed by removals are reused, so this never shrinks on its own.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::with_capacity(4);
    /// let before = tree.capacity();
    /// for key in 0..4 {
    ///     tree.insert(key);
    /// }
    /// tree.remove(&0);
    /// tree.insert(9);
    /// assert_eq!(tree.capacity(), before);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}

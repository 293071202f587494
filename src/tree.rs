use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use crate::raw::RawTree;

mod capacity;

/// An ordered set based on an AVL tree.
///
/// Every key is stored once, in its own arena slot. Lookups, insertions and
/// removals descend a tree whose height never exceeds roughly `1.44 log2(n)`,
/// so they take worst-case logarithmic time. [`size`] and [`empty`] read a
/// maintained counter and take constant time.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key, as determined by the [`Ord`] trait, changes while
/// it is in the set. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `Tree` that observed it and not
/// result in undefined behavior.
///
/// [`size`]: Tree::size
/// [`empty`]: Tree::empty
///
/// # Examples
///
/// ```
/// use avl_set::Tree;
///
/// let mut primes = Tree::new();
///
/// assert!(primes.insert(7));
/// assert!(primes.insert(2));
/// assert!(primes.insert(5));
/// assert!(!primes.insert(2));
///
/// assert!(primes.contains(&5));
/// assert_eq!(primes.size(), 3);
///
/// assert!(primes.remove(&5));
/// assert_eq!(primes.values(), [2, 7]);
/// ```
///
/// A `Tree` with a known list of keys can be initialized from an array:
///
/// ```
/// use avl_set::Tree;
///
/// let tree = Tree::from([3, 1, 2]);
/// assert_eq!(tree.values(), [1, 2, 3]);
/// ```
pub struct Tree<T> {
    raw: RawTree<T>,
}

impl<T> Tree<T> {
    /// Makes a new, empty `Tree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let tree: Tree<i32> = Tree::new();
    /// assert!(tree.empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Tree { raw: RawTree::new() }
    }

    /// Adds a key to the set.
    ///
    /// Returns whether the key was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal key, `true` is returned.
    /// - If the set already contained an equal key, `false` is returned, and the
    ///   set is not modified: the original key is kept and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(2), true);
    /// assert_eq!(tree.insert(2), false);
    /// assert_eq!(tree.size(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.raw.insert(value)
    }

    /// If the set contains a key equal to `value`, removes it from the set and
    /// drops it. Returns whether such a key was present.
    ///
    /// The value may be any borrowed form of the set's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// assert_eq!(tree.remove(&2), true);
    /// assert_eq!(tree.remove(&2), false);
    /// assert!(tree.empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.take(value).is_some()
    }

    /// Removes and returns the key in the set, if any, that is equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::from([String::from("a")]);
    /// assert_eq!(tree.take("a"), Some(String::from("a")));
    /// assert_eq!(tree.take("a"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.take(value)
    }

    /// Returns `true` if the set contains a key equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let tree = Tree::from([1, 2, 3]);
    /// assert_eq!(tree.contains(&1), true);
    /// assert_eq!(tree.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.contains(value)
    }

    /// Returns a reference to the key in the set, if any, that is equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let tree = Tree::from([1, 2, 3]);
    /// assert_eq!(tree.get(&2), Some(&2));
    /// assert_eq!(tree.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(value)
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.size(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.size(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn size(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set holds no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.empty());
    /// tree.insert(1);
    /// assert!(!tree.empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Same as [`size`](Tree::size), under the standard collection name.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Same as [`empty`](Tree::empty), under the standard collection name.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns every key in ascending order.
    ///
    /// The result is strictly increasing and holds exactly [`size`](Tree::size) keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let tree = Tree::from([10, 4, 7, 1]);
    /// assert_eq!(tree.values(), [1, 4, 7, 10]);
    ///
    /// let empty: Tree<i32> = Tree::new();
    /// assert!(empty.values().is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.raw.values()
    }

    /// Returns a reference to the smallest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.first(), None);
    /// tree.insert(3);
    /// tree.insert(1);
    /// assert_eq!(tree.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns a reference to the largest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let tree = Tree::from([3, 1]);
    /// assert_eq!(tree.last(), Some(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Removes and returns the smallest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::from([2, 1]);
    /// assert_eq!(tree.pop_first(), Some(1));
    /// assert_eq!(tree.pop_first(), Some(2));
    /// assert_eq!(tree.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<T> {
        self.raw.pop_first()
    }

    /// Removes and returns the largest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::from([2, 1]);
    /// assert_eq!(tree.pop_last(), Some(2));
    /// assert_eq!(tree.values(), [1]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_last(&mut self) -> Option<T> {
        self.raw.pop_last()
    }

    /// Returns the number of levels in the tree, `0` when it is empty.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API. The
    /// AVL balance rule keeps it below `1.45 * log2(size + 2)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let tree: Tree<u32> = (0..1023).collect();
    /// assert_eq!(tree.height(), 10);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let mut tree = Tree::from([1, 2]);
    /// tree.clear();
    /// assert!(tree.empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Tree { raw: self.raw.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.raw.keys()).finish()
    }
}

impl<T> Default for Tree<T> {
    /// Creates an empty `Tree`.
    fn default() -> Tree<T> {
        Tree::new()
    }
}

/// Two trees are equal when they hold equal keys, whatever their shapes.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Tree<T>) -> bool {
        self.len() == other.len() && self.raw.keys() == other.raw.keys()
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Tree<T> {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for Tree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Tree<T> {
    /// Converts a `[T; N]` into a `Tree<T>`, discarding repeated keys.
    ///
    /// ```
    /// use avl_set::Tree;
    ///
    /// let tree = Tree::from([1, 2, 2, 3]);
    /// assert_eq!(tree.size(), 3);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

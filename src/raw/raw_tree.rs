use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// Inline capacity of descent stacks. An AVL tree addressing `u32::MAX` nodes
/// is at most 46 levels deep, so no descent ever spills to the heap. Must be a
/// length `smallvec::Array` is implemented for.
const STACK_INLINE: usize = 64;

/// One step of a descent: the node visited and the child link taken from it.
#[derive(Clone, Copy, Debug)]
struct PathElement {
    node: Handle,
    side: Side,
}

/// Ancestors of the current position, root first.
type Path = SmallVec<[PathElement; STACK_INLINE]>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mutation {
    Insert,
    Remove,
}

/// The AVL tree backing `Tree`.
#[derive(Clone)]
pub(crate) struct RawTree<T> {
    /// Arena owning every node.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<T> RawTree<T> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Number of keys; one live arena slot per key.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of levels in the tree, zero when empty.
    pub(crate) fn height(&self) -> usize {
        usize::from(self.nodes.height_of(self.root))
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.extreme(Side::Left).map(|handle| &self.nodes.get(handle).key)
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.extreme(Side::Right).map(|handle| &self.nodes.get(handle).key)
    }

    pub(crate) fn pop_first(&mut self) -> Option<T> {
        self.pop_extreme(Side::Left)
    }

    pub(crate) fn pop_last(&mut self) -> Option<T> {
        self.pop_extreme(Side::Right)
    }

    /// Calls `f` on every key in ascending order.
    pub(crate) fn for_each<'a>(&'a self, mut f: impl FnMut(&'a T)) {
        let mut stack: SmallVec<[Handle; STACK_INLINE]> = SmallVec::new();
        let mut cursor = self.root;
        loop {
            while let Some(handle) = cursor {
                stack.push(handle);
                cursor = self.nodes.get(handle).left();
            }
            let Some(handle) = stack.pop() else {
                return;
            };
            let node = self.nodes.get(handle);
            f(&node.key);
            cursor = node.right();
        }
    }

    /// Borrows every key in ascending order.
    pub(crate) fn keys(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len());
        self.for_each(|key| keys.push(key));
        keys
    }

    /// Clones every key in ascending order.
    pub(crate) fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        self.for_each(|key| values.push(key.clone()));
        values
    }

    /// Follows `side` links from the root to the end.
    fn extreme(&self, side: Side) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(side) {
            current = next;
        }
        Some(current)
    }

    fn pop_extreme(&mut self, side: Side) -> Option<T> {
        let mut path = Path::new();
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(side) {
            path.push(PathElement { node: current, side });
            current = next;
        }
        Some(self.unlink(current, path))
    }

    /// Points the link `parent` describes (or the root, for `None`) at `child`.
    fn relink(&mut self, parent: Option<PathElement>, child: Option<Handle>) {
        match parent {
            Some(parent) => self.nodes.get_mut(parent.node).set_child(parent.side, child),
            None => self.root = child,
        }
    }

    /// Detaches `target`, whose ancestors are `path`, and returns its key.
    fn unlink(&mut self, target: Handle, mut path: Path) -> T {
        let node = self.nodes.get(target);
        let key = if let (Some(_), Some(right)) = (node.left(), node.right()) {
            // Swap in the in-order successor, then splice out the successor's slot.
            path.push(PathElement {
                node: target,
                side: Side::Right,
            });
            let mut successor = right;
            while let Some(left) = self.nodes.get(successor).left() {
                path.push(PathElement {
                    node: successor,
                    side: Side::Left,
                });
                successor = left;
            }
            let orphan = self.nodes.get(successor).right();
            self.relink(path.last().copied(), orphan);
            let successor = self.nodes.take(successor);
            core::mem::replace(&mut self.nodes.get_mut(target).key, successor.key)
        } else {
            let orphan = node.only_child();
            self.relink(path.last().copied(), orphan);
            self.nodes.take(target).key
        };

        self.retrace(&path, Mutation::Remove);
        key
    }

    /// Rebalances every ancestor on `path`, deepest first.
    ///
    /// After an insertion the walk stops at the first subtree whose height is
    /// back to what it was; removals always walk up to the root.
    fn retrace(&mut self, path: &[PathElement], mutation: Mutation) {
        for (depth, element) in path.iter().enumerate().rev() {
            let before = self.nodes.get(element.node).height();
            let subtree = self.nodes.rebalance(element.node);
            if subtree != element.node {
                let parent = depth.checked_sub(1).map(|up| path[up]);
                self.relink(parent, Some(subtree));
            }
            if mutation == Mutation::Insert && self.nodes.get(subtree).height() == before {
                break;
            }
        }
    }
}

impl<T: Ord> RawTree<T> {
    /// Finds the node holding a key equal to `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            cursor = match key.cmp(node.key.borrow()) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| &self.nodes.get(handle).key)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts `key` unless an equal key is present. Returns whether it was inserted.
    pub(crate) fn insert(&mut self, key: T) -> bool {
        let mut path = Path::new();
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            let side = match key.cmp(&node.key) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return false,
            };
            path.push(PathElement { node: handle, side });
            cursor = node.child(side);
        }

        let leaf = self.nodes.alloc(Node::leaf(key));
        self.relink(path.last().copied(), Some(leaf));
        self.retrace(&path, Mutation::Insert);
        true
    }

    /// Removes the key equal to `key` and hands it back.
    pub(crate) fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path = Path::new();
        let mut cursor = self.root;
        let target = loop {
            let handle = cursor?;
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.key.borrow()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => break handle,
            };
            path.push(PathElement { node: handle, side });
            cursor = node.child(side);
        };
        Some(self.unlink(target, path))
    }
}

use super::handle::Handle;

/// Which child link of a node a descent followed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single key with its two child links and the height of its subtree.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) key: T,
    left: Option<Handle>,
    right: Option<Handle>,
    // A leaf has height 1; an absent subtree counts as 0.
    height: u8,
}

impl<T> Node<T> {
    /// Creates a detached leaf.
    pub(crate) const fn leaf(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub(crate) fn set_height(&mut self, height: u8) {
        self.height = height;
    }

    /// The single child of a node with at most one, or `None` for a leaf.
    ///
    /// # Panics
    ///
    /// Panics if both children are present.
    pub(crate) fn only_child(&self) -> Option<Handle> {
        match (self.left, self.right) {
            (Some(_), Some(_)) => panic!("`Node::only_child()` - node has two children!"),
            (left, right) => left.or(right),
        }
    }
}

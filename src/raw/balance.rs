//! AVL rotations over arena-resident nodes.
//!
//! Every routine here works on a single subtree root and hands back the handle
//! of whatever node ends up on top. Re-linking that handle into the parent is
//! the caller's job, since nodes do not know their parents.

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

impl<T> Arena<Node<T>> {
    /// Height of a possibly absent subtree.
    #[inline]
    pub(crate) fn height_of(&self, subtree: Option<Handle>) -> u8 {
        subtree.map_or(0, |handle| self.get(handle).height())
    }

    /// Left height minus right height.
    fn skew(&self, handle: Handle) -> i16 {
        let node = self.get(handle);
        i16::from(self.height_of(node.left())) - i16::from(self.height_of(node.right()))
    }

    /// Recomputes a node's height from its children.
    fn refresh_height(&mut self, handle: Handle) {
        let node = self.get(handle);
        let height = 1 + self.height_of(node.left()).max(self.height_of(node.right()));
        self.get_mut(handle).set_height(height);
    }

    /// Rotates `root` down towards `side`, lifting its opposite child.
    ///
    /// `Side::Left` is the classic left rotation: the right child becomes the
    /// new subtree root and `root` becomes its left child.
    pub(crate) fn rotate(&mut self, root: Handle, side: Side) -> Handle {
        let lift = side.opposite();
        let pivot = self
            .get(root)
            .child(lift)
            .expect("`Arena::rotate()` - rotation needs a child to lift!");
        let inner = self.get(pivot).child(side);

        self.get_mut(root).set_child(lift, inner);
        self.get_mut(pivot).set_child(side, Some(root));

        self.refresh_height(root);
        self.refresh_height(pivot);
        pivot
    }

    /// Restores the height bound at `root`, assuming both subtrees already satisfy
    /// it and differ in height by at most two.
    ///
    /// Returns the new subtree root; it is `root` itself when no rotation was needed.
    pub(crate) fn rebalance(&mut self, root: Handle) -> Handle {
        match self.skew(root) {
            2.. => {
                let left = self.get(root).left().expect("left-heavy node has a left child");
                if self.skew(left) < 0 {
                    let lifted = self.rotate(left, Side::Left);
                    self.get_mut(root).set_child(Side::Left, Some(lifted));
                }
                self.rotate(root, Side::Right)
            }
            ..=-2 => {
                let right = self.get(root).right().expect("right-heavy node has a right child");
                if self.skew(right) > 0 {
                    let lifted = self.rotate(right, Side::Right);
                    self.get_mut(root).set_child(Side::Right, Some(lifted));
                }
                self.rotate(root, Side::Left)
            }
            _ => {
                self.refresh_height(root);
                root
            }
        }
    }
}

//! AVL rebalancing.
//!
//! Rotations take ownership of a subtree root and hand back the root that replaces it, so
//! no parent links are needed: the caller stores the result wherever the old root lived.

use super::{Link, Node};
use tracing::trace;

pub fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<K, V> Node<K, V> {
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Returns `height(left) - height(right)`.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    match node.right.take() {
        None => node,
        Some(mut pivot) => {
            node.right = pivot.left.take();
            node.update_height();
            pivot.left = Some(node);
            pivot.update_height();
            pivot
        }
    }
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    match node.left.take() {
        None => node,
        Some(mut pivot) => {
            node.left = pivot.right.take();
            node.update_height();
            pivot.right = Some(node);
            pivot.update_height();
            pivot
        }
    }
}

/// Refreshes the node's height and applies whichever of the four rotation cases restores
/// its balance factor to `-1..=1`, returning the new subtree root.
fn balance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.update_height();
    let factor = node.balance_factor();

    if factor > 1 {
        if node.left.as_ref().map_or(false, |left| left.balance_factor() < 0) {
            trace!(factor, height = node.height, "LR rotation");
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!(factor, height = node.height, "LL rotation");
        }

        rotate_right(node)
    } else if factor < -1 {
        if node.right.as_ref().map_or(false, |right| right.balance_factor() > 0) {
            trace!(factor, height = node.height, "RL rotation");
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!(factor, height = node.height, "RR rotation");
        }

        rotate_left(node)
    } else {
        node
    }
}

/// Rebalances the subtree rooted at `link` after one of its children changed shape.
pub fn rebalance<K, V>(link: &mut Link<K, V>) {
    if let Some(node) = link.take() {
        *link = Some(balance(node));
    }
}

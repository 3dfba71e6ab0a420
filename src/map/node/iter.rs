use super::{Link, LinkExt, Node};
use crate::IterationExhausted;

pub trait NodeRef: Sized {
    type Item;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Item = (&'a K, &'a V);
    fn item(self) -> (&'a K, &'a V) { (&self.key, &self.value) }
    fn left(&mut self) -> Option<&'a Node<K, V>> { self.left.as_node_ref() }
    fn right(&mut self) -> Option<&'a Node<K, V>> { self.right.as_node_ref() }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Item = (K, V);
    fn item(self) -> (K, V) { let node = *self; (node.key, node.value) }
    fn left(&mut self) -> Link<K, V> { self.left.take() }
    fn right(&mut self) -> Link<K, V> { self.right.take() }
}

/// An in-order traversal driven by an explicit stack instead of recursion.
///
/// The stack holds the nodes whose left subtrees have been pushed but which have not yet been
/// yielded; its top is always the smallest entry not yet returned.
#[derive(Clone)]
pub struct Iter<N> where N: NodeRef {
    stack: Vec<N>,
    size: usize,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        let mut it = Iter { stack: Vec::new(), size };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut next: Option<N>) {
        while let Some(mut node) = next {
            next = node.left();
            self.stack.push(node);
        }
    }

    pub fn has_next(&self) -> bool { !self.stack.is_empty() }

    pub fn try_next(&mut self) -> Result<N::Item, IterationExhausted> {
        self.next().ok_or(IterationExhausted)
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right();
        self.push_left_spine(right);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

// Each stacked frame has already been split into disjoint borrows of its key, value and
// right subtree, so handing out `&mut V` never aliases a node that is still reachable.
type Frame<'a, K, V> = (&'a K, &'a mut V, &'a mut Link<K, V>);

pub struct IterMut<'a, K: 'a, V: 'a> {
    stack: Vec<Frame<'a, K, V>>,
    size: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub fn new(root: &'a mut Link<K, V>, size: usize) -> IterMut<'a, K, V> {
        let mut it = IterMut { stack: Vec::new(), size };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut link: &'a mut Link<K, V>) {
        while let Some(node) = link.as_deref_mut() {
            let Node { ref key, ref mut value, ref mut left, ref mut right, .. } = *node;
            self.stack.push((key, value, right));
            link = left;
        }
    }

    pub fn has_next(&self) -> bool { !self.stack.is_empty() }

    pub fn try_next(&mut self) -> Result<(&'a K, &'a mut V), IterationExhausted> {
        self.next().ok_or(IterationExhausted)
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let (key, value, right) = self.stack.pop()?;
        self.push_left_spine(right);
        self.size -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

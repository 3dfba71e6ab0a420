mod balance;
mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::replace;
use tracing::trace;

pub use self::balance::rebalance;
pub use self::iter::{Iter, IterMut};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

pub trait LinkExt: Sized {
    type K;
    type V;
    fn as_node_ref(&self) -> Option<&Node<Self::K, Self::V>>;
    fn key_value(&self) -> Option<(&Self::K, &Self::V)>;
}

impl<K, V> LinkExt for Link<K, V> {
    type K = K;
    type V = V;

    fn as_node_ref(&self) -> Option<&Node<K, V>> {
        self.as_deref()
    }

    fn key_value(&self) -> Option<(&K, &V)> {
        self.as_ref().map(|node| (&node.key, &node.value))
    }
}

#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    height: usize,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, height: 1, key, value }
    }
}

/// Inserts the entry below `link`, returning the value it replaced, if any.
///
/// Every node on the descent path is rebalanced on the way back up.
pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    let old_value = match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            return None;
        }
        Some(ref mut node) => match cmp.compare(&key, &node.key) {
            Equal => return Some(replace(&mut node.value, value)),
            Less => insert(&mut node.left, cmp, key, value),
            Greater => insert(&mut node.right, cmp, key, value),
        },
    };

    rebalance(link);
    old_value
}

/// Removes the entry matching `key` below `link`, rebalancing every ancestor of the removed
/// node.
pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let key_value = match *link {
        None => return None,
        Some(ref mut node) => match cmp.compare(key, &node.key) {
            Less => remove(&mut node.left, cmp, key),
            Greater => remove(&mut node.right, cmp, key),
            Equal => {
                let (replacement, key_value) = unlink(link.take()?);
                *link = replacement;
                return Some(key_value);
            }
        },
    };

    if key_value.is_some() { rebalance(link); }
    key_value
}

/// Removes the minimum entry below `link`.
fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let key_value = match *link {
        None => return None,
        Some(ref mut node) if node.left.is_some() => remove_min(&mut node.left),
        Some(_) => {
            let node = link.take()?;
            let Node { right, key, value, .. } = *node;
            *link = right;
            return Some((key, value));
        }
    };

    rebalance(link);
    key_value
}

// Splices `node` out of its subtree, returning the subtree that takes its place along with
// the node's entry. A node with two children absorbs its in-order successor, which is
// removed from the right subtree.
fn unlink<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
    if node.left.is_some() {
        if let Some((key, value)) = remove_min(&mut node.right) {
            trace!(height = node.height, "promoting in-order successor");
            let key_value = (replace(&mut node.key, key), replace(&mut node.value, value));
            let mut link = Some(node);
            rebalance(&mut link);
            return (link, key_value);
        }
    }

    let Node { left, right, key, value, .. } = *node;
    (left.or(right), (key, value))
}

pub fn get<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> &'a Link<K, V> where C: Compare<Q, K> {

    loop {
        match *link {
            None => return link,
            Some(ref node) => match cmp.compare(key, &node.key) {
                Equal => return link,
                Less => link = &node.left,
                Greater => link = &node.right,
            },
        }
    }
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut V> where C: Compare<Q, K> {

    let mut cur = link.as_deref_mut();

    while let Some(node) = cur {
        cur = match cmp.compare(key, &node.key) {
            Equal => return Some(&mut node.value),
            Less => node.left.as_deref_mut(),
            Greater => node.right.as_deref_mut(),
        };
    }

    None
}

/// Returns the link holding the leftmost (`left == true`) or rightmost entry below `link`.
pub fn extremum<K, V>(mut link: &Link<K, V>, left: bool) -> &Link<K, V> {
    while let Some(ref node) = *link {
        let child = if left { &node.left } else { &node.right };
        if child.is_none() { break; }
        link = child;
    }

    link
}

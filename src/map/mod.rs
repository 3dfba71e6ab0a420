//! An ordered map based on an AVL tree.

mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;


use compare::{Compare, Natural};
use self::node::{LinkExt, Node};
use crate::IterationExhausted;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::ops;
use tracing::debug;

/// An ordered map based on an AVL tree.
///
/// Entries are kept in ascending order according to the map's comparator, which is fixed when
/// the map is created. Insertion, removal and lookup each take `O(log n)` comparisons.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct TreeMap<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> TreeMap<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> TreeMap<K, V> { TreeMap::with_cmp(compare::natural()) }
}

impl<K, V, C> TreeMap<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// Any `Fn(&K, &K) -> Ordering` closure is a comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::with_cmp(|a: &i32, b: &i32| b.cmp(a));
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.keys(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> TreeMap<K, V, C> {
        TreeMap { root: None, len: 0, cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use avl_map::TreeMap;
    ///
    /// let map: TreeMap<i32, &str> = TreeMap::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: TreeMap<i32, &str, _> = TreeMap::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the map, returning the previous value, if any, associated
    /// with the key.
    ///
    /// The key itself is not replaced when it is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old_value = node::insert(&mut self.root, &self.cmp, key, value);
        if old_value.is_none() { self.len += 1; }
        old_value
    }

    /// Inserts or updates an entry, rejecting absent keys and values.
    ///
    /// Returns `false`, leaving the map untouched, if either argument is `None`. This lets bulk
    /// loaders skip incomplete records without checking them first. Plain keys and values
    /// convert into `Some` automatically.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map: TreeMap<i32, &str> = TreeMap::new();
    /// assert!(map.put(1, "one"));
    /// assert!(map.put(1, "uno"));
    /// assert!(!map.put(None::<i32>, "x"));
    /// assert!(!map.put(2, None::<&str>));
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&1), Some(&"uno"));
    /// ```
    pub fn put<Q, W>(&mut self, key: Q, value: W) -> bool
        where Q: Into<Option<K>>, W: Into<Option<V>> {

        match (key.into(), value.into()) {
            (Some(key), Some(value)) => {
                self.insert(key, value);
                true
            }
            (key, _) => {
                debug!(key_absent = key.is_none(), "rejected entry with an absent key or value");
                false
            }
        }
    }

    /// Removes the entry whose key is equal to the given key, returning `true` if the map
    /// contained the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    ///
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> bool where C: Compare<Q, K> {
        self.remove_entry(key).is_some()
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), None);
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K> {

        let key_value = node::remove(&mut self.root, &self.cmp, key);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).key_value().map(|e| e.1)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key)
    }

    /// Returns a reference to the map's maximum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.max(), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        node::extremum(&self.root, false).key_value()
    }

    /// Returns a reference to the map's minimum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        node::extremum(&self.root, true).key_value()
    }

    /// Returns the map's keys in ascending order.
    ///
    /// Unlike `iter`, this walks the whole tree up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(30, "c");
    /// map.insert(20, "b");
    /// map.insert(10, "a");
    ///
    /// assert_eq!(map.keys(), [&10, &20, &30]);
    /// ```
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|e| e.0).collect()
    }

    /// Returns an iterator that consumes the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), Some((3, "c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter(node::Iter::new(self.root.take(), self.len))
    }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// Each call starts a fresh ascending traversal; any number of them may be in progress at
    /// once.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::{IterationExhausted, TreeMap};
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let mut it = map.iter();
    /// assert!(it.has_next());
    /// assert_eq!(it.try_next(), Ok((&1, &"a")));
    /// assert_eq!(it.try_next(), Ok((&2, &"b")));
    /// assert!(!it.has_next());
    /// assert_eq!(it.try_next(), Err(IterationExhausted));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(node::Iter::new(self.root.as_node_ref(), self.len))
    }

    /// Returns an iterator over the map's entries with mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// let mut i = 1;
    ///
    /// for (_, value) in map.iter_mut() {
    ///     assert_eq!(i, *value);
    ///     *value *= 2;
    ///     i += 1;
    /// }
    ///
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map[&"b"], 4);
    /// assert_eq!(map[&"c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut(node::IterMut::new(&mut self.root, self.len))
    }
}

impl<K, V, C> Debug for TreeMap<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for TreeMap<K, V, C> where C: Compare<K> + Default {
    fn default() -> TreeMap<K, V, C> { TreeMap::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for TreeMap<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for TreeMap<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> TreeMap<K, V, C> {
        let mut map: TreeMap<K, V, C> = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for TreeMap<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: Hasher>(&self, h: &mut H) {
        self.len.hash(h);
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for TreeMap<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &'a Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut TreeMap<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.into_iter() }
}

impl<K, V, C> PartialEq for TreeMap<K, V, C> where K: PartialEq, V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &TreeMap<K, V, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for TreeMap<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

/// An iterator that consumes the map.
///
/// Acquire through [`TreeMap::into_iter`](struct.TreeMap.html#method.into_iter) or the
/// `IntoIterator` trait.
#[derive(Clone)]
pub struct IntoIter<K, V>(node::Iter<Box<Node<K, V>>>);

impl<K, V> IntoIter<K, V> {
    /// Checks if any entries remain.
    pub fn has_next(&self) -> bool { self.0.has_next() }

    /// Returns the next entry, or an error if the iterator is exhausted.
    pub fn try_next(&mut self) -> Result<(K, V), IterationExhausted> { self.0.try_next() }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the values.
///
/// Acquire through [`TreeMap::iter`](struct.TreeMap.html#method.iter) or the `IntoIterator`
/// trait:
///
/// ```
/// use avl_map::TreeMap;
///
/// let mut map = TreeMap::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<&'a Node<K, V>>);

impl<'a, K, V> Iter<'a, K, V> {
    /// Checks if any entries remain.
    pub fn has_next(&self) -> bool { self.0.has_next() }

    /// Returns the next entry, or an error if the iterator is exhausted.
    pub fn try_next(&mut self) -> Result<(&'a K, &'a V), IterationExhausted> {
        self.0.try_next()
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// Acquire through [`TreeMap::iter_mut`](struct.TreeMap.html#method.iter_mut) or the
/// `IntoIterator` trait.
pub struct IterMut<'a, K: 'a, V: 'a>(node::IterMut<'a, K, V>);

impl<'a, K, V> IterMut<'a, K, V> {
    /// Checks if any entries remain.
    pub fn has_next(&self) -> bool { self.0.has_next() }

    /// Returns the next entry, or `IterationExhausted` if the traversal is finished.
    pub fn try_next(&mut self) -> Result<(&'a K, &'a mut V), IterationExhausted> {
        self.0.try_next()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}
impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

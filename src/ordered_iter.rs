extern crate ordered_iter;

use self::ordered_iter::OrderedMapIterator;
use super::map;

impl<K, V> OrderedMapIterator for map::IntoIter<K, V> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for map::Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<'a, K, V> OrderedMapIterator for map::IterMut<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a mut V;
}

#[cfg(test)]
mod test {
    use super::ordered_iter::OrderedMapIterator;
    use crate::TreeMap;

    #[test]
    fn inner_join_matches_keys() {
        let a: TreeMap<_, _> = (0..10).map(|i| (i, i)).collect();
        let b: TreeMap<_, _> = (5..15).map(|i| (i, i * 10)).collect();

        let joined: Vec<_> = a.iter().inner_join_map(b.iter()).map(|(k, (x, y))| (*k, *x, *y))
            .collect();

        assert_eq!(joined, (5..10).map(|i| (i, i, i * 10)).collect::<Vec<_>>());
    }
}

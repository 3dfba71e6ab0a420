use avl_map::{IterationExhausted, TreeMap};
use quickcheck::{Arbitrary, Gen};
use std::collections::BTreeMap;

/// A mutating call on a map.
#[derive(Clone, Debug)]
pub enum Op<K, V> {
    Insert(K, V),
    Put(Option<K>, Option<V>),
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V> where K: Arbitrary, V: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self {
        match u8::arbitrary(gen) % 4 {
            0 => Op::Put(Arbitrary::arbitrary(gen), Arbitrary::arbitrary(gen)),
            1 => Op::Remove(Arbitrary::arbitrary(gen)),
            _ => Op::Insert(Arbitrary::arbitrary(gen), Arbitrary::arbitrary(gen)),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        match self.clone() {
            Op::Insert(k, v) => Box::new((k, v).shrink().map(|(k, v)| Op::Insert(k, v))),
            Op::Put(k, v) => Box::new((k, v).shrink().map(|(k, v)| Op::Put(k, v))),
            Op::Remove(k) => Box::new(k.shrink().map(Op::Remove)),
        }
    }
}

macro_rules! properties {
    ($name:ident, $K:ty, $V:ty) => {
        mod $name {
            use super::{IterationExhausted, Op};
            use avl_map::TreeMap;
            use quickcheck_macros::quickcheck;
            use std::collections::BTreeMap;

            type Map = TreeMap<$K, $V>;

            #[quickcheck]
            fn insert_then_get(mut map: Map, key: $K, value: $V) -> bool {
                map.insert(key.clone(), value.clone());
                map.get(&key) == Some(&value) && map.contains_key(&key)
            }

            #[quickcheck]
            fn insert_twice_is_idempotent(mut map: Map, key: $K, value: $V) -> bool {
                map.insert(key.clone(), value.clone());
                let len = map.len();
                let keys: Vec<$K> = map.keys().into_iter().cloned().collect();

                map.insert(key, value);
                map.len() == len && map.keys().into_iter().cloned().collect::<Vec<_>>() == keys
            }

            #[quickcheck]
            fn insert_sets_len(mut map: Map, key: $K, value: $V) -> bool {
                let old_len = map.len();
                match map.insert(key, value) {
                    None => map.len() == old_len + 1,
                    Some(_) => map.len() == old_len,
                }
            }

            #[quickcheck]
            fn keys_are_strictly_ascending(map: Map) -> bool {
                let keys = map.keys();
                keys.len() == map.len() && keys.windows(2).all(|w| w[0] < w[1])
            }

            #[quickcheck]
            fn iter_agrees_with_keys(map: Map) -> bool {
                let mut it = map.iter();
                let mut keys = vec![];

                while it.has_next() {
                    match it.try_next() {
                        Ok((key, _)) => keys.push(key),
                        Err(_) => return false,
                    }
                }

                it.try_next() == Err(IterationExhausted) && keys == map.keys()
            }

            #[quickcheck]
            fn remove_affects_no_others(mut map: Map, key: $K) -> bool {
                let old_map = map.clone();
                let removed = map.remove(&key);

                removed == old_map.contains_key(&key) &&
                    !map.contains_key(&key) &&
                    map.len() == old_map.len() - removed as usize &&
                    map.iter().collect::<Vec<_>>() ==
                        old_map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>()
            }

            #[quickcheck]
            fn put_rejects_absent_arguments(mut map: Map, key: $K, value: $V) -> bool {
                let old_map = map.clone();
                !map.put(None::<$K>, value) && !map.put(key, None::<$V>) && map == old_map
            }

            #[quickcheck]
            fn matches_btree_map(ops: Vec<Op<$K, $V>>) -> bool {
                let mut map = Map::new();
                let mut model = BTreeMap::new();

                for op in ops {
                    match op {
                        Op::Insert(k, v) => {
                            if map.insert(k.clone(), v.clone()) != model.insert(k, v) {
                                return false;
                            }
                        }
                        Op::Put(k, v) => {
                            let accepted = k.is_some() && v.is_some();
                            if map.put(k.clone(), v.clone()) != accepted { return false; }
                            if let (Some(k), Some(v)) = (k, v) { model.insert(k, v); }
                        }
                        Op::Remove(k) => {
                            if map.remove(&k) != model.remove(&k).is_some() { return false; }
                        }
                    }
                }

                map.len() == model.len() && map.iter().eq(model.iter())
            }

            #[quickcheck]
            fn into_iter_yields_sorted_entries(map: Map) -> bool {
                let expected: Vec<($K, $V)> =
                    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                map.into_iter().collect::<Vec<_>>() == expected
            }
        }
    }
}

properties!{u8_u16, u8, u16}
properties!{u32_string, u32, String}
properties!{string_unit, String, ()}

#[test]
fn iterate_after_clear_is_exhausted() {
    let mut map: TreeMap<u32, u32> = (0..64).map(|i| (i, i)).collect();
    map.clear();

    let mut it = map.iter();
    assert!(!it.has_next());
    assert_eq!(it.try_next(), Err(IterationExhausted));
    assert_eq!(map.len(), BTreeMap::<u32, u32>::new().len());
}

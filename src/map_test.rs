use arbitrary::{self, unstructured::Unstructured, Arbitrary};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};

use super::*;

use std::collections::BTreeMap;
use std::ops::Bound;

#[test]
fn test_treemap() {
    let seed: u64 = random();
    // let seed: u64 = 8507219473842455534;
    println!("test_treemap {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: TreeMap<u8, u64> = TreeMap::new();
    let mut btmap: BTreeMap<u8, u64> = BTreeMap::new();

    let mut counts = [0_usize; 12];

    for _i in 0..250_000 {
        let bytes = rng.gen::<[u8; 32]>();
        let mut uns = Unstructured::new(&bytes);

        let op = uns.arbitrary().unwrap();
        // println!("op -- {:?}", op);
        match op {
            Op::Len => {
                counts[0] += 1;
                assert_eq!(index.len(), btmap.len());
            }
            Op::IsEmpty => {
                counts[1] += 1;
                assert_eq!(index.is_empty(), btmap.is_empty());
            }
            Op::Set(key, val) => {
                counts[2] += 1;
                match (index.set(key, val), btmap.insert(key, val)) {
                    (None, None) => (),
                    (Some(v), Some(r)) => assert_eq!(v, r, "for key {}", key),
                    (None, Some(_)) => panic!("set no key {} in treemap", key),
                    (Some(_), None) => panic!("set no key {} in btree", key),
                }
            }
            Op::Remove(key) => {
                counts[3] += 1;
                match (index.remove(&key), btmap.remove(&key)) {
                    (None, None) => (),
                    (Some(v), Some(r)) => assert_eq!(v, r, "for key {}", key),
                    (None, Some(_)) => panic!("remove no key {} in treemap", key),
                    (Some(_), None) => panic!("remove no key {} in btree", key),
                }
            }
            Op::Validate => {
                counts[4] += 1;
                index.validate().unwrap();
            }
            Op::Get(key) => {
                counts[5] += 1;
                match (index.get(&key), btmap.get(&key)) {
                    (None, None) => (),
                    (Some(v), Some(r)) => assert_eq!(v, r, "for key {}", key),
                    (None, Some(_)) => panic!("get no key {} in treemap", key),
                    (Some(_), None) => panic!("get no key {} in btree", key),
                }
            }
            Op::Contains(key) => {
                counts[6] += 1;
                assert_eq!(index.contains(&key), btmap.contains_key(&key));
            }
            Op::Iter => {
                counts[7] += 1;
                let mut a: Vec<(u8, u64)> = vec![];
                let mut iter = index.iter();
                while iter.valid() {
                    a.push((*iter.key(), *iter.value()));
                    iter.next();
                }
                let b: Vec<(u8, u64)> = btmap.iter().map(|(k, v)| (*k, *v)).collect();
                assert_eq!(a, b);
            }
            Op::Reverse => {
                counts[8] += 1;
                let mut a: Vec<(u8, u64)> = vec![];
                let mut iter = index.reverse();
                while iter.valid() {
                    a.push((*iter.key(), *iter.value()));
                    iter.next();
                }
                let b: Vec<(u8, u64)> =
                    btmap.iter().rev().map(|(k, v)| (*k, *v)).collect();
                assert_eq!(a, b);
            }
            Op::LowerBound(key) => {
                counts[9] += 1;
                let iter = index.lower_bound(&key);
                match btmap.range(key..).next() {
                    Some((k, v)) => {
                        assert!(iter.valid(), "lower_bound {}", key);
                        assert_eq!(iter.key(), k, "lower_bound {}", key);
                        assert_eq!(iter.value(), v, "lower_bound {}", key);
                    }
                    None => assert!(!iter.valid(), "lower_bound {}", key),
                }
            }
            Op::UpperBound(key) => {
                counts[10] += 1;
                let iter = index.upper_bound(&key);
                let r = (Bound::Excluded(key), Bound::Unbounded);
                match btmap.range(r).next() {
                    Some((k, v)) => {
                        assert!(iter.valid(), "upper_bound {}", key);
                        assert_eq!(iter.key(), k, "upper_bound {}", key);
                        assert_eq!(iter.value(), v, "upper_bound {}", key);
                    }
                    None => assert!(!iter.valid(), "upper_bound {}", key),
                }
            }
            Op::Range((l, h)) if l <= h => {
                counts[11] += 1;
                let (mut lo, hi) = index.range(&l, &h);
                let mut a: Vec<(u8, u64)> = vec![];
                while lo != hi {
                    a.push((*lo.key(), *lo.value()));
                    lo.next();
                }
                let b: Vec<(u8, u64)> =
                    btmap.range(l..=h).map(|(k, v)| (*k, *v)).collect();
                assert_eq!(a, b, "range {} {}", l, h);
            }
            Op::Range((l, h)) => {
                counts[11] += 1;
                // an inverted range positions both cursors at l's bound.
                let (lo, hi) = index.range(&l, &h);
                let lb = index.lower_bound(&l);
                assert!(lo == lb, "range {} {}", l, h);
                let ub = index.upper_bound(&h);
                assert!(hi == ub, "range {} {}", l, h);
            }
        }
    }

    index.validate().unwrap();

    let mut a: Vec<(u8, u64)> = vec![];
    let mut iter = index.iter();
    while iter.valid() {
        a.push((*iter.key(), *iter.value()));
        iter.next();
    }
    let b: Vec<(u8, u64)> = btmap.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(a, b);

    println!("counts {:?} len:{}/{}", counts, index.len(), btmap.len());
}

#[test]
fn test_crud() {
    let mut index: TreeMap<String, String> = TreeMap::new();

    assert_eq!(index.len(), 0);
    assert_eq!(index.is_empty(), true);
    assert_eq!(index.get(&"key1".to_string()), None);

    assert_eq!(index.set("key1".to_string(), "value1".to_string()), None);
    assert_eq!(index.set("key2".to_string(), "value2".to_string()), None);
    assert_eq!(index.len(), 2);
    assert_eq!(index.is_empty(), false);
    assert_eq!(index.contains(&"key1".to_string()), true);
    assert_eq!(index.contains(&"key3".to_string()), false);

    assert_eq!(
        index.get(&"key1".to_string()),
        Some(&"value1".to_string())
    );

    // overwrite keeps the length and the node, swaps the value.
    let old = index.set("key1".to_string(), "value111".to_string());
    assert_eq!(old, Some("value1".to_string()));
    assert_eq!(index.len(), 2);
    assert_eq!(
        index.get(&"key1".to_string()),
        Some(&"value111".to_string())
    );

    assert_eq!(index.remove(&"key1".to_string()), Some("value111".to_string()));
    assert_eq!(index.remove(&"key1".to_string()), None);
    assert_eq!(index.get(&"key1".to_string()), None);
    assert_eq!(index.len(), 1);

    index.validate().unwrap();
}

#[test]
fn test_clear() {
    let mut index: TreeMap<u32, u32> = TreeMap::new();
    for i in 0..100 {
        index.set(i, i * 10);
    }
    assert_eq!(index.len(), 100);

    index.clear();
    assert_eq!(index.len(), 0);
    assert_eq!(index.is_empty(), true);
    assert_eq!(index.min(), None);
    assert_eq!(index.max(), None);
    assert_eq!(index.iter().valid(), false);
    assert_eq!(index.reverse().valid(), false);
    index.validate().unwrap();

    index.set(42, 420);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(&42), Some(&420));
    index.validate().unwrap();
}

#[test]
fn test_bounds() {
    let mut index: TreeMap<i32, String> = TreeMap::new();
    for key in (2..=20).step_by(2) {
        index.set(key, format!("value{}", key));
    }

    let iter = index.lower_bound(&9);
    assert!(iter.valid());
    assert_eq!(*iter.key(), 10);

    let iter = index.lower_bound(&10);
    assert!(iter.valid());
    assert_eq!(*iter.key(), 10);
    assert_eq!(iter.value(), "value10");

    let iter = index.upper_bound(&10);
    assert!(iter.valid());
    assert_eq!(*iter.key(), 12);

    let iter = index.lower_bound(&21);
    assert!(!iter.valid());

    let iter = index.upper_bound(&20);
    assert!(!iter.valid());

    let iter = index.lower_bound(&0);
    assert!(iter.valid());
    assert_eq!(*iter.key(), 2);
}

#[test]
fn test_range() {
    let mut index: TreeMap<i32, &str> = TreeMap::new();
    for (key, value) in vec![(0, "x"), (1, "y"), (2, "z"), (3, "m"), (4, "n")] {
        index.set(key, value);
    }

    let (mut lo, hi) = index.range(&1, &3);
    let mut values = vec![];
    while lo != hi {
        values.push(*lo.value());
        lo.next();
    }
    assert_eq!(values, vec!["y", "z", "m"]);

    let (lo, hi) = index.range(&5, &10);
    assert!(lo == hi);
    assert!(!lo.valid());
}

#[test]
fn test_iter() {
    let mut index: TreeMap<u16, u16> = TreeMap::new();
    let keys: Vec<u16> = vec![11, 3, 7, 19, 2, 17, 5, 13];
    for key in keys.iter() {
        index.set(*key, key * 2);
    }

    let mut items = vec![];
    let mut iter = index.iter();
    while iter.valid() {
        items.push((*iter.key(), *iter.value()));
        iter.next();
    }
    let mut sorted = keys.clone();
    sorted.sort();
    let expect: Vec<(u16, u16)> = sorted.iter().map(|k| (*k, k * 2)).collect();
    assert_eq!(items, expect);
    assert_eq!(items.len(), index.len());

    let mut items = vec![];
    let mut iter = index.reverse();
    while iter.valid() {
        items.push((*iter.key(), *iter.value()));
        iter.next();
    }
    let expect: Vec<(u16, u16)> = sorted.iter().rev().map(|k| (*k, k * 2)).collect();
    assert_eq!(items, expect);
}

#[test]
fn test_cursor_bidirectional() {
    let mut index: TreeMap<u8, u8> = TreeMap::new();
    for key in 1..=5 {
        index.set(key, key);
    }

    // walk forward to the end, then back to the front.
    let mut iter = index.iter();
    while iter.valid() {
        iter.next();
    }
    for key in (1..=5).rev() {
        iter.prev();
        assert_eq!(*iter.key(), key);
    }

    // walk the reverse cursor off the front, then back to the rear.
    let mut iter = index.reverse();
    while iter.valid() {
        iter.next();
    }
    assert!(!iter.valid());
    for key in 1..=5 {
        iter.prev();
        assert_eq!(*iter.key(), key);
    }
}

#[test]
#[should_panic(expected = "out of bound iteration")]
fn test_iter_next_out_of_bound() {
    let mut index: TreeMap<u8, u8> = TreeMap::new();
    index.set(1, 1);

    let mut iter = index.iter();
    while iter.valid() {
        iter.next();
    }
    iter.next();
}

#[test]
#[should_panic(expected = "out of bound iteration")]
fn test_iter_prev_out_of_bound() {
    let mut index: TreeMap<u8, u8> = TreeMap::new();
    index.set(1, 1);

    let mut iter = index.iter();
    iter.prev();
}

#[test]
#[should_panic(expected = "out of bound iteration")]
fn test_reverse_next_out_of_bound() {
    let mut index: TreeMap<u8, u8> = TreeMap::new();
    index.set(1, 1);

    let mut iter = index.reverse();
    while iter.valid() {
        iter.next();
    }
    iter.next();
}

#[test]
#[should_panic(expected = "out of bound iteration")]
fn test_reverse_prev_out_of_bound() {
    let mut index: TreeMap<u8, u8> = TreeMap::new();
    index.set(1, 1);

    let mut iter = index.reverse();
    iter.prev();
}

#[test]
#[should_panic(expected = "out of bound iteration")]
fn test_key_out_of_bound() {
    let index: TreeMap<u8, u8> = TreeMap::new();
    index.iter().key();
}

#[test]
fn test_min_max() {
    let mut index: TreeMap<i64, i64> = TreeMap::new();
    assert_eq!(index.min(), None);
    assert_eq!(index.max(), None);

    for key in vec![42, -3, 17, 100, 0] {
        index.set(key, key * 2);
    }
    assert_eq!(index.min(), Some((&-3, &-6)));
    assert_eq!(index.max(), Some((&100, &200)));

    index.remove(&-3);
    assert_eq!(index.min(), Some((&0, &0)));
    index.remove(&100);
    assert_eq!(index.max(), Some((&42, &84)));
}

#[test]
fn test_min_after_removes() {
    let mut index: TreeMap<u32, u32> = TreeMap::new();
    for key in 0..64 {
        index.set(key, key);
    }
    for key in 0..64 {
        assert_eq!(index.min(), Some((&key, &key)));
        assert_eq!(*index.iter().key(), key);
        index.remove(&key);
        index.validate().unwrap();
    }
    assert_eq!(index.min(), None);
    assert!(!index.iter().valid());
}

#[test]
fn test_with_compare() {
    // order keys descending, the map runs on the supplied predicate alone.
    let mut index: TreeMap<u32, u32> = TreeMap::with_compare(|a: &u32, b: &u32| a > b);
    for key in vec![3, 1, 4, 1, 5, 9, 2, 6] {
        index.set(key, key);
    }
    assert_eq!(index.len(), 7); // the second 1 overwrote the first

    let mut keys = vec![];
    let mut iter = index.iter();
    while iter.valid() {
        keys.push(*iter.key());
        iter.next();
    }
    assert_eq!(keys, vec![9, 6, 5, 4, 3, 2, 1]);

    assert_eq!(index.min(), Some((&9, &9)));
    let iter = index.lower_bound(&5);
    assert_eq!(*iter.key(), 5);
    let iter = index.upper_bound(&5);
    assert_eq!(*iter.key(), 4);
}

#[derive(Debug, Arbitrary)]
enum Op<K, V> {
    Len,
    IsEmpty,
    Set(K, V),
    Remove(K),
    Validate,
    Get(K),
    Contains(K),
    Iter,
    Reverse,
    LowerBound(K),
    UpperBound(K),
    Range((K, K)),
}

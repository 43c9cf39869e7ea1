//! Property-based tests: the structural invariants must survive arbitrary
//! operation sequences, checked against std's BTreeMap as the model.

use std::collections::BTreeMap;

use ordmap::{Direction, OrderedMap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16, u32),
    Remove(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<u16>(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => any::<u16>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn random_operations_preserve_invariants(ops in prop::collection::vec(op_strategy(), 1..300)) {
        let mut map = OrderedMap::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key, value), model.insert(key, value));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                }
            }
            prop_assert!(map.check_invariants(), "{:?}", map.check_invariants_detailed());
            prop_assert_eq!(map.len(), model.len());
        }

        let collected: Vec<(u16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(u16, u32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn forward_iteration_is_strictly_ascending(keys in prop::collection::vec(any::<u16>(), 1..200)) {
        let mut map = OrderedMap::new();
        for key in &keys {
            map.insert(*key, ());
        }

        let seen: Vec<u16> = map.keys().copied().collect();
        for window in seen.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn backward_cursor_is_exact_reverse(keys in prop::collection::vec(any::<u16>(), 1..200)) {
        let mut map = OrderedMap::new();
        for key in &keys {
            map.insert(*key, ());
        }

        let mut forward: Vec<u16> = map.keys().copied().collect();
        let mut backward = Vec::new();
        let mut cursor = map.cursor(Direction::Backward);
        while cursor.has_next() {
            backward.push(*cursor.key().unwrap());
            cursor.advance().unwrap();
        }

        forward.reverse();
        prop_assert_eq!(backward, forward);
    }

    #[test]
    fn removing_absent_keys_changes_nothing(
        present in prop::collection::btree_set(any::<u16>(), 1..100),
        absent in prop::collection::vec(any::<u16>(), 1..50),
    ) {
        let mut map = OrderedMap::new();
        for key in &present {
            map.insert(*key, *key);
        }
        let before: Vec<u16> = map.keys().copied().collect();

        for key in absent {
            if !present.contains(&key) {
                prop_assert_eq!(map.remove(&key), None);
            }
        }

        let after: Vec<u16> = map.keys().copied().collect();
        prop_assert_eq!(before, after);
        prop_assert!(map.check_invariants());
    }

    #[test]
    fn clone_round_trips_and_stays_independent(
        pairs in prop::collection::btree_map(any::<u16>(), any::<u32>(), 1..100)
    ) {
        let mut source = OrderedMap::new();
        for (key, value) in &pairs {
            source.insert(*key, *value);
        }

        let mut copy = source.clone();
        prop_assert_eq!(copy.len(), source.len());
        for (key, value) in &pairs {
            prop_assert_eq!(copy.get(key), Some(value));
        }

        let victim = *pairs.keys().next().unwrap();
        copy.remove(&victim);
        prop_assert_eq!(source.get(&victim), pairs.get(&victim));
        prop_assert!(copy.check_invariants());
        prop_assert!(source.check_invariants());
    }

    #[test]
    fn height_is_logarithmically_bounded(
        keys in prop::collection::btree_set(any::<u32>(), 1..500)
    ) {
        let mut map = OrderedMap::new();
        for key in &keys {
            map.insert(*key, ());
        }

        let n = map.len();
        let bound = 2.0 * ((n + 1) as f64).log2();
        prop_assert!(
            (map.height() as f64) <= bound,
            "height {} exceeds bound {} for {} keys", map.height(), bound, n
        );
    }

    #[test]
    fn count_range_matches_model(
        pairs in prop::collection::btree_map(any::<u16>(), any::<u32>(), 0..100),
        lo in any::<u16>(),
        hi in any::<u16>(),
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let mut map = OrderedMap::new();
        for (key, value) in &pairs {
            map.insert(*key, *value);
        }

        let expected = pairs.range(lo..hi).count();
        prop_assert_eq!(map.count_range(lo..hi), expected);
        let expected_inclusive = pairs.range(lo..=hi).count();
        prop_assert_eq!(map.count_range(lo..=hi), expected_inclusive);
    }
}

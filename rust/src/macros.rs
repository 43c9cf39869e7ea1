//! Macros shared by the crate's test suites.

/// Generates an identically-shaped insert/lookup/update/remove test for each
/// listed key-value pairing, so every supported payload shape (integers,
/// owned strings, user structs) runs through the same lifecycle.
///
/// Each entry is `suite_name: (key_expr, value_expr, updated_value_expr)`;
/// the expressions must produce `Clone + PartialEq + Debug` payloads with an
/// `Ord` key.
#[macro_export]
macro_rules! map_round_trip_tests {
    ($($suite:ident: ($key:expr, $value:expr, $updated:expr)),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<insert_lookup_update_remove_ $suite>]() {
                    let mut map = $crate::OrderedMap::new();
                    let (key, value, updated) = ($key, $value, $updated);

                    assert!(map.insert(key.clone(), value.clone()).is_none());
                    assert_eq!(map.get(&key), Some(&value));
                    assert!(map.contains_key(&key));
                    assert_eq!(map.len(), 1);

                    assert_eq!(map.insert(key.clone(), updated.clone()), Some(value));
                    assert_eq!(map.get(&key), Some(&updated));
                    assert_eq!(map.len(), 1);

                    assert_eq!(map.remove(&key), Some(updated));
                    assert!(map.is_empty());
                    assert!(map.check_invariants());
                }
            )+
        }
    };
}

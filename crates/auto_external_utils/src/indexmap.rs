use std::hash::{BuildHasherDefault, Hash};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Collects `items` into a `Vec`, keeping only the first occurrence of each value.
pub fn dedup_in_order<T, I>(items: I) -> Vec<T>
where
  T: Hash + Eq,
  I: IntoIterator<Item = T>,
{
  items.into_iter().collect::<FxIndexSet<T>>().into_iter().collect()
}

#[test]
fn test_dedup_in_order() {
  assert_eq!(dedup_in_order(["x", "depA", "depA", "peerB", "x"]), vec!["x", "depA", "peerB"]);
  assert_eq!(dedup_in_order(Vec::<String>::new()), Vec::<String>::new());
}

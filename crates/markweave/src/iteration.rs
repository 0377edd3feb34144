//! Loop support for generated template code.
//!
//! [`for_each`] walks either an ordered sequence or a named collection and
//! tells the visitor whether it is on the first entry, so loop bodies can
//! write a separator before every entry except the first.
//!
//! | Source | Key | Order |
//! |--------|-----|-------|
//! | `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>` | index (`usize`) | sequence order |
//! | `BTreeMap<K, V>` | `&K` | sorted by key |
//! | `IndexMap<K, V>` | `&K` | insertion order |
//! | `HashMap<K, V>` | `&K` | the map's iteration order |
//!
//! ```rust
//! use markweave::for_each;
//!
//! let mut out = String::new();
//! for_each(&["a", "b", "c"], |_, item, first| {
//!     if !first {
//!         out.push_str(", ");
//!     }
//!     out.push_str(item);
//!     Ok::<_, std::convert::Infallible>(())
//! })
//! .unwrap();
//! assert_eq!(out, "a, b, c");
//! ```

use std::collections::{btree_map, hash_map, vec_deque, BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::iter::Enumerate;
use std::slice;

use indexmap::IndexMap;

/// A collection [`for_each`] can walk.
pub trait Iterable<'a> {
    /// Position or name of an entry.
    type Key;
    /// Borrowed entry value.
    type Value;
    /// Iterator over `(key, value)` pairs in visiting order.
    type Entries: Iterator<Item = (Self::Key, Self::Value)>;

    /// Returns the entries in visiting order.
    fn entries(&'a self) -> Self::Entries;
}

impl<'a, T: 'a> Iterable<'a> for [T] {
    type Key = usize;
    type Value = &'a T;
    type Entries = Enumerate<slice::Iter<'a, T>>;

    fn entries(&'a self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<'a, T: 'a, const N: usize> Iterable<'a> for [T; N] {
    type Key = usize;
    type Value = &'a T;
    type Entries = Enumerate<slice::Iter<'a, T>>;

    fn entries(&'a self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<'a, T: 'a> Iterable<'a> for Vec<T> {
    type Key = usize;
    type Value = &'a T;
    type Entries = Enumerate<slice::Iter<'a, T>>;

    fn entries(&'a self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<'a, T: 'a> Iterable<'a> for VecDeque<T> {
    type Key = usize;
    type Value = &'a T;
    type Entries = Enumerate<vec_deque::Iter<'a, T>>;

    fn entries(&'a self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<'a, K: 'a, V: 'a> Iterable<'a> for BTreeMap<K, V> {
    type Key = &'a K;
    type Value = &'a V;
    type Entries = btree_map::Iter<'a, K, V>;

    fn entries(&'a self) -> Self::Entries {
        self.iter()
    }
}

impl<'a, K: 'a, V: 'a, S> Iterable<'a> for HashMap<K, V, S>
where
    S: BuildHasher,
{
    type Key = &'a K;
    type Value = &'a V;
    type Entries = hash_map::Iter<'a, K, V>;

    fn entries(&'a self) -> Self::Entries {
        self.iter()
    }
}

impl<'a, K: 'a, V: 'a, S> Iterable<'a> for IndexMap<K, V, S> {
    type Key = &'a K;
    type Value = &'a V;
    type Entries = indexmap::map::Iter<'a, K, V>;

    fn entries(&'a self) -> Self::Entries {
        self.iter()
    }
}

/// Calls `visit(key, value, is_first)` for every entry of `source`.
///
/// `is_first` is `true` on the first call only. The walk runs to completion
/// unless `visit` returns an error, which is passed back unchanged.
pub fn for_each<'a, S, F, E>(source: &'a S, mut visit: F) -> Result<(), E>
where
    S: Iterable<'a> + ?Sized,
    F: FnMut(S::Key, S::Value, bool) -> Result<(), E>,
{
    for (position, (key, value)) in source.entries().enumerate() {
        visit(key, value, position == 0)?;
    }
    Ok(())
}

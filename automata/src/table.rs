use std::hash::Hash;

use im::HashMap;

/// A persistent two-key lookup table, keyed first by row and then by column. Cloning is O(1)
/// and clones share their entries until one of them is changed.
#[derive(Clone, Debug)]
pub(crate) struct Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    map: HashMap<R, HashMap<C, V>>,
}

impl<R, C, V> Table<R, C, V>
where
    R: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
    V: Clone,
{
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Insert the value under the given keys, or if some value already exists for those keys,
    /// hand it to the callback instead.
    #[inline]
    pub fn set_or<F>(&mut self, row: R, col: C, val: V, or: F)
    where
        F: FnOnce(&mut V),
    {
        match self.map.get_mut(&row) {
            Some(cols) => match cols.get_mut(&col) {
                Some(existing) => or(existing),
                None => {
                    cols.insert(col, val);
                }
            },
            None => {
                self.map.insert(row, HashMap::unit(col, val));
            }
        }
    }

    /// Copy every entry of `other` into this table, combining values stored under the same keys
    /// with `merge`. Costs time in the size of `other` only.
    pub fn absorb<F>(&mut self, other: &Table<R, C, V>, mut merge: F)
    where
        F: FnMut(&mut V, &V),
    {
        for (row, cols) in other.map.iter() {
            for (col, val) in cols.iter() {
                self.set_or(row.clone(), col.clone(), val.clone(), |existing| {
                    merge(existing, val)
                });
            }
        }
    }

    /// Retrieve the value stored under the given keys.
    #[inline]
    pub fn get(&self, row: &R, col: &C) -> Option<&V> {
        self.map.get(row).and_then(|cols| cols.get(col))
    }
}

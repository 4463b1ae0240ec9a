//! Disjoint sets over an explicit universe of keys.
//!
//! Keys are mapped to dense slots once, at construction; `find` and `union`
//! then work on slot vectors. Path compression is iterative, so long parent
//! chains on large block counts never recurse.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct UnionFind<K> {
    keys: Vec<K>,
    slots: HashMap<K, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<K: Copy + Eq + Hash> UnionFind<K> {
    /// Seeds the universe. Repeated keys are kept once, in order of first
    /// appearance.
    pub fn new<I: IntoIterator<Item = K>>(universe: I) -> Self {
        let mut keys = Vec::new();
        let mut slots = HashMap::new();
        for key in universe {
            slots.entry(key).or_insert_with(|| {
                keys.push(key);
                keys.len() - 1
            });
        }
        let n = keys.len();

        Self {
            keys,
            slots,
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Representative of the set holding `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` was not part of the universe given to [`UnionFind::new`].
    pub fn find(&mut self, key: K) -> K {
        let slot = self.slot(&key);
        let root = self.find_slot(slot);
        self.keys[root]
    }

    /// Merges the sets holding `x` and `y`. Returns `false` when they were
    /// already one set.
    ///
    /// # Panics
    ///
    /// Panics if either key was not part of the universe.
    pub fn union(&mut self, x: K, y: K) -> bool {
        let x_root = self.find_slot(self.slot(&x));
        let y_root = self.find_slot(self.slot(&y));
        if x_root == y_root {
            return false;
        }

        if self.rank[x_root] > self.rank[y_root] {
            self.parent[y_root] = x_root;
        } else {
            self.parent[x_root] = y_root;
            if self.rank[x_root] == self.rank[y_root] {
                self.rank[y_root] = self.rank[y_root].saturating_add(1);
            }
        }
        true
    }

    /// Number of disjoint sets.
    pub fn count_sets(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(slot, &parent)| slot == parent)
            .count()
    }

    /// Members of every set, keyed by representative. Both the sets and
    /// their members follow the order of first appearance of the keys.
    pub fn groups(&mut self) -> IndexMap<K, Vec<K>> {
        let mut groups: IndexMap<K, Vec<K>> = IndexMap::new();
        for slot in 0..self.parent.len() {
            let root = self.find_slot(slot);
            groups
                .entry(self.keys[root])
                .or_default()
                .push(self.keys[slot]);
        }
        groups
    }

    fn slot(&self, key: &K) -> usize {
        match self.slots.get(key) {
            Some(&slot) => slot,
            None => panic!("union-find key outside of the seeded universe"),
        }
    }

    fn find_slot(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != slot {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new([3usize, 1, 2, 3]);
        assert_eq!(uf.len(), 3);
        assert_eq!(uf.count_sets(), 3);
        assert_eq!(uf.find(1), 1);
        assert!(uf.contains(&2));
        assert!(!uf.contains(&4));
        assert_eq!(uf.keys().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_union_and_find() {
        let mut uf = UnionFind::new(1..=6usize);
        assert!(uf.union(1, 2));
        assert!(uf.union(3, 4));
        assert!(uf.union(2, 4));
        assert!(!uf.union(1, 3));

        assert_eq!(uf.count_sets(), 3);
        assert_eq!(uf.find(1), uf.find(4));
        assert_ne!(uf.find(1), uf.find(5));
        assert_ne!(uf.find(5), uf.find(6));
    }

    #[test]
    fn test_union_by_rank() {
        let mut uf = UnionFind::new(0..4usize);
        // tie: the second root receives the first and grows in rank
        uf.union(0, 1);
        assert_eq!(uf.find(0), 1);
        // rank(1) = 1 > rank(2) = 0: 2 goes under 1
        uf.union(2, 1);
        assert_eq!(uf.find(2), 1);
        uf.union(1, 3);
        assert_eq!(uf.find(3), 1);
    }

    #[test]
    fn test_long_chain() {
        let n = 200_000usize;
        let mut uf = UnionFind::new(0..n);
        for i in 1..n {
            uf.union(i - 1, i);
        }
        assert_eq!(uf.count_sets(), 1);
        assert_eq!(uf.find(0), uf.find(n - 1));
    }

    #[test]
    fn test_groups() {
        let mut uf = UnionFind::new([10usize, 20, 30, 40, 50]);
        uf.union(10, 40);
        uf.union(30, 50);

        let groups = uf.groups();
        let members: Vec<Vec<usize>> = groups.into_values().collect();
        assert_eq!(members, vec![vec![10, 40], vec![20], vec![30, 50]]);
    }

    #[test]
    #[should_panic]
    fn test_unknown_key() {
        let mut uf = UnionFind::new([1usize, 2]);
        uf.find(7);
    }

    #[test]
    fn test_tuple_keys() {
        let mut uf = UnionFind::new([(1usize, 2usize), (3, 4), (5, 6)]);
        uf.union((1, 2), (5, 6));
        assert_eq!(uf.count_sets(), 2);
    }
}

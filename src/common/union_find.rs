use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Disjoint-set forest with path compression and union by rank.
///
/// Elements that were never added are created as singletons the first time
/// they are looked up, so callers may skip a separate initialization pass.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: FxHashMap<T, T>,
    rank: FxHashMap<T, u32>,
    sets: usize,
}

impl<T> UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
            sets: 0,
        }
    }

    /// Adds `x` as a singleton set. Does nothing if `x` is already present.
    pub fn make_set(&mut self, x: T) {
        if !self.parent.contains_key(&x) {
            self.parent.insert(x.clone(), x.clone());
            self.rank.insert(x, 0);
            self.sets += 1;
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every element on the way to the root is re-attached directly to the
    /// root.
    pub fn find(&mut self, x: &T) -> T {
        if !self.parent.contains_key(x) {
            self.make_set(x.clone());
            return x.clone();
        }

        let mut root = x.clone();
        loop {
            let parent = &self.parent[&root];
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut curr = x.clone();
        while curr != root {
            match self.parent.get_mut(&curr) {
                Some(parent) => curr = std::mem::replace(parent, root.clone()),
                None => break,
            }
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if they already were in the same set.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.rank[&root_x] < self.rank[&root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }

        // The lower-ranked root goes under the higher-ranked one.
        let rank_y = self.rank[&root_y];
        self.parent.insert(root_y, root_x.clone());

        if let Some(rank_x) = self.rank.get_mut(&root_x) {
            if *rank_x == rank_y {
                *rank_x += 1;
            }
        }

        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, x: &T, y: &T) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

impl<T> Default for UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new();
        uf.make_set("a");
        uf.make_set("b");
        uf.make_set("a");

        assert_eq!(uf.set_count(), 2);
        assert_eq!(uf.find(&"a"), "a");
        assert!(!uf.same_set(&"a", &"b"));
    }

    #[test]
    fn find_auto_creates() {
        let mut uf = UnionFind::<u32>::new();
        assert_eq!(uf.set_count(), 0);

        assert_eq!(uf.find(&7), 7);
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn union_merges() {
        let mut uf = UnionFind::new();
        for x in 0..6 {
            uf.make_set(x);
        }

        assert!(uf.union(&0, &1));
        assert!(uf.union(&2, &3));
        assert!(uf.union(&1, &3));
        assert!(!uf.union(&0, &2));

        assert!(uf.same_set(&0, &3));
        assert!(!uf.same_set(&0, &4));
        assert_eq!(uf.set_count(), 3);
    }

    #[test]
    fn union_by_rank_keeps_higher_root() {
        let mut uf = UnionFind::new();
        uf.union(&"a", &"b");
        let root = uf.find(&"a");

        // Singleton has rank zero and goes under the rank-one root.
        uf.union(&"c", &root);
        assert_eq!(uf.find(&"c"), root);
    }

    #[test]
    fn path_compression() {
        let mut uf = UnionFind::new();
        for i in 0..100u32 {
            uf.union(&i, &(i + 1));
        }

        let root = uf.find(&0);
        for i in 0..=100 {
            assert_eq!(uf.parent[&i], root);
        }
        assert_eq!(uf.set_count(), 1);
    }
}

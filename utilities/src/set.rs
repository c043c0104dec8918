use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

/// An unordered membership set over structurally-compared keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set<K: Eq + Hash> {
    items: HashSet<K>,
}

impl<K: Eq + Hash> Default for Set<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> Set<K> {
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` when `element` was not already present.
    pub fn add(&mut self, element: K) -> bool {
        self.items.insert(element)
    }

    pub fn contains(&self, element: &K) -> bool {
        self.items.contains(element)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, K> {
        self.items.iter()
    }
}

impl<K: Eq + Hash + Clone> Set<K> {
    /// Every member, in no particular order.
    pub fn to_vec(&self) -> Vec<K> {
        self.items.iter().cloned().collect()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Set<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> Extend<K> for Set<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<K: Eq + Hash> IntoIterator for Set<K> {
    type Item = K;
    type IntoIter = hash_set::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K: Eq + Hash> IntoIterator for &'a Set<K> {
    type Item = &'a K;
    type IntoIter = hash_set::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Vector};

    #[test]
    fn add_then_contains() {
        let mut set = Set::new();
        assert!(set.is_empty());
        assert!(set.add(Coordinate::new(1, 2)));
        assert!(set.contains(&Coordinate::new(1, 2)));
        assert!(!set.contains(&Coordinate::new(2, 1)));
    }

    #[test]
    fn duplicates_do_not_grow_the_set() {
        let mut set = Set::new();
        let v = Vector::new(Coordinate::ZERO, Coordinate::RIGHT);
        assert!(set.add(v));
        assert!(!set.add(v));
        // Same origin, different direction is a distinct state.
        assert!(set.add(Vector::new(Coordinate::ZERO, Coordinate::DOWN)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn to_vec_lists_every_member() {
        let set: Set<i32> = [3, 1, 2, 3, 1].into_iter().collect();
        let mut members = set.to_vec();
        members.sort_unstable();
        assert_eq!(members, vec![1, 2, 3]);
    }
}

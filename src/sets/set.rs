use std::collections::{HashSet, hash_set};

use itertools::Itertools;

use crate::sets::{Element, SetOps};

/// A deduplicating collection of elements.
///
/// Membership is kept in a hash index, so the set itself has no order; whenever
/// the members are listed (see [`Set::members`]) they come out sorted ascending.
#[derive(Clone, Debug)]
pub struct Set<T> {
    members: HashSet<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set { members: HashSet::new() }
    }
}

impl<T: Element> Set<T> {
    /// Builds a set from the given elements; repeated elements collapse into one member.
    pub fn new(initial: impl IntoIterator<Item = T>) -> Set<T> {
        let set = Set { members: initial.into_iter().collect() };
        log::trace!("constructed set of {} members", set.size());
        set
    }

    /// Adds an element, unless it is already a member.
    pub fn add(&mut self, element: T) {
        self.members.insert(element);
    }

    /// Removes an element. Removing a non-member leaves the set as it was.
    pub fn remove(&mut self, element: &T) {
        self.members.remove(element);
    }

    pub fn contains(&self, element: &T) -> bool {
        self.members.contains(element)
    }

    /// The number of distinct members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Lists the members in ascending order. Two sets with the same members
    /// always produce the same listing; an empty set produces an empty one.
    pub fn members(&self) -> Vec<T> {
        self.members.iter().cloned().sorted().collect()
    }

    /// Borrows the members in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.members.iter()
    }

    /// Whether both sets have exactly the same members.
    pub fn equal(&self, other: &Set<T>) -> bool {
        // equal sizes plus one-way containment rules out extra members on the other side
        self.size() == other.size() && self.subset(other)
    }

    /// Whether every member of this set is also a member of `other`.
    pub fn subset(&self, other: &Set<T>) -> bool {
        self.members.iter().all(|m| other.contains(m))
    }

    /// A new set holding the members of either set.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let mut s = self.clone();
        s.union_inplace(other);
        log::trace!("union of {} and {} members has {}", self.size(), other.size(), s.size());
        s
    }

    /// A new set holding the members common to both sets.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let mut s = self.clone();
        s.intersect_inplace(other);
        log::trace!("intersection of {} and {} members has {}", self.size(), other.size(), s.size());
        s
    }

    /// A new set holding the members of this set that `other` lacks.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        let mut s = self.clone();
        s.difference_inplace(other);
        log::trace!("difference of {} and {} members has {}", self.size(), other.size(), s.size());
        s
    }
}

impl<T: Element> SetOps<T> for Set<T> {
    fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.members.iter()
    }

    fn insert(&mut self, value: T) -> &mut Self {
        self.members.insert(value);
        self
    }

    fn remove(&mut self, value: &T) -> &mut Self {
        self.members.remove(value);
        self
    }

    fn is_subset(&self, other: &Self) -> bool {
        self.subset(other)
    }

    fn intersect(&self, other: &Self) -> Self {
        self.intersection(other)
    }

    fn intersect_inplace(&mut self, other: &Self) -> &mut Self {
        self.members.retain(|m| other.members.contains(m));
        self
    }

    fn union(&self, other: &Self) -> Self {
        Set::union(self, other)
    }

    fn union_inplace(&mut self, other: &Self) -> &mut Self {
        self.members.extend(other.members.iter().cloned());
        self
    }

    fn difference(&self, other: &Self) -> Self {
        Set::difference(self, other)
    }

    fn difference_inplace(&mut self, other: &Self) -> &mut Self {
        self.members.retain(|m| !other.members.contains(m));
        self
    }
}

impl<T: Element> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Element> Eq for Set<T> {}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set::new(iter)
    }
}

impl<'a, T: Element + 'a> FromIterator<&'a T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        Set::new(iter.into_iter().cloned())
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        Set::new(value)
    }
}

impl<T: Element> From<Vec<T>> for Set<T> {
    fn from(value: Vec<T>) -> Self {
        Set::new(value)
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type IntoIter = hash_set::IntoIter<T>;
    type Item = T;
    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type IntoIter = hash_set::Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

use std::ops::{BitAnd, BitOr, Sub};

use crate::sets::{Element, Set};

// S | S

impl<T: Element> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn bitor(self, rhs: &Set<T>) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Element> BitOr<Set<T>> for Set<T> {
    type Output = Set<T>;
    fn bitor(self, rhs: Set<T>) -> Self::Output {
        &self | &rhs
    }
}

// S & S

impl<T: Element> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn bitand(self, rhs: &Set<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Element> BitAnd<Set<T>> for Set<T> {
    type Output = Set<T>;
    fn bitand(self, rhs: Set<T>) -> Self::Output {
        &self & &rhs
    }
}

// S - S

impl<T: Element> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn sub(self, rhs: &Set<T>) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Element> Sub<Set<T>> for Set<T> {
    type Output = Set<T>;
    fn sub(self, rhs: Set<T>) -> Self::Output {
        &self - &rhs
    }
}

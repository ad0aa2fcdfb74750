/*
 *  Deduplicating sets over integers and text tokens, with the usual set algebra.
 */

mod element;
mod notation;
mod operators;
mod set;

pub use element::{Element, Token};
pub use set::Set;

/// A set of integers, listed in numeric order.
pub type IntSet = Set<i64>;

/// A set of text tokens, listed in lexicographic order.
pub type StringSet = Set<String>;

pub trait SetOps<T>: Sized {
    fn contains(&self, value: &T) -> bool;
    fn len(&self) -> usize;

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    fn insert(&mut self, value: T) -> &mut Self;
    fn remove(&mut self, value: &T) -> &mut Self;

    fn is_subset(&self, other: &Self) -> bool;

    fn intersect(&self, other: &Self) -> Self;
    fn intersect_inplace(&mut self, other: &Self) -> &mut Self;

    fn union(&self, other: &Self) -> Self;
    fn union_inplace(&mut self, other: &Self) -> &mut Self;

    fn difference(&self, other: &Self) -> Self;
    fn difference_inplace(&mut self, other: &Self) -> &mut Self;
}

pub mod prelude {
    pub use super::{Element, IntSet, Set, SetOps, StringSet, Token};
}

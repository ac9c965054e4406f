//! Strict weak orders used to place values in the tree.
//!
//! A comparator answers one question: does `a` sort strictly before `b`?
//! Two values are considered equal when neither sorts before the other.
//! Any `Fn(&T, &T) -> bool` closure that is a strict weak order works, and
//! [`Less`] / [`Greater`] cover the ascending and descending defaults.

use std::cmp::Ordering;

pub trait Compare<T: ?Sized> {
    /// `true` when `a` sorts strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Three-way comparison derived from [`Compare::less`].
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Ascending order via `PartialOrd`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Descending order via `PartialOrd`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

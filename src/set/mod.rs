//! Generic unordered set with n-ary set algebra.
//!
//! This module provides [`Set`], a container of distinct elements backed by
//! a presence mapping (element to unit marker):
//!
//! - O(1) expected `add`, `remove` and `contains`
//! - O(1) `len` and `is_empty`
//! - n-ary `union`, `intersection`, `difference` and `unique`
//!   (symmetric difference), each in a mutating form that rewrites the
//!   receiver and a constructive form that returns a new set
//!
//! # Mutating vs Constructive
//!
//! Methods ending in `_with` modify the receiver in place and return it
//! for chaining. Methods without the suffix, and the free functions
//! [`union_of`], [`intersection_of`], [`difference_of`] and [`unique_of`],
//! never modify their inputs and always return a set with its own storage.
//!
//! ```rust
//! use toolbox::set::{Set, union_of};
//!
//! let mut a = Set::of([1, 2]);
//! let b = Set::of([2, 3]);
//!
//! let combined = union_of(&[&a, &b]);
//! assert_eq!(combined, Set::of([1, 2, 3]));
//! assert_eq!(a, Set::of([1, 2])); // Inputs unchanged
//!
//! a.union_with(&[&b]).add(4);
//! assert_eq!(a, Set::of([1, 2, 3, 4]));
//! ```
//!
//! # Empty Operands
//!
//! Every n-ary operation treats "no other sets" as identity. In particular
//! `s.intersect_with(&[])` leaves `s` unchanged rather than intersecting with
//! a universal set.
//!
//! # Hashing
//!
//! The hasher of the presence mapping is selected at compile time by Cargo
//! features and exposed as [`DefaultHashBuilder`]:
//!
//! | Feature   | Hasher                              |
//! |-----------|-------------------------------------|
//! | (none)    | `std::collections::hash_map::RandomState` |
//! | `fxhash`  | `rustc_hash::FxBuildHasher`         |
//! | `ahash`   | `ahash::RandomState`                |

mod algebra;
mod presence;
mod display;

pub use algebra::{difference_of, intersection_of, union_of, unique_of};
pub use presence::{IntoIter, Iter, Set};

/// Hasher builder used by the presence mapping of every [`Set`].
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hasher builder used by the presence mapping of every [`Set`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hasher builder used by the presence mapping of every [`Set`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Creates a [`Set`] containing the given elements.
///
/// Duplicate elements collapse to a single membership.
///
/// # Examples
///
/// ```rust
/// use toolbox::set::Set;
///
/// let set = toolbox::set![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
///
/// let empty: Set<i32> = toolbox::set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::set::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::set::Set::of([$($element),+])
    };
}

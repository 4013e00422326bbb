//! n-ary set algebra over [`Set`].
//!
//! Every operation, mutating or constructive, goes through `reduce_into`.
//! Constructive forms copy their first operand into a fresh accumulator and
//! reduce the rest into it, so no input is ever written to.

use std::collections::HashMap;
use std::hash::Hash;

use super::{DefaultHashBuilder, Set};

// =============================================================================
// Reduction
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Union,
    Intersection,
    Difference,
    Unique,
}

/// Combines `others` into `accumulator` in place.
///
/// An empty `others` leaves the accumulator unchanged for every operation.
fn reduce_into<T: Hash + Eq + Clone>(
    accumulator: &mut Set<T>,
    others: &[&Set<T>],
    operation: Operation,
) {
    if others.is_empty() {
        return;
    }

    match operation {
        Operation::Union => {
            for other in others {
                for element in *other {
                    if !accumulator.contains(element) {
                        accumulator.add(element.clone());
                    }
                }
            }
        }
        Operation::Intersection => {
            accumulator
                .presence
                .retain(|element, _| others.iter().all(|other| other.contains(element)));
        }
        Operation::Difference => {
            accumulator
                .presence
                .retain(|element, _| !others.iter().any(|other| other.contains(element)));
        }
        Operation::Unique => {
            let survivors = elements_in_exactly_one(accumulator, others);
            accumulator.clear();
            accumulator.extend(survivors);
        }
    }
}

/// Returns the elements that occur in exactly one of `first` and `others`.
///
/// Occurrences are counted over all operands before anything is written, so
/// the caller may rewrite `first` afterwards even if an operand held the same
/// contents.
fn elements_in_exactly_one<T: Hash + Eq + Clone>(first: &Set<T>, others: &[&Set<T>]) -> Vec<T> {
    let capacity = others.iter().map(|other| other.len()).sum::<usize>() + first.len();
    let mut occurrences: HashMap<&T, usize, DefaultHashBuilder> =
        HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default());

    for set in std::iter::once(first).chain(others.iter().copied()) {
        for element in set {
            *occurrences.entry(element).or_insert(0) += 1;
        }
    }

    occurrences
        .into_iter()
        .filter(|&(_, count)| count == 1)
        .map(|(element, _)| element.clone())
        .collect()
}

/// Copies `sets[0]` and reduces the remaining sets into the copy.
fn fold_sets<T: Hash + Eq + Clone>(sets: &[&Set<T>], operation: Operation) -> Set<T> {
    match sets.split_first() {
        None => Set::new(),
        Some((first, rest)) => {
            let mut accumulator = (*first).clone();
            reduce_into(&mut accumulator, rest, operation);
            accumulator
        }
    }
}

// =============================================================================
// Mutating and Constructive Methods
// =============================================================================

impl<T: Hash + Eq + Clone> Set<T> {
    /// Adds every element of `others` to `self`.
    ///
    /// Returns `self` for chaining. With no `others` the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let mut set = Set::of([1]);
    /// set.union_with(&[&Set::of([2]), &Set::of([3])]);
    /// assert_eq!(set, Set::of([1, 2, 3]));
    /// ```
    pub fn union_with(&mut self, others: &[&Self]) -> &mut Self {
        reduce_into(self, others, Operation::Union);
        self
    }

    /// Keeps only the elements of `self` that are present in every one of
    /// `others`.
    ///
    /// With no `others` the set is unchanged; intersecting with nothing is
    /// the identity, not an intersection with a universal set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let mut set = Set::of([1, 2, 3]);
    /// set.intersect_with(&[&Set::of([2, 3, 4]), &Set::of([3, 2])]);
    /// assert_eq!(set, Set::of([2, 3]));
    ///
    /// set.intersect_with(&[]);
    /// assert_eq!(set, Set::of([2, 3]));
    /// ```
    pub fn intersect_with(&mut self, others: &[&Self]) -> &mut Self {
        reduce_into(self, others, Operation::Intersection);
        self
    }

    /// Removes every element of `self` that is present in any of `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let mut set = Set::of([1, 2, 3]);
    /// set.difference_with(&[&Set::of([2, 3])]);
    /// assert_eq!(set, Set::of([1]));
    /// ```
    pub fn difference_with(&mut self, others: &[&Self]) -> &mut Self {
        reduce_into(self, others, Operation::Difference);
        self
    }

    /// Replaces `self` with the elements that belong to exactly one of
    /// `self` and `others`.
    ///
    /// Membership is counted over all operands at once, so the result does
    /// not depend on the order of `others`. For two operands this is the
    /// symmetric difference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let mut a = Set::of([1, 2, 3, 4]);
    /// a.unique_with(&[&Set::of([3, 6])]);
    /// assert_eq!(a, Set::of([1, 2, 4, 6]));
    ///
    /// // A snapshot of the receiver can be passed as an operand.
    /// let mut c = Set::of([3, 1, 5]);
    /// let d = Set::of([3, 4]);
    /// let snapshot = c.clone();
    /// c.unique_with(&[&snapshot, &d]);
    /// assert_eq!(c, Set::of([4]));
    /// ```
    pub fn unique_with(&mut self, others: &[&Self]) -> &mut Self {
        reduce_into(self, others, Operation::Unique);
        self
    }

    /// Returns a new set holding the union of `self` and `others`.
    ///
    /// Neither `self` nor any of `others` is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let a = Set::of([1, 2]);
    /// let b = Set::of([2, 3]);
    ///
    /// let union = a.union(&[&b]);
    /// assert_eq!(union, Set::of([1, 2, 3]));
    /// assert_eq!(a, Set::of([1, 2]));
    /// ```
    #[must_use]
    pub fn union(&self, others: &[&Self]) -> Self {
        self.fold_from_self(others, Operation::Union)
    }

    /// Returns a new set holding the elements of `self` present in every one
    /// of `others`.
    #[must_use]
    pub fn intersection(&self, others: &[&Self]) -> Self {
        self.fold_from_self(others, Operation::Intersection)
    }

    /// Returns a new set holding the elements of `self` absent from all of
    /// `others`.
    #[must_use]
    pub fn difference(&self, others: &[&Self]) -> Self {
        self.fold_from_self(others, Operation::Difference)
    }

    /// Returns a new set holding the elements that belong to exactly one of
    /// `self` and `others`.
    ///
    /// `self` may also appear among `others`:
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let s = Set::of([1, 2, 3]);
    /// let d = Set::of([3, 4]);
    /// assert_eq!(s.unique(&[&s, &d]), Set::of([4]));
    /// ```
    #[must_use]
    pub fn unique(&self, others: &[&Self]) -> Self {
        self.fold_from_self(others, Operation::Unique)
    }

    fn fold_from_self(&self, others: &[&Self], operation: Operation) -> Self {
        let mut accumulator = self.clone();
        reduce_into(&mut accumulator, others, operation);
        accumulator
    }
}

// =============================================================================
// Constructive Functions
// =============================================================================

/// Returns a new set holding every element of every given set.
///
/// No sets yields an empty set; one set yields an independent copy.
///
/// # Examples
///
/// ```rust
/// use toolbox::set::{Set, union_of};
///
/// let empty: Set<i32> = union_of(&[]);
/// assert!(empty.is_empty());
///
/// let a = Set::of([1, 2]);
/// let b = Set::of([2, 3]);
/// assert_eq!(union_of(&[&a, &b]), Set::of([1, 2, 3]));
/// ```
#[must_use]
pub fn union_of<T: Hash + Eq + Clone>(sets: &[&Set<T>]) -> Set<T> {
    fold_sets(sets, Operation::Union)
}

/// Returns a new set holding the elements of the first set that are present
/// in all of the others.
///
/// No sets yields an empty set; one set yields an independent copy.
///
/// # Examples
///
/// ```rust
/// use toolbox::set::{Set, intersection_of};
///
/// let a = Set::of([1, 2, 3]);
/// let b = Set::of([2, 3, 4]);
/// let c = Set::of([3, 4, 5]);
/// assert_eq!(intersection_of(&[&a, &b, &c]), Set::of([3]));
/// ```
#[must_use]
pub fn intersection_of<T: Hash + Eq + Clone>(sets: &[&Set<T>]) -> Set<T> {
    fold_sets(sets, Operation::Intersection)
}

/// Returns a new set holding the elements of the first set that are absent
/// from all of the others.
///
/// # Examples
///
/// ```rust
/// use toolbox::set::{Set, difference_of};
///
/// let a = Set::of([1, 2, 3, 4]);
/// let b = Set::of([2]);
/// let c = Set::of([4, 5]);
/// assert_eq!(difference_of(&[&a, &b, &c]), Set::of([1, 3]));
/// ```
#[must_use]
pub fn difference_of<T: Hash + Eq + Clone>(sets: &[&Set<T>]) -> Set<T> {
    fold_sets(sets, Operation::Difference)
}

/// Returns a new set holding the elements that belong to exactly one of the
/// given sets.
///
/// # Examples
///
/// ```rust
/// use toolbox::set::{Set, unique_of};
///
/// let a = Set::of([1, 2, 3, 4]);
/// let b = Set::of([3, 6]);
/// let c = Set::of([4, 7]);
///
/// assert_eq!(unique_of(&[&a, &b, &c]), Set::of([1, 2, 6, 7]));
///
/// // Originals are not modified
/// assert_eq!(a, Set::of([1, 2, 3, 4]));
/// assert_eq!(b, Set::of([3, 6]));
/// assert_eq!(c, Set::of([4, 7]));
/// ```
#[must_use]
pub fn unique_of<T: Hash + Eq + Clone>(sets: &[&Set<T>]) -> Set<T> {
    fold_sets(sets, Operation::Unique)
}

// =============================================================================
// Tests
// =============================================================================

//! The [`Set`] container and its presence mapping.
//!
//! A `Set<T>` owns a `HashMap<T, ()>` whose keys are the members of the set.
//! Construction, single-element mutation, membership queries and the
//! standard trait implementations live here; the n-ary algebra is in
//! `algebra.rs`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;
use std::iter::FromIterator;

use super::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered set of distinct elements.
///
/// `Set` is backed by a presence mapping from element to `()`. Elements must
/// be `Hash + Eq`; operations that copy elements out of a set (snapshots and
/// constructive algebra) additionally require `Clone`.
///
/// # Element Contract
///
/// The hash and equality of an element must not change while it is a member.
/// Mutating an element through interior mutability (`Cell`, `RefCell`, ...)
/// after insertion leaves the set in an unspecified state.
///
/// # Concurrency
///
/// `Set` performs no internal locking. It is `Send` and `Sync` whenever `T`
/// is, but every mutating method takes `&mut self`, so mutating one set from
/// several threads requires external synchronization such as a `Mutex`.
///
/// # Time Complexity
///
/// | Operation       | Complexity          |
/// |-----------------|---------------------|
/// | `new`           | O(1)                |
/// | `add`           | O(1) expected       |
/// | `remove`        | O(1) expected       |
/// | `contains`      | O(1) expected       |
/// | `len`           | O(1)                |
/// | `values`        | O(n)                |
/// | n-ary algebra   | O(total elements)   |
///
/// # Examples
///
/// ```rust
/// use toolbox::set::Set;
///
/// let mut set = Set::of(["a", "b"]);
/// set.add("c");
/// set.remove(&"a");
///
/// assert!(set.contains(&"b"));
/// assert!(!set.contains(&"a"));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone)]
pub struct Set<T> {
    pub(super) presence: HashMap<T, (), DefaultHashBuilder>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            presence: HashMap::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Creates a new empty set with room for at least `capacity` elements.
    ///
    /// Capacity only affects allocation, never membership or equality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert_eq!(set, Set::new());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            presence: HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let set = Set::of([1, 1, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.presence.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presence.is_empty()
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.presence.clear();
    }

    /// Returns an iterator over the elements of the set in unspecified order.
    ///
    /// The order is stable for as long as the set is not modified.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.presence.keys(),
        }
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set containing exactly the distinct given elements.
    ///
    /// Duplicates collapse to a single membership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let set = Set::of(vec!["x", "y", "x"]);
    /// assert_eq!(set.len(), 2);
    ///
    /// let empty: Set<i32> = Set::of([]);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let elements = elements.into_iter();
        let mut set = Self::with_capacity(elements.size_hint().0);
        set.extend(elements);
        set
    }

    /// Inserts `element` if it is absent.
    ///
    /// Returns `true` if the element was newly inserted. Adding an element
    /// that is already present leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        self.presence.insert(element, ()).is_none()
    }

    /// Removes `element` if it is present.
    ///
    /// Returns `true` if the element was a member. Removing an absent
    /// element is not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let mut set = Set::of(["a".to_string()]);
    /// assert!(set.remove("a"));
    /// assert!(!set.remove("a"));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.presence.remove(element).is_some()
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let set = Set::of(["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.presence.contains_key(element)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let subset = Set::of([1, 2]);
    /// let superset = Set::of([1, 2, 3]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Probe the larger set with the elements of the smaller one
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        !smaller.iter().any(|element| larger.contains(element))
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    /// Returns a snapshot of all elements in unspecified order.
    ///
    /// The snapshot is an independent `Vec`; modifying the set afterwards
    /// does not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let mut set = Set::of([3, 1, 2]);
    /// let mut values = set.values();
    /// set.clear();
    ///
    /// values.sort_unstable();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct IntoIter<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::of(elements)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::of(elements)
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.presence.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Set::new();
        while let Some(element) = sequence.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

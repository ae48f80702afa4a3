//! Typed list handles.
//!
//! A list lives in a [`Pool`]; the handles here are copyable references to
//! it with pointer semantics. Copying a handle never copies elements, and
//! every copy observes mutations made through any other.
//!
//! ```text
//! ConstList<T>  - read-only view: begin/end, front/back, len, iteration
//! List<T>       - ConstList<T> plus push/pop/clear (derefs to ConstList)
//! ```
//!
//! Narrowing is implicit (`List -> ConstList` via `From`). Widening a
//! `ConstList` back to a `List` is only available through the explicitly
//! named [`List::from_const_unchecked`].
//!
//! A handle is either bound to a list or *singular*. Singular handles only
//! support `is_valid`, comparison, formatting, and copying; every other
//! operation panics.
//!
//! # Example
//!
//! ```
//! use nexus_pool_list::{ConstList, List, Pool};
//!
//! let pool = Pool::new();
//! let list: List<usize> = List::create(&pool).unwrap();
//!
//! list.push_back(2).unwrap();
//! list.push_back(3).unwrap();
//! list.push_front(1).unwrap();
//!
//! let view: ConstList<usize> = list.into();
//! assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! // Same list, seen through both handles
//! assert_eq!(list.pop_front(), Ok(1));
//! assert_eq!(view.front(), Ok(2));
//! assert_eq!(view, list);
//! ```
//!
//! # Lists of lists
//!
//! Handles are themselves [`Handle`]s stored by [`ListKey`], so a list can
//! hold other lists of the same pool. Reading an element rebuilds a fresh
//! handle each time.
//!
//! ```
//! use nexus_pool_list::{ConstList, List, Pool};
//!
//! let pool = Pool::new();
//! let rows: List<ConstList<usize>> = List::create(&pool).unwrap();
//!
//! for n in 1..=3 {
//!     let row: List<usize> = List::create(&pool).unwrap();
//!     for v in 0..n {
//!         row.push_back(v).unwrap();
//!     }
//!     rows.push_back(row.as_const()).unwrap();
//! }
//!
//! let lens: Vec<_> = rows.iter().map(|row| row.len()).collect();
//! assert_eq!(lens, vec![1, 2, 3]);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;
use core::ptr;

use crate::iter::{Cursor, ListCursor, Range, Rev};
use crate::{Element, Error, Handle, Key, ListKey, Pool, RawList, Result};

// ============================================================================
// ConstList
// ============================================================================

/// Read-only handle to a pool-owned list of `T`.
pub struct ConstList<'p, T> {
    raw: Option<RawList<'p>>,
    _marker: PhantomData<fn() -> T>,
}

impl<'p, T> ConstList<'p, T> {
    /// Returns a handle bound to no list.
    #[inline]
    pub const fn singular() -> Self {
        Self {
            raw: None,
            _marker: PhantomData,
        }
    }

    /// Binds a handle to an existing raw list.
    #[inline]
    pub const fn new(raw: RawList<'p>) -> Self {
        Self {
            raw: Some(raw),
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the handle is bound to a list.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.raw.is_some()
    }

    /// Returns `true` if the handle is bound to no list.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.raw.is_none()
    }

    /// Returns the underlying raw list, or `None` if singular.
    #[inline]
    pub fn raw(&self) -> Option<RawList<'p>> {
        self.raw
    }

    /// Returns the list's key, or `None` if singular.
    #[inline]
    pub fn key(&self) -> Option<ListKey> {
        self.raw.map(|raw| raw.key())
    }

    /// Returns the pool that owns the list.
    ///
    /// # Panics
    ///
    /// Panics if the handle is singular.
    #[inline]
    pub fn pool(&self) -> &'p Pool {
        self.bound().pool()
    }

    /// Returns the number of elements. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the handle is singular.
    #[inline]
    pub fn len(&self) -> usize {
        self.bound().len()
    }

    /// Returns `true` if the list has no elements. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the handle is singular.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bound().is_empty()
    }

    #[inline]
    fn bound(&self) -> RawList<'p> {
        self.raw.expect("singular list handle")
    }
}

impl<'p, T: Element<'p>> ConstList<'p, T> {
    /// Returns a cursor at the first element, or [`end`](Self::end) if empty.
    pub fn begin(&self) -> T::Cursor {
        let raw = self.bound();
        <T::Cursor as ListCursor<'p>>::at(raw, raw.head())
    }

    /// Returns a cursor one past the last element.
    ///
    /// Stepping it back once reaches the last element.
    pub fn end(&self) -> T::Cursor {
        let raw = self.bound();
        match raw.tail() {
            Some(tail) => <T::Cursor as ListCursor<'p>>::at(raw, Some(tail)).successor(),
            None => <T::Cursor as ListCursor<'p>>::at(raw, None),
        }
    }

    /// Returns a reverse cursor at the last element.
    #[inline]
    pub fn rbegin(&self) -> Rev<T::Cursor> {
        Rev::new(self.end())
    }

    /// Returns a reverse cursor one before the first element.
    #[inline]
    pub fn rend(&self) -> Rev<T::Cursor> {
        Rev::new(self.begin())
    }

    /// Returns a copy of the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn front(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty { op: "front" });
        }
        Ok(self.begin().get())
    }

    /// Returns a copy of the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn back(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty { op: "back" });
        }
        Ok(self.rbegin().get())
    }

    /// Iterates the elements front to back. Reversible.
    #[inline]
    pub fn iter(&self) -> Range<T::Cursor> {
        Range::with_len(self.begin(), self.end(), self.len())
    }
}

impl<T> Clone for ConstList<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstList<'_, T> {}

impl<T> Default for ConstList<'_, T> {
    fn default() -> Self {
        Self::singular()
    }
}

impl<'p, T> Handle<'p> for ConstList<'p, T> {
    type Raw = ListKey;

    #[inline]
    fn from_raw(pool: &'p Pool, raw: ListKey) -> Self {
        match raw.get() {
            Some(key) => Self::new(RawList::from_key(pool, key)),
            None => Self::singular(),
        }
    }

    #[inline]
    fn to_raw(&self) -> ListKey {
        self.key().unwrap_or(ListKey::NONE)
    }

    #[inline]
    fn owner(&self) -> Option<&'p Pool> {
        self.raw.map(|raw| raw.pool())
    }
}

impl<'p, T: Element<'p>> IntoIterator for ConstList<'p, T> {
    type Item = T;
    type IntoIter = Range<T::Cursor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'p, T: Element<'p>> IntoIterator for &ConstList<'p, T> {
    type Item = T;
    type IntoIter = Range<T::Cursor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// List
// ============================================================================

/// Mutable handle to a pool-owned list of `T`.
///
/// Derefs to [`ConstList`] for the read-only surface. Mutation goes through
/// `&self`: the list lives in the pool, and every copy of the handle names
/// the same list.
pub struct List<'p, T> {
    inner: ConstList<'p, T>,
}

impl<'p, T> List<'p, T> {
    /// Returns a handle bound to no list.
    #[inline]
    pub const fn singular() -> Self {
        Self {
            inner: ConstList::singular(),
        }
    }

    /// Binds a handle to an existing raw list.
    #[inline]
    pub const fn new(raw: RawList<'p>) -> Self {
        Self {
            inner: ConstList::new(raw),
        }
    }

    /// Allocates an empty list in `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the pool cannot fit the list header.
    pub fn create(pool: &'p Pool) -> Result<Self> {
        Ok(Self::new(RawList::create(pool)?))
    }

    /// Regains mutable access through a read-only handle.
    ///
    /// # Caution
    ///
    /// Nothing checks that the caller is entitled to mutate the list. Code
    /// that handed out a `ConstList` may rely on the list not changing under
    /// it, and widening its handle breaks that expectation silently.
    ///
    /// Widening is sound when the caller created the list itself (or was
    /// handed a `List` for it elsewhere) and only narrowed it to store or
    /// pass it around, for example a `List<ConstList<T>>` of rows the caller
    /// owns. Do not widen a `ConstList` received from code that expects its
    /// list to stay unchanged.
    ///
    /// Memory safety does not depend on this: a wrongly widened handle can
    /// change elements another reader sees, and invalidate that reader's
    /// cursors, but cannot touch records outside the pool.
    #[inline]
    pub fn from_const_unchecked(list: ConstList<'p, T>) -> Self {
        Self { inner: list }
    }

    /// Returns a read-only copy of this handle.
    #[inline]
    pub fn as_const(&self) -> ConstList<'p, T> {
        self.inner
    }

    /// Forgets every element. O(1).
    ///
    /// Nodes are not reclaimed; they stay in the pool until it is reset or
    /// dropped.
    ///
    /// # Panics
    ///
    /// Panics if the handle is singular.
    pub fn clear(&self) {
        self.inner.bound().clear();
    }
}

impl<'p, T: Element<'p>> List<'p, T> {
    /// Appends `value` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the pool cannot fit another node.
    ///
    /// # Panics
    ///
    /// Panics if `value` is a handle into a different pool.
    pub fn push_back(&self, value: T) -> Result<()> {
        let raw = self.inner.bound();
        raw.push_back(slot_for(raw, &value))?;
        Ok(())
    }

    /// Prepends `value` at the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the pool cannot fit another node.
    ///
    /// # Panics
    ///
    /// Panics if `value` is a handle into a different pool.
    pub fn push_front(&self, value: T) -> Result<()> {
        let raw = self.inner.bound();
        raw.push_front(slot_for(raw, &value))?;
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn pop_back(&self) -> Result<T> {
        let raw = self.inner.bound();
        let word = raw.pop_back()?;
        Ok(T::from_slot(raw.pool(), word))
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn pop_front(&self) -> Result<T> {
        let raw = self.inner.bound();
        let word = raw.pop_front()?;
        Ok(T::from_slot(raw.pool(), word))
    }
}

/// Slot of `value` for storage in `raw`.
///
/// A handle's raw value is a key into its own pool and reads back through
/// the list's pool, so the two must be the same pool.
fn slot_for<'p, T: Element<'p>>(raw: RawList<'p>, value: &T) -> crate::Word {
    if let Some(owner) = value.slot_pool() {
        assert!(
            ptr::eq(owner, raw.pool()),
            "list element belongs to a different pool"
        );
    }
    value.to_slot()
}

impl<'p, T> Deref for List<'p, T> {
    type Target = ConstList<'p, T>;

    #[inline]
    fn deref(&self) -> &ConstList<'p, T> {
        &self.inner
    }
}

impl<T> Clone for List<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for List<'_, T> {}

impl<T> Default for List<'_, T> {
    fn default() -> Self {
        Self::singular()
    }
}

impl<'p, T> From<List<'p, T>> for ConstList<'p, T> {
    #[inline]
    fn from(list: List<'p, T>) -> Self {
        list.inner
    }
}

impl<'p, T> Handle<'p> for List<'p, T> {
    type Raw = ListKey;

    #[inline]
    fn from_raw(pool: &'p Pool, raw: ListKey) -> Self {
        Self {
            inner: ConstList::from_raw(pool, raw),
        }
    }

    #[inline]
    fn to_raw(&self) -> ListKey {
        self.inner.to_raw()
    }

    #[inline]
    fn owner(&self) -> Option<&'p Pool> {
        self.inner.owner()
    }
}

impl<'p, T: Element<'p>> IntoIterator for List<'p, T> {
    type Item = T;
    type IntoIter = Range<T::Cursor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'p, T: Element<'p>> IntoIterator for &List<'p, T> {
    type Item = T;
    type IntoIter = Range<T::Cursor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// ListHandle
// ============================================================================

/// Implemented by both list handle types.
///
/// Lets generic code accept either handle and read through it.
///
/// ```
/// use nexus_pool_list::{ListHandle, List, Pool};
///
/// fn total<'p, L: ListHandle<'p, Value = usize>>(list: L) -> usize {
///     list.as_const().iter().sum()
/// }
///
/// let pool = Pool::new();
/// let list: List<usize> = List::create(&pool).unwrap();
/// list.push_back(4).unwrap();
/// list.push_back(5).unwrap();
///
/// assert_eq!(total(list), 9);
/// assert_eq!(total(list.as_const()), 9);
/// ```
pub trait ListHandle<'p>: Copy {
    /// Element type of the list.
    type Value;

    /// Returns a read-only handle to the same list.
    fn as_const(&self) -> ConstList<'p, Self::Value>;
}

impl<'p, T> ListHandle<'p> for ConstList<'p, T> {
    type Value = T;

    #[inline]
    fn as_const(&self) -> ConstList<'p, T> {
        *self
    }
}

impl<'p, T> ListHandle<'p> for List<'p, T> {
    type Value = T;

    #[inline]
    fn as_const(&self) -> ConstList<'p, T> {
        self.inner
    }
}

// ============================================================================
// Identity comparison
// ============================================================================

impl<T> PartialEq for ConstList<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for ConstList<'_, T> {}

impl<T> PartialOrd for ConstList<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Singular handles order before bound ones.
impl<T> Ord for ConstList<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<T> Hash for ConstList<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> PartialEq for List<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Eq for List<'_, T> {}

impl<T> PartialOrd for List<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for List<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<T> Hash for List<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<'p, T> PartialEq<List<'p, T>> for ConstList<'p, T> {
    #[inline]
    fn eq(&self, other: &List<'p, T>) -> bool {
        *self == other.inner
    }
}

impl<'p, T> PartialEq<ConstList<'p, T>> for List<'p, T> {
    #[inline]
    fn eq(&self, other: &ConstList<'p, T>) -> bool {
        self.inner == *other
    }
}

impl<'p, T> PartialOrd<List<'p, T>> for ConstList<'p, T> {
    #[inline]
    fn partial_cmp(&self, other: &List<'p, T>) -> Option<Ordering> {
        Some(self.cmp(&other.inner))
    }
}

impl<'p, T> PartialOrd<ConstList<'p, T>> for List<'p, T> {
    #[inline]
    fn partial_cmp(&self, other: &ConstList<'p, T>) -> Option<Ordering> {
        Some(self.inner.cmp(other))
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn fmt_key(key: Option<ListKey>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match key {
        Some(key) => write!(f, "List[{}]", key.as_usize()),
        None => f.write_str("List[singular]"),
    }
}

impl<T> fmt::Display for ConstList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_key(self.key(), f)
    }
}

impl<T> fmt::Display for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_key(self.key(), f)
    }
}

impl<'p, T: Element<'p> + fmt::Debug> fmt::Debug for ConstList<'p, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_singular() {
            return f.write_str("List[singular]");
        }
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'p, T: Element<'p> + fmt::Debug> fmt::Debug for List<'p, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, PointerIter};

    fn values<'p>(list: ConstList<'p, usize>) -> Vec<usize> {
        list.iter().collect()
    }

    #[test]
    fn push_back_keeps_order() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();

        for v in [1, 2, 3] {
            list.push_back(v).unwrap();
        }

        assert_eq!(list.len(), 3);
        assert_eq!(values(list.as_const()), vec![1, 2, 3]);
        assert_eq!(list.iter().size_hint(), (3, Some(3)));
    }

    #[test]
    fn push_front_reverses_and_ends_match() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();

        for v in [1, 2, 3] {
            list.push_front(v).unwrap();
        }

        assert_eq!(values(list.as_const()), vec![3, 2, 1]);
        assert_eq!(list.front(), Ok(3));
        assert_eq!(list.back(), Ok(1));
    }

    #[test]
    fn pop_front_shrinks() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();

        for v in [10, 20, 30] {
            list.push_back(v).unwrap();
        }

        assert_eq!(list.pop_front(), Ok(10));
        assert_eq!(values(list.as_const()), vec![20, 30]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_back(), Ok(30));
        assert_eq!(list.front(), Ok(20));
    }

    #[test]
    fn front_and_back_on_empty() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();

        let err = list.front().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Empty);
        assert_eq!(list.back(), Err(Error::Empty { op: "back" }));
    }

    #[test]
    fn pop_on_empty_propagates() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();

        assert_eq!(list.pop_back(), Err(Error::Empty { op: "pop_back" }));
        assert_eq!(list.pop_front(), Err(Error::Empty { op: "pop_front" }));
    }

    #[test]
    fn clear_then_push() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();

        list.push_back(5).unwrap();
        list.push_back(6).unwrap();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());

        list.push_back(7).unwrap();
        assert_eq!(values(list.as_const()), vec![7]);
    }

    #[test]
    fn copies_share_the_list() {
        let pool = Pool::new();
        let a: List<usize> = List::create(&pool).unwrap();
        let b = a;
        let view = ConstList::from(a);

        b.push_back(1).unwrap();
        a.push_back(2).unwrap();

        assert_eq!(view.len(), 2);
        assert_eq!(values(view), vec![1, 2]);
        assert_eq!(a, b);
        assert_eq!(view, a);
        assert_eq!(a, view);
    }

    #[test]
    fn unchecked_widening_mutates_same_list() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();
        let view = list.as_const();

        let widened = List::from_const_unchecked(view);
        widened.push_back(9).unwrap();

        assert_eq!(list.back(), Ok(9));
        assert_eq!(widened, list);
    }

    #[test]
    fn distinct_lists_compare_by_identity() {
        let pool = Pool::new();
        let a: List<usize> = List::create(&pool).unwrap();
        let b: List<usize> = List::create(&pool).unwrap();

        assert_ne!(a, b);
        assert!(a < b);
        assert!(ConstList::<usize>::singular() < a.as_const());
        assert_ne!(a.end(), b.end());
    }

    #[test]
    fn singular_handle() {
        let list = ConstList::<usize>::singular();

        assert!(list.is_singular());
        assert!(!list.is_valid());
        assert_eq!(list, ConstList::default());
        assert_eq!(list.key(), None);
        assert_eq!(list.to_string(), "List[singular]");
    }

    #[test]
    #[should_panic(expected = "singular list handle")]
    fn singular_len_panics() {
        let list = List::<usize>::singular();
        let _ = list.len();
    }

    #[test]
    fn reverse_cursors() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();
        for v in [1, 2, 3] {
            list.push_back(v).unwrap();
        }

        let mut it = list.rbegin();
        let mut seen = Vec::new();
        while it != list.rend() {
            seen.push(it.get());
            it.increment();
        }
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn cursor_identity_for_raw_elements() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();
        list.push_back(1).unwrap();

        let begin: PointerIter<'_, usize> = list.begin();
        assert_eq!(begin.node(), list.raw().and_then(|raw| raw.head()));
        assert_eq!(begin.successor(), list.end());
    }

    #[test]
    fn pointer_elements() {
        let pool = Pool::new();
        let items = [10u32, 20, 30];
        let list: List<*const u32> = List::create(&pool).unwrap();

        for item in &items {
            list.push_back(item as *const u32).unwrap();
        }

        let read: Vec<u32> = list.iter().map(|p| unsafe { *p }).collect();
        assert_eq!(read, vec![10, 20, 30]);
    }

    #[test]
    fn list_of_lists_rebuilds_handles() {
        let pool = Pool::new();
        let outer: List<List<usize>> = List::create(&pool).unwrap();
        let inner: List<usize> = List::create(&pool).unwrap();

        outer.push_back(inner).unwrap();
        outer.push_back(List::singular()).unwrap();

        let first = outer.front().unwrap();
        assert_eq!(first, inner);
        first.push_back(42).unwrap();
        assert_eq!(inner.front(), Ok(42));

        assert!(outer.back().unwrap().is_singular());
    }

    #[test]
    fn handle_from_another_pool_is_rejected() {
        let home = Pool::new();
        let other = Pool::new();
        let outer: List<List<usize>> = List::create(&home).unwrap();
        let stranger: List<usize> = List::create(&other).unwrap();
        stranger.push_back(1).unwrap();

        let pushed = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = outer.push_back(stranger);
        }));
        assert!(pushed.is_err());

        let pushed = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = outer.push_front(List::from_const_unchecked(stranger.as_const()));
        }));
        assert!(pushed.is_err());

        assert!(outer.is_empty());
        assert_eq!(home.node_count(), 0);
        assert_eq!(stranger.len(), 1);
    }

    #[test]
    #[should_panic(expected = "different pool")]
    fn foreign_const_handle_panics() {
        let home = Pool::new();
        let other = Pool::new();
        let rows: List<ConstList<usize>> = List::create(&home).unwrap();
        let row: List<usize> = List::create(&other).unwrap();

        let _ = rows.push_back(row.as_const());
    }

    #[test]
    fn formatting() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();
        list.push_back(1).unwrap();
        list.push_back(2).unwrap();

        assert_eq!(list.to_string(), "List[0]");
        assert_eq!(format!("{:?}", list), "[1, 2]");
        assert_eq!(format!("{:?}", List::<usize>::singular()), "List[singular]");
    }

    #[test]
    fn handle_round_trip() {
        let pool = Pool::new();
        let list: List<usize> = List::create(&pool).unwrap();

        let key = list.to_raw();
        let back = ConstList::<usize>::from_raw(&pool, key);
        assert_eq!(back, list);

        let none = ConstList::<usize>::from_raw(&pool, ListKey::NONE);
        assert!(none.is_singular());
    }
}

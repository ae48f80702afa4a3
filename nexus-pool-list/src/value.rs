//! Mapping typed values onto the opaque node slot.
//!
//! Two kinds of element live in a list:
//!
//! ```text
//! RawValue  - pointer-sized value stored as-is    (usize, isize, *const T, *mut T)
//! Handle    - small object rebuilt from a raw value on every read
//!             (ConstList, List, or any user handle type)
//! ```
//!
//! [`Element`] ties each kind to its cursor type: raw values are read
//! through [`PointerIter`], handles through [`ValueIter`] layered on a
//! `PointerIter` of the handle's raw type.

use crate::iter::{ListCursor, PointerIter, ValueIter};
use crate::{Key, ListKey, Pool, Word};

/// A pointer-sized value that can be stored directly in a node.
///
/// `from_word(v.into_word())` must give back `v`.
pub trait RawValue: Copy {
    /// Converts the value into the node slot representation.
    fn into_word(self) -> Word;

    /// Rebuilds the value from a node slot.
    fn from_word(word: Word) -> Self;
}

impl RawValue for usize {
    #[inline]
    fn into_word(self) -> Word {
        self
    }

    #[inline]
    fn from_word(word: Word) -> Self {
        word
    }
}

impl RawValue for isize {
    #[inline]
    fn into_word(self) -> Word {
        self as Word
    }

    #[inline]
    fn from_word(word: Word) -> Self {
        word as isize
    }
}

// Pointers round-trip through the exposed-provenance API so the address read
// back from a node may be dereferenced by the caller.
impl<T> RawValue for *const T {
    #[inline]
    fn into_word(self) -> Word {
        self.expose_provenance()
    }

    #[inline]
    fn from_word(word: Word) -> Self {
        core::ptr::with_exposed_provenance(word)
    }
}

impl<T> RawValue for *mut T {
    #[inline]
    fn into_word(self) -> Word {
        self.expose_provenance()
    }

    #[inline]
    fn from_word(word: Word) -> Self {
        core::ptr::with_exposed_provenance_mut(word)
    }
}

impl RawValue for ListKey {
    #[inline]
    fn into_word(self) -> Word {
        self.as_usize()
    }

    #[inline]
    fn from_word(word: Word) -> Self {
        if word == ListKey::NONE.as_usize() {
            ListKey::NONE
        } else {
            ListKey::from_usize(word)
        }
    }
}

/// A cheap value type that reduces to a [`RawValue`].
///
/// Handles are stored as their raw value and rebuilt on every read, so
/// `from_raw` must be O(1) and free of side effects.
///
/// # Example
///
/// ```
/// use nexus_pool_list::{Handle, List, Pool};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Port(usize);
///
/// impl<'p> Handle<'p> for Port {
///     type Raw = usize;
///
///     fn from_raw(_pool: &'p Pool, raw: usize) -> Self {
///         Port(raw)
///     }
///
///     fn to_raw(&self) -> usize {
///         self.0
///     }
/// }
///
/// let pool = Pool::new();
/// let ports: List<Port> = List::create(&pool).unwrap();
/// ports.push_back(Port(80)).unwrap();
/// ports.push_back(Port(443)).unwrap();
///
/// assert_eq!(ports.back(), Ok(Port(443)));
/// ```
pub trait Handle<'p>: Sized {
    /// Raw value the handle is stored as.
    type Raw: RawValue;

    /// Rebuilds a handle from its raw value.
    ///
    /// `pool` is the pool that owns the list being read, for handles that
    /// address records inside it.
    fn from_raw(pool: &'p Pool, raw: Self::Raw) -> Self;

    /// Reduces the handle to its raw value.
    fn to_raw(&self) -> Self::Raw;

    /// Returns the pool the raw value addresses records in, if any.
    ///
    /// A handle whose raw value is a key into a pool must return that pool.
    /// Lists refuse to store such a handle unless the pools match, since the
    /// key would name a different record once read back through another
    /// pool.
    #[inline]
    fn owner(&self) -> Option<&'p Pool> {
        None
    }
}

/// An element type a list can hold, with its cursor strategy.
///
/// Implemented for every [`RawValue`] listed above (cursor: [`PointerIter`])
/// and for every [`Handle`] (cursor: [`ValueIter`]).
pub trait Element<'p>: Sized {
    /// Cursor type produced by `begin()`/`end()` of a list of `Self`.
    type Cursor: ListCursor<'p, Item = Self>;

    /// Converts the element into a node slot.
    fn to_slot(&self) -> Word;

    /// Rebuilds the element from a node slot of a list in `pool`.
    fn from_slot(pool: &'p Pool, word: Word) -> Self;

    /// Returns the pool the element's value is only meaningful in.
    ///
    /// `None` means the slot can be stored in a list of any pool.
    #[inline]
    fn slot_pool(&self) -> Option<&'p Pool> {
        None
    }
}

macro_rules! impl_raw_element {
    ($($ty:ty),*) => {
        $(
            impl<'p> Element<'p> for $ty {
                type Cursor = PointerIter<'p, $ty>;

                #[inline]
                fn to_slot(&self) -> Word {
                    self.into_word()
                }

                #[inline]
                fn from_slot(_pool: &'p Pool, word: Word) -> Self {
                    <$ty as RawValue>::from_word(word)
                }
            }
        )*
    };
}

impl_raw_element!(usize, isize);

impl<'p, T: 'p> Element<'p> for *const T {
    type Cursor = PointerIter<'p, *const T>;

    #[inline]
    fn to_slot(&self) -> Word {
        self.into_word()
    }

    #[inline]
    fn from_slot(_pool: &'p Pool, word: Word) -> Self {
        <*const T as RawValue>::from_word(word)
    }
}

impl<'p, T: 'p> Element<'p> for *mut T {
    type Cursor = PointerIter<'p, *mut T>;

    #[inline]
    fn to_slot(&self) -> Word {
        self.into_word()
    }

    #[inline]
    fn from_slot(_pool: &'p Pool, word: Word) -> Self {
        <*mut T as RawValue>::from_word(word)
    }
}

impl<'p, H: Handle<'p>> Element<'p> for H {
    type Cursor = ValueIter<'p, H>;

    #[inline]
    fn to_slot(&self) -> Word {
        self.to_raw().into_word()
    }

    #[inline]
    fn from_slot(pool: &'p Pool, word: Word) -> Self {
        H::from_raw(pool, H::Raw::from_word(word))
    }

    #[inline]
    fn slot_pool(&self) -> Option<&'p Pool> {
        self.owner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_roundtrip() {
        assert_eq!(<usize as RawValue>::from_word(42usize.into_word()), 42);
        assert_eq!(<isize as RawValue>::from_word((-7isize).into_word()), -7);
    }

    #[test]
    fn pointers_roundtrip() {
        let value = 5u64;
        let ptr: *const u64 = &value;
        let back = <*const u64 as RawValue>::from_word(ptr.into_word());

        assert_eq!(back, ptr);
        assert_eq!(unsafe { *back }, 5);
    }

    #[test]
    fn list_key_sentinel_roundtrips() {
        assert_eq!(ListKey::from_word(ListKey::NONE.into_word()), ListKey::NONE);

        let key = ListKey::from_usize(12);
        assert_eq!(ListKey::from_word(key.into_word()), key);
    }

    #[test]
    fn elements_map_to_slots() {
        let pool = Pool::new();

        assert_eq!(7usize.to_slot(), 7);
        assert_eq!(<isize as Element>::from_slot(&pool, (-3isize).to_slot()), -3);
        assert!(7usize.slot_pool().is_none());
    }
}

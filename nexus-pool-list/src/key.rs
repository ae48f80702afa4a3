//! Keys addressing records inside a [`Pool`](crate::Pool).
//!
//! Nodes and list headers are stored in pool-owned arrays and addressed by
//! 32-bit indices. Each key type reserves `u32::MAX` as a `NONE` sentinel so
//! links can be stored without wrapping them in `Option`.

use core::fmt;

/// Trait for index types with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use nexus_pool_list::{Key, NodeKey};
///
/// let key = NodeKey::from_usize(5);
/// assert!(key.is_some());
/// assert!(NodeKey::NONE.is_none());
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel value representing "no key".
    const NONE: Self;

    /// Largest index representable by this key type.
    const MAX_INDEX: usize;

    /// Creates a key from a `usize` index.
    fn from_usize(val: usize) -> Self;

    /// Returns the key as a `usize` index.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel into `None`.
    #[inline]
    fn get(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! define_key {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl Key for $name {
            const NONE: Self = $name(u32::MAX);
            const MAX_INDEX: usize = (u32::MAX - 1) as usize;

            #[inline]
            fn from_usize(val: usize) -> Self {
                debug_assert!(val <= Self::MAX_INDEX, "index out of key range");
                $name(val as u32)
            }

            #[inline]
            fn as_usize(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_none() {
                    write!(f, concat!($label, "(NONE)"))
                } else {
                    write!(f, concat!($label, "({})"), self.0)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

define_key!(
    /// Index of a [`Node`](crate::Node) inside its pool.
    NodeKey,
    "NodeKey"
);

define_key!(
    /// Index of a list header inside its pool.
    ///
    /// A `ListKey` is also the raw value that list handles reduce to when
    /// they are themselves stored in a list.
    ListKey,
    "ListKey"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_key_basics() {
        let key = NodeKey::from_usize(42);
        assert!(!key.is_none());
        assert!(key.is_some());
        assert_eq!(key.as_usize(), 42);
        assert_eq!(key.get(), Some(key));

        assert!(NodeKey::NONE.is_none());
        assert_eq!(NodeKey::NONE.get(), None);
    }

    #[test]
    fn from_usize_roundtrip() {
        for i in [0usize, 1, 100, 1000, u16::MAX as usize, ListKey::MAX_INDEX] {
            assert_eq!(ListKey::from_usize(i).as_usize(), i);
        }
    }

    #[test]
    fn debug_marks_sentinel() {
        assert_eq!(format!("{:?}", NodeKey::NONE), "NodeKey(NONE)");
        assert_eq!(format!("{}", ListKey::from_usize(3)), "ListKey(3)");
    }
}

//! Error types for pool allocation and list access.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by pools, raw lists, and list handles.
///
/// Only two boundaries are checked: the pool running out of budget, and
/// reading an element out of an empty list. Everything else (dereferencing a
/// sentinel position, using a singular handle) is a precondition violation
/// and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The pool could not satisfy an allocation.
    #[error("pool exhausted: requested {requested} bytes, {remaining} remaining")]
    Alloc {
        /// Bytes the failed allocation asked for.
        requested: usize,
        /// Bytes left in the pool's budget at the time of the request.
        remaining: usize,
    },

    /// An element was requested from an empty list.
    #[error("{op} on empty list")]
    Empty {
        /// Operation that found the list empty, e.g. `"front"`.
        op: &'static str,
    },
}

/// Tag identifying the kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Alloc`].
    Alloc,
    /// See [`Error::Empty`].
    Empty,
}

impl Error {
    /// Returns the kind tag of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Alloc { .. } => ErrorKind::Alloc,
            Error::Empty { .. } => ErrorKind::Empty,
        }
    }

    /// Returns `true` for [`Error::Alloc`].
    #[inline]
    pub const fn is_alloc(&self) -> bool {
        matches!(self, Error::Alloc { .. })
    }

    /// Returns `true` for [`Error::Empty`].
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Error::Empty { .. })
    }
}

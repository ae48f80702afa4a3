//! List node: two links and an opaque pointer-sized slot.

use crate::{Key, NodeKey};

/// Opaque pointer-sized data slot stored in every node.
///
/// Values enter and leave a list through [`RawValue`](crate::RawValue),
/// which defines how a typed value maps onto a word.
pub type Word = usize;

/// A node in a pool-owned list.
///
/// Nodes carry no behavior. They are carved from a [`Pool`](crate::Pool) on
/// push and are never freed individually; the pool releases them in bulk.
///
/// Links use [`NodeKey::NONE`] at the true head (`prev`) and true tail
/// (`next`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Key of the previous node, or `NONE` at the head.
    pub prev: NodeKey,
    /// Key of the next node, or `NONE` at the tail.
    pub next: NodeKey,
    /// Opaque payload.
    pub data: Word,
}

impl Node {
    /// An unlinked node with a zero payload.
    ///
    /// Iterator sentinels start out in this state.
    pub const EMPTY: Node = Node {
        prev: NodeKey::NONE,
        next: NodeKey::NONE,
        data: 0,
    };

    /// Creates an unlinked node holding `data`.
    #[inline]
    pub const fn new(data: Word) -> Self {
        Self {
            prev: NodeKey::NONE,
            next: NodeKey::NONE,
            data,
        }
    }

    /// Returns `true` if neither link is set.
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::EMPTY
    }
}

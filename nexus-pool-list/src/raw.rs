//! Untyped list over pool-owned nodes.
//!
//! [`RawList`] is the bookkeeping layer: a header (head, tail, length) that
//! lives in a [`Pool`] plus the operations that relink nodes. Values are
//! opaque [`Word`]s; typing happens one layer up in
//! [`ConstList`](crate::ConstList) and [`List`](crate::List).
//!
//! The list never frees a node. Popped and cleared nodes stay in the pool as
//! garbage until the pool itself is reset or dropped.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use tracing::trace;

use crate::pool::ListHeader;
use crate::{Error, Key, ListKey, Node, NodeKey, Pool, Result, Word};

/// A reference to a list header inside a pool.
///
/// `RawList` is `Copy`; every copy addresses the same header. Two values are
/// equal when they name the same header of the same pool.
///
/// # Example
///
/// ```
/// use nexus_pool_list::{Pool, RawList};
///
/// let pool = Pool::new();
/// let raw = RawList::create(&pool).unwrap();
///
/// raw.push_back(1).unwrap();
/// raw.push_front(0).unwrap();
/// assert_eq!(raw.len(), 2);
///
/// assert_eq!(raw.pop_back(), Ok(1));
/// assert_eq!(raw.pop_front(), Ok(0));
/// assert!(raw.pop_front().unwrap_err().is_empty());
/// ```
#[derive(Clone, Copy)]
pub struct RawList<'p> {
    pool: &'p Pool,
    key: ListKey,
}

impl<'p> RawList<'p> {
    /// Allocates an empty list header from `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the pool cannot fit the header.
    pub fn create(pool: &'p Pool) -> Result<Self> {
        let key = pool.alloc_list()?;
        trace!(list = %key, "list created");
        Ok(Self { pool, key })
    }

    /// Rebinds a key previously obtained from [`key`](Self::key).
    ///
    /// # Panics
    ///
    /// Operations on the result panic if `key` was not allocated by `pool`.
    #[inline]
    pub fn from_key(pool: &'p Pool, key: ListKey) -> Self {
        Self { pool, key }
    }

    /// Returns the header key.
    #[inline]
    pub fn key(&self) -> ListKey {
        self.key
    }

    /// Returns the owning pool.
    #[inline]
    pub fn pool(&self) -> &'p Pool {
        self.pool
    }

    /// Returns the number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.header().len
    }

    /// Returns `true` if the list has no elements. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.header().head.is_none()
    }

    /// Returns the first node's key, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<NodeKey> {
        self.header().head.get()
    }

    /// Returns the last node's key, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<NodeKey> {
        self.header().tail.get()
    }

    /// Returns a copy of the node at `key`.
    #[inline]
    pub fn node(&self, key: NodeKey) -> Node {
        self.pool.node(key)
    }

    // ========================================================================
    // Push (allocates a node)
    // ========================================================================

    /// Appends `data` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the pool cannot carve a new node. The
    /// list is unchanged on failure.
    pub fn push_back(&self, data: Word) -> Result<NodeKey> {
        let mut header = self.header();
        let key = self.pool.alloc_node(Node {
            prev: header.tail,
            next: NodeKey::NONE,
            data,
        })?;

        if header.tail.is_some() {
            self.pool.set_next(header.tail, key);
        } else {
            header.head = key;
        }

        header.tail = key;
        header.len += 1;
        self.set_header(header);
        Ok(key)
    }

    /// Prepends `data` at the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the pool cannot carve a new node. The
    /// list is unchanged on failure.
    pub fn push_front(&self, data: Word) -> Result<NodeKey> {
        let mut header = self.header();
        let key = self.pool.alloc_node(Node {
            prev: NodeKey::NONE,
            next: header.head,
            data,
        })?;

        if header.head.is_some() {
            self.pool.set_prev(header.head, key);
        } else {
            header.tail = key;
        }

        header.head = key;
        header.len += 1;
        self.set_header(header);
        Ok(key)
    }

    // ========================================================================
    // Pop (unlinks, never frees)
    // ========================================================================

    /// Unlinks the last node and returns its data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn pop_back(&self) -> Result<Word> {
        let mut header = self.header();
        if header.tail.is_none() {
            trace!(list = %self.key, "pop_back on empty list");
            return Err(Error::Empty { op: "pop_back" });
        }

        let key = header.tail;
        let node = self.pool.node(key);

        if node.prev.is_some() {
            self.pool.set_next(node.prev, NodeKey::NONE);
        } else {
            header.head = NodeKey::NONE;
        }

        header.tail = node.prev;
        header.len -= 1;
        self.set_header(header);
        self.detach(key);
        Ok(node.data)
    }

    /// Unlinks the first node and returns its data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn pop_front(&self) -> Result<Word> {
        let mut header = self.header();
        if header.head.is_none() {
            trace!(list = %self.key, "pop_front on empty list");
            return Err(Error::Empty { op: "pop_front" });
        }

        let key = header.head;
        let node = self.pool.node(key);

        if node.next.is_some() {
            self.pool.set_prev(node.next, NodeKey::NONE);
        } else {
            header.tail = NodeKey::NONE;
        }

        header.head = node.next;
        header.len -= 1;
        self.set_header(header);
        self.detach(key);
        Ok(node.data)
    }

    /// Forgets every element. O(1).
    ///
    /// Only the header is reset; the nodes stay in the pool until it is
    /// released.
    pub fn clear(&self) {
        trace!(list = %self.key, len = self.len(), "list cleared");
        self.set_header(ListHeader::EMPTY);
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn header(&self) -> ListHeader {
        self.pool.header(self.key)
    }

    #[inline]
    fn set_header(&self, header: ListHeader) {
        self.pool.set_header(self.key, header);
    }

    /// Clears a removed node's links so stale positions cannot walk back in.
    #[inline]
    fn detach(&self, key: NodeKey) {
        self.pool.set_prev(key, NodeKey::NONE);
        self.pool.set_next(key, NodeKey::NONE);
    }

    #[inline]
    fn identity(&self) -> (usize, ListKey) {
        (self.pool as *const Pool as usize, self.key)
    }
}

impl PartialEq for RawList<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for RawList<'_> {}

impl PartialOrd for RawList<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RawList<'_> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl Hash for RawList<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for RawList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawList")
            .field("key", &self.key)
            .field("len", &self.len())
            .finish()
    }
}

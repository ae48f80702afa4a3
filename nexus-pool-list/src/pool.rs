//! Bump-style memory pool that owns every node and list header.
//!
//! A [`Pool`] hands out records and never frees them one at a time. Memory is
//! released in bulk when the pool is [`reset`](Pool::reset) or dropped, and
//! the borrow checker refuses both while any list handle or iterator still
//! borrows the pool.
//!
//! Records are addressed by index ([`NodeKey`], [`ListKey`]) rather than by
//! pointer, so the pool may grow its backing arrays freely.
//!
//! # Budget
//!
//! A pool may carry a byte limit. Every allocation is charged against it
//! through [`Pool::allocate`], and a request that does not fit fails with
//! [`Error::Alloc`]. Unbounded pools only fail when the key space runs out.
//!
//! # Example
//!
//! ```
//! use nexus_pool_list::{List, Pool};
//!
//! let pool = Pool::builder().limit_bytes(4096).build();
//! let list: List<usize> = List::create(&pool).unwrap();
//! list.push_back(7).unwrap();
//!
//! assert_eq!(pool.node_count(), 1);
//! assert!(pool.remaining_bytes().unwrap() < 4096);
//! ```

use core::cell::{Cell, RefCell};
use core::fmt;
use core::mem;

use tracing::debug;

use crate::{Error, Key, ListKey, Node, NodeKey, Result};

/// Bookkeeping record for one list: head, tail, and element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListHeader {
    pub(crate) head: NodeKey,
    pub(crate) tail: NodeKey,
    pub(crate) len: usize,
}

impl ListHeader {
    pub(crate) const EMPTY: ListHeader = ListHeader {
        head: NodeKey::NONE,
        tail: NodeKey::NONE,
        len: 0,
    };
}

/// Bytes charged for one node.
pub const NODE_BYTES: usize = mem::size_of::<Node>();

/// Bytes charged for one list header.
pub const LIST_BYTES: usize = mem::size_of::<ListHeader>();

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`Pool`].
///
/// # Example
///
/// ```
/// use nexus_pool_list::Pool;
///
/// let pool = Pool::builder()
///     .limit_bytes(1 << 20)
///     .node_capacity(1024)
///     .list_capacity(16)
///     .build();
///
/// assert_eq!(pool.limit(), Some(1 << 20));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PoolBuilder {
    limit: Option<usize>,
    node_capacity: usize,
    list_capacity: usize,
}

impl PoolBuilder {
    /// Caps the total bytes the pool may hand out. Default: unbounded.
    pub fn limit_bytes(mut self, bytes: usize) -> Self {
        self.limit = Some(bytes);
        self
    }

    /// Pre-reserves room for this many nodes. Does not count against the limit.
    pub fn node_capacity(mut self, nodes: usize) -> Self {
        self.node_capacity = nodes;
        self
    }

    /// Pre-reserves room for this many list headers.
    pub fn list_capacity(mut self, lists: usize) -> Self {
        self.list_capacity = lists;
        self
    }

    /// Builds the pool.
    pub fn build(self) -> Pool {
        debug!(
            limit = ?self.limit,
            node_capacity = self.node_capacity,
            list_capacity = self.list_capacity,
            "pool created"
        );

        Pool {
            nodes: RefCell::new(Vec::with_capacity(self.node_capacity)),
            lists: RefCell::new(Vec::with_capacity(self.list_capacity)),
            limit: self.limit,
            allocated: Cell::new(0),
        }
    }
}

// =============================================================================
// Pool
// =============================================================================

/// Arena owning list nodes and list headers.
///
/// All methods take `&self`; the pool uses `Cell`/`RefCell` internally and is
/// therefore not `Sync`. Access from several threads must be serialized by
/// the caller (or avoided entirely).
pub struct Pool {
    nodes: RefCell<Vec<Node>>,
    lists: RefCell<Vec<ListHeader>>,
    /// Byte budget, `None` for unbounded.
    limit: Option<usize>,
    /// Bytes handed out since creation or the last reset.
    allocated: Cell<usize>,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Creates an unbounded pool.
    pub fn new() -> Self {
        PoolBuilder::default().build()
    }

    /// Creates a pool that hands out at most `bytes` bytes.
    pub fn with_limit(bytes: usize) -> Self {
        PoolBuilder::default().limit_bytes(bytes).build()
    }

    /// Returns a builder.
    pub fn builder() -> PoolBuilder {
        PoolBuilder::default()
    }

    /// Returns the byte limit, or `None` if unbounded.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the number of bytes handed out so far.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.allocated.get()
    }

    /// Returns the bytes left in the budget, or `None` if unbounded.
    #[inline]
    pub fn remaining_bytes(&self) -> Option<usize> {
        self.limit.map(|limit| limit - self.allocated.get())
    }

    /// Returns the number of nodes carved from this pool.
    ///
    /// Cleared and popped nodes still count until the pool is reset.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// Returns the number of list headers carved from this pool.
    #[inline]
    pub fn list_count(&self) -> usize {
        self.lists.borrow().len()
    }

    /// Charges `size` bytes against the budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the request does not fit. Nothing is
    /// charged on failure.
    pub fn allocate(&self, size: usize) -> Result<()> {
        let allocated = self.allocated.get();

        if let Some(limit) = self.limit {
            let remaining = limit - allocated;
            if size > remaining {
                debug!(requested = size, remaining, "pool exhausted");
                return Err(Error::Alloc {
                    requested: size,
                    remaining,
                });
            }
        }

        let Some(total) = allocated.checked_add(size) else {
            let remaining = usize::MAX - allocated;
            debug!(requested = size, remaining, "pool exhausted");
            return Err(Error::Alloc {
                requested: size,
                remaining,
            });
        };

        self.allocated.set(total);
        Ok(())
    }

    /// Releases every node and list header in one step.
    ///
    /// Requires exclusive access, so no handle into this pool can survive it.
    pub fn reset(&mut self) {
        debug!(
            nodes = self.nodes.get_mut().len(),
            lists = self.lists.get_mut().len(),
            bytes = self.allocated.get(),
            "pool reset"
        );

        self.nodes.get_mut().clear();
        self.lists.get_mut().clear();
        self.allocated.set(0);
    }

    // ========================================================================
    // Record access (crate internal)
    // ========================================================================

    pub(crate) fn alloc_node(&self, node: Node) -> Result<NodeKey> {
        let index = self.nodes.borrow().len();
        if index > NodeKey::MAX_INDEX {
            return Err(self.key_space_exhausted(NODE_BYTES));
        }

        self.allocate(NODE_BYTES)?;
        self.nodes.borrow_mut().push(node);
        Ok(NodeKey::from_usize(index))
    }

    pub(crate) fn alloc_list(&self) -> Result<ListKey> {
        let index = self.lists.borrow().len();
        if index > ListKey::MAX_INDEX {
            return Err(self.key_space_exhausted(LIST_BYTES));
        }

        self.allocate(LIST_BYTES)?;
        self.lists.borrow_mut().push(ListHeader::EMPTY);
        Ok(ListKey::from_usize(index))
    }

    /// Returns a copy of the node at `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` was not handed out by this pool.
    #[inline]
    pub fn node(&self, key: NodeKey) -> Node {
        *self
            .nodes
            .borrow()
            .get(key.as_usize())
            .expect("invalid node key")
    }

    #[inline]
    pub(crate) fn set_next(&self, key: NodeKey, next: NodeKey) {
        self.nodes.borrow_mut()[key.as_usize()].next = next;
    }

    #[inline]
    pub(crate) fn set_prev(&self, key: NodeKey, prev: NodeKey) {
        self.nodes.borrow_mut()[key.as_usize()].prev = prev;
    }

    #[inline]
    pub(crate) fn header(&self, key: ListKey) -> ListHeader {
        *self
            .lists
            .borrow()
            .get(key.as_usize())
            .expect("invalid list key")
    }

    #[inline]
    pub(crate) fn set_header(&self, key: ListKey, header: ListHeader) {
        self.lists.borrow_mut()[key.as_usize()] = header;
    }

    fn key_space_exhausted(&self, requested: usize) -> Error {
        debug!(requested, "pool key space exhausted");
        Error::Alloc {
            requested,
            remaining: 0,
        }
    }
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("nodes", &self.node_count())
            .field("lists", &self.list_count())
            .field("allocated", &self.allocated.get())
            .field("limit", &self.limit)
            .finish()
    }
}

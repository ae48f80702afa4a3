//! Copyable handles over pool-owned doubly linked lists.
//!
//! Every node and list header lives in a [`Pool`]. Lists are reached through
//! small `Copy` handles with pointer semantics: copying a handle never copies
//! elements, and all copies see the same list.
//!
//! # Layers
//!
//! ```text
//! Pool              - owns nodes and headers, byte budget, bulk release
//! RawList           - untyped head/tail/len bookkeeping over pool nodes
//! ConstList / List  - typed read-only / mutable handles
//! PointerIter       - bidirectional cursor with per-cursor sentinels
//! ValueIter         - cursor that rebuilds Handle values on each read
//! ```
//!
//! Elements are pointer-sized. Integers and raw pointers are stored as-is;
//! anything implementing [`Handle`] (including the list handles themselves)
//! is stored as its raw value and rebuilt on read. [`Element`] picks the
//! cursor type for each.
//!
//! # Quick Start
//!
//! ```
//! use nexus_pool_list::{List, Pool};
//!
//! let pool = Pool::new();
//! let list: List<usize> = List::create(&pool).unwrap();
//!
//! list.push_back(1).unwrap();
//! list.push_back(2).unwrap();
//! list.push_front(0).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.front(), Ok(0));
//! assert_eq!(list.back(), Ok(2));
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```
//!
//! # Cursors
//!
//! `begin()`/`end()` return cursors that can step past either end and come
//! back. Walking off an end parks the cursor on its own sentinel:
//!
//! ```
//! use nexus_pool_list::{Cursor, List, Pool};
//!
//! let pool = Pool::new();
//! let list: List<usize> = List::create(&pool).unwrap();
//! list.push_back(10).unwrap();
//! list.push_back(20).unwrap();
//!
//! let mut it = list.end();
//! it.decrement();
//! assert_eq!(it.get(), 20);
//! it.increment();
//! assert_eq!(it, list.end());
//! ```
//!
//! # Memory
//!
//! Nodes are never freed one at a time. `pop_*` unlinks and `clear` forgets,
//! but the memory stays in the pool until [`Pool::reset`] or drop, neither of
//! which compiles while a handle borrows the pool:
//!
//! ```compile_fail
//! use nexus_pool_list::{List, Pool};
//!
//! let mut pool = Pool::new();
//! let list: List<usize> = List::create(&pool).unwrap();
//! pool.reset();
//! list.push_back(1).unwrap();
//! ```
//!
//! # Errors
//!
//! Two conditions are reported as [`Error`]: the pool running out of budget
//! ([`Error::Alloc`]) and reading from an empty list ([`Error::Empty`]).
//! Using a singular handle or dereferencing a sentinel panics.

#![warn(missing_docs)]

mod error;
mod key;
mod node;
mod pool;
mod raw;
mod value;

pub mod iter;
pub mod list;

pub use error::{Error, ErrorKind, Result};
pub use iter::{Cursor, ListCursor, PointerIter, Range, Rev, ValueIter};
pub use key::{Key, ListKey, NodeKey};
pub use list::{ConstList, List, ListHandle};
pub use node::{Node, Word};
pub use pool::{LIST_BYTES, NODE_BYTES, Pool, PoolBuilder};
pub use raw::RawList;
pub use value::{Element, Handle, RawValue};

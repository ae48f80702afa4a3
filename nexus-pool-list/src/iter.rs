//! Bidirectional cursors with sentinel positions.
//!
//! A cursor walks a list one step at a time and can step off either end:
//!
//! ```text
//!   before-the-beginning    head  ...  tail    past-the-end
//!          [B]  <------->   [n0] <-> .. [nk]  <------->  [E]
//!        (cursor-local)                              (cursor-local)
//! ```
//!
//! The two sentinels are owned by the cursor, not the list. Stepping off an
//! end parks the cursor on the matching sentinel and records the node it
//! came from in the sentinel's link, so stepping back returns to that node.
//! Because the sentinels are per-cursor, copying a cursor re-homes them:
//! a copy parked on a sentinel addresses its own sentinel, never the
//! original's. Sentinels never take part in the list's own links.
//!
//! Two cursors are equal when they address the same list and either the
//! same node or the same kind of sentinel. `end()` of one list therefore
//! never equals `end()` of another.
//!
//! ```text
//! PointerIter<T>  - reads the node slot as a RawValue T
//! ValueIter<H>    - PointerIter<H::Raw>, rebuilding a Handle H on each read
//! Rev<C>          - reverse adapter, reads the element before its base
//! Range<C>        - [front, back) pair, a std Iterator in both directions
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::{Handle, Key, Node, NodeKey, Pool, RawList, RawValue, Word};

// ============================================================================
// Traits
// ============================================================================

/// A bidirectional position in a list.
///
/// Stepping past either end is allowed and parks the cursor on a sentinel.
/// Stepping further in the same direction is a no-op. Only
/// [`get`](Cursor::get) requires the cursor to be on a real node.
pub trait Cursor: Clone + PartialEq {
    /// Element type produced by [`get`](Cursor::get).
    type Item;

    /// Moves one step toward the tail.
    fn increment(&mut self);

    /// Moves one step toward the head.
    fn decrement(&mut self);

    /// Reads the element at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is parked on a sentinel.
    fn get(&self) -> Self::Item;

    /// Returns the node the cursor addresses, or `None` on a sentinel.
    fn node(&self) -> Option<NodeKey>;

    /// Returns an incremented copy.
    #[inline]
    fn successor(&self) -> Self {
        let mut next = self.clone();
        next.increment();
        next
    }

    /// Returns a decremented copy.
    #[inline]
    fn predecessor(&self) -> Self {
        let mut prev = self.clone();
        prev.decrement();
        prev
    }
}

/// A cursor that can be bound to a list.
pub trait ListCursor<'p>: Cursor {
    /// Binds a cursor to `list` at `node`.
    ///
    /// `None` binds it past the end with no recorded predecessor, which is
    /// where `begin()` of an empty list sits.
    fn at(list: RawList<'p>, node: Option<NodeKey>) -> Self;

    /// Returns the list this cursor walks, or `None` for a default cursor.
    fn list(&self) -> Option<RawList<'p>>;
}

// ============================================================================
// PointerIter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Node(NodeKey),
    BeforeTheBeginning,
    PastTheEnd,
}

/// Cursor that reads each node's slot as a [`RawValue`].
///
/// This is the cursor of lists whose element type is stored as-is
/// (integers and raw pointers). A default-constructed `PointerIter` is
/// singular: it is parked past the end of no list and only compares equal
/// to other default cursors.
pub struct PointerIter<'p, T> {
    list: Option<RawList<'p>>,
    before_the_beginning: Node,
    past_the_end: Node,
    at: Position,
    _marker: PhantomData<fn() -> T>,
}

impl<'p, T> PointerIter<'p, T> {
    /// Returns `true` when parked before the first element.
    #[inline]
    pub fn is_before_the_beginning(&self) -> bool {
        self.at == Position::BeforeTheBeginning
    }

    /// Returns `true` when parked past the last element.
    #[inline]
    pub fn is_past_the_end(&self) -> bool {
        self.at == Position::PastTheEnd
    }

    #[inline]
    fn pool(&self) -> &'p Pool {
        self.list.expect("singular list iterator").pool()
    }

    fn step_forward(&mut self) {
        let (from, current) = match self.at {
            Position::PastTheEnd => return,
            Position::BeforeTheBeginning => (NodeKey::NONE, self.before_the_beginning),
            Position::Node(key) => (key, self.pool().node(key)),
        };

        if current.next.is_some() {
            self.at = Position::Node(current.next);
        } else {
            self.past_the_end.prev = from;
            self.at = Position::PastTheEnd;
        }
    }

    fn step_back(&mut self) {
        let (from, current) = match self.at {
            Position::BeforeTheBeginning => return,
            Position::PastTheEnd => (NodeKey::NONE, self.past_the_end),
            Position::Node(key) => (key, self.pool().node(key)),
        };

        if current.prev.is_some() {
            self.at = Position::Node(current.prev);
        } else {
            self.before_the_beginning.next = from;
            self.at = Position::BeforeTheBeginning;
        }
    }

    fn word(&self) -> Word {
        match self.at {
            Position::Node(key) => self.pool().node(key).data,
            _ => panic!("dereferenced a list iterator outside the list"),
        }
    }
}

impl<'p, T: RawValue> Cursor for PointerIter<'p, T> {
    type Item = T;

    #[inline]
    fn increment(&mut self) {
        self.step_forward();
    }

    #[inline]
    fn decrement(&mut self) {
        self.step_back();
    }

    #[inline]
    fn get(&self) -> T {
        T::from_word(self.word())
    }

    #[inline]
    fn node(&self) -> Option<NodeKey> {
        match self.at {
            Position::Node(key) => Some(key),
            _ => None,
        }
    }
}

impl<'p, T: RawValue> ListCursor<'p> for PointerIter<'p, T> {
    fn at(list: RawList<'p>, node: Option<NodeKey>) -> Self {
        Self {
            list: Some(list),
            before_the_beginning: Node::EMPTY,
            past_the_end: Node::EMPTY,
            at: node.map_or(Position::PastTheEnd, Position::Node),
            _marker: PhantomData,
        }
    }

    #[inline]
    fn list(&self) -> Option<RawList<'p>> {
        self.list
    }
}

impl<T> Clone for PointerIter<'_, T> {
    /// Copies the position onto fresh sentinels.
    ///
    /// Only the sentinel the source is parked on carries its link over.
    fn clone(&self) -> Self {
        let mut copy = Self {
            list: self.list,
            before_the_beginning: Node::EMPTY,
            past_the_end: Node::EMPTY,
            at: self.at,
            _marker: PhantomData,
        };

        match self.at {
            Position::BeforeTheBeginning => {
                copy.before_the_beginning.next = self.before_the_beginning.next;
            }
            Position::PastTheEnd => copy.past_the_end.prev = self.past_the_end.prev,
            Position::Node(_) => {}
        }

        copy
    }
}

impl<T> PartialEq for PointerIter<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list && self.at == other.at
    }
}

impl<T> Eq for PointerIter<'_, T> {}

impl<T> Default for PointerIter<'_, T> {
    fn default() -> Self {
        Self {
            list: None,
            before_the_beginning: Node::EMPTY,
            past_the_end: Node::EMPTY,
            at: Position::PastTheEnd,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for PointerIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerIter")
            .field("list", &self.list.map(|list| list.key()))
            .field("at", &self.at)
            .finish()
    }
}

// ============================================================================
// ValueIter
// ============================================================================

/// Cursor over a list of [`Handle`]s.
///
/// Wraps a [`PointerIter`] of the handle's raw type. Moves are delegated;
/// each read rebuilds a fresh handle from the stored raw value.
pub struct ValueIter<'p, H: Handle<'p>> {
    base: PointerIter<'p, H::Raw>,
}

impl<'p, H: Handle<'p>> ValueIter<'p, H> {
    /// Returns the underlying raw cursor.
    #[inline]
    pub fn base(&self) -> &PointerIter<'p, H::Raw> {
        &self.base
    }
}

impl<'p, H: Handle<'p>> Cursor for ValueIter<'p, H> {
    type Item = H;

    #[inline]
    fn increment(&mut self) {
        self.base.increment();
    }

    #[inline]
    fn decrement(&mut self) {
        self.base.decrement();
    }

    #[inline]
    fn get(&self) -> H {
        H::from_raw(self.base.pool(), self.base.get())
    }

    #[inline]
    fn node(&self) -> Option<NodeKey> {
        self.base.node()
    }
}

impl<'p, H: Handle<'p>> ListCursor<'p> for ValueIter<'p, H> {
    #[inline]
    fn at(list: RawList<'p>, node: Option<NodeKey>) -> Self {
        Self {
            base: PointerIter::at(list, node),
        }
    }

    #[inline]
    fn list(&self) -> Option<RawList<'p>> {
        self.base.list()
    }
}

impl<'p, H: Handle<'p>> Clone for ValueIter<'p, H> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
        }
    }
}

impl<'p, H: Handle<'p>> PartialEq for ValueIter<'p, H> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<'p, H: Handle<'p>> Eq for ValueIter<'p, H> {}

impl<'p, H: Handle<'p>> Default for ValueIter<'p, H> {
    fn default() -> Self {
        Self {
            base: PointerIter::default(),
        }
    }
}

impl<'p, H: Handle<'p>> fmt::Debug for ValueIter<'p, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueIter").field(&self.base).finish()
    }
}

// ============================================================================
// Rev
// ============================================================================

/// Reverse cursor adapter.
///
/// A `Rev` built on position `p` reads the element just before `p`, so
/// `Rev::new(end())` reads the last element and `Rev::new(begin())` is the
/// reverse end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rev<C> {
    base: C,
}

impl<C: Cursor> Rev<C> {
    /// Wraps `base`.
    #[inline]
    pub fn new(base: C) -> Self {
        Self { base }
    }

    /// Returns the wrapped forward cursor.
    #[inline]
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwraps into the forward cursor.
    #[inline]
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: Cursor> Cursor for Rev<C> {
    type Item = C::Item;

    #[inline]
    fn increment(&mut self) {
        self.base.decrement();
    }

    #[inline]
    fn decrement(&mut self) {
        self.base.increment();
    }

    #[inline]
    fn get(&self) -> C::Item {
        self.base.predecessor().get()
    }

    #[inline]
    fn node(&self) -> Option<NodeKey> {
        self.base.predecessor().node()
    }
}

// ============================================================================
// Range
// ============================================================================

/// A half-open `[front, back)` pair of cursors, iterated from either end.
///
/// Produced by [`ConstList::iter`](crate::ConstList::iter), which also
/// records the element count so `size_hint` is exact. Iteration stops when
/// the two cursors meet.
#[derive(Debug, Clone)]
pub struct Range<C> {
    front: C,
    back: C,
    remaining: Option<usize>,
}

impl<C: Cursor> Range<C> {
    /// Creates a range walking from `front` up to, not including, `back`.
    #[inline]
    pub fn new(front: C, back: C) -> Self {
        Self {
            front,
            back,
            remaining: None,
        }
    }

    /// Creates a range known to span `len` elements.
    #[inline]
    pub fn with_len(front: C, back: C, len: usize) -> Self {
        Self {
            front,
            back,
            remaining: Some(len),
        }
    }

    /// Returns the current `(front, back)` cursors.
    #[inline]
    pub fn bounds(&self) -> (&C, &C) {
        (&self.front, &self.back)
    }

    #[inline]
    fn consume(&mut self) {
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
        }
    }
}

impl<C: Cursor> Iterator for Range<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.increment();
        self.consume();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            _ if self.front == self.back => (0, Some(0)),
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl<C: Cursor> DoubleEndedIterator for Range<C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.decrement();
        self.consume();
        Some(self.back.get())
    }
}

impl<C: Cursor> core::iter::FusedIterator for Range<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of<'p>(pool: &'p Pool, values: &[usize]) -> RawList<'p> {
        let raw = RawList::create(pool).unwrap();
        for &v in values {
            raw.push_back(v).unwrap();
        }
        raw
    }

    fn begin<'p>(raw: RawList<'p>) -> PointerIter<'p, usize> {
        PointerIter::at(raw, raw.head())
    }

    fn end<'p>(raw: RawList<'p>) -> PointerIter<'p, usize> {
        match raw.tail() {
            Some(tail) => PointerIter::at(raw, Some(tail)).successor(),
            None => PointerIter::at(raw, None),
        }
    }

    #[test]
    fn forward_walk() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1, 2, 3]);

        let mut it = begin(raw);
        let mut seen = Vec::new();
        while it != end(raw) {
            seen.push(it.get());
            it.increment();
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn backward_walk_from_end() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1, 2, 3]);

        let mut it = end(raw);
        let mut seen = Vec::new();
        while it != begin(raw) {
            it.decrement();
            seen.push(it.get());
        }
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn sentinel_round_trips() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[7]);

        let begin = begin(raw);
        let end = end(raw);

        assert_eq!(begin.successor().predecessor(), begin);
        assert_eq!(end.predecessor().successor(), end);

        let before = begin.predecessor();
        assert!(before.is_before_the_beginning());
        assert_eq!(before.successor(), begin);
    }

    #[test]
    fn stepping_past_a_sentinel_is_a_noop() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1, 2]);

        let mut it = end(raw);
        it.increment();
        it.increment();
        assert_eq!(it, end(raw));
        it.decrement();
        assert_eq!(it.get(), 2);

        let mut it = begin(raw);
        it.decrement();
        it.decrement();
        it.increment();
        assert_eq!(it.get(), 1);
    }

    #[test]
    fn empty_list_begin_is_end() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[]);

        assert_eq!(begin(raw), end(raw));
        assert!(begin(raw).is_past_the_end());

        let mut it = end(raw);
        it.decrement();
        assert!(it.is_before_the_beginning());
        it.increment();
        assert_eq!(it, end(raw));
    }

    #[test]
    fn clone_rehomes_sentinel() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1, 2, 3]);

        let end = end(raw);
        let copy = end.clone();
        drop(end);

        assert_eq!(copy.predecessor().get(), 3);
    }

    #[test]
    fn copies_walk_independently() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1, 2, 3]);

        let mut a = begin(raw);
        let b = a.clone();
        a.increment();

        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn ends_of_different_lists_differ() {
        let pool = Pool::new();
        let x = list_of(&pool, &[]);
        let y = list_of(&pool, &[]);

        assert_ne!(end(x), end(y));
        assert_eq!(end(x), end(x));
    }

    #[test]
    fn default_cursor_is_inert() {
        let mut it = PointerIter::<usize>::default();
        it.increment();
        assert!(it.is_past_the_end());
        assert_eq!(it.node(), None);
        assert_eq!(it, PointerIter::default());
    }

    #[test]
    #[should_panic(expected = "outside the list")]
    fn get_on_sentinel_panics() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1]);
        end(raw).get();
    }

    #[test]
    fn rev_reads_predecessor() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1, 2, 3]);

        let mut it = Rev::new(end(raw));
        let rend = Rev::new(begin(raw));
        let mut seen = Vec::new();
        while it != rend {
            seen.push(it.get());
            it.increment();
        }
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn range_both_directions() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1, 2, 3, 4]);

        let forward: Vec<_> = Range::new(begin(raw), end(raw)).collect();
        assert_eq!(forward, vec![1, 2, 3, 4]);

        let backward: Vec<_> = Range::new(begin(raw), end(raw)).rev().collect();
        assert_eq!(backward, vec![4, 3, 2, 1]);

        let mut range = Range::new(begin(raw), end(raw));
        assert_eq!(range.next(), Some(1));
        assert_eq!(range.next_back(), Some(4));
        assert_eq!(range.next(), Some(2));
        assert_eq!(range.next_back(), Some(3));
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn range_size_hint() {
        let pool = Pool::new();
        let raw = list_of(&pool, &[1, 2, 3]);

        let open = Range::new(begin(raw), end(raw));
        assert_eq!(open.size_hint(), (0, None));

        let mut sized = Range::with_len(begin(raw), end(raw), raw.len());
        assert_eq!(sized.size_hint(), (3, Some(3)));
        sized.next();
        sized.next_back();
        assert_eq!(sized.size_hint(), (1, Some(1)));
        sized.next();
        assert_eq!(sized.size_hint(), (0, Some(0)));

        let empty = list_of(&pool, &[]);
        assert_eq!(Range::new(begin(empty), end(empty)).size_hint(), (0, Some(0)));
    }
}

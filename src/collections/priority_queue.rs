//! `PriorityQueue`: a binary heap ordered by a caller comparison, and
//! `KeyedPriorityQueue`, which caches a sort key per element.
//!
//! The heap is laid out 1-indexed over a `Vec`: position `i` lives at
//! `data[i - 1]`, its parent is `i / 2`, and its children are `2i` and
//! `2i + 1`.
//!
//! Time Complexity:
//! - Push: O(log n)
//! - Pop: O(log n)
//! - Peek: O(1)
//!
//! Neither queue supports decrease-key. Searches built on them use lazy
//! deletion instead: a superseded entry stays in the heap and is discarded
//! when it is popped.

use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Which end of the ordering the queue yields first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Smallest first (min-heap).
    #[default]
    Ascending,
    /// Largest first (max-heap).
    Descending,
}

impl Order {
    #[inline(always)]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Order::Ascending => ordering,
            Order::Descending => ordering.reverse(),
        }
    }
}

/// A priority queue implemented with a binary heap.
///
/// The element at the top is the one that compares lowest under the queue's
/// comparison (or highest, for [`Order::Descending`]).
pub struct PriorityQueue<T, C> {
    data: Vec<T>,
    compare: C,
    order: Order,
}

impl<T: Ord> PriorityQueue<T, fn(&T, &T) -> Ordering> {
    /// Creates an empty min-heap using `T`'s own ordering.
    pub fn new() -> Self {
        Self::with_compare(Order::Ascending, <T as Ord>::cmp)
    }

    /// Creates an empty heap using `T`'s own ordering in the given direction.
    pub fn with_order(order: Order) -> Self {
        Self::with_compare(order, <T as Ord>::cmp)
    }
}

impl<T: Ord> Default for PriorityQueue<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `compare`.
    pub fn with_compare(order: Order, compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
            order,
        }
    }

    /// Creates an empty heap ordered by `compare` with room for `capacity` elements.
    pub fn with_capacity_and_compare(capacity: usize, order: Order, compare: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
            order,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The direction this heap was built with.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len());
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    /// Returns [`Error::EmptyHeap`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T> {
        let last = self.data.len();
        if last == 0 {
            return Err(Error::EmptyHeap);
        }
        self.data.swap(0, last - 1);
        let item = self.data.pop().ok_or(Error::EmptyHeap)?;
        if !self.data.is_empty() {
            self.sift_down(1);
        }
        Ok(item)
    }

    /// Returns a reference to the top item.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over all elements in arbitrary order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Drains the heap, returning its elements in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    // `true` if the element at 1-based position `a` belongs above the one at `b`.
    #[inline(always)]
    fn before(&self, a: usize, b: usize) -> bool {
        let ordering = (self.compare)(&self.data[a - 1], &self.data[b - 1]);
        self.order.apply(ordering) == Ordering::Less
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self.before(pos, parent) {
                self.data.swap(pos - 1, parent - 1);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos;
            if left > len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right <= len && self.before(right, left) {
                child = right;
            }

            if self.before(child, pos) {
                self.data.swap(pos - 1, child - 1);
                pos = child;
            } else {
                break;
            }
        }
    }
}

impl<T, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("order", &self.order)
            .finish()
    }
}

/// A heap entry paired with the key it was ordered by when pushed.
struct Keyed<K, T> {
    key: K,
    value: T,
}

type KeyCompare<K, T> = fn(&Keyed<K, T>, &Keyed<K, T>) -> Ordering;

impl<K: Ord, T> Keyed<K, T> {
    fn cmp_key(a: &Self, b: &Self) -> Ordering {
        a.key.cmp(&b.key)
    }
}

/// A priority queue that derives each element's sort key once, at push time.
///
/// The key is stored next to the value, so mutating whatever the value was
/// derived from after the push cannot reorder entries already in the heap.
pub struct KeyedPriorityQueue<T, K, S> {
    heap: PriorityQueue<Keyed<K, T>, KeyCompare<K, T>>,
    selector: S,
}

impl<T, K, S> KeyedPriorityQueue<T, K, S>
where
    K: Ord,
    S: Fn(&T) -> K,
{
    /// Creates an empty min-heap keyed by `selector`.
    pub fn new(selector: S) -> Self {
        Self::with_order(Order::Ascending, selector)
    }

    /// Creates an empty heap keyed by `selector` in the given direction.
    pub fn with_order(order: Order, selector: S) -> Self {
        Self {
            heap: PriorityQueue::with_compare(order, Keyed::cmp_key as KeyCompare<K, T>),
            selector,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Computes `value`'s key and pushes both.
    pub fn push(&mut self, value: T) {
        let key = (self.selector)(&value);
        self.heap.push(Keyed { key, value });
    }

    /// Removes the top entry, returning the key it was pushed with and the value.
    ///
    /// # Errors
    /// Returns [`Error::EmptyHeap`] if the heap is empty.
    pub fn pop_with_key(&mut self) -> Result<(K, T)> {
        let Keyed { key, value } = self.heap.pop()?;
        Ok((key, value))
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    /// Returns [`Error::EmptyHeap`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.pop_with_key().map(|(_, value)| value)
    }

    /// Returns the cached key and the value at the top.
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.heap.peek().map(|entry| (&entry.key, &entry.value))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, K, S> fmt::Debug for KeyedPriorityQueue<T, K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedPriorityQueue")
            .field("len", &self.heap.len())
            .field("order", &self.heap.order())
            .finish()
    }
}

//! Multi-key ordering
//!
//! An ordering chain is built with [`SeqExt::order_by`](crate::seq::SeqExt::order_by)
//! and refined with [`OrderedSeq::then_by`]. Each refinement wraps the
//! previous chain in a new [`Level`], so the chain is a statically typed
//! linked list ending in [`Unordered`]. Nothing runs until the ordered
//! sequence is iterated; the [`SortEngine`] then snapshots the source,
//! computes every key once and sorts an index permutation.
//!
//! ```rust
//! use dynseq::SeqExt;
//!
//! let people = vec![("bob", 30), ("amy", 25), ("cat", 30)];
//! let ordered: Vec<_> = people
//!     .into_iter()
//!     .order_by_descending(|p| p.1)
//!     .then_by(|p| p.0)
//!     .into_iter()
//!     .collect();
//! assert_eq!(ordered, vec![("bob", 30), ("cat", 30), ("amy", 25)]);
//! ```

mod engine;

pub use engine::{SortEngine, SortStats};

use crate::containers::DynArray;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Comparer used by the key-only ordering methods
pub type NaturalOrder<K> = fn(&K, &K) -> Ordering;

/// Direction applied to one level of an ordering chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first
    Descending,
}

impl SortDirection {
    /// Apply this direction to a comparison result
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// One or more levels of an ordering chain over elements of type `T`.
pub trait OrderLevel<T> {
    /// Precomputed keys for every level of the chain
    type Keys;

    /// Compute keys for every element, outermost level first.
    fn compute_keys(&self, elements: &DynArray<T>) -> Self::Keys;

    /// Compare elements `a` and `b` by their precomputed keys.
    ///
    /// The primary level is consulted first; a later level only decides
    /// when every earlier level compares equal.
    fn compare_keys(&self, keys: &Self::Keys, a: usize, b: usize) -> Ordering;

    /// Number of keyed levels in the chain
    fn depth(&self) -> usize;
}

/// Terminator of every ordering chain; treats all elements as equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unordered;

impl<T> OrderLevel<T> for Unordered {
    type Keys = ();

    fn compute_keys(&self, _elements: &DynArray<T>) -> Self::Keys {}

    #[inline]
    fn compare_keys(&self, _keys: &(), _a: usize, _b: usize) -> Ordering {
        Ordering::Equal
    }

    fn depth(&self) -> usize {
        0
    }
}

/// A keyed ordering level wrapping the less significant `parent` chain.
///
/// `K` is the key type, `F` the key selector, `C` the comparer.
pub struct Level<K, F, C, P> {
    key: F,
    comparer: C,
    direction: SortDirection,
    parent: P,
    _key: PhantomData<fn() -> K>,
}

impl<K, F, C, P> Level<K, F, C, P> {
    /// Create a level on top of `parent`
    pub fn new(key: F, comparer: C, direction: SortDirection, parent: P) -> Self {
        Self {
            key,
            comparer,
            direction,
            parent,
            _key: PhantomData,
        }
    }

    /// Direction of this level
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The chain this level refines
    pub fn parent(&self) -> &P {
        &self.parent
    }
}

impl<K, F: Clone, C: Clone, P: Clone> Clone for Level<K, F, C, P> {
    fn clone(&self) -> Self {
        Self::new(
            self.key.clone(),
            self.comparer.clone(),
            self.direction,
            self.parent.clone(),
        )
    }
}

impl<K, F, C, P: fmt::Debug> fmt::Debug for Level<K, F, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("key_type", &std::any::type_name::<K>())
            .field("direction", &self.direction)
            .field("parent", &self.parent)
            .finish()
    }
}

impl<T, K, F, C, P> OrderLevel<T> for Level<K, F, C, P>
where
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
    P: OrderLevel<T>,
{
    type Keys = (P::Keys, DynArray<K>);

    fn compute_keys(&self, elements: &DynArray<T>) -> Self::Keys {
        let mut own = DynArray::with_capacity(elements.len());
        own.extend(elements.iter().map(&self.key));
        (self.parent.compute_keys(elements), own)
    }

    fn compare_keys(&self, keys: &Self::Keys, a: usize, b: usize) -> Ordering {
        match self.parent.compare_keys(&keys.0, a, b) {
            Ordering::Equal => self.direction.apply((self.comparer)(&keys.1[a], &keys.1[b])),
            decided => decided,
        }
    }

    fn depth(&self) -> usize {
        self.parent.depth() + 1
    }
}

/// A deferred, ordered view of a source sequence.
///
/// Created by [`SeqExt::order_by`](crate::seq::SeqExt::order_by) and its
/// siblings. Iterate it to run the sort.
pub struct OrderedSeq<I, L> {
    source: I,
    chain: L,
}

impl<I, L> OrderedSeq<I, L>
where
    I: Iterator,
{
    pub(crate) fn new(source: I, chain: L) -> Self {
        Self { source, chain }
    }

    /// Refine ties of the current chain by ascending `key`
    pub fn then_by<K, F>(self, key: F) -> OrderedSeq<I, Level<K, F, NaturalOrder<K>, L>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.then_by_with(key, K::cmp as NaturalOrder<K>, SortDirection::Ascending)
    }

    /// Refine ties of the current chain by descending `key`
    pub fn then_by_descending<K, F>(self, key: F) -> OrderedSeq<I, Level<K, F, NaturalOrder<K>, L>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.then_by_with(key, K::cmp as NaturalOrder<K>, SortDirection::Descending)
    }

    /// Refine ties of the current chain with a custom comparer
    pub fn then_by_with<K, F, C>(
        self,
        key: F,
        comparer: C,
        direction: SortDirection,
    ) -> OrderedSeq<I, Level<K, F, C, L>>
    where
        F: Fn(&I::Item) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        OrderedSeq {
            source: self.source,
            chain: Level::new(key, comparer, direction, self.chain),
        }
    }

    /// The ordering chain
    pub fn chain(&self) -> &L {
        &self.chain
    }
}

impl<I, L> fmt::Debug for OrderedSeq<I, L>
where
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSeq")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

impl<I, L> IntoIterator for OrderedSeq<I, L>
where
    I: Iterator,
    L: OrderLevel<I::Item>,
{
    type Item = I::Item;
    type IntoIter = Sorted<I, L>;

    fn into_iter(self) -> Sorted<I, L> {
        Sorted {
            state: SortedState::Pending {
                source: self.source,
                chain: self.chain,
            },
            stats: None,
        }
    }
}

enum SortedState<I: Iterator, L> {
    Pending { source: I, chain: L },
    Ready { slots: Vec<Option<I::Item>>, order: crate::containers::IntoIter<usize> },
    Done,
}

/// Iterator over an ordered sequence.
///
/// The source is consumed and sorted on the first call to `next`.
pub struct Sorted<I: Iterator, L> {
    state: SortedState<I, L>,
    stats: Option<SortStats>,
}

impl<I, L> Sorted<I, L>
where
    I: Iterator,
    L: OrderLevel<I::Item>,
{
    /// Statistics of the sort, once it has run
    pub fn stats(&self) -> Option<&SortStats> {
        self.stats.as_ref()
    }

    fn run_sort(&mut self) {
        if let SortedState::Pending { source, chain } =
            std::mem::replace(&mut self.state, SortedState::Done)
        {
            let elements: DynArray<I::Item> = source.collect();
            let mut engine = SortEngine::new();
            let order = engine.sort_indices(&elements, &chain);
            self.stats = Some(engine.stats().clone());
            self.state = SortedState::Ready {
                slots: elements.into_slots(),
                order: order.into_iter(),
            };
        }
    }
}

impl<I, L> Iterator for Sorted<I, L>
where
    I: Iterator,
    L: OrderLevel<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if matches!(self.state, SortedState::Pending { .. }) {
            self.run_sort();
        }
        match &mut self.state {
            SortedState::Ready { slots, order } => {
                let index = order.next()?;
                slots[index].take()
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            SortedState::Pending { source, .. } => source.size_hint(),
            SortedState::Ready { order, .. } => order.size_hint(),
            SortedState::Done => (0, Some(0)),
        }
    }
}

impl<I, L> FusedIterator for Sorted<I, L>
where
    I: Iterator,
    L: OrderLevel<I::Item>,
{
}

impl<I: Iterator, L> fmt::Debug for Sorted<I, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            SortedState::Pending { .. } => "pending",
            SortedState::Ready { .. } => "ready",
            SortedState::Done => "done",
        };
        f.debug_struct("Sorted")
            .field("state", &state)
            .field("stats", &self.stats)
            .finish()
    }
}

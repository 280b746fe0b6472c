//! Sequence operators
//!
//! Lazy adapters ([`map`], [`filter`], [`take`], ...) defer all work until
//! the result is pulled, while aggregations ([`fold`], [`min`], [`first`],
//! ...) consume the source eagerly. Both accept anything implementing
//! [`IntoIterator`], including [`DynArray`] and references to it.
//!
//! ```rust
//! use dynseq::seq::{self, SeqExt};
//! use dynseq::DynArray;
//!
//! let arr: DynArray<i32> = (1..=10).collect();
//! let evens = seq::filter(&arr, |x| **x % 2 == 0);
//! let squares = seq::map(evens, |x| x * x).to_dyn_array();
//! assert_eq!(squares.to_string(), "[4, 16, 36, 64, 100]");
//!
//! assert_eq!(seq::fold_with(&arr, 0, |acc, x| acc + x), 55);
//! assert!(seq::fold(Vec::<i32>::new(), |a, b| a + b).is_err());
//! ```

mod adapters;
mod aggregate;

pub use adapters::{
    Enumerate, Filter, FilterIndexed, Map, Skip, SkipWhile, Take, TakeWhile, enumerate, filter,
    filter_indexed, map, skip, skip_while, take, take_while,
};
pub use aggregate::{
    all, any, first, first_match, first_match_or, fold, fold_with, max, max_by_key, min,
    min_by_key,
};

use crate::containers::DynArray;
use crate::order::{Level, NaturalOrder, OrderedSeq, SortDirection, Unordered};
use std::cmp::Ordering;

/// Ordering and materialization for any [`IntoIterator`].
pub trait SeqExt: IntoIterator + Sized {
    /// Order by ascending `key`
    fn order_by<K, F>(
        self,
        key: F,
    ) -> OrderedSeq<Self::IntoIter, Level<K, F, NaturalOrder<K>, Unordered>>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        self.order_by_with(key, K::cmp as NaturalOrder<K>, SortDirection::Ascending)
    }

    /// Order by descending `key`
    fn order_by_descending<K, F>(
        self,
        key: F,
    ) -> OrderedSeq<Self::IntoIter, Level<K, F, NaturalOrder<K>, Unordered>>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        self.order_by_with(key, K::cmp as NaturalOrder<K>, SortDirection::Descending)
    }

    /// Order by `key` using a custom comparer
    fn order_by_with<K, F, C>(
        self,
        key: F,
        comparer: C,
        direction: SortDirection,
    ) -> OrderedSeq<Self::IntoIter, Level<K, F, C, Unordered>>
    where
        F: Fn(&Self::Item) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        OrderedSeq::new(
            self.into_iter(),
            Level::new(key, comparer, direction, Unordered),
        )
    }

    /// Collect every element into a [`DynArray`]
    fn to_dyn_array(self) -> DynArray<Self::Item> {
        self.into_iter().collect()
    }
}

impl<I: IntoIterator> SeqExt for I {}

//! Eager aggregations over sequences
//!
//! These consume as much of the source as they need and return a single
//! value. Operations with no meaningful result on an empty source return
//! [`DynSeqError::InvalidOperation`].

use crate::error::{DynSeqError, Result};

fn empty_sequence() -> DynSeqError {
    DynSeqError::invalid_operation("sequence contains no elements")
}

/// Reduce a sequence using its first element as the seed.
///
/// # Errors
///
/// Returns [`DynSeqError::InvalidOperation`] when `source` is empty.
pub fn fold<I, F>(source: I, mut reducer: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut iter = source.into_iter();
    let mut acc = iter.next().ok_or_else(empty_sequence)?;
    for item in iter {
        acc = reducer(acc, item);
    }
    Ok(acc)
}

/// Reduce a sequence starting from `seed`; an empty source yields `seed`.
pub fn fold_with<I, A, F>(source: I, seed: A, mut reducer: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    let mut acc = seed;
    for item in source {
        acc = reducer(acc, item);
    }
    acc
}

/// Smallest element; the first one wins on ties.
///
/// Elements unordered with themselves (NaN) are skipped; the result is one
/// of them only when the source holds nothing else.
pub fn min<I>(source: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    extreme_by(source, |candidate, best| candidate < best)
}

/// Largest element; the first one wins on ties.
///
/// Unordered elements are skipped as in [`min`].
pub fn max<I>(source: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    extreme_by(source, |candidate, best| candidate > best)
}

/// Element with the smallest key; the first one wins on ties.
pub fn min_by_key<I, K, F>(source: I, key: F) -> Result<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    extreme_by_key(source, key, |candidate, best| candidate < best)
}

/// Element with the largest key; the first one wins on ties.
pub fn max_by_key<I, K, F>(source: I, key: F) -> Result<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    extreme_by_key(source, key, |candidate, best| candidate > best)
}

#[inline]
fn is_unordered<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

fn extreme_by<I, P>(source: I, replaces: P) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
    P: Fn(&I::Item, &I::Item) -> bool,
{
    let mut iter = source.into_iter();
    let mut best = iter.next().ok_or_else(empty_sequence)?;
    for item in iter {
        let reseed = is_unordered(&best) && !is_unordered(&item);
        if reseed || replaces(&item, &best) {
            best = item;
        }
    }
    Ok(best)
}

fn extreme_by_key<I, K, F, P>(source: I, mut key: F, replaces: P) -> Result<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
    P: Fn(&K, &K) -> bool,
{
    let mut iter = source.into_iter();
    let mut best = iter.next().ok_or_else(empty_sequence)?;
    let mut best_key = key(&best);
    for item in iter {
        let item_key = key(&item);
        let reseed = is_unordered(&best_key) && !is_unordered(&item_key);
        if reseed || replaces(&item_key, &best_key) {
            best = item;
            best_key = item_key;
        }
    }
    Ok(best)
}

/// First element, or `None` for an empty source.
pub fn first<I: IntoIterator>(source: I) -> Option<I::Item> {
    source.into_iter().next()
}

/// First element satisfying `predicate`.
pub fn first_match<I, P>(source: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().find(|item| predicate(item))
}

/// First element satisfying `predicate`, or `default` when none does.
pub fn first_match_or<I, P>(source: I, predicate: P, default: I::Item) -> I::Item
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    first_match(source, predicate).unwrap_or(default)
}

/// Whether every element satisfies `predicate`; `true` for an empty source.
pub fn all<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().all(|item| predicate(&item))
}

/// Whether any element satisfies `predicate`; `false` for an empty source.
pub fn any<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().any(|item| predicate(&item))
}

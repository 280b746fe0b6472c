//! Lazy sequence adapters
//!
//! Every adapter owns its source iterator and does nothing until pulled.
//! An adapter can only be restarted by calling its constructor again on a
//! fresh source.

use std::iter::FusedIterator;

/// Create an adapter that projects every element through `selector`
pub fn map<I, F, R>(source: I, selector: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    Map {
        iter: source.into_iter(),
        selector,
    }
}

/// Create an adapter that yields only elements satisfying `predicate`
pub fn filter<I, P>(source: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        iter: source.into_iter(),
        predicate,
    }
}

/// Create an adapter whose predicate also sees the element's position in the source
pub fn filter_indexed<I, P>(source: I, predicate: P) -> FilterIndexed<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    FilterIndexed {
        iter: source.into_iter(),
        predicate,
        index: 0,
    }
}

/// Create an adapter that yields at most `count` elements
pub fn take<I>(source: I, count: usize) -> Take<I::IntoIter>
where
    I: IntoIterator,
{
    Take {
        iter: source.into_iter(),
        remaining: count,
    }
}

/// Create an adapter that yields elements until `predicate` first fails
pub fn take_while<I, P>(source: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile {
        iter: source.into_iter(),
        predicate,
        done: false,
    }
}

/// Create an adapter that drops the first `count` elements
pub fn skip<I>(source: I, count: usize) -> Skip<I::IntoIter>
where
    I: IntoIterator,
{
    Skip {
        iter: source.into_iter(),
        pending: count,
    }
}

/// Create an adapter that drops elements while `predicate` holds, then yields the rest
pub fn skip_while<I, P>(source: I, predicate: P) -> SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    SkipWhile {
        iter: source.into_iter(),
        predicate,
        skipping: true,
    }
}

/// Create an adapter that pairs every element with its position
pub fn enumerate<I>(source: I) -> Enumerate<I::IntoIter>
where
    I: IntoIterator,
{
    Enumerate {
        iter: source.into_iter(),
        index: 0,
    }
}

/// Lazy projection, see [`map`]
#[derive(Debug, Clone)]
pub struct Map<I, F> {
    iter: I,
    selector: F,
}

impl<I, F, R> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        self.iter.next().map(&mut self.selector)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Lazy filter, see [`filter`]
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Lazy position-aware filter, see [`filter_indexed`]
#[derive(Debug, Clone)]
pub struct FilterIndexed<I, P> {
    iter: I,
    predicate: P,
    index: usize,
}

impl<I, P> Iterator for FilterIndexed<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Lazy prefix of fixed length, see [`take`]
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        // Never pulls the source once the quota is spent
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }
}

/// Lazy prefix bounded by a predicate, see [`take_while`]
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Lazy suffix after a fixed count, see [`skip`]
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: I,
    pending: usize,
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            self.iter.next()?;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|upper| upper.saturating_sub(self.pending)),
        )
    }
}

/// Lazy suffix after a predicate first fails, see [`skip_while`]
#[derive(Debug, Clone)]
pub struct SkipWhile<I, P> {
    iter: I,
    predicate: P,
    skipping: bool,
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.skipping {
            self.skipping = false;
            for item in self.iter.by_ref() {
                if !(self.predicate)(&item) {
                    return Some(item);
                }
            }
            return None;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.iter.size_hint().1;
        if self.skipping {
            (0, upper)
        } else {
            self.iter.size_hint()
        }
    }
}

/// Lazy position pairing, see [`enumerate`]
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    iter: I,
    index: usize,
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (I::Item, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((item, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

//! DynArray: growable array with an explicit amortized growth policy
//!
//! The backing store is a boxed slice of slots whose length is the capacity.
//! Live elements occupy slots `[0, len)`; every other slot holds `None`, so a
//! removed or truncated element is released immediately instead of lingering
//! in the buffer.

use crate::config::{Config, GrowthConfig};
use crate::error::{DynSeqError, Result, check_bounds, check_range};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

/// Growable array with amortized growth and index-checked access
///
/// Capacity only grows, either through [`reserve`](Self::reserve) (exact) or
/// through the [`GrowthConfig`] policy when [`push`](Self::push) or
/// [`insert`](Self::insert) find the buffer full. The one exception is
/// [`resize`](Self::resize) to zero, which releases the storage.
///
/// # Examples
///
/// ```rust
/// use dynseq::DynArray;
///
/// let mut arr = DynArray::new();
/// arr.push(1);
/// arr.push(3);
/// arr.insert(1, 2)?;
/// assert_eq!(arr.to_string(), "[1, 2, 3]");
/// assert_eq!(arr.remove_at(0)?, 1);
/// assert_eq!(arr.len(), 2);
/// # Ok::<(), dynseq::DynSeqError>(())
/// ```
pub struct DynArray<T> {
    storage: Box<[Option<T>]>,
    len: usize,
    growth: GrowthConfig,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> DynArray<T> {
    /// Create a new empty DynArray without allocating
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: empty_slots(0),
            len: 0,
            growth: GrowthConfig::default(),
        }
    }

    /// Create an empty DynArray with exactly `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: empty_slots(capacity),
            len: 0,
            growth: GrowthConfig::default(),
        }
    }

    /// Create an empty DynArray that grows according to `growth`
    ///
    /// # Errors
    ///
    /// Returns `DynSeqError::Configuration` if the policy does not validate.
    pub fn with_growth(growth: GrowthConfig) -> Result<Self> {
        growth.validate()?;
        Ok(Self {
            storage: empty_slots(0),
            len: 0,
            growth,
        })
    }

    /// Create a DynArray of `len` elements, each a clone of `fill`
    pub fn from_elem(len: usize, fill: T) -> Self
    where
        T: Clone,
    {
        let mut arr = Self::with_capacity(len);
        arr.resize(len, fill);
        arr
    }

    /// Create a DynArray of `len` elements produced by successive calls to `generator`
    pub fn from_fn<F>(len: usize, generator: F) -> Self
    where
        F: FnMut() -> T,
    {
        let mut arr = Self::with_capacity(len);
        arr.resize_with(len, generator);
        arr
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Growth policy in effect
    #[inline]
    pub fn growth(&self) -> &GrowthConfig {
        &self.growth
    }

    /// Set the capacity; values not above the current capacity are ignored
    #[inline]
    pub fn set_capacity(&mut self, capacity: usize) {
        self.reserve(capacity);
    }

    /// Ensure the array has exactly `capacity` slots if it currently has fewer
    ///
    /// Unlike growth triggered by `push`, this allocates the requested
    /// amount and no more.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        self.reallocate(capacity);
    }

    fn reallocate(&mut self, new_capacity: usize) {
        log::trace!(
            "DynArray reallocating {} -> {} slots ({} live)",
            self.capacity(),
            new_capacity,
            self.len
        );

        let mut storage = empty_slots(new_capacity);
        for (dst, src) in storage.iter_mut().zip(self.storage[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.storage = storage;
    }

    #[inline]
    fn grow(&mut self) {
        let next = self.growth.next_capacity(self.capacity());
        self.reallocate(next);
    }

    fn release(&mut self) {
        log::trace!("DynArray releasing {} slots", self.capacity());
        self.storage = empty_slots(0);
        self.len = 0;
    }

    /// Resize to `new_len`, filling new slots with clones of `fill`
    pub fn resize(&mut self, new_len: usize, fill: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || fill.clone());
    }

    /// Resize to `new_len`, filling new slots with `T::default()`
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resize to `new_len`, filling new slots from `generator`
    ///
    /// - `new_len == len()` does nothing.
    /// - `new_len == 0` drops every element and releases the storage.
    /// - `new_len < len()` drops the trailing elements and keeps the capacity.
    /// - `new_len > len()` reserves exactly `new_len` slots if needed, then fills.
    pub fn resize_with<F>(&mut self, new_len: usize, mut generator: F)
    where
        F: FnMut() -> T,
    {
        if new_len == self.len {
            return;
        }

        if new_len == 0 {
            self.release();
            return;
        }

        if new_len < self.len {
            for slot in &mut self.storage[new_len..self.len] {
                *slot = None;
            }
            self.len = new_len;
            return;
        }

        self.reserve(new_len);
        while self.len < new_len {
            self.storage[self.len] = Some(generator());
            self.len += 1;
        }
    }

    #[inline]
    fn slot(&self, index: usize) -> Result<&T> {
        self.storage[index]
            .as_ref()
            .ok_or_else(|| DynSeqError::out_of_bounds(index, self.len))
    }

    /// Get a reference to the element at `index`
    ///
    /// # Errors
    ///
    /// Returns `DynSeqError::OutOfBounds` if `index >= len()`, regardless of capacity.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len)?;
        self.slot(index)
    }

    /// Get a mutable reference to the element at `index`
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.len)?;
        let len = self.len;
        self.storage[index]
            .as_mut()
            .ok_or_else(|| DynSeqError::out_of_bounds(index, len))
    }

    /// Replace the element at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_bounds(index, self.len)?;
        self.storage[index] = Some(value);
        Ok(())
    }

    /// First element, if any
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Last element, if any
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Append an element, growing by the configured policy when full
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.storage[self.len] = Some(value);
        self.len += 1;
    }

    /// Insert an element at `index`, shifting later elements toward the end
    ///
    /// # Errors
    ///
    /// Returns `DynSeqError::OutOfBounds` if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(DynSeqError::out_of_bounds(index, self.len));
        }

        if self.len == self.capacity() {
            self.grow();
        }

        // Highest index first so nothing is overwritten
        for i in (index..self.len).rev() {
            self.storage[i + 1] = self.storage[i].take();
        }
        self.storage[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements toward the start
    ///
    /// # Errors
    ///
    /// Returns `DynSeqError::OutOfBounds` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;

        let removed = self.storage[index].take();
        for i in index + 1..self.len {
            self.storage[i - 1] = self.storage[i].take();
        }
        self.len -= 1;

        removed.ok_or_else(|| DynSeqError::out_of_bounds(index, self.len + 1))
    }

    /// Remove the first element equal to `target`; returns whether one was found
    pub fn remove(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(target) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Swap the elements at `a` and `b`
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        check_bounds(a, self.len)?;
        check_bounds(b, self.len)?;
        self.storage.swap(a, b);
        Ok(())
    }

    /// Drop every element, keeping the capacity
    pub fn clear(&mut self) {
        for slot in &mut self.storage[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Copy `len` elements starting at `start` into a new, independent array
    ///
    /// # Errors
    ///
    /// Returns `DynSeqError::InvalidArgument` if `start + len > self.len()`.
    pub fn slice(&self, start: usize, len: usize) -> Result<Self>
    where
        T: Clone,
    {
        check_range(start, len, self.len)?;

        let mut slice = Self::with_capacity(len);
        slice.growth = self.growth;
        for item in self.storage[start..start + len].iter().flatten() {
            slice.push(item.clone());
        }
        Ok(slice)
    }

    /// Concatenate two arrays
    ///
    /// When one operand is empty the other is returned borrowed rather than
    /// copied, so the result may alias an input.
    ///
    /// ```rust
    /// use dynseq::DynArray;
    /// use std::borrow::Cow;
    ///
    /// let a: DynArray<i32> = vec![1, 2].into();
    /// let b: DynArray<i32> = vec![3].into();
    /// let empty = DynArray::new();
    ///
    /// assert_eq!(DynArray::concat(&a, &b).to_string(), "[1, 2, 3]");
    /// assert!(matches!(DynArray::concat(&empty, &b), Cow::Borrowed(_)));
    /// ```
    pub fn concat<'a>(a: &'a Self, b: &'a Self) -> Cow<'a, Self>
    where
        T: Clone,
    {
        if a.is_empty() {
            return Cow::Borrowed(b);
        }
        if b.is_empty() {
            return Cow::Borrowed(a);
        }

        let mut result = Self::with_capacity(a.len + b.len);
        result.growth = a.growth;
        result.extend(a.iter().cloned());
        result.extend(b.iter().cloned());
        Cow::Owned(result)
    }

    /// Index of the first element equal to `target`
    pub fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == target)
    }

    /// Index of the last element equal to `target`
    pub fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|item| item == target)
    }

    /// Check whether any element equals `target`
    #[inline]
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(target).is_some()
    }

    /// Clone every element into `dest` starting at `offset`
    ///
    /// # Errors
    ///
    /// Returns `DynSeqError::InvalidArgument` if `dest` cannot hold `len()`
    /// elements past `offset`.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        check_range(offset, self.len, dest.len())?;
        for (dst, src) in dest[offset..].iter_mut().zip(self.iter()) {
            dst.clone_from(src);
        }
        Ok(())
    }

    /// Iterate over the elements
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.storage[..self.len].iter(),
        }
    }

    /// Iterate mutably over the elements
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            slots: self.storage[..self.len].iter_mut(),
        }
    }

    /// Consume the array, yielding its live slots in order
    pub(crate) fn into_slots(self) -> Vec<Option<T>> {
        let DynArray { storage, len, .. } = self;
        let mut slots = storage.into_vec();
        slots.truncate(len);
        slots
    }
}

impl<T: fmt::Display> DynArray<DynArray<T>> {
    /// Render a nested array one row per line, without outer brackets
    ///
    /// ```rust
    /// use dynseq::DynArray;
    ///
    /// let grid: DynArray<DynArray<i32>> =
    ///     vec![vec![1, 2].into(), vec![3, 4].into()].into();
    /// assert_eq!(grid.to_grid_string(), "[1, 2],\n[3, 4]");
    /// ```
    pub fn to_grid_string(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            out.push_str(&row.to_string());
        }
        out
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_capacity(self.len);
        arr.growth = self.growth;
        arr.extend(self.iter().cloned());
        arr
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(item) => item,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Length prefix keeps nested arrays from colliding
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

/// Concatenation of owned arrays; an empty operand yields the other one unchanged
impl<T> std::ops::Add for DynArray<T> {
    type Output = DynArray<T>;

    fn add(mut self, rhs: DynArray<T>) -> Self::Output {
        if self.is_empty() {
            return rhs;
        }
        if rhs.is_empty() {
            return self;
        }

        self.reserve(self.len + rhs.len);
        self.extend(rhs);
        self
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        Self {
            storage: vec.into_iter().map(Some).collect(),
            len,
            growth: GrowthConfig::default(),
        }
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    fn from(items: &[T]) -> Self {
        let mut arr = Self::with_capacity(items.len());
        arr.extend(items.iter().cloned());
        arr
    }
}

/// Borrowing iterator over a [`DynArray`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a [`DynArray`]
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`DynArray`]
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().flatten()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.into_slots().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn arr(items: &[i32]) -> DynArray<i32> {
        DynArray::from(items)
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new() {
        let arr: DynArray<i32> = DynArray::new();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let arr: DynArray<i32> = DynArray::with_capacity(10);
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 10);
        assert!(arr.is_empty());
    }

    #[test]
    fn test_from_elem_and_from_fn() {
        let filled = DynArray::from_elem(5, 42);
        assert_eq!(filled.len(), 5);
        assert_eq!(filled.capacity(), 5);
        assert!(filled.iter().all(|&x| x == 42));

        let mut next = 0;
        let generated = DynArray::from_fn(4, || {
            next += 10;
            next
        });
        assert_eq!(generated, arr(&[10, 20, 30, 40]));
    }

    #[test]
    fn test_push_grows_by_policy() {
        let mut arr = DynArray::new();
        let mut capacities = Vec::new();
        for i in 0..300 {
            arr.push(i);
            if capacities.last() != Some(&arr.capacity()) {
                capacities.push(arr.capacity());
            }
        }
        assert_eq!(capacities, vec![4, 8, 16, 32, 64, 128, 256, 320]);
        assert_eq!(arr.len(), 300);
        for i in 0..300 {
            assert_eq!(arr[i], i);
        }
    }

    #[test]
    fn test_push_with_custom_growth() {
        let growth = GrowthConfig {
            initial_capacity: 3,
            growth_threshold: 3,
            tail_growth_divisor: 3,
        };
        let mut arr = DynArray::with_growth(growth).unwrap();
        arr.push(1);
        assert_eq!(arr.capacity(), 3);
        arr.extend([2, 3, 4]);
        assert_eq!(arr.capacity(), 4);
        arr.push(5);
        assert_eq!(arr.capacity(), 5);
    }

    #[test]
    fn test_with_growth_rejects_invalid_policy() {
        let growth = GrowthConfig {
            initial_capacity: 0,
            ..GrowthConfig::default()
        };
        assert!(DynArray::<u8>::with_growth(growth).is_err());
    }

    #[test]
    fn test_index_and_set() {
        let mut arr = DynArray::new();
        arr.push(42);
        arr.push(84);

        assert_eq!(arr[0], 42);
        assert_eq!(*arr.get(1).unwrap(), 84);

        arr[0] = 100;
        arr.set(1, 200).unwrap();
        *arr.get_mut(0).unwrap() += 1;
        assert_eq!(arr, self::arr(&[101, 200]));
    }

    #[test]
    fn test_get_never_reads_spare_capacity() {
        let mut arr = DynArray::with_capacity(8);
        arr.push(1);
        assert_eq!(arr.get(1), Err(DynSeqError::out_of_bounds(1, 1)));
        assert!(arr.set(5, 0).is_err());
        assert!(arr.get_mut(7).is_err());
    }

    #[test]
    #[should_panic(expected = "Out of bounds")]
    fn test_index_bounds() {
        let arr: DynArray<i32> = DynArray::with_capacity(4);
        let _ = arr[0];
    }

    #[test]
    fn test_insert_remove() {
        let mut arr = arr(&[1, 2, 3]);
        arr.insert(2, 99).unwrap();
        assert_eq!(arr, self::arr(&[1, 2, 99, 3]));

        assert_eq!(arr.remove_at(2).unwrap(), 99);
        assert_eq!(arr, self::arr(&[1, 2, 3]));
    }

    #[test]
    fn test_insert_at_edges() {
        let mut arr = DynArray::new();
        arr.insert(0, 2).unwrap();
        arr.insert(0, 1).unwrap();
        arr.insert(2, 3).unwrap();
        assert_eq!(arr, self::arr(&[1, 2, 3]));

        assert_eq!(arr.remove_at(0).unwrap(), 1);
        assert_eq!(arr.remove_at(1).unwrap(), 3);
        assert_eq!(arr, self::arr(&[2]));
    }

    #[test]
    fn test_insert_grows_when_full() {
        let mut arr = DynArray::with_capacity(2);
        arr.push('a');
        arr.push('c');
        arr.insert(1, 'b').unwrap();
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.iter().collect::<String>(), "abc");
    }

    #[test]
    fn test_out_of_bounds_errors() {
        let mut arr = arr(&[1, 2]);
        assert_eq!(arr.insert(3, 100), Err(DynSeqError::out_of_bounds(3, 2)));
        assert!(arr.remove_at(2).is_err());
        assert!(arr.swap(0, 2).is_err());
        assert_eq!(arr, self::arr(&[1, 2]));
    }

    #[test]
    fn test_reserve_is_exact_and_never_shrinks() {
        let mut arr: DynArray<i32> = DynArray::new();
        arr.reserve(10);
        assert_eq!(arr.capacity(), 10);

        arr.reserve(5);
        assert_eq!(arr.capacity(), 10);

        arr.set_capacity(3);
        assert_eq!(arr.capacity(), 10);

        arr.set_capacity(12);
        assert_eq!(arr.capacity(), 12);
        assert!(arr.is_empty());
    }

    #[test]
    fn test_reserve_keeps_elements() {
        let mut arr = arr(&[5, 6, 7]);
        arr.reserve(100);
        assert_eq!(arr, self::arr(&[5, 6, 7]));
    }

    #[test]
    fn test_resize() {
        let mut arr = DynArray::new();
        arr.resize(5, 42);
        assert_eq!(arr.len(), 5);
        assert_eq!(arr, DynArray::from_elem(5, 42));

        arr.resize(3, 0);
        assert_eq!(arr, self::arr(&[42, 42, 42]));
        assert_eq!(arr.capacity(), 5);

        arr.resize(4, 7);
        assert_eq!(arr, self::arr(&[42, 42, 42, 7]));
        assert_eq!(arr.capacity(), 5);
    }

    #[test]
    fn test_resize_to_zero_releases_storage() {
        let mut arr = arr(&[1, 2, 3]);
        arr.resize(0, 0);
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
    }

    #[test]
    fn test_resize_same_length_is_noop() {
        let mut arr = DynArray::with_capacity(16);
        arr.extend([1, 2]);
        arr.resize(2, 9);
        assert_eq!(arr, self::arr(&[1, 2]));
        assert_eq!(arr.capacity(), 16);
    }

    #[test]
    fn test_resize_default_and_with() {
        let mut arr: DynArray<String> = DynArray::new();
        arr.resize_default(2);
        assert_eq!(arr.iter().map(String::len).sum::<usize>(), 0);

        let mut n = 0;
        arr.resize_with(4, || {
            n += 1;
            n.to_string()
        });
        assert_eq!(arr.to_string(), "[, , 1, 2]");
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut arr = arr(&[1, 2, 3]);
        let cap = arr.capacity();
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), cap);
        arr.push(4);
        assert_eq!(arr, self::arr(&[4]));
    }

    #[test]
    fn test_slice() {
        let arr = arr(&[10, 20, 30, 40]);
        let slice = arr.slice(1, 2).unwrap();
        assert_eq!(slice, self::arr(&[20, 30]));
        assert_eq!(slice.capacity(), 2);

        assert!(arr.slice(4, 0).unwrap().is_empty());
        assert!(matches!(
            arr.slice(3, 2),
            Err(DynSeqError::InvalidArgument { .. })
        ));
        assert!(arr.slice(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_slice_is_independent() {
        let source = arr(&[1, 2, 3]);
        let mut slice = source.slice(0, 2).unwrap();
        slice[0] = 100;
        assert_eq!(source[0], 1);
    }

    #[test]
    fn test_concat() {
        let a = arr(&[1, 2]);
        let b = arr(&[3, 4, 5]);
        let joined = DynArray::concat(&a, &b);
        assert!(matches!(joined, Cow::Owned(_)));
        assert_eq!(*joined, arr(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_concat_with_empty_aliases_operand() {
        let a = arr(&[1, 2]);
        let empty = DynArray::new();

        match DynArray::concat(&a, &empty) {
            Cow::Borrowed(result) => assert!(std::ptr::eq(result, &a)),
            Cow::Owned(_) => panic!("expected borrowed operand"),
        }
        match DynArray::concat(&empty, &a) {
            Cow::Borrowed(result) => assert!(std::ptr::eq(result, &a)),
            Cow::Owned(_) => panic!("expected borrowed operand"),
        }
    }

    #[test]
    fn test_add_operator() {
        let joined = arr(&[1]) + arr(&[2, 3]);
        assert_eq!(joined, arr(&[1, 2, 3]));
        assert_eq!(joined.capacity(), 3);

        let with_capacity = DynArray::with_capacity(50);
        let passthrough = arr(&[7]) + with_capacity;
        assert_eq!(passthrough, arr(&[7]));

        let right = arr(&[8, 9]);
        let right_cap = right.capacity();
        let left_empty = DynArray::with_capacity(64) + right;
        assert_eq!(left_empty.capacity(), right_cap);
    }

    #[test]
    fn test_equality_and_hash() {
        let a = arr(&[1, 2, 3]);
        let mut b = DynArray::with_capacity(100);
        b.extend([1, 2, 3]);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.push(4);
        assert_ne!(a, b);
        assert_ne!(arr(&[1, 2, 3]), arr(&[1, 3, 2]));
    }

    #[test]
    fn test_display() {
        assert_eq!(DynArray::<i32>::new().to_string(), "[]");
        assert_eq!(arr(&[7]).to_string(), "[7]");
        assert_eq!(arr(&[1, -2, 3]).to_string(), "[1, -2, 3]");

        let words: DynArray<&str> = vec!["a", "b"].into();
        assert_eq!(words.to_string(), "[a, b]");
    }

    #[test]
    fn test_grid_string() {
        let grid: DynArray<DynArray<i32>> = vec![arr(&[1, 2]), arr(&[]), arr(&[3])].into();
        assert_eq!(grid.to_grid_string(), "[1, 2],\n[],\n[3]");
        assert_eq!(grid.to_string(), "[[1, 2], [], [3]]");
        assert_eq!(DynArray::<DynArray<i32>>::new().to_grid_string(), "");
    }

    #[test]
    fn test_search() {
        let mut arr = arr(&[3, 1, 3, 2]);
        assert_eq!(arr.index_of(&3), Some(0));
        assert_eq!(arr.last_index_of(&3), Some(2));
        assert_eq!(arr.index_of(&9), None);
        assert!(arr.contains(&2));
        assert!(!arr.contains(&4));

        assert!(arr.remove(&3));
        assert_eq!(arr, self::arr(&[1, 3, 2]));
        assert!(!arr.remove(&42));
    }

    #[test]
    fn test_copy_to() {
        let arr = arr(&[1, 2, 3]);
        let mut dest = [0; 5];
        arr.copy_to(&mut dest, 1).unwrap();
        assert_eq!(dest, [0, 1, 2, 3, 0]);

        assert!(arr.copy_to(&mut dest, 3).is_err());
    }

    #[test]
    fn test_first_last_swap() {
        let mut arr = arr(&[1, 2, 3]);
        assert_eq!(arr.first(), Some(&1));
        assert_eq!(arr.last(), Some(&3));
        arr.swap(0, 2).unwrap();
        assert_eq!(arr, self::arr(&[3, 2, 1]));
        assert_eq!(DynArray::<i32>::new().last(), None);
    }

    #[test]
    fn test_iterators() {
        let mut arr = arr(&[1, 2, 3]);
        assert_eq!(arr.iter().len(), 3);
        assert_eq!(arr.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

        for item in &mut arr {
            *item *= 10;
        }
        assert_eq!(arr, self::arr(&[10, 20, 30]));

        let owned: Vec<i32> = arr.into_iter().collect();
        assert_eq!(owned, vec![10, 20, 30]);
    }

    #[test]
    fn test_into_iter_skips_spare_capacity() {
        let mut arr = DynArray::with_capacity(10);
        arr.extend(["x".to_string(), "y".to_string()]);
        let mut iter = arr.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back().as_deref(), Some("y"));
        assert_eq!(iter.next().as_deref(), Some("x"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_clone() {
        let mut arr = DynArray::with_capacity(20);
        arr.extend([1, 2]);
        let cloned = arr.clone();
        assert_eq!(arr, cloned);
        assert_eq!(cloned.capacity(), 2);
    }

    #[test]
    fn test_drop_elements() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let counter = Arc::new(AtomicUsize::new(0));

        #[derive(Clone)]
        struct DropCounter {
            counter: Arc<AtomicUsize>,
        }

        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.counter.fetch_add(1, Ordering::SeqCst);
            }
        }

        {
            let mut arr = DynArray::new();
            for _ in 0..5 {
                arr.push(DropCounter {
                    counter: counter.clone(),
                });
            }

            // The removed element is handed back and dropped here
            drop(arr.remove_at(2).unwrap());
            assert_eq!(counter.load(Ordering::SeqCst), 1);

            // 2 truncated elements + the unused fill value
            let fill = DropCounter {
                counter: counter.clone(),
            };
            arr.resize(2, fill);
            assert_eq!(counter.load(Ordering::SeqCst), 4);

            arr.clear();
            assert_eq!(counter.load(Ordering::SeqCst), 6);
        }

        assert_eq!(counter.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut arr = DynArray::new();
        for _ in 0..10 {
            arr.push(());
        }
        arr.insert(5, ()).unwrap();
        assert_eq!(arr.len(), 11);
        assert_eq!(arr.capacity(), 16);
        assert_eq!(arr.remove_at(10), Ok(()));
        assert_eq!(format!("{:?}", arr.slice(0, 2).unwrap()), "[(), ()]");
    }

    #[test]
    fn test_hash_distinguishes_nested_split_points() {
        let left: DynArray<DynArray<i32>> = vec![vec![1].into(), vec![2, 3].into()].into();
        let right: DynArray<DynArray<i32>> = vec![vec![1, 2].into(), vec![3].into()].into();

        assert_ne!(left, right);
        assert_ne!(hash_of(&left), hash_of(&right));

        let empty_rows: DynArray<DynArray<i32>> = vec![DynArray::new()].into();
        assert_ne!(hash_of(&empty_rows), hash_of(&DynArray::<DynArray<i32>>::new()));
    }
}

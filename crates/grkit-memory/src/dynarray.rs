//! Growable array with a fixed growth schedule.
//!
//! A [`DynArray`] starts out absent (no allocation). The first append
//! allocates room for [`INITIAL_CAPACITY`] elements; every append into a full
//! array multiplies the capacity by [`GROWTH_FACTOR`]. Capacity is tracked
//! here rather than read back from the backing `Vec`, so the schedule is
//! exact: 4, 8, 16, 32, ...
//!
//! Growth may move the buffer. Element references borrow the array and
//! [`DynArray::append`] takes `&mut self`, so stale references are rejected
//! at compile time.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use crate::error::MemError;

/// Slots allocated by the first append.
pub const INITIAL_CAPACITY: usize = 4;

/// Capacity multiplier applied when a full array receives an append.
pub const GROWTH_FACTOR: usize = 2;

/// Contiguous buffer of `T` with explicit count and capacity.
pub struct DynArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create an array in the absent state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Append `value`, growing the buffer if it is full.
    ///
    /// On failure the array is unchanged and `value` is dropped.
    pub fn append(&mut self, value: T) -> Result<(), MemError> {
        if self.capacity == 0 {
            self.grow_to(INITIAL_CAPACITY)?;
            debug!(
                capacity = INITIAL_CAPACITY,
                elem_size = std::mem::size_of::<T>(),
                "dynarray allocated"
            );
        } else if self.data.len() == self.capacity {
            let new_cap = self
                .capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(MemError::CapacityOverflow)?;
            self.grow_to(new_cap)?;
            trace!(capacity = new_cap, "dynarray grown");
        }
        self.data.push(value);
        Ok(())
    }

    fn grow_to(&mut self, new_cap: usize) -> Result<(), MemError> {
        let additional = new_cap - self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| MemError::AllocationFailed {
                bytes: new_cap.saturating_mul(std::mem::size_of::<T>()),
            })?;
        self.capacity = new_cap;
        Ok(())
    }

    /// Number of live elements; 0 when absent.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Number of allocated slots; 0 when absent.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the array has no live elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the array holds no allocation at all.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.capacity == 0
    }

    /// Remove the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Result<T, MemError> {
        self.check_index(index)?;
        Ok(self.data.remove(index))
    }

    /// Remove the element at `index` by moving the last element into its slot.
    ///
    /// O(1); does not preserve order.
    pub fn swap_remove(&mut self, index: usize) -> Result<T, MemError> {
        self.check_index(index)?;
        Ok(self.data.swap_remove(index))
    }

    fn check_index(&self, index: usize) -> Result<(), MemError> {
        let count = self.data.len();
        if index >= count {
            return Err(MemError::IndexOutOfBounds { index, count });
        }
        Ok(())
    }

    /// Drop all elements, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Release the allocation and return to the absent state.
    ///
    /// Freeing an absent array does nothing.
    pub fn free(&mut self) {
        if self.capacity == 0 {
            return;
        }
        debug!(capacity = self.capacity, count = self.data.len(), "dynarray freed");
        self.data = Vec::new();
        self.capacity = 0;
    }

    /// Element at `index`, if live.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`, if live.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Last live element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("count", &self.count())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> DynArray<i32> {
        let mut arr = DynArray::new();
        for &v in values {
            arr.append(v).unwrap();
        }
        arr
    }

    #[test]
    fn empty_array() {
        let arr: DynArray<i32> = DynArray::new();
        assert_eq!(arr.count(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_absent());
    }

    #[test]
    fn first_append() {
        let mut arr = DynArray::new();
        arr.append(5).unwrap();
        assert_eq!(arr[0], 5);
        assert_eq!(arr.count(), 1);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn capacity_schedule() {
        let mut arr = DynArray::new();
        let expected = [4, 4, 4, 4, 8, 8, 8, 8, 16, 16, 16, 16, 16, 16, 16, 16, 32];
        for (i, &cap) in expected.iter().enumerate() {
            arr.append(i).unwrap();
            assert_eq!(arr.count(), i + 1);
            assert_eq!(arr.capacity(), cap, "after {} appends", i + 1);
        }
    }

    #[test]
    fn append_then_read_last() {
        let mut arr = DynArray::new();
        for i in 0..10 {
            arr.append(i * 10).unwrap();
            assert_eq!(arr.last(), Some(&(i * 10)));
            assert_eq!(arr[arr.count() - 1], i * 10);
        }
    }

    #[test]
    fn swap_remove_moves_last_into_gap() {
        let mut arr = filled(&[1, 2, 3, 4]);
        assert_eq!(arr.swap_remove(1), Ok(2));
        assert_eq!(arr.as_slice(), &[1, 4, 3]);
        assert_eq!(arr.count(), 3);
    }

    #[test]
    fn swap_remove_last_element() {
        let mut arr = filled(&[1, 2, 3]);
        assert_eq!(arr.swap_remove(2), Ok(3));
        assert_eq!(arr.as_slice(), &[1, 2]);
    }

    #[test]
    fn remove_preserves_order() {
        let mut arr = filled(&[1, 2, 3, 4]);
        assert_eq!(arr.remove(1), Ok(2));
        assert_eq!(arr.as_slice(), &[1, 3, 4]);
        assert_eq!(arr.count(), 3);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut arr = filled(&[1, 2, 3, 4]);
        assert_eq!(
            arr.remove(4),
            Err(MemError::IndexOutOfBounds { index: 4, count: 4 })
        );
        assert_eq!(
            arr.swap_remove(10),
            Err(MemError::IndexOutOfBounds { index: 10, count: 4 })
        );
        assert_eq!(arr.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn remove_on_absent_is_rejected() {
        let mut arr: DynArray<u8> = DynArray::new();
        assert!(arr.remove(0).is_err());
        assert!(arr.swap_remove(0).is_err());
        assert!(arr.is_absent());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut arr = filled(&[1, 2, 3, 4, 5]);
        assert_eq!(arr.capacity(), 8);
        arr.clear();
        assert_eq!(arr.count(), 0);
        assert_eq!(arr.capacity(), 8);
        for i in 0..8 {
            arr.append(i).unwrap();
        }
        assert_eq!(arr.capacity(), 8);
        arr.append(8).unwrap();
        assert_eq!(arr.capacity(), 16);
    }

    #[test]
    fn clear_on_absent_is_noop() {
        let mut arr: DynArray<i32> = DynArray::new();
        arr.clear();
        assert!(arr.is_absent());
    }

    #[test]
    fn free_is_idempotent() {
        let mut arr = filled(&[1, 2, 3]);
        arr.free();
        assert_eq!(arr.count(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_absent());
        arr.free();
        assert!(arr.is_absent());
    }

    #[test]
    fn append_after_free_starts_over() {
        let mut arr = filled(&[1, 2, 3, 4, 5]);
        arr.free();
        arr.append(9).unwrap();
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.as_slice(), &[9]);
    }

    #[test]
    fn owned_elements_are_dropped_on_remove() {
        let mut arr = DynArray::new();
        arr.append(String::from("a")).unwrap();
        arr.append(String::from("b")).unwrap();
        let removed = arr.remove(0).unwrap();
        assert_eq!(removed, "a");
        assert_eq!(arr[0], "b");
    }

    #[test]
    fn zero_sized_elements_follow_schedule() {
        let mut arr = DynArray::new();
        for _ in 0..5 {
            arr.append(()).unwrap();
        }
        assert_eq!(arr.count(), 5);
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn mutation_through_index() {
        let mut arr = filled(&[1, 2, 3]);
        arr[1] = 20;
        if let Some(v) = arr.get_mut(2) {
            *v = 30;
        }
        arr.as_mut_slice()[0] = 10;
        assert_eq!(arr.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(arr.get(3), None);
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut a = filled(&[1, 2, 3, 4, 5]);
        let b = filled(&[1, 2]);
        a.remove(4).unwrap();
        a.remove(3).unwrap();
        a.remove(2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.capacity(), b.capacity());
    }
}

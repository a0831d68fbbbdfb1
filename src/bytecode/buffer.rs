//! Growable append-only storage used by chunks.

use std::ops::Deref;
use crate::config::MIN_BUFFER_CAPACITY;

/// Append-only array with a fixed geometric growth policy.
///
/// Capacity starts at 0. Once full, it grows to `MIN_BUFFER_CAPACITY` if it was smaller than that,
/// otherwise it doubles. The reported capacity is the buffer's own bookkeeping and does not depend
/// on allocator rounding.
#[derive(Clone, Debug)]
pub struct GrowableArray<T> {
    data    : Vec<T>,
    capacity: usize,
}

impl<T> GrowableArray<T> {
    /// Creates a new, unallocated array.
    pub const fn new() -> Self {
        GrowableArray {
            data    : Vec::new(),
            capacity: 0,
        }
    }
    /// Appends an element, growing the array if it is full. Returns the index of the new element.
    pub fn push(self: &mut Self, value: T) -> usize {
        if self.data.len() == self.capacity {
            self.grow();
        }
        let index = self.data.len();
        self.data.push(value);
        index
    }
    /// Number of elements.
    #[inline]
    pub fn len(self: &Self) -> usize {
        self.data.len()
    }
    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(self: &Self) -> bool {
        self.data.is_empty()
    }
    /// Current capacity according to the growth policy.
    #[inline]
    pub fn capacity(self: &Self) -> usize {
        self.capacity
    }
    /// Returns the elements as slice.
    #[inline]
    pub fn as_slice(self: &Self) -> &[T] {
        &self.data[..]
    }
    fn grow(self: &mut Self) {
        let new_capacity = grow_capacity(self.capacity);
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];
    fn deref(self: &Self) -> &[T] {
        self.as_slice()
    }
}

/// Computes the next capacity for a full array of the given capacity.
#[inline]
pub const fn grow_capacity(capacity: usize) -> usize {
    if capacity < MIN_BUFFER_CAPACITY { MIN_BUFFER_CAPACITY } else { capacity * 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unallocated() {
        let array = GrowableArray::<u8>::new();
        assert_eq!(array.capacity(), 0);
        assert!(array.is_empty());
    }

    #[test]
    fn grows_geometrically_from_eight() {
        let mut array = GrowableArray::new();
        let mut boundaries = Vec::new();
        let mut last = array.capacity();
        for i in 0..100u32 {
            array.push(i);
            if array.capacity() != last {
                boundaries.push((array.len(), array.capacity()));
                last = array.capacity();
            }
        }
        assert_eq!(boundaries, vec![ (1, 8), (9, 16), (17, 32), (33, 64), (65, 128) ]);
        assert_eq!(array.len(), 100);
    }

    #[test]
    fn preserves_elements_across_growth() {
        let mut array = GrowableArray::new();
        for i in 0..20u8 {
            assert_eq!(array.push(i), i as usize);
        }
        assert_eq!(array.as_slice(), &(0..20u8).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn capacity_sequence() {
        assert_eq!(grow_capacity(0), 8);
        assert_eq!(grow_capacity(7), 8);
        assert_eq!(grow_capacity(8), 16);
        assert_eq!(grow_capacity(16), 32);
    }
}

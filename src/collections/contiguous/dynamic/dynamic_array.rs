use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
#[doc(inline)]
pub use crate::util::error::{AllocationFailure, IndexOrAllocFailure, InvalidIndex, NotFound};
use crate::util::result::ResultExtension;

/// The linear growth quantum used by [`DynamicArray::default`].
pub const DEFAULT_GROW_BY: usize = 16;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, built on top of an [`Array`] of slots.
///
/// Each DynamicArray carries its own growth quantum, `grow_by`. When more room is needed, the new
/// capacity is the smaller of two candidates: the current capacity doubled until it fits, or the
/// current capacity plus the shortfall rounded up to a multiple of `grow_by`. See
/// [`compute_growth`](DynamicArray::compute_growth). Capacity is never reduced implicitly, only
/// [`resize_to`](DynamicArray::resize_to) can shrink it.
///
/// Allocation failures are reported as [`AllocationFailure`] and leave the DynamicArray exactly as
/// it was before the call.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `append_new_default` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)`, `O(n)` |
/// | `remove_at` | `O(n-i)` |
/// | `remove` | `O(n)` |
/// | `remove_last` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `find` | `O(n)` |
/// | `resize_to` | `O(n)` |
/// | `ensure_capacity_for` | `O(n)`**, `O(1)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, it will take `O(n)`.
///
/// \** If there is already enough capacity for the additional items, no reallocation occurs.
pub struct DynamicArray<T> {
    pub(crate) arr: Array<T>,
    pub(crate) len: usize,
    pub(crate) grow_by: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with capacity exactly `cap` and the linear growth quantum
    /// `grow_by`. A `grow_by` of 0 is treated as 1 when growing. A capacity of 0 doesn't allocate.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if storage for `cap` elements can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::try_new(4, 8)?;
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 4);
    /// assert_eq!(arr.grow_by(), 8);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(cap: usize, grow_by: usize) -> Result<DynamicArray<T>, AllocationFailure> {
        Ok(DynamicArray {
            arr: Array::try_new(cap)?,
            len: 0,
            grow_by,
        })
    }

    /// Creates a new DynamicArray with capacity exactly `cap` and the linear growth quantum
    /// `grow_by`. See [`DynamicArray::try_new`].
    ///
    /// # Panics
    /// Panics if storage for `cap` elements can't be allocated.
    pub fn new(cap: usize, grow_by: usize) -> DynamicArray<T> {
        Self::try_new(cap, grow_by).throw()
    }

    /// Returns the number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots, which is always at least [`len`](Self::len).
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns the configured linear growth quantum, as provided. (0 is stored as given.)
    pub const fn grow_by(&self) -> usize {
        self.grow_by
    }

    /// Changes the linear growth quantum used by all future growth.
    pub const fn set_grow_by(&mut self, grow_by: usize) {
        self.grow_by = grow_by;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`InvalidIndex`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new(0, 4);
    /// arr.append('a')?;
    /// assert_eq!(arr.at(0), Ok(&'a'));
    /// assert!(arr.at(1).is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, InvalidIndex> {
        self.check_index(index)?;
        // SAFETY: index < len and all slots below len are initialized.
        Ok(unsafe { self.arr[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`InvalidIndex`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, InvalidIndex> {
        self.check_index(index)?;
        // SAFETY: index < len and all slots below len are initialized.
        Ok(unsafe { self.arr[index].assume_init_mut() })
    }

    /// Computes the capacity required to fit `additional` slots beyond the current capacity.
    ///
    /// Two candidates are considered and the smaller is used:
    /// - Starting at `max(cap, 1)`, double until there is room for `additional` more slots.
    /// - Add `additional`, rounded up to the next multiple of `grow_by`, to `cap`.
    ///
    /// Requesting 0 additional slots returns the current capacity.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if `cap + additional` overflows.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new(4, 4);
    /// assert_eq!(arr.compute_growth(0), Ok(4));
    /// assert_eq!(arr.compute_growth(1), Ok(8));
    ///
    /// let arr: DynamicArray<u8> = DynamicArray::new(20, 3);
    /// // Linear: 20 + 3 < doubling: 40.
    /// assert_eq!(arr.compute_growth(2), Ok(23));
    ///
    /// let arr: DynamicArray<u8> = DynamicArray::new(3, 100);
    /// // Doubling: 6 < linear: 103.
    /// assert_eq!(arr.compute_growth(2), Ok(6));
    /// ```
    pub fn compute_growth(&self, additional: usize) -> Result<usize, AllocationFailure> {
        let cap = self.cap();
        if additional == 0 {
            return Ok(cap);
        }

        let required = cap.checked_add(additional).ok_or(AllocationFailure {
            requested: usize::MAX,
        })?;

        // Saturates at usize::MAX, which is always >= required.
        let mut doubled = cmp::max(cap, 1);
        while doubled < required {
            doubled = doubled.saturating_mul(GROWTH_FACTOR);
        }

        let step = cmp::max(self.grow_by, 1);
        let linear = additional.div_ceil(step)
            .checked_mul(step)
            .and_then(|rounded| cap.checked_add(rounded))
            .unwrap_or(usize::MAX);

        Ok(cmp::min(doubled, linear))
    }

    /// Ensures that there is capacity for `extra` more elements, growing according to
    /// [`compute_growth`](Self::compute_growth) if there isn't.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the grown storage can't be allocated, in which case the
    /// DynamicArray is unchanged.
    pub fn ensure_capacity_for(&mut self, extra: usize) -> Result<(), AllocationFailure> {
        let needed = self.len.checked_add(extra).ok_or(AllocationFailure {
            requested: usize::MAX,
        })?;

        if needed > self.cap() {
            let new_cap = self.compute_growth(needed - self.cap())?;
            self.arr.try_realloc(new_cap)?;
        }

        Ok(())
    }

    /// Ensures that the capacity is at least `target`, reallocating to exactly `target` if it
    /// isn't. No growth rounding is applied.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the storage can't be allocated, in which case the
    /// DynamicArray is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::new(2, 16);
    /// arr.ensure_capacity_at_least(7)?;
    /// assert_eq!(arr.cap(), 7);
    /// arr.ensure_capacity_at_least(3)?;
    /// assert_eq!(arr.cap(), 7);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn ensure_capacity_at_least(&mut self, target: usize) -> Result<(), AllocationFailure> {
        if self.cap() < target {
            self.arr.try_realloc(target)?;
        }
        Ok(())
    }

    /// Appends the provided value to the end of the DynamicArray, growing if required.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if growth was required and failed. The value is dropped and
    /// the DynamicArray is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new(4, 4);
    /// for i in 0..5 {
    ///     arr.append(i)?;
    /// }
    /// assert_eq!(arr.len(), 5);
    /// assert_eq!(arr.cap(), 8);
    /// assert_eq!(arr[4], 4);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn append(&mut self, value: T) -> Result<(), AllocationFailure> {
        self.ensure_capacity_for(1)?;
        // SAFETY: Capacity has just been ensured for one more element.
        unsafe { self.append_unchecked(value) }
        Ok(())
    }

    /// Appends the provided value to the end of the DynamicArray, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// The caller must ensure that `len < cap`, using methods like
    /// [`ensure_capacity_for`](Self::ensure_capacity_for) to do so. Using this method on a full
    /// DynamicArray is undefined behavior.
    pub unsafe fn append_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the slot at len is within the allocation.
        unsafe { self.arr.as_mut_ptr().add(self.len).write(value) }
        self.len += 1;
    }

    /// Inserts the provided value at `index`, moving all following elements up by one. An `index`
    /// equal to `len` appends.
    ///
    /// When there is spare capacity, elements are shifted in place. Otherwise, a new buffer is
    /// allocated and the elements are moved into it around the gap.
    ///
    /// # Errors
    /// Returns [`InvalidIndex`] if `index > len`, or [`AllocationFailure`] if growth was required
    /// and failed. In both cases the DynamicArray is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new(0, 2);
    /// arr.insert(0, 'b')?;
    /// arr.insert(0, 'a')?;
    /// arr.insert(2, 'd')?;
    /// arr.insert(2, 'c')?;
    /// assert_eq!(arr, DynamicArray::from(['a', 'b', 'c', 'd']));
    /// assert!(arr.insert(5, 'z').unwrap_err().is_invalid_index());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOrAllocFailure> {
        if index > self.len {
            return Err(InvalidIndex {
                index,
                len: self.len,
            }.into());
        }

        if index == self.len {
            return self.append(value).map_err(Into::into);
        }

        if self.len < self.cap() {
            self.shift_up(index, 1);
        } else {
            self.regrow_around_gap(index, 1)?;
        }

        // SAFETY: index < cap, and the value that previously occupied it has been moved up, so
        // writing doesn't leak or overwrite anything.
        unsafe { self.arr.as_mut_ptr().add(index).write(value) }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index` and returns it, moving all following elements down by one
    /// to fill the gap. Capacity is retained.
    ///
    /// # Errors
    /// Returns [`InvalidIndex`] if `index >= len`, leaving the DynamicArray unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3, 4]);
    /// assert_eq!(arr.remove_at(1), Ok(2));
    /// assert_eq!(arr, DynamicArray::from([1, 3, 4]));
    /// assert!(arr.remove_at(3).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, InvalidIndex> {
        self.check_index(index)?;
        // SAFETY: index has just been checked.
        Ok(unsafe { self.remove_unchecked(index) })
    }

    /// Removes the last element and returns it, or returns [`None`] if the DynamicArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2]);
    /// assert_eq!(arr.remove_last(), Some(2));
    /// assert_eq!(arr.remove_last(), Some(1));
    /// assert_eq!(arr.remove_last(), None);
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        // SAFETY: last < len.
        Some(unsafe { self.remove_unchecked(last) })
    }

    /// Reallocates the DynamicArray to have exactly `new_cap` slots. Elements that don't fit are
    /// dropped and the length is truncated. Resizing to 0 drops everything and frees the storage.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the new storage can't be allocated, in which case the
    /// DynamicArray is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3, 4]);
    /// arr.resize_to(2)?;
    /// assert_eq!(arr, DynamicArray::from([1, 2]));
    /// assert_eq!(arr.cap(), 2);
    ///
    /// arr.resize_to(0)?;
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn resize_to(&mut self, new_cap: usize) -> Result<(), AllocationFailure> {
        if new_cap == self.cap() {
            return Ok(());
        }

        if new_cap == 0 {
            // Truncate before dropping, so that a panicking drop can't cause a double drop.
            let old_len = mem::replace(&mut self.len, 0);
            // SAFETY: All slots below the old length were initialized and are no longer tracked.
            unsafe { drop_run(self.arr.as_mut_ptr(), old_len) }
            self.arr = Array::new();
            return Ok(());
        }

        let mut new_arr = Array::try_new(new_cap)?;
        let kept = cmp::min(self.len, new_cap);

        // SAFETY: Both allocations are distinct and have room for kept elements, and the source
        // elements are initialized.
        unsafe {
            ptr::copy_nonoverlapping(self.arr.as_ptr(), new_arr.as_mut_ptr(), kept);
        }

        let old_len = mem::replace(&mut self.len, kept);
        let mut old_arr = mem::replace(&mut self.arr, new_arr);

        // SAFETY: Slots kept..old_len of the old storage are initialized and weren't moved.
        unsafe { drop_run(old_arr.as_mut_ptr().add(kept), old_len - kept) }

        // Dropping old_arr only frees the old allocation.
        Ok(())
    }

    /// Exchanges the elements at `a` and `b`. Does nothing if they are equal or either is out of
    /// bounds.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from(["x", "y", "z"]);
    /// arr.swap(0, 2);
    /// assert_eq!(arr, DynamicArray::from(["z", "y", "x"]));
    /// arr.swap(0, 3);
    /// assert_eq!(arr, DynamicArray::from(["z", "y", "x"]));
    /// ```
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b || a >= self.len || b >= self.len {
            return;
        }

        let base = self.arr.as_mut_ptr();
        // SAFETY: a and b are distinct, in bounds and initialized. The held value is written back
        // into b, so every value remains owned exactly once.
        unsafe {
            let held = base.add(a).read();
            ptr::copy_nonoverlapping(base.add(b), base.add(a), 1);
            base.add(b).write(held);
        }
    }

    /// Returns the live elements as a slice.
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: Slots below len are initialized, properly aligned and contained within one
        // allocation. The borrow of self prevents mutation for the slice's lifetime.
        unsafe { slice::from_raw_parts(self.arr.as_ptr(), self.len) }
    }

    /// Checks that the provided index refers to a live element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), InvalidIndex> {
        if index >= self.len {
            Err(InvalidIndex {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Moves the element at `index` out and closes the gap behind it.
    ///
    /// # Safety
    /// `index` must be less than `len`.
    unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        // SAFETY: It is up to the caller to ensure that index < len, so the slot is initialized.
        // Reading moves the value out, leaving the slot logically uninitialized.
        let value = unsafe { self.arr.as_ptr().add(index).read() };

        if index + 1 < self.len {
            self.shift_down(index + 1, 1);
        }
        self.len -= 1;

        value
    }

    /// Opens a gap of `gap` slots at `index` by moving the elements `index..len` up, in chunks of
    /// at most `gap` elements starting from the end. Requires `len + gap <= cap`. The length isn't
    /// changed and the gap is left uninitialized.
    pub(crate) fn shift_up(&mut self, index: usize, gap: usize) {
        if gap == 0 || index >= self.len {
            return;
        }
        debug_assert!(self.len + gap <= self.cap(), "shift_up requires spare capacity");

        let base = self.arr.as_mut_ptr();
        let mut end = self.len;
        let mut remaining = self.len - index;

        while remaining != 0 {
            let chunk = cmp::min(gap, remaining);
            let start = end - chunk;
            // SAFETY: start..end is within the live elements and start + gap..end + gap is within
            // the capacity. ptr::copy handles any overlap between the two.
            unsafe { ptr::copy(base.add(start), base.add(start + gap), chunk) }
            end = start;
            remaining -= chunk;
        }
    }

    /// Closes a gap of `gap` slots ending at `index` by moving the elements `index..len` down, in
    /// chunks of at most `gap` elements starting from `index`. Requires `gap <= index`. The length
    /// isn't changed and the vacated tail is left logically uninitialized.
    pub(crate) fn shift_down(&mut self, index: usize, gap: usize) {
        if gap == 0 || index >= self.len || index < gap {
            return;
        }

        let base = self.arr.as_mut_ptr();
        let mut start = index;
        let mut remaining = self.len - index;

        while remaining != 0 {
            let chunk = cmp::min(gap, remaining);
            // SAFETY: start..start + chunk is within the live elements and the destination
            // starts at least at 0 because gap <= index <= start. ptr::copy handles overlap.
            unsafe { ptr::copy(base.add(start), base.add(start - gap), chunk) }
            start += chunk;
            remaining -= chunk;
        }
    }

    /// Moves all elements into a newly grown buffer, leaving a gap of `gap` uninitialized slots at
    /// `index`. The old buffer is only released once the new one has been acquired.
    fn regrow_around_gap(&mut self, index: usize, gap: usize) -> Result<(), AllocationFailure> {
        let needed = self.len + gap;
        let new_cap = self.compute_growth(needed.saturating_sub(self.cap()))?;
        let mut new_arr = Array::try_new(new_cap)?;

        let src = self.arr.as_ptr();
        let dst = new_arr.as_mut_ptr();
        // SAFETY: The allocations are distinct, new_arr has at least len + gap slots and the
        // source elements are initialized.
        unsafe {
            ptr::copy_nonoverlapping(src, dst, index);
            ptr::copy_nonoverlapping(src.add(index), dst.add(index + gap), self.len - index);
        }

        // The replaced Array only frees its allocation, the values now live in new_arr.
        self.arr = new_arr;
        Ok(())
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns the index of the first element at or after `start` that is equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from([3, 1, 3, 2]);
    /// assert_eq!(arr.find(&3, 0), Some(0));
    /// assert_eq!(arr.find(&3, 1), Some(2));
    /// assert_eq!(arr.find(&3, 3), None);
    /// assert_eq!(arr.find(&3, 10), None);
    /// ```
    pub fn find(&self, item: &T, start: usize) -> Option<usize> {
        self.as_slice()
            .get(start..)?
            .iter()
            .position(|value| value == item)
            .map(|offset| start + offset)
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item, 0).is_some()
    }

    /// Removes and returns the first element equal to `item`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element matches.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([5, 6, 5]);
    /// assert_eq!(arr.remove(&5), Ok(5));
    /// assert_eq!(arr, DynamicArray::from([6, 5]));
    /// assert!(arr.remove(&7).is_err());
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, NotFound> {
        let index = self.find(item, 0).ok_or(NotFound)?;
        // SAFETY: find only returns indices of live elements.
        Ok(unsafe { self.remove_unchecked(index) })
    }
}

impl<T: Default> DynamicArray<T> {
    /// Appends a default value and returns a mutable reference to it, for the caller to finish
    /// constructing in place. When full, the capacity grows by exactly one `grow_by` quantum.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if growth was required and failed, in which case the
    /// DynamicArray is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<String> = DynamicArray::new(0, 3);
    /// arr.append_new_default()?.push_str("built in place");
    /// assert_eq!(arr.len(), 1);
    /// assert_eq!(arr.cap(), 3);
    /// assert_eq!(arr[0], "built in place");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn append_new_default(&mut self) -> Result<&mut T, AllocationFailure> {
        if self.len == self.cap() {
            let step = cmp::max(self.grow_by, 1);
            let new_cap = self.cap().checked_add(step).ok_or(AllocationFailure {
                requested: usize::MAX,
            })?;
            self.arr.try_realloc(new_cap)?;
        }

        let index = self.len;
        self.arr[index].write(T::default());
        self.len += 1;

        // SAFETY: The slot at index has just been initialized.
        Ok(unsafe { self.arr[index].assume_init_mut() })
    }
}

/// Drops `count` values in place, starting at `start`.
///
/// # Safety
/// All `count` values must be initialized and not be used again afterwards.
unsafe fn drop_run<T>(start: *mut T, count: usize) {
    // SAFETY: It is up to the caller to ensure that the run is initialized and then forgotten.
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, count)) }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        DynamicArray {
            arr: Array::new(),
            len: 0,
            grow_by: DEFAULT_GROW_BY,
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: All values below len are initialized and are never accessed again.
        unsafe { drop_run(self.arr.as_mut_ptr(), self.len) }

        // Implicitly drop self.arr, which deallocates without touching the slots.
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).throw()
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).throw()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Creates a DynamicArray holding the array's elements, with capacity `N` and the default
    /// growth quantum.
    fn from(value: [T; N]) -> Self {
        let mut arr = DynamicArray::new(N, DEFAULT_GROW_BY);

        for item in value {
            // SAFETY: arr was created with capacity for all N elements.
            unsafe { arr.append_unchecked(item) }
        }

        arr
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = DynamicArray::new(self.cap(), self.grow_by);

        for value in self.as_slice() {
            // SAFETY: arr has the same capacity as self, which is at least len.
            unsafe { arr.append_unchecked(value.clone()) }
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("grow_by", &self.grow_by)
            .finish()
    }
}

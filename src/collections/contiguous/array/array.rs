use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::util::error::AllocationFailure;

/// A fixed-size run of heap allocated slots for values of `T`, sized at runtime.
///
/// An Array never tracks which of its slots are initialized, so it never drops their contents.
/// Dropping an Array only frees the allocation. It is the raw storage underneath
/// [`DynamicArray`](crate::collections::contiguous::DynamicArray), which is responsible for the
/// values it places in the slots.
///
/// Zero-sized layouts (either a size of 0 or a zero-sized `T`) are never allocated and use a
/// dangling pointer instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `try_new` | `O(1)` |
/// | `try_realloc` | `O(n)`*, `O(1)` |
///
/// \* Depends on whether the allocator is able to resize the allocation in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array with exactly `size` uninitialized slots.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the layout of `size` slots would exceed [`isize::MAX`]
    /// bytes or the allocator is unable to provide the memory.
    ///
    /// # Examples
    /// ```
    /// # use ensemble::collections::contiguous::Array;
    /// let arr: Array<u32> = Array::try_new(5)?;
    /// assert_eq!(arr.size(), 5);
    /// assert!(Array::<u32>::try_new(usize::MAX).is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(size: usize) -> Result<Array<T>, AllocationFailure> {
        let layout = Self::make_layout(size)?;

        Ok(Array {
            ptr: Self::make_ptr(layout, size)?,
            size,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of slots in the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns a pointer to the first slot. The pointer is dangling if nothing is allocated.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const().cast()
    }

    /// Returns a mutable pointer to the first slot. The pointer is dangling if nothing is
    /// allocated.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Reallocates the Array so that it has exactly `new_size` slots. The contents of slots below
    /// `min(size, new_size)` are preserved bitwise, new slots are uninitialized and slots beyond
    /// `new_size` are discarded without being dropped.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the new layout would exceed [`isize::MAX`] bytes or the
    /// allocator is unable to provide the memory. The Array is left untouched in this case.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), AllocationFailure> {
        let old_layout = Self::make_layout(self.size)?;
        let new_layout = Self::make_layout(new_size)?;

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Covers zero-sized types as well, which never need an allocation.
            (0, 0) => NonNull::dangling(),
            (old, new) if old == new => return Ok(()),
            (0, _) => Self::make_ptr(new_layout, new_size)?,
            (_, 0) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout, which has a
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, new) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout, and the new
                // size is non-zero and no greater than isize::MAX once rounded to the alignment,
                // because it came from a valid Layout.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new)
                };

                // On failure, realloc leaves the original allocation in place.
                NonNull::new(raw_ptr.cast()).ok_or(AllocationFailure { requested: new_size })?
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }

    /// A helper function to create a [`Layout`] for `size` slots of `T`.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, AllocationFailure> {
        Layout::array::<T>(size).map_err(|_| AllocationFailure { requested: size })
    }

    /// A helper function to allocate memory for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    pub(crate) fn make_ptr(
        layout: Layout,
        size: usize,
    ) -> Result<NonNull<MaybeUninit<T>>, AllocationFailure> {
        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw_ptr = unsafe { alloc::alloc(layout) };
            NonNull::new(raw_ptr.cast()).ok_or(AllocationFailure { requested: size })
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // A layout that existed at allocation time can't fail to be recreated.
        match Self::make_layout(self.size) {
            Ok(layout) if layout.size() != 0 => {
                // SAFETY: ptr is always allocated in the global allocator with this layout when
                // the layout has a non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            },
            _ => (),
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [MaybeUninit<T>];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is valid and properly aligned for size slots (or dangling with size 0 or a
        // zero-sized T). MaybeUninit has no validity requirements, so every slot may be viewed.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: An Array uniquely owns its allocation, so it can be sent between threads whenever the
// values it stores can be.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys the borrow checker and has no interior mutability.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

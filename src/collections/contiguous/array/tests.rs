#![cfg(test)]

use std::mem::MaybeUninit;
use std::ptr::NonNull;

use super::*;
use crate::util::error::AllocationFailure;
use crate::util::fixtures::ZeroSizedType;

#[test]
fn test_zero_size() {
    let arr = Array::<u64>::new();
    assert_eq!(arr.size(), 0);
    assert_eq!(arr.ptr, NonNull::dangling(), "An empty Array shouldn't allocate.");

    let arr = Array::<u64>::try_new(0).expect("Nothing to allocate.");
    assert_eq!(arr.size(), 0);
    assert_eq!(arr.ptr, NonNull::dangling(), "A zero-sized layout shouldn't allocate.");
}

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::try_new(usize::MAX)
        .expect("ZST layouts are always zero-sized.");
    assert_eq!(arr.size(), usize::MAX);

    let old_ptr = arr.ptr;
    arr.try_realloc(30).expect("ZST layouts are always zero-sized.");
    assert_eq!(arr.size(), 30);
    assert_eq!(
        arr.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
}

#[test]
fn test_realloc() {
    let mut arr = Array::<usize>::try_new(5).expect("Small allocation.");
    for i in 0..5 {
        arr[i] = MaybeUninit::new(i * 10);
    }

    let old_ptr = arr.ptr;
    arr.try_realloc(5).expect("Same size.");
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.try_realloc(12).expect("Small allocation.");
    assert_eq!(arr.size(), 12);
    for i in 0..5 {
        // SAFETY: Slots below 5 were initialized before growing and are preserved.
        assert_eq!(
            unsafe { arr[i].assume_init() }, i * 10,
            "When growing, all existing slots should be preserved."
        );
    }

    arr.try_realloc(3).expect("Shrinking.");
    assert_eq!(arr.size(), 3);
    for i in 0..3 {
        // SAFETY: Slots below 3 are still initialized.
        assert_eq!(unsafe { arr[i].assume_init() }, i * 10);
    }

    arr.try_realloc(0).expect("Deallocating.");
    assert_eq!(arr.size(), 0);
    assert_eq!(
        arr.ptr, NonNull::dangling(),
        "Pointer should be replaced with a dangling one for 0 size."
    );

    arr.try_realloc(4).expect("Small allocation.");
    assert_eq!(arr.size(), 4);
    assert_ne!(
        arr.ptr, NonNull::dangling(),
        "Pointer should be replaced with an allocated one."
    );
}

#[test]
fn test_allocation_failure() {
    assert_eq!(
        Array::<u32>::try_new(usize::MAX).unwrap_err(),
        AllocationFailure { requested: usize::MAX },
        "A layout exceeding isize::MAX bytes should be rejected."
    );

    let mut arr = Array::<u32>::try_new(4).expect("Small allocation.");
    arr[0] = MaybeUninit::new(7);
    let old_ptr = arr.ptr;

    let too_big = isize::MAX as usize;
    assert_eq!(
        arr.try_realloc(too_big),
        Err(AllocationFailure { requested: too_big })
    );
    assert_eq!(arr.size(), 4, "A failed reallocation shouldn't change the size.");
    assert_eq!(arr.ptr, old_ptr, "A failed reallocation shouldn't move the Array.");
    // SAFETY: Slot 0 was initialized above and the Array is unchanged.
    assert_eq!(unsafe { arr[0].assume_init() }, 7);
}

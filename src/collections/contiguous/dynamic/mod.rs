//! A module containing [`DynamicArray`] and its error types.
//!
//! There is deliberately no iteration support here beyond indexed access, through
//! [`DynamicArray::at`] or [`Index`](std::ops::Index).
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;

pub use dynamic_array::*;

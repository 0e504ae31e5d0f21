//! Contiguous collection types. Namely [`DynamicArray`], a resizable array with configurable
//! growth, and [`Array`], the fixed-size storage it is built on.
#![warn(missing_docs)]

pub mod array;
pub mod dynamic;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use dynamic::DynamicArray;

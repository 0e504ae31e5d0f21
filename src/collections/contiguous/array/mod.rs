//! A module containing [`Array`], the raw storage type for contiguous collections.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;

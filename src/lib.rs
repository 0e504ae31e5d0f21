//! A small collections crate, built around [`DynamicArray`](collections::contiguous::DynamicArray):
//! a resizable, contiguous array with a configurable hybrid growth policy.
//!
//! # Growth
//! Every DynamicArray carries its own linear growth quantum (`grow_by`). When it runs out of room,
//! the new capacity is the smaller of two candidates: doubling the current capacity until it fits,
//! or adding the shortfall rounded up to a multiple of `grow_by`. A small quantum keeps memory
//! overhead low, while the doubling candidate caps how far a large quantum can overshoot.
//!
//! # Error Handling
//! Everything that can fail returns a [`Result`]. Errors are strongly typed and statically
//! dispatched: small structs which implement [`Error`](std::error::Error) for each failure, with
//! enums (deriving their impls via `derive_more`) where an operation can fail in more than one
//! way. Allocation failures are errors too, and leave the collection exactly as it was.
//!
//! The only panicking conveniences are the constructor [`DynamicArray::new`] and indexing with
//! `[]`, both of which have non-panicking counterparts.
//!
//! [`DynamicArray::new`]: collections::contiguous::DynamicArray::new
//!
//! # Dependencies
//! Storage comes straight from the global allocator. This crate doesn't use [`Vec`] to implement
//! its collections.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

//! Collection types.
//!
//! # Method
//! Collections here manage their own memory through the global allocator and report recoverable
//! failures (bad indices, failed allocations) as strongly typed errors, rather than panicking.

#[cfg(feature = "contiguous")]
pub mod contiguous;

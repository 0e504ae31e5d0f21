use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the range accepted by the operation it was given to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIndex {
    /// The rejected index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for InvalidIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} is invalid for a collection with {} elements!", self.index, self.len)
    }
}

impl Error for InvalidIndex {}

/// Backing storage for `requested` elements couldn't be provided, either because the allocator
/// refused or because the size of the allocation would overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationFailure {
    /// The number of elements storage was requested for, saturated at [`usize::MAX`].
    pub requested: usize,
}

impl Display for AllocationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate storage for {} elements!", self.requested)
    }
}

impl Error for AllocationFailure {}

/// A search for a matching element came up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No matching element was found!")
    }
}

impl Error for NotFound {}

/// The failure of an operation that needs both a valid index and possibly some growth, such as
/// an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrAllocFailure {
    InvalidIndex(InvalidIndex),
    AllocationFailure(AllocationFailure),
}

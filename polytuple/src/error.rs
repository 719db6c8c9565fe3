use thiserror::Error;

#[allow(unused_imports)] // To link with documentation
use crate::prelude::*;

/// The error returned when an argument handed to a tuple operation cannot be honored.
///
/// Arity mismatches and out-of-range positions known at compile time are rejected by the type
/// system instead; this error covers only what can go wrong at runtime: building a tuple from a
/// source whose length is not known statically, asking for an element by a runtime index, or
/// comparing tuples through the dynamically typed [`OrderedTuple`] interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidArgument {
    /// The source to build a tuple from was absent.
    #[error("source cannot be absent when creating a tuple of {expected} elements")]
    MissingSource {
        /// The size of the tuple being created.
        expected: usize,
    },
    /// A collection of known length had a length other than the size of the tuple.
    #[error("source must have exactly {expected} elements in order to create a tuple, but has {found}")]
    WrongLength {
        /// The size of the tuple being created.
        expected: usize,
        /// The length of the collection.
        found: usize,
    },
    /// A sequence ran out before filling every slot of a tuple.
    #[error("not enough elements for creating a tuple ({expected} needed, {available} available)")]
    NotEnoughElements {
        /// The size of the tuple being created.
        expected: usize,
        /// How many elements remained after the starting offset.
        available: usize,
    },
    /// A sequence still had elements left after filling every slot of a tuple.
    #[error("sequence must have exactly {expected} available elements in order to create a tuple")]
    TooManyElements {
        /// The size of the tuple being created.
        expected: usize,
    },
    /// A runtime index was not a position of the tuple.
    #[error("cannot retrieve position {index} in a tuple of size {size}")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The size of the tuple.
        size: usize,
    },
    /// Two tuples being ordered held elements at the same position which cannot be compared,
    /// either because they are of different types or because their ordering is partial.
    #[error("elements at position {index} cannot be compared")]
    Incomparable {
        /// The first position at which comparison failed.
        index: usize,
    },
}

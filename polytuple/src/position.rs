//! Operations at a constant position, relating tuples of one arity to tuples of another.
//!
//! Every `TupleN` has inherent methods for each of its positions (`value1`, `set_at1`,
//! `remove_at1`, `add_at1`, ...), which are the most convenient way to use these operations. The
//! traits here express the same operations generically over the position, so that code can be
//! written once for any tuple and any position, and so that positions which do not exist are
//! rejected at compile time, simply by having no implementation.
//!
//! # Examples
//!
//! ```
//! use polytuple::{position::*, Tuple2, Tuple3};
//!
//! fn swap_in<T: SetAt<1, char>>(tuple: T) -> T::Output {
//!     tuple.set_at('!')
//! }
//!
//! assert_eq!(swap_in(Tuple2::new(1, "x")), Tuple2::new(1, '!'));
//! assert_eq!(swap_in(Tuple3::new(1, "x", 2.5)), Tuple3::new(1, '!', 2.5));
//! ```
//!
//! There is no position 2 in a pair, so this does not compile:
//!
//! ```compile_fail
//! use polytuple::{position::*, Tuple2};
//!
//! let _ = SetAt::<2, char>::set_at(Tuple2::new(1, "x"), '!');
//! ```

/// Access to the element at the constant position `I`.
pub trait ValueAt<const I: usize> {
    /// The type of the element at position `I`.
    type Value;

    /// Borrow the element at position `I`.
    fn value_at(&self) -> &Self::Value;

    /// Take the element at position `I`, discarding the rest of the tuple.
    fn into_value_at(self) -> Self::Value;
}

/// Replacement of the element at the constant position `P` with a value of type `X`, preserving
/// the arity of the tuple.
pub trait SetAt<const P: usize, X> {
    /// The tuple with `X` in place of its element at position `P`.
    type Output;

    /// Produce a new tuple with `value` at position `P` and every other element unchanged.
    fn set_at(self, value: X) -> Self::Output;
}

/// Removal of the element at the constant position `P`, producing a tuple one element smaller.
///
/// There is no tuple of zero elements, so single-element tuples cannot be shrunk further.
pub trait RemoveAt<const P: usize> {
    /// The tuple without its element at position `P`.
    type Output;

    /// Produce a new tuple holding every element except the one at position `P`, in order.
    fn remove_at(self) -> Self::Output;
}

/// Insertion of the elements of the tuple `T` immediately before the constant position `P`,
/// producing a tuple larger by the size of `T`.
///
/// Position `P` ranges from `0` (before the first element) to the size of the tuple (after the
/// last). Insertions whose result would exceed ten elements are not offered.
pub trait AddAt<const P: usize, T> {
    /// The tuple with the elements of `T` spliced in at position `P`.
    type Output;

    /// Produce a new tuple with the elements of `values` spliced in at position `P`, and the
    /// elements from `P` onwards shifted to follow them.
    fn add_at(self, values: T) -> Self::Output;
}

/// Conversion of a group of values into the tuple which holds them, for insertion by
/// [`AddAt`].
///
/// This is implemented by the tuples of this crate, which convert to themselves, and by native
/// Rust tuples, which convert to the tuple of the same size and element types. A single value to
/// be inserted is written as a native one-element tuple, `(value,)`.
pub trait IntoTuple {
    /// The tuple holding these values.
    type Tuple;

    /// Perform the conversion.
    fn into_tuple(self) -> Self::Tuple;
}

polytuple_macro::impl_value_at!(10);
polytuple_macro::impl_set_at!(10);
polytuple_macro::impl_remove_at!(10);
polytuple_macro::impl_add_at!(10);
polytuple_macro::impl_into_tuple!(10);

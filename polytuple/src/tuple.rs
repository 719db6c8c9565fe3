//! The contract shared by tuples of every arity.
//!
//! Each `TupleN` is its own type, with no subtyping between arities. What they have in common is
//! captured here as capabilities: [`Arity`] gives the size of any tuple type as a constant,
//! [`Tuple`] gives dynamically typed access to the elements of any tuple whose elements are all
//! [`Element`]s, and [`OrderedTuple`] adds ordering when those elements are all
//! [`OrderedElement`]s. Both are object safe, so tuples of different arities can be kept and
//! searched together as `dyn Tuple`, or sorted together as `dyn OrderedTuple`.

use std::{cmp::Ordering, fmt, iter::FusedIterator};

use crate::{Element, InvalidArgument, OrderedElement};

/// The number of elements in a tuple type, known at compile time.
///
/// # Examples
///
/// ```
/// use polytuple::{Arity, Tuple3};
///
/// assert_eq!(<Tuple3<u8, String, ()> as Arity>::SIZE, 3);
/// ```
pub trait Arity {
    /// The number of elements.
    const SIZE: usize;
}

/// Positional access, iteration, containment, and equality over the elements of a tuple of any
/// arity, all dynamically typed.
///
/// This trait is sealed: it is implemented for every `TupleN` whose elements all implement
/// [`Element`], and for nothing else.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use polytuple::{Tuple, Tuple2, Tuple3};
///
/// let tuples: Vec<Box<dyn Tuple>> = vec![
///     Box::new(Tuple3::new(1, 2, 3)),
///     Box::new(Tuple2::new(HashSet::from(["x"]), 9)),
/// ];
///
/// assert_eq!(tuples[0].size(), 3);
/// assert!(tuples[1].contains(&9));
/// assert_eq!(tuples.iter().filter(|t| t.contains(&2)).count(), 1);
/// ```
pub trait Tuple: sealed::Sealed {
    /// The number of elements in this tuple.
    fn size(&self) -> usize;

    /// The element at the given position.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidArgument::IndexOutOfBounds`] if `index` is not less than
    /// [`size`](Tuple::size).
    fn value(&self, index: usize) -> Result<&dyn Element, InvalidArgument>;

    /// Iterate over the elements of this tuple, front to back, without consuming it.
    fn values(&self) -> Values<'_>;

    /// Whether any element of this tuple is equal to `value`.
    ///
    /// Absence is matched like any other value: `contains(&None::<T>)` holds exactly when some
    /// `Option<T>` element is `None`.
    fn contains(&self, value: &dyn Element) -> bool {
        self.values().any(|element| element.eq_element(value))
    }

    /// Whether every one of `values` is [contained](Tuple::contains) in this tuple. This holds
    /// trivially when `values` is empty.
    fn contains_all(&self, values: &[&dyn Element]) -> bool {
        values.iter().all(|value| self.contains(*value))
    }

    /// The first position holding an element equal to `value`.
    fn index_of(&self, value: &dyn Element) -> Option<usize> {
        self.values().position(|element| element.eq_element(value))
    }

    /// The last position holding an element equal to `value`.
    fn last_index_of(&self, value: &dyn Element) -> Option<usize> {
        self.values().rposition(|element| element.eq_element(value))
    }

    /// Collect the elements of this tuple, in order.
    fn to_vec(&self) -> Vec<&dyn Element> {
        self.values().collect()
    }

    /// Whether `other` has the same size as this tuple and equal elements at every position.
    fn eq_tuple(&self, other: &dyn Tuple) -> bool {
        self.size() == other.size()
            && self
                .values()
                .zip(other.values())
                .all(|(mine, theirs)| mine.eq_element(theirs))
    }
}

/// Lexicographic ordering between tuples of any arity whose elements can all be ordered.
///
/// Implemented for every `TupleN` whose elements all implement [`OrderedElement`]. Every such
/// tuple is also a [`Tuple`], so a `dyn OrderedTuple` offers access, iteration, and containment
/// as well as ordering.
///
/// # Examples
///
/// ```
/// use polytuple::{OrderedTuple, Tuple, Tuple2, Tuple3};
///
/// let mut tuples: Vec<Box<dyn OrderedTuple>> = vec![
///     Box::new(Tuple3::new(1, 2, 3)),
///     Box::new(Tuple2::new(1, 2)),
///     Box::new(Tuple2::new(0, 9)),
/// ];
/// tuples.sort_by(|a, b| a.compare(&**b).unwrap());
///
/// assert_eq!(tuples[0].size(), 2);
/// assert!(tuples[0].contains(&9));
/// assert_eq!(tuples[2].size(), 3);
/// ```
pub trait OrderedTuple: Tuple {
    /// The element at the given position, as one which can be ordered.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidArgument::IndexOutOfBounds`] if `index` is not less than
    /// [`size`](Tuple::size).
    fn ordered_value(&self, index: usize) -> Result<&dyn OrderedElement, InvalidArgument>;

    /// View this tuple through its unordered interface.
    fn as_tuple(&self) -> &dyn Tuple;

    /// Compare this tuple with `other` lexicographically.
    ///
    /// Elements are compared position by position, and the first unequal pair decides the
    /// ordering. If one tuple is a prefix of the other, the shorter one orders first.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidArgument::Incomparable`] at the first position where the two elements
    /// have no ordering, because their types differ or their type's ordering is partial.
    fn compare(&self, other: &dyn OrderedTuple) -> Result<Ordering, InvalidArgument> {
        for index in 0..self.size().min(other.size()) {
            let mine = self.ordered_value(index)?;
            let theirs = other.ordered_value(index)?;
            match mine.partial_cmp_element(theirs) {
                Some(Ordering::Equal) => {}
                Some(ordering) => return Ok(ordering),
                None => return Err(InvalidArgument::Incomparable { index }),
            }
        }
        Ok(self.size().cmp(&other.size()))
    }
}

impl<'a> PartialEq for dyn Tuple + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.eq_tuple(other)
    }
}

impl<'a> PartialEq for dyn OrderedTuple + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.eq_tuple(other.as_tuple())
    }
}

impl<'a> PartialOrd for dyn OrderedTuple + 'a {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl<'a> fmt::Debug for dyn Tuple + 'a {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<'a> fmt::Debug for dyn OrderedTuple + 'a {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self.as_tuple(), f)
    }
}

/// An iterator over the elements of a [`Tuple`], returned by [`Tuple::values`] and by iterating
/// over a reference to any tuple.
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Values<'a> {
    tuple: &'a dyn Tuple,
    front: usize,
    back: usize,
}

impl<'a> Values<'a> {
    pub(crate) fn new(tuple: &'a dyn Tuple) -> Self {
        Values {
            tuple,
            front: 0,
            back: tuple.size(),
        }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a dyn Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.tuple.value(self.front).ok();
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for Values<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.tuple.value(self.back).ok()
    }
}

impl<'a> ExactSizeIterator for Values<'a> {}

impl<'a> FusedIterator for Values<'a> {}

pub(crate) mod sealed {
    pub trait Sealed {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tuple1, Tuple2, Tuple3, Tuple4};
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::collections::HashSet;

    #[test]
    fn runtime_index() {
        let tuple = Tuple3::new("a", 2_u8, 'c');
        assert_eq!(Tuple::size(&tuple), 3);
        assert_eq!(
            tuple.value(1).ok().and_then(|v| v.downcast_ref::<u8>()),
            Some(&2)
        );
        assert_eq!(
            tuple.value(3).err(),
            Some(InvalidArgument::IndexOutOfBounds { index: 3, size: 3 })
        );
    }

    #[test]
    fn iteration_is_repeatable() {
        let tuple = Tuple3::new(1, 2, 3);
        for _ in 0..3 {
            let seen: Vec<i32> = tuple
                .values()
                .filter_map(|v| v.downcast_ref::<i32>().copied())
                .collect();
            assert_eq!(seen, [1, 2, 3]);
        }
        let backwards: Vec<i32> = tuple
            .values()
            .rev()
            .filter_map(|v| v.downcast_ref::<i32>().copied())
            .collect();
        assert_eq!(backwards, [3, 2, 1]);
        assert_eq!(tuple.values().len(), 3);
    }

    #[test]
    fn containment() {
        let pair = Tuple2::new("a", None::<i32>);
        assert!(pair.contains(&"a"));
        assert!(pair.contains(&None::<i32>));
        assert!(!pair.contains(&Some(1)));
        assert!(pair.contains_all(&[&None::<i32> as &dyn Element, &"a" as &dyn Element]));
        assert!(!pair.contains_all(&[&None::<i32> as &dyn Element, &"b" as &dyn Element]));
        assert!(pair.contains_all(&[]));
    }

    #[test]
    fn indices_of_values() {
        let tuple = Tuple4::new(5, 6, 5, 7);
        assert_eq!(tuple.index_of(&5), Some(0));
        assert_eq!(tuple.last_index_of(&5), Some(2));
        assert_eq!(tuple.index_of(&8), None);
        assert_eq!(tuple.to_vec().len(), 4);
    }

    #[test]
    fn dynamic_equality_respects_arity() {
        let short: Box<dyn OrderedTuple> = Box::new(Tuple2::new(1, 2));
        let long: Box<dyn OrderedTuple> = Box::new(Tuple3::new(1, 2, 3));
        let same: Box<dyn OrderedTuple> = Box::new(Tuple2::new(1, 2));
        assert!(*short != *long);
        assert!(*short == *same);
        assert_eq!((*short).partial_cmp(&*long), Some(Ordering::Less));
        assert_eq!((*long).partial_cmp(&*short), Some(Ordering::Greater));
        assert!(*short.as_tuple() == *same.as_tuple());
    }

    #[test]
    fn unordered_elements_keep_access_and_equality() {
        let tuple = Tuple2::new(HashSet::from([1]), 7);
        assert_eq!(tuple.values().count(), 2);
        assert_eq!(
            tuple
                .value(0)
                .ok()
                .and_then(|v| v.downcast_ref::<HashSet<i32>>())
                .map(HashSet::len),
            Some(1)
        );
        assert!(tuple.contains(&7));
        assert!(tuple.contains(&HashSet::from([1])));
        assert!(!tuple.contains(&HashSet::from([2])));
        assert!(tuple.eq_tuple(&Tuple2::new(HashSet::from([1]), 7)));
        assert_eq!(format!("{:?}", &tuple as &dyn Tuple), "[{1}, 7]");
    }

    assert_impl_all!(Tuple2<HashSet<i32>, i32>: Tuple);
    assert_not_impl_any!(Tuple2<HashSet<i32>, i32>: OrderedTuple);
    assert_impl_all!(Tuple2<f64, &'static str>: Tuple, OrderedTuple);

    #[test]
    fn incomparable_elements() {
        let numbers = Tuple2::new(1, 2);
        let mixed = Tuple2::new(1, "2");
        assert_eq!(
            numbers.compare(&mixed),
            Err(InvalidArgument::Incomparable { index: 1 })
        );
        let nan = Tuple1::new(f64::NAN);
        assert_eq!(
            nan.compare(&nan),
            Err(InvalidArgument::Incomparable { index: 0 })
        );
    }

    #[test]
    fn debug_lists_elements() {
        let tuple: &dyn Tuple = &Tuple2::new(1, "x");
        assert_eq!(format!("{:?}", tuple), r#"[1, "x"]"#);
    }
}

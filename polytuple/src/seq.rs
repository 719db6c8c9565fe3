//! Filling the slots of a tuple from a sequence whose length is only known at runtime.
//!
//! Every arity funnels its sequence constructors through the two helpers here, which produce an
//! array of the tuple's size; the generated code then destructures that array into the slots.

use std::{array, convert::TryFrom};

use crate::InvalidArgument;

/// Skip `offset` elements of `source`, then take exactly `N`, failing unless exactly `N` remain.
pub(crate) fn exact<X, I, const N: usize>(
    source: I,
    offset: usize,
) -> Result<[X; N], InvalidArgument>
where
    I: IntoIterator<Item = X>,
{
    let mut iter = source.into_iter().skip(offset);
    let taken: Vec<X> = iter.by_ref().take(N).collect();
    if taken.len() < N {
        let available = taken.len();
        tracing::debug!(expected = N, available, offset, "not enough elements for tuple");
        return Err(InvalidArgument::NotEnoughElements {
            expected: N,
            available,
        });
    }
    if iter.next().is_some() {
        tracing::debug!(expected = N, offset, "too many elements for tuple");
        return Err(InvalidArgument::TooManyElements { expected: N });
    }
    <[X; N]>::try_from(taken).map_err(|taken| InvalidArgument::NotEnoughElements {
        expected: N,
        available: taken.len(),
    })
}

/// Skip `offset` elements of `source`, then take up to `N`, leaving `None` in any slot the source
/// runs out before reaching. Whatever follows the `N`th element is never consumed.
pub(crate) fn padded<X, I, const N: usize>(source: I, offset: usize) -> [Option<X>; N]
where
    I: IntoIterator<Item = X>,
{
    let mut iter = source.into_iter().skip(offset).fuse();
    array::from_fn(|_| iter.next())
}

pub(crate) fn wrong_length(expected: usize, found: usize) -> InvalidArgument {
    tracing::debug!(expected, found, "wrong number of elements for tuple");
    InvalidArgument::WrongLength { expected, found }
}

pub(crate) fn missing_source(expected: usize) -> InvalidArgument {
    tracing::debug!(expected, "absent source for tuple");
    InvalidArgument::MissingSource { expected }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_takes_everything() {
        assert_eq!(exact::<_, _, 3>(vec![1, 2, 3], 0), Ok([1, 2, 3]));
        assert_eq!(exact::<_, _, 2>(vec![1, 2, 3], 1), Ok([2, 3]));
    }

    #[test]
    fn exact_rejects_short_and_long() {
        assert_eq!(
            exact::<_, _, 3>(vec![1, 2], 0),
            Err(InvalidArgument::NotEnoughElements {
                expected: 3,
                available: 2
            })
        );
        assert_eq!(
            exact::<_, _, 2>(vec![1, 2, 3], 0),
            Err(InvalidArgument::TooManyElements { expected: 2 })
        );
        assert_eq!(
            exact::<_, _, 1>(vec![1, 2, 3], 5),
            Err(InvalidArgument::NotEnoughElements {
                expected: 1,
                available: 0
            })
        );
    }

    #[test]
    fn padded_never_fails() {
        assert_eq!(padded::<_, _, 2>(vec![1, 2, 3], 0), [Some(1), Some(2)]);
        assert_eq!(padded::<_, _, 3>(vec![1, 2, 3], 2), [Some(3), None, None]);
        assert_eq!(padded::<_, _, 2>(Vec::<i32>::new(), 4), [None, None]);
    }

    #[test]
    fn padded_stops_consuming_once_full() {
        let mut pulled = 0;
        let source = (0..).inspect(|_| pulled += 1);
        assert_eq!(padded::<_, _, 3>(source, 1), [Some(1), Some(2), Some(3)]);
        assert_eq!(pulled, 4);
    }
}

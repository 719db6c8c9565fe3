/*!
Fixed-arity, strongly-typed, immutable tuples, from one to ten elements.

Rust's native tuples are anonymous and closed: there is no way to name "the tuple with one more
element than this one", to insert into or remove from them, or to treat tuples of different
sizes uniformly. This crate provides ten tuple types, [`Tuple1`] through [`Tuple10`], which are
ordinary values (compared, hashed, ordered, and cloned element-wise) and which additionally know
how to become each other:

- **Add** values at any position, producing a larger tuple:
  [`add_at1`](Tuple2::add_at1), [`add`](Tuple2::add), [`push`](Tuple2::push).
- **Set** the value at any position, producing a tuple of the same size whose element at that
  position may have changed type: [`set_at0`](Tuple2::set_at0).
- **Remove** the value at any position, producing a smaller tuple:
  [`remove_at1`](Tuple2::remove_at1).

Each of these is a pure function of the tuple it is given: nothing is ever mutated in place, and
every position is checked at compile time. The same operations are available generically over
their position through the traits in [`position`].

```
use polytuple::{Tuple2, Tuple3, Tuple4};

let pair = Tuple2::new("one", 2);
let triplet: Tuple3<&str, char, i32> = pair.add_at1(('x',));
let quartet: Tuple4<&str, char, i32, f64> = triplet.push(4.0);

assert_eq!(quartet.remove_at1(), Tuple3::new("one", 2, 4.0));
assert_eq!(quartet.set_at0(1), Tuple4::new(1, 'x', 2, 4.0));
assert_eq!(*quartet.get::<2>(), 2);
```

## Building tuples from runtime data

Tuples can be built from sequences of a single element type whose length is only known at
runtime, in one of two modes:

- **Checked**: [`from_slice`](Tuple3::from_slice), [`from_option`](Tuple3::from_option),
  [`from_iter_exact`](Tuple3::from_iter_exact), and
  [`from_iter_exact_at`](Tuple3::from_iter_exact_at) demand exactly as many elements as the
  tuple has, failing with an [`InvalidArgument`] otherwise.
- **Unchecked**: [`from_iter_at`](Tuple3::from_iter_at) takes as many elements as it can from a
  starting offset, ignoring any surplus and filling any shortfall with `None`.

```
use polytuple::{InvalidArgument, Tuple2};

assert_eq!(Tuple2::from_iter_exact(vec![1, 2]), Ok(Tuple2::new(1, 2)));
assert_eq!(
    Tuple2::from_iter_exact(vec![1, 2, 3]),
    Err(InvalidArgument::TooManyElements { expected: 2 }),
);
assert_eq!(
    Tuple2::from_iter_at(vec![1, 2, 3], 0),
    Tuple2::new(Some(1), Some(2)),
);
```

## Tuples of any arity

The [`Tuple`] trait exposes the elements of any tuple as dynamically typed [`Element`]s, so that
tuples of different sizes can be iterated, searched, and compared for equality together as
`dyn Tuple`. When every element can also be ordered, [`OrderedTuple`] adds lexicographic
comparison, so that tuples of different sizes can be sorted together as `dyn OrderedTuple`.

## Features

- `serde`: implement `Serialize` and `Deserialize` for every tuple, as the sequence of its
  elements.
- `quickcheck`: implement `quickcheck::Arbitrary` for every tuple.
*/

#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod position;

mod arity;
mod element;
mod error;
mod seq;
mod tuple;

pub use arity::*;
pub use element::{Element, OrderedElement};
pub use error::InvalidArgument;
pub use position::{AddAt, IntoTuple, RemoveAt, SetAt, ValueAt};
pub use tuple::{Arity, OrderedTuple, Tuple, Values};

/// The prelude module for quickly getting started with polytuple.
///
/// This module is designed to be imported as `use polytuple::prelude::*;`, which brings into scope
/// every tuple type and the traits needed to work with tuples of any arity.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        Arity, Element, InvalidArgument, OrderedElement, OrderedTuple, Tuple, Tuple1, Tuple10,
        Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8, Tuple9,
    };
}

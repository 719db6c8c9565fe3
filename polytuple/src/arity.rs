//! The tuples themselves, one struct per arity from 1 to 10.

polytuple_macro::define_tuples!(10);

/// A tuple of one element.
pub type Unit<A> = Tuple1<A>;
/// A tuple of two elements.
pub type Pair<A, B> = Tuple2<A, B>;
/// A tuple of three elements.
pub type Triplet<A, B, C> = Tuple3<A, B, C>;
/// A tuple of four elements.
pub type Quartet<A, B, C, D> = Tuple4<A, B, C, D>;
/// A tuple of five elements.
pub type Quintet<A, B, C, D, E> = Tuple5<A, B, C, D, E>;
/// A tuple of six elements.
pub type Sextet<A, B, C, D, E, F> = Tuple6<A, B, C, D, E, F>;
/// A tuple of seven elements.
pub type Septet<A, B, C, D, E, F, G> = Tuple7<A, B, C, D, E, F, G>;
/// A tuple of eight elements.
pub type Octet<A, B, C, D, E, F, G, H> = Tuple8<A, B, C, D, E, F, G, H>;
/// A tuple of nine elements.
pub type Ennead<A, B, C, D, E, F, G, H, I> = Tuple9<A, B, C, D, E, F, G, H, I>;
/// A tuple of ten elements.
pub type Decade<A, B, C, D, E, F, G, H, I, J> = Tuple10<A, B, C, D, E, F, G, H, I, J>;

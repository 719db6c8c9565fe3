//! Procedural macros generating the per-arity items of the `polytuple` crate.
//!
//! Each macro takes a single integer literal, the largest arity to generate for, and expands to
//! every item needed for every arity up to it. They are only meaningful when invoked from within
//! `polytuple` itself, since the generated code names that crate's items through `crate::` paths.

extern crate proc_macro;

use {proc_macro::TokenStream, proc_macro2::TokenStream as TokenStream2, syn::LitInt};

mod arity;
mod position;
mod structs;

/// Define the structs `Tuple1` through `TupleN`, with their constructors, accessors,
/// per-position transformations, conversions, and the dynamically typed tuple contract.
#[proc_macro]
pub fn define_tuples(input: TokenStream) -> TokenStream {
    expand(input, structs::define)
}

/// Implement `ValueAt<I>` for every position of every arity.
#[proc_macro]
pub fn impl_value_at(input: TokenStream) -> TokenStream {
    expand(input, position::value_at)
}

/// Implement `SetAt<P, X>` for every position of every arity.
#[proc_macro]
pub fn impl_set_at(input: TokenStream) -> TokenStream {
    expand(input, position::set_at)
}

/// Implement `RemoveAt<P>` for every position of every arity with at least two elements.
#[proc_macro]
pub fn impl_remove_at(input: TokenStream) -> TokenStream {
    expand(input, position::remove_at)
}

/// Implement `AddAt<P, TupleK>` for every position of every arity, for every width `K` that keeps
/// the result within the maximum arity.
#[proc_macro]
pub fn impl_add_at(input: TokenStream) -> TokenStream {
    expand(input, position::add_at)
}

/// Implement `IntoTuple` for native tuples and for the tuples of every arity.
#[proc_macro]
pub fn impl_into_tuple(input: TokenStream) -> TokenStream {
    expand(input, position::into_tuple)
}

fn expand(input: TokenStream, generate: fn(usize) -> TokenStream2) -> TokenStream {
    match max_arity(input) {
        Ok(max) => generate(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn max_arity(input: TokenStream) -> syn::Result<usize> {
    let literal: LitInt = syn::parse(input)?;
    let max = literal.base10_parse::<usize>()?;
    if max == 0 || max > arity::LETTERS {
        return Err(syn::Error::new(
            literal.span(),
            format!(
                "maximum arity must be between 1 and {}, not {}",
                arity::LETTERS,
                max
            ),
        ));
    }
    Ok(max)
}

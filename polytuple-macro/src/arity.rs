//! Naming conventions shared by every generator: the struct name of a given arity, its element
//! type parameters, and the bindings used when destructuring it.

use {
    proc_macro2::{Ident, Literal, TokenStream},
    quote::{format_ident, quote},
};

/// The largest arity the generators can name element parameters for (`A` through `W`), leaving
/// `X` free for inserted and replacement types.
pub const LETTERS: usize = 23;

/// A single tuple size, from which all generated names are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity(usize);

impl Arity {
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0 && size <= LETTERS);
        Arity(size)
    }

    pub fn size(self) -> usize {
        self.0
    }

    /// `TupleN`.
    pub fn name(self) -> Ident {
        format_ident!("Tuple{}", self.0)
    }

    /// `A, B, C, ...` for the element types.
    pub fn params(self) -> Vec<Ident> {
        (0..self.0).map(element_param).collect()
    }

    /// `value0, value1, ...` for destructured elements.
    pub fn values(self) -> Vec<Ident> {
        self.bindings("value")
    }

    pub fn bindings(self, prefix: &str) -> Vec<Ident> {
        (0..self.0).map(|i| format_ident!("{}{}", prefix, i)).collect()
    }

    /// Tuple-struct field accessors `0, 1, 2, ...`.
    pub fn indices(self) -> Vec<syn::Index> {
        (0..self.0).map(syn::Index::from).collect()
    }

    /// The full type `TupleN<T0, T1, ...>` applied to the given arguments.
    pub fn ty<T: quote::ToTokens>(self, args: &[T]) -> TokenStream {
        debug_assert_eq!(args.len(), self.0);
        let name = self.name();
        quote!(#name<#(#args),*>)
    }

    /// The same type, as seen from outside the module that defines it.
    pub fn path<T: quote::ToTokens>(self, args: &[T]) -> TokenStream {
        let ty = self.ty(args);
        quote!(crate::#ty)
    }

    /// `TupleN<X, X, ...>`, the homogeneous instance over `elem`.
    pub fn homogeneous(self, elem: &TokenStream) -> TokenStream {
        self.ty(&vec![elem.clone(); self.0])
    }
}

pub fn element_param(i: usize) -> Ident {
    format_ident!("{}", (b'A' + i as u8) as char)
}

/// `X0, X1, ...` for the types of inserted elements, distinct from every element parameter.
pub fn insert_params(k: usize) -> Vec<Ident> {
    (0..k).map(|i| format_ident!("X{}", i)).collect()
}

/// An unsuffixed integer literal, suitable as a const generic argument.
pub fn position(p: usize) -> Literal {
    Literal::usize_unsuffixed(p)
}

/// Clone `items`, replacing the entry at `p` with `with`.
pub fn replaced<T: Clone>(items: &[T], p: usize, with: T) -> Vec<T> {
    let mut items = items.to_vec();
    items[p] = with;
    items
}

/// Clone `items`, dropping the entry at `p`.
pub fn removed<T: Clone>(items: &[T], p: usize) -> Vec<T> {
    let mut items = items.to_vec();
    let _ = items.remove(p);
    items
}

/// Clone `items`, splicing `inserted` in immediately before position `p`.
pub fn spliced<T: Clone>(items: &[T], p: usize, inserted: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(items.len() + inserted.len());
    result.extend_from_slice(&items[..p]);
    result.extend_from_slice(inserted);
    result.extend_from_slice(&items[p..]);
    result
}

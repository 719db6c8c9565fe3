//! Generation of the positional trait impls, which relate a tuple of one arity to the tuple of
//! another arity produced by reading, replacing, removing, or inserting at a constant position.
//!
//! This output is expanded outside the module that owns the structs, so it goes through their
//! public constructors and accessors only.

use {
    proc_macro2::TokenStream,
    quote::{format_ident, quote},
};

use crate::arity::{self, Arity};

pub fn value_at(max: usize) -> TokenStream {
    (1..=max)
        .flat_map(|n| {
            let arity = Arity::new(n);
            let params = arity.params();
            let ty = arity.path(&params);
            (0..n).map(move |i| {
                let position = arity::position(i);
                let param = &params[i];
                let getter = format_ident!("value{}", i);
                let index = syn::Index::from(i);
                quote! {
                    impl<#(#params),*> ValueAt<#position> for #ty {
                        type Value = #param;

                        fn value_at(&self) -> &#param {
                            self.#getter()
                        }

                        fn into_value_at(self) -> #param {
                            self.into_inner().#index
                        }
                    }
                }
            })
        })
        .collect()
}

pub fn set_at(max: usize) -> TokenStream {
    (1..=max)
        .flat_map(|n| {
            let arity = Arity::new(n);
            let params = arity.params();
            let ty = arity.path(&params);
            (0..n).map(move |p| {
                let position = arity::position(p);
                let method = format_ident!("set_at{}", p);
                let output = arity.path(&arity::replaced(&params, p, format_ident!("X")));
                quote! {
                    impl<#(#params,)* X> SetAt<#position, X> for #ty {
                        type Output = #output;

                        fn set_at(self, value: X) -> Self::Output {
                            self.#method(value)
                        }
                    }
                }
            })
        })
        .collect()
}

pub fn remove_at(max: usize) -> TokenStream {
    (2..=max)
        .flat_map(|n| {
            let arity = Arity::new(n);
            let smaller = Arity::new(n - 1);
            let params = arity.params();
            let ty = arity.path(&params);
            (0..n).map(move |p| {
                let position = arity::position(p);
                let method = format_ident!("remove_at{}", p);
                let output = smaller.path(&arity::removed(&params, p));
                quote! {
                    impl<#(#params),*> RemoveAt<#position> for #ty {
                        type Output = #output;

                        fn remove_at(self) -> Self::Output {
                            self.#method()
                        }
                    }
                }
            })
        })
        .collect()
}

/// Every insertion of a `TupleK` into a `TupleN` at every position `0..=N`, wherever `N + K` does
/// not exceed `max`.
pub fn add_at(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    for n in 1..max {
        let arity = Arity::new(n);
        let params = arity.params();
        let values = arity.values();
        let ty = arity.path(&params);
        for k in 1..=(max - n) {
            let inserted = Arity::new(k);
            let xs = arity::insert_params(k);
            let xvalues = inserted.bindings("inserted");
            let insert_ty = inserted.path(&xs);
            let result = Arity::new(n + k);
            let result_name = result.name();
            for p in 0..=n {
                let position = arity::position(p);
                let output = result.path(&arity::spliced(&params, p, &xs));
                let combined = arity::spliced(&values, p, &xvalues);
                impls.extend(quote! {
                    impl<#(#params,)* #(#xs),*> AddAt<#position, #insert_ty> for #ty {
                        type Output = #output;

                        fn add_at(self, values: #insert_ty) -> Self::Output {
                            let (#(#values,)*) = self.into_inner();
                            let (#(#xvalues,)*) = values.into_inner();
                            crate::#result_name::new(#(#combined),*)
                        }
                    }
                });
            }
        }
    }
    impls
}

/// Native tuples and tuples of this crate alike, of every arity up to `max`, as the values handed
/// to an insertion.
pub fn into_tuple(max: usize) -> TokenStream {
    (1..=max)
        .map(|k| {
            let arity = Arity::new(k);
            let xs = arity::insert_params(k);
            let ty = arity.path(&xs);
            quote! {
                impl<#(#xs),*> IntoTuple for (#(#xs,)*) {
                    type Tuple = #ty;

                    fn into_tuple(self) -> Self::Tuple {
                        <#ty>::from(self)
                    }
                }

                impl<#(#xs),*> IntoTuple for #ty {
                    type Tuple = Self;

                    fn into_tuple(self) -> Self {
                        self
                    }
                }
            }
        })
        .collect()
}

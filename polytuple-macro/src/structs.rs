//! Generation of the tuple structs themselves, along with everything defined per arity:
//! constructors, accessors, per-position transformations, conversions, and the dynamically typed
//! `Tuple` and `OrderedTuple` contracts.
//!
//! This output must be expanded inside the module that owns the structs, because it reaches into
//! their private fields.

use {
    proc_macro2::TokenStream,
    quote::{format_ident, quote},
};

use crate::arity::{self, Arity};

const NAMES: [&str; 10] = [
    "Unit", "Pair", "Triplet", "Quartet", "Quintet", "Sextet", "Septet", "Octet", "Ennead", "Decade",
];

pub fn define(max: usize) -> TokenStream {
    (1..=max).map(|n| define_arity(Arity::new(n), max)).collect()
}

fn define_arity(arity: Arity, max: usize) -> TokenStream {
    let n = arity.size();
    let name = arity.name();
    let params = arity.params();
    let values = arity.values();
    let ty = arity.ty(&params);

    let mut doc = format!(
        "An immutable tuple of {} element{}.",
        n,
        if n == 1 { "" } else { "s" }
    );
    if let Some(alias) = NAMES.get(n - 1) {
        doc.push_str(&format!(" Also available as [`{}`].", alias));
    }

    let getters = getters(arity);
    let setters = setters(arity);
    let removers = removers(arity);
    let adders = if n < max { adders(arity) } else { quote!() };
    let constructors = constructors(arity);
    let conversions = conversions(arity);
    let dynamic = dynamic(arity);

    let new_doc = format!("Construct a tuple from exactly {} values.", n);

    // Serde treats one-field tuple structs as newtypes, so that arity is written by hand to keep
    // every tuple a sequence.
    let (serde_derive, serde_impls) = if n == 1 {
        (quote!(), single_serde(arity))
    } else {
        (
            quote! {
                #[cfg_attr(
                    feature = "serde",
                    derive(serde_crate::Serialize, serde_crate::Deserialize),
                    serde(crate = "serde_crate")
                )]
            },
            quote!(),
        )
    };

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #serde_derive
        pub struct #ty(#(#params),*);

        #serde_impls

        impl<#(#params),*> #ty {
            /// The number of elements in this tuple.
            pub const SIZE: usize = #n;

            #[doc = #new_doc]
            pub const fn new(#(#values: #params),*) -> Self {
                #name(#(#values),*)
            }

            /// The number of elements in this tuple, which is always [`Self::SIZE`].
            pub const fn size(&self) -> usize {
                #n
            }

            /// Unwrap this tuple into the equivalent native Rust tuple.
            pub fn into_inner(self) -> (#(#params,)*) {
                let #name(#(#values),*) = self;
                (#(#values,)*)
            }

            /// Borrow the element at the constant position `INDEX`.
            ///
            /// Positions past the end of the tuple do not compile.
            pub fn get<const INDEX: usize>(&self) -> &<Self as crate::ValueAt<INDEX>>::Value
            where
                Self: crate::ValueAt<INDEX>,
            {
                <Self as crate::ValueAt<INDEX>>::value_at(self)
            }

            #getters
            #setters
            #removers
            #adders
        }

        impl<#(#params),*> crate::Arity for #ty {
            const SIZE: usize = #n;
        }

        #constructors
        #conversions
        #dynamic
    }
}

fn single_serde(arity: Arity) -> TokenStream {
    let params = arity.params();
    let param = &params[0];
    let ty = arity.ty(&params);

    quote! {
        #[cfg(feature = "serde")]
        impl<#param: serde_crate::Serialize> serde_crate::Serialize for #ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde_crate::Serializer,
            {
                serde_crate::Serialize::serialize(&(&self.0,), serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, #param: serde_crate::Deserialize<'de>> serde_crate::Deserialize<'de> for #ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde_crate::Deserializer<'de>,
            {
                <(#param,) as serde_crate::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self::from)
            }
        }
    }
}

fn getters(arity: Arity) -> TokenStream {
    arity
        .params()
        .iter()
        .zip(arity.indices())
        .enumerate()
        .map(|(i, (param, index))| {
            let method = format_ident!("value{}", i);
            let doc = format!("The element at position {}.", i);
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> &#param {
                    &self.#index
                }
            }
        })
        .collect()
}

fn setters(arity: Arity) -> TokenStream {
    let name = arity.name();
    let params = arity.params();
    let values = arity.values();
    (0..arity.size())
        .map(|p| {
            let method = format_ident!("set_at{}", p);
            let output = arity.ty(&arity::replaced(&params, p, format_ident!("X")));
            let pattern = arity::replaced(
                &values.iter().map(|v| quote!(#v)).collect::<Vec<_>>(),
                p,
                quote!(_),
            );
            let rebuilt = arity::replaced(&values, p, format_ident!("value"));
            let doc = format!(
                "Replace the element at position {} with `value`, which may be of a different type.",
                p
            );
            quote! {
                #[doc = #doc]
                pub fn #method<X>(self, value: X) -> #output {
                    let #name(#(#pattern),*) = self;
                    #name(#(#rebuilt),*)
                }
            }
        })
        .collect()
}

fn removers(arity: Arity) -> TokenStream {
    if arity.size() < 2 {
        return quote!();
    }
    let name = arity.name();
    let params = arity.params();
    let values = arity.values();
    let smaller = Arity::new(arity.size() - 1);
    let smaller_name = smaller.name();
    (0..arity.size())
        .map(|p| {
            let method = format_ident!("remove_at{}", p);
            let output = smaller.ty(&arity::removed(&params, p));
            let pattern = arity::replaced(
                &values.iter().map(|v| quote!(#v)).collect::<Vec<_>>(),
                p,
                quote!(_),
            );
            let kept = arity::removed(&values, p);
            let doc = format!(
                "Remove the element at position {}, producing a tuple of {} elements.",
                p,
                smaller.size()
            );
            quote! {
                #[doc = #doc]
                pub fn #method(self) -> #output {
                    let #name(#(#pattern),*) = self;
                    #smaller_name(#(#kept),*)
                }
            }
        })
        .collect()
}

fn adders(arity: Arity) -> TokenStream {
    let n = arity.size();
    let name = arity.name();
    let params = arity.params();
    let values = arity.values();

    let per_position: TokenStream = (0..=n)
        .map(|p| {
            let method = format_ident!("add_at{}", p);
            let position = arity::position(p);
            let doc = format!(
                "Insert `values` immediately before position {}, shifting the elements at and \
                 after it to the right.\n\n`values` is either a native tuple of individually \
                 typed values, or another tuple whose elements are inserted in order.",
                p
            );
            quote! {
                #[doc = #doc]
                pub fn #method<Insert>(
                    self,
                    values: Insert,
                ) -> <Self as crate::AddAt<#position, Insert::Tuple>>::Output
                where
                    Insert: crate::IntoTuple,
                    Self: crate::AddAt<#position, Insert::Tuple>,
                {
                    <Self as crate::AddAt<#position, Insert::Tuple>>::add_at(self, values.into_tuple())
                }
            }
        })
        .collect();

    let end = arity::position(n);
    let larger = Arity::new(n + 1);
    let larger_name = larger.name();
    let pushed = larger.ty(
        &params
            .iter()
            .cloned()
            .chain(std::iter::once(format_ident!("X")))
            .collect::<Vec<_>>(),
    );

    quote! {
        #per_position

        /// Append `values` after the last element.
        pub fn add<Insert>(self, values: Insert) -> <Self as crate::AddAt<#end, Insert::Tuple>>::Output
        where
            Insert: crate::IntoTuple,
            Self: crate::AddAt<#end, Insert::Tuple>,
        {
            <Self as crate::AddAt<#end, Insert::Tuple>>::add_at(self, values.into_tuple())
        }

        /// Append a single `value` after the last element.
        pub fn push<X>(self, value: X) -> #pushed {
            let #name(#(#values),*) = self;
            #larger_name(#(#values,)* value)
        }
    }
}

fn constructors(arity: Arity) -> TokenStream {
    let n = arity.size();
    let x = quote!(X);
    let homogeneous = arity.homogeneous(&x);
    let optional = arity.homogeneous(&quote!(Option<X>));

    quote! {
        impl<X> #homogeneous {
            /// Construct a tuple from a slice holding exactly as many elements as the tuple.
            ///
            /// # Errors
            ///
            /// Fails with [`InvalidArgument::WrongLength`](crate::InvalidArgument::WrongLength)
            /// if the slice is longer or shorter than the tuple.
            pub fn from_slice(slice: &[X]) -> Result<Self, crate::InvalidArgument>
            where
                X: Clone,
            {
                let array: &[X; #n] = ::std::convert::TryFrom::try_from(slice)
                    .map_err(|_| crate::seq::wrong_length(#n, slice.len()))?;
                Ok(Self::from(array.clone()))
            }

            /// Construct a tuple from a source which might be absent, requiring exactly as many
            /// elements as the tuple.
            ///
            /// # Errors
            ///
            /// Fails with [`InvalidArgument::MissingSource`](crate::InvalidArgument::MissingSource)
            /// if there is no source, and otherwise as [`from_iter_exact`](Self::from_iter_exact).
            pub fn from_option<I>(source: Option<I>) -> Result<Self, crate::InvalidArgument>
            where
                I: IntoIterator<Item = X>,
            {
                match source {
                    Some(source) => Self::from_iter_exact(source),
                    None => Err(crate::seq::missing_source(#n)),
                }
            }

            /// Construct a tuple from a sequence holding exactly as many elements as the tuple.
            ///
            /// # Errors
            ///
            /// Fails with
            /// [`InvalidArgument::NotEnoughElements`](crate::InvalidArgument::NotEnoughElements)
            /// or [`InvalidArgument::TooManyElements`](crate::InvalidArgument::TooManyElements).
            pub fn from_iter_exact<I>(source: I) -> Result<Self, crate::InvalidArgument>
            where
                I: IntoIterator<Item = X>,
            {
                Self::from_iter_exact_at(source, 0)
            }

            /// Construct a tuple from a sequence, skipping its first `offset` elements, after
            /// which exactly as many elements as the tuple must remain.
            ///
            /// # Errors
            ///
            /// Fails with
            /// [`InvalidArgument::NotEnoughElements`](crate::InvalidArgument::NotEnoughElements)
            /// or [`InvalidArgument::TooManyElements`](crate::InvalidArgument::TooManyElements).
            pub fn from_iter_exact_at<I>(source: I, offset: usize) -> Result<Self, crate::InvalidArgument>
            where
                I: IntoIterator<Item = X>,
            {
                crate::seq::exact::<X, I, #n>(source, offset).map(Self::from)
            }
        }

        impl<X> #optional {
            /// Construct a tuple from a sequence, skipping its first `offset` elements, without
            /// checking how many elements remain.
            ///
            /// Elements past those needed are ignored, and any slot left unfilled holds `None`.
            pub fn from_iter_at<I>(source: I, offset: usize) -> Self
            where
                I: IntoIterator<Item = X>,
            {
                Self::from(crate::seq::padded::<X, I, #n>(source, offset))
            }
        }
    }
}

fn conversions(arity: Arity) -> TokenStream {
    let n = arity.size();
    let name = arity.name();
    let params = arity.params();
    let values = arity.values();
    let indices = arity.indices();
    let ty = arity.ty(&params);
    let homogeneous = arity.homogeneous(&quote!(X));

    let display_rest = indices.iter().skip(1).map(|index| {
        quote! {
            f.write_str(", ")?;
            ::std::fmt::Display::fmt(&self.#index, f)?;
        }
    });
    let first = &indices[0];

    quote! {
        impl<#(#params),*> From<(#(#params,)*)> for #ty {
            fn from((#(#values,)*): (#(#params,)*)) -> Self {
                #name(#(#values),*)
            }
        }

        impl<#(#params),*> From<#ty> for (#(#params,)*) {
            fn from(tuple: #ty) -> Self {
                tuple.into_inner()
            }
        }

        impl<X> From<[X; #n]> for #homogeneous {
            fn from([#(#values),*]: [X; #n]) -> Self {
                #name(#(#values),*)
            }
        }

        impl<X> From<#homogeneous> for [X; #n] {
            fn from(#name(#(#values),*): #homogeneous) -> Self {
                [#(#values),*]
            }
        }

        impl<X> ::std::convert::TryFrom<Vec<X>> for #homogeneous {
            type Error = crate::InvalidArgument;

            fn try_from(vec: Vec<X>) -> Result<Self, Self::Error> {
                let found = vec.len();
                <[X; #n] as ::std::convert::TryFrom<Vec<X>>>::try_from(vec)
                    .map(Self::from)
                    .map_err(|_| crate::seq::wrong_length(#n, found))
            }
        }

        impl<'a, X: Clone> ::std::convert::TryFrom<&'a [X]> for #homogeneous {
            type Error = crate::InvalidArgument;

            fn try_from(slice: &'a [X]) -> Result<Self, Self::Error> {
                Self::from_slice(slice)
            }
        }

        impl<#(#params: ::std::fmt::Display),*> ::std::fmt::Display for #ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("[")?;
                ::std::fmt::Display::fmt(&self.#first, f)?;
                #(#display_rest)*
                f.write_str("]")
            }
        }

        #[cfg(feature = "quickcheck")]
        impl<#(#params: ::quickcheck::Arbitrary),*> ::quickcheck::Arbitrary for #ty {
            fn arbitrary(g: &mut ::quickcheck::Gen) -> Self {
                #name(#(<#params as ::quickcheck::Arbitrary>::arbitrary(g)),*)
            }
        }
    }
}

fn dynamic(arity: Arity) -> TokenStream {
    let n = arity.size();
    let params = arity.params();
    let indices = arity.indices();
    let positions: Vec<_> = (0..n).map(arity::position).collect();
    let ty = arity.ty(&params);

    quote! {
        impl<#(#params),*> crate::tuple::sealed::Sealed for #ty {}

        impl<#(#params: crate::Element),*> crate::Tuple for #ty {
            fn size(&self) -> usize {
                #n
            }

            fn value(&self, index: usize) -> Result<&dyn crate::Element, crate::InvalidArgument> {
                match index {
                    #(#positions => Ok(&self.#indices as &dyn crate::Element),)*
                    _ => Err(crate::InvalidArgument::IndexOutOfBounds { index, size: #n }),
                }
            }

            fn values(&self) -> crate::Values<'_> {
                crate::Values::new(self)
            }
        }

        impl<#(#params: crate::OrderedElement),*> crate::OrderedTuple for #ty {
            fn ordered_value(
                &self,
                index: usize,
            ) -> Result<&dyn crate::OrderedElement, crate::InvalidArgument> {
                match index {
                    #(#positions => Ok(&self.#indices as &dyn crate::OrderedElement),)*
                    _ => Err(crate::InvalidArgument::IndexOutOfBounds { index, size: #n }),
                }
            }

            fn as_tuple(&self) -> &dyn crate::Tuple {
                self
            }
        }

        impl<'a, #(#params: crate::Element),*> IntoIterator for &'a #ty {
            type Item = &'a dyn crate::Element;
            type IntoIter = crate::Values<'a>;

            fn into_iter(self) -> Self::IntoIter {
                crate::Values::new(self)
            }
        }
    }
}

//! Procedural macros used by `vecn`.
//!
//! Do not use this crate directly, use `vecn` instead.

use proc_macro::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    parse::{Error, Parser},
    punctuated::Punctuated,
    Ident, Token,
};

/// Longest swizzle that gets generated (and longest vector it can be applied to).
const MAX_LEN: usize = 4;

/// Emits one accessor method per ordered selection (with repetition) of 2, 3 or 4 components.
///
/// Each argument is an *alphabet*: an identifier whose letters name the components of the vector
/// in order (eg. `xyzw` or `rgba`). All alphabets must have the same length, which is the number
/// of components of the vector the methods are generated for.
///
/// Must be invoked inside an `impl<T: Copy> Vector<T, N>` block that provides a
/// `swizzle<const M: usize>(self, [usize; M]) -> Vector<T, M>` method.
#[proc_macro]
pub fn swizzles(input: TokenStream) -> TokenStream {
    match expand_swizzles(input) {
        Ok(tokens) => tokens,
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_swizzles(input: TokenStream) -> syn::Result<TokenStream> {
    let alphabets = Punctuated::<Ident, Token![,]>::parse_terminated.parse(input)?;
    if alphabets.is_empty() {
        return Err(Error::new(
            Span::call_site().into(),
            "`swizzles!` expects at least one component alphabet (eg. `xyzw`)",
        ));
    }

    let mut letters: Vec<Vec<char>> = Vec::new();
    for alphabet in &alphabets {
        let chars = alphabet.to_string().chars().collect::<Vec<_>>();
        if chars.len() < 2 || chars.len() > MAX_LEN {
            return Err(Error::new(
                alphabet.span(),
                format!("component alphabets must have between 2 and {MAX_LEN} letters"),
            ));
        }
        if let Some(first) = letters.first() {
            if first.len() != chars.len() {
                return Err(Error::new(
                    alphabet.span(),
                    "all component alphabets must have the same length",
                ));
            }
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(Error::new(
                    alphabet.span(),
                    format!("component name `{c}` appears more than once"),
                ));
            }
        }
        letters.push(chars);
    }

    let mut methods = Vec::new();
    for alphabet in &letters {
        let n = alphabet.len();
        for len in 2..=MAX_LEN {
            for selection in 0..n.pow(len as u32) {
                let indices = selection_indices(selection, n, len);
                let name = indices.iter().map(|&i| alphabet[i]).collect::<String>();
                let ident = format_ident!("{}", name);
                let doc = format!("Returns the `.{name}` swizzle of this vector.");
                methods.push(quote! {
                    #[doc = #doc]
                    #[inline]
                    #[must_use]
                    pub fn #ident(self) -> crate::Vector<T, #len> {
                        self.swizzle([#(#indices),*])
                    }
                });
            }
        }
    }

    Ok(quote! { #(#methods)* }.into())
}

/// Decodes `selection` as a `len`-digit number in base `n`, most significant digit first.
fn selection_indices(mut selection: usize, n: usize, len: usize) -> Vec<usize> {
    let mut indices = vec![0; len];
    for slot in indices.iter_mut().rev() {
        *slot = selection % n;
        selection /= n;
    }
    indices
}

//! # tagvalid-macros
//!
//! `#[derive(Validatable)]` for [`tagvalid`](https://docs.rs/tagvalid).
//! Use it through the re-export in `tagvalid`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

mod generate;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `tagvalid::Validatable`.
///
/// # Structs
///
/// Structs with named fields become records and also implement
/// `tagvalid::Record`. Only `pub` fields are visited.
///
/// ## Field attributes
///
/// - `#[valid("...")]` or `#[valid(tag = "...")]` - the field's tag
/// - `#[valid(key = "...")]` - file this field's failures under `key`
///   instead of the validator key
/// - `#[valid(skip)]` - never visit this field
///
/// # Enums
///
/// Every variant must be a unit variant or hold exactly one value. The
/// enum validates as the value it holds; unit variants are nil.
///
/// # Example
///
/// ```ignore
/// use tagvalid::Validatable;
///
/// #[derive(Validatable)]
/// pub struct Contact {
///     #[valid("name=E-mail|required|email")]
///     pub email: String,
///     #[valid(tag = "phone", key = "contact")]
///     pub phone: Option<String>,
///     pub address: Option<Address>,
/// }
/// ```
#[proc_macro_derive(Validatable, attributes(valid))]
pub fn derive_validatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate::generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

//! easystruct-macros - Derive support for easystruct annotations
//!
//! `#[derive(RequestFields)]` registers `es` as a field attribute so that
//! annotated structs compile. It generates no code: the extraction logic is
//! written by the `easystruct` generator into a sibling file.
//!
//! # Example
//!
//! ```ignore
//! use easystruct::RequestFields;
//!
//! #[derive(Default, RequestFields)]
//! pub struct Filter {
//!     #[es = "query=name"]
//!     pub name: String,
//!
//!     #[es("query=limit")]
//!     pub limit: i64,
//! }
//!
//! include!("filter_easystruct.rs");
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Data, DeriveInput, parse_macro_input};

/// Register the `es` field attribute on a struct.
///
/// Deriving on an enum or union is rejected, since the generator only
/// reads structs.
#[proc_macro_derive(RequestFields, attributes(es))]
pub fn derive_request_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Struct(_) => TokenStream2::new(),
        Data::Enum(_) | Data::Union(_) => syn::Error::new_spanned(
            &input.ident,
            "RequestFields can only be derived for structs",
        )
        .to_compile_error(),
    }
}

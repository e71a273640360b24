//! easystruct - Runtime support for generated request extractors
//!
//! The `easystruct` generator emits `impl FromRequest for ...` blocks that
//! depend on the items in this crate:
//! - [`RequestSource`] trait for reading query, header and form values
//! - [`FromRequest`] trait implemented by generated code
//! - [`ExtractError`] wrapping a conversion failure with its `source:key`
//! - [`split_values`] for list-valued fields
//! - [`RequestValues`] an in-memory [`RequestSource`]
//! - `#[derive(RequestFields)]` registering the `es` field attribute
//!
//! # Example
//!
//! ```
//! use easystruct::{ExtractError, FromRequest, RequestSource, RequestValues};
//!
//! #[derive(Default)]
//! struct Filter {
//!     limit: i64,
//! }
//!
//! // What the generator emits for `#[es = "query=limit"] pub limit: i64`.
//! impl FromRequest for Filter {
//!     fn populate<R: RequestSource + ?Sized>(&mut self, request: &R) -> Result<(), ExtractError> {
//!         if let Some(raw) = request.query("limit").filter(|raw| !raw.is_empty()) {
//!             self.limit = raw.parse().map_err(|e| ExtractError::new("query:limit", e))?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let request = RequestValues::new().with_query("limit", "25");
//! let filter = Filter::from_request(&request).unwrap();
//! assert_eq!(filter.limit, 25);
//! ```

mod error;
mod request;
mod values;

pub use easystruct_macros::RequestFields;
pub use error::{ExtractError, ExtractResult};
pub use request::{RequestSource, RequestValues};
pub use values::split_values;

/// Populate a struct from the values of an incoming request.
///
/// Implementations are produced by the `easystruct` generator, one per
/// annotated struct. Fields whose request value is absent or empty keep
/// their current value.
pub trait FromRequest {
    /// Overwrite annotated fields with the values found in `request`.
    fn populate<R: RequestSource + ?Sized>(&mut self, request: &R) -> ExtractResult<()>;

    /// Build a default value and populate it from `request`.
    fn from_request<R: RequestSource + ?Sized>(request: &R) -> ExtractResult<Self>
    where
        Self: Default + Sized,
    {
        let mut value = Self::default();
        value.populate(request)?;
        Ok(value)
    }
}

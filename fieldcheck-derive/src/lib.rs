// Derive macro for the fieldcheck validation engine

use proc_macro::TokenStream;

mod field_kind;
mod inspect_derive;

/// Derives `fieldcheck::Inspect`, describing the type's fields at runtime.
///
/// Fields opt into validation with a `validate` attribute holding the
/// annotation string. The string is only interpreted at validation time, so a
/// malformed annotation is reported by `validate`, not by the compiler.
///
/// # Example
///
/// ```rust,ignore
/// use fieldcheck::{Inspect, Validate};
///
/// #[derive(Inspect)]
/// pub struct Signup {
///     #[validate("min:3")]
///     pub username: String,
///     #[validate = "max:130"]
///     pub age: u8,
///     #[validate("in:free,pro")]
///     pub plan: &'static str,
///     pub referrer: Option<String>,
/// }
/// ```
///
/// Enums derive a non-record shape and are rejected by `validate`.
#[proc_macro_derive(Inspect, attributes(validate))]
pub fn inspect_derive(input: TokenStream) -> TokenStream {
    inspect_derive::inspect_derive_impl(input)
}

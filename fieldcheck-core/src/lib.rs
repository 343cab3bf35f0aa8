//! Annotation-driven field validation
//!
//! Inspects a record at runtime, applies the rule declared on each annotated
//! field, and reports every failure found in one aggregated error.
//!
//! # Annotations
//!
//! Each field carries at most one annotation of the form `rule:arg1,arg2,...`:
//!
//! | Rule | Integer field | Text field |
//! |------|---------------|------------|
//! | `in:a,b,c` | value is one of the candidates | value equals a candidate verbatim |
//! | `max:n` | value <= n | character count <= n |
//! | `min:n` | value >= n | character count >= n |
//! | `len:n` | unsupported | character count == n |
//!
//! # Examples
//!
//! Records are usually described by `#[derive(Inspect)]` from the `fieldcheck`
//! crate. They can also be assembled at runtime:
//!
//! ```
//! use fieldcheck_core::{DynamicField, DynamicRecord, Validate};
//!
//! let record = DynamicRecord::new()
//!     .field(DynamicField::new("role", "guest").annotate("in:admin,user"))
//!     .field(DynamicField::new("code", "ab").annotate("len:3"))
//!     .field(DynamicField::new("age", 30).annotate("min:18"));
//!
//! let err = record.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "value is not found >>= Length of string ab is not equal to 3"
//! );
//! ```

mod annotation;
mod config;
mod errors;
mod inspect;
mod record;
mod rules;
mod traits;
mod validator;

pub mod validators;

pub use annotation::*;
pub use config::*;
pub use errors::*;
pub use inspect::*;
pub use record::*;
pub use rules::*;
pub use traits::*;
pub use validator::*;

//! fieldcheck - declarative validation of struct fields
//!
//! Rules are attached to fields as `rule:args` annotations. A single call
//! inspects the record, evaluates every annotated field and reports all
//! failures together.
//!
//! ```
//! use fieldcheck::{Inspect, Validate};
//!
//! #[derive(Inspect)]
//! pub struct Signup {
//!     #[validate("min:3")]
//!     pub username: String,
//!     #[validate("max:130")]
//!     pub age: u8,
//! }
//!
//! let signup = Signup { username: "al".into(), age: 200 };
//! let err = signup.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Length of string al is less than 3 >>= Integer 200 is greater than 130"
//! );
//! ```

// Re-export the engine
pub use fieldcheck_core::*;

// Re-export the derive macro
pub use fieldcheck_derive::Inspect;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Error, Inspect, Validate, ValidationErrors, Validator, ValidatorConfig, validate,
    };
}

//! Fuzz target for annotation parsing.
//!
//! Any string must either parse into a rule name plus a non-empty argument
//! list or be rejected as invalid syntax.

#![no_main]

use fieldcheck::{Annotation, FailureKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    match Annotation::parse(raw) {
        Ok(annotation) => {
            assert!(!annotation.args().is_empty());
            assert!(!annotation.rule().contains(':'));

            // Re-joining the pieces gives back the input
            let rejoined = format!("{}:{}", annotation.rule(), annotation.args().join(","));
            assert_eq!(rejoined, raw);
        }
        Err(kind) => assert_eq!(kind, FailureKind::InvalidSyntax),
    }
});

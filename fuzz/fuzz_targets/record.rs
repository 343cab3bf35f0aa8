//! Fuzz target for record validation.
//!
//! Builds records from arbitrary fields and checks that validation never
//! panics and reports at most one failure per annotated field, in order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fieldcheck::{DynamicField, DynamicRecord, Error, Value, validate};

/// Arbitrary field value for fuzzing.
#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Integer(i64),
    Text(String),
    Other(String),
}

/// Arbitrary record field for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzField {
    name: String,
    value: FuzzValue,
    annotation: Option<String>,
    exported: bool,
}

fuzz_target!(|fields: Vec<FuzzField>| {
    let annotated: Vec<String> = fields
        .iter()
        .filter(|f| f.annotation.as_deref().is_some_and(|a| !a.is_empty()))
        .map(|f| f.name.clone())
        .collect();

    let record: DynamicRecord = fields
        .into_iter()
        .map(|f| {
            let value = match f.value {
                FuzzValue::Integer(n) => Value::from(n),
                FuzzValue::Text(s) => Value::Text(s),
                FuzzValue::Other(s) => Value::Other(s),
            };
            let mut field = DynamicField::new(f.name, value);
            if let Some(annotation) = f.annotation {
                field = field.annotate(annotation);
            }
            if !f.exported {
                field = field.unexported();
            }
            field
        })
        .collect();

    match validate(&record) {
        Ok(()) => {}
        Err(Error::Invalid(errors)) => {
            assert!(!errors.is_empty());
            assert!(errors.len() <= annotated.len());

            // Failures appear in field order
            let mut remaining = annotated.iter();
            for error in &errors {
                assert!(remaining.any(|name| *name == error.field));
            }
        }
        Err(Error::NotAStructure { .. }) => panic!("a record was rejected as non-record"),
    }
});

// Field walker

use crate::{
    Annotation, Error, FailureKind, Field, Inspect, Result, Rule, Shape, ValidationError,
    ValidationErrors, ValidatorConfig,
};
use tracing::{debug, trace};

/// Validate every annotated field of `value` with the default configuration.
///
/// ```
/// use fieldcheck_core::{validate, Error};
///
/// // Only records can be validated
/// assert!(matches!(validate(&42), Err(Error::NotAStructure { .. })));
/// ```
pub fn validate<T: Inspect + ?Sized>(value: &T) -> Result<()> {
    Validator::default().validate(value)
}

/// Rule evaluation engine.
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Create a validator configured from the environment
    pub fn from_env() -> Self {
        Self::new(ValidatorConfig::from_env())
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate every annotated field of `value`.
    ///
    /// Fails with [`Error::NotAStructure`] before looking at any field when
    /// `value` is not a record. Otherwise every annotated field is checked
    /// and all failures are returned together, in field order.
    pub fn validate<T: Inspect + ?Sized>(&self, value: &T) -> Result<()> {
        let fields = match value.shape() {
            Shape::Record(fields) => fields,
            other => {
                debug!(found = other.kind_name(), "refusing to validate non-record value");
                return Err(Error::NotAStructure {
                    found: other.kind_name(),
                });
            }
        };

        let failures: Vec<ValidationError> = fields
            .iter()
            .filter_map(|field| self.check_field(field).err())
            .collect();

        debug!(
            fields = fields.len(),
            failures = failures.len(),
            "validation finished"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(failures)
                .with_delimiter(self.config.delimiter.as_str())
                .into())
        }
    }

    /// Check a single field. Fields without an annotation always pass.
    fn check_field(&self, field: &Field<'_>) -> std::result::Result<(), ValidationError> {
        let Some(raw) = field.annotation() else {
            trace!(field = field.name, "no annotation, skipping");
            return Ok(());
        };

        evaluate_field(field, raw).map_err(|kind| {
            if self.config.log_failures {
                debug!(
                    field = field.name,
                    annotation = raw,
                    code = kind.code(),
                    "field failed: {}",
                    kind
                );
            }
            ValidationError::new(field.name, raw, kind)
        })
    }
}

/// Steps are ordered: visibility, syntax, kind, rule name, then the rule itself.
fn evaluate_field(field: &Field<'_>, raw: &str) -> std::result::Result<(), FailureKind> {
    if !field.is_exported() {
        return Err(FailureKind::UnexportedField);
    }

    let annotation = Annotation::parse(raw)?;

    let value = field
        .value
        .scalar()
        .ok_or_else(|| FailureKind::UnsupportedType {
            type_name: field.value.type_name().to_string(),
        })?;

    let rule: Rule = annotation.rule().parse()?;

    debug!(field = field.name, rule = rule.as_str(), "evaluating field");
    rule.evaluate(value, annotation.args())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DynamicField, DynamicRecord, Value};

    fn kinds(result: Result<()>) -> Vec<FailureKind> {
        match result {
            Err(Error::Invalid(errors)) => errors.into_iter().map(|e| e.kind).collect(),
            other => panic!("expected field failures, got {:?}", other),
        }
    }

    #[test]
    fn test_no_annotations_is_ok() {
        let record = DynamicRecord::new()
            .field(DynamicField::new("a", 1))
            .field(DynamicField::new("b", "x").unexported());
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_empty_record_is_ok() {
        assert!(validate(&DynamicRecord::new()).is_ok());
    }

    #[test]
    fn test_unexported_reported_before_parsing() {
        let record = DynamicRecord::new()
            .field(DynamicField::new("a", 1).annotate("garbage").unexported())
            .field(DynamicField::new("b", 1).annotate("max:0").unexported());
        assert_eq!(
            kinds(validate(&record)),
            [FailureKind::UnexportedField, FailureKind::UnexportedField]
        );
    }

    #[test]
    fn test_syntax_checked_before_type() {
        let record = DynamicRecord::new()
            .field(DynamicField::new("a", Value::Other("f64".into())).annotate("max"));
        assert_eq!(kinds(validate(&record)), [FailureKind::InvalidSyntax]);
    }

    #[test]
    fn test_type_checked_before_rule_name() {
        let record = DynamicRecord::new()
            .field(DynamicField::new("a", Value::Other("bool".into())).annotate("foo:1"));
        assert_eq!(
            kinds(validate(&record)),
            [FailureKind::UnsupportedType {
                type_name: "bool".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_rule() {
        let record = DynamicRecord::new().field(DynamicField::new("a", 1).annotate("foo:1"));
        assert_eq!(kinds(validate(&record)), [FailureKind::UnsupportedValidator]);
    }

    #[test]
    fn test_all_failures_collected_in_order() {
        let record = DynamicRecord::new()
            .field(DynamicField::new("first", "toolong").annotate("len:3"))
            .field(DynamicField::new("ok", 1).annotate("max:5"))
            .field(DynamicField::new("second", 9).annotate("in:1,2"))
            .field(DynamicField::new("third", 42).annotate("max:10"));

        let err = validate(&record).unwrap_err();
        let errors = err.failures().unwrap();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["first", "second", "third"]);
        assert_eq!(
            err.to_string(),
            "Length of string toolong is not equal to 3 >>= value is not found >>= Integer 42 is greater than 10"
        );
    }

    #[test]
    fn test_configured_delimiter() {
        let validator = Validator::new(ValidatorConfig::default().with_delimiter(", "));
        let record = DynamicRecord::new()
            .field(DynamicField::new("a", 1).annotate("max"))
            .field(DynamicField::new("b", 1).annotate("nope:1"));
        let err = validator.validate(&record).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid validator syntax, used unsupported validator"
        );
    }

    #[test]
    fn test_failure_records_site() {
        let record = DynamicRecord::new().field(DynamicField::new("age", 42).annotate("max:10"));
        let err = validate(&record).unwrap_err();
        let failure = err.failures().unwrap().iter().next().unwrap();
        assert_eq!(failure.field, "age");
        assert_eq!(failure.annotation, "max:10");
        assert_eq!(failure.rule_name(), Some("max"));
    }

    #[test]
    fn test_non_records_rejected() {
        assert!(matches!(
            validate(&vec![1, 2, 3]),
            Err(Error::NotAStructure { found: "sequence" })
        ));
        assert!(matches!(
            validate("text"),
            Err(Error::NotAStructure { found: "scalar" })
        ));
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}

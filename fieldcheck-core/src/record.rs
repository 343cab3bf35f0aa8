// Records assembled at runtime

use crate::{Field, FieldValue, Inspect, Shape, Visibility};

/// Owned field value for a [`DynamicRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i128),
    Text(String),
    /// Value of an unsupported kind, identified by its type name
    Other(String),
}

impl Value {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Value::Integer(n) => FieldValue::Integer(*n),
            Value::Text(s) => FieldValue::Text(s),
            Value::Other(name) => FieldValue::Other(name),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(i128::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

/// Values above `i128::MAX` saturate.
impl From<u128> for Value {
    fn from(n: u128) -> Self {
        Value::Integer(i128::try_from(n).unwrap_or(i128::MAX))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// A field of a [`DynamicRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicField {
    name: String,
    visibility: Visibility,
    annotation: Option<String>,
    value: Value,
}

impl DynamicField {
    /// Create an exported field without an annotation
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Exported,
            annotation: None,
            value: value.into(),
        }
    }

    /// Attach a `rule:args` annotation
    pub fn annotate(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Mark the field as not externally accessible
    pub fn unexported(mut self) -> Self {
        self.visibility = Visibility::Unexported;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Record built field by field at runtime.
///
/// ```
/// use fieldcheck_core::{validate, DynamicField, DynamicRecord};
///
/// let record = DynamicRecord::new()
///     .field(DynamicField::new("age", 42).annotate("max:10"))
///     .field(DynamicField::new("name", "bob"));
///
/// let err = validate(&record).unwrap_err();
/// assert_eq!(err.to_string(), "Integer 42 is greater than 10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicRecord {
    fields: Vec<DynamicField>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Declaration order is insertion order.
    pub fn field(mut self, field: DynamicField) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a field in place
    pub fn push(&mut self, field: DynamicField) {
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<DynamicField> for DynamicRecord {
    fn from_iter<I: IntoIterator<Item = DynamicField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Inspect for DynamicRecord {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(
            self.fields
                .iter()
                .map(|f| Field {
                    name: &f.name,
                    visibility: f.visibility,
                    annotation: f.annotation.as_deref(),
                    value: f.value.as_field_value(),
                })
                .collect(),
        )
    }
}

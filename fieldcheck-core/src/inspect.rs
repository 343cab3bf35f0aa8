// Runtime introspection model

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Types whose shape can be examined at runtime.
///
/// Structs normally get this through `#[derive(Inspect)]`; [`DynamicRecord`]
/// covers records assembled at runtime. Every other implementation in this
/// module reports a non-record shape, which `validate` rejects.
///
/// [`DynamicRecord`]: crate::DynamicRecord
pub trait Inspect {
    /// Describe this value.
    fn shape(&self) -> Shape<'_>;
}

/// Runtime classification of an inspected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// Plain aggregate of named fields, in declaration order
    Record(Vec<Field<'a>>),
    /// Single value such as a number or string
    Scalar(&'static str),
    /// List-like collection
    Sequence,
    /// Key-value collection
    Map,
    /// Value that may be absent
    Optional,
    /// Owning pointer or shared handle
    Pointer,
    /// Enum variant
    Variant(&'static str),
}

impl Shape<'_> {
    /// Short name of this shape, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Record(_) => "record",
            Shape::Scalar(_) => "scalar",
            Shape::Sequence => "sequence",
            Shape::Map => "map",
            Shape::Optional => "optional",
            Shape::Pointer => "pointer",
            Shape::Variant(_) => "variant",
        }
    }
}

/// Whether a field may be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Declared `pub`
    Exported,
    /// Private or restricted
    Unexported,
}

/// Value carried by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Integer(i128),
    Text(&'a str),
    /// Anything else, identified by its type name
    Other(&'a str),
}

impl<'a> FieldValue<'a> {
    /// Narrow to a supported scalar kind.
    pub fn scalar(&self) -> Option<Scalar<'a>> {
        match *self {
            FieldValue::Integer(n) => Some(Scalar::Integer(n)),
            FieldValue::Text(s) => Some(Scalar::Text(s)),
            FieldValue::Other(_) => None,
        }
    }

    pub fn type_name(&self) -> &'a str {
        match *self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Text(_) => "text",
            FieldValue::Other(name) => name,
        }
    }
}

/// A value of one of the kinds rules can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    Integer(i128),
    Text(&'a str),
}

/// One field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub visibility: Visibility,
    /// Raw `rule:args` annotation
    pub annotation: Option<&'a str>,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Annotation, treating an empty string as absent.
    pub fn annotation(&self) -> Option<&'a str> {
        self.annotation.filter(|a| !a.is_empty())
    }

    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Exported
    }
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(stringify!($ty))
                }
            }
        )*
    };
}

impl_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, ()
);

macro_rules! impl_shape {
    ($shape:expr => $($ty:ty where [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<$($gen)*> Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    $shape
                }
            }
        )*
    };
}

impl_shape!(Shape::Sequence =>
    [T] where [T],
    Vec<T> where [T],
    VecDeque<T> where [T],
    LinkedList<T> where [T],
    HashSet<T, S> where [T, S],
    BTreeSet<T> where [T],
);

impl<T, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence
    }
}

impl_shape!(Shape::Map =>
    HashMap<K, V, S> where [K, V, S],
    BTreeMap<K, V> where [K, V],
);

impl_shape!(Shape::Optional => Option<T> where [T]);

impl_shape!(Shape::Pointer =>
    Box<T> where [T: ?Sized],
    Rc<T> where [T: ?Sized],
    Arc<T> where [T: ?Sized],
);

impl Inspect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar("Cow<str>")
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl Inspect for serde_json::Value {
    fn shape(&self) -> Shape<'_> {
        use serde_json::Value;

        match self {
            Value::Object(_) => Shape::Map,
            Value::Array(_) => Shape::Sequence,
            Value::Null => Shape::Optional,
            Value::Bool(_) => Shape::Scalar("bool"),
            Value::Number(_) => Shape::Scalar("number"),
            Value::String(_) => Shape::Scalar("string"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(42i32.shape(), Shape::Scalar("i32"));
        assert_eq!("text".shape(), Shape::Scalar("str"));
        assert_eq!(String::new().shape().kind_name(), "scalar");
    }

    #[test]
    fn test_collection_shapes() {
        assert_eq!(vec![1, 2].shape(), Shape::Sequence);
        assert_eq!([1u8; 4].shape(), Shape::Sequence);
        assert_eq!(HashMap::<String, i32>::new().shape(), Shape::Map);
        assert_eq!(Some(1).shape(), Shape::Optional);
        assert_eq!(Box::new(1).shape(), Shape::Pointer);
    }

    #[test]
    fn test_references_delegate() {
        let value = 7u64;
        let reference = &value;
        assert_eq!((&reference).shape(), Shape::Scalar("u64"));
    }

    #[test]
    fn test_json_shapes() {
        let value = serde_json::json!({ "age": 3 });
        assert_eq!(value.shape(), Shape::Map);
        assert_eq!(serde_json::json!([1]).shape(), Shape::Sequence);
    }

    #[test]
    fn test_field_annotation_empty_is_absent() {
        let field = Field {
            name: "x",
            visibility: Visibility::Exported,
            annotation: Some(""),
            value: FieldValue::Integer(1),
        };
        assert_eq!(field.annotation(), None);
    }

    #[test]
    fn test_field_value_scalar() {
        assert_eq!(FieldValue::Integer(3).scalar(), Some(Scalar::Integer(3)));
        assert_eq!(FieldValue::Text("a").scalar(), Some(Scalar::Text("a")));
        assert_eq!(FieldValue::Other("f64").scalar(), None);
        assert_eq!(FieldValue::Other("f64").type_name(), "f64");
    }
}

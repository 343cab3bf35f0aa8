//! Compile-time classification of field types
//!
//! Only the written type is visible to the macro, so classification is
//! syntactic: a type alias of `i32` is not recognized as an integer and ends
//! up as an unsupported kind.
//!
//! References are looked through: `&T` and `&mut T` have the kind of `T`, so
//! `&str`, `&String` and `&u32` are all supported. Owning wrappers are text
//! only when they wrap `str` (`Box<str>`, `Cow<str>`, `Rc<str>`, `Arc<str>`).

use syn::{GenericArgument, Path, PathArguments, Type};

/// Integer types carried as `i128`. `u128` values above `i128::MAX` saturate.
const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Wrappers that are text when their type argument is `str`.
const STR_WRAPPERS: &[&str] = &["Box", "Cow", "Rc", "Arc"];

/// Scalar kind of a field, as far as it can be told from its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    /// Anything implementing `AsRef<str>` we know about
    Text,
    Other,
}

pub fn classify(ty: &Type) -> FieldKind {
    match ty {
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Path(type_path) if type_path.qself.is_none() => classify_path(&type_path.path),
        Type::Reference(reference) => classify(&reference.elem),
        _ => FieldKind::Other,
    }
}

/// Number of references in front of the underlying type, e.g. 2 for `&&u8`.
pub fn reference_depth(ty: &Type) -> usize {
    match ty {
        Type::Group(group) => reference_depth(&group.elem),
        Type::Paren(paren) => reference_depth(&paren.elem),
        Type::Reference(reference) => 1 + reference_depth(&reference.elem),
        _ => 0,
    }
}

fn classify_path(path: &Path) -> FieldKind {
    let Some(segment) = path.segments.last() else {
        return FieldKind::Other;
    };
    let ident = segment.ident.to_string();

    match (&segment.arguments, ident.as_str()) {
        (PathArguments::None, name) if INTEGER_TYPES.contains(&name) => FieldKind::Integer,
        (PathArguments::None, "String" | "str") => FieldKind::Text,
        (PathArguments::AngleBracketed(args), name) if STR_WRAPPERS.contains(&name) => {
            let wraps_str = args.args.iter().any(|arg| match arg {
                GenericArgument::Type(inner) => is_str(inner),
                _ => false,
            });
            if wraps_str {
                FieldKind::Text
            } else {
                FieldKind::Other
            }
        }
        _ => FieldKind::Other,
    }
}

fn is_str(ty: &Type) -> bool {
    match ty {
        Type::Group(group) => is_str(&group.elem),
        Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident("str"),
        _ => false,
    }
}

/// Readable type name for unsupported kinds, e.g. `Vec<u8>`.
pub fn type_name(ty: &Type) -> String {
    quote::quote!(#ty)
        .to_string()
        .replace(" < ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" :: ", "::")
        .replace("& ", "&")
}

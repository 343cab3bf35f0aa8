use crate::field_kind::{FieldKind, classify, reference_depth, type_name};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Expr, ExprLit, Fields, Index, Lit, LitStr, Member, Meta, Visibility,
    ext::IdentExt, parse_macro_input,
};

const ATTRIBUTE: &str = "validate";

/// Implementation of `#[derive(Inspect)]`.
///
/// For structs the generated `shape` lists every field in declaration order
/// with its visibility, its annotation and a borrowed view of its value.
pub fn inspect_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => {
            let fields = describe_fields(&data.fields)?;
            quote! {
                ::fieldcheck::Shape::Record(::std::vec![#(#fields),*])
            }
        }
        Data::Enum(_) => {
            let type_name = name.to_string();
            quote! {
                ::fieldcheck::Shape::Variant(#type_name)
            }
        }
        Data::Union(data) => {
            return Err(Error::new(
                data.union_token.span,
                "Inspect cannot be derived for unions",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics ::fieldcheck::Inspect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::fieldcheck::Shape<'_> {
                #body
            }
        }
    })
}

fn describe_fields(fields: &Fields) -> syn::Result<Vec<TokenStream2>> {
    fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let (member, field_name) = match &field.ident {
                Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
                None => (Member::Unnamed(Index::from(position)), position.to_string()),
            };

            let visibility = if matches!(field.vis, Visibility::Public(_)) {
                quote!(::fieldcheck::Visibility::Exported)
            } else {
                quote!(::fieldcheck::Visibility::Unexported)
            };

            let annotation = match field_annotation(field)? {
                Some(lit) => quote!(::core::option::Option::Some(#lit)),
                None => quote!(::core::option::Option::None),
            };

            let value = match classify(&field.ty) {
                FieldKind::Integer => {
                    let derefs = std::iter::repeat_n(quote!(*), reference_depth(&field.ty));
                    // Only u128 can fail the conversion, and only above i128::MAX
                    quote! {
                        ::fieldcheck::FieldValue::Integer({
                            let value = #(#derefs)* self.#member;
                            <i128 as ::core::convert::TryFrom<_>>::try_from(value)
                                .unwrap_or(i128::MAX)
                        })
                    }
                }
                FieldKind::Text => quote! {
                    ::fieldcheck::FieldValue::Text(
                        ::core::convert::AsRef::<str>::as_ref(&self.#member),
                    )
                },
                FieldKind::Other => {
                    let type_name = type_name(&field.ty);
                    quote!(::fieldcheck::FieldValue::Other(#type_name))
                }
            };

            Ok(quote! {
                ::fieldcheck::Field {
                    name: #field_name,
                    visibility: #visibility,
                    annotation: #annotation,
                    value: #value,
                }
            })
        })
        .collect()
}

/// Reads `#[validate("rule:args")]` or `#[validate = "rule:args"]`.
fn field_annotation(field: &syn::Field) -> syn::Result<Option<LitStr>> {
    let mut annotation = None;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
        if annotation.is_some() {
            return Err(Error::new_spanned(
                attr,
                "duplicate `validate` attribute\n\
                 hint: a field takes a single `rule:args` annotation",
            ));
        }

        let lit = match &attr.meta {
            Meta::List(list) => list.parse_args::<LitStr>()?,
            Meta::NameValue(name_value) => match &name_value.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => lit.clone(),
                other => {
                    return Err(Error::new_spanned(
                        other,
                        "expected a string literal, e.g. `#[validate = \"max:10\"]`",
                    ));
                }
            },
            Meta::Path(path) => {
                return Err(Error::new_spanned(
                    path,
                    "missing annotation\n\
                     hint: write `#[validate(\"rule:args\")]`",
                ));
            }
        };

        annotation = Some(lit);
    }

    Ok(annotation)
}

//! Ddl derive macro implementation
//!
//! Generates the field registration (`Ddl::ddl_fields`) from `#[ddl(...)]` field
//! attributes, plus a `DdlValue` impl so the type can be nested in other statements.

mod attrs;

use attrs::{DdlAttr, Kind, get_ddl_attr};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Result};

use crate::common::syn_types::{option_inner, vec_inner};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Ddl can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Ddl can only be derived for structs",
            ));
        }
    };

    let mut registrations = Vec::new();
    for field in fields {
        let Some(attr) = get_ddl_attr(field)? else {
            continue;
        };
        validate_field(field, &attr)?;

        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = field_ident.unraw().to_string();
        let directive = attr.directive_tokens();
        registrations.push(quote! {
            ::snowddl::Field::new(
                #field_name,
                #directive,
                ::snowddl::DdlValue::ddl_value(&self.#field_ident),
            )
        });
    }

    Ok(quote! {
        impl #impl_generics ::snowddl::Ddl for #name #ty_generics #where_clause {
            fn ddl_fields(&self) -> ::std::vec::Vec<::snowddl::Field<'_>> {
                ::std::vec![#(#registrations),*]
            }
        }

        impl #impl_generics ::snowddl::DdlValue for #name #ty_generics #where_clause {
            fn ddl_value(&self) -> ::snowddl::FieldValue<'_> {
                ::snowddl::FieldValue::Struct(self)
            }
        }
    })
}

/// Checks that only need the declaration.
fn validate_field(field: &syn::Field, attr: &DdlAttr) -> Result<()> {
    match attr.kind {
        Kind::Static if attr.name.is_none() => Err(syn::Error::new(
            attr.kind_span,
            "`static` requires `name = \"...\"`",
        )),
        Kind::List => {
            let ty = option_inner(&field.ty).unwrap_or(&field.ty);
            if vec_inner(ty).is_none() {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "`list` requires a `Vec<T>` or `Option<Vec<T>>` field",
                ));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

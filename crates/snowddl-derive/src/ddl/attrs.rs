//! Attribute parsing for the Ddl derive macro.
//!
//! Handles field-level `#[ddl(<kind>, <modifier>*, name = "...")]` attributes.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Kind {
    Keyword,
    Command,
    Static,
    Parameter,
    Identifier,
    List,
}

impl Kind {
    fn from_ident(s: &str) -> Option<Self> {
        match s {
            "keyword" => Some(Self::Keyword),
            "command" => Some(Self::Command),
            "static" => Some(Self::Static),
            "parameter" => Some(Self::Parameter),
            "identifier" => Some(Self::Identifier),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    fn variant(self) -> TokenStream {
        match self {
            Self::Keyword => quote!(Keyword),
            Self::Command => quote!(Command),
            Self::Static => quote!(Static),
            Self::Parameter => quote!(Parameter),
            Self::Identifier => quote!(Identifier),
            Self::List => quote!(List),
        }
    }
}

/// (designator, family, runtime enum, variant)
const MODIFIERS: &[(&str, &str, &str, &str)] = &[
    ("double_quotes", "quotes", "QuoteModifier", "DoubleQuotes"),
    ("single_quotes", "quotes", "QuoteModifier", "SingleQuotes"),
    ("no_quotes", "quotes", "QuoteModifier", "NoQuotes"),
    ("equals", "equals", "EqualsModifier", "Equals"),
    ("no_equals", "equals", "EqualsModifier", "NoEquals"),
    ("parentheses", "parentheses", "ParenModifier", "Parentheses"),
    ("no_parentheses", "parentheses", "ParenModifier", "NoParentheses"),
    ("reverse", "reverse", "ReverseModifier", "Reverse"),
    ("no_reverse", "reverse", "ReverseModifier", "NoReverse"),
];

struct Modifier {
    /// Also the name of the `Directive` setter.
    family: &'static str,
    enum_name: &'static str,
    variant: &'static str,
}

/// Parsed `#[ddl(...)]` on one field.
pub(super) struct DdlAttr {
    pub kind: Kind,
    pub kind_span: Span,
    pub name: Option<String>,
    modifiers: Vec<Modifier>,
}

impl syn::parse::Parse for DdlAttr {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut kind: Option<(Kind, Span)> = None;
        let mut name: Option<String> = None;
        let mut modifiers: Vec<Modifier> = Vec::new();

        loop {
            if input.is_empty() {
                break;
            }

            // `static` is a keyword, so accept any ident.
            let ident = input.call(syn::Ident::parse_any)?;
            let key = ident.to_string();

            if input.peek(syn::Token![=]) {
                let _: syn::Token![=] = input.parse()?;
                let value: syn::LitStr = input.parse()?;
                if key != "name" {
                    return Err(Error::new(
                        ident.span(),
                        format!("unknown ddl option `{key}` (expected `name = \"...\"`)"),
                    ));
                }
                if name.is_some() {
                    return Err(Error::new(ident.span(), "duplicate `name`"));
                }
                let token = value.value().trim().to_string();
                if token.is_empty() {
                    return Err(Error::new(value.span(), "`name` must not be empty"));
                }
                name = Some(token);
            } else if let Some(k) = Kind::from_ident(&key) {
                if let Some((_, first)) = kind {
                    let mut err = Error::new(ident.span(), "a field takes exactly one ddl kind");
                    err.combine(Error::new(first, "first kind declared here"));
                    return Err(err);
                }
                kind = Some((k, ident.span()));
            } else if let Some(&(_, family, enum_name, variant)) =
                MODIFIERS.iter().find(|(d, ..)| *d == key)
            {
                if modifiers.iter().any(|m| m.family == family) {
                    return Err(Error::new(
                        ident.span(),
                        format!("conflicting {family} modifiers"),
                    ));
                }
                modifiers.push(Modifier {
                    family,
                    enum_name,
                    variant,
                });
            } else {
                return Err(Error::new(
                    ident.span(),
                    format!(
                        "unknown ddl directive `{key}` (expected one of keyword, command, static, \
                         parameter, identifier, list, or a quotes/equals/parentheses/reverse modifier)"
                    ),
                ));
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        let Some((kind, kind_span)) = kind else {
            return Err(input.error("ddl attribute requires a kind"));
        };

        Ok(DdlAttr {
            kind,
            kind_span,
            name,
            modifiers,
        })
    }
}

impl DdlAttr {
    /// Expression building the runtime `::snowddl::Directive`.
    pub(super) fn directive_tokens(&self) -> TokenStream {
        let variant = self.kind.variant();
        let mut tokens = quote!(::snowddl::Directive::new(::snowddl::Kind::#variant));
        if let Some(name) = &self.name {
            tokens = quote!(#tokens.named(#name));
        }
        for m in &self.modifiers {
            let setter = syn::Ident::new(m.family, Span::call_site());
            let enum_name = syn::Ident::new(m.enum_name, Span::call_site());
            let variant = syn::Ident::new(m.variant, Span::call_site());
            tokens = quote!(#tokens.#setter(::snowddl::#enum_name::#variant));
        }
        tokens
    }
}

/// Find and parse the `#[ddl(...)]` attribute of a field, if any.
pub(super) fn get_ddl_attr(field: &syn::Field) -> Result<Option<DdlAttr>> {
    let mut found: Option<DdlAttr> = None;
    for attr in &field.attrs {
        if !attr.path().is_ident("ddl") {
            continue;
        }
        if found.is_some() {
            return Err(Error::new_spanned(attr, "duplicate #[ddl] attribute"));
        }
        let syn::Meta::List(meta_list) = &attr.meta else {
            return Err(Error::new_spanned(
                attr,
                "expected #[ddl(<kind>, ...)] attribute",
            ));
        };
        found = Some(syn::parse2::<DdlAttr>(meta_list.tokens.clone())?);
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(field: syn::Field) -> Result<Option<DdlAttr>> {
        get_ddl_attr(&field)
    }

    #[test]
    fn parses_kind_modifiers_and_name() {
        let field: syn::Field = parse_quote! {
            #[ddl(parameter, single_quotes, name = "COMMENT")]
            comment: Option<String>
        };
        let attr = parse(field).unwrap().unwrap();
        assert_eq!(attr.kind, Kind::Parameter);
        assert_eq!(attr.name.as_deref(), Some("COMMENT"));
        let tokens = attr.directive_tokens().to_string();
        assert!(tokens.contains("Parameter"));
        assert!(tokens.contains("SingleQuotes"));
        assert!(tokens.contains("\"COMMENT\""));
    }

    #[test]
    fn accepts_static_keyword() {
        let field: syn::Field = parse_quote! {
            #[ddl(static, name = "CREATE WAREHOUSE")]
            create: ()
        };
        assert_eq!(parse(field).unwrap().unwrap().kind, Kind::Static);
    }

    #[test]
    fn field_without_attr() {
        let field: syn::Field = parse_quote! { internal: u32 };
        assert!(parse(field).unwrap().is_none());
    }

    #[test]
    fn rejects_unknown_kind() {
        let field: syn::Field = parse_quote! { #[ddl(keywrd)] x: String };
        assert!(parse(field).is_err());
    }

    #[test]
    fn rejects_unknown_modifier() {
        let field: syn::Field = parse_quote! { #[ddl(keyword, sngle_quotes)] x: String };
        assert!(parse(field).is_err());
    }

    #[test]
    fn rejects_two_kinds() {
        let field: syn::Field = parse_quote! { #[ddl(keyword, command)] x: String };
        assert!(parse(field).is_err());
    }

    #[test]
    fn rejects_conflicting_quotes() {
        let field: syn::Field = parse_quote! { #[ddl(keyword, double_quotes, single_quotes)] x: String };
        assert!(parse(field).is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let field: syn::Field = parse_quote! { #[ddl(command, name = " ")] x: String };
        assert!(parse(field).is_err());
    }

    #[test]
    fn rejects_missing_kind() {
        let field: syn::Field = parse_quote! { #[ddl(name = "X")] x: String };
        assert!(parse(field).is_err());
    }
}

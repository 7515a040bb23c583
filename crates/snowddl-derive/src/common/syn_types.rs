//! Generic wrapper inspection for field types.

/// `T` from `Wrapper<T>`, matching on the last path segment only.
fn single_type_arg<'a>(ty: &'a syn::Type, wrapper: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if seg.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    let mut types = args.args.iter();
    match (types.next(), types.next()) {
        (Some(syn::GenericArgument::Type(inner)), None) => Some(inner),
        _ => None,
    }
}

/// `T` from `Option<T>`.
pub fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    single_type_arg(ty, "Option")
}

/// `T` from `Vec<T>`, the shape `list` fields require.
pub fn vec_inner(ty: &syn::Type) -> Option<&syn::Type> {
    single_type_arg(ty, "Vec")
}

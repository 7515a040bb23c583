//! Derive macros for snowddl
//!
//! Provides `#[derive(Ddl)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod common;
mod ddl;

/// Derive the `Ddl` field registration for a struct.
///
/// # Example
///
/// ```ignore
/// use snowddl::{AccountObjectIdentifier, Ddl};
///
/// #[derive(Ddl)]
/// struct DropWarehouse {
///     #[ddl(static, name = "DROP WAREHOUSE")]
///     drop: (),
///     #[ddl(keyword, name = "IF EXISTS")]
///     if_exists: Option<bool>,
///     #[ddl(identifier)]
///     name: AccountObjectIdentifier,
/// }
/// ```
///
/// # Attributes
///
/// `#[ddl(<kind>, <modifier>*, name = "TOKEN")]` on fields; fields without it are
/// not rendered.
///
/// - kinds: `keyword`, `command`, `static`, `parameter`, `identifier`, `list`
/// - modifiers: `double_quotes` / `single_quotes` / `no_quotes`, `equals` / `no_equals`,
///   `parentheses` / `no_parentheses`, `reverse` / `no_reverse`
///
/// Unknown kinds or modifiers are compile errors.
#[proc_macro_derive(Ddl, attributes(ddl))]
pub fn derive_ddl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ddl::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

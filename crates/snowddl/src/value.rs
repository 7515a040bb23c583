//! Field registration.
//!
//! A type takes part in SQL rendering by implementing [`Ddl`], listing its fields in
//! declaration order together with their directives. Field values are converted to
//! [`FieldValue`] through [`DdlValue`].

use crate::directive::Directive;

/// The runtime value of one field.
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// No value was provided (`Option::None`).
    Unset,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Kept at single precision so it renders with `f32`'s shortest text.
    Float32(f32),
    Str(&'a str),
    /// A fully-qualified object name.
    Identifier(String),
    Struct(&'a dyn Ddl),
    List(Vec<&'a dyn Ddl>),
}

impl FieldValue<'_> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Short description used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) | Self::Float32(_) => "float",
            Self::Str(_) => "string",
            Self::Identifier(_) => "identifier",
            Self::Struct(_) => "struct",
            Self::List(_) => "list",
        }
    }
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Self::Identifier(v) => f.debug_tuple("Identifier").field(v).finish(),
            Self::Struct(_) => f.write_str("Struct(..)"),
            Self::List(items) => write!(f, "List(len={})", items.len()),
        }
    }
}

/// A directive still in tag form, e.g. `("parameter,single_quotes", Some("COMMENT"))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag<'a> {
    pub tag: &'a str,
    pub name: Option<&'static str>,
}

/// One registered field.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Rust field name, used in error messages.
    pub name: &'static str,
    /// `None` (with no `tag`) means the field is not rendered.
    pub directive: Option<Directive>,
    /// Resolved by the builder, under its configuration, when `directive` is `None`.
    pub tag: Option<FieldTag<'a>>,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, directive: Directive, value: FieldValue<'a>) -> Self {
        Self {
            name,
            directive: Some(directive),
            tag: None,
            value,
        }
    }

    /// A field whose directive is read from a tag string when the statement is built.
    ///
    /// An unknown kind, or an unknown modifier under a strict builder, fails the build.
    pub fn tagged(
        name: &'static str,
        tag: &'a str,
        sql_name: Option<&'static str>,
        value: FieldValue<'a>,
    ) -> Self {
        Self {
            name,
            directive: None,
            tag: Some(FieldTag {
                tag,
                name: sql_name,
            }),
            value,
        }
    }

    /// A field that is carried by the struct but never rendered.
    pub fn skipped(name: &'static str) -> Self {
        Self {
            name,
            directive: None,
            tag: None,
            value: FieldValue::Unset,
        }
    }
}

/// A struct whose fields render into SQL clauses.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(Ddl)]
/// struct CreateThing {
///     #[ddl(static, name = "CREATE THING")]
///     create: (),
///     #[ddl(identifier)]
///     name: AccountObjectIdentifier,
///     #[ddl(parameter, single_quotes, name = "COMMENT")]
///     comment: Option<String>,
/// }
/// ```
pub trait Ddl {
    /// Fields in declaration order.
    fn ddl_fields(&self) -> Vec<Field<'_>>;
}

impl<T: Ddl + ?Sized> Ddl for &T {
    fn ddl_fields(&self) -> Vec<Field<'_>> {
        (**self).ddl_fields()
    }
}

/// Conversion of a field's Rust value into a [`FieldValue`].
pub trait DdlValue {
    fn ddl_value(&self) -> FieldValue<'_>;
}

impl<T: DdlValue + ?Sized> DdlValue for &T {
    fn ddl_value(&self) -> FieldValue<'_> {
        (**self).ddl_value()
    }
}

impl<T: DdlValue> DdlValue for Option<T> {
    fn ddl_value(&self) -> FieldValue<'_> {
        match self {
            Some(v) => v.ddl_value(),
            None => FieldValue::Unset,
        }
    }
}

impl<T: DdlValue + ?Sized> DdlValue for Box<T> {
    fn ddl_value(&self) -> FieldValue<'_> {
        (**self).ddl_value()
    }
}

/// Static markers carry no value.
impl DdlValue for () {
    fn ddl_value(&self) -> FieldValue<'_> {
        FieldValue::Unset
    }
}

impl DdlValue for bool {
    fn ddl_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl DdlValue for str {
    fn ddl_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl DdlValue for String {
    fn ddl_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

macro_rules! impl_ddl_value_num {
    ($variant:ident, $as:ty; $($t:ty),*) => {
        $(
            impl DdlValue for $t {
                fn ddl_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(*self as $as)
                }
            }
        )*
    };
}

impl_ddl_value_num!(Int, i64; i8, i16, i32, i64, isize);
impl_ddl_value_num!(UInt, u64; u8, u16, u32, u64, usize);
impl_ddl_value_num!(Float, f64; f64);
impl_ddl_value_num!(Float32, f32; f32);

/// A sequence of nested structs, rendered by `list` directives.
impl<T: Ddl> DdlValue for [T] {
    fn ddl_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.iter().map(|item| item as &dyn Ddl).collect())
    }
}

impl<T: Ddl> DdlValue for Vec<T> {
    fn ddl_value(&self) -> FieldValue<'_> {
        self.as_slice().ddl_value()
    }
}

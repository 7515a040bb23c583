//! Typed Snowflake statements built on `#[derive(Ddl)]`.
//!
//! Each options struct renders one statement through [`Statement::to_sql`], which
//! validates the combination of options before building.
//!
//! ```ignore
//! use snowddl::sdk::{DropWarehouseOptions, Statement};
//! use snowddl::AccountObjectIdentifier;
//!
//! let mut opts = DropWarehouseOptions::new(AccountObjectIdentifier::new("WH"));
//! opts.if_exists = Some(true);
//! assert_eq!(opts.to_sql()?, r#"DROP WAREHOUSE IF EXISTS "WH""#);
//! # Ok::<(), snowddl::DdlError>(())
//! ```

use crate::builder::SqlBuilder;
use crate::error::{DdlError, DdlResult};
use crate::value::Ddl;

/// Enum whose variants render as fixed SQL tokens.
macro_rules! sql_token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::DdlError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| {
                        $crate::DdlError::validation(format!(
                            "unknown {} '{s}'",
                            stringify!($name)
                        ))
                    })
            }
        }

        impl $crate::DdlValue for $name {
            fn ddl_value(&self) -> $crate::FieldValue<'_> {
                $crate::FieldValue::Str(self.as_str())
            }
        }
    };
}

mod network_policy;
mod table_constraint;
mod warehouse;

pub use network_policy::{
    AlterAccountOptions, AlterUserOptions, NetworkPolicySet, NetworkPolicyUnset,
};
pub use table_constraint::{
    AddTableConstraintOptions, Column, ConstraintType, Deferrability, DropTableConstraintOptions,
    Enforcement, ForeignKeyReference, InitialConstraintMode,
};
pub use warehouse::{
    AlterWarehouseOptions, CreateWarehouseOptions, DropWarehouseOptions, ScalingPolicy,
    TagAssociation, WarehouseProperty, WarehouseSet, WarehouseSize,
};

/// A complete statement that can render itself.
pub trait Statement: Ddl + Sized {
    /// Reject option combinations Snowflake would refuse.
    fn validate(&self) -> DdlResult<()> {
        Ok(())
    }

    /// Validate, then render with the default builder.
    fn to_sql(&self) -> DdlResult<String> {
        self.to_sql_with(&SqlBuilder::new())
    }

    fn to_sql_with(&self, builder: &SqlBuilder) -> DdlResult<String> {
        self.validate()?;
        builder.build(self)
    }
}

/// True when no registered field of `value` holds a value.
pub(crate) fn all_unset(value: &dyn Ddl) -> bool {
    value.ddl_fields().iter().all(|f| f.value.is_unset())
}

/// Exactly one of the named options must be set.
pub(crate) fn exactly_one(statement: &str, options: &[(&str, bool)]) -> DdlResult<()> {
    let set: Vec<&str> = options
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();
    if set.len() == 1 {
        return Ok(());
    }
    let names = options
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    Err(DdlError::validation(if set.is_empty() {
        format!("{statement}: one of [{names}] must be set")
    } else {
        format!(
            "{statement}: only one of [{names}] may be set, got [{}]",
            set.join(", ")
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    sql_token_enum! {
        enum Color {
            Red => "RED",
            DarkBlue => "DARK BLUE",
        }
    }

    #[test]
    fn token_enum_parses_case_insensitively() {
        assert_eq!("dark blue".parse::<Color>().unwrap(), Color::DarkBlue);
        assert_eq!(Color::Red.to_string(), "RED");
        assert!("green".parse::<Color>().unwrap_err().is_validation());
    }

    #[test]
    fn exactly_one_reports_missing_and_conflicting() {
        assert!(exactly_one("ALTER X", &[("SET", true), ("UNSET", false)]).is_ok());

        let err = exactly_one("ALTER X", &[("SET", false), ("UNSET", false)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: ALTER X: one of [SET, UNSET] must be set"
        );

        let err = exactly_one("ALTER X", &[("SET", true), ("UNSET", true)]).unwrap_err();
        assert!(err.to_string().contains("got [SET, UNSET]"));
    }
}

//! # snowddl
//!
//! Declarative SQL statement builder for Snowflake.
//!
//! Statements are plain structs whose fields carry directives. The builder walks
//! the fields in declaration order and renders each one into a clause:
//!
//! - **static**: always emits its token (`CREATE WAREHOUSE`)
//! - **keyword**: a bare value, or a flag token for booleans (`IF NOT EXISTS`)
//! - **command**: `NAME value`
//! - **parameter**: `NAME = value`
//! - **identifier**: a fully-qualified object name (`"DB"."SCHEMA"."T"`)
//! - **list**: nested structs joined with commas (`TAG (K = 'v',K2 = 'w')`)
//!
//! Unset optional fields render nothing.
//!
//! ```ignore
//! use snowddl::{AccountObjectIdentifier, Ddl, SqlBuilder};
//!
//! #[derive(Ddl)]
//! struct CreateWarehouse {
//!     #[ddl(static, name = "CREATE WAREHOUSE")]
//!     create: (),
//!     #[ddl(keyword, name = "IF NOT EXISTS")]
//!     if_not_exists: Option<bool>,
//!     #[ddl(identifier)]
//!     name: AccountObjectIdentifier,
//!     #[ddl(parameter, single_quotes, name = "COMMENT")]
//!     comment: Option<String>,
//! }
//!
//! let sql = SqlBuilder::new().build(&CreateWarehouse {
//!     create: (),
//!     if_not_exists: Some(true),
//!     name: AccountObjectIdentifier::new("WH"),
//!     comment: None,
//! })?;
//! assert_eq!(sql, r#"CREATE WAREHOUSE IF NOT EXISTS "WH""#);
//! ```

// Lets `#[derive(Ddl)]` paths (`::snowddl::...`) resolve inside this crate.
extern crate self as snowddl;

pub mod builder;
pub mod clause;
pub mod config;
pub mod directive;
pub mod error;
pub mod ident;
pub mod modifier;
pub mod value;

#[cfg(feature = "derive")]
pub mod sdk;

pub use builder::SqlBuilder;
pub use clause::Clause;
pub use config::BuilderConfig;
pub use directive::{Directive, Kind};
pub use error::{DdlError, DdlResult};
pub use ident::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, ObjectIdentifier, SchemaIdentifier,
    SchemaObjectIdentifier, UnqualifiedIdentifier,
};
pub use modifier::{EqualsModifier, ParenModifier, QuoteModifier, ReverseModifier};
pub use value::{Ddl, DdlValue, Field, FieldTag, FieldValue};

#[cfg(feature = "derive")]
pub use snowddl_derive::Ddl;

#[cfg(feature = "derive")]
pub use sdk::Statement;

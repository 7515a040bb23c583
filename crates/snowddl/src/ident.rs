//! Snowflake object identifiers.
//!
//! Identifiers render as their fully-qualified name: every part double-quoted,
//! parts joined with `.`, embedded `"` escaped as `""`.
//!
//! - [`AccountObjectIdentifier`]: warehouses, users, databases, network policies (`"NAME"`)
//! - [`DatabaseObjectIdentifier`]: schemas (`"DB"."SCHEMA"`)
//! - [`SchemaObjectIdentifier`]: tables, views (`"DB"."SCHEMA"."NAME"`)
//! - [`UnqualifiedIdentifier`]: names scoped by their statement, such as columns
//!   and constraints (`"NAME"`)
//!
//! All three parse from a dotted path where each part is either a bare word or a
//! double-quoted name:
//!
//! ```ignore
//! use snowddl::SchemaObjectIdentifier;
//!
//! let t: SchemaObjectIdentifier = r#"analytics.public."Events""#.parse()?;
//! assert_eq!(t.fully_qualified_name(), r#""analytics"."public"."Events""#);
//! # Ok::<(), snowddl::DdlError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{DdlError, DdlResult};
use crate::value::{DdlValue, FieldValue};

/// Anything with a fully-qualified name.
pub trait ObjectIdentifier {
    fn fully_qualified_name(&self) -> String;
}

/// Identifier for objects that live directly in the account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountObjectIdentifier {
    name: String,
}

impl AccountObjectIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Identifier for objects that live in a database (schemas).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseObjectIdentifier {
    database: String,
    name: String,
}

/// Schemas are the only database-level objects this crate addresses.
pub type SchemaIdentifier = DatabaseObjectIdentifier;

impl DatabaseObjectIdentifier {
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name: name.into(),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Identifier for objects that live in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaObjectIdentifier {
    database: String,
    schema: String,
    name: String,
}

impl SchemaObjectIdentifier {
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            name: name.into(),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema_identifier(&self) -> SchemaIdentifier {
        DatabaseObjectIdentifier::new(self.database.clone(), self.schema.clone())
    }
}

/// A bare name whose scope comes from the surrounding statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnqualifiedIdentifier {
    name: String,
}

impl UnqualifiedIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn write_quoted_parts(out: &mut String, parts: &[&str]) {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push('"');
        for ch in part.chars() {
            if ch == '"' {
                out.push('"');
                out.push('"');
            } else {
                out.push(ch);
            }
        }
        out.push('"');
    }
}

fn quoted_parts(parts: &[&str]) -> String {
    // two quotes per part plus the dots; escapes may add more
    let cap = parts.iter().map(|p| p.len() + 2).sum::<usize>() + parts.len().saturating_sub(1);
    let mut out = String::with_capacity(cap);
    write_quoted_parts(&mut out, parts);
    out
}

impl ObjectIdentifier for AccountObjectIdentifier {
    fn fully_qualified_name(&self) -> String {
        quoted_parts(&[&self.name])
    }
}

impl ObjectIdentifier for UnqualifiedIdentifier {
    fn fully_qualified_name(&self) -> String {
        quoted_parts(&[&self.name])
    }
}

impl ObjectIdentifier for DatabaseObjectIdentifier {
    fn fully_qualified_name(&self) -> String {
        quoted_parts(&[&self.database, &self.name])
    }
}

impl ObjectIdentifier for SchemaObjectIdentifier {
    fn fully_qualified_name(&self) -> String {
        quoted_parts(&[&self.database, &self.schema, &self.name])
    }
}

/// Split a dotted identifier path into its parts.
///
/// - Bare parts: `[A-Za-z_][A-Za-z0-9_$]*`, kept as written
/// - Quoted parts: any characters except NUL, `""` unescapes to `"`
pub fn parse_identifier_parts(s: &str) -> DdlResult<Vec<String>> {
    if s.is_empty() {
        return Err(DdlError::invalid_identifier("identifier cannot be empty"));
    }
    if s.contains('\0') {
        return Err(DdlError::invalid_identifier(
            "identifier cannot contain NUL character",
        ));
    }

    let mut parts = Vec::new();
    let mut chars = s.chars().peekable();

    while chars.peek().is_some() {
        if !parts.is_empty() {
            match chars.next() {
                Some('.') => {
                    if chars.peek().is_none() {
                        return Err(DdlError::invalid_identifier(format!(
                            "trailing '.' in identifier '{s}'"
                        )));
                    }
                }
                Some(c) => {
                    return Err(DdlError::invalid_identifier(format!(
                        "expected '.' between identifier parts, got '{c}'"
                    )));
                }
                None => break,
            }
        }

        if chars.peek() == Some(&'"') {
            chars.next();
            let mut name = String::new();
            loop {
                match chars.next() {
                    Some('"') => {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            name.push('"');
                        } else {
                            break;
                        }
                    }
                    Some(c) => name.push(c),
                    None => {
                        return Err(DdlError::invalid_identifier(format!(
                            "unclosed quoted identifier in '{s}'"
                        )));
                    }
                }
            }
            if name.is_empty() {
                return Err(DdlError::invalid_identifier("empty quoted identifier"));
            }
            parts.push(name);
            continue;
        }

        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if c == '.' {
                break;
            }
            let ok = if name.is_empty() {
                c == '_' || c.is_ascii_alphabetic()
            } else {
                c == '_' || c == '$' || c.is_ascii_alphanumeric()
            };
            if !ok {
                return Err(DdlError::invalid_identifier(format!(
                    "invalid character '{c}' in identifier '{s}'"
                )));
            }
            name.push(c);
            chars.next();
        }
        if name.is_empty() {
            return Err(DdlError::invalid_identifier(format!(
                "empty segment in identifier '{s}'"
            )));
        }
        parts.push(name);
    }

    Ok(parts)
}

fn parse_exact<const N: usize>(s: &str, what: &str) -> DdlResult<[String; N]> {
    let parts = parse_identifier_parts(s)?;
    let found = parts.len();
    parts.try_into().map_err(|_| {
        DdlError::invalid_identifier(format!(
            "{what} expects {N} part(s), got {found} in '{s}'"
        ))
    })
}

impl FromStr for AccountObjectIdentifier {
    type Err = DdlError;

    fn from_str(s: &str) -> DdlResult<Self> {
        let [name] = parse_exact::<1>(s, "account object identifier")?;
        Ok(Self { name })
    }
}

impl FromStr for UnqualifiedIdentifier {
    type Err = DdlError;

    fn from_str(s: &str) -> DdlResult<Self> {
        let [name] = parse_exact::<1>(s, "unqualified identifier")?;
        Ok(Self { name })
    }
}

impl FromStr for DatabaseObjectIdentifier {
    type Err = DdlError;

    fn from_str(s: &str) -> DdlResult<Self> {
        let [database, name] = parse_exact::<2>(s, "database object identifier")?;
        Ok(Self { database, name })
    }
}

impl FromStr for SchemaObjectIdentifier {
    type Err = DdlError;

    fn from_str(s: &str) -> DdlResult<Self> {
        let [database, schema, name] = parse_exact::<3>(s, "schema object identifier")?;
        Ok(Self {
            database,
            schema,
            name,
        })
    }
}

macro_rules! impl_identifier_common {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.fully_qualified_name())
                }
            }

            impl DdlValue for $t {
                fn ddl_value(&self) -> FieldValue<'_> {
                    FieldValue::Identifier(self.fully_qualified_name())
                }
            }
        )*
    };
}

impl_identifier_common!(
    UnqualifiedIdentifier,
    AccountObjectIdentifier,
    DatabaseObjectIdentifier,
    SchemaObjectIdentifier
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_object_fqn() {
        let id = AccountObjectIdentifier::new("COMPUTE_WH");
        assert_eq!(id.fully_qualified_name(), r#""COMPUTE_WH""#);
        assert_eq!(id.to_string(), r#""COMPUTE_WH""#);
    }

    #[test]
    fn schema_object_fqn() {
        let id = SchemaObjectIdentifier::new("DB", "PUBLIC", "events");
        assert_eq!(id.fully_qualified_name(), r#""DB"."PUBLIC"."events""#);
        assert_eq!(id.schema_identifier().fully_qualified_name(), r#""DB"."PUBLIC""#);
    }

    #[test]
    fn fqn_escapes_quotes() {
        let id = AccountObjectIdentifier::new(r#"has"quote"#);
        assert_eq!(id.fully_qualified_name(), r#""has""quote""#);
    }

    #[test]
    fn unqualified_escapes_quotes() {
        let id = UnqualifiedIdentifier::new(r#"a"b"#);
        assert_eq!(id.to_string(), r#""a""b""#);
        let parsed: UnqualifiedIdentifier = id.fully_qualified_name().parse().unwrap();
        assert_eq!(parsed.name(), r#"a"b"#);
    }

    #[test]
    fn parse_bare_parts() {
        let id: SchemaObjectIdentifier = "analytics.public.events".parse().unwrap();
        assert_eq!(id.database_name(), "analytics");
        assert_eq!(id.schema_name(), "public");
        assert_eq!(id.name(), "events");
    }

    #[test]
    fn parse_mixed_quoted_parts() {
        let id: SchemaObjectIdentifier = r#"analytics."My Schema"."has""quote""#.parse().unwrap();
        assert_eq!(id.schema_name(), "My Schema");
        assert_eq!(id.name(), r#"has"quote"#);
        assert_eq!(
            id.fully_qualified_name(),
            r#""analytics"."My Schema"."has""quote""#
        );
    }

    #[test]
    fn parse_round_trips_fqn() {
        let id = DatabaseObjectIdentifier::new("DB", "S.1");
        let parsed: DatabaseObjectIdentifier = id.fully_qualified_name().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_wrong_part_count() {
        assert!("db.schema".parse::<SchemaObjectIdentifier>().is_err());
        assert!("a.b".parse::<AccountObjectIdentifier>().is_err());
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(parse_identifier_parts("").is_err());
        assert!(parse_identifier_parts("1table").is_err());
        assert!(parse_identifier_parts("my table").is_err());
        assert!(parse_identifier_parts("db..t").is_err());
        assert!(parse_identifier_parts("db.").is_err());
        assert!(parse_identifier_parts(r#""unclosed"#).is_err());
        assert!(parse_identifier_parts(r#""""#).is_err());
    }
}

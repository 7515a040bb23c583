//! Directive-driven SQL builder.
//!
//! [`SqlBuilder`] walks the fields a [`Ddl`] type registers, turns each field into
//! zero or one [`Clause`] according to its [`Directive`], and joins the clauses
//! into SQL text.
//!
//! # Example
//!
//! ```ignore
//! use snowddl::{Ddl, SqlBuilder};
//!
//! #[derive(Ddl)]
//! struct DropThing {
//!     #[ddl(static, name = "DROP THING")]
//!     drop: (),
//!     #[ddl(keyword, name = "IF EXISTS")]
//!     if_exists: Option<bool>,
//!     #[ddl(keyword, double_quotes)]
//!     name: String,
//! }
//!
//! let sql = SqlBuilder::new().build(&DropThing {
//!     drop: (),
//!     if_exists: Some(true),
//!     name: "t".into(),
//! })?;
//! assert_eq!(sql, r#"DROP THING IF EXISTS "t""#);
//! ```

use tracing::Level;

use crate::clause::{Clause, join_clauses};
use crate::config::BuilderConfig;
use crate::directive::{Directive, Kind};
use crate::error::{DdlError, DdlResult};
use crate::modifier::{ParenModifier, QuoteModifier};
use crate::value::{Ddl, Field, FieldValue};


/// Stateless SQL builder. Holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    config: BuilderConfig,
}

/// Truncate to at most `max_bytes`, backing off to a char boundary.
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// Last path segment of a type name, e.g. `CreateWarehouseOptions`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn malformed(field: &str, message: impl Into<String>) -> DdlError {
    let err = DdlError::malformed(field, message);
    tracing::warn!(target: "snowddl.builder", field, error = %err, "rejecting field directive");
    err
}

impl SqlBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Parse a runtime directive tag under this builder's configuration.
    pub fn directive(
        &self,
        field: &str,
        tag: &str,
        name: Option<&'static str>,
    ) -> DdlResult<Directive> {
        Directive::parse_with(field, tag, name, &self.config)
    }

    /// Parse and assemble a whole statement, logging the result.
    pub fn build<T: Ddl>(&self, statement: &T) -> DdlResult<String> {
        let clauses = self.parse_struct(statement)?;
        let sql = self.sql(&clauses);
        self.emit(short_type_name::<T>(), &sql);
        Ok(sql)
    }

    /// Join clauses with single spaces, dropping clauses that render empty.
    pub fn sql(&self, clauses: &[Clause]) -> String {
        join_clauses(clauses)
    }

    /// Clauses for every registered field of `value`, in declaration order.
    ///
    /// The first failing field aborts the whole struct.
    pub fn parse_struct(&self, value: &dyn Ddl) -> DdlResult<Vec<Clause>> {
        let mut clauses = Vec::new();
        for field in value.ddl_fields() {
            clauses.extend(self.parse_field(&field)?);
        }
        Ok(clauses)
    }

    /// Clauses for one field: empty when the field has no directive or no value.
    pub fn parse_field(&self, field: &Field<'_>) -> DdlResult<Vec<Clause>> {
        let Some(directive) = self.resolve_directive(field)? else {
            return Ok(Vec::new());
        };
        let directive = &directive;

        match (directive.kind, &field.value) {
            // static renders whether or not the field holds a value
            (Kind::Static, _) => {
                let name = required_name(field, directive)?;
                Ok(vec![Clause::Static(name.to_string())])
            }

            (_, FieldValue::Unset) => Ok(Vec::new()),

            (Kind::List, FieldValue::List(items)) => self.parse_list(directive, items),
            (Kind::List, other) => Err(malformed(
                field.name,
                format!("list directive requires a sequence, got {}", other.type_name()),
            )),
            (kind, FieldValue::List(_)) => Err(malformed(
                field.name,
                format!("sequence value requires a list directive, got {}", kind.as_str()),
            )),

            (Kind::Identifier, FieldValue::Identifier(fqn)) => {
                Ok(vec![Clause::Identifier(fqn.clone())])
            }
            (Kind::Identifier, FieldValue::Str(s)) => Ok(vec![Clause::Identifier(s.to_string())]),
            (Kind::Identifier, other) => Err(malformed(
                field.name,
                format!("identifier directive cannot render {}", other.type_name()),
            )),

            (Kind::Keyword, FieldValue::Bool(flag)) => {
                let name = required_name(field, directive)?;
                Ok(if *flag {
                    vec![Clause::Static(name.to_string())]
                } else {
                    Vec::new()
                })
            }
            (Kind::Keyword, FieldValue::Struct(inner)) => self.parse_nested(directive, *inner),
            (Kind::Keyword, value) => Ok(vec![Clause::Keyword {
                value: self.value_text(field.name, value)?,
                quotes: directive.quotes,
            }]),

            (Kind::Command, value) => {
                let Some(value) = self.nonempty_value_text(field.name, directive, value)? else {
                    return Ok(Vec::new());
                };
                Ok(vec![Clause::Command {
                    name: directive.name.map(str::to_string),
                    value,
                    quotes: directive.quotes,
                    parentheses: directive.parentheses,
                    reverse: directive.reverse,
                }])
            }

            (Kind::Parameter, value) => {
                let Some(value) = self.nonempty_value_text(field.name, directive, value)? else {
                    return Ok(Vec::new());
                };
                Ok(vec![Clause::Parameter {
                    name: directive.name.map(str::to_string),
                    value,
                    quotes: directive.quotes,
                    equals: directive.equals,
                    parentheses: directive.parentheses,
                }])
            }
        }
    }

    /// The field's directive, parsing its tag when it only carries one.
    fn resolve_directive(&self, field: &Field<'_>) -> DdlResult<Option<Directive>> {
        if let Some(directive) = field.directive {
            return Ok(Some(directive));
        }
        let Some(tag) = field.tag else {
            return Ok(None);
        };
        self.directive(field.name, tag.tag, tag.name)
            .map(Some)
            .inspect_err(|err| {
                tracing::warn!(
                    target: "snowddl.builder",
                    field = field.name,
                    tag = tag.tag,
                    error = %err,
                    "rejecting field tag"
                );
            })
    }

    fn parse_list(&self, directive: &Directive, items: &[&dyn Ddl]) -> DdlResult<Vec<Clause>> {
        let mut elements = Vec::with_capacity(items.len());
        for item in items {
            let clauses = self.parse_struct(*item)?;
            if !clauses.is_empty() {
                elements.push(clauses);
            }
        }
        if elements.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Clause::List {
            name: directive.name.map(str::to_string),
            elements,
            parentheses: directive.parentheses,
        }])
    }

    /// A nested struct under a keyword directive splices its clauses in place,
    /// after the directive's name if it has one.
    fn parse_nested(&self, directive: &Directive, inner: &dyn Ddl) -> DdlResult<Vec<Clause>> {
        let inner_clauses = self.parse_struct(inner)?;
        if inner_clauses.is_empty() {
            return Ok(Vec::new());
        }

        let mut clauses = Vec::with_capacity(inner_clauses.len() + 1);
        if let Some(name) = directive.name {
            clauses.push(Clause::Static(name.to_string()));
        }
        match directive.parentheses {
            ParenModifier::Parentheses => clauses.push(Clause::Keyword {
                value: ParenModifier::Parentheses.modify(&self.sql(&inner_clauses)),
                quotes: directive.quotes,
            }),
            ParenModifier::NoParentheses => clauses.extend(inner_clauses),
        }
        Ok(clauses)
    }

    fn value_text(&self, field: &str, value: &FieldValue<'_>) -> DdlResult<String> {
        Ok(match value {
            FieldValue::Unset => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Int(n) => n.to_string(),
            FieldValue::UInt(n) => n.to_string(),
            FieldValue::Float(n) => n.to_string(),
            FieldValue::Float32(n) => n.to_string(),
            FieldValue::Str(s) => (*s).to_string(),
            FieldValue::Identifier(fqn) => fqn.clone(),
            FieldValue::Struct(inner) => {
                let clauses = self.parse_struct(*inner)?;
                self.sql(&clauses)
            }
            FieldValue::List(_) => {
                return Err(malformed(field, "sequence value requires a list directive"));
            }
        })
    }

    /// Value text, or `None` when it would render as nothing.
    ///
    /// An empty value still renders when quoted (`COMMENT = ''`).
    fn nonempty_value_text(
        &self,
        field: &str,
        directive: &Directive,
        value: &FieldValue<'_>,
    ) -> DdlResult<Option<String>> {
        let text = self.value_text(field, value)?;
        let quoted = directive.quotes != QuoteModifier::NoQuotes;
        if text.is_empty() && (matches!(value, FieldValue::Struct(_)) || !quoted) {
            return Ok(None);
        }
        Ok(Some(text))
    }

    fn emit(&self, statement: &str, sql: &str) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = match self.config.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        };
        emit_at_level!(
            self.config.log_level,
            target: "snowddl.sql",
            statement,
            sql = %sql,
        );
    }
}

fn required_name<'d>(field: &Field<'_>, directive: &'d Directive) -> DdlResult<&'d str> {
    directive.name.ok_or_else(|| {
        malformed(
            field.name,
            format!("{} directive requires a name", directive.kind.as_str()),
        )
    })
}

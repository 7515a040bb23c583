//! Rendered SQL clauses.

use std::fmt;

use crate::modifier::{EqualsModifier, ParenModifier, QuoteModifier, ReverseModifier};

/// One SQL fragment produced by a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Literal token, e.g. `CREATE WAREHOUSE`.
    Static(String),
    /// Bare value.
    Keyword { value: String, quotes: QuoteModifier },
    /// `NAME value`
    Command {
        name: Option<String>,
        value: String,
        quotes: QuoteModifier,
        parentheses: ParenModifier,
        reverse: ReverseModifier,
    },
    /// `NAME = value`
    Parameter {
        name: Option<String>,
        value: String,
        quotes: QuoteModifier,
        equals: EqualsModifier,
        parentheses: ParenModifier,
    },
    /// Fully-qualified object name.
    Identifier(String),
    /// `NAME (elem,elem)`, each element being the clauses of one nested struct.
    List {
        name: Option<String>,
        elements: Vec<Vec<Clause>>,
        parentheses: ParenModifier,
    },
}

impl Clause {
    pub fn static_token(token: impl Into<String>) -> Self {
        Self::Static(token.into())
    }

    pub fn parameter(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parameter {
            name: Some(name.into()),
            value: value.into(),
            quotes: QuoteModifier::NoQuotes,
            equals: EqualsModifier::Equals,
            parentheses: ParenModifier::NoParentheses,
        }
    }

    pub fn command(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Command {
            name: Some(name.into()),
            value: value.into(),
            quotes: QuoteModifier::NoQuotes,
            parentheses: ParenModifier::NoParentheses,
            reverse: ReverseModifier::NoReverse,
        }
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self::Keyword {
            value: value.into(),
            quotes: QuoteModifier::NoQuotes,
        }
    }

    /// Render to SQL text.
    pub fn to_sql(&self) -> String {
        match self {
            Self::Static(token) => token.clone(),
            Self::Keyword { value, quotes } => quotes.modify(value),
            Self::Command {
                name,
                value,
                quotes,
                parentheses,
                reverse,
            } => {
                let value = parentheses.modify(&quotes.modify(value));
                match name {
                    Some(name) => reverse.modify(&[name.as_str(), value.as_str()]),
                    None => value,
                }
            }
            Self::Parameter {
                name,
                value,
                quotes,
                equals,
                parentheses,
            } => {
                let value = parentheses.modify(&quotes.modify(value));
                match name {
                    Some(name) => format!("{name} {}", equals.modify(&value)),
                    None => value,
                }
            }
            Self::Identifier(fqn) => fqn.clone(),
            Self::List {
                name,
                elements,
                parentheses,
            } => {
                let items = elements
                    .iter()
                    .map(Vec::as_slice)
                    .map(join_clauses)
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(",");
                let items = parentheses.modify(&items);
                match name {
                    Some(name) => format!("{name} {items}"),
                    None => items,
                }
            }
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Render clauses in order, skipping empty renders, separated by one space.
pub fn join_clauses(clauses: &[Clause]) -> String {
    let mut out = String::new();
    for clause in clauses {
        let sql = clause.to_sql();
        if sql.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&sql);
    }
    out
}

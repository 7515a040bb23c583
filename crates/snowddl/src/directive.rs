//! Field directives.
//!
//! A [`Directive`] declares how one field renders into SQL: its [`Kind`], an
//! optional rendered name and the modifiers applied to the value. Directives are
//! normally produced by `#[derive(Ddl)]`; [`Directive::parse`] reads the same
//! information from a comma-separated tag such as `"parameter,single_quotes"`.

use crate::config::BuilderConfig;
use crate::error::{DdlError, DdlResult};
use crate::modifier::{
    EqualsModifier, ParenModifier, QuoteModifier, ReverseModifier, is_known_designator,
};

/// The clause shape a field renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Bare value, or the name alone for boolean flags.
    Keyword,
    /// `NAME value`
    Command,
    /// The name, always.
    Static,
    /// `NAME = value`
    Parameter,
    /// Fully-qualified object name.
    Identifier,
    /// Sequence of nested structs.
    List,
}

impl Kind {
    pub fn parse(s: &str) -> Option<Self> {
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

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Command => "command",
            Self::Static => "static",
            Self::Parameter => "parameter",
            Self::Identifier => "identifier",
            Self::List => "list",
        }
    }
}

/// Rendering metadata for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub kind: Kind,
    /// SQL token emitted with the value (`KEY` in `KEY = 'abc'`).
    pub name: Option<&'static str>,
    pub quotes: QuoteModifier,
    pub equals: EqualsModifier,
    pub parentheses: ParenModifier,
    pub reverse: ReverseModifier,
}

impl Directive {
    /// Directive with the defaults for `kind`.
    ///
    /// `parameter` starts with `=` enabled and `list` starts parenthesized.
    pub const fn new(kind: Kind) -> Self {
        Self {
            kind,
            name: None,
            quotes: QuoteModifier::NoQuotes,
            equals: match kind {
                Kind::Parameter => EqualsModifier::Equals,
                _ => EqualsModifier::NoEquals,
            },
            parentheses: match kind {
                Kind::List => ParenModifier::Parentheses,
                _ => ParenModifier::NoParentheses,
            },
            reverse: ReverseModifier::NoReverse,
        }
    }

    pub const fn keyword() -> Self {
        Self::new(Kind::Keyword)
    }

    pub const fn command(name: &'static str) -> Self {
        Self::new(Kind::Command).named(name)
    }

    pub const fn static_token(name: &'static str) -> Self {
        Self::new(Kind::Static).named(name)
    }

    pub const fn parameter(name: &'static str) -> Self {
        Self::new(Kind::Parameter).named(name)
    }

    pub const fn identifier() -> Self {
        Self::new(Kind::Identifier)
    }

    pub const fn list() -> Self {
        Self::new(Kind::List)
    }

    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub const fn quotes(mut self, quotes: QuoteModifier) -> Self {
        self.quotes = quotes;
        self
    }

    pub const fn equals(mut self, equals: EqualsModifier) -> Self {
        self.equals = equals;
        self
    }

    pub const fn parentheses(mut self, parentheses: ParenModifier) -> Self {
        self.parentheses = parentheses;
        self
    }

    pub const fn reverse(mut self, reverse: ReverseModifier) -> Self {
        self.reverse = reverse;
        self
    }

    /// Parse a tag with the default (permissive) configuration.
    ///
    /// ```ignore
    /// let d = Directive::parse("K", "parameter,single_quotes", Some("KEY"))?;
    /// ```
    pub fn parse(field: &str, tag: &str, name: Option<&'static str>) -> DdlResult<Self> {
        Self::parse_with(field, tag, name, &BuilderConfig::default())
    }

    /// Parse a tag of the form `<kind>[,<modifier>]*`.
    ///
    /// The kind must be known. Modifiers that no family recognizes are ignored
    /// unless `config.strict_modifiers` is set.
    pub fn parse_with(
        field: &str,
        tag: &str,
        name: Option<&'static str>,
        config: &BuilderConfig,
    ) -> DdlResult<Self> {
        let mut tokens = tag.split(',').map(str::trim).filter(|t| !t.is_empty());

        let Some(kind_token) = tokens.next() else {
            return Err(DdlError::malformed(field, "directive has no kind"));
        };
        let Some(kind) = Kind::parse(kind_token) else {
            return Err(DdlError::malformed(
                field,
                format!("unknown directive kind '{kind_token}'"),
            ));
        };

        let mut directive = Self::new(kind);
        directive.name = name.filter(|n| !n.is_empty());

        for token in tokens {
            if !is_known_designator(token) {
                if config.strict_modifiers {
                    return Err(DdlError::UnknownModifier {
                        tag: tag.to_string(),
                        designator: token.to_string(),
                    });
                }
                continue;
            }
            if QuoteModifier::DESIGNATORS.contains(&token) {
                directive.quotes = QuoteModifier::from(token);
            } else if EqualsModifier::DESIGNATORS.contains(&token) {
                directive.equals = EqualsModifier::from(token);
            } else if ParenModifier::DESIGNATORS.contains(&token) {
                directive.parentheses = ParenModifier::from(token);
            } else {
                directive.reverse = ReverseModifier::from(token);
            }
        }

        Ok(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_per_kind() {
        let p = Directive::new(Kind::Parameter);
        assert_eq!(p.equals, EqualsModifier::Equals);
        assert_eq!(p.parentheses, ParenModifier::NoParentheses);

        let l = Directive::new(Kind::List);
        assert_eq!(l.equals, EqualsModifier::NoEquals);
        assert_eq!(l.parentheses, ParenModifier::Parentheses);

        let c = Directive::new(Kind::Command);
        assert_eq!(c.quotes, QuoteModifier::NoQuotes);
        assert_eq!(c.reverse, ReverseModifier::NoReverse);
    }

    #[test]
    fn parse_kind_and_modifiers() {
        let d = Directive::parse("k", "parameter, single_quotes,no_equals", Some("KEY")).unwrap();
        assert_eq!(d.kind, Kind::Parameter);
        assert_eq!(d.name, Some("KEY"));
        assert_eq!(d.quotes, QuoteModifier::SingleQuotes);
        assert_eq!(d.equals, EqualsModifier::NoEquals);
    }

    #[test]
    fn parse_list_without_parentheses() {
        let d = Directive::parse("list", "list,no_parentheses", None).unwrap();
        assert_eq!(d.kind, Kind::List);
        assert_eq!(d.parentheses, ParenModifier::NoParentheses);
    }

    #[test]
    fn parse_drops_empty_name() {
        let d = Directive::parse("k", "keyword", Some("")).unwrap();
        assert_eq!(d.name, None);
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let err = Directive::parse("k", "keywrd", None).unwrap_err();
        assert!(err.is_malformed_directive());
        assert!(err.to_string().contains("keywrd"));
    }

    #[test]
    fn parse_rejects_missing_kind() {
        assert!(Directive::parse("k", " , ", None).unwrap_err().is_malformed_directive());
    }

    #[test]
    fn parse_ignores_unknown_modifier_by_default() {
        let d = Directive::parse("k", "command,sngle_quotes", Some("C")).unwrap();
        assert_eq!(d, Directive::command("C"));
    }

    #[test]
    fn parse_rejects_unknown_modifier_when_strict() {
        let config = BuilderConfig::new().strict_modifiers();
        let err = Directive::parse_with("k", "command,sngle_quotes", Some("C"), &config).unwrap_err();
        assert!(matches!(err, DdlError::UnknownModifier { ref designator, .. } if designator == "sngle_quotes"));
    }
}

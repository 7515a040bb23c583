//! Rendering modifiers applied by clauses.
//!
//! Each modifier family has an identity variant and one or more active variants.
//! Families convert from their tag designator with `From<&str>`; a designator that
//! is not recognized converts to the identity variant.

/// Token order for `NAME value` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReverseModifier {
    /// Join tokens in reverse order.
    Reverse,
    #[default]
    NoReverse,
}

impl ReverseModifier {
    pub const DESIGNATORS: &'static [&'static str] = &["reverse", "no_reverse"];

    /// Join `tokens` with a single space, reversed when active.
    pub fn modify(self, tokens: &[&str]) -> String {
        match self {
            Self::Reverse => {
                let mut reversed = tokens.to_vec();
                reversed.reverse();
                reversed.join(" ")
            }
            Self::NoReverse => tokens.join(" "),
        }
    }

    pub fn handle_reverse(self, tokens: &[&str]) -> String {
        self.modify(tokens)
    }
}

impl From<&str> for ReverseModifier {
    fn from(designator: &str) -> Self {
        match designator {
            "reverse" => Self::Reverse,
            _ => Self::NoReverse,
        }
    }
}

/// Presence of `=` between a name and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqualsModifier {
    Equals,
    #[default]
    NoEquals,
}

impl EqualsModifier {
    pub const DESIGNATORS: &'static [&'static str] = &["equals", "no_equals"];

    pub fn modify(self, value: &str) -> String {
        match self {
            Self::Equals => format!("= {value}"),
            Self::NoEquals => value.to_string(),
        }
    }

    pub fn handle_equals(self, value: &str) -> String {
        self.modify(value)
    }
}

impl From<&str> for EqualsModifier {
    fn from(designator: &str) -> Self {
        match designator {
            "equals" => Self::Equals,
            _ => Self::NoEquals,
        }
    }
}

/// Wrapping in `(` `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParenModifier {
    Parentheses,
    #[default]
    NoParentheses,
}

impl ParenModifier {
    pub const DESIGNATORS: &'static [&'static str] = &["parentheses", "no_parentheses"];

    pub fn modify(self, value: &str) -> String {
        match self {
            Self::Parentheses => format!("({value})"),
            Self::NoParentheses => value.to_string(),
        }
    }

    pub fn handle_parentheses(self, value: &str) -> String {
        self.modify(value)
    }
}

impl From<&str> for ParenModifier {
    fn from(designator: &str) -> Self {
        match designator {
            "parentheses" => Self::Parentheses,
            _ => Self::NoParentheses,
        }
    }
}

/// Quote characters wrapped around a rendered value.
///
/// The wrapped text is escaped for its quote style: `"` doubles inside double
/// quotes; `'` doubles and `\` is escaped inside single quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteModifier {
    #[default]
    NoQuotes,
    DoubleQuotes,
    SingleQuotes,
}

impl QuoteModifier {
    pub const DESIGNATORS: &'static [&'static str] =
        &["no_quotes", "double_quotes", "single_quotes"];

    pub fn modify(self, value: &str) -> String {
        match self {
            Self::NoQuotes => value.to_string(),
            Self::DoubleQuotes => format!("\"{}\"", value.replace('"', "\"\"")),
            Self::SingleQuotes => {
                format!("'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
            }
        }
    }

    pub fn handle_quotes(self, value: &str) -> String {
        self.modify(value)
    }
}

impl From<&str> for QuoteModifier {
    fn from(designator: &str) -> Self {
        match designator {
            "double_quotes" => Self::DoubleQuotes,
            "single_quotes" => Self::SingleQuotes,
            _ => Self::NoQuotes,
        }
    }
}

/// Whether `designator` belongs to any modifier family.
pub fn is_known_designator(designator: &str) -> bool {
    ReverseModifier::DESIGNATORS.contains(&designator)
        || EqualsModifier::DESIGNATORS.contains(&designator)
        || ParenModifier::DESIGNATORS.contains(&designator)
        || QuoteModifier::DESIGNATORS.contains(&designator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_modifier() {
        assert_eq!(ReverseModifier::Reverse.modify(&["example", "DESC"]), "DESC example");
        assert_eq!(
            ReverseModifier::Reverse.handle_reverse(&["example", "DESC"]),
            "DESC example"
        );
    }

    #[test]
    fn no_reverse_modifier() {
        assert_eq!(ReverseModifier::NoReverse.modify(&["example", "DESC"]), "example DESC");
    }

    #[test]
    fn unknown_reverse_modifier() {
        assert_eq!(
            ReverseModifier::from("unknown").modify(&["example", "DESC"]),
            "example DESC"
        );
    }

    #[test]
    fn equals_modifier() {
        assert_eq!(EqualsModifier::Equals.modify("example"), "= example");
        assert_eq!(EqualsModifier::Equals.handle_equals("example"), "= example");
    }

    #[test]
    fn no_equals_modifier() {
        assert_eq!(EqualsModifier::NoEquals.modify("example"), "example");
        assert_eq!(EqualsModifier::NoEquals.handle_equals("example"), "example");
    }

    #[test]
    fn unknown_equals_modifier() {
        assert_eq!(EqualsModifier::from("unknown").modify("example"), "example");
        assert_eq!(EqualsModifier::from("unknown").handle_equals("example"), "example");
    }

    #[test]
    fn paren_modifier() {
        assert_eq!(ParenModifier::Parentheses.modify("example"), "(example)");
        assert_eq!(ParenModifier::Parentheses.handle_parentheses("example"), "(example)");
    }

    #[test]
    fn no_paren_modifier() {
        assert_eq!(ParenModifier::NoParentheses.modify("example"), "example");
        assert_eq!(ParenModifier::NoParentheses.handle_parentheses("example"), "example");
    }

    #[test]
    fn unknown_paren_modifier() {
        assert_eq!(ParenModifier::from("unknown").modify("example"), "example");
        assert_eq!(ParenModifier::from("unknown").handle_parentheses("example"), "example");
    }

    #[test]
    fn quote_modifiers() {
        assert_eq!(QuoteModifier::DoubleQuotes.modify("example"), "\"example\"");
        assert_eq!(QuoteModifier::DoubleQuotes.handle_quotes("example"), "\"example\"");
        assert_eq!(QuoteModifier::SingleQuotes.modify("example"), "'example'");
        assert_eq!(QuoteModifier::SingleQuotes.handle_quotes("example"), "'example'");
        assert_eq!(QuoteModifier::NoQuotes.modify("example"), "example");
        assert_eq!(QuoteModifier::NoQuotes.handle_quotes("example"), "example");
    }

    #[test]
    fn quote_modifiers_escape_embedded_quotes() {
        assert_eq!(QuoteModifier::DoubleQuotes.modify(r#"a"b"#), r#""a""b""#);
        assert_eq!(QuoteModifier::SingleQuotes.modify("it's"), "'it''s'");
        assert_eq!(QuoteModifier::SingleQuotes.modify(r"C:\tmp"), r"'C:\\tmp'");
        assert_eq!(QuoteModifier::NoQuotes.modify("it's"), "it's");
    }

    #[test]
    fn unknown_quote_modifier() {
        assert_eq!(QuoteModifier::from("unknown").modify("example"), "example");
        assert_eq!(QuoteModifier::from("unknown").handle_quotes("example"), "example");
    }

    #[test]
    fn designator_lookup() {
        assert!(is_known_designator("single_quotes"));
        assert!(is_known_designator("no_parentheses"));
        assert!(!is_known_designator("singel_quotes"));
    }
}

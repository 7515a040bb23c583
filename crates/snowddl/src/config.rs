use tracing::Level;

/// Configuration for [`SqlBuilder`](crate::SqlBuilder).
///
/// The defaults log statements at `DEBUG`, truncate logged SQL to 200 bytes and
/// treat unknown modifier designators as no-ops.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Tracing event level for assembled statements.
    pub log_level: Level,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
    /// Reject unknown modifier designators in [`Directive::parse_with`](crate::Directive::parse_with).
    pub strict_modifiers: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            log_level: Level::DEBUG,
            max_sql_length: Some(200),
            strict_modifiers: false,
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// Fail directive parsing on unknown modifier designators.
    pub fn strict_modifiers(mut self) -> Self {
        self.strict_modifiers = true;
        self
    }

    /// Ignore unknown modifier designators (default).
    pub fn permissive_modifiers(mut self) -> Self {
        self.strict_modifiers = false;
        self
    }
}

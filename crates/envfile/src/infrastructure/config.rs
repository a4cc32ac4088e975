//! Reader configuration

/// Platform line separator used to rejoin the lines of a file.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Platform line separator used to rejoin the lines of a file.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Configuration for [`crate::EnvFileReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Separator placed between consecutive lines of a file
    pub line_separator: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            line_separator: LINE_SEPARATOR.to_string(),
        }
    }
}

impl ReaderConfig {
    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_platform_separator() {
        assert_eq!(ReaderConfig::default().line_separator, LINE_SEPARATOR);
    }

    #[test]
    fn separator_can_be_overridden() {
        let config = ReaderConfig::default().with_line_separator("\r\n");

        assert_eq!(config.line_separator, "\r\n");
    }
}

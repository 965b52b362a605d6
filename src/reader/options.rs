//! Reading options and configuration.

/// Options for reconstructing a document from block records.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,
}

impl ReadOptions {
    /// Create new read options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip records that are not document blocks).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }
}

/// How records with a non-block tag are handled.
///
/// Malformed records abort reconstruction in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on a `table_row`, `table_header`, `table_cell` or unknown tag
    #[default]
    Strict,
    /// Skip such records with a warning and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_options_builder() {
        let options = ReadOptions::new().lenient();
        assert_eq!(options.error_mode, ErrorMode::Lenient);

        let options = options.with_error_mode(ErrorMode::Strict);
        assert_eq!(options.error_mode, ErrorMode::Strict);
    }

    #[test]
    fn test_default_options() {
        let options = ReadOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
    }
}

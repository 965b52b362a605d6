//! Rendering options and configuration.

/// Options for document-level export.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render top-level blocks on the rayon pool (output order is preserved)
    pub parallel: bool,

    /// Also export top-level blocks that precede or sit between sections
    pub include_preamble: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render on the calling thread only.
    pub fn sequential() -> Self {
        Self::default().with_parallel(false)
    }

    /// Enable or disable parallel rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Include top-level content that is not under a section.
    pub fn with_preamble(mut self, include: bool) -> Self {
        self.include_preamble = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            include_preamble: false,
        }
    }
}

//! Outline building options and configuration.

/// Default marker opening an elided region.
pub const DEFAULT_COMMENT_START: &str = "#multilinecommentstart";

/// Default marker closing an elided region.
pub const DEFAULT_COMMENT_END: &str = "#multilinecommentend";

/// Options for building an outline.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Paragraph text opening an elided region
    pub comment_start: String,

    /// Paragraph text closing an elided region
    pub comment_end: String,

    /// Replace images in table cells with placeholders
    pub rewrite_images: bool,

    /// Rewrite `$$text$$` aliases into numbered cloze markup
    pub rewrite_cloze: bool,

    /// Whether to build table lines in parallel
    pub parallel: bool,
}

impl OutlineOptions {
    /// Create new outline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment region markers.
    pub fn with_comment_markers(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.comment_start = start.into();
        self.comment_end = end.into();
        self
    }

    /// Enable or disable image placeholder rewriting.
    pub fn with_images(mut self, rewrite: bool) -> Self {
        self.rewrite_images = rewrite;
        self
    }

    /// Enable or disable cloze alias rewriting.
    pub fn with_cloze(mut self, rewrite: bool) -> Self {
        self.rewrite_cloze = rewrite;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            comment_start: DEFAULT_COMMENT_START.to_string(),
            comment_end: DEFAULT_COMMENT_END.to_string(),
            rewrite_images: true,
            rewrite_cloze: true,
            parallel: true,
        }
    }
}

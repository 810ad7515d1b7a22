//! Matcher configuration

// =============================================================================
// PasteConfig
// =============================================================================

/// Table attributes carried over by `match_table_temporary`.
pub const TABLE_ATTRIBUTE: [&str; 3] = ["border", "cellspacing", "style"];

/// Largest `span` honored on a `<col>`, the same limit browsers apply.
pub const DEFAULT_MAX_COL_SPAN: u32 = 1000;

/// Configuration for the table matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteConfig {
    /// Attributes copied from `<table>` into the `table-temporary` format,
    /// in output order.
    pub table_attributes: Vec<String>,
    /// Upper bound for a `<col span>` value.
    pub max_col_span: u32,
}

impl PasteConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self {
            table_attributes: TABLE_ATTRIBUTE.iter().map(|a| (*a).to_owned()).collect(),
            max_col_span: DEFAULT_MAX_COL_SPAN,
        }
    }

    /// Replace the table attributes copied into `table-temporary`.
    pub fn with_table_attributes<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_attributes = attrs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the `<col span>` clamp. Zero is treated as 1.
    pub fn with_max_col_span(mut self, max: u32) -> Self {
        self.max_col_span = max.max(1);
        self
    }
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self::new()
    }
}

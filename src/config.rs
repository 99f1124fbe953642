/// Slug selected when none is configured.
pub const DEFAULT_SLUG: &str = "aggregation-overall";
/// Key of the primary series.
pub const DEFAULT_SCORE_KEY: &str = "score";
/// Key of the series paired with the scores.
pub const DEFAULT_EXTRA_KEY: &str = "extra";

/// Which entities and series an extraction reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Only entities tagged with this slug are extracted.
    pub slug: String,
    pub score_key: String,
    pub extra_key: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            slug: DEFAULT_SLUG.to_string(),
            score_key: DEFAULT_SCORE_KEY.to_string(),
            extra_key: DEFAULT_EXTRA_KEY.to_string(),
        }
    }
}

impl ExtractOptions {
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}

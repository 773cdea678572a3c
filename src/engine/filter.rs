//! Results filter.
//!
//! Three independent criteria combined by conjunction:
//!
//! - `search`: case-insensitive substring of the athlete name OR the discipline name
//! - `discipline`: exact discipline name, empty passes everything
//! - `gender`: exact athlete gender code, empty passes everything
//!
//! Every pass reads the full source collection, never a previous output.

use crate::domain::ResultEntry;

/// Gender codes offered by the results filter, with their labels.
pub const GENDER_OPTIONS: &[(&str, &str)] = &[("M", "Male"), ("F", "Female")];

/// Current results filter criteria.
///
/// # Examples
///
/// ```
/// use trackside::engine::ResultFilter;
///
/// let mut filter = ResultFilter::default();
/// filter.set_search("ANN");
/// assert_eq!(filter.search(), "ANN");
/// assert_eq!(filter.match_range("Ann Holm"), Some((0, 3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultFilter {
    search: String,
    /// `search` lowercased, what names are compared against.
    needle: String,
    discipline: String,
    gender: String,
}

impl ResultFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search text as the user typed it.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn discipline(&self) -> &str {
        &self.discipline
    }

    #[must_use]
    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.needle = text.to_lowercase();
    }

    pub fn set_discipline(&mut self, name: &str) {
        self.discipline = name.to_string();
    }

    pub fn set_gender(&mut self, code: &str) {
        self.gender = code.to_string();
    }

    /// Whether no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.discipline.is_empty() && self.gender.is_empty()
    }

    /// Evaluates all three criteria against one result.
    #[must_use]
    pub fn matches(&self, entry: &ResultEntry) -> bool {
        let matches_search = self.needle.is_empty()
            || entry.athlete.name.to_lowercase().contains(&self.needle)
            || entry.discipline.name.to_lowercase().contains(&self.needle);
        let matches_discipline = self.discipline.is_empty() || entry.discipline.name == self.discipline;
        let matches_gender = self.gender.is_empty() || entry.athlete.gender == self.gender;

        matches_search && matches_discipline && matches_gender
    }

    /// Returns the matching results in source order.
    #[must_use]
    pub fn apply(&self, source: &[ResultEntry]) -> Vec<ResultEntry> {
        let _span = tracing::debug_span!(
            "apply_result_filter",
            total = source.len(),
            search_len = self.search.len(),
            discipline = %self.discipline,
            gender = %self.gender
        )
        .entered();

        let filtered: Vec<ResultEntry> = source.iter().filter(|e| self.matches(e)).cloned().collect();

        tracing::debug!(filtered_count = filtered.len(), "result filter applied");
        filtered
    }

    /// Byte range of the first case-insensitive occurrence of the search text
    /// in `text`, for highlighting.
    ///
    /// Uses the same whole-string lowercasing as [`ResultFilter::matches`], so
    /// a highlight is only produced for text that would pass the search.
    #[must_use]
    pub fn match_range(&self, text: &str) -> Option<(usize, usize)> {
        if self.needle.is_empty() {
            return None;
        }
        let found = text.to_lowercase().find(&self.needle)?;
        let found_end = found + self.needle.len();

        // Context-dependent lowercasing (final sigma) never changes a
        // char's encoded width, so per-char widths line up with `found`.
        let mut lowered = 0;
        let mut start = None;
        for (at, c) in text.char_indices() {
            let width: usize = c.to_lowercase().map(char::len_utf8).sum();
            if start.is_none() && lowered + width > found {
                start = Some(at);
            }
            lowered += width;
            if lowered >= found_end {
                return start.map(|start| (start, at + c.len_utf8()));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_range_is_case_insensitive() {
        let mut filter = ResultFilter::new();
        filter.set_search("jump");
        assert_eq!(filter.match_range("Long Jump"), Some((5, 9)));
        assert_eq!(filter.match_range("Sprint"), None);
    }

    #[test]
    fn match_range_handles_multibyte_text() {
        let mut filter = ResultFilter::new();
        filter.set_search("øm");
        assert_eq!(filter.match_range("Rømer"), Some((1, 4)));
    }

    #[test]
    fn highlight_agrees_with_search_on_final_sigma() {
        let mut filter = ResultFilter::new();
        filter.set_search("Σ");
        assert_eq!(filter.match_range("ΟΔΥΣ"), None);
        assert_eq!(filter.match_range("ΣΑΡΑ"), Some((0, 2)));
    }

    #[test]
    fn search_keeps_typed_casing() {
        let mut filter = ResultFilter::new();
        filter.set_search("Holm");
        assert_eq!(filter.search(), "Holm");
        assert_eq!(filter.match_range("Ann HOLM"), Some((4, 8)));
    }

    #[test]
    fn empty_search_highlights_nothing() {
        assert_eq!(ResultFilter::new().match_range("Ann"), None);
        assert!(ResultFilter::new().is_empty());
    }
}

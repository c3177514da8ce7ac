//! Request and result types for the classification boundary.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::ClassifyError;
use crate::taxonomy::Category;

/// A validated, immutable classification request.
///
/// Construction is the only place empty input is rejected, so a request that
/// exists is always safe to send upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    text: String,
}

impl ClassificationRequest {
    /// Trim and validate raw comment text.
    pub fn new(raw: &str) -> Result<Self, ClassifyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ClassifyError::EmptyInput);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The structured outcome of one classification call.
///
/// Created fresh per call and never mutated. The harmful flag is not stored:
/// it is derived from the category list on every read, so it can never drift
/// from the categories it summarizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    summary: String,
    categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggested_response: Option<String>,
}

impl ClassificationResult {
    /// Assemble a result, normalizing absent or blank free-text fields.
    pub fn new(
        summary: Option<String>,
        categories: Vec<Category>,
        suggested_response: Option<String>,
    ) -> Self {
        let summary = summary
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::NO_SUMMARY.to_string());
        let suggested_response = suggested_response.filter(|s| !s.trim().is_empty());
        Self {
            summary,
            categories,
            suggested_response,
        }
    }

    /// The low-confidence fallback produced when a reply defeats the decode
    /// ladder: one `Unrecognized` category and a summary clipped from the raw
    /// reply text.
    pub fn degraded(raw_reply: &str) -> Self {
        let clipped: String = raw_reply
            .chars()
            .take(defaults::DEGRADED_SUMMARY_CHARS)
            .collect();
        Self::new(Some(clipped), vec![Category::Unrecognized], None)
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The model's proposed rewrite, when it supplied one.
    pub fn suggested_response(&self) -> Option<&str> {
        self.suggested_response.as_deref()
    }

    /// True iff the category list intersects the harmful subset.
    pub fn is_harmful(&self) -> bool {
        self.categories.iter().any(Category::is_harmful)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_blank_input() {
        assert!(matches!(
            ClassificationRequest::new("   \n\t  "),
            Err(ClassifyError::EmptyInput)
        ));
        assert!(matches!(
            ClassificationRequest::new(""),
            Err(ClassifyError::EmptyInput)
        ));
    }

    #[test]
    fn request_trims_surrounding_whitespace() {
        let req = ClassificationRequest::new("  hello there  ").unwrap();
        assert_eq!(req.text(), "hello there");
    }

    #[test]
    fn harmful_flag_is_the_intersection_test() {
        let empty = ClassificationResult::new(None, vec![], None);
        assert!(!empty.is_harmful());

        let benign = ClassificationResult::new(
            None,
            vec![Category::Supportive, Category::Question],
            None,
        );
        assert!(!benign.is_harmful());

        let mixed = ClassificationResult::new(
            None,
            vec![Category::Supportive, Category::Harassment],
            None,
        );
        assert!(mixed.is_harmful());

        let unknown = ClassificationResult::new(
            None,
            vec![Category::Other("Weird".into()), Category::Unrecognized],
            None,
        );
        assert!(!unknown.is_harmful());
    }

    #[test]
    fn blank_summary_falls_back_to_sentinel() {
        let result = ClassificationResult::new(Some("  ".into()), vec![], None);
        assert_eq!(result.summary(), defaults::NO_SUMMARY);
        let result = ClassificationResult::new(None, vec![], None);
        assert_eq!(result.summary(), defaults::NO_SUMMARY);
    }

    #[test]
    fn blank_suggested_response_is_absent() {
        let result = ClassificationResult::new(None, vec![], Some(String::new()));
        assert!(result.suggested_response().is_none());
    }

    #[test]
    fn degraded_result_clips_the_reply() {
        let long_reply = "x".repeat(500);
        let result = ClassificationResult::degraded(&long_reply);
        assert_eq!(result.summary().chars().count(), 200);
        assert_eq!(result.categories(), &[Category::Unrecognized]);
        assert!(result.suggested_response().is_none());
        assert!(!result.is_harmful());
    }

    #[test]
    fn degraded_result_is_char_boundary_safe() {
        let reply = "é".repeat(300);
        let result = ClassificationResult::degraded(&reply);
        assert_eq!(result.summary().chars().count(), 200);
    }
}

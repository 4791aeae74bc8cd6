use serde::{Deserialize, Serialize};

/// How an audit observation reads for the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCategory {
    Positive,
    Improvement,
    Critical,
}

impl FindingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Improvement => "Improvement",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single audit observation. Supplied wholesale by the caller and never
/// modified by the summary workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub text: String,
}

impl Finding {
    pub fn new(category: FindingCategory, text: impl Into<String>) -> Self {
        Self { category, text: text.into() }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self::new(FindingCategory::Positive, text)
    }

    pub fn improvement(text: impl Into<String>) -> Self {
        Self::new(FindingCategory::Improvement, text)
    }

    pub fn critical(text: impl Into<String>) -> Self {
        Self::new(FindingCategory::Critical, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(FindingCategory::Positive.to_string(), "Positive");
        assert_eq!(FindingCategory::Improvement.to_string(), "Improvement");
        assert_eq!(FindingCategory::Critical.to_string(), "Critical");
    }

    #[test]
    fn test_finding_deserialize() {
        let parsed: Finding =
            serde_json::from_str(r#"{"category": "Critical", "text": "CPL rose 20%"}"#).unwrap();
        assert_eq!(parsed, Finding::critical("CPL rose 20%"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let parsed = serde_json::from_str::<Finding>(r#"{"category": "Neutral", "text": "x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_finding_serializes_label_verbatim() {
        let json = serde_json::to_value(Finding::improvement("Refresh XHS creatives")).unwrap();
        assert_eq!(json["category"], "Improvement");
        assert_eq!(json["text"], "Refresh XHS creatives");
    }
}

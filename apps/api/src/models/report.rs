//! The scoring report the model is asked to produce.
//!
//! The prompt requests this shape; the service only enforces it in strict
//! schema mode. List-length bounds are advisory and surface as warnings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const MAX_SCORE: u8 = 100;
const STRENGTHS_BOUNDS: (usize, usize) = (2, 3);
const WEAKNESSES_BOUNDS: (usize, usize) = (5, 8);
const IMPROVEMENTS_BOUNDS: (usize, usize) = (6, 10);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub impact: u8,
    pub brevity: u8,
    pub style: u8,
    pub structure: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub section: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 0 to 100.
    pub ats_score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub executive_summary: String,
    /// The prompt asks for 2 to 3.
    pub strengths: Vec<String>,
    /// The prompt asks for 5 to 8.
    pub weaknesses: Vec<String>,
    /// The prompt asks for 6 to 10.
    pub improvements: Vec<Improvement>,
    pub keywords_detected: Vec<String>,
    pub missing_keywords: Vec<String>,
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("report does not match schema: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("{field} must be between 0 and 100, got {value}")]
    ScoreOutOfRange { field: &'static str, value: u8 },
}

impl AnalysisReport {
    /// Deserializes and range-checks a parsed model response.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let report = AnalysisReport::deserialize(value)?;
        report.check_score_ranges()?;
        Ok(report)
    }

    fn check_score_ranges(&self) -> Result<(), SchemaError> {
        let b = &self.score_breakdown;
        let scores = [
            ("ats_score", self.ats_score),
            ("score_breakdown.impact", b.impact),
            ("score_breakdown.brevity", b.brevity),
            ("score_breakdown.style", b.style),
            ("score_breakdown.structure", b.structure),
        ];
        match scores.into_iter().find(|(_, v)| *v > MAX_SCORE) {
            Some((field, value)) => Err(SchemaError::ScoreOutOfRange { field, value }),
            None => Ok(()),
        }
    }

    /// Human-readable notes for every list whose length falls outside the
    /// range the prompt asked for. Empty when the report is within bounds.
    pub fn bound_warnings(&self) -> Vec<String> {
        [
            ("strengths", self.strengths.len(), STRENGTHS_BOUNDS),
            ("weaknesses", self.weaknesses.len(), WEAKNESSES_BOUNDS),
            ("improvements", self.improvements.len(), IMPROVEMENTS_BOUNDS),
        ]
        .into_iter()
        .filter(|(_, len, (min, max))| len < min || len > max)
        .map(|(name, len, (min, max))| format!("{name}: expected {min}-{max} items, got {len}"))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_report() -> Value {
        json!({
            "ats_score": 58,
            "score_breakdown": {"impact": 45, "brevity": 70, "style": 55, "structure": 62},
            "executive_summary": "Generic bullets with almost no metrics.",
            "strengths": ["Clear section headings", "Relevant stack"],
            "weaknesses": [
                "No quantified outcomes",
                "Passive voice",
                "Buzzword-heavy summary",
                "Inconsistent date formats",
                "Skills list is unprioritized"
            ],
            "improvements": [
                {"section": "Experience", "suggestion": "Add a metric to each bullet"},
                {"section": "Experience", "suggestion": "Lead with action verbs"},
                {"section": "Summary", "suggestion": "Cut to two sentences"},
                {"section": "Skills", "suggestion": "Group by proficiency"},
                {"section": "Education", "suggestion": "Drop coursework"},
                {"section": "Formatting", "suggestion": "Use one date format"}
            ],
            "keywords_detected": ["Rust", "Kubernetes"],
            "missing_keywords": ["CI/CD", "Terraform"]
        })
    }

    #[test]
    fn test_valid_report_parses() {
        let report = AnalysisReport::from_value(&valid_report()).unwrap();
        assert_eq!(report.ats_score, 58);
        assert_eq!(report.score_breakdown.brevity, 70);
        assert_eq!(report.improvements.len(), 6);
        assert!(report.bound_warnings().is_empty());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let mut value = valid_report();
        value["model_notes"] = json!("extra");
        assert!(AnalysisReport::from_value(&value).is_ok());
    }

    #[test]
    fn test_missing_field_is_shape_error() {
        let mut value = valid_report();
        value.as_object_mut().unwrap().remove("missing_keywords");
        let err = AnalysisReport::from_value(&value).unwrap_err();
        assert!(matches!(err, SchemaError::Shape(_)));
        assert!(err.to_string().contains("missing_keywords"));
    }

    #[test]
    fn test_mistyped_score_is_shape_error() {
        let mut value = valid_report();
        value["ats_score"] = json!("seventy");
        assert!(matches!(
            AnalysisReport::from_value(&value),
            Err(SchemaError::Shape(_))
        ));
    }

    #[test]
    fn test_score_above_100_rejected() {
        let mut value = valid_report();
        value["score_breakdown"]["style"] = json!(140);
        let err = AnalysisReport::from_value(&value).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::ScoreOutOfRange { field: "score_breakdown.style", value: 140 }
        ));
    }

    #[test]
    fn test_negative_score_rejected() {
        let mut value = valid_report();
        value["ats_score"] = json!(-5);
        assert!(AnalysisReport::from_value(&value).is_err());
    }

    #[test]
    fn test_bound_warnings_reported() {
        let mut value = valid_report();
        value["strengths"] = json!(["a", "b", "c", "d"]);
        value["weaknesses"] = json!(["only one"]);
        let report = AnalysisReport::from_value(&value).unwrap();
        let warnings = report.bound_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("strengths"));
        assert!(warnings[1].contains("got 1"));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut value = valid_report();
        value["strengths"] = json!(["a", "b", "c"]);
        value["weaknesses"] = json!(["a", "b", "c", "d", "e", "f", "g", "h"]);
        let improvement = json!({"section": "Experience", "suggestion": "Add metrics"});
        value["improvements"] = Value::Array(vec![improvement.clone(); 10]);
        let report = AnalysisReport::from_value(&value).unwrap();
        assert!(report.bound_warnings().is_empty());

        value["improvements"] = Value::Array(vec![improvement; 11]);
        let report = AnalysisReport::from_value(&value).unwrap();
        assert_eq!(
            report.bound_warnings(),
            vec!["improvements: expected 6-10 items, got 11"]
        );
    }
}

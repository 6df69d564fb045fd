use serde_json::{Map, Value};

use crate::dto::document::{UploadMetadata, ValidationResult};

const MISSING: &str = "missing";

/// Presence checks over the metadata, in fixed order: pipeline, then project.
pub fn presence_checks(metadata: &UploadMetadata) -> Vec<String> {
    [("pipeline", &metadata.pipeline), ("project", &metadata.project)]
        .into_iter()
        .map(|(name, value)| {
            if value.trim().is_empty() {
                format!("{name} {MISSING}")
            } else {
                format!("{name} provided")
            }
        })
        .collect()
}

pub fn all_passed(checks: &[String]) -> bool {
    checks.iter().all(|check| !check.contains(MISSING))
}

/// Run every check and echo `extracted_data` back unchanged.
pub fn validate(metadata: &UploadMetadata, extracted_data: Map<String, Value>) -> ValidationResult {
    let checks = presence_checks(metadata);

    ValidationResult {
        valid: all_passed(&checks),
        checks,
        validated_at: super::utc_timestamp(),
        extracted_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(pipeline: &str, project: &str) -> UploadMetadata {
        UploadMetadata {
            pipeline: pipeline.to_string(),
            project: project.to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_empty_pipeline_is_missing() {
        let result = validate(&metadata("", "x"), Map::new());
        assert_eq!(result.checks, vec!["pipeline missing", "project provided"]);
        assert!(!result.valid);
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let result = validate(&metadata("  ", " \t\n"), Map::new());
        assert_eq!(result.checks, vec!["pipeline missing", "project missing"]);
        assert!(!result.valid);
    }

    #[test]
    fn test_both_present_is_valid() {
        let result = validate(&metadata("p", "q"), Map::new());
        assert_eq!(result.checks, vec!["pipeline provided", "project provided"]);
        assert!(result.valid);
    }

    #[test]
    fn test_padded_values_are_provided() {
        let checks = presence_checks(&metadata("  invoices ", "\tq3"));
        assert!(all_passed(&checks));
    }

    #[test]
    fn test_extracted_data_is_echoed() {
        let Value::Object(data) = json!({"z": 1, "a": [true, null], "nested": {"k": "v"}}) else {
            unreachable!()
        };
        let result = validate(&metadata("p", "q"), data.clone());
        assert_eq!(result.extracted_data, data);
        let keys: Vec<&str> = result.extracted_data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "nested"]);
    }

    #[test]
    fn test_all_passed_on_no_checks() {
        assert!(all_passed(&[]));
    }
}

//! Autocomplete normalization
//!
//! Backend versions answer either with a flat list of `{code, term}` records
//! or with records grouped by code system. Both collapse into `Suggestion`s.

use super::{ShapeError, json_kind, value_text};
use serde_json::Value;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodeSystem {
    Namaste,
    Icd11,
}

impl CodeSystem {
    /// Key of the group in a grouped response.
    pub fn key(&self) -> &'static str {
        match self {
            CodeSystem::Namaste => "namaste",
            CodeSystem::Icd11 => "icd11",
        }
    }
}

impl Display for CodeSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeSystem::Namaste => write!(f, "NAMASTE"),
            CodeSystem::Icd11 => write!(f, "ICD-11"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Set when the response was grouped by code system.
    pub system: Option<CodeSystem>,
    pub code: String,
    pub term: String,
}

impl Suggestion {
    fn from_record(record: &Value, system: Option<CodeSystem>) -> Self {
        Self {
            system,
            code: value_text(record.get("code")),
            term: value_text(record.get("term")),
        }
    }
}

impl Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.system {
            Some(system) => write!(f, "[{}] {}: {}", system, self.code, self.term),
            None => write!(f, "{}: {}", self.code, self.term),
        }
    }
}

/// Normalizes an autocomplete payload.
///
/// Groups that are missing or not lists contribute nothing. Records missing
/// `code` or `term` get empty strings.
pub fn normalize_autocomplete(payload: &Value) -> Result<Vec<Suggestion>, ShapeError> {
    match payload {
        Value::Array(records) => Ok(records
            .iter()
            .map(|record| Suggestion::from_record(record, None))
            .collect()),
        Value::Object(groups) => Ok([CodeSystem::Namaste, CodeSystem::Icd11]
            .into_iter()
            .flat_map(|system| {
                groups
                    .get(system.key())
                    .and_then(Value::as_array)
                    .into_iter()
                    .flatten()
                    .map(move |record| Suggestion::from_record(record, Some(system)))
            })
            .collect()),
        other => Err(ShapeError::Autocomplete(json_kind(other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_list() {
        let payload = json!([
            { "code": "NAM001", "term": "Jvara" },
            { "code": "MG26", "term": "Fever of other or unknown origin" }
        ]);
        let suggestions = normalize_autocomplete(&payload).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].system, None);
        assert_eq!(suggestions[1].code, "MG26");
        assert_eq!(suggestions[0].to_string(), "NAM001: Jvara");
    }

    #[test]
    fn test_grouped_object_keeps_namaste_first() {
        let payload = json!({
            "icd11": [{ "code": "MG26", "term": "Fever" }],
            "namaste": [{ "code": "NAM001", "term": "Jvara" }]
        });
        let suggestions = normalize_autocomplete(&payload).unwrap();
        assert_eq!(
            suggestions,
            vec![
                Suggestion {
                    system: Some(CodeSystem::Namaste),
                    code: "NAM001".to_string(),
                    term: "Jvara".to_string(),
                },
                Suggestion {
                    system: Some(CodeSystem::Icd11),
                    code: "MG26".to_string(),
                    term: "Fever".to_string(),
                },
            ]
        );
        assert_eq!(suggestions[1].to_string(), "[ICD-11] MG26: Fever");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let payload = json!([{ "code": "NAM002" }, { "term": null }, "stray"]);
        let suggestions = normalize_autocomplete(&payload).unwrap();
        assert_eq!(suggestions[0].term, "");
        assert_eq!(suggestions[1].code, "");
        assert_eq!(suggestions[1].term, "");
        assert_eq!(suggestions[2].code, "");
    }

    #[test]
    fn test_numeric_code_is_shown_as_text() {
        let payload = json!([{ "code": 101, "term": "Kasa" }]);
        assert_eq!(normalize_autocomplete(&payload).unwrap()[0].code, "101");
    }

    #[test]
    fn test_empty_shapes_yield_no_suggestions() {
        assert!(normalize_autocomplete(&json!([])).unwrap().is_empty());
        assert!(normalize_autocomplete(&json!({})).unwrap().is_empty());
        assert!(
            normalize_autocomplete(&json!({ "namaste": [], "icd11": null }))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_scalar_payloads_are_format_errors() {
        for payload in [json!("oops"), json!(3), json!(true), json!(null)] {
            let err = normalize_autocomplete(&payload).unwrap_err();
            assert!(err.to_string().starts_with("Unexpected autocomplete response format"));
        }
    }
}

//! Dashboard actions
//!
//! Each action is one request/response round trip against the terminology
//! API. Failures never escape as `Err`: they become an `ActionOutcome::Error`
//! the caller displays.

use crate::api::TerminologyApi;
use crate::api::error::ApiError;
use crate::api::types::{MappingRequest, RawResponse};
use crate::events::Event;
use crate::render::{ActionOutcome, MappingView, infer_table, normalize_autocomplete};
use crate::upload;
use std::path::Path;

pub const NO_MATCHES_MSG: &str = "No matches found.";
pub const NO_AUDIT_RECORDS_MSG: &str = "No audit records.";

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Action {
    #[strum(to_string = "Ingest NAMASTE CSV")]
    Ingest,
    #[strum(to_string = "Sync ICD-11 Codes")]
    Sync,
    #[strum(to_string = "Autocomplete")]
    Autocomplete,
    #[strum(to_string = "Semantic Mapping")]
    Mapping,
    #[strum(to_string = "Audit Logs")]
    Audit,
}

impl Action {
    /// Actions in the order the dashboard lists them.
    pub const ALL: [Action; 5] = [
        Action::Ingest,
        Action::Sync,
        Action::Autocomplete,
        Action::Mapping,
        Action::Audit,
    ];

    /// Prompt of the action's input box, if it takes input.
    pub fn input_label(&self) -> Option<&'static str> {
        match self {
            Action::Ingest => Some("Path to NAMASTE CSV (code,term)"),
            Action::Autocomplete => Some("Search for a condition (in NAMASTE or ICD-11)"),
            Action::Mapping => Some("Enter a NAMASTE code"),
            Action::Sync | Action::Audit => None,
        }
    }

    /// Label of the key that triggers the action.
    pub fn button_label(&self) -> &'static str {
        match self {
            Action::Ingest => "Upload & ingest",
            Action::Sync => "Sync ICD-11 from WHO API",
            Action::Autocomplete => "Search",
            Action::Mapping => "Map Codes",
            Action::Audit => "Show Audit Logs",
        }
    }

    pub fn next(&self) -> Action {
        let idx = self.index();
        Action::ALL[(idx + 1) % Action::ALL.len()]
    }

    pub fn previous(&self) -> Action {
        let idx = self.index();
        Action::ALL[(idx + Action::ALL.len() - 1) % Action::ALL.len()]
    }

    pub fn index(&self) -> usize {
        Action::ALL
            .iter()
            .position(|a| a == self)
            .unwrap_or_default()
    }
}

/// The result of running an action, plus the activity it generated.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub action: Action,
    pub outcome: ActionOutcome,
    pub events: Vec<Event>,
}

impl ActionReport {
    fn new(action: Action, request_msg: String) -> Self {
        Self {
            action,
            outcome: ActionOutcome::NoResults(String::new()),
            events: vec![Event::request(action, request_msg)],
        }
    }

    fn finish(mut self, outcome: ActionOutcome) -> Self {
        let summary = outcome.summary();
        let event = match &outcome {
            ActionOutcome::Error(_) => Event::error(self.action, summary),
            ActionOutcome::NoResults(_) => Event::warning(self.action, summary),
            _ => Event::success(self.action, summary),
        };
        self.events.push(event);
        self.outcome = outcome;
        self
    }

    fn finish_raw(mut self, result: Result<RawResponse, ApiError>) -> Self {
        match result {
            Ok(raw) => {
                if !raw.is_success() {
                    self.events.push(Event::warning(
                        self.action,
                        format!("Server answered with status {}", raw.status),
                    ));
                }
                self.finish(ActionOutcome::json(&raw.body))
            }
            Err(e) => self.finish(ActionOutcome::Error(e.to_string())),
        }
    }
}

/// Runs `action` with the raw contents of its input box.
pub async fn run_action(api: &dyn TerminologyApi, action: Action, input: &str) -> ActionReport {
    match action {
        Action::Ingest => ingest(api, Path::new(input.trim())).await,
        Action::Sync => sync(api).await,
        Action::Autocomplete => autocomplete(api, input).await,
        Action::Mapping => map_code(api, input).await,
        Action::Audit => audit(api).await,
    }
}

/// Stages the CSV and asks the service to ingest it. The response body is
/// shown whatever the status.
pub async fn ingest(api: &dyn TerminologyApi, csv_path: &Path) -> ActionReport {
    let report = ActionReport::new(
        Action::Ingest,
        format!("Uploading {}", csv_path.display()),
    );
    let staged = match upload::stage_csv(csv_path) {
        Ok(path) => path,
        Err(e) => return report.finish(ActionOutcome::Error(e.to_string())),
    };
    let staged = staged.to_string_lossy();
    log::debug!("Ingesting staged file {}", staged);
    report.finish_raw(api.ingest_namaste(&staged).await)
}

pub async fn sync(api: &dyn TerminologyApi) -> ActionReport {
    let report = ActionReport::new(Action::Sync, "Triggering ICD-11 sync".to_string());
    report.finish_raw(api.sync_icd11().await)
}

pub async fn autocomplete(api: &dyn TerminologyApi, query: &str) -> ActionReport {
    let report = ActionReport::new(Action::Autocomplete, format!("Searching '{}'", query));
    let outcome = match api.autocomplete(query).await {
        Ok(payload) => match normalize_autocomplete(&payload) {
            Ok(suggestions) if suggestions.is_empty() => {
                ActionOutcome::NoResults(NO_MATCHES_MSG.to_string())
            }
            Ok(suggestions) => ActionOutcome::Suggestions(suggestions),
            Err(e) => ActionOutcome::Error(e.to_string()),
        },
        Err(e) => ActionOutcome::Error(e.to_string()),
    };
    report.finish(outcome)
}

pub async fn map_code(api: &dyn TerminologyApi, code_input: &str) -> ActionReport {
    let request = MappingRequest::from_input(code_input);
    let report = ActionReport::new(
        Action::Mapping,
        format!(
            "Mapping {}",
            request.namaste_code.as_deref().unwrap_or("(no code)")
        ),
    );
    let outcome = match api.map_code(&request).await {
        Ok(result) => ActionOutcome::Mapping(MappingView::from(result)),
        Err(e) => ActionOutcome::Error(e.to_string()),
    };
    report.finish(outcome)
}

pub async fn audit(api: &dyn TerminologyApi) -> ActionReport {
    let report = ActionReport::new(Action::Audit, "Fetching audit log".to_string());
    let outcome = match api.audit().await {
        Ok(payload) => match infer_table(&payload) {
            Ok(table) if table.is_empty() => {
                ActionOutcome::NoResults(NO_AUDIT_RECORDS_MSG.to_string())
            }
            Ok(table) => ActionOutcome::Table(table),
            Err(e) => ActionOutcome::Error(e.to_string()),
        },
        Err(e) => ActionOutcome::Error(e.to_string()),
    };
    report.finish(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTerminologyApi;
    use crate::api::types::{MappingEntry, MappingResult};
    use crate::events::EventType;
    use crate::render::{CodeSystem, render_outcome_text};
    use serde_json::{Value, json};
    use std::fs;

    fn http_error(status: u16, message: &str) -> ApiError {
        ApiError::Http {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_action_cycle_wraps() {
        assert_eq!(Action::Audit.next(), Action::Ingest);
        assert_eq!(Action::Ingest.previous(), Action::Audit);
        assert_eq!(Action::Sync.next(), Action::Autocomplete);
        assert_eq!(Action::Mapping.to_string(), "Semantic Mapping");
    }

    #[tokio::test]
    /// Upload a CSV, ingest it, and show the raw response unmodified.
    async fn test_ingest_displays_raw_response() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("namaste.csv");
        fs::write(&csv, "code,term\nNAM001,Jvara\n").unwrap();

        let body_text = r#"{"ingested": 1, "errors": [], "file": "namaste.csv"}"#;
        let body: Value = serde_json::from_str(body_text).unwrap();
        let expected = serde_json::to_string_pretty(&body).unwrap();

        let mut api = MockTerminologyApi::new();
        api.expect_ingest_namaste()
            .withf(|path| {
                path.ends_with(".csv")
                    && fs::read_to_string(path).unwrap() == "code,term\nNAM001,Jvara\n"
            })
            .times(1)
            .returning(move |path| {
                let _ = fs::remove_file(path);
                Ok(RawResponse {
                    status: 200,
                    body: body.clone(),
                })
            });

        let report = ingest(&api, &csv).await;
        assert_eq!(report.outcome, ActionOutcome::Json(expected.clone()));
        assert_eq!(render_outcome_text(&report.outcome), expected);
        assert!(expected.find("ingested").unwrap() < expected.find("errors").unwrap());
        assert_eq!(report.events.last().unwrap().event_type, EventType::Success);
    }

    #[tokio::test]
    async fn test_ingest_rejects_non_csv_without_request() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("codes.txt");
        fs::write(&txt, "code,term\n").unwrap();

        let mut api = MockTerminologyApi::new();
        api.expect_ingest_namaste().never();

        let report = ingest(&api, &txt).await;
        assert!(report.outcome.is_error());
    }

    #[tokio::test]
    async fn test_sync_shows_body_even_on_failure_status() {
        let mut api = MockTerminologyApi::new();
        api.expect_sync_icd11().times(1).returning(|| {
            Ok(RawResponse {
                status: 500,
                body: json!({ "detail": "WHO API unavailable" }),
            })
        });

        let report = sync(&api).await;
        let ActionOutcome::Json(text) = &report.outcome else {
            panic!("expected raw json, got {:?}", report.outcome);
        };
        assert!(text.contains("WHO API unavailable"));
        assert!(
            report
                .events
                .iter()
                .any(|e| e.event_type == EventType::Warning && e.msg.contains("500"))
        );
    }

    #[tokio::test]
    async fn test_autocomplete_http_error_has_status_and_body() {
        let mut api = MockTerminologyApi::new();
        api.expect_autocomplete()
            .withf(|query| query == "jvara")
            .returning(|_| Err(http_error(503, "Service Unavailable")));

        let report = autocomplete(&api, "jvara").await;
        assert_eq!(
            report.outcome,
            ActionOutcome::Error("Error 503: Service Unavailable".to_string())
        );
        assert_eq!(report.events.last().unwrap().event_type, EventType::Error);
    }

    #[tokio::test]
    async fn test_autocomplete_empty_results_show_indicator() {
        for payload in [json!([]), json!({ "namaste": [], "icd11": [] })] {
            let mut api = MockTerminologyApi::new();
            api.expect_autocomplete()
                .returning(move |_| Ok(payload.clone()));

            let report = autocomplete(&api, "zzz").await;
            assert_eq!(
                report.outcome,
                ActionOutcome::NoResults(NO_MATCHES_MSG.to_string())
            );
        }
    }

    #[tokio::test]
    async fn test_autocomplete_malformed_payload_is_format_error() {
        let mut api = MockTerminologyApi::new();
        api.expect_autocomplete()
            .returning(|_| Ok(json!("internal error")));

        let report = autocomplete(&api, "fever").await;
        let ActionOutcome::Error(msg) = &report.outcome else {
            panic!("expected format error");
        };
        assert!(msg.contains("format"));
    }

    #[tokio::test]
    async fn test_autocomplete_grouped_results() {
        let mut api = MockTerminologyApi::new();
        api.expect_autocomplete().returning(|_| {
            Ok(json!({
                "namaste": [{ "code": "NAM001", "term": "Jvara" }],
                "icd11": [{ "code": "MG26" }]
            }))
        });

        let report = autocomplete(&api, "fever").await;
        let ActionOutcome::Suggestions(items) = &report.outcome else {
            panic!("expected suggestions");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].system, Some(CodeSystem::Icd11));
        assert_eq!(items[1].term, "");
    }

    #[tokio::test]
    async fn test_map_blank_code_sends_null() {
        let mut api = MockTerminologyApi::new();
        api.expect_map_code()
            .withf(|request| request.namaste_code.is_none())
            .times(1)
            .returning(|_| {
                Ok(MappingResult {
                    query: String::new(),
                    mappings: vec![],
                    evidence: vec![],
                })
            });

        let report = map_code(&api, "   ").await;
        assert!(!report.outcome.is_error());
    }

    #[tokio::test]
    async fn test_map_renders_table_and_evidence_labels() {
        let mut api = MockTerminologyApi::new();
        api.expect_map_code()
            .withf(|request| request.namaste_code.as_deref() == Some("NAM001"))
            .returning(|_| {
                Ok(MappingResult {
                    query: "Jvara".to_string(),
                    mappings: vec![MappingEntry {
                        icd_code: "MG26".to_string(),
                        explanation: "fever".to_string(),
                    }],
                    evidence: vec!["http://x/y#ICD11:AB12".to_string()],
                })
            });

        let report = map_code(&api, " NAM001 ").await;
        let ActionOutcome::Mapping(view) = &report.outcome else {
            panic!("expected mapping view");
        };
        assert_eq!(view.source_text, "Jvara");
        assert_eq!(view.table.rows, vec![vec!["MG26", "fever"]]);
        assert_eq!(view.evidence[0].label, "ICD11:AB12");
    }

    #[tokio::test]
    async fn test_map_http_error_has_status_and_body() {
        let mut api = MockTerminologyApi::new();
        api.expect_map_code()
            .returning(|_| Err(http_error(404, "{\"detail\":\"Code not found\"}")));

        let report = map_code(&api, "NOPE").await;
        assert_eq!(
            render_outcome_text(&report.outcome),
            "Error 404: {\"detail\":\"Code not found\"}"
        );
    }

    #[tokio::test]
    async fn test_audit_renders_inferred_table() {
        let mut api = MockTerminologyApi::new();
        api.expect_audit().returning(|| {
            Ok(json!([
                { "namaste_code": "NAM001", "icd_code": "MG26" },
                { "namaste_code": "NAM002", "icd_code": "MG27" }
            ]))
        });

        let report = audit(&api).await;
        let ActionOutcome::Table(table) = &report.outcome else {
            panic!("expected table");
        };
        assert_eq!(table.headers, vec!["namaste_code", "icd_code"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[tokio::test]
    async fn test_audit_empty_list() {
        let mut api = MockTerminologyApi::new();
        api.expect_audit().returning(|| Ok(json!([])));

        let report = audit(&api).await;
        assert_eq!(
            report.outcome,
            ActionOutcome::NoResults(NO_AUDIT_RECORDS_MSG.to_string())
        );
    }

    #[tokio::test]
    async fn test_run_action_dispatches_by_action() {
        let mut api = MockTerminologyApi::new();
        api.expect_audit().times(1).returning(|| Ok(json!([{ "a": 1 }])));
        api.expect_sync_icd11().never();

        let report = run_action(&api, Action::Audit, "ignored").await;
        assert_eq!(report.action, Action::Audit);
        assert_eq!(report.events.first().unwrap().event_type, EventType::Request);
    }
}

//! Headless mode execution

use crate::actions::{Action, run_action};
use crate::api::TerminologyApi;
use crate::render::{ActionOutcome, render_outcome_text};
use crate::{print_cmd_error, print_cmd_info, print_cmd_warn};
use std::error::Error;

/// Runs a single action and prints its rendered result.
///
/// # Arguments
/// * `api` - The terminology API to call
/// * `action` - Which dashboard action to run
/// * `input` - The action's input (CSV path, query or code); empty when unused
///
/// # Returns
/// * `Ok(())` - The action produced a displayable result
/// * `Err` - The action failed; the message has already been printed
pub async fn run_headless_mode(
    api: &dyn TerminologyApi,
    action: Action,
    input: &str,
) -> Result<(), Box<dyn Error>> {
    print_cmd_info!(
        &action.to_string(),
        "{}",
        api.environment().api_url()
    );

    let report = run_action(api, action, input).await;
    for event in report.events.iter().filter(|e| e.should_display()) {
        println!("{}", event);
    }

    match &report.outcome {
        ActionOutcome::Error(msg) => {
            print_cmd_error!(&format!("{} failed", action), msg.as_str());
            Err(Box::from(msg.clone()))
        }
        ActionOutcome::NoResults(msg) => {
            print_cmd_warn!(msg, "");
            Ok(())
        }
        outcome => {
            println!("{}", render_outcome_text(outcome));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTerminologyApi;
    use crate::api::error::ApiError;
    use crate::environment::Environment;
    use serde_json::json;

    fn mock_api() -> MockTerminologyApi {
        let mut api = MockTerminologyApi::new();
        api.expect_environment()
            .return_const(Environment::Production);
        api
    }

    #[tokio::test]
    async fn test_error_outcome_returns_err() {
        let mut api = mock_api();
        api.expect_audit().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let result = run_headless_mode(&api, Action::Audit, "").await;
        assert_eq!(result.unwrap_err().to_string(), "Error 500: boom");
    }

    #[tokio::test]
    async fn test_no_results_is_not_an_error() {
        let mut api = mock_api();
        api.expect_autocomplete().returning(|_| Ok(json!([])));

        assert!(
            run_headless_mode(&api, Action::Autocomplete, "zzz")
                .await
                .is_ok()
        );
    }
}

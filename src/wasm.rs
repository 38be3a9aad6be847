//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::model::{MenuIndex, parse_nodes};
use crate::report::MenuReport;
use crate::validate::{ValidatorOptions, validate_forest};

/// Classify a JSON array of menu nodes.
/// Returns either `{status: "report", ...}` or `{status: "error", message}`.
#[wasm_bindgen]
pub fn audit_menus(json: &str, max_depth: usize) -> JsValue {
    let result = audit_menus_inner(json, max_depth);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn audit_menus_inner(json: &str, max_depth: usize) -> AuditResult {
    let nodes = match parse_nodes(json) {
        Ok(n) => n,
        Err(e) => {
            return AuditResult::Error {
                message: e.to_string(),
            };
        }
    };

    let index = MenuIndex::build(&nodes);
    let audit = validate_forest(&index, ValidatorOptions { max_depth });

    AuditResult::Report {
        report: audit.to_report(),
        issues: audit
            .invalid
            .iter()
            .flat_map(|t| t.anomalies.iter().map(|a| a.to_string()))
            .chain(audit.structural.iter().map(|s| s.to_string()))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum AuditResult {
    Report {
        #[serde(flatten)]
        report: MenuReport,
        issues: Vec<String>,
    },
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_json_is_an_error_result() {
        let result = audit_menus_inner("not json", 4);
        assert!(matches!(result, AuditResult::Error { .. }));
    }

    #[test]
    fn report_carries_issue_messages() {
        let json = r#"[{"id": 1, "child_ids": [2]}, {"id": 2, "parent_id": 1, "child_ids": [1]}]"#;
        let AuditResult::Report { report, issues } = audit_menus_inner(json, 4) else {
            panic!("expected a report");
        };
        assert!(report.valid_menus.is_empty());
        assert_eq!(report.invalid_menus[0].children, vec![1, 2]);
        assert!(issues[0].starts_with("[M002]"), "{:?}", issues);
    }
}

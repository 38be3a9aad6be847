//! Output record and its JSON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::model::MenuId;
use crate::validate::TreeReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSummary {
    pub root_id: MenuId,
    /// Ascending.
    pub children: Vec<MenuId>,
}

impl From<&TreeReport> for MenuSummary {
    fn from(report: &TreeReport) -> Self {
        MenuSummary {
            root_id: report.root_id,
            children: report.children.iter().copied().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuReport {
    pub valid_menus: Vec<MenuSummary>,
    pub invalid_menus: Vec<MenuSummary>,
}

/// Pretty JSON (2-space indent) for the console.
pub fn to_json_pretty(report: &MenuReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Persist the report as compact JSON at `path`, replacing any existing file.
pub fn write_report(report: &MenuReport, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string(report)?;
    std::fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

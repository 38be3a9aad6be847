//! Validation phase: classify every tree in the menu forest.
//!
//! Roots are discovered in repository order and each is walked once. Trees
//! with a structural anomaly or deeper than the limit are invalid.

pub mod structural;
pub mod traversal;

pub use structural::{StructuralIssue, validate_structural};
pub use traversal::{Anomaly, AnomalyKind, MAX_DEPTH, TreeReport, validate_tree};

use tracing::{debug, warn};

use crate::model::MenuIndex;
use crate::report::{MenuReport, MenuSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Deepest allowed level, inclusive. The root is depth 0.
    pub max_depth: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

/// Classified trees plus forest-level issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audit {
    pub valid: Vec<TreeReport>,
    pub invalid: Vec<TreeReport>,
    pub structural: Vec<StructuralIssue>,
}

impl Audit {
    /// Project onto the persisted `valid_menus` / `invalid_menus` shape.
    pub fn to_report(&self) -> MenuReport {
        MenuReport {
            valid_menus: self.valid.iter().map(MenuSummary::from).collect(),
            invalid_menus: self.invalid.iter().map(MenuSummary::from).collect(),
        }
    }
}

/// Validate every tree in the forest.
pub fn validate_forest(index: &MenuIndex<'_>, options: ValidatorOptions) -> Audit {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for root in index.roots() {
        let mut report = validate_tree(index, root);
        debug!(
            root_id = report.root_id,
            depth = report.depth,
            children = report.children.len(),
            "walked menu tree"
        );

        if report.depth > options.max_depth {
            report.anomalies.push(Anomaly {
                kind: AnomalyKind::DepthExceeded,
                node_id: report.root_id,
                child_id: None,
            });
        }

        if report.is_valid(options.max_depth) {
            valid.push(report);
        } else {
            for anomaly in &report.anomalies {
                warn!(root_id = report.root_id, "{}", anomaly);
            }
            invalid.push(report);
        }
    }

    let structural = validate_structural(index);
    for issue in &structural {
        warn!("{}", issue);
    }

    Audit {
        valid,
        invalid,
        structural,
    }
}

//! Forest-level structural checks (S001–S002).
//!
//! These describe the node collection as a whole and never change how an
//! individual tree is classified.

use std::collections::HashSet;

use petgraph::visit::Bfs;
use serde::Serialize;

use crate::model::{MenuId, MenuIndex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralIssue {
    pub code: &'static str,
    pub message: String,
    pub node_id: MenuId,
}

impl std::fmt::Display for StructuralIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} (node {})", self.code, self.message, self.node_id)
    }
}

/// Run all forest-level checks. Returns every issue found.
pub fn validate_structural(index: &MenuIndex<'_>) -> Vec<StructuralIssue> {
    let mut issues = Vec::new();

    s001_unique_ids(index, &mut issues);
    s002_reachable_from_a_root(index, &mut issues);

    issues
}

fn s001_unique_ids(index: &MenuIndex<'_>, issues: &mut Vec<StructuralIssue>) {
    let mut reported = HashSet::new();
    for &id in index.duplicates() {
        if reported.insert(id) {
            issues.push(StructuralIssue {
                code: "S001",
                message: format!(
                    "Id {} appears on more than one record; the first is used",
                    id
                ),
                node_id: id,
            });
        }
    }
}

fn s002_reachable_from_a_root(index: &MenuIndex<'_>, issues: &mut Vec<StructuralIssue>) {
    let mut reachable = HashSet::new();
    for root in index.roots() {
        let Some(&start) = index.node_indices.get(&root.id) else {
            continue;
        };
        let mut bfs = Bfs::new(&index.graph, start);
        while let Some(nx) = bfs.next(&index.graph) {
            reachable.insert(nx);
        }
    }

    let mut reported = HashSet::new();
    for node in index.nodes() {
        let Some(&idx) = index.node_indices.get(&node.id) else {
            continue;
        };
        if !reachable.contains(&idx) && reported.insert(node.id) {
            issues.push(StructuralIssue {
                code: "S002",
                message: format!("Node {} is not reachable from any root", node.id),
                node_id: node.id,
            });
        }
    }
}

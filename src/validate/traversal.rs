//! Per-root tree traversal: reachable ids, maximum depth and structural anomalies.
//!
//! Every id is inserted into the root's `children` set before the walk descends
//! through it, so no id is expanded twice within one tree and the walk ends on
//! any finite input, cyclic or not. Anomalies never stop the walk.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{MenuId, MenuIndex, MenuNode};

/// Deepest level a valid tree may reach. The root is depth 0.
pub const MAX_DEPTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Claimed child id has no node.
    UnknownChild,
    /// Child is the root or was already reached in this tree.
    Revisited,
    /// Child exists but declares no parent (it is a root itself).
    MissingParent,
    /// Child declares a different parent.
    ParentMismatch,
    /// Tree is deeper than the allowed maximum.
    DepthExceeded,
}

impl AnomalyKind {
    pub fn code(&self) -> &'static str {
        match self {
            AnomalyKind::UnknownChild => "M001",
            AnomalyKind::Revisited => "M002",
            AnomalyKind::MissingParent => "M003",
            AnomalyKind::ParentMismatch => "M004",
            AnomalyKind::DepthExceeded => "M005",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    /// Node whose claim (or tree, for depth) triggered the anomaly.
    pub node_id: MenuId,
    pub child_id: Option<MenuId>,
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.kind.code();
        match (self.kind, self.child_id) {
            (AnomalyKind::UnknownChild, Some(c)) => {
                write!(f, "[{}] node {} claims unknown child {}", code, self.node_id, c)
            }
            (AnomalyKind::Revisited, Some(c)) => write!(
                f,
                "[{}] node {} claims child {} which was already reached (cycle)",
                code, self.node_id, c
            ),
            (AnomalyKind::MissingParent, Some(c)) => write!(
                f,
                "[{}] node {} claims child {} which has no parent_id",
                code, self.node_id, c
            ),
            (AnomalyKind::ParentMismatch, Some(c)) => write!(
                f,
                "[{}] node {} claims child {} whose parent_id points elsewhere",
                code, self.node_id, c
            ),
            _ => write!(f, "[{}] {:?} at node {}", code, self.kind, self.node_id),
        }
    }
}

/// Result of walking one root's tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    pub root_id: MenuId,
    /// Every id encountered from this root, rejected ids included. Ascending.
    pub children: BTreeSet<MenuId>,
    /// Structural validity. Cleared on the first anomaly and never set again.
    pub valid: bool,
    /// Longest edge distance from the root to a descended node.
    pub depth: usize,
    pub anomalies: Vec<Anomaly>,
}

impl TreeReport {
    /// Classification rule: structurally valid and no deeper than `max_depth`.
    pub fn is_valid(&self, max_depth: usize) -> bool {
        self.valid && self.depth <= max_depth
    }
}

/// Walk the tree rooted at `root`.
pub fn validate_tree(index: &MenuIndex<'_>, root: &MenuNode) -> TreeReport {
    let mut walk = Walk {
        root_id: root.id,
        children: BTreeSet::new(),
        valid: true,
        anomalies: Vec::new(),
    };
    let depth = walk.run(index, root);

    TreeReport {
        root_id: walk.root_id,
        children: walk.children,
        valid: walk.valid,
        depth,
        anomalies: walk.anomalies,
    }
}

struct Walk {
    root_id: MenuId,
    children: BTreeSet<MenuId>,
    valid: bool,
    anomalies: Vec<Anomaly>,
}

struct Frame<'a> {
    node: &'a MenuNode,
    depth: usize,
    next_child: usize,
}

impl Walk {
    /// Depth-first over `child_ids` in declaration order, with an explicit
    /// frame stack so very deep chains cannot overflow the call stack.
    fn run<'a>(&mut self, index: &MenuIndex<'a>, root: &'a MenuNode) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![Frame {
            node: root,
            depth: 0,
            next_child: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&child_id) = frame.node.child_ids.get(frame.next_child) else {
                stack.pop();
                continue;
            };
            frame.next_child += 1;
            let parent = frame.node;
            let depth = frame.depth;

            let Some(child) = index.get(child_id) else {
                self.reject(AnomalyKind::UnknownChild, parent.id, child_id);
                continue;
            };

            if child_id == self.root_id || self.children.contains(&child_id) {
                self.reject(AnomalyKind::Revisited, parent.id, child_id);
                continue;
            }

            // Record before descending.
            self.children.insert(child_id);

            match child.parent_id {
                None => self.flag(AnomalyKind::MissingParent, parent.id, child_id),
                Some(p) if p != parent.id => {
                    self.flag(AnomalyKind::ParentMismatch, parent.id, child_id)
                }
                Some(_) => {}
            }

            // Mis-linked children are still explored for depth and ids.
            max_depth = max_depth.max(depth + 1);
            stack.push(Frame {
                node: child,
                depth: depth + 1,
                next_child: 0,
            });
        }

        max_depth
    }

    /// Flag and record an id that will not be descended into.
    fn reject(&mut self, kind: AnomalyKind, node_id: MenuId, child_id: MenuId) {
        self.children.insert(child_id);
        self.flag(kind, node_id, child_id);
    }

    fn flag(&mut self, kind: AnomalyKind, node_id: MenuId, child_id: MenuId) {
        self.valid = false;
        self.anomalies.push(Anomaly {
            kind,
            node_id,
            child_id: Some(child_id),
        });
    }
}

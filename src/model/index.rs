//! Explicit id → node index over the flat node collection, plus a petgraph
//! view of the resolvable child claims.
//!
//! Lookups never assume ids are dense or match storage order: an id with no
//! entry is simply unknown.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{MenuId, MenuNode};

pub struct MenuIndex<'a> {
    nodes: &'a [MenuNode],
    positions: HashMap<MenuId, usize>,
    duplicates: Vec<MenuId>,
    pub graph: DiGraph<MenuId, ()>,
    pub node_indices: HashMap<MenuId, NodeIndex>,
}

impl<'a> MenuIndex<'a> {
    /// Index `nodes` by id. The first record carrying an id wins; later
    /// records with the same id are kept only in `duplicates()`.
    pub fn build(nodes: &'a [MenuNode]) -> Self {
        let mut positions = HashMap::with_capacity(nodes.len());
        let mut duplicates = Vec::new();
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::with_capacity(nodes.len());

        for (pos, node) in nodes.iter().enumerate() {
            if positions.contains_key(&node.id) {
                duplicates.push(node.id);
                continue;
            }
            positions.insert(node.id, pos);
            node_indices.insert(node.id, graph.add_node(node.id));
        }

        // Edges only for claims that resolve to a known node.
        for (&id, &pos) in &positions {
            let source = node_indices[&id];
            for child_id in &nodes[pos].child_ids {
                if let Some(&target) = node_indices.get(child_id) {
                    graph.add_edge(source, target, ());
                }
            }
        }

        MenuIndex {
            nodes,
            positions,
            duplicates,
            graph,
            node_indices,
        }
    }

    pub fn get(&self, id: MenuId) -> Option<&'a MenuNode> {
        self.positions.get(&id).map(|&pos| &self.nodes[pos])
    }

    pub fn contains(&self, id: MenuId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All records in repository order, duplicates included.
    pub fn nodes(&self) -> &'a [MenuNode] {
        self.nodes
    }

    /// Root nodes (no `parent_id`) in repository order. A root record whose id
    /// duplicates an earlier record is skipped.
    pub fn roots(&self) -> impl Iterator<Item = &'a MenuNode> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |&(pos, node)| node.is_root() && self.is_canonical(node.id, pos))
            .map(|(_, node)| node)
    }

    /// Whether the record at `pos` is the one `id` resolves to.
    fn is_canonical(&self, id: MenuId, pos: usize) -> bool {
        self.positions.get(&id) == Some(&pos)
    }

    /// Ids that appeared on more than one record, once per extra occurrence.
    pub fn duplicates(&self) -> &[MenuId] {
        &self.duplicates
    }
}

//! Integration tests for forest classification: roots, buckets, ordering and the output record.

use menu_audit::model::{self, MenuId, MenuIndex, MenuNode};
use menu_audit::validate::{self, AnomalyKind, ValidatorOptions};

fn node(id: MenuId, parent_id: Option<MenuId>, child_ids: &[MenuId]) -> MenuNode {
    MenuNode {
        id,
        data: None,
        parent_id,
        child_ids: child_ids.to_vec(),
    }
}

fn audit(nodes: &[MenuNode]) -> validate::Audit {
    let index = MenuIndex::build(nodes);
    validate::validate_forest(&index, ValidatorOptions::default())
}

fn roots(trees: &[validate::TreeReport]) -> Vec<MenuId> {
    trees.iter().map(|t| t.root_id).collect()
}

#[test]
fn fixture_forest_buckets() {
    let json = include_str!("fixtures/forest.json");
    let nodes = model::parse_nodes(json).expect("Should parse");
    let audit = audit(&nodes);

    assert_eq!(roots(&audit.valid), vec![1, 21]);
    assert_eq!(roots(&audit.invalid), vec![5, 8, 14, 18]);

    // Too deep, but structurally sound.
    let deep = &audit.invalid[1];
    assert!(deep.valid);
    assert_eq!(deep.depth, 5);
    assert!(deep.anomalies.iter().any(|a| a.kind == AnomalyKind::DepthExceeded));

    let unreachable: Vec<MenuId> = audit
        .structural
        .iter()
        .filter(|i| i.code == "S002")
        .map(|i| i.node_id)
        .collect();
    assert_eq!(unreachable, vec![16, 17]);
}

#[test]
fn fixture_forest_report_snapshot() {
    let json = include_str!("fixtures/forest.json");
    let nodes = model::parse_nodes(json).unwrap();
    let report = audit(&nodes).to_report();
    insta::assert_json_snapshot!("forest_report", report);
}

#[test]
fn two_level_tree_is_valid() {
    let audit = audit(&[
        node(1, None, &[2, 3]),
        node(2, Some(1), &[]),
        node(3, Some(1), &[4]),
        node(4, Some(3), &[]),
    ]);
    let report = audit.to_report();
    assert_eq!(report.valid_menus.len(), 1);
    assert_eq!(report.valid_menus[0].root_id, 1);
    assert_eq!(report.valid_menus[0].children, vec![2, 3, 4]);
    assert_eq!(audit.valid[0].depth, 2);
    assert!(report.invalid_menus.is_empty());
}

#[test]
fn cycle_back_to_root_is_invalid() {
    let report = audit(&[node(1, None, &[2]), node(2, Some(1), &[1])]).to_report();
    assert!(report.valid_menus.is_empty());
    assert_eq!(report.invalid_menus[0].root_id, 1);
    assert_eq!(report.invalid_menus[0].children, vec![1, 2]);
}

#[test]
fn every_node_cycles_back_to_root() {
    let n: MenuId = 50;
    let nodes: Vec<MenuNode> = (1..=n)
        .map(|id| {
            let parent = (id > 1).then(|| id - 1);
            // Each node claims its successor and the root.
            let kids = if id < n { vec![id + 1, 1] } else { vec![1] };
            node(id, parent, &kids)
        })
        .collect();
    let audit = audit(&nodes);
    assert_eq!(roots(&audit.invalid), vec![1]);
    assert_eq!(audit.invalid[0].children.len(), n as usize);
}

#[test]
fn out_of_range_ids_are_recorded() {
    let report = audit(&[node(1, None, &[2, 0, 3]), node(2, Some(1), &[-1])]).to_report();
    assert_eq!(report.invalid_menus[0].children, vec![-1, 0, 2, 3]);
}

#[test]
fn child_listed_as_root_elsewhere() {
    // 2 is a root and also claimed by 1; its subtree still counts for 1.
    let audit = audit(&[
        node(1, None, &[2]),
        node(2, None, &[3]),
        node(3, Some(2), &[4]),
        node(4, Some(3), &[]),
    ]);
    assert_eq!(roots(&audit.invalid), vec![1]);
    assert_eq!(roots(&audit.valid), vec![2]);
    let first = &audit.invalid[0];
    assert_eq!(first.depth, 3);
    assert_eq!(first.children.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn depth_limit_is_configurable() {
    let nodes = vec![
        node(1, None, &[2]),
        node(2, Some(1), &[3]),
        node(3, Some(2), &[]),
    ];
    let index = MenuIndex::build(&nodes);
    let strict = validate::validate_forest(&index, ValidatorOptions { max_depth: 1 });
    assert_eq!(roots(&strict.invalid), vec![1]);
    let lenient = validate::validate_forest(&index, ValidatorOptions { max_depth: 2 });
    assert_eq!(roots(&lenient.valid), vec![1]);
}

#[test]
fn validation_is_idempotent() {
    let json = include_str!("fixtures/forest.json");
    let nodes = model::parse_nodes(json).unwrap();
    let index = MenuIndex::build(&nodes);
    let first = validate::validate_forest(&index, ValidatorOptions::default());
    let second = validate::validate_forest(&index, ValidatorOptions::default());
    assert_eq!(first, second);
    assert_eq!(first.to_report(), second.to_report());
}

#[test]
fn empty_collection_yields_empty_report() {
    let report = audit(&[]).to_report();
    assert!(report.valid_menus.is_empty());
    assert!(report.invalid_menus.is_empty());
}

//! Integration tests for the folder graph stages
//!
//! Covers the hierarchy builder, the tree builder with its self-node
//! synthesis, and the generic post-order mapper.

use pretty_assertions::assert_eq;
use routegen::{
    build_folder_tree_from_hierarchy, generate_folder_hierarchy, map_nodes, FolderData,
    FolderMetadata, FolderNode,
};

fn metadata(path: &str, files: &[&str], parent: Option<&str>) -> FolderMetadata {
    FolderMetadata {
        path: path.to_string(),
        files: files.iter().map(|f| f.to_string()).collect(),
        parent: parent.map(String::from),
    }
}

fn leaf(parent: Option<&str>, path: &str, files: &[&str]) -> FolderNode {
    FolderNode {
        parent: parent.map(String::from),
        data: FolderData {
            path: path.to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
        },
        children: Vec::new(),
    }
}

// ============================================================================
// generate_folder_hierarchy
// ============================================================================

#[test]
fn hierarchy_of_no_folders_is_empty() {
    let result = generate_folder_hierarchy::<&str, &str>(&[], "src/pages", &[]).unwrap();
    assert_eq!(result, Vec::new());
}

#[test]
fn hierarchy_attributes_files_to_their_direct_folder() {
    let folders = ["src/pages", "src/pages/Teams"];
    let files = [
        "src/pages/dashboard-page.component.ts",
        "src/pages/Teams/team-catalog-page.component.ts",
    ];

    let result = generate_folder_hierarchy(&folders, "src/pages", &files).unwrap();

    assert_eq!(
        result,
        vec![
            metadata("", &["src/pages/dashboard-page.component.ts"], None),
            metadata("Teams", &["src/pages/Teams/team-catalog-page.component.ts"], None),
        ]
    );
}

#[test]
fn hierarchy_covers_nested_dynamic_and_layout_folders() {
    let folders = [
        "src/pages",
        "src/pages/Teams",
        "src/pages/Teams/[id]",
        "src/pages/Teams/[id]/(team-details)",
        "src/pages/Teams/[id]/history",
        "src/pages/Teams/[id]/[...custom]",
        "src/pages/Products",
        "src/pages/Products/[id]",
    ];
    let files = [
        "src/pages/dashboard-page.component.ts",
        "src/pages/Teams/team-catalog-page.component.ts",
        "src/pages/Teams/[id]/team-overview-page.component.ts",
        "src/pages/Teams/[id]/(team-details)/team-details-layout.component.ts",
        "src/pages/Teams/[id]/history/team-history-page.component.ts",
        "src/pages/Teams/[id]/[...custom]/team-custom-page.component.ts",
        "src/pages/Products/product-catalog-page.component.ts",
        "src/pages/Products/[id]/product-details-page.component.ts",
    ];

    let result = generate_folder_hierarchy(&folders, "src/pages", &files).unwrap();

    assert_eq!(
        result,
        vec![
            metadata("", &["src/pages/dashboard-page.component.ts"], None),
            metadata("Teams", &["src/pages/Teams/team-catalog-page.component.ts"], None),
            metadata(
                "Teams/[id]",
                &["src/pages/Teams/[id]/team-overview-page.component.ts"],
                Some("Teams"),
            ),
            metadata(
                "Teams/[id]/(team-details)",
                &["src/pages/Teams/[id]/(team-details)/team-details-layout.component.ts"],
                Some("Teams/[id]"),
            ),
            metadata(
                "Teams/[id]/history",
                &["src/pages/Teams/[id]/history/team-history-page.component.ts"],
                Some("Teams/[id]"),
            ),
            metadata(
                "Teams/[id]/[...custom]",
                &["src/pages/Teams/[id]/[...custom]/team-custom-page.component.ts"],
                Some("Teams/[id]"),
            ),
            metadata("Products", &["src/pages/Products/product-catalog-page.component.ts"], None),
            metadata(
                "Products/[id]",
                &["src/pages/Products/[id]/product-details-page.component.ts"],
                Some("Products"),
            ),
        ]
    );
}

#[test]
fn hierarchy_output_matches_input_length_and_order() {
    let folders = [
        "src/pages",
        "src/pages/Products",
        "src/pages/Teams",
        "src/pages/Teams/[id]",
    ];
    let result = generate_folder_hierarchy::<_, &str>(&folders, "src/pages", &[]).unwrap();

    assert_eq!(result.len(), folders.len());
    assert_eq!(
        result.iter().map(|m| m.path.as_str()).collect::<Vec<_>>(),
        vec!["", "Products", "Teams", "Teams/[id]"]
    );
}

#[test]
fn parent_is_none_exactly_for_folders_directly_under_the_base() {
    let folders = [
        "src/pages",
        "src/pages/Teams",
        "src/pages/Teams/[id]",
        "src/pages/Products",
    ];
    let result = generate_folder_hierarchy::<_, &str>(&folders, "src/pages", &[]).unwrap();

    assert_eq!(result[0].parent, None); // the base itself
    assert_eq!(result[1].parent, None);
    assert_eq!(result[2].parent, Some("Teams".to_string()));
    assert_eq!(result[3].parent, None);
}

// ============================================================================
// build_folder_tree_from_hierarchy
// ============================================================================

#[test]
fn tree_of_no_records_is_empty() {
    assert_eq!(build_folder_tree_from_hierarchy(&[]), Vec::new());
}

#[test]
fn tree_of_a_single_record_is_a_single_leaf() {
    let records = [metadata("", &["src/pages/dashboard-page.component.ts"], None)];
    assert_eq!(
        build_folder_tree_from_hierarchy(&records),
        vec![leaf(None, "", &["src/pages/dashboard-page.component.ts"])]
    );
}

#[test]
fn tree_inserts_a_self_node_ahead_of_real_children() {
    let records = [
        metadata("Teams", &["src/pages/Teams/team-catalog-page.component.ts"], None),
        metadata(
            "Teams/[id]",
            &["src/pages/Teams/[id]/team-overview-page.component.ts"],
            Some("Teams"),
        ),
    ];

    let expected = vec![FolderNode {
        parent: None,
        data: FolderData {
            path: "Teams".to_string(),
            files: Vec::new(),
        },
        children: vec![
            leaf(Some("Teams"), "Teams", &["src/pages/Teams/team-catalog-page.component.ts"]),
            leaf(
                Some("Teams"),
                "Teams/[id]",
                &["src/pages/Teams/[id]/team-overview-page.component.ts"],
            ),
        ],
    }];

    assert_eq!(build_folder_tree_from_hierarchy(&records), expected);
}

#[test]
fn tree_keeps_multiple_roots_in_order() {
    let records = [
        metadata("", &["src/pages/dashboard-page.component.ts"], None),
        metadata("Teams", &["src/pages/Teams/team-catalog-page.component.ts"], None),
    ];

    assert_eq!(
        build_folder_tree_from_hierarchy(&records),
        vec![
            leaf(None, "", &["src/pages/dashboard-page.component.ts"]),
            leaf(None, "Teams", &["src/pages/Teams/team-catalog-page.component.ts"]),
        ]
    );
}

#[test]
fn tree_nests_containers_recursively() {
    let records = [
        metadata("", &["src/pages/dashboard-page.component.ts"], None),
        metadata("Teams", &["src/pages/Teams/team-catalog-page.component.ts"], None),
        metadata(
            "Teams/[id]",
            &["src/pages/Teams/[id]/team-overview-page.component.ts"],
            Some("Teams"),
        ),
        metadata(
            "Teams/[id]/(team-details)",
            &["src/pages/Teams/[id]/(team-details)/team-details-layout.component.ts"],
            Some("Teams/[id]"),
        ),
        metadata(
            "Teams/[id]/history",
            &["src/pages/Teams/[id]/history/team-history-page.component.ts"],
            Some("Teams/[id]"),
        ),
        metadata(
            "Teams/[id]/[...custom]",
            &["src/pages/Teams/[id]/[...custom]/team-custom-page.component.ts"],
            Some("Teams/[id]"),
        ),
    ];

    let forest = build_folder_tree_from_hierarchy(&records);

    assert_eq!(forest.len(), 2);
    // One node per record plus one self node per container (Teams, [id])
    assert_eq!(
        forest.iter().map(FolderNode::count).sum::<usize>(),
        records.len() + 2
    );
    assert_eq!(forest[0], leaf(None, "", &["src/pages/dashboard-page.component.ts"]));

    let teams = &forest[1];
    assert_eq!(teams.data.files, Vec::<String>::new());
    assert_eq!(teams.children.len(), 2);
    assert!(teams.children[0].is_self_node());
    assert_eq!(
        teams.children[0].data.files,
        vec!["src/pages/Teams/team-catalog-page.component.ts"]
    );

    let id = &teams.children[1];
    assert_eq!(id.data.path, "Teams/[id]");
    assert_eq!(id.data.files, Vec::<String>::new());
    assert_eq!(id.children.len(), 4);
    assert!(id.children[0].is_self_node());
    assert_eq!(
        id.children
            .iter()
            .map(|c| c.data.path.as_str())
            .collect::<Vec<_>>(),
        vec![
            "Teams/[id]",
            "Teams/[id]/(team-details)",
            "Teams/[id]/history",
            "Teams/[id]/[...custom]",
        ]
    );
}

#[test]
fn tree_never_drops_a_file() {
    let folders = [
        "src/pages",
        "src/pages/Teams",
        "src/pages/Teams/[id]",
        "src/pages/Teams/[id]/history",
    ];
    let files = [
        "src/pages/dashboard-page.component.ts",
        "src/pages/Teams/team-catalog-page.component.ts",
        "src/pages/Teams/[id]/team-overview-page.component.ts",
        "src/pages/Teams/[id]/history/team-history-page.component.ts",
    ];

    let hierarchy = generate_folder_hierarchy(&folders, "src/pages", &files).unwrap();
    let forest = build_folder_tree_from_hierarchy(&hierarchy);

    let mut collected = Vec::new();
    fn collect(nodes: &[FolderNode], out: &mut Vec<String>) {
        for node in nodes {
            out.extend(node.data.files.iter().cloned());
            collect(&node.children, out);
        }
    }
    collect(&forest, &mut collected);
    collected.sort();

    let mut expected: Vec<String> = files.iter().map(|f| f.to_string()).collect();
    expected.sort();
    assert_eq!(collected, expected);
}

#[test]
fn self_nodes_are_always_empty_leaves_in_first_position() {
    let records = [
        metadata("Teams", &[], None),
        metadata("Teams/[id]", &["src/pages/Teams/[id]/x.ts"], Some("Teams")),
        metadata("Teams/[id]/history", &[], Some("Teams/[id]")),
    ];
    let forest = build_folder_tree_from_hierarchy(&records);

    fn check(nodes: &[FolderNode]) {
        for node in nodes {
            if !node.children.is_empty() {
                let first = &node.children[0];
                assert!(first.is_self_node());
                assert!(first.children.is_empty());
                assert_eq!(first.data.path, node.data.path);
                check(&node.children);
            }
        }
    }
    check(&forest);
}

// ============================================================================
// map_nodes
// ============================================================================

fn sample_forest() -> Vec<FolderNode> {
    vec![FolderNode {
        parent: None,
        data: FolderData {
            path: "Teams".to_string(),
            files: Vec::new(),
        },
        children: vec![
            leaf(Some("Teams"), "Teams", &["src/pages/Teams/team-catalog-page.component.ts"]),
            FolderNode {
                parent: Some("Teams".to_string()),
                data: FolderData {
                    path: "Teams/[id]".to_string(),
                    files: Vec::new(),
                },
                children: vec![
                    leaf(
                        Some("Teams/[id]"),
                        "Teams/[id]",
                        &["src/pages/Teams/[id]/team-overview-page.component.ts"],
                    ),
                    leaf(
                        Some("Teams/[id]"),
                        "Teams/[id]/(team-details)",
                        &["src/pages/Teams/[id]/(team-details)/team-details-layout.component.ts"],
                    ),
                    leaf(
                        Some("Teams/[id]"),
                        "Teams/[id]/history",
                        &["src/pages/Teams/[id]/history/team-history-page.component.ts"],
                    ),
                ],
            },
        ],
    }]
}

#[test]
fn map_nodes_rewrites_every_node_once() {
    let mapped = map_nodes(sample_forest(), &|mut node| {
        node.data.files.push("marker.ts".to_string());
        node
    });

    fn check(nodes: &[FolderNode]) {
        for node in nodes {
            assert_eq!(node.data.files.last().map(String::as_str), Some("marker.ts"));
            assert_eq!(
                node.data
                    .files
                    .iter()
                    .filter(|f| f.as_str() == "marker.ts")
                    .count(),
                1
            );
            check(&node.children);
        }
    }
    check(&mapped);
}

#[test]
fn map_nodes_roundtrips_an_added_attribute() {
    let original = sample_forest();
    let tagged = map_nodes(original.clone(), &|mut node| {
        node.data.files.push("marker.ts".to_string());
        node
    });
    let restored = map_nodes(tagged, &|mut node| {
        node.data.files.retain(|f| f != "marker.ts");
        node
    });
    assert_eq!(restored, original);
}

#[test]
fn map_nodes_lets_the_transform_splice_children() {
    let mapped = map_nodes(sample_forest(), &|mut node| {
        let layout = node
            .children
            .iter()
            .position(|c| c.data.path.contains('('));
        if let Some(index) = layout {
            let child = node.children.remove(index);
            node.data.files = child.data.files;
        }
        node
    });

    let id = &mapped[0].children[1];
    assert_eq!(
        id.data.files,
        vec!["src/pages/Teams/[id]/(team-details)/team-details-layout.component.ts"]
    );
    assert_eq!(
        id.children
            .iter()
            .map(|c| c.data.path.as_str())
            .collect::<Vec<_>>(),
        vec!["Teams/[id]", "Teams/[id]/history"]
    );
}

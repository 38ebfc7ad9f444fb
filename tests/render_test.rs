//! Tests for transcript and box-drawing rendering

use rstest::{fixture, rstest};

use aggtree::domain::{Node, TreeDisplay, INDENT_STEP};

#[fixture]
fn docs_tree() -> Node {
    let mut sub = Node::aggregate("Sub");
    sub.add_child(Node::leaf("b.txt", 50)).unwrap();
    sub.add_child(Node::leaf("c.txt", 25)).unwrap();

    let mut root = Node::aggregate("Docs");
    root.add_child(Node::leaf("a.txt", 100)).unwrap();
    root.add_child(sub).unwrap();
    root
}

// ============================================================
// Transcript (describe) Tests
// ============================================================

#[rstest]
fn given_docs_tree_when_describing_then_transcript_matches(docs_tree: Node) {
    assert_eq!(
        docs_tree.describe(0),
        vec![
            "Docs",
            "  a.txt (100)",
            "  Sub",
            "    b.txt (50)",
            "    c.txt (25)",
        ]
    );
}

#[rstest]
fn given_start_depth_when_describing_then_lines_shift_uniformly(docs_tree: Node) {
    let at_zero = docs_tree.describe(0);
    let at_two = docs_tree.describe(2);
    let shift = " ".repeat(2 * INDENT_STEP);

    assert_eq!(at_zero.len(), at_two.len());
    for (zero, two) in at_zero.iter().zip(&at_two) {
        assert_eq!(&format!("{shift}{zero}"), two);
    }
}

#[test]
fn given_leaf_when_describing_then_exactly_one_line() {
    let leaf = Node::leaf("a.txt", 100);
    assert_eq!(leaf.describe(1), vec!["  a.txt (100)"]);
}

#[rstest]
fn given_aggregate_when_describing_then_header_plus_children_in_order(docs_tree: Node) {
    // Order-preservation invariant: header line, then each child's
    // transcript at depth + 1, concatenated in child order
    let mut expected = vec!["Docs".to_string()];
    for i in 0..docs_tree.child_count() {
        expected.extend(docs_tree.child_at(i).unwrap().describe(1));
    }
    assert_eq!(docs_tree.describe(0), expected);
}

#[rstest]
fn given_docs_tree_when_displaying_then_joins_transcript(docs_tree: Node) {
    assert_eq!(docs_tree.to_string(), docs_tree.describe(0).join("\n"));
}

// ============================================================
// Box-Drawing (termtree) Tests
// ============================================================

#[rstest]
fn given_docs_tree_when_rendering_fancy_then_draws_branches(docs_tree: Node) {
    let rendered = docs_tree.to_tree_string().to_string();
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines[0], "Docs");
    assert!(lines.contains(&"├── a.txt (100)"));
    assert!(lines.contains(&"└── Sub"));
    assert!(rendered.contains("b.txt (50)"));
    assert!(rendered.contains("c.txt (25)"));
}

#[test]
fn given_single_leaf_when_rendering_fancy_then_label_carries_payload() {
    let leaf = Node::leaf("a.txt", 100);
    assert_eq!(leaf.to_tree_string().to_string().trim_end(), "a.txt (100)");
}

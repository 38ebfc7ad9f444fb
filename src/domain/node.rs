//! Core tree node: a leaf carries a scalar payload, an aggregate owns an
//! ordered list of child nodes. Both share one operation surface.

use std::fmt;

use tracing::instrument;
use uuid::Uuid;

use crate::domain::error::{NodeError, NodeResult};

/// Scalar returned by `measure`, e.g. a byte count.
pub type Metric = u64;

/// Indentation added per nesting level in `describe` output.
pub const INDENT_STEP: usize = 2;

/// Stable node identity, assigned at construction.
///
/// Removal is keyed on identity, not value equality: two leaves with the
/// same name and payload are still distinct nodes. A cloned node keeps its
/// id and therefore counts as the same logical child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Leaf { payload: Metric },
    Aggregate { children: Vec<Node> },
}

/// A node in the aggregation tree.
///
/// The name is fixed at construction. Children are owned exclusively by
/// their parent, so a node has at most one parent at any time and the
/// structure is acyclic by construction: `add_child` moves the child in,
/// and a tree cannot be moved into one of its own descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: String,
    kind: NodeKind,
}

impl Node {
    /// Create a leaf holding `payload`.
    pub fn leaf(name: impl Into<String>, payload: Metric) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind: NodeKind::Leaf { payload },
        }
    }

    /// Create an aggregate with an empty child list.
    pub fn aggregate(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind: NodeKind::Aggregate {
                children: Vec::new(),
            },
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self.kind, NodeKind::Aggregate { .. })
    }

    /// Stored payload for a leaf, `None` for an aggregate.
    pub fn payload(&self) -> Option<Metric> {
        match &self.kind {
            NodeKind::Leaf { payload } => Some(*payload),
            NodeKind::Aggregate { .. } => None,
        }
    }

    /// Number of direct children. A leaf has none.
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    pub(crate) fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Leaf { .. } => &[],
            NodeKind::Aggregate { children } => children,
        }
    }

    /// Recursive scalar aggregation: a leaf reports its payload verbatim,
    /// an aggregate sums its children in order. Computed fresh on every
    /// call; an empty aggregate measures 0.
    #[instrument(level = "trace", skip(self), fields(name = %self.name))]
    pub fn measure(&self) -> Metric {
        match &self.kind {
            NodeKind::Leaf { payload } => *payload,
            NodeKind::Aggregate { children } => children.iter().map(Node::measure).sum(),
        }
    }

    /// Depth-indented transcript of the subtree, one line per node.
    ///
    /// A leaf yields exactly one line, `name (payload)` indented by
    /// `depth * INDENT_STEP` spaces. An aggregate yields its own header
    /// line followed by each child's lines at `depth + 1`, in child order.
    #[instrument(level = "trace", skip(self), fields(name = %self.name))]
    pub fn describe(&self, depth: usize) -> Vec<String> {
        let mut lines = Vec::new();
        self.describe_into(depth, &mut lines);
        lines
    }

    fn describe_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = depth * INDENT_STEP;
        match &self.kind {
            NodeKind::Leaf { payload } => {
                lines.push(format!("{:indent$}{} ({})", "", self.name, payload));
            }
            NodeKind::Aggregate { children } => {
                lines.push(format!("{:indent$}{}", "", self.name));
                for child in children {
                    child.describe_into(depth + 1, lines);
                }
            }
        }
    }

    /// Append a child to an aggregate. The child is moved in; no
    /// de-duplication is performed.
    ///
    /// Fails with `UnsupportedOperation` on a leaf.
    #[instrument(level = "debug", skip(self, child), fields(name = %self.name, child = %child.name))]
    pub fn add_child(&mut self, child: Node) -> NodeResult<()> {
        match &mut self.kind {
            NodeKind::Leaf { .. } => Err(self.unsupported()),
            NodeKind::Aggregate { children } => {
                children.push(child);
                Ok(())
            }
        }
    }

    /// Detach and return the first child with the given id.
    ///
    /// No match is a no-op returning `Ok(None)`, matching the underlying
    /// list-removal primitive. Remaining children keep their order.
    /// Fails with `UnsupportedOperation` on a leaf.
    #[instrument(level = "debug", skip(self), fields(name = %self.name))]
    pub fn remove_child(&mut self, id: NodeId) -> NodeResult<Option<Node>> {
        match &mut self.kind {
            NodeKind::Leaf { .. } => Err(self.unsupported()),
            NodeKind::Aggregate { children } => {
                let position = children.iter().position(|c| c.id == id);
                Ok(position.map(|i| children.remove(i)))
            }
        }
    }

    /// Detach and return the child at `index`.
    ///
    /// Fails with `IndexOutOfRange` outside `[0, child_count)` and with
    /// `UnsupportedOperation` on a leaf. A failed call leaves the child
    /// list untouched.
    #[instrument(level = "debug", skip(self), fields(name = %self.name))]
    pub fn remove_child_at(&mut self, index: usize) -> NodeResult<Node> {
        match &mut self.kind {
            NodeKind::Leaf { .. } => Err(self.unsupported()),
            NodeKind::Aggregate { children } => {
                if index >= children.len() {
                    return Err(NodeError::IndexOutOfRange {
                        index,
                        count: children.len(),
                    });
                }
                Ok(children.remove(index))
            }
        }
    }

    /// Borrow the child at `index`.
    pub fn child_at(&self, index: usize) -> NodeResult<&Node> {
        match &self.kind {
            NodeKind::Leaf { .. } => Err(self.unsupported()),
            NodeKind::Aggregate { children } => {
                children.get(index).ok_or(NodeError::IndexOutOfRange {
                    index,
                    count: children.len(),
                })
            }
        }
    }

    /// Mutably borrow the child at `index`, e.g. to grow a subtree in place.
    pub fn child_at_mut(&mut self, index: usize) -> NodeResult<&mut Node> {
        match &mut self.kind {
            NodeKind::Leaf { .. } => Err(NodeError::UnsupportedOperation {
                name: self.name.clone(),
            }),
            NodeKind::Aggregate { children } => {
                let count = children.len();
                children
                    .get_mut(index)
                    .ok_or(NodeError::IndexOutOfRange { index, count })
            }
        }
    }

    /// Height of the subtree: a single node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Names of all leaves in the subtree, left to right.
    pub fn leaf_nodes(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<String>) {
        match &self.kind {
            NodeKind::Leaf { .. } => leaves.push(self.name.clone()),
            NodeKind::Aggregate { children } => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }

    fn unsupported(&self) -> NodeError {
        NodeError::UnsupportedOperation {
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(0).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_reports_payload_and_no_children() {
        let leaf = Node::leaf("a.txt", 100);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.payload(), Some(100));
        assert_eq!(leaf.child_count(), 0);
        assert_eq!(leaf.depth(), 1);
    }

    #[test]
    fn aggregate_starts_empty() {
        let agg = Node::aggregate("Docs");
        assert!(agg.is_aggregate());
        assert_eq!(agg.payload(), None);
        assert_eq!(agg.child_count(), 0);
        assert_eq!(agg.measure(), 0);
    }

    #[test]
    fn clone_keeps_identity() {
        let leaf = Node::leaf("x", 10);
        let copy = leaf.clone();
        assert_eq!(leaf.id(), copy.id());
        assert_eq!(leaf, copy);
    }

    #[test]
    fn distinct_nodes_with_equal_values_differ_by_id() {
        let a = Node::leaf("x", 10);
        let b = Node::leaf("x", 10);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }
}

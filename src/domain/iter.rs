//! Explicit-stack traversal over a node subtree.
//!
//! Observable order matches the naturally recursive walk in `describe`,
//! without borrowing the call stack for pathologically deep trees.

use crate::domain::node::Node;

impl Node {
    /// Depth-first pre-order walk, yielding each node with its depth
    /// relative to the starting node (which is at depth 0). Children are
    /// visited in insertion order.
    pub fn iter(&self) -> DepthFirstIter<'_> {
        DepthFirstIter::new(self)
    }

    /// Depth-first post-order walk: leaves before their parents.
    pub fn iter_postorder(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }
}

pub struct DepthFirstIter<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> DepthFirstIter<'a> {
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a> Iterator for DepthFirstIter<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children().iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((node, depth))
    }
}

pub struct PostOrderIter<'a> {
    stack: Vec<(&'a Node, usize, bool)>,
}

impl<'a> PostOrderIter<'a> {
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(root, 0, false)],
        }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth, visited)) = self.stack.pop() {
            if visited {
                return Some((node, depth));
            }
            self.stack.push((node, depth, true));
            for child in node.children().iter().rev() {
                self.stack.push((child, depth + 1, false));
            }
        }
        None
    }
}

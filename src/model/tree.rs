//! Arena storage for a reconstructed document tree.

use super::node::{Node, NodeId, NodeRef};

/// A document tree.
///
/// Nodes live in a flat arena indexed by [`NodeId`]; the root sentinel is
/// always at [`NodeId::ROOT`]. Children are owned through the arena and
/// parents are plain ids, so dropping the tree drops every node at once.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree holding only the root sentinel.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    /// Attach a detached node as the last child of `parent`.
    ///
    /// This is the only place a parent link is ever written.
    pub(crate) fn attach(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        debug_assert!(node.parent.is_none(), "node attached twice");
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The root sentinel.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Handle to the node with `id`, if it belongs to this tree.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator that yields chunks but does not descend into them.
///
/// Created by [`NodeRef::walk`]. The starting node itself is not yielded.
pub struct Walk<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(tree: &'a Tree, start: NodeId) -> Self {
        let stack = tree.node(start).children.iter().rev().copied().collect();
        Self { tree, stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        if !node.kind.is_chunk() {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(NodeRef::new(self.tree, id))
    }
}

/// Full pre-order iterator over every node below a start node.
///
/// Yields `(depth, node)` with depth 0 for direct children. Created by
/// [`NodeRef::descendants`].
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<(usize, NodeId)>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(tree: &'a Tree, start: NodeId) -> Self {
        let stack = tree
            .node(start)
            .children
            .iter()
            .rev()
            .map(|&id| (0, id))
            .collect();
        Self { tree, stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (usize, NodeRef<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack
            .extend(node.children.iter().rev().map(|&child| (depth + 1, child)));
        Some((depth, NodeRef::new(self.tree, id)))
    }
}

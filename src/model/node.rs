//! Tree nodes and the borrowed node handle.

use super::record::{BlockMeta, Tag};
use super::table::Table;
use super::tree::{Descendants, Tree, Walk};
use crate::render;
use std::fmt;

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root sentinel of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in arena (construction) order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The sentinel at the top of every tree; never rendered on its own
    Root,
    /// A paragraph, possibly owning the list items it introduces
    Paragraph,
    /// A section heading, owning the content below it
    Section,
    /// A list item, possibly owning nested list items
    ListItem,
    /// A table with its header and data rows
    Table(Table),
}

impl NodeKind {
    /// Wire tag of this kind; the root has none.
    pub fn tag(&self) -> Option<Tag> {
        match self {
            NodeKind::Root => None,
            NodeKind::Paragraph => Some(Tag::Paragraph),
            NodeKind::Section => Some(Tag::Header),
            NodeKind::ListItem => Some(Tag::ListItem),
            NodeKind::Table(_) => Some(Tag::Table),
        }
    }

    /// Paragraphs, list items and tables are chunks: aggregation queries
    /// collect them but never look below them.
    pub fn is_chunk(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph | NodeKind::ListItem | NodeKind::Table(_)
        )
    }
}

/// A node stored in a [`Tree`].
///
/// The parent link is set once when the node is attached and cannot change
/// afterwards; it does not own anything.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) meta: BlockMeta,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Create a detached node.
    pub(crate) fn new(kind: NodeKind, meta: BlockMeta) -> Self {
        Self {
            kind,
            meta,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create the root sentinel (level -1, no tag).
    pub fn root() -> Self {
        Self::new(NodeKind::Root, BlockMeta::new())
    }

    /// Node kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Positional metadata and sentences copied from the record.
    pub fn meta(&self) -> &BlockMeta {
        &self.meta
    }

    /// Nesting level.
    pub fn level(&self) -> i32 {
        self.meta.level
    }

    /// Parent id, `None` for the root and for detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A borrowed handle to a node inside a [`Tree`].
///
/// All read-only operations on the reconstructed document go through this
/// handle: navigation, rendering and aggregation.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// The tree this node lives in.
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    /// Node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The underlying node.
    pub fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }

    /// Node kind.
    pub fn kind(&self) -> &'a NodeKind {
        &self.node().kind
    }

    /// Wire tag; `None` for the root.
    pub fn tag(&self) -> Option<Tag> {
        self.kind().tag()
    }

    /// Check if this is the root sentinel.
    pub fn is_root(&self) -> bool {
        matches!(self.kind(), NodeKind::Root)
    }

    /// Check if this node is a chunk (paragraph, list item or table).
    pub fn is_chunk(&self) -> bool {
        self.kind().is_chunk()
    }

    /// Metadata copied from the source record.
    pub fn meta(&self) -> &'a BlockMeta {
        &self.node().meta
    }

    /// Nesting level, -1 for the root or when absent.
    pub fn level(&self) -> i32 {
        self.meta().level
    }

    /// Page index, -1 when absent.
    pub fn page_idx(&self) -> i32 {
        self.meta().page_idx
    }

    /// Block id from the parsing service, -1 when absent.
    pub fn block_idx(&self) -> i32 {
        self.meta().block_idx
    }

    /// Top position, -1 when absent.
    pub fn top(&self) -> f64 {
        self.meta().top
    }

    /// Left position, -1 when absent.
    pub fn left(&self) -> f64 {
        self.meta().left
    }

    /// Bounding box, empty when absent.
    pub fn bbox(&self) -> &'a [f64] {
        &self.meta().bbox
    }

    /// Sentences of this node.
    pub fn sentences(&self) -> &'a [String] {
        &self.meta().sentences
    }

    /// Section title (sentences joined by newlines); `None` for other kinds.
    pub fn title(&self) -> Option<String> {
        match self.kind() {
            NodeKind::Section => Some(self.meta().joined_text()),
            _ => None,
        }
    }

    /// Table content; `None` for other kinds.
    pub fn table(&self) -> Option<&'a Table> {
        match self.kind() {
            NodeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Parent node; `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    /// Direct children in document order.
    pub fn children(
        &self,
    ) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + ExactSizeIterator + 'a {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    /// Child at `index`, if any.
    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.node()
            .children
            .get(index)
            .map(|&id| NodeRef::new(self.tree, id))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    /// Ancestors ordered from the root down to the direct parent.
    ///
    /// The root sentinel is included as the first entry for every non-root
    /// node.
    pub fn parent_chain(&self) -> Vec<NodeRef<'a>> {
        let mut chain = Vec::new();
        let mut current = self.parent();
        while let Some(parent) = current {
            chain.push(parent);
            current = parent.parent();
        }
        chain.reverse();
        chain
    }

    /// Breadcrumb of ancestor section titles joined by `" > "`, followed by
    /// the text of any paragraph or list item ancestors joined by newlines.
    ///
    /// The breadcrumb and the ancestor text are concatenated with no
    /// separator between them.
    pub fn parent_text(&self) -> String {
        let mut header_texts = Vec::new();
        let mut para_texts = Vec::new();
        for ancestor in self.parent_chain() {
            match ancestor.kind() {
                NodeKind::Section => header_texts.push(ancestor.render_text(false, false)),
                NodeKind::Paragraph | NodeKind::ListItem => {
                    para_texts.push(ancestor.render_text(false, false))
                }
                NodeKind::Root | NodeKind::Table(_) => {}
            }
        }

        let mut text = header_texts.join(" > ");
        if !para_texts.is_empty() {
            text.push_str(&para_texts.join("\n"));
        }
        text
    }

    /// Text of the node prefixed with its ancestry.
    ///
    /// Chunks render with all their descendants; sections render their own
    /// title only.
    pub fn to_context_text(&self, include_section_info: bool) -> String {
        let mut text = String::new();
        if include_section_info {
            text.push_str(&self.parent_text());
            text.push('\n');
        }
        if self.is_chunk() {
            text.push_str(&self.render_text(true, true));
        } else {
            text.push_str(&self.render_text(false, false));
        }
        text
    }

    /// Pre-order walk below this node that does not descend into chunks.
    pub fn walk(&self) -> Walk<'a> {
        Walk::new(self.tree, self.id)
    }

    /// Every node below this one with its depth (0 for direct children).
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants::new(self.tree, self.id)
    }

    /// Paragraphs below this node, not counting those owned by chunks.
    pub fn paragraphs(&self) -> Vec<NodeRef<'a>> {
        self.collect(|kind| matches!(kind, NodeKind::Paragraph))
    }

    /// Paragraphs, list items and tables below this node in document order.
    ///
    /// This is the default segmentation of a document into retrievable units.
    pub fn chunks(&self) -> Vec<NodeRef<'a>> {
        self.collect(NodeKind::is_chunk)
    }

    /// Tables below this node.
    pub fn tables(&self) -> Vec<NodeRef<'a>> {
        self.collect(|kind| matches!(kind, NodeKind::Table(_)))
    }

    /// Sections below this node, nested sections included.
    pub fn sections(&self) -> Vec<NodeRef<'a>> {
        self.collect(|kind| matches!(kind, NodeKind::Section))
    }

    fn collect(&self, matches: impl Fn(&NodeKind) -> bool) -> Vec<NodeRef<'a>> {
        self.walk().filter(|node| matches(node.kind())).collect()
    }

    /// Render as plain text.
    ///
    /// With `include_children` each child is appended on its own line and
    /// rendered with `recurse` as its own `include_children`, so a shallow
    /// call shows one level of children and a recursive call shows all.
    pub fn render_text(&self, include_children: bool, recurse: bool) -> String {
        render::node_text(*self, include_children, recurse)
    }

    /// Render as HTML, with the same child expansion as [`render_text`].
    ///
    /// [`render_text`]: NodeRef::render_text
    pub fn render_html(&self, include_children: bool, recurse: bool) -> String {
        render::node_html(*self, include_children, recurse)
    }

    /// Render as Markdown, with the same child expansion as [`render_text`].
    ///
    /// [`render_text`]: NodeRef::render_text
    pub fn render_markdown(&self, include_children: bool, recurse: bool) -> String {
        render::node_markdown(*self, include_children, recurse)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.0)
            .field("tag", &self.tag())
            .field("level", &self.level())
            .field("children", &self.child_count())
            .finish()
    }
}

//! Document-level types.

use super::node::{NodeKind, NodeRef};
use super::record::BlockRecord;
use super::tree::Tree;
use crate::error::Result;
use crate::reader::{LayoutReader, ReadOptions};
use crate::render::{self, ExtractionStats, RenderOptions};

/// A reconstructed document: the block tree plus the records it was built from.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree,
    records: Vec<BlockRecord>,
}

impl Document {
    /// Reconstruct a document from records with default options.
    pub fn new(records: Vec<BlockRecord>) -> Result<Self> {
        Self::with_options(records, ReadOptions::default())
    }

    /// Reconstruct a document from records with custom options.
    pub fn with_options(records: Vec<BlockRecord>, options: ReadOptions) -> Result<Self> {
        let tree = LayoutReader::with_options(options).read(&records)?;
        Ok(Self::from_parts(tree, records))
    }

    /// Wrap an already reconstructed tree.
    pub fn from_parts(tree: Tree, records: Vec<BlockRecord>) -> Self {
        Self { tree, records }
    }

    /// The root sentinel of the tree.
    pub fn root(&self) -> NodeRef<'_> {
        self.tree.root()
    }

    /// The underlying tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The records the tree was built from.
    pub fn records(&self) -> &[BlockRecord] {
        &self.records
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All paragraphs not owned by another chunk.
    pub fn paragraphs(&self) -> Vec<NodeRef<'_>> {
        self.root().paragraphs()
    }

    /// Paragraphs, list items and tables in document order.
    pub fn chunks(&self) -> Vec<NodeRef<'_>> {
        self.root().chunks()
    }

    /// All tables in the document.
    pub fn tables(&self) -> Vec<NodeRef<'_>> {
        self.root().tables()
    }

    /// All sections, nested sections included.
    pub fn sections(&self) -> Vec<NodeRef<'_>> {
        self.root().sections()
    }

    /// Sections attached directly to the root.
    pub fn top_sections(&self) -> Vec<NodeRef<'_>> {
        self.root()
            .children()
            .filter(|node| matches!(node.kind(), NodeKind::Section))
            .collect()
    }

    /// Plain text of every top-level section, each followed by a newline.
    pub fn to_text(&self) -> String {
        render::to_text(self, &RenderOptions::default())
    }

    /// HTML of every top-level section wrapped in `<html>`.
    pub fn to_html(&self) -> String {
        render::to_html(self, &RenderOptions::default())
    }

    /// Markdown of every top-level section, each followed by a newline.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(self, &RenderOptions::default())
    }

    /// Node counts and nesting depth over the whole tree.
    pub fn stats(&self) -> ExtractionStats {
        ExtractionStats::from_tree(&self.tree)
    }

    /// One line per node, indented by depth; handy for debugging layouts.
    pub fn outline(&self) -> String {
        render::to_outline(self.root())
    }
}

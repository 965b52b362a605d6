//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use crate::model::{NodeKind, NodeRef, Tree};

use super::text::table_text;

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Statistics over the rendered blocks
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ExtractionStats) -> Self {
        Self { content, stats }
    }
}

/// Node counts and text volume of a tree or subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of sections
    pub section_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Deepest nesting below the root (a lone top-level block is 1)
    pub max_depth: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics over a whole tree.
    pub fn from_tree(tree: &Tree) -> Self {
        Self::from_node(tree.root())
    }

    /// Statistics over `node` and everything below it, chunk children
    /// included.
    pub fn from_node(node: NodeRef<'_>) -> Self {
        let mut stats = Self::new();
        let base = if node.is_root() {
            0
        } else {
            stats.add_node(node);
            1
        };
        stats.max_depth = base;

        for (depth, child) in node.descendants() {
            stats.add_node(child);
            stats.max_depth = stats.max_depth.max(base + depth as u32 + 1);
        }
        stats
    }

    fn add_node(&mut self, node: NodeRef<'_>) {
        match node.kind() {
            NodeKind::Root => {}
            NodeKind::Section => self.add_section(),
            NodeKind::Paragraph => self.add_paragraph(),
            NodeKind::ListItem => self.add_list_item(),
            NodeKind::Table(table) => {
                self.add_table();
                self.count_text(&table_text(table));
                return;
            }
        }
        self.count_text(&node.meta().joined_text());
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        // Word count: whitespace-separated tokens
        self.word_count += text.split_whitespace().count() as u32;

        // Character count: non-whitespace characters
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    ///
    /// Depth takes the maximum; every count is summed.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.section_count += other.section_count;
        self.paragraph_count += other.paragraph_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

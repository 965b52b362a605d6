//! Markdown rendering.

use crate::model::{Document, NodeKind, NodeRef};

use super::text::table_text;
use super::{render_blocks, render_blocks_with_stats, RenderOptions, RenderResult};

/// Convert a document to Markdown.
///
/// Every exported block renders at full depth and is followed by a newline.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> String {
    render_blocks(doc, options, markdown_block)
}

/// Convert a document to Markdown with statistics over the exported blocks.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    render_blocks_with_stats(doc, options, markdown_block)
}

fn markdown_block(node: NodeRef<'_>) -> String {
    let mut markdown = node_markdown(node, true, true);
    markdown.push('\n');
    markdown
}

/// Markdown of a single node.
pub(crate) fn node_markdown(node: NodeRef<'_>, include_children: bool, recurse: bool) -> String {
    let mut output = String::new();
    MarkdownWriter { output: &mut output }.write(node, include_children, recurse, 0);
    output
}

struct MarkdownWriter<'o> {
    output: &'o mut String,
}

impl MarkdownWriter<'_> {
    /// `list_depth` is the nesting of the node inside its enclosing list.
    fn write(
        &mut self,
        node: NodeRef<'_>,
        include_children: bool,
        recurse: bool,
        list_depth: usize,
    ) {
        let child_depth = match node.kind() {
            NodeKind::Root => 0,
            NodeKind::Section => {
                let marks = node.level().saturating_add(1).clamp(1, 6) as usize;
                self.output.push_str(&"#".repeat(marks));
                self.output.push(' ');
                self.output.push_str(&node.meta().joined_text());
                self.output.push_str("\n\n");
                0
            }
            NodeKind::Paragraph => {
                self.output.push_str(&node.meta().joined_text());
                self.output.push('\n');
                0
            }
            NodeKind::ListItem => {
                let indent = "  ".repeat(list_depth);
                let continuation = format!("\n{}  ", indent);
                self.output.push_str(&indent);
                self.output.push_str("- ");
                self.output
                    .push_str(&node.meta().joined_text().replace('\n', &continuation));
                self.output.push('\n');
                list_depth + 1
            }
            NodeKind::Table(table) => {
                self.output.push_str(&table_text(table));
                self.output.push('\n');
                return;
            }
        };

        if include_children {
            for child in node.children() {
                self.write(child, recurse, recurse, child_depth);
            }
        }
    }
}

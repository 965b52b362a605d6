//! Indented outline of a tree, one line per node.

use crate::model::NodeRef;

use super::text::node_text;

/// Outline of every node below `node`.
///
/// Each line is `"-" * depth`, the tag, the child count in parentheses and the
/// node's own text with newlines collapsed to spaces.
pub fn to_outline(node: NodeRef<'_>) -> String {
    let mut outline = String::new();
    for (depth, child) in node.descendants() {
        let tag = child
            .tag()
            .map(|tag| tag.to_string())
            .unwrap_or_else(|| "root".to_string());
        let text = node_text(child, false, false).replace('\n', " ");
        outline.push_str(&format!(
            "{} {} ({}) {}\n",
            "-".repeat(depth),
            tag,
            child.child_count(),
            text
        ));
    }
    outline
}

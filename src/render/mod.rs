//! Rendering module for converting document trees to output formats.
//!
//! Per-node renderers are reached through [`NodeRef`] methods. The
//! document-level functions here export the top-level blocks of a
//! [`Document`], optionally on the rayon pool; results are always merged
//! in document order.

mod html;
mod markdown;
mod options;
mod outline;
mod result;
mod text;

use rayon::prelude::*;

use crate::model::{Document, NodeRef};

pub(crate) use html::node_html;
pub(crate) use markdown::node_markdown;
pub(crate) use text::node_text;

pub use html::to_html;
pub use markdown::{to_markdown, to_markdown_with_stats};
pub use options::RenderOptions;
pub use outline::to_outline;
pub use result::{ExtractionStats, RenderResult};
pub use text::to_text;

/// Blocks exported at document level.
fn export_blocks<'a>(doc: &'a Document, options: &RenderOptions) -> Vec<NodeRef<'a>> {
    if options.include_preamble {
        doc.root().children().collect()
    } else {
        doc.top_sections()
    }
}

/// Render every exported block and concatenate the results in order.
fn render_blocks<'a, F>(doc: &'a Document, options: &RenderOptions, render: F) -> String
where
    F: Fn(NodeRef<'a>) -> String + Sync,
{
    let blocks = export_blocks(doc, options);
    log::debug!(
        "Rendering {} top-level blocks ({})",
        blocks.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    if options.parallel && blocks.len() > 1 {
        let parts: Vec<String> = blocks.par_iter().map(|&node| render(node)).collect();
        parts.concat()
    } else {
        blocks.into_iter().map(render).collect()
    }
}

/// Like [`render_blocks`], also collecting statistics over the exported blocks.
fn render_blocks_with_stats<'a, F>(
    doc: &'a Document,
    options: &RenderOptions,
    render: F,
) -> RenderResult
where
    F: Fn(NodeRef<'a>) -> String + Sync,
{
    let mut stats = ExtractionStats::new();
    for block in export_blocks(doc, options) {
        stats.merge(&ExtractionStats::from_node(block));
    }
    RenderResult::new(render_blocks(doc, options, render), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockRecord;

    fn sample() -> Document {
        let mut records = Vec::new();
        for i in 0..20 {
            records.push(BlockRecord::header(0, format!("Section {}", i)));
            records.push(BlockRecord::paragraph(1, format!("Body {}", i)));
            records.push(BlockRecord::list_item(1, format!("Item {}", i)));
        }
        Document::new(records).unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let doc = sample();
        let parallel = RenderOptions::default();
        let sequential = RenderOptions::sequential();

        assert_eq!(to_text(&doc, &parallel), to_text(&doc, &sequential));
        assert_eq!(to_html(&doc, &parallel), to_html(&doc, &sequential));
        assert_eq!(to_markdown(&doc, &parallel), to_markdown(&doc, &sequential));
    }

    #[test]
    fn test_output_keeps_document_order() {
        let doc = sample();
        let text = to_text(&doc, &RenderOptions::default());

        let first = text.find("Section 3\n").unwrap();
        let second = text.find("Section 13\n").unwrap();
        assert!(first < second);
        assert!(text.starts_with("Section 0\nBody 0\nItem 0\n"));
    }

    #[test]
    fn test_preamble_blocks_are_optional() {
        let doc = Document::new(vec![
            BlockRecord::paragraph(0, "before"),
            BlockRecord::header(0, "H"),
        ])
        .unwrap();

        assert_eq!(export_blocks(&doc, &RenderOptions::default()).len(), 1);
        assert_eq!(
            export_blocks(&doc, &RenderOptions::default().with_preamble(true)).len(),
            2
        );
    }
}

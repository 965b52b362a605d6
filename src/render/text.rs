//! Plain text rendering.

use crate::model::{Document, NodeKind, NodeRef, Table, TableCell, TableRow};

use super::{render_blocks, RenderOptions};

/// Convert a document to plain text.
///
/// Every exported block renders at full depth and is followed by a newline.
pub fn to_text(doc: &Document, options: &RenderOptions) -> String {
    render_blocks(doc, options, |node| {
        let mut text = node_text(node, true, true);
        text.push('\n');
        text
    })
}

/// Text of a single node.
///
/// With `include_children` each child follows on its own line, rendered with
/// `recurse` as its own `include_children`; a shallow call therefore expands
/// exactly one level.
pub(crate) fn node_text(node: NodeRef<'_>, include_children: bool, recurse: bool) -> String {
    match node.kind() {
        NodeKind::Root => {
            if !include_children {
                return String::new();
            }
            node.children()
                .map(|child| node_text(child, recurse, recurse))
                .collect::<Vec<_>>()
                .join("\n")
        }
        NodeKind::Table(table) => table_text(table),
        NodeKind::Paragraph | NodeKind::Section | NodeKind::ListItem => {
            let mut text = node.meta().joined_text();
            if include_children {
                for child in node.children() {
                    text.push('\n');
                    text.push_str(&node_text(child, recurse, recurse));
                }
            }
            text
        }
    }
}

/// Header rows then data rows, each ended by a newline.
pub(crate) fn table_text(table: &Table) -> String {
    let mut text = String::new();
    for row in table.headers.iter().chain(&table.rows) {
        text.push_str(&row_text(row));
        text.push('\n');
    }
    text
}

/// Every cell prefixed by `" | "`; header rows add a `---` line.
pub(crate) fn row_text(row: &TableRow) -> String {
    let mut text = String::new();
    for cell in &row.cells {
        text.push_str(" | ");
        text.push_str(&cell_text(cell));
    }
    if row.is_header() {
        text.push('\n');
        for _ in &row.cells {
            text.push_str(" | ---");
        }
    }
    text
}

pub(crate) fn cell_text(cell: &TableCell) -> String {
    cell.plain_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockRecord, RowRecord};

    fn doc(records: Vec<BlockRecord>) -> Document {
        Document::new(records).unwrap()
    }

    #[test]
    fn test_shallow_and_deep() {
        let doc = doc(vec![
            BlockRecord::paragraph(0, "Intro"),
            BlockRecord::list_item(0, "a"),
            BlockRecord::list_item(1, "a.1"),
        ]);
        let para = doc.root().child(0).unwrap();

        assert_eq!(node_text(para, false, false), "Intro");
        assert_eq!(node_text(para, true, false), "Intro\na");
        assert_eq!(node_text(para, true, true), "Intro\na\na.1");
    }

    #[test]
    fn test_multi_sentence_block() {
        let doc = doc(vec![BlockRecord::new(
            crate::model::Tag::Paragraph,
            0,
            ["One.", "Two."],
        )]);
        assert_eq!(node_text(doc.root().child(0).unwrap(), false, false), "One.\nTwo.");
    }

    #[test]
    fn test_table_text() {
        let doc = doc(vec![BlockRecord::table(
            0,
            vec![
                RowRecord::header(["H1", "H2"]),
                RowRecord::data(["D1", "D2"]),
                RowRecord::full("Total"),
            ],
        )]);
        let table = doc.root().child(0).unwrap();

        assert_eq!(
            node_text(table, false, false),
            " | H1 | H2\n | --- | ---\n | D1 | D2\n | Total\n"
        );
    }

    #[test]
    fn test_root_joins_children() {
        let doc = doc(vec![
            BlockRecord::paragraph(0, "p"),
            BlockRecord::header(0, "H"),
            BlockRecord::paragraph(1, "q"),
        ]);

        assert_eq!(node_text(doc.root(), false, false), "");
        assert_eq!(node_text(doc.root(), true, false), "p\nH");
        assert_eq!(node_text(doc.root(), true, true), "p\nH\nq");
    }

    #[test]
    fn test_document_text() {
        let doc = doc(vec![
            BlockRecord::paragraph(0, "preamble"),
            BlockRecord::header(0, "A"),
            BlockRecord::paragraph(1, "body"),
            BlockRecord::header(0, "B"),
        ]);

        assert_eq!(to_text(&doc, &RenderOptions::default()), "A\nbody\nB\n");
        assert_eq!(
            to_text(&doc, &RenderOptions::sequential().with_preamble(true)),
            "preamble\nA\nbody\nB\n"
        );
    }
}

//! HTML rendering.
//!
//! Output is the compact markup the downstream consumers expect: no escaping,
//! no whitespace, and header rows as `<th>` wrappers around `<td>` cells.

use crate::model::{CellValue, Document, NodeKind, NodeRef, Table, TableCell, TableRow};

use super::{render_blocks, RenderOptions};

/// Convert a document to HTML wrapped in `<html>`.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    let body = render_blocks(doc, options, |node| node_html(node, true, true));
    format!("<html>{}</html>", body)
}

/// HTML of a single node.
pub(crate) fn node_html(node: NodeRef<'_>, include_children: bool, recurse: bool) -> String {
    let children = if include_children {
        children_html(node, recurse)
    } else {
        String::new()
    };

    match node.kind() {
        NodeKind::Root => children,
        NodeKind::Section => {
            let level = node.level().saturating_add(1);
            let text = node.meta().joined_text();
            format!("<h{}>{}</h{}>{}", level, text, level, children)
        }
        NodeKind::Paragraph => block_html("p", &node.meta().joined_text(), &children),
        NodeKind::ListItem => block_html("li", &node.meta().joined_text(), &children),
        NodeKind::Table(table) => table_html(table),
    }
}

/// `<p>` or `<li>` around `text`, with any children in a nested `<ul>`.
fn block_html(tag: &str, text: &str, children: &str) -> String {
    let mut html = format!("<{}>{}", tag, text);
    if !children.is_empty() {
        html.push_str("<ul>");
        html.push_str(children);
        html.push_str("</ul>");
    }
    html.push_str(&format!("</{}>", tag));
    html
}

fn children_html(node: NodeRef<'_>, recurse: bool) -> String {
    node.children()
        .map(|child| node_html(child, recurse, recurse))
        .collect()
}

pub(crate) fn table_html(table: &Table) -> String {
    let mut html = String::from("<table>");
    for header in &table.headers {
        html.push_str(&row_html(header));
    }
    for row in &table.rows {
        html.push_str(&row_html(row));
    }
    html.push_str("</table>");
    html
}

fn row_html(row: &TableRow) -> String {
    let tag = if row.is_header() { "th" } else { "tr" };
    let mut html = format!("<{}>", tag);
    for cell in &row.cells {
        html.push_str(&cell_html(cell));
    }
    html.push_str(&format!("</{}>", tag));
    html
}

fn cell_html(cell: &TableCell) -> String {
    let content = match &cell.value {
        CellValue::Text(text) => text.clone(),
        CellValue::Paragraph(meta) => block_html("p", &meta.joined_text(), ""),
    };
    format!("<td colSpan={}>{}</td>", cell.col_span, content)
}

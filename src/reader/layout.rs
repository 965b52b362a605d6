//! Layout reconstruction: flat block stream to document tree.
//!
//! The reader makes one forward pass over the records and keeps three pieces
//! of state, all local to a single [`LayoutReader::read`] call:
//!
//! - a section stack of open headings, bottomed by the root sentinel
//! - a list stack of open list contexts, reset by any non-list record
//! - the previously emitted node
//!
//! Paragraphs and tables attach to the innermost open section. Headings pop
//! every open section at the same level or deeper, then nest under what is
//! left. List items nest under a deeper-level predecessor, under an
//! introductory paragraph of the same level, or else under the innermost
//! section.

use super::{ErrorMode, ReadOptions};
use crate::error::{Error, Result};
use crate::model::{BlockRecord, Node, NodeId, NodeKind, Table, Tag, Tree};

/// Rebuilds the implicit hierarchy of a block stream.
#[derive(Debug, Clone, Default)]
pub struct LayoutReader {
    options: ReadOptions,
}

impl LayoutReader {
    /// Create a reader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom options.
    pub fn with_options(options: ReadOptions) -> Self {
        Self { options }
    }

    /// Reader options.
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Reconstruct the tree for `records`.
    ///
    /// Empty input yields a tree holding only the root. The first malformed
    /// record aborts the pass.
    pub fn read(&self, records: &[BlockRecord]) -> Result<Tree> {
        log::debug!("LayoutReader: reading {} records", records.len());

        let mut state = ReadState::new();
        for (index, record) in records.iter().enumerate() {
            state.push(index, record, self.options.error_mode)?;
        }

        let tree = state.finish();
        log::debug!("LayoutReader: built tree with {} nodes", tree.len());
        Ok(tree)
    }
}

/// Working state of one reconstruction pass.
struct ReadState {
    tree: Tree,
    section_stack: Vec<NodeId>,
    list_stack: Vec<NodeId>,
    prev: NodeId,
}

impl ReadState {
    fn new() -> Self {
        Self {
            tree: Tree::new(),
            section_stack: vec![NodeId::ROOT],
            list_stack: Vec::new(),
            prev: NodeId::ROOT,
        }
    }

    fn push(&mut self, index: usize, record: &BlockRecord, mode: ErrorMode) -> Result<()> {
        if record.tag != Tag::ListItem && !self.list_stack.is_empty() {
            log::trace!("block {}: {} closes open lists", index, record.tag);
            self.list_stack.clear();
        }

        let id = match &record.tag {
            Tag::Paragraph => {
                let node = Node::new(NodeKind::Paragraph, record.meta.clone());
                self.tree.attach(self.section_top(), node)
            }
            Tag::Table => {
                let table = Table::from_record(record, index)?;
                let node = Node::new(NodeKind::Table(table), record.meta.clone());
                self.tree.attach(self.section_top(), node)
            }
            Tag::ListItem => self.push_list_item(index, record),
            Tag::Header => self.push_header(index, record),
            Tag::TableRow | Tag::TableHeader | Tag::TableCell | Tag::Unknown(_) => {
                return match mode {
                    ErrorMode::Strict => Err(Error::UnexpectedTag {
                        index,
                        tag: record.tag.to_string(),
                    }),
                    ErrorMode::Lenient => {
                        log::warn!(
                            "Skipping block {} with tag `{}` outside a table",
                            index,
                            record.tag
                        );
                        Ok(())
                    }
                };
            }
        };

        self.prev = id;
        Ok(())
    }

    /// Innermost open section (the root when none is open).
    fn section_top(&self) -> NodeId {
        self.section_stack.last().copied().unwrap_or(NodeId::ROOT)
    }

    fn level_of(&self, id: NodeId) -> i32 {
        self.tree.node(id).level()
    }

    fn push_list_item(&mut self, index: usize, record: &BlockRecord) -> NodeId {
        let level = record.level();
        let prev_level = self.level_of(self.prev);

        match self.tree.node(self.prev).kind() {
            // Introductory paragraph followed by its items
            NodeKind::Paragraph if prev_level == level => {
                log::trace!("block {}: list opens under paragraph", index);
                self.list_stack.push(self.prev);
            }
            NodeKind::ListItem if level > prev_level => {
                log::trace!("block {}: list nests one level deeper", index);
                self.list_stack.push(self.prev);
            }
            NodeKind::ListItem if level < prev_level => {
                // Deeper frames close, and so does an item at the new level:
                // it is a sibling. A paragraph at that level keeps its items.
                while let Some(&frame) = self.list_stack.last() {
                    if !self.closes_for(frame, level) {
                        break;
                    }
                    self.list_stack.pop();
                }
                log::trace!(
                    "block {}: list returns to level {} ({} open)",
                    index,
                    level,
                    self.list_stack.len()
                );
            }
            _ => {}
        }

        let parent = self
            .list_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.section_top());
        let node = Node::new(NodeKind::ListItem, record.meta.clone());
        self.tree.attach(parent, node)
    }

    /// Whether an open list frame ends before an item at `level`.
    fn closes_for(&self, frame: NodeId, level: i32) -> bool {
        let node = self.tree.node(frame);
        match node.kind() {
            NodeKind::ListItem => node.level() >= level,
            _ => node.level() > level,
        }
    }

    fn push_header(&mut self, index: usize, record: &BlockRecord) -> NodeId {
        let level = record.level();
        let top = self.section_top();

        let parent = if level > self.level_of(top) {
            top
        } else {
            // Never pop the root, so out-of-order headings land at top level
            while self.section_stack.len() > 1 && self.level_of(self.section_top()) >= level {
                self.section_stack.pop();
            }
            self.section_top()
        };

        let node = Node::new(NodeKind::Section, record.meta.clone());
        let id = self.tree.attach(parent, node);
        self.section_stack.push(id);
        log::trace!(
            "block {}: section at level {} (depth {})",
            index,
            level,
            self.section_stack.len() - 1
        );
        id
    }

    fn finish(self) -> Tree {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeRef, RowRecord};

    fn read(records: Vec<BlockRecord>) -> Tree {
        LayoutReader::new().read(&records).unwrap()
    }

    fn texts<'a>(nodes: impl Iterator<Item = NodeRef<'a>>) -> Vec<String> {
        nodes.map(|n| n.render_text(false, false)).collect()
    }

    #[test]
    fn test_empty_input() {
        let tree = read(Vec::new());
        assert!(tree.is_empty());
        assert_eq!(tree.root().child_count(), 0);
    }

    #[test]
    fn test_intro_paragraph_owns_list() {
        let tree = read(vec![
            BlockRecord::paragraph(0, "Intro"),
            BlockRecord::list_item(0, "a"),
            BlockRecord::list_item(0, "b"),
        ]);

        let root = tree.root();
        assert_eq!(root.child_count(), 1);
        let para = root.child(0).unwrap();
        assert_eq!(para.kind(), &NodeKind::Paragraph);
        assert_eq!(texts(para.children()), vec!["a", "b"]);
        assert!(para.children().all(|c| c.child_count() == 0));
    }

    #[test]
    fn test_paragraph_at_other_level_does_not_own_list() {
        let tree = read(vec![
            BlockRecord::paragraph(0, "Intro"),
            BlockRecord::list_item(1, "a"),
        ]);
        assert_eq!(tree.root().child_count(), 2);
    }

    #[test]
    fn test_nested_headers() {
        let tree = read(vec![
            BlockRecord::header(0, "Article I"),
            BlockRecord::header(1, "Section 1"),
            BlockRecord::header(2, "1.1"),
        ]);

        let article = tree.root().child(0).unwrap();
        assert_eq!(tree.root().child_count(), 1);
        let section = article.child(0).unwrap();
        assert_eq!(article.child_count(), 1);
        let leaf = section.child(0).unwrap();
        assert_eq!(section.child_count(), 1);
        assert_eq!(leaf.parent_text(), "Article I > Section 1");
    }

    #[test]
    fn test_sibling_and_shallower_headers() {
        let tree = read(vec![
            BlockRecord::header(0, "Article I"),
            BlockRecord::header(1, "Section 1"),
            BlockRecord::header(1, "Section 2"),
            BlockRecord::header(0, "Article II"),
        ]);

        let root = tree.root();
        assert_eq!(texts(root.children()), vec!["Article I", "Article II"]);
        let article = root.child(0).unwrap();
        assert_eq!(texts(article.children()), vec!["Section 1", "Section 2"]);
    }

    #[test]
    fn test_out_of_order_header_attaches_to_root() {
        let tree = read(vec![BlockRecord::header(2, "orphan")]);
        assert_eq!(tree.root().child_count(), 1);
        assert_eq!(tree.root().child(0).unwrap().level(), 2);
    }

    #[test]
    fn test_shallower_header_after_gap_keeps_shallower_ancestor() {
        let tree = read(vec![
            BlockRecord::header(0, "A"),
            BlockRecord::header(2, "deep"),
            BlockRecord::header(1, "middle"),
        ]);

        let a = tree.root().child(0).unwrap();
        assert_eq!(tree.root().child_count(), 1);
        assert_eq!(texts(a.children()), vec!["deep", "middle"]);
    }

    #[test]
    fn test_content_attaches_to_innermost_section() {
        let tree = read(vec![
            BlockRecord::header(0, "H"),
            BlockRecord::paragraph(1, "p"),
            BlockRecord::table(1, vec![RowRecord::data(["x"])]),
        ]);

        let section = tree.root().child(0).unwrap();
        assert_eq!(section.child_count(), 2);
        assert!(section.child(1).unwrap().table().is_some());
    }

    #[test]
    fn test_nested_list_and_return() {
        let tree = read(vec![
            BlockRecord::list_item(0, "1"),
            BlockRecord::list_item(1, "1.1"),
            BlockRecord::list_item(2, "1.1.1"),
            BlockRecord::list_item(1, "1.2"),
            BlockRecord::list_item(0, "2"),
        ]);

        let root = tree.root();
        assert_eq!(texts(root.children()), vec!["1", "2"]);
        let first = root.child(0).unwrap();
        assert_eq!(texts(first.children()), vec!["1.1", "1.2"]);
        assert_eq!(texts(first.child(0).unwrap().children()), vec!["1.1.1"]);
    }

    #[test]
    fn test_items_return_to_intro_paragraph() {
        let tree = read(vec![
            BlockRecord::paragraph(0, "Intro"),
            BlockRecord::list_item(0, "a"),
            BlockRecord::list_item(1, "a.1"),
            BlockRecord::list_item(0, "b"),
        ]);

        let para = tree.root().child(0).unwrap();
        assert_eq!(tree.root().child_count(), 1);
        assert_eq!(texts(para.children()), vec!["a", "b"]);
        assert_eq!(texts(para.child(0).unwrap().children()), vec!["a.1"]);
    }

    #[test]
    fn test_item_after_skipped_level_stays_under_shallower_item() {
        let tree = read(vec![
            BlockRecord::list_item(0, "a"),
            BlockRecord::list_item(2, "b"),
            BlockRecord::list_item(1, "c"),
        ]);

        let root = tree.root();
        assert_eq!(texts(root.children()), vec!["a"]);
        assert_eq!(texts(root.child(0).unwrap().children()), vec!["b", "c"]);
    }

    #[test]
    fn test_unknown_tag_is_reported_verbatim() {
        let records = vec![BlockRecord::new(Tag::Unknown("image".into()), 0, ["?"])];
        let err = LayoutReader::new().read(&records).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedTag { index: 0, ref tag } if tag == "image"
        ));
    }

    #[test]
    fn test_list_continuation_breaks_on_other_block() {
        let tree = read(vec![
            BlockRecord::list_item(0, "a"),
            BlockRecord::header(0, "H"),
            BlockRecord::list_item(1, "b"),
        ]);

        // "b" is deeper than "a" but a heading came between them
        let section = tree.root().child(1).unwrap();
        assert_eq!(texts(section.children()), vec!["b"]);
        assert_eq!(tree.root().child(0).unwrap().child_count(), 0);
    }

    #[test]
    fn test_strict_mode_rejects_stray_row() {
        let records = vec![
            BlockRecord::paragraph(0, "p"),
            BlockRecord::new(Tag::TableRow, 0, ["x"]),
        ];
        let err = LayoutReader::new().read(&records).unwrap_err();
        assert!(matches!(err, Error::UnexpectedTag { index: 1, .. }));
    }

    #[test]
    fn test_lenient_mode_skips_stray_row() {
        let records = vec![
            BlockRecord::paragraph(0, "Intro"),
            BlockRecord::new(Tag::Unknown("image".into()), 0, ["?"]),
            BlockRecord::list_item(0, "a"),
        ];
        let tree = LayoutReader::with_options(ReadOptions::new().lenient())
            .read(&records)
            .unwrap();

        // The skipped record leaves "Intro" as the previous node
        assert_eq!(tree.root().child_count(), 1);
        assert_eq!(tree.root().child(0).unwrap().child_count(), 1);
    }

    #[test]
    fn test_malformed_table_aborts() {
        let mut table = BlockRecord::table(0, vec![RowRecord::data(["x"])]);
        table.table_rows[0].cells = None;
        let records = vec![BlockRecord::paragraph(0, "p"), table];

        let err = LayoutReader::new().read(&records).unwrap_err();
        assert!(matches!(err, Error::MalformedBlock { index: 1, .. }));
    }

    #[test]
    fn test_metadata_is_copied() {
        let tree = read(vec![BlockRecord::paragraph(0, "p").at(5, 112)]);
        let para = tree.root().child(0).unwrap();
        assert_eq!(para.page_idx(), 5);
        assert_eq!(para.block_idx(), 112);
    }
}

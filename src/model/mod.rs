//! Document model types.
//!
//! Two layers live here: the wire records consumed from the layout parsing
//! service, and the tree they are reconstructed into. The tree is an arena
//! of nodes addressed by [`NodeId`] and read through [`NodeRef`] handles.

mod document;
mod node;
mod record;
mod table;
mod tree;

pub use document::Document;
pub use node::{Node, NodeId, NodeKind, NodeRef};
pub use record::{
    BlockMeta, BlockRecord, CellRecord, CellValue, RowKind, RowRecord, Tag, UNSET_INDEX,
    UNSET_POSITION,
};
pub use table::{Table, TableCell, TableRow};
pub use tree::{Descendants, Tree, Walk};

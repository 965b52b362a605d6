//! # blocktree
//!
//! Layout tree reconstruction for documents parsed into flat block streams.
//!
//! A layout parsing service returns a document as an ordered list of typed
//! blocks (paragraphs, list items, headers, tables), each carrying a nesting
//! level. This library rebuilds the implicit hierarchy in a single pass and
//! exposes it as a read-only tree for chunking, context lookup and export.
//!
//! ## Quick Start
//!
//! ```
//! use blocktree::parse_str;
//!
//! fn main() -> blocktree::Result<()> {
//!     let doc = parse_str(
//!         r#"[
//!             {"tag": "header", "level": 0, "sentences": ["Terms"]},
//!             {"tag": "para", "level": 1, "sentences": ["The parties agree:"]},
//!             {"tag": "list_item", "level": 1, "sentences": ["to pay"]}
//!         ]"#,
//!     )?;
//!
//!     for chunk in doc.chunks() {
//!         println!("{}", chunk.to_context_text(true));
//!     }
//!     assert_eq!(
//!         doc.to_html(),
//!         "<html><h1>Terms</h1><p>The parties agree:<ul><li>to pay</li></ul></p></html>"
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Single-pass reconstruction**: sections by heading level, lists by item level
//! - **Chunking**: paragraphs, list items and tables as retrievable units
//! - **Context text**: section breadcrumbs for any node
//! - **Multiple output formats**: plain text, HTML, Markdown
//! - **Parallel export**: top-level sections rendered with Rayon, in order

pub mod error;
pub mod model;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    BlockMeta, BlockRecord, CellRecord, CellValue, Document, Node, NodeId, NodeKind, NodeRef,
    RowKind, RowRecord, Table, TableCell, TableRow, Tag, Tree,
};
pub use reader::{ErrorMode, LayoutReader, ReadOptions};
pub use render::{ExtractionStats, RenderOptions, RenderResult};

use std::io::Read;

use serde_json::Value;

/// Reconstruct a document from a JSON string.
///
/// The JSON is either an array of block records or the parsing service's
/// response envelope.
///
/// # Example
///
/// ```
/// use blocktree::parse_str;
///
/// let doc = parse_str(r#"[{"tag": "header", "level": 0, "sentences": ["Title"]}]"#).unwrap();
/// assert_eq!(doc.sections().len(), 1);
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    parse_str_with_options(json, ReadOptions::default())
}

/// Reconstruct a document from a JSON string with custom options.
///
/// # Example
///
/// ```
/// use blocktree::{parse_str_with_options, ReadOptions};
///
/// let json = r#"[
///     {"tag": "table_cell", "level": 0},
///     {"tag": "para", "level": 0, "sentences": ["p"]}
/// ]"#;
/// let doc = parse_str_with_options(json, ReadOptions::new().lenient()).unwrap();
/// assert_eq!(doc.chunks().len(), 1);
/// ```
pub fn parse_str_with_options(json: &str, options: ReadOptions) -> Result<Document> {
    Document::with_options(reader::records_from_str(json)?, options)
}

/// Reconstruct a document from JSON bytes.
pub fn parse_slice(bytes: &[u8]) -> Result<Document> {
    parse_slice_with_options(bytes, ReadOptions::default())
}

/// Reconstruct a document from JSON bytes with custom options.
pub fn parse_slice_with_options(bytes: &[u8], options: ReadOptions) -> Result<Document> {
    Document::with_options(reader::records_from_slice(bytes)?, options)
}

/// Reconstruct a document from a reader yielding JSON.
///
/// # Example
///
/// ```no_run
/// use blocktree::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("blocks.json").unwrap();
/// let doc = parse_reader(file).unwrap();
/// println!("{}", doc.to_markdown());
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    parse_reader_with_options(reader, ReadOptions::default())
}

/// Reconstruct a document from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ReadOptions) -> Result<Document> {
    Document::with_options(reader::records_from_reader(reader)?, options)
}

/// Reconstruct a document from an already parsed JSON value.
pub fn parse_value(value: Value) -> Result<Document> {
    parse_value_with_options(value, ReadOptions::default())
}

/// Reconstruct a document from a JSON value with custom options.
pub fn parse_value_with_options(value: Value, options: ReadOptions) -> Result<Document> {
    Document::with_options(reader::records_from_value(value)?, options)
}

/// Builder for reconstructing and exporting documents.
///
/// # Example
///
/// ```
/// use blocktree::BlockTree;
///
/// let markdown = BlockTree::new()
///     .lenient()
///     .with_preamble()
///     .parse_str(r#"[{"tag": "para", "level": 0, "sentences": ["Hello"]}]"#)?
///     .to_markdown();
/// assert_eq!(markdown, "Hello\n\n");
/// # Ok::<(), blocktree::Error>(())
/// ```
pub struct BlockTree {
    read_options: ReadOptions,
    render_options: RenderOptions,
}

impl BlockTree {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            read_options: ReadOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Skip records that are not document blocks instead of failing.
    pub fn lenient(mut self) -> Self {
        self.read_options = self.read_options.lenient();
        self
    }

    /// Disable parallel rendering.
    pub fn sequential(mut self) -> Self {
        self.render_options = self.render_options.with_parallel(false);
        self
    }

    /// Export content that precedes the first section.
    pub fn with_preamble(mut self) -> Self {
        self.render_options = self.render_options.with_preamble(true);
        self
    }

    /// Reconstruct from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<BlockTreeResult> {
        self.parse_records(reader::records_from_str(json)?)
    }

    /// Reconstruct from JSON bytes.
    pub fn parse_slice(self, bytes: &[u8]) -> Result<BlockTreeResult> {
        self.parse_records(reader::records_from_slice(bytes)?)
    }

    /// Reconstruct from a reader yielding JSON.
    pub fn parse_reader<R: Read>(self, reader: R) -> Result<BlockTreeResult> {
        self.parse_records(reader::records_from_reader(reader)?)
    }

    /// Reconstruct from a JSON value.
    pub fn parse_value(self, value: Value) -> Result<BlockTreeResult> {
        self.parse_records(reader::records_from_value(value)?)
    }

    /// Reconstruct from decoded records.
    pub fn parse_records(self, records: Vec<BlockRecord>) -> Result<BlockTreeResult> {
        let document = Document::with_options(records, self.read_options)?;
        Ok(BlockTreeResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for BlockTree {
    fn default() -> Self {
        Self::new()
    }
}

/// A reconstructed document together with its export options.
pub struct BlockTreeResult {
    /// The reconstructed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl BlockTreeResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to Markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> RenderResult {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

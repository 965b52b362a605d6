//! Wire-level block records as produced by the layout parsing service.
//!
//! Field names match the service's JSON output exactly. Optional metadata
//! fields fall back to the sentinel values documented on [`BlockMeta`];
//! required fields (`tag`, a row's `type`, a cell's `cell_value`) surface as
//! deserialization errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel for absent integer metadata (`level`, `page_idx`, `block_idx`).
pub const UNSET_INDEX: i32 = -1;

/// Sentinel for absent position metadata (`top`, `left`).
pub const UNSET_POSITION: f64 = -1.0;

fn unset_index() -> i32 {
    UNSET_INDEX
}

fn unset_position() -> f64 {
    UNSET_POSITION
}

fn default_col_span() -> u32 {
    1
}

/// Block tag as emitted by the parsing service.
///
/// Tags this crate does not recognise are kept verbatim in
/// [`Tag::Unknown`] so errors and logs can name them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    /// A paragraph (`para` on the wire, `paragraph` also accepted)
    Paragraph,
    /// A list item
    ListItem,
    /// A section heading
    Header,
    /// A table
    Table,
    /// A table data row
    TableRow,
    /// A table header row
    TableHeader,
    /// A single table cell
    TableCell,
    /// Any other tag, as it appeared on the wire
    Unknown(String),
}

impl Tag {
    /// Wire name of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Paragraph => "para",
            Tag::ListItem => "list_item",
            Tag::Header => "header",
            Tag::Table => "table",
            Tag::TableRow => "table_row",
            Tag::TableHeader => "table_header",
            Tag::TableCell => "table_cell",
            Tag::Unknown(tag) => tag,
        }
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "para" | "paragraph" => Tag::Paragraph,
            "list_item" => Tag::ListItem,
            "header" => Tag::Header,
            "table" => Tag::Table,
            "table_row" => Tag::TableRow,
            "table_header" => Tag::TableHeader,
            "table_cell" => Tag::TableCell,
            _ => Tag::Unknown(tag),
        }
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional metadata shared by every block record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockMeta {
    /// Hierarchy depth, -1 if absent
    #[serde(default = "unset_index")]
    pub level: i32,

    /// Page index (0-based), -1 if absent
    #[serde(default = "unset_index")]
    pub page_idx: i32,

    /// Block id assigned by the service, -1 if absent
    #[serde(default = "unset_index")]
    pub block_idx: i32,

    /// Top position on the page, -1 if absent (tables only)
    #[serde(default = "unset_position")]
    pub top: f64,

    /// Left position on the page, -1 if absent (tables only)
    #[serde(default = "unset_position")]
    pub left: f64,

    /// Bounding box, empty if absent
    #[serde(default)]
    pub bbox: Vec<f64>,

    /// Sentences in reading order
    #[serde(default)]
    pub sentences: Vec<String>,
}

impl BlockMeta {
    /// Metadata with every field at its sentinel value.
    pub fn new() -> Self {
        Self {
            level: UNSET_INDEX,
            page_idx: UNSET_INDEX,
            block_idx: UNSET_INDEX,
            top: UNSET_POSITION,
            left: UNSET_POSITION,
            bbox: Vec::new(),
            sentences: Vec::new(),
        }
    }

    /// Sentences joined by newlines.
    pub fn joined_text(&self) -> String {
        self.sentences.join("\n")
    }
}

impl Default for BlockMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// One record of the flat block stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Block tag
    pub tag: Tag,

    /// Shared metadata
    #[serde(flatten)]
    pub meta: BlockMeta,

    /// Table name (tables only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Header and data rows (tables only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub table_rows: Vec<RowRecord>,
}

impl BlockRecord {
    /// Create a record with the given tag, level, and sentences.
    pub fn new<S: Into<String>>(
        tag: Tag,
        level: i32,
        sentences: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            tag,
            meta: BlockMeta {
                level,
                sentences: sentences.into_iter().map(Into::into).collect(),
                ..BlockMeta::new()
            },
            name: None,
            table_rows: Vec::new(),
        }
    }

    /// Create a paragraph record.
    pub fn paragraph(level: i32, text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::new(Tag::Paragraph, level, [text])
    }

    /// Create a list item record.
    pub fn list_item(level: i32, text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::new(Tag::ListItem, level, [text])
    }

    /// Create a section header record.
    pub fn header(level: i32, text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::new(Tag::Header, level, [text])
    }

    /// Create a table record from its rows.
    pub fn table(level: i32, rows: Vec<RowRecord>) -> Self {
        let mut record = Self::new(Tag::Table, level, Vec::<String>::new());
        record.table_rows = rows;
        record
    }

    /// Set page and block indices and return self.
    pub fn at(mut self, page_idx: i32, block_idx: i32) -> Self {
        self.meta.page_idx = page_idx;
        self.meta.block_idx = block_idx;
        self
    }

    /// Block level.
    pub fn level(&self) -> i32 {
        self.meta.level
    }
}

/// Kind of a table row record (the wire `type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Header row with cells
    TableHeader,
    /// Row collapsed into one cell spanning the table
    FullRow,
    /// Ordinary data row with cells
    #[serde(other)]
    TableRow,
}

/// A table row record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    /// Row kind
    #[serde(rename = "type")]
    pub kind: RowKind,

    /// Cells, required unless the row is a full row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<CellRecord>>,

    /// Value of the single cell of a full row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_value: Option<CellValue>,

    /// Column span of the single cell of a full row
    #[serde(default = "default_col_span")]
    pub col_span: u32,
}

impl RowRecord {
    /// Create a header row from text values.
    pub fn header<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::with_cells(RowKind::TableHeader, values)
    }

    /// Create a data row from text values.
    pub fn data<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::with_cells(RowKind::TableRow, values)
    }

    /// Create a full row holding a single value.
    pub fn full(value: impl Into<String>) -> Self {
        Self {
            kind: RowKind::FullRow,
            cells: None,
            cell_value: Some(CellValue::Text(value.into())),
            col_span: 1,
        }
    }

    fn with_cells<S: Into<String>>(kind: RowKind, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind,
            cells: Some(values.into_iter().map(CellRecord::text).collect()),
            cell_value: None,
            col_span: 1,
        }
    }
}

/// A table cell record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    /// Cell content
    pub cell_value: CellValue,

    /// Number of columns the cell spans
    #[serde(default = "default_col_span")]
    pub col_span: u32,
}

impl CellRecord {
    /// Create a single-column text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            cell_value: CellValue::Text(value.into()),
            col_span: 1,
        }
    }
}

/// Cell content: plain text or an embedded paragraph block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Plain string value
    Text(String),
    /// Structured paragraph value
    Paragraph(BlockMeta),
}

//! Table types.

use super::record::{BlockRecord, CellRecord, CellValue, RowKind, RowRecord};
use crate::error::{Error, Result};

/// A table reconstructed from a `table` record.
///
/// Header rows and data rows are kept apart, each in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name reported by the parsing service
    pub name: Option<String>,

    /// Header rows
    pub headers: Vec<TableRow>,

    /// Data rows (including full rows)
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            name: None,
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Build a table from its record.
    ///
    /// `index` is the record's position in the input and is only used for
    /// error reporting.
    pub fn from_record(record: &BlockRecord, index: usize) -> Result<Self> {
        let mut table = Self::new();
        table.name = record.name.clone();

        for row in &record.table_rows {
            let built = TableRow::from_record(row, index)?;
            match built.kind {
                RowKind::TableHeader => table.headers.push(built),
                RowKind::FullRow | RowKind::TableRow => table.rows.push(built),
            }
        }

        Ok(table)
    }

    /// Check if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A header or data row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Row kind as reported on the wire
    pub kind: RowKind,

    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a full row: a single cell standing for the whole row.
    pub fn full(cell: TableCell) -> Self {
        Self {
            kind: RowKind::FullRow,
            cells: vec![cell],
        }
    }

    /// Build a row from its record.
    ///
    /// Full rows collapse to one cell taken from the row itself; `cells` is
    /// not consulted for them.
    pub fn from_record(record: &RowRecord, index: usize) -> Result<Self> {
        if record.kind == RowKind::FullRow {
            let value = record
                .cell_value
                .clone()
                .ok_or_else(|| Error::malformed(index, "full row without `cell_value`"))?;
            return Ok(Self::full(TableCell::new(value, record.col_span)));
        }

        let cells = record.cells.as_ref().ok_or_else(|| {
            Error::malformed(
                index,
                format!("{} row without `cells`", row_kind_name(record.kind)),
            )
        })?;

        Ok(Self {
            kind: record.kind,
            cells: cells.iter().map(TableCell::from_record).collect(),
        })
    }

    /// Check if this is a header row.
    pub fn is_header(&self) -> bool {
        self.kind == RowKind::TableHeader
    }
}

fn row_kind_name(kind: RowKind) -> &'static str {
    match kind {
        RowKind::TableHeader => "table_header",
        RowKind::FullRow => "full_row",
        RowKind::TableRow => "table_row",
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Cell content
    pub value: CellValue,

    /// Number of columns this cell spans
    pub col_span: u32,
}

impl TableCell {
    /// Create a cell with the given content and span.
    pub fn new(value: CellValue, col_span: u32) -> Self {
        Self { value, col_span }
    }

    /// Build a cell from its record.
    pub fn from_record(record: &CellRecord) -> Self {
        Self::new(record.cell_value.clone(), record.col_span)
    }

    /// Plain text of the cell; embedded paragraphs join their sentences.
    pub fn plain_text(&self) -> String {
        match &self.value {
            CellValue::Text(text) => text.clone(),
            CellValue::Paragraph(meta) => meta.joined_text(),
        }
    }
}

//! Reconstruction of the document tree from block records.

mod input;
mod layout;
mod options;

pub use input::{records_from_reader, records_from_slice, records_from_str, records_from_value};
pub use layout::LayoutReader;
pub use options::{ErrorMode, ReadOptions};

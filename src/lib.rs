extern crate self as cardex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod favorites;
mod normalize;
mod order;
mod query;

pub use api::{
    BlockOutcome, BlockSummary, DirectoryRecord, DuplicatePolicy, Grouped, ParsePolicy, ParseReport, filter, order,
    parse, parse_verbose_with, parse_with, toggle_favorite,
};
pub use normalize::{digits, normalize};

// --- Internal types ---------------------------------------------------------

/// Byte span into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// One card-shaped chunk of the raw input, as segmented by the block
/// splitter. `body` is the text between the markers (markers excluded);
/// `range` covers the whole block including markers, for reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawBlock<'a> {
    pub range: Range,
    pub body: &'a str,
}

/// Raw field values extracted from one block, before identity assignment.
///
/// Values are stored verbatim from the input (trimmed of surrounding
/// whitespace only); normalization happens at query/order time, never here.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawFields {
    pub display_name: String,
    pub phone: String,
    pub record_number: String,
    pub external_handle: String,
    /// Which descriptors matched, for the required-fields policy check.
    pub mask: engine::fields::FieldMask,
}

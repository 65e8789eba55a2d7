use crate::engine;
use crate::engine::metrics::RunResult;
use std::time::Duration;

pub use crate::favorites::toggle_favorite;
pub use crate::order::{Grouped, order};
pub use crate::query::filter;

/// One entry in the directory.
///
/// All fields are stored verbatim from the input; normalization is applied
/// only to transient comparison keys. `favorite` is the only field ever
/// mutated after parsing, and only through
/// [`toggle_favorite`](crate::toggle_favorite).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    /// Primary key, unique within one parsed collection. The record number
    /// verbatim when present, otherwise a composite of the normalized
    /// display name and the phone's digit run.
    pub id: String,
    /// Person's name as written in the input. Always non-empty.
    pub display_name: String,
    /// Phone number, possibly empty.
    pub phone: String,
    /// Institution-assigned identifier, possibly empty.
    pub record_number: String,
    /// Social/code-hosting handle, empty when absent.
    pub external_handle: String,
    /// Favorites partition flag.
    pub favorite: bool,
}

/// How colliding ids across blocks are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later block replaces the earlier one; the survivor occupies the
    /// later block's position among survivors.
    #[default]
    LastWins,
    /// The later block is ignored.
    FirstWins,
}

/// Knobs for the variation points observed across directory exports.
///
/// Defaults are the lax variant: records without a record number are kept
/// (with a composite fallback id) and duplicate ids resolve last-wins.
#[derive(Debug, Clone, Default)]
pub struct ParsePolicy {
    /// Drop blocks whose note carries no record number.
    pub require_record_number: bool,
    /// Duplicate-id resolution.
    pub duplicate_ids: DuplicatePolicy,
}

/// What happened to one card block during a verbose parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    /// Survived with a fresh id.
    Kept,
    /// Dropped: no `FN:` line yielded a name.
    MissingName,
    /// Dropped under the strict policy: no record number in the note.
    MissingRecordNumber,
    /// Survived, replacing an earlier block with the same id (last-wins).
    DuplicateReplaced,
    /// Ignored in favor of an earlier block with the same id (first-wins).
    DuplicateIgnored,
}

/// Per-block entry in a [`ParseReport`].
#[derive(Debug, Clone)]
pub struct BlockSummary {
    /// Start byte index of the block (including the `BEGIN` marker line).
    pub start: usize,
    /// End byte index (exclusive, including the `END` marker line).
    pub end: usize,
    pub outcome: BlockOutcome,
    /// Extracted display name, possibly empty; for human-readable output.
    pub preview: String,
}

/// Result from [`parse_verbose_with`].
///
/// This is the observability surface of the engine: every silently skipped
/// block shows up here as data. The plain [`parse`] path allocates none of
/// it.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// Surviving records, in input order.
    pub records: Vec<DirectoryRecord>,
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent segmenting into blocks.
    pub split: Duration,
    /// Time spent on field extraction and identity assignment.
    pub extract: Duration,
    /// Blocks found by the splitter.
    pub blocks_seen: usize,
    /// Blocks that produced a surviving record.
    pub kept: usize,
    /// Blocks dropped by the required-fields policy.
    pub dropped: usize,
    /// Blocks collapsed by the duplicate-id policy.
    pub duplicates: usize,
    /// Per-block outcomes, in input order.
    pub blocks: Vec<BlockSummary>,
}

/// Parse directory text using the default [`ParsePolicy`].
///
/// # Example
/// ```
/// use cardex::parse;
///
/// let records = parse("BEGIN:VCARD\nFN:Ana\nEND:VCARD\n");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].display_name, "Ana");
/// ```
pub fn parse(text: &str) -> Vec<DirectoryRecord> {
    parse_with(text, &ParsePolicy::default())
}

/// Parse directory text under an explicit policy.
///
/// Total function: malformed blocks are skipped, never reported. Identical
/// input and policy always yield an identical collection.
pub fn parse_with(text: &str, policy: &ParsePolicy) -> Vec<DirectoryRecord> {
    engine::Parser::new(text, policy).run()
}

/// Parse and additionally return stage timings and per-block outcomes.
///
/// Use this to debug an export that parses to fewer records than expected.
pub fn parse_verbose_with(text: &str, policy: &ParsePolicy) -> ParseReport {
    let RunResult { records, metrics } = engine::Parser::new(text, policy).run_with_metrics();

    ParseReport {
        records,
        total: metrics.total,
        split: metrics.split,
        extract: metrics.extract,
        blocks_seen: metrics.blocks_seen,
        kept: metrics.kept,
        dropped: metrics.dropped,
        duplicates: metrics.duplicates,
        blocks: metrics
            .blocks
            .into_iter()
            .map(|t| BlockSummary { start: t.range.start, end: t.range.end, outcome: t.outcome, preview: t.preview })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CARDS: &str = "BEGIN:VCARD\nFN:María García\nTEL;TYPE=CELL:11-5555-2020\nNOTE:Legajo: 101 - Github: mgarcia\nEND:VCARD\nBEGIN:VCARD\nFN:Mateo Pérez\nTEL:11-4444-0000\nNOTE:Legajo: 102\nEND:VCARD\n";

    #[test]
    fn parse_extracts_typed_records() {
        let records = parse(TWO_CARDS);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].id, "101");
        assert_eq!(records[0].display_name, "María García");
        assert_eq!(records[0].phone, "11-5555-2020");
        assert_eq!(records[0].external_handle, "mgarcia");
        assert!(!records[0].favorite);

        assert_eq!(records[1].id, "102");
        assert_eq!(records[1].external_handle, "");
    }

    #[test]
    fn parse_is_pure() {
        assert_eq!(parse(TWO_CARDS), parse(TWO_CARDS));
    }

    #[test]
    fn verbose_report_counters_are_consistent() {
        let text = format!("{TWO_CARDS}BEGIN:VCARD\nTEL:123\nEND:VCARD\n");
        let report = parse_verbose_with(&text, &ParsePolicy::default());

        assert_eq!(report.blocks_seen, 3);
        assert_eq!(report.kept, 2);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.blocks_seen, report.kept + report.dropped + report.duplicates);
        assert_eq!(report.records.len(), report.kept);
        assert_eq!(report.blocks[2].outcome, BlockOutcome::MissingName);
        assert!(report.total >= report.split);
    }

    #[test]
    fn verbose_records_match_plain_parse() {
        let report = parse_verbose_with(TWO_CARDS, &ParsePolicy::default());
        assert_eq!(report.records, parse(TWO_CARDS));
    }
}

//! Engine run metrics.
//!
//! Small structs used to observe what one ingestion run did, without
//! touching the hot path:
//!
//! - `Parser::run` for normal operation (allocates none of this).
//! - `Parser::run_with_metrics` for debugging a misbehaving export and for
//!   the CLI report.
//!
//! Dropped blocks are data here, never errors: the parse contract is a
//! total function, and the verbose path is where silent skips become
//! visible.

use crate::api::DirectoryRecord;
use crate::{BlockOutcome, Range};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Parser::run_with_metrics`].
    pub total: Duration,
    /// Time spent segmenting the input into blocks.
    pub split: Duration,
    /// Time spent extracting fields and assigning identities.
    pub extract: Duration,
    /// Blocks found by the splitter.
    pub blocks_seen: usize,
    /// Blocks that produced a surviving record.
    pub kept: usize,
    /// Blocks dropped by the required-fields policy.
    pub dropped: usize,
    /// Blocks collapsed by the duplicate-id policy.
    pub duplicates: usize,
    /// Per-block outcome, in input order.
    pub blocks: Vec<BlockTrace>,
}

/// What happened to one block, for the verbose report.
#[derive(Debug, Clone)]
pub struct BlockTrace {
    pub range: Range,
    pub outcome: BlockOutcome,
    /// Extracted display name (possibly empty), for previews.
    pub preview: String,
}

/// A full verbose run: the surviving records plus metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub records: Vec<DirectoryRecord>,
    pub metrics: RunMetrics,
}

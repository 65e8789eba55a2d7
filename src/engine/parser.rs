//! Ingestion orchestrator.
//!
//! [`Parser`] wires the pipeline together: segment the input into blocks,
//! run the field descriptor tables over each block, apply the
//! required-fields policy, assign identities and resolve duplicates.
//!
//! Two run modes, mirroring the public API:
//!
//! - [`Parser::run`]: the plain path. Returns only the records and skips
//!   all trace allocation.
//! - [`Parser::run_with_metrics`]: additionally times the stages and keeps
//!   a per-block outcome trace (see `metrics.rs`).
//!
//! Both are deterministic: the same input and policy always produce the
//! same records in the same order.

use super::blocks;
use super::fields::{self, FieldMask};
use super::identity::{self, Admission, Collector};
use super::metrics::{BlockTrace, RunMetrics, RunResult};
use crate::api::{BlockOutcome, DirectoryRecord, ParsePolicy};
use crate::{RawBlock, RawFields};
use std::time::Instant;

pub(crate) struct Parser<'a> {
    input: &'a str,
    policy: &'a ParsePolicy,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, policy: &'a ParsePolicy) -> Self {
        Parser { input, policy }
    }

    /// Parse without collecting any trace data.
    pub fn run(&self) -> Vec<DirectoryRecord> {
        let mut collector = Collector::new(self.policy.duplicate_ids);
        for block in blocks::split(self.input) {
            let fields = fields::extract(block.body);
            if self.admit(&fields).is_none() {
                collector.push(to_record(&fields));
            }
        }
        collector.into_records()
    }

    /// Parse while timing stages and tracing every block's outcome.
    pub fn run_with_metrics(&self) -> RunResult {
        let run_start = Instant::now();
        let mut metrics = RunMetrics::default();

        let split_start = Instant::now();
        let blocks = blocks::split(self.input);
        metrics.split = split_start.elapsed();
        metrics.blocks_seen = blocks.len();

        let extract_start = Instant::now();
        let mut collector = Collector::new(self.policy.duplicate_ids);
        for block in &blocks {
            let fields = fields::extract(block.body);
            let outcome = match self.admit(&fields) {
                Some(drop) => {
                    metrics.dropped += 1;
                    drop
                }
                None => match collector.push(to_record(&fields)) {
                    Admission::Fresh => {
                        metrics.kept += 1;
                        BlockOutcome::Kept
                    }
                    Admission::ReplacedEarlier => {
                        metrics.duplicates += 1;
                        BlockOutcome::DuplicateReplaced
                    }
                    Admission::IgnoredDuplicate => {
                        metrics.duplicates += 1;
                        BlockOutcome::DuplicateIgnored
                    }
                },
            };
            metrics.blocks.push(trace(block, &fields, outcome));
        }
        metrics.extract = extract_start.elapsed();

        let records = collector.into_records();
        metrics.total = run_start.elapsed();
        RunResult { records, metrics }
    }

    /// Required-fields check. `None` admits the block; `Some` carries the
    /// drop reason.
    fn admit(&self, fields: &RawFields) -> Option<BlockOutcome> {
        if !fields.mask.contains(FieldMask::NAME) {
            return Some(BlockOutcome::MissingName);
        }
        if self.policy.require_record_number && !fields.mask.contains(FieldMask::RECORD_NUMBER) {
            return Some(BlockOutcome::MissingRecordNumber);
        }
        None
    }
}

fn to_record(fields: &RawFields) -> DirectoryRecord {
    DirectoryRecord {
        id: identity::assign(fields),
        display_name: fields.display_name.clone(),
        phone: fields.phone.clone(),
        record_number: fields.record_number.clone(),
        external_handle: fields.external_handle.clone(),
        favorite: false,
    }
}

fn trace(block: &RawBlock<'_>, fields: &RawFields, outcome: BlockOutcome) -> BlockTrace {
    BlockTrace { range: block.range, outcome, preview: fields.display_name.clone() }
}

//! Ingestion engine.
//!
//! This module is the entry point for turning raw directory text into
//! [`DirectoryRecord`](crate::DirectoryRecord)s. The public API in `api.rs`
//! is a thin wrapper over [`Parser`].
//!
//! ## How the parts work together
//!
//! Parsing an input blob is a pipeline:
//!
//! ```text
//! raw text ── blocks::split ──────── Vec<RawBlock>      (blocks.rs)
//!                  │                  one per BEGIN/END marker pair;
//!                  │                  text outside markers is ignored
//!                  v
//!           fields::extract ──────── RawFields + FieldMask   (fields.rs)
//!                  │                  ordered descriptor table, best-effort;
//!                  │                  required-fields check is a mask test
//!                  v
//!           identity::assign ─────── id + duplicate policy   (identity.rs)
//!                  │
//!                  v
//!            Vec<DirectoryRecord>    input order preserved, never sorted
//! ```
//!
//! A block failing the required-fields check is dropped silently: the parse
//! is a total function and never reports an error for malformed input. The
//! verbose path ([`Parser::run_with_metrics`]) records every drop as data
//! instead (see `metrics.rs`).
//!
//! ## Responsibilities by module
//!
//! - `blocks.rs`: pure segmentation on begin/end markers.
//! - `fields.rs`: the `{label, pattern, required}` descriptor table and the
//!   per-block extraction pass.
//! - `identity.rs`: id assignment (record number, composite fallback) and
//!   duplicate-id resolution.
//! - `parser.rs`: the orchestrator (`Parser::new` / `run` /
//!   `run_with_metrics`).
//! - `metrics.rs`: opt-in timing and per-block outcome data.
//!
//! ## Debugging
//!
//! Setting `CARDEX_DEBUG_BLOCKS=1` prints per-block extraction traces to
//! stderr.

pub(crate) mod blocks;
pub(crate) mod fields;
pub(crate) mod identity;
pub(crate) mod metrics;
pub(crate) mod parser;


pub(crate) use parser::Parser;

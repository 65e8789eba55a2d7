//! Free-text filtering.
//!
//! A record matches a query when the normalized query is a substring of any
//! searchable haystack: display name, phone or record number. Phone and
//! record number additionally match on their digit runs, so a digits-only
//! query like `"5555"` finds `"11-5555-2020"` regardless of punctuation.
//!
//! The filter never mutates records and never reorders: the output is the
//! matching subsequence of the input.

use crate::api::DirectoryRecord;
use crate::normalize::{digits, normalize};

/// Filter `records` against a free-text `query`.
///
/// An empty or whitespace-only query is the identity filter: the whole
/// input comes back in order.
pub fn filter(records: &[DirectoryRecord], query: &str) -> Vec<DirectoryRecord> {
    let needle = normalize(query);
    if needle.is_empty() {
        return records.to_vec();
    }
    let digit_needle = digits(query);

    records.iter().filter(|r| matches(r, &needle, &digit_needle)).cloned().collect()
}

fn matches(record: &DirectoryRecord, needle: &str, digit_needle: &str) -> bool {
    if normalize(&record.display_name).contains(needle)
        || normalize(&record.phone).contains(needle)
        || record.record_number.contains(needle)
    {
        return true;
    }

    // Digit-run fallback: punctuation in stored numbers must not block a
    // digits-only search.
    !digit_needle.is_empty()
        && (digits(&record.phone).contains(digit_needle) || digits(&record.record_number).contains(digit_needle))
}

//! Identity assignment and duplicate resolution.
//!
//! Every surviving block needs a key that is unique within one parsed
//! collection, because the favorite projection addresses records by id.
//!
//! Preferred key: the record number, verbatim. Fallback (lax policy only):
//! a composite of the normalized display name and the phone's digit run.
//! The fallback is deterministic but not collision-proof, so duplicate ids
//! are resolved here by an explicit [`DuplicatePolicy`] instead of being
//! silently undefined:
//!
//! - `LastWins` (default): the later block replaces the earlier one; the
//!   survivor keeps the later block's position among survivors.
//! - `FirstWins`: the later block is ignored.
//!
//! Either way exactly one record per id remains and output order stays a
//! subsequence of input order.

use crate::api::{DirectoryRecord, DuplicatePolicy};
use crate::{RawFields, normalize};
use std::collections::HashMap;

/// Build the id for one block's fields.
pub(crate) fn assign(fields: &RawFields) -> String {
    if fields.record_number.is_empty() {
        format!("{}:{}", normalize::normalize(&fields.display_name), normalize::digits(&fields.phone))
    } else {
        fields.record_number.clone()
    }
}

/// Outcome of offering one record to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    Fresh,
    ReplacedEarlier,
    IgnoredDuplicate,
}

/// Collects records while enforcing id uniqueness under a policy.
pub(crate) struct Collector {
    policy: DuplicatePolicy,
    records: Vec<DirectoryRecord>,
    // id -> index into `records`; kept in sync on replacement.
    seen: HashMap<String, usize>,
}

impl Collector {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Collector { policy, records: Vec::new(), seen: HashMap::new() }
    }

    pub fn push(&mut self, record: DirectoryRecord) -> Admission {
        match self.seen.get(&record.id).copied() {
            None => {
                self.seen.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                Admission::Fresh
            }
            Some(_) if self.policy == DuplicatePolicy::FirstWins => Admission::IgnoredDuplicate,
            Some(idx) => {
                // The survivor takes the later block's position.
                self.records.remove(idx);
                for slot in self.seen.values_mut() {
                    if *slot > idx {
                        *slot -= 1;
                    }
                }
                self.seen.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                Admission::ReplacedEarlier
            }
        }
    }

    pub fn into_records(self) -> Vec<DirectoryRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fields::FieldMask;

    fn fields(name: &str, phone: &str, number: &str) -> RawFields {
        RawFields {
            display_name: name.to_string(),
            phone: phone.to_string(),
            record_number: number.to_string(),
            external_handle: String::new(),
            mask: FieldMask::empty(),
        }
    }

    fn record(id: &str, name: &str) -> DirectoryRecord {
        DirectoryRecord {
            id: id.to_string(),
            display_name: name.to_string(),
            phone: String::new(),
            record_number: String::new(),
            external_handle: String::new(),
            favorite: false,
        }
    }

    #[test]
    fn record_number_is_used_verbatim() {
        assert_eq!(assign(&fields("Ana", "123", "101")), "101");
    }

    #[test]
    fn composite_fallback_is_normalized() {
        assert_eq!(assign(&fields("María García", "11-5555-2020", "")), "maria garcia:1155552020");
    }

    #[test]
    fn last_wins_replaces_and_moves_to_later_position() {
        let mut c = Collector::new(DuplicatePolicy::LastWins);
        assert_eq!(c.push(record("1", "old")), Admission::Fresh);
        assert_eq!(c.push(record("2", "mid")), Admission::Fresh);
        assert_eq!(c.push(record("1", "new")), Admission::ReplacedEarlier);

        let out = c.into_records();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].display_name, "mid");
        assert_eq!(out[1].display_name, "new");
    }

    #[test]
    fn first_wins_keeps_the_earlier_record() {
        let mut c = Collector::new(DuplicatePolicy::FirstWins);
        c.push(record("1", "old"));
        assert_eq!(c.push(record("1", "new")), Admission::IgnoredDuplicate);

        let out = c.into_records();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].display_name, "old");
    }

    #[test]
    fn replacement_keeps_index_map_consistent() {
        let mut c = Collector::new(DuplicatePolicy::LastWins);
        c.push(record("a", "a1"));
        c.push(record("b", "b1"));
        c.push(record("a", "a2"));
        // "b" moved to index 0 after the removal; replacing it must still work.
        c.push(record("b", "b2"));

        let out = c.into_records();
        assert_eq!(out.iter().map(|r| r.display_name.as_str()).collect::<Vec<_>>(), vec!["a2", "b2"]);
    }
}

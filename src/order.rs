//! Display ordering.
//!
//! Splits a collection into the favorites group and the rest, each sorted
//! by the normalized display name. The sort key is diacritic-folded, so
//! "Ángela" collates with "angela"; records whose normalized names compare
//! equal keep their input order (the sort is stable, and no secondary
//! tie-break exists).
//!
//! Both groups are computed fresh on every call; nothing is cached against
//! later mutation.

use crate::api::DirectoryRecord;
use crate::normalize::normalize;

/// The two display groups, each independently ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouped {
    pub favorites: Vec<DirectoryRecord>,
    pub others: Vec<DirectoryRecord>,
}

/// Partition `records` by favorite flag and sort each group by normalized
/// display name.
pub fn order(records: &[DirectoryRecord]) -> Grouped {
    let (favorites, others): (Vec<_>, Vec<_>) = records.iter().cloned().partition(|r| r.favorite);

    Grouped { favorites: sorted(favorites), others: sorted(others) }
}

fn sorted(mut group: Vec<DirectoryRecord>) -> Vec<DirectoryRecord> {
    group.sort_by_cached_key(|r| normalize(&r.display_name));
    group
}

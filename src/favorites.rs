//! Favorite projection.
//!
//! The only mutation point in the crate, and even here the mutation is
//! functional: the input is never touched, a fresh collection comes back.
//! Callers hold "current records" themselves and feed the result back
//! through the filter/order pipeline.

use crate::api::DirectoryRecord;

/// Return a new collection with the `id`-matching record's favorite flag
/// negated.
///
/// An unknown `id` passes the collection through unchanged (no error), in
/// a fresh allocation either way. Toggling the same id twice restores the
/// original flag.
pub fn toggle_favorite(records: &[DirectoryRecord], id: &str) -> Vec<DirectoryRecord> {
    records
        .iter()
        .map(|r| {
            if r.id == id {
                let mut toggled = r.clone();
                toggled.favorite = !toggled.favorite;
                toggled
            } else {
                r.clone()
            }
        })
        .collect()
}

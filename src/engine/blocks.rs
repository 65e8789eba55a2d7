//! Block segmentation.
//!
//! Splits raw directory text into card-shaped chunks delimited by
//! `BEGIN:VCARD` / `END:VCARD` marker lines. This is pure string
//! segmentation: no field is interpreted here.
//!
//! Tolerances:
//!
//! - Text outside marker pairs (headers, blank lines, junk) is ignored.
//! - Marker lines may carry surrounding whitespace.
//! - A `BEGIN` with no matching `END` is dropped (the block never closed,
//!   so its extent is unknown).
//! - A stray `END` with no open block is ignored.
//! - A nested `BEGIN` before the previous `END` abandons the earlier open
//!   block and starts fresh from the inner marker.

use crate::{RawBlock, Range};

const BEGIN_MARKER: &str = "BEGIN:VCARD";
const END_MARKER: &str = "END:VCARD";

/// Segment `input` into blocks, preserving input order.
pub(crate) fn split(input: &str) -> Vec<RawBlock<'_>> {
    let mut out = Vec::new();
    // (block start offset, body start offset) of the currently open block.
    let mut open: Option<(usize, usize)> = None;
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let trimmed = line.trim();

        if trimmed == BEGIN_MARKER {
            open = Some((line_start, offset));
        } else if trimmed == END_MARKER {
            if let Some((start, body_start)) = open.take() {
                out.push(RawBlock {
                    range: Range { start, end: offset },
                    body: &input[body_start..line_start],
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_blocks_and_ignores_surrounding_text() {
        let text = "export v1\n\nBEGIN:VCARD\nFN:Ana\nEND:VCARD\njunk\nBEGIN:VCARD\nFN:Zoe\nEND:VCARD\n";
        let blocks = split(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body, "FN:Ana\n");
        assert_eq!(blocks[1].body, "FN:Zoe\n");
        assert!(blocks[0].range.start < blocks[1].range.start);
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let text = "BEGIN:VCARD\nFN:Ana\nEND:VCARD\nBEGIN:VCARD\nFN:Half\n";
        let blocks = split(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "FN:Ana\n");
    }

    #[test]
    fn stray_end_is_ignored() {
        let blocks = split("END:VCARD\nBEGIN:VCARD\nFN:Ana\nEND:VCARD\n");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn nested_begin_restarts_the_block() {
        let text = "BEGIN:VCARD\nFN:Lost\nBEGIN:VCARD\nFN:Ana\nEND:VCARD\n";
        let blocks = split(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "FN:Ana\n");
    }

    #[test]
    fn markers_tolerate_surrounding_whitespace() {
        let blocks = split("  BEGIN:VCARD  \nFN:Ana\n\tEND:VCARD\n");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn no_final_newline() {
        let blocks = split("BEGIN:VCARD\nFN:Ana\nEND:VCARD");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "FN:Ana\n");
    }

    #[test]
    fn empty_input() {
        assert!(split("").is_empty());
        assert!(split("nothing card-like here").is_empty());
    }
}

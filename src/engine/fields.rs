//! Field extraction.
//!
//! Per-block extraction is driven by two small descriptor tables rather than
//! one monolithic regex per source variant:
//!
//! - [`LINE_SPECS`]: line-anchored, label-matched fields (`FN:`, `TEL:`,
//!   `NOTE:`). Labels are case-sensitive; the first matching line wins.
//! - [`NOTE_SPECS`]: sub-fields mined from the free-text `NOTE` value
//!   (`Legajo: <digits>`, `Github: <handle>`). Keywords are
//!   case-insensitive.
//!
//! Each descriptor records which [`FieldMask`] bit it populates, so the
//! required-fields policy downstream is an explicit mask test instead of
//! being implied by regex structure. Extraction is best-effort: a descriptor
//! that does not match leaves its field empty and its bit clear, and the
//! block survives to the policy check.

use crate::RawFields;
use regex::Regex;

bitflags::bitflags! {
    /// Which fields a block yielded (non-empty after trimming).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldMask: u8 {
        const NAME          = 1 << 0;
        const PHONE         = 1 << 1;
        const NOTE          = 1 << 2;
        const RECORD_NUMBER = 1 << 3;
        const HANDLE        = 1 << 4;
    }
}

/// One extraction descriptor: a label for diagnostics, the pattern whose
/// first capture group is the value, the mask bit set when the value is
/// non-empty, and the slot the value is written to.
pub(crate) struct FieldSpec {
    pub name: &'static str,
    pub pattern: fn() -> &'static Regex,
    pub mask: FieldMask,
    pub write: fn(&mut RawFields, String),
}

/// Line-anchored fields, in presentation order. First matching line wins.
pub(crate) const LINE_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "display-name",
        pattern: || regex!(r"(?m)^FN:(.*)$"),
        mask: FieldMask::NAME,
        write: |f, v| f.display_name = v,
    },
    FieldSpec {
        name: "phone",
        pattern: || regex!(r"(?m)^TEL(?:;TYPE=[^:\r\n]*)?:(.*)$"),
        mask: FieldMask::PHONE,
        write: |f, v| f.phone = v,
    },
];

/// `NOTE` sub-fields, matched case-insensitively inside the note text.
pub(crate) const NOTE_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "record-number",
        pattern: || regex!(r"(?i)legajo\s*:\s*([0-9]+)"),
        mask: FieldMask::RECORD_NUMBER,
        write: |f, v| f.record_number = v,
    },
    FieldSpec {
        name: "external-handle",
        pattern: || regex!(r"(?i)github\s*:\s*([A-Za-z0-9][A-Za-z0-9_.-]*)"),
        mask: FieldMask::HANDLE,
        write: |f, v| f.external_handle = v,
    },
];

/// Extract all fields from one block body.
///
/// Never fails: unmatched descriptors leave empty strings behind.
pub(crate) fn extract(body: &str) -> RawFields {
    let mut fields = RawFields::default();
    let debug = std::env::var_os("CARDEX_DEBUG_BLOCKS").is_some();

    for spec in LINE_SPECS {
        apply(spec, body, &mut fields, debug);
    }

    let note = first_capture(regex!(r"(?m)^NOTE:(.*)$"), body);
    if let Some(note) = note {
        if !note.is_empty() {
            fields.mask |= FieldMask::NOTE;
        }
        for spec in NOTE_SPECS {
            apply(spec, &note, &mut fields, debug);
        }
    }

    fields
}

fn apply(spec: &FieldSpec, haystack: &str, fields: &mut RawFields, debug: bool) {
    let value = first_capture((spec.pattern)(), haystack).unwrap_or_default();
    if debug {
        eprintln!("[extract] {}={:?}", spec.name, value);
    }
    if !value.is_empty() {
        fields.mask |= spec.mask;
    }
    (spec.write)(fields, value);
}

/// First capture group of the first match, trimmed. `None` when the pattern
/// does not match at all (as opposed to matching an empty value).
fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack).map(|c| c.get(1).map_or("", |m| m.as_str()).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "FN:María García\nTEL;TYPE=CELL:11-5555-2020\nNOTE:Legajo: 101 - Github: mgarcia\n";

    #[test]
    fn extracts_all_fields() {
        let f = extract(BODY);
        assert_eq!(f.display_name, "María García");
        assert_eq!(f.phone, "11-5555-2020");
        assert_eq!(f.record_number, "101");
        assert_eq!(f.external_handle, "mgarcia");
        assert_eq!(
            f.mask,
            FieldMask::NAME | FieldMask::PHONE | FieldMask::NOTE | FieldMask::RECORD_NUMBER | FieldMask::HANDLE
        );
    }

    #[test]
    fn plain_tel_without_type_qualifier() {
        let f = extract("FN:Ana\nTEL:4444-0000\n");
        assert_eq!(f.phone, "4444-0000");
    }

    #[test]
    fn first_matching_line_wins() {
        let f = extract("FN:First\nFN:Second\nTEL:1\nTEL:2\n");
        assert_eq!(f.display_name, "First");
        assert_eq!(f.phone, "1");
    }

    #[test]
    fn labels_are_case_sensitive() {
        let f = extract("fn:lower\ntel:123\n");
        assert_eq!(f.display_name, "");
        assert_eq!(f.phone, "");
        assert!(f.mask.is_empty());
    }

    #[test]
    fn note_keywords_are_case_insensitive() {
        let f = extract("FN:Ana\nNOTE:LEGAJO:42 github: ana-dev\n");
        assert_eq!(f.record_number, "42");
        assert_eq!(f.external_handle, "ana-dev");
    }

    #[test]
    fn missing_fields_stay_empty() {
        let f = extract("FN:Ana\n");
        assert_eq!(f.phone, "");
        assert_eq!(f.record_number, "");
        assert_eq!(f.external_handle, "");
        assert_eq!(f.mask, FieldMask::NAME);
    }

    #[test]
    fn note_without_subfields() {
        let f = extract("FN:Ana\nNOTE:just some remarks\n");
        assert_eq!(f.mask, FieldMask::NAME | FieldMask::NOTE);
        assert_eq!(f.record_number, "");
    }
}

//! UTF-16 code unit sequence validation.

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;
const NON_CHARACTERS: std::ops::RangeInclusive<u16> = 0xFDD0..=0xFDEF;

/// Returns `true` if `units` contains no unpaired surrogate and no
/// non-character (`0xFFFE`, `0xFFFF`, `0xFDD0..=0xFDEF`).
#[must_use]
pub fn is_valid_utf16(units: &[u16]) -> bool {
    first_invalid_unit(units).is_none()
}

/// Returns the index of the first offending code unit, if any.
#[must_use]
pub fn first_invalid_unit(units: &[u16]) -> Option<usize> {
    let mut i = 0;
    while i < units.len() {
        let rest = &units[i..];

        // ASCII fast path.
        if rest.len() >= 8 && rest[..8].iter().all(|&unit| unit < 0x80) {
            i += 8;
            continue;
        }
        if rest.len() >= 4 && rest[..4].iter().all(|&unit| unit < 0x80) {
            i += 4;
            continue;
        }

        let unit = rest[0];
        if is_non_character(unit) {
            return Some(i);
        }
        if HIGH_SURROGATES.contains(&unit) {
            match rest.get(1) {
                Some(next) if LOW_SURROGATES.contains(next) => {
                    i += 2;
                    continue;
                }
                _ => return Some(i),
            }
        }
        if LOW_SURROGATES.contains(&unit) && (i == 0 || !HIGH_SURROGATES.contains(&units[i - 1]))
        {
            return Some(i);
        }
        i += 1;
    }
    None
}

fn is_non_character(unit: u16) -> bool {
    unit == 0xFFFE || unit == 0xFFFF || NON_CHARACTERS.contains(&unit)
}

//! Slot-oriented hex dumps.

use std::fmt::Write as _;

use cursor::{round8, SLOT_SIZE};
use wire::{
    ABSENT_MAGIC, CLASS_MAGIC, INSTANCE_MAGIC, OBJECT_MAGIC, OBJECT_PATH_MAGIC, PRESENT_MAGIC,
    PROPERTY_MAGIC, VALUE_MAGIC,
};

/// Widest line `hex_dump` produces.
const MAX_WIDTH: usize = 4096;

const LABELS: [(u32, &str); 8] = [
    (OBJECT_PATH_MAGIC, "object path"),
    (PROPERTY_MAGIC, "property"),
    (VALUE_MAGIC, "value"),
    (INSTANCE_MAGIC, "instance"),
    (CLASS_MAGIC, "class"),
    (OBJECT_MAGIC, "object"),
    (PRESENT_MAGIC, "present"),
    (ABSENT_MAGIC, "absent"),
];

/// Names the marker or sentinel at the start of `slot`, in either byte order.
fn slot_label(slot: &[u8]) -> Option<&'static str> {
    let head: [u8; 4] = slot.get(..4)?.try_into().ok()?;
    let magic = u32::from_ne_bytes(head);
    LABELS
        .iter()
        .find(|(m, _)| *m == magic || *m == magic.swap_bytes())
        .map(|(_, label)| *label)
}

/// Hex dump with `width` bytes per line, clamped to `1..=MAX_WIDTH` and
/// rounded up to whole slots.
///
/// Slots that start with a known marker or sentinel are annotated.
#[must_use]
pub fn hex_dump(bytes: &[u8], width: usize) -> String {
    let width = round8(width.clamp(1, MAX_WIDTH));
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(width).enumerate() {
        let _ = write!(out, "{:08x} ", line * width);
        for slot in chunk.chunks(SLOT_SIZE) {
            out.push(' ');
            for byte in slot {
                let _ = write!(out, "{byte:02x} ");
            }
        }
        let missing = width - chunk.len();
        let missing_slots = width / SLOT_SIZE - chunk.len().div_ceil(SLOT_SIZE);
        out.push_str(&" ".repeat(missing * 3 + missing_slots));

        out.push_str(" |");
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                char::from(b)
            } else {
                '.'
            }
        }));
        out.push('|');

        let labels: Vec<&str> = chunk.chunks(SLOT_SIZE).filter_map(slot_label).collect();
        if !labels.is_empty() {
            let _ = write!(out, " ; {}", labels.join(", "));
        }
        out.push('\n');
    }
    out
}

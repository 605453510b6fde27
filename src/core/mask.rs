//! Secret masking for prompts and listings.

use crate::core::constants::{MASK_MARKER, MASK_REVEAL};

/// Hide all but the last three characters of `value` behind a marker.
///
/// `"hunter2"` becomes `"****er2"`. A value no longer than the revealed tail
/// shows the marker alone, and an empty value stays empty.
pub fn mask(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let count = value.chars().count();
    if count <= MASK_REVEAL {
        return MASK_MARKER.to_string();
    }

    let tail: String = value.chars().skip(count - MASK_REVEAL).collect();
    format!("{}{}", MASK_MARKER, tail)
}

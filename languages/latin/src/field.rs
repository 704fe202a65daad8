//! Fixed-width field readers for the engine's columnar report lines.
//!
//! Every reader takes the remaining input and hands back what it read plus
//! the input left after it. `None` means the line does not have the expected
//! shape; it is never an error on its own.

/// A category value read from a fixed-width slot.
///
/// `value` is absent when the slot held an unknown code. `consumed` is the
/// number of bytes the slot occupied and `rest` always starts right after it,
/// whether or not a value was decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a, T> {
    pub value: Option<T>,
    pub consumed: usize,
    pub rest: &'a str,
}

impl<'a, T> Slot<'a, T> {
    /// Value and remaining input, for fields that must decode.
    pub fn required(self) -> Option<(T, &'a str)> {
        let rest = self.rest;
        self.value.map(|value| (value, rest))
    }

    /// Value-or-absent and remaining input, for fields that may be blank.
    pub fn optional(self) -> (Option<T>, &'a str) {
        (self.value, self.rest)
    }
}

/// Split off exactly `width` characters.
pub fn take(input: &str, width: usize) -> Option<(&str, &str)> {
    let end = byte_offset(input, width)?;
    Some(input.split_at(end))
}

/// Split off up to `width` characters, fewer if the input runs out.
pub fn take_up_to(input: &str, width: usize) -> (&str, &str) {
    let end = byte_offset(input, width).unwrap_or(input.len());
    input.split_at(end)
}

/// Split off a space-padded column of up to `width` characters.
///
/// When the padding runs into the next field, its last space is handed back
/// so the single-space separator that follows still lines up.
pub fn take_padded(input: &str, width: usize) -> (&str, &str) {
    let (raw, rest) = take_up_to(input, width);
    if raw.ends_with(' ') && !rest.is_empty() && !rest.starts_with(' ') {
        return input.split_at(raw.len() - 1);
    }
    (raw, rest)
}

/// Skip exactly `width` characters whatever they are.
pub fn skip(input: &str, width: usize) -> Option<&str> {
    take(input, width).map(|(_, rest)| rest)
}

/// Consume a literal prefix.
pub fn literal<'a>(input: &'a str, expected: &str) -> Option<&'a str> {
    input.strip_prefix(expected)
}

/// A single decimal digit, as used for the variety column.
pub fn digit(input: &str) -> Option<(u8, &str)> {
    let (slot, rest) = take(input, 1)?;
    let value = slot.chars().next()?.to_digit(10)?;
    Some((value as u8, rest))
}

fn byte_offset(input: &str, chars: usize) -> Option<usize> {
    if chars == 0 {
        return Some(0);
    }
    input
        .char_indices()
        .nth(chars - 1)
        .map(|(idx, c)| idx + c.len_utf8())
}

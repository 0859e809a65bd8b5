//! Edit splicing: building the would-be text of an in-progress field edit.
//!
//! A text-input host reports each keystroke as a replacement: a range of the
//! existing text (selection or cursor position) plus the characters being
//! inserted. [`compute_full_text`] performs that splice so the resulting
//! text can be run through a policy *before* the host commits it. Offsets
//! are in character units, not byte units, matching how hosts report
//! selection ranges.

use std::ops::Range;

use thiserror::Error;

/// Errors from edit splicing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// The replacement range falls outside the existing text. The edit must
    /// not be attempted; no partial splice is produced.
    #[error("replacement range {start}..{end} is out of bounds for text of {len} characters")]
    RangeOutOfBounds {
        /// Range start, in characters.
        start: usize,
        /// Range end, in characters.
        end: usize,
        /// Character count of the existing text.
        len: usize,
    },
}

/// One in-progress field edit, before it is accepted.
///
/// # Example
///
/// ```rust
/// use inputmask::EditRequest;
///
/// // The user types "4" with the cursor at the end of "555-123".
/// let edit = EditRequest {
///     existing_text: "555-123",
///     append_text: "4",
///     replacement_range: 7..7,
/// };
/// assert_eq!(edit.compute_full_text().unwrap(), "555-1234");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditRequest<'a> {
    /// Current full text of the field, possibly empty.
    pub existing_text: &'a str,
    /// Characters being inserted; empty for a pure deletion.
    pub append_text: &'a str,
    /// Character range of `existing_text` being replaced.
    pub replacement_range: Range<usize>,
}

impl EditRequest<'_> {
    /// Replaces `replacement_range` of the existing text with the append
    /// text and returns the resulting full string.
    pub fn compute_full_text(&self) -> Result<String, EditError> {
        compute_full_text(
            self.existing_text,
            self.append_text,
            self.replacement_range.clone(),
        )
    }
}

/// Replaces the characters in `range` of `existing_text` with `append_text`
/// and returns the resulting full string.
///
/// `range` is measured in character units. Fails with
/// [`EditError::RangeOutOfBounds`] when it does not lie within
/// `existing_text`.
pub fn compute_full_text(
    existing_text: &str,
    append_text: &str,
    range: Range<usize>,
) -> Result<String, EditError> {
    let chars: Vec<char> = existing_text.chars().collect();
    let len = chars.len();
    if range.start > range.end || range.end > len {
        return Err(EditError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }

    let mut full = String::with_capacity(existing_text.len() + append_text.len());
    full.extend(&chars[..range.start]);
    full.push_str(append_text);
    full.extend(&chars[range.end..]);
    Ok(full)
}

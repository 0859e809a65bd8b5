//! Validation and formatting rules for a single input field.
//!
//! This module provides [`ValidationPolicy`], the immutable configuration a
//! text-input host constructs once per field, and the operations it is driven
//! with on every keystroke. Policies are pure string evaluators: they hold no
//! field state and never perform I/O.

use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anchored grammar for a complete email address: a nonempty local part, one
/// `@`, dot-separated domain labels, and a TLD of at least two letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+@([A-Za-z0-9-]+\.)+[A-Za-z]{2}[A-Za-z]*$")
        .expect("email pattern compiles")
});

/// The kind of value a field holds.
///
/// The kind selects which branch of the shared evaluator applies; all other
/// behavior is data-driven through the policy's limit, divider, and group
/// boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PolicyKind {
    /// Free-form text that must end up a syntactically valid email address.
    Email,
    /// A plain run of digits with a fixed length.
    Integer,
    /// Digits with an optional `.` separator and up to two fraction digits.
    Decimal,
    /// A ten-digit phone number displayed as `(XXX)-XXX-XXXX`.
    Phone,
    /// A nine-digit social security number displayed as `XXX-XX-XXXX`.
    Ssn,
    /// A sixteen-digit card number displayed in groups of four.
    CreditCard,
    /// A six-digit `MM/DDYY` style date.
    Date,
}

/// Immutable per-field configuration: a kind tag plus the digit limit,
/// divider character, and group boundaries that drive formatting.
///
/// Construct one with a kind constructor such as [`ValidationPolicy::phone`]
/// and adjust it with the `with_*` builders. A policy is built once at field
/// setup and reused across every edit event; all methods take `&self` and the
/// type is `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use inputmask::ValidationPolicy;
///
/// let card = ValidationPolicy::credit_card();
/// assert_eq!(
///     card.to_display("1234567890123456").as_deref(),
///     Some("1234 5678 9012 3456"),
/// );
/// assert_eq!(card.to_canonical("1234 5678 9012 3456"), "1234567890123456");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationPolicy {
    /// Evaluator branch tag.
    kind: PolicyKind,
    /// Maximum count of significant characters. Unused by the email kind.
    digit_limit: usize,
    /// Character inserted between groups for display, if any.
    divider: Option<char>,
    /// Offsets at which the divider is inserted, measured against the
    /// progressively formatted string, strictly increasing.
    group_boundaries: Vec<usize>,
}

impl ValidationPolicy {
    /// An email field. No divider, no length cap; only completion is checked.
    #[must_use]
    pub fn email() -> Self {
        Self {
            kind: PolicyKind::Email,
            digit_limit: 0,
            divider: None,
            group_boundaries: Vec::new(),
        }
    }

    /// A plain digit run, four digits by default.
    #[must_use]
    pub fn integer() -> Self {
        Self {
            kind: PolicyKind::Integer,
            digit_limit: 4,
            divider: None,
            group_boundaries: Vec::new(),
        }
    }

    /// A decimal amount: up to six integer digits, an optional `.`, and up to
    /// two fraction digits. The limit caps the integer part only.
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            kind: PolicyKind::Decimal,
            digit_limit: 6,
            divider: None,
            group_boundaries: Vec::new(),
        }
    }

    /// A ten-digit phone number, `-` divided as `XXX-XXX-XXXX`.
    ///
    /// Once the formatted text grows past twelve characters the first group
    /// is additionally wrapped in parentheses.
    #[must_use]
    pub fn phone() -> Self {
        Self {
            kind: PolicyKind::Phone,
            digit_limit: 10,
            divider: Some('-'),
            group_boundaries: vec![3, 7],
        }
    }

    /// A nine-digit social security number, `-` divided as `XXX-XX-XXXX`.
    #[must_use]
    pub fn ssn() -> Self {
        Self {
            kind: PolicyKind::Ssn,
            digit_limit: 9,
            divider: Some('-'),
            group_boundaries: vec![3, 6],
        }
    }

    /// A sixteen-digit card number, space divided in groups of four.
    #[must_use]
    pub fn credit_card() -> Self {
        Self {
            kind: PolicyKind::CreditCard,
            digit_limit: 16,
            divider: Some(' '),
            group_boundaries: vec![4, 9, 14],
        }
    }

    /// A six-digit date, `/` divided after the first two digits.
    #[must_use]
    pub fn date() -> Self {
        Self {
            kind: PolicyKind::Date,
            digit_limit: 6,
            divider: Some('/'),
            group_boundaries: vec![2],
        }
    }

    /// Uses a specific digit limit.
    ///
    /// # Panics
    ///
    /// Panics if `digit_limit` is zero; numeric-family policies require a
    /// positive limit.
    #[must_use]
    pub fn with_digit_limit(mut self, digit_limit: usize) -> Self {
        assert!(digit_limit > 0, "digit limit must be positive");
        self.digit_limit = digit_limit;
        self
    }

    /// Uses a specific divider character.
    #[must_use]
    pub fn with_divider(mut self, divider: char) -> Self {
        self.divider = Some(divider);
        self
    }

    /// Uses specific group boundaries.
    ///
    /// Boundaries are offsets into the progressively formatted string and
    /// must be strictly increasing.
    #[must_use]
    pub fn with_group_boundaries(mut self, group_boundaries: Vec<usize>) -> Self {
        debug_assert!(
            group_boundaries.windows(2).all(|pair| pair[0] < pair[1]),
            "group boundaries must be strictly increasing",
        );
        self.group_boundaries = group_boundaries;
        self
    }

    /// Returns the policy's kind tag.
    pub fn kind(&self) -> PolicyKind {
        self.kind
    }

    /// Returns the maximum count of significant characters.
    pub fn digit_limit(&self) -> usize {
        self.digit_limit
    }

    /// Returns the display divider, if the kind has one.
    pub fn divider(&self) -> Option<char> {
        self.divider
    }

    /// Returns the configured group boundaries.
    pub fn group_boundaries(&self) -> &[usize] {
        &self.group_boundaries
    }

    /// Returns whether an in-progress text is still a legal partial value.
    ///
    /// A host calls this with the would-be full text on every keystroke and
    /// rejects the keystroke when the answer is `false`. Empty text is always
    /// acceptable mid-edit. Email fields accept anything in progress; the
    /// numeric family requires the canonical form to stay within the digit
    /// limit and consist of digits only.
    pub fn should_accept(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return true;
        }

        let canonical = self.to_canonical(candidate);
        match self.kind {
            PolicyKind::Email => true,
            PolicyKind::Decimal => self.accepts_decimal(&canonical),
            PolicyKind::Integer | PolicyKind::Phone | PolicyKind::Ssn | PolicyKind::CreditCard
            | PolicyKind::Date => {
                canonical.chars().count() <= self.digit_limit
                    && canonical.chars().all(|c| c.is_ascii_digit())
            }
        }
    }

    /// Returns whether the canonical form of `candidate` is a fully valid
    /// final value.
    ///
    /// Empty text is never complete. The numeric family requires exactly
    /// `digit_limit` digits; email requires a full syntactic address;
    /// decimal requires one to `digit_limit` integer digits, an optional
    /// separator, and at most two fraction digits.
    pub fn is_complete(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        let canonical = self.to_canonical(candidate);
        match self.kind {
            PolicyKind::Email => EMAIL_RE.is_match(&canonical),
            PolicyKind::Decimal => self.complete_decimal(&canonical),
            PolicyKind::Integer | PolicyKind::Phone | PolicyKind::Ssn | PolicyKind::CreditCard
            | PolicyKind::Date => {
                canonical.chars().count() == self.digit_limit
                    && canonical.chars().all(|c| c.is_ascii_digit())
            }
        }
    }

    /// Strips every divider occurrence from `display`, preserving the order
    /// of the significant characters.
    ///
    /// Phone policies also strip the parentheses their display form adds.
    /// Identity for kinds without a divider, and idempotent for all kinds.
    pub fn to_canonical(&self, display: &str) -> String {
        display
            .chars()
            .filter(|&c| Some(c) != self.divider)
            .filter(|&c| self.kind != PolicyKind::Phone || !matches!(c, '(' | ')'))
            .collect()
    }

    /// Re-inserts the divider at each configured group boundary and returns
    /// the display form, or `None` when `canonical` is empty.
    ///
    /// Input is canonicalized first, so already-formatted text is safe to
    /// pass. A boundary only takes effect once the formatted text has grown
    /// past it. Phone policies wrap the first group in parentheses once the
    /// formatted text is longer than twelve characters.
    pub fn to_display(&self, canonical: &str) -> Option<String> {
        if canonical.is_empty() {
            return None;
        }

        let canonical = self.to_canonical(canonical);
        let Some(divider) = self.divider else {
            return Some(canonical);
        };

        let mut formatted: Vec<char> = canonical.chars().collect();
        for &boundary in &self.group_boundaries {
            if formatted.len() > boundary {
                formatted.insert(boundary, divider);
            }
        }

        if self.kind == PolicyKind::Phone && formatted.len() > 12 {
            formatted.insert(0, '(');
            formatted.insert(4, ')');
        }

        Some(formatted.into_iter().collect())
    }

    /// Partial-value rule for the decimal kind, on canonical text.
    fn accepts_decimal(&self, text: &str) -> bool {
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        if !integer.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        if let Some(fraction) = fraction {
            if fraction.chars().count() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }
        }

        let integer_len = integer.chars().count();
        if integer_len > self.digit_limit {
            // An over-limit integer part is only tolerated when a separator
            // already clamps it to exactly the limit.
            return fraction.is_some() && integer_len == self.digit_limit;
        }
        true
    }

    /// Completion rule for the decimal kind, on canonical text.
    fn complete_decimal(&self, text: &str) -> bool {
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        let integer_len = integer.chars().count();
        if integer_len == 0 || integer_len > self.digit_limit {
            return false;
        }
        if !integer.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        match fraction {
            None => true,
            Some(fraction) => {
                fraction.chars().count() <= 2 && fraction.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

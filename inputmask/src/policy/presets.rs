//! Standard field presets: marker types and their default policies.
//!
//! This module provides:
//!
//! - **Marker types**: Zero-sized types like `PhoneNumber`, `CreditCard`,
//!   `Email` that name what kind of value a field holds.
//!
//! - **The trait**: [`FieldPolicy`] associates marker types with their
//!   concrete validation policies.
//!
//! # Custom Presets
//!
//! You can define your own field markers:
//!
//! ```rust
//! use inputmask::{FieldPolicy, ValidationPolicy};
//!
//! #[derive(Clone, Copy)]
//! struct ZipCode;
//!
//! impl FieldPolicy for ZipCode {
//!     fn policy() -> ValidationPolicy {
//!         ValidationPolicy::integer().with_digit_limit(5)
//!     }
//! }
//!
//! assert!(ZipCode::policy().is_complete("90210"));
//! ```

use super::rules::ValidationPolicy;

// =============================================================================
// FieldPolicy trait
// =============================================================================

/// Associates a field marker type with a concrete validation policy.
///
/// The policy is defined per marker type and is independent of runtime
/// context.
pub trait FieldPolicy {
    /// Returns the policy for this marker type.
    fn policy() -> ValidationPolicy;
}

// =============================================================================
// Marker types and their policy implementations
// =============================================================================

/// Field marker for email addresses.
///
/// Accepts anything mid-edit; complete once the text is a syntactically
/// valid address (e.g. `"a@b.com"`).
#[derive(Clone, Copy)]
pub struct Email;

impl FieldPolicy for Email {
    fn policy() -> ValidationPolicy {
        ValidationPolicy::email()
    }
}

/// Field marker for plain digit runs such as PINs or codes.
///
/// Four digits by default; adjust with
/// [`ValidationPolicy::with_digit_limit`].
#[derive(Clone, Copy)]
pub struct Integer;

impl FieldPolicy for Integer {
    fn policy() -> ValidationPolicy {
        ValidationPolicy::integer()
    }
}

/// Field marker for decimal amounts.
///
/// Up to six integer digits, an optional `.`, and at most two fraction
/// digits (e.g. `"123456.78"`).
#[derive(Clone, Copy)]
pub struct Decimal;

impl FieldPolicy for Decimal {
    fn policy() -> ValidationPolicy {
        ValidationPolicy::decimal()
    }
}

/// Field marker for ten-digit phone numbers.
///
/// Displays as `"555-123-4567"`.
#[derive(Clone, Copy)]
pub struct PhoneNumber;

impl FieldPolicy for PhoneNumber {
    fn policy() -> ValidationPolicy {
        ValidationPolicy::phone()
    }
}

/// Field marker for nine-digit social security numbers.
///
/// Displays as `"123-45-6789"`.
#[derive(Clone, Copy)]
pub struct SocialSecurity;

impl FieldPolicy for SocialSecurity {
    fn policy() -> ValidationPolicy {
        ValidationPolicy::ssn()
    }
}

/// Field marker for sixteen-digit card numbers.
///
/// Displays as `"1234 5678 9012 3456"`.
#[derive(Clone, Copy)]
pub struct CreditCard;

impl FieldPolicy for CreditCard {
    fn policy() -> ValidationPolicy {
        ValidationPolicy::credit_card()
    }
}

/// Field marker for six-digit dates.
///
/// Displays with a `/` after the first group (e.g. `"12/3199"`).
#[derive(Clone, Copy)]
pub struct ExpiryDate;

impl FieldPolicy for ExpiryDate {
    fn policy() -> ValidationPolicy {
        ValidationPolicy::date()
    }
}

// =============================================================================
// Tests
// =============================================================================

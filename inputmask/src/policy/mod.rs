//! Validation policies: the per-field configuration and its evaluator.
//!
//! This module provides:
//!
//! - **Rules** (`rules`): the [`ValidationPolicy`] value (a [`PolicyKind`] tag
//!   plus digit limit, divider, and group boundaries) and the four operations
//!   a text-input host drives it with: `should_accept`, `is_complete`,
//!   `to_canonical`, `to_display`.
//!
//! - **Presets** (`presets`): zero-sized marker types like `PhoneNumber` and
//!   `CreditCard` that name what a field holds, along with the
//!   [`FieldPolicy`] trait mapping each marker to its default policy.
//!
//! # Example
//!
//! ```rust
//! use inputmask::{FieldPolicy, SocialSecurity, ValidationPolicy};
//!
//! // Built-in markers carry the standard defaults
//! let policy = SocialSecurity::policy();
//! assert_eq!(policy.to_display("123456789").as_deref(), Some("123-45-6789"));
//!
//! // Or configure a policy directly
//! let pin = ValidationPolicy::integer().with_digit_limit(6);
//! assert!(!pin.is_complete("1234"));
//! assert!(pin.is_complete("123456"));
//! ```

pub mod presets;
pub mod rules;

// Re-export everything at the module level for convenience
pub use presets::{
    CreditCard, Decimal, Email, ExpiryDate, FieldPolicy, Integer, PhoneNumber, SocialSecurity,
};
pub use rules::{PolicyKind, ValidationPolicy};

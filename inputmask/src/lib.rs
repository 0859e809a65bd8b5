//! Keystroke-level validation and display formatting for masked input fields.
//!
//! This crate separates:
//! - **Policies**: what a field holds (e.g. a phone number, an SSN, a card
//!   number) and how its canonical digits map to a displayed, divided form.
//! - **Edits**: the splice a text-input host is about to commit on a
//!   keystroke, before it is accepted.
//!
//! A host drives one [`ValidationPolicy`] per field:
//! 1. On every keystroke, build the would-be text with [`compute_full_text`]
//!    and ask [`ValidationPolicy::should_accept`]; reject the keystroke if
//!    the answer is `false`.
//! 2. On accepted input, refresh the visible text via
//!    [`ValidationPolicy::to_canonical`] then [`ValidationPolicy::to_display`],
//!    and gate the submit action on [`ValidationPolicy::is_complete`].
//!
//! ```rust
//! use inputmask::ValidationPolicy;
//!
//! let phone = ValidationPolicy::phone();
//! assert!(phone.should_accept("555123"));
//! assert_eq!(phone.to_display("5551234567").as_deref(), Some("555-123-4567"));
//! assert!(phone.is_complete("555-123-4567"));
//! ```
//!
//! What this crate does not do:
//! - perform I/O, logging, or rendering
//! - own any widget or text-field state; every operation is a pure function
//!   of its inputs and the policy

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::use_self
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod edit;
pub mod policy;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from the edit module
pub use edit::{EditError, EditRequest, compute_full_text};
// Re-exports from the policy module
pub use policy::{
    CreditCard, Decimal, Email, ExpiryDate, FieldPolicy, Integer, PhoneNumber, PolicyKind,
    SocialSecurity, ValidationPolicy,
};
#[cfg(feature = "tracing")]
pub use tracing::{PolicyTraceExt, TracedPolicy};

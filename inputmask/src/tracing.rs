//! Adapters for observing field edits through `tracing`.
//!
//! The core policy operations stay pure and silent; this module wraps a
//! policy so that edit outcomes are emitted as `tracing` events. Events
//! carry the field label, policy kind, character counts, and outcomes only.
//! The text itself is never logged: masked fields hold exactly the values
//! (phone, SSN, card numbers) that must stay out of telemetry.
//!
//! # Example
//!
//! ```rust
//! use inputmask::{PolicyTraceExt, ValidationPolicy};
//!
//! let phone = ValidationPolicy::phone().traced("billing.phone");
//! assert!(phone.should_accept("555123"));
//! assert!(!phone.is_complete("555123"));
//! ```

use crate::policy::ValidationPolicy;

/// Extension trait for wrapping a policy in a [`TracedPolicy`].
pub trait PolicyTraceExt {
    /// Wraps the policy so edit outcomes are emitted as `tracing` events
    /// attributed to `field`.
    fn traced(self, field: &'static str) -> TracedPolicy;
}

impl PolicyTraceExt for ValidationPolicy {
    fn traced(self, field: &'static str) -> TracedPolicy {
        TracedPolicy {
            policy: self,
            field,
        }
    }
}

/// A [`ValidationPolicy`] that reports edit outcomes through `tracing`.
///
/// Delegates every operation to the wrapped policy. Rejected edits are
/// emitted at debug level; everything else at trace level.
#[derive(Clone, Debug)]
pub struct TracedPolicy {
    policy: ValidationPolicy,
    field: &'static str,
}

impl TracedPolicy {
    /// Returns a reference to the wrapped policy.
    pub fn inner(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Unwraps back into the plain policy.
    pub fn into_inner(self) -> ValidationPolicy {
        self.policy
    }

    /// See [`ValidationPolicy::should_accept`].
    pub fn should_accept(&self, candidate: &str) -> bool {
        let accepted = self.policy.should_accept(candidate);
        if accepted {
            tracing::trace!(
                field = self.field,
                kind = ?self.policy.kind(),
                chars = candidate.chars().count(),
                "edit accepted"
            );
        } else {
            tracing::debug!(
                field = self.field,
                kind = ?self.policy.kind(),
                chars = candidate.chars().count(),
                "edit rejected"
            );
        }
        accepted
    }

    /// See [`ValidationPolicy::is_complete`].
    pub fn is_complete(&self, candidate: &str) -> bool {
        let complete = self.policy.is_complete(candidate);
        tracing::trace!(
            field = self.field,
            kind = ?self.policy.kind(),
            chars = candidate.chars().count(),
            complete,
            "completion checked"
        );
        complete
    }

    /// See [`ValidationPolicy::to_canonical`].
    pub fn to_canonical(&self, display: &str) -> String {
        self.policy.to_canonical(display)
    }

    /// See [`ValidationPolicy::to_display`].
    pub fn to_display(&self, canonical: &str) -> Option<String> {
        self.policy.to_display(canonical)
    }
}

//! Degradation-aware result wrapper.
//!
//! External collaborators (the chain node, the coaching model) are allowed
//! to degrade to a locally computed substitute instead of failing. Callers
//! still need to tell a degraded answer apart from a genuine one, so the
//! substitution is carried in the type rather than swallowed at the call
//! site.

use serde::{Deserialize, Serialize};

/// A value that was either obtained from its authoritative source or
/// substituted with a fallback.
///
/// Hard failures stay on the `Err` side of `Result<Sourced<T>>`; `Fallback`
/// is reserved for cases where a usable substitute exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "source")]
pub enum Sourced<T> {
    /// The value came from the authoritative source.
    Fresh(T),
    /// The authoritative source was unavailable or unusable; `value` is a
    /// substitute and `reason` records why.
    Fallback { value: T, reason: String },
}

impl<T> Sourced<T> {
    /// The carried value, regardless of provenance.
    pub fn value(&self) -> &T {
        match self {
            Sourced::Fresh(v) => v,
            Sourced::Fallback { value, .. } => value,
        }
    }

    /// Consume and return the carried value.
    pub fn into_value(self) -> T {
        match self {
            Sourced::Fresh(v) => v,
            Sourced::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback { .. })
    }

    /// The degradation reason, if any.
    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            Sourced::Fresh(_) => None,
            Sourced::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Map the carried value, preserving provenance.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sourced<U> {
        match self {
            Sourced::Fresh(v) => Sourced::Fresh(f(v)),
            Sourced::Fallback { value, reason } => Sourced::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}

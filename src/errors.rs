//! Policy Error Definitions
//!
//! This module defines the error types raised by the policy builders.
//! Typed setters reject mismatched policies at compile time; the errors here
//! cover the dynamic paths used by declarative loaders.

use thiserror::Error;

use crate::types::PolicyKind;

/// Result type alias for policy builder operations
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Base error type for all policy builder errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A policy of one kind was assigned to a slot of another kind
    #[error("Type mismatch: cannot assign a {found} policy to the {slot} policy slot")]
    TypeMismatch {
        /// Kind of the slot being assigned
        slot: PolicyKind,
        /// Kind of the policy that was supplied
        found: PolicyKind,
    },

    /// A policy kind name did not match any known operation kind
    #[error("Unknown policy kind: {0}")]
    UnknownPolicyKind(String),
}

impl PolicyError {
    /// Returns true if this error reports a policy/slot kind mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, PolicyError::TypeMismatch { .. })
    }
}

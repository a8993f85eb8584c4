//! Error types for the vapor address engine.

use thiserror::Error;

/// Errors surfaced to callers of the derivation engine.
///
/// Every operation is all-or-nothing: no partial results are ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VaporError {
    /// The recipient is not valid base58 or does not decode to 32 bytes.
    /// Fails immediately; retrying with the same input cannot succeed.
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),

    /// The rejection-sampling loop exhausted its attempt budget. With a
    /// correct implementation this has probability ~2^-100; the caller
    /// should retry the whole operation.
    #[error("failed to derive a vapor address after {0} attempts")]
    AddressGenerationFailed(u32),

    /// A secret hex string could not be parsed, or encodes a value outside
    /// the scalar field.
    #[error("invalid secret encoding: {0}")]
    InvalidSecret(String),
}

/// Internal field-arithmetic failures.
///
/// These are recovered inside the derivation loop by resampling the secret
/// and are never surfaced through the public API.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The element is congruent to zero and has no modular inverse.
    #[error("element has no modular inverse")]
    NoInverse,

    /// The element is not a quadratic residue modulo the prime.
    #[error("element has no modular square root")]
    NoSquareRoot,
}

//! Obscura vapor address engine.
//!
//! Derives "vapor addresses": valid ed25519 curve points for which no
//! private key is known, used as one-time unspendable deposit targets in
//! the Obscura privacy protocol. An address is found by hashing the
//! recipient's wallet key together with a fresh secret into a candidate
//! x-coordinate and rejection-sampling until the curve equation admits a
//! y - see [`derive::generate_vapor_address`].
//!
//! The engine is pure computation: no I/O, no retained state across
//! calls beyond consumed OS entropy. Persistence and settlement are the
//! caller's concern.

pub mod constants;
pub mod derive;
mod error;
pub mod field;
pub mod hash;
pub mod pack;
pub mod point;
pub mod validate;

pub use derive::{
    generate_vapor_address, generate_vapor_address_with_rng, hex_to_secret, secret_to_hex,
    Derivation, VaporAddress, MAX_ATTEMPTS,
};
pub use error::{FieldError, VaporError};
pub use point::CurvePoint;
pub use validate::validate_vapor_address;

#[cfg(test)]
mod test_vectors;

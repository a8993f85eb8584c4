//! Syntactic validation of vapor addresses.

use crate::point::CurvePoint;

/// Check that a base58 string decodes to 32 bytes that decompress to a
/// valid curve point.
///
/// This is syntactic curve validity only: it does not prove the address
/// was derived from any particular (recipient, secret) pair - no binding
/// proof exists in this engine.
pub fn validate_vapor_address(address: &str) -> bool {
    let Ok(decoded) = bs58::decode(address).into_vec() else {
        return false;
    };
    let Ok(bytes) = <[u8; 32]>::try_from(decoded) else {
        return false;
    };
    CurvePoint::decompress(&bytes).is_some()
}

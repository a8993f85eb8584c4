//! Vapor address derivation: hash-to-curve by bounded rejection sampling.
//!
//! Each attempt samples a fresh secret, hashes it with the recipient into
//! a candidate x-coordinate, and tries to solve the curve equation for y.
//! Roughly half of all x values admit no y - that rejection is intrinsic
//! to hash-to-curve, and the loop simply resamples. The attempt bound is
//! explicit so the failure path stays independently testable.

use log::debug;
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::constants::{BN254_R, ED25519_P};
use crate::error::VaporError;
use crate::field::reduce;
use crate::hash::scalar_hash;
use crate::pack::pack_bytes;
use crate::point::{solve_y, CurvePoint};

/// Attempt budget for the rejection loop. Each attempt succeeds with
/// probability ~1/2, so exhausting the budget has probability ~2^-100.
pub const MAX_ATTEMPTS: u32 = 100;

/// A derived vapor address. Immutable once produced; the caller alone
/// decides whether and where the secret is persisted.
#[derive(Debug, Clone)]
pub struct VaporAddress {
    /// Base58 encoding of the compressed point.
    pub address: String,
    /// The 32-byte compressed point.
    pub address_bytes: [u8; 32],
    /// The scalar-field secret consumed by this derivation.
    pub secret: BigUint,
    /// "0x" + 64 lowercase hex digits, big-endian, left-zero-padded.
    pub secret_hex: String,
    /// The recipient input, echoed back.
    pub recipient: String,
}

/// Outcome of the bounded rejection-sampling loop.
#[derive(Debug, Clone)]
pub enum Derivation {
    /// A valid curve point was found within the budget.
    Found {
        secret: BigUint,
        point: CurvePoint,
        address_bytes: [u8; 32],
        attempts: u32,
    },
    /// Every attempt was rejected.
    Exhausted { attempts: u32 },
}

/// Sample a field element over R: 32 CSPRNG bytes, big-endian, reduced.
fn random_field_element<R: RngCore>(rng: &mut R) -> BigUint {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    let value = BigUint::from_bytes_be(&bytes);
    bytes.zeroize();
    reduce(&value, &BN254_R)
}

/// Decode and length-check a base58 recipient key.
fn decode_recipient(recipient: &str) -> Result<[u8; 32], VaporError> {
    let decoded = bs58::decode(recipient)
        .into_vec()
        .map_err(|e| VaporError::InvalidRecipient(e.to_string()))?;
    decoded.try_into().map_err(|v: Vec<u8>| {
        VaporError::InvalidRecipient(format!("expected 32 bytes, got {}", v.len()))
    })
}

/// Run the rejection-sampling loop over an injected RNG.
///
/// `recipient_fields` must hold at least the two packed chunks of a
/// 32-byte recipient key; they are reused across attempts while the
/// secret is resampled. Pure aside from consumed entropy: no I/O, no
/// retained state between calls.
pub fn derive_point<R: RngCore>(
    recipient_fields: &[BigUint],
    rng: &mut R,
    max_attempts: u32,
) -> Derivation {
    let p = &*ED25519_P;

    for attempt in 1..=max_attempts {
        let secret = random_field_element(rng);

        let digest = scalar_hash(&[
            recipient_fields[0].clone(),
            recipient_fields[1].clone(),
            secret.clone(),
        ]);
        let x = reduce(&digest, p);

        let y = match solve_y(&x) {
            Some(y) => y,
            None => {
                debug!("attempt {attempt}: no y for candidate x, resampling");
                continue;
            }
        };

        // One secure random bit picks the sign of y. Safe: neither sign
        // corresponds to a known private key.
        let mut sign = [0u8; 1];
        rng.fill_bytes(&mut sign);
        let final_y = if sign[0] & 1 == 1 { (p - &y) % p } else { y };

        let point = CurvePoint::new(x, final_y);
        let address_bytes = point.compress();

        // Defensive round-trip: decode what was just encoded and require
        // the identical point and bytes back.
        match CurvePoint::decompress(&address_bytes) {
            Some(back) if back == point => {
                let recompressed = back.compress();
                if bool::from(recompressed.ct_eq(&address_bytes)) {
                    return Derivation::Found {
                        secret,
                        point,
                        address_bytes,
                        attempts: attempt,
                    };
                }
                debug!("attempt {attempt}: re-compression mismatch, resampling");
            }
            _ => {
                debug!("attempt {attempt}: round-trip decode failed, resampling");
            }
        }
    }

    Derivation::Exhausted {
        attempts: max_attempts,
    }
}

/// Derive a vapor address for `recipient` using the OS CSPRNG.
pub fn generate_vapor_address(recipient: &str) -> Result<VaporAddress, VaporError> {
    generate_vapor_address_with_rng(recipient, &mut OsRng)
}

/// Derive a vapor address with a caller-supplied RNG.
///
/// All-or-nothing: either a fully formed [`VaporAddress`] or an error,
/// never a partial result.
pub fn generate_vapor_address_with_rng<R: RngCore>(
    recipient: &str,
    rng: &mut R,
) -> Result<VaporAddress, VaporError> {
    let recipient_bytes = decode_recipient(recipient)?;
    let fields = pack_bytes(&recipient_bytes);

    match derive_point(&fields, rng, MAX_ATTEMPTS) {
        Derivation::Found {
            secret,
            address_bytes,
            attempts,
            ..
        } => {
            debug!("vapor address derived in {attempts} attempt(s)");
            Ok(VaporAddress {
                address: bs58::encode(&address_bytes).into_string(),
                address_bytes,
                secret_hex: secret_to_hex(&secret),
                secret,
                recipient: recipient.to_string(),
            })
        }
        Derivation::Exhausted { attempts } => Err(VaporError::AddressGenerationFailed(attempts)),
    }
}

/// Encode a scalar-field secret as "0x" + 64 lowercase hex digits
/// (big-endian, left-zero-padded).
pub fn secret_to_hex(secret: &BigUint) -> String {
    let be = secret.to_bytes_be();
    let mut buf = [0u8; 32];
    buf[32 - be.len()..].copy_from_slice(&be);
    format!("0x{}", hex::encode(buf))
}

/// Parse a secret hex string back into a field element in [0, R).
///
/// Exact inverse of [`secret_to_hex`]; rejects non-hex input, over-length
/// strings, and values outside the field.
pub fn hex_to_secret(hex: &str) -> Result<BigUint, VaporError> {
    let cleaned = hex.strip_prefix("0x").unwrap_or(hex);
    if cleaned.is_empty() || cleaned.len() > 64 {
        return Err(VaporError::InvalidSecret(format!(
            "expected between 1 and 64 hex digits, got {}",
            cleaned.len()
        )));
    }

    let value = BigUint::parse_bytes(cleaned.as_bytes(), 16)
        .ok_or_else(|| VaporError::InvalidSecret("not valid hexadecimal".into()))?;

    if value >= *BN254_R {
        return Err(VaporError::InvalidSecret(
            "value outside the scalar field".into(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn zero_recipient() -> String {
        bs58::encode(&[0u8; 32]).into_string()
    }

    #[test]
    fn derivation_succeeds_for_zero_recipient() {
        let result = generate_vapor_address(&zero_recipient()).expect("within 100 attempts");

        assert_eq!(result.recipient, zero_recipient());
        assert_eq!(result.secret_hex.len(), 66);
        assert!(result.secret_hex.starts_with("0x"));
        assert!(result.secret_hex[2..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(CurvePoint::decompress(&result.address_bytes).is_some());
        assert_eq!(
            bs58::decode(&result.address).into_vec().unwrap(),
            result.address_bytes
        );
    }

    #[test]
    fn invalid_recipients_rejected() {
        let short = bs58::encode(&[1u8; 31]).into_string();
        let long = bs58::encode(&[1u8; 33]).into_string();
        for bad in ["not-base58-!!!", short.as_str(), long.as_str(), ""] {
            match generate_vapor_address(bad) {
                Err(VaporError::InvalidRecipient(_)) => {}
                other => panic!("expected InvalidRecipient for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn seeded_rng_reproduces_derivation() {
        let fields = pack_bytes(&[7u8; 32]);
        let a = derive_point(&fields, &mut ChaCha20Rng::seed_from_u64(42), MAX_ATTEMPTS);
        let b = derive_point(&fields, &mut ChaCha20Rng::seed_from_u64(42), MAX_ATTEMPTS);
        match (a, b) {
            (
                Derivation::Found {
                    address_bytes: ab_a,
                    secret: s_a,
                    ..
                },
                Derivation::Found {
                    address_bytes: ab_b,
                    secret: s_b,
                    ..
                },
            ) => {
                assert_eq!(ab_a, ab_b);
                assert_eq!(s_a, s_b);
            }
            other => panic!("expected two Found outcomes, got {:?}", other),
        }
    }

    #[test]
    fn zero_attempt_budget_exhausts() {
        let fields = pack_bytes(&[0u8; 32]);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        match derive_point(&fields, &mut rng, 0) {
            Derivation::Exhausted { attempts } => assert_eq!(attempts, 0),
            other => panic!("expected Exhausted, got {:?}", other),
        }
    }

    #[test]
    fn secret_hex_round_trip() {
        let secret = BigUint::from(0xdeadbeefu32);
        let hex = secret_to_hex(&secret);
        assert_eq!(
            hex,
            "0x00000000000000000000000000000000000000000000000000000000deadbeef"
        );
        assert_eq!(hex_to_secret(&hex).unwrap(), secret);

        let zero_hex = secret_to_hex(&BigUint::zero());
        assert_eq!(zero_hex.len(), 66);
        assert_eq!(hex_to_secret(&zero_hex).unwrap(), BigUint::zero());
    }

    #[test]
    fn hex_to_secret_rejects_malformed_input() {
        assert!(matches!(
            hex_to_secret("0xzz"),
            Err(VaporError::InvalidSecret(_))
        ));
        assert!(matches!(
            hex_to_secret(""),
            Err(VaporError::InvalidSecret(_))
        ));
        let too_long = format!("0x{}", "0".repeat(65));
        assert!(matches!(
            hex_to_secret(&too_long),
            Err(VaporError::InvalidSecret(_))
        ));
        // R itself is out of range; R - 1 is the last valid secret.
        let r_hex = format!("0x{:064x}", &*BN254_R);
        assert!(matches!(
            hex_to_secret(&r_hex),
            Err(VaporError::InvalidSecret(_))
        ));
        let max = &*BN254_R - 1u32;
        assert_eq!(hex_to_secret(&secret_to_hex(&max)).unwrap(), max);
    }

    #[test]
    fn secrets_stay_in_field() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        for _ in 0..32 {
            assert!(random_field_element(&mut rng) < *BN254_R);
        }
    }
}

//! Twisted Edwards points and the 32-byte compressed wire encoding.
//!
//! The encoding is the ed25519 format: little-endian y with the top bit of
//! the final byte carrying the parity of x. Decompression recovers x from
//! the curve equation `-x^2 + y^2 = 1 + d*x^2*y^2`.

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::{ED25519_D, ED25519_P};
use crate::field::{mod_add, mod_inverse, mod_mul, mod_sqrt, mod_sub, reduce};

/// An affine point on the ed25519 twisted Edwards curve.
///
/// Only the curve equation is guaranteed; subgroup membership is neither
/// checked nor needed for vapor addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl CurvePoint {
    /// Build a point, canonicalizing both coordinates mod P.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        let p = &*ED25519_P;
        Self {
            x: reduce(&x, p),
            y: reduce(&y, p),
        }
    }

    /// Check the curve equation `-x^2 + y^2 = 1 + d*x^2*y^2 (mod p)`.
    pub fn is_on_curve(&self) -> bool {
        let p = &*ED25519_P;
        let x2 = mod_mul(&self.x, &self.x, p);
        let y2 = mod_mul(&self.y, &self.y, p);
        let lhs = mod_sub(&y2, &x2, p);
        let dx2y2 = mod_mul(&mod_mul(&ED25519_D, &x2, p), &y2, p);
        let rhs = mod_add(&BigUint::one(), &dx2y2, p);
        lhs == rhs
    }

    /// Compress to 32 bytes: little-endian y, x's parity in the high bit
    /// of the last byte.
    pub fn compress(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let le = self.y.to_bytes_le();
        out[..le.len()].copy_from_slice(&le);
        if self.x.bit(0) {
            out[31] |= 0x80;
        }
        out
    }

    /// Decompress a 32-byte encoding.
    ///
    /// Returns None for y >= p, a zero denominator, or a y with no valid x
    /// on the curve.
    pub fn decompress(bytes: &[u8; 32]) -> Option<CurvePoint> {
        let p = &*ED25519_P;

        let x_sign = bytes[31] & 0x80 != 0;
        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;

        let y = BigUint::from_bytes_le(&y_bytes);
        if &y >= p {
            return None;
        }

        // x^2 = (y^2 - 1) / (d*y^2 + 1)
        let y2 = mod_mul(&y, &y, p);
        let num = mod_sub(&y2, &BigUint::one(), p);
        let den = mod_add(&mod_mul(&ED25519_D, &y2, p), &BigUint::one(), p);
        let den_inv = mod_inverse(&den, p).ok()?;
        let x2 = mod_mul(&num, &den_inv, p);

        let mut x = mod_sqrt(&x2, p).ok()?;
        if x.bit(0) != x_sign {
            x = (p - &x) % p;
        }

        Some(CurvePoint { x, y })
    }
}

/// Solve `y^2 = (1 + x^2) / (1 - d*x^2)` for y.
///
/// None when the denominator vanishes or y^2 is a non-residue; roughly
/// half of all x values fail, which drives the derivation resampling loop.
pub fn solve_y(x: &BigUint) -> Option<BigUint> {
    let p = &*ED25519_P;
    let x = reduce(x, p);
    let x2 = mod_mul(&x, &x, p);

    let num = mod_add(&BigUint::one(), &x2, p);
    let den = mod_sub(&BigUint::one(), &mod_mul(&ED25519_D, &x2, p), p);
    let den_inv = mod_inverse(&den, p).ok()?;
    let y2 = mod_mul(&num, &den_inv, p);

    mod_sqrt(&y2, p).ok()
}

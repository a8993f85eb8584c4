//! Modular arithmetic over the engine's two prime fields.
//!
//! Every function canonicalizes its operands into `[0, modulus)` before
//! computing and returns a canonical result, so callers may pass values
//! from either field boundary without pre-reducing.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::FieldError;

/// Canonically reduce `a` into `[0, m)`.
pub fn reduce(a: &BigUint, m: &BigUint) -> BigUint {
    a % m
}

/// `(a + b) mod m`.
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + (b % m)) % m
}

/// `(a - b) mod m`, wrapping into the field.
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + m - (b % m)) % m
}

/// `(a * b) mod m`.
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) * (b % m)) % m
}

/// `base^exp mod m` by square-and-multiply.
pub fn mod_pow(base: &BigUint, exp: &BigUint, m: &BigUint) -> BigUint {
    (base % m).modpow(exp, m)
}

/// Modular inverse via the extended Euclidean algorithm.
///
/// Signals [`FieldError::NoInverse`] when `a ≡ 0 (mod m)` (or, for a
/// composite modulus, when `gcd(a, m) ≠ 1`).
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, FieldError> {
    let a = a % m;
    if a.is_zero() {
        return Err(FieldError::NoInverse);
    }

    // Track only the Bezout coefficient of `a`; the gcd remainder sequence
    // runs over signed integers.
    let mut old_r = BigInt::from(a);
    let mut r = BigInt::from(m.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(FieldError::NoInverse);
    }

    let m_int = BigInt::from(m.clone());
    let inv = ((old_s % &m_int) + &m_int) % &m_int;
    // Non-negative after the wrap above.
    Ok(inv.to_biguint().expect("inverse is canonical"))
}

/// Legendre symbol `n^((p-1)/2) mod p`: 1 for residues, p-1 for
/// non-residues, 0 for zero.
pub fn legendre_symbol(n: &BigUint, p: &BigUint) -> BigUint {
    let exp = (p - BigUint::one()) >> 1;
    mod_pow(n, &exp, p)
}

/// Modular square root for primes `p ≡ 5 (mod 8)`.
///
/// Rejects non-residues up front via the Legendre symbol, then computes
/// `n^((p+3)/8)` and, if that root squares to `-n`, corrects it by the
/// fourth root of unity `2^((p-1)/4)`. Returns the root whose parity is
/// whatever the exponentiation produced; callers pick a sign themselves.
pub fn mod_sqrt(n: &BigUint, p: &BigUint) -> Result<BigUint, FieldError> {
    debug_assert_eq!(p % BigUint::from(8u32), BigUint::from(5u32));

    let n = n % p;
    if n.is_zero() {
        return Ok(BigUint::zero());
    }

    if !legendre_symbol(&n, p).is_one() {
        return Err(FieldError::NoSquareRoot);
    }

    let exp = (p + BigUint::from(3u32)) >> 3;
    let mut root = n.modpow(&exp, p);

    if mod_mul(&root, &root, p) != n {
        let unity = BigUint::from(2u32).modpow(&((p - BigUint::one()) >> 2), p);
        root = mod_mul(&root, &unity, p);
    }

    if mod_mul(&root, &root, p) == n {
        Ok(root)
    } else {
        Err(FieldError::NoSquareRoot)
    }
}

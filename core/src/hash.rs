//! Field-native sponge used to map (recipient, secret) tuples onto the
//! scalar field.
//!
//! Single-lane construction: a lone accumulator absorbs each input
//! additively, then passes through x^5 S-box rounds with a fixed constant
//! schedule. There is no MDS mixing layer between rounds - the parameter
//! set is wire-compatible with every previously derived address and must
//! not be altered (see `constants::ROUND_CONSTANTS_VERSION`).

use num_bigint::BigUint;

use crate::constants::{ABSORB_ROUNDS, BN254_R, FINAL_ROUNDS, ROUND_CONSTANTS, SPONGE_IV};
use crate::field::{mod_add, mod_mul};

/// One S-box round: `state = state^5 + C[index mod 16] (mod R)`.
fn sbox_round(state: &BigUint, index: usize) -> BigUint {
    let r = &*BN254_R;
    let x2 = mod_mul(state, state, r);
    let x4 = mod_mul(&x2, &x2, r);
    let x5 = mod_mul(&x4, state, r);
    mod_add(&x5, &ROUND_CONSTANTS[index % ROUND_CONSTANTS.len()], r)
}

/// Compress an ordered sequence of field elements over R into one field
/// element in R. Deterministic: identical inputs always hash identically.
pub fn scalar_hash(inputs: &[BigUint]) -> BigUint {
    let r = &*BN254_R;
    let mut state = SPONGE_IV.clone();

    for input in inputs {
        state = mod_add(&state, input, r);
        for i in 0..ABSORB_ROUNDS {
            state = sbox_round(&state, i);
        }
    }

    // Final mixing continues the constant schedule where the absorb
    // rounds left off.
    for i in 0..FINAL_ROUNDS {
        state = sbox_round(&state, ABSORB_ROUNDS + i);
    }

    state
}

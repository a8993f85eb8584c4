//! Packing byte strings into scalar-field elements.

use num_bigint::BigUint;

/// Bytes per chunk. 31 bytes tops out at 2^248 - 1, comfortably below the
/// BN254 scalar modulus, so packed values never wrap and the encoding
/// stays injective.
pub const CHUNK_BYTES: usize = 31;

/// Split a byte buffer into 31-byte little-endian chunks, zero-padding a
/// short final chunk. Pure and stateless; a 32-byte key packs to two
/// elements.
pub fn pack_bytes(bytes: &[u8]) -> Vec<BigUint> {
    bytes
        .chunks(CHUNK_BYTES)
        .map(BigUint::from_bytes_le)
        .collect()
}

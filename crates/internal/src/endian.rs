//! Big-endian packing of little-endian limb arrays
//!
//! Limb arrays store the least significant word at index 0, while the byte
//! encodings are big-endian. These helpers do the reversal in one place.

/// Convert a u64 from big-endian byte order to native byte order
#[inline]
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Decode `8 * L` big-endian bytes into `L` limbs, least significant limb first
///
/// `bytes` must be exactly `8 * L` long.
pub fn limbs_from_be_bytes<const L: usize>(bytes: &[u8]) -> [u64; L] {
    debug_assert_eq!(bytes.len(), 8 * L);
    let mut limbs = [0u64; L];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let end = bytes.len() - 8 * i;
        *limb = u64_from_be_bytes(&bytes[end - 8..end]);
    }
    limbs
}

/// Encode `L` limbs, least significant limb first, as `8 * L` big-endian bytes
///
/// `out` must be exactly `8 * L` long.
pub fn limbs_to_be_bytes<const L: usize>(limbs: &[u64; L], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * L);
    let len = out.len();
    for (i, limb) in limbs.iter().enumerate() {
        let end = len - 8 * i;
        out[end - 8..end].copy_from_slice(&limb.to_be_bytes());
    }
}

//! BLS12-381 field tower representation.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.
//!
//! ```text
//! Fe    = GF(p)                         6 x u64, Montgomery form
//! Fe2   = Fe[u]  / (u^2 + 1)            c0 + c1*u
//! Fe6   = Fe2[v] / (v^3 - (1 + u))      c0 + c1*v + c2*v^2
//! Fe12  = Fe6[w] / (w^2 - v)            c0 + c1*w
//! Wfe   = 12 x u64 accumulator, Wfe2 = 2 x Wfe, Wfe6 = 3 x Wfe2
//! ```

mod field;

#[cfg(test)]
mod tests;

// Public API exports
pub use field::ext::Ext;
pub use field::fp::{Fe, FP_BYTE_SIZE, FP_NUM_LIMBS};
pub use field::fp12::Fe12;
pub use field::fp2::Fe2;
pub use field::fp6::Fe6;
pub use field::wide::{Wfe, Wfe2, Wfe6};

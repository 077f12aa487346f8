//! Cubic extension `Fe6 = Fe2[v] / (v^3 - (1 + u))`, encoded as
//! `c0 + c1*v + c2*v^2`.
//!
//! Structure (identities, copy, sampling, Montgomery and wide conversion)
//! comes from [`Ext`]; multiplication is done above this layer.

use super::ext::Ext;
use super::fp2::Fe2;

/// Element `c0 + c1*v + c2*v^2` of the cubic extension over `Fe2`
pub type Fe6 = Ext<Fe2, 3>;

impl Ext<Fe2, 3> {
    /// Build from the three `Fe2` coordinates
    pub const fn from_coeffs(c0: Fe2, c1: Fe2, c2: Fe2) -> Fe6 {
        Ext([c0, c1, c2])
    }
}

//! Degree-12 extension `Fe12 = Fe6[w] / (w^2 - v)`, encoded as `c0 + c1*w`.
//!
//! This is the target group field of the pairing. There is no wide
//! counterpart at this level.

use super::ext::Ext;
use super::fp6::Fe6;

/// Element `c0 + c1*w` of the quadratic extension over `Fe6`
pub type Fe12 = Ext<Fe6, 2>;

impl Ext<Fe6, 2> {
    /// Build from the two `Fe6` coordinates
    pub const fn from_coeffs(c0: Fe6, c1: Fe6) -> Fe12 {
        Ext([c0, c1])
    }
}

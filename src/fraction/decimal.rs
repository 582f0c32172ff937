//! Conversion from floats by fixed-precision decimal scaling

use super::Fraction;
use crate::error::FractionError;
use crate::traits::FractionBase;
use log::debug;
use num_integer::Integer;
use num_traits::{FromPrimitive, ToPrimitive};

/// Scale used when a float takes part in fraction arithmetic or comparison.
///
/// Three decimal digits are kept, anything finer is rounded away.
pub const DECIMAL_SCALE: u32 = 1000;

impl<T: FractionBase> Fraction<T> {
    /// Approximate a float by `round(x * DECIMAL_SCALE) / DECIMAL_SCALE`, reduced to lowest terms.
    ///
    /// `0.6` becomes `3/5` and `0.167` becomes `167/1000`. Digits past the third
    /// decimal are lost, so `1.0 / 3.0` becomes `333/1000`.
    #[inline]
    pub fn from_float(x: f64) -> Result<Self, FractionError> {
        Self::from_float_with_scale(x, DECIMAL_SCALE)
    }

    /// Approximate a float by `round(x * scale) / scale`, reduced to lowest terms.
    ///
    /// Fails with [FractionError::InvalidDenominator] if `scale` is zero and with
    /// [FractionError::Unrepresentable] if `x` is not finite or the reduced
    /// parts do not fit in `T`.
    pub fn from_float_with_scale(x: f64, scale: u32) -> Result<Self, FractionError> {
        if scale == 0 {
            return Err(FractionError::InvalidDenominator);
        }
        if !x.is_finite() {
            return Err(FractionError::Unrepresentable);
        }

        let scaled = x * f64::from(scale);
        let rounded = scaled.round();
        if (scaled - rounded).abs() > f64::EPSILON * scaled.abs().max(1.0) {
            debug!("{} is rounded to {}/{}", x, rounded, scale);
        }

        // reduce before narrowing so small integer types accept values like 0.5
        let n = rounded.to_i128().ok_or(FractionError::Unrepresentable)?;
        let d = i128::from(scale);
        let g = n.gcd(&d);
        let numer = T::from_i128(n / g).ok_or(FractionError::Unrepresentable)?;
        let denom = T::from_i128(d / g).ok_or(FractionError::Unrepresentable)?;
        Ok(Self::new_raw(numer, denom))
    }
}

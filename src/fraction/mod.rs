//! Implementation of the exact fraction type
//!
//! A [Fraction] stores a numerator and a positive denominator and is never
//! reduced behind the caller's back. Every comparison is done on the value
//! it represents, so `8/6` and `16/12` are equal before and after
//! [simplify][Fraction::simplify].

mod cmp;
mod decimal;
mod text;
mod ops;

pub use decimal::DECIMAL_SCALE;

use crate::error::FractionError;
use crate::traits::{Approximation, FractionBase};
use core::convert::TryFrom;
use num_rational::Ratio;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// A fraction `numer / denom` over a primitive signed integer.
///
/// The denominator is positive for every value reachable through the public API,
/// the sign is carried by the numerator.
#[derive(Clone, Copy, Debug)]
pub struct Fraction<T> {
    numer: T,
    denom: T,
}

impl<T> Fraction<T> {
    #[inline]
    pub(crate) const fn new_raw(numer: T, denom: T) -> Self {
        Fraction { numer, denom }
    }

    /// Get return-only references to the components `(numer, denom)`
    #[inline]
    pub const fn parts(&self) -> (&T, &T) {
        (&self.numer, &self.denom)
    }
}

impl<T: FractionBase> Fraction<T> {
    /// Create a fraction `numer / denom` without simplifying it.
    ///
    /// Fails with [FractionError::InvalidDenominator] if `denom` is zero or negative.
    #[inline]
    pub fn new(numer: T, denom: T) -> Result<Self, FractionError> {
        if !denom.is_positive() {
            return Err(FractionError::InvalidDenominator);
        }
        Ok(Self::new_raw(numer, denom))
    }

    /// Create the fraction `whole / 1`
    #[inline]
    pub fn from_integer(whole: T) -> Self {
        Self::new_raw(whole, T::one())
    }

    // Move the sign of a computed result into the numerator
    pub(crate) fn normalized(numer: T, denom: T) -> Result<Self, FractionError> {
        if denom.is_zero() {
            return Err(FractionError::InvalidDenominator);
        }
        if denom.is_negative() {
            let numer = T::zero().checked_sub(&numer).ok_or(FractionError::Overflow)?;
            let denom = T::zero().checked_sub(&denom).ok_or(FractionError::Overflow)?;
            return Ok(Self::new_raw(numer, denom));
        }
        Ok(Self::new_raw(numer, denom))
    }

    // Operands built through `new_raw` are not validated on construction
    #[inline]
    pub(crate) fn check(&self) -> Result<(), FractionError> {
        if self.denom.is_positive() {
            Ok(())
        } else {
            Err(FractionError::InvalidDenominator)
        }
    }

    #[inline]
    pub fn numer(&self) -> T {
        self.numer
    }

    #[inline]
    pub fn denom(&self) -> T {
        self.denom
    }

    #[inline]
    pub fn set_numer(&mut self, numer: T) {
        self.numer = numer;
    }

    /// Replace the denominator, leaving the fraction untouched if `denom` is not positive
    #[inline]
    pub fn set_denom(&mut self, denom: T) -> Result<(), FractionError> {
        if !denom.is_positive() {
            return Err(FractionError::InvalidDenominator);
        }
        self.denom = denom;
        Ok(())
    }

    /// Greatest common factor of `|numer|` and `denom`. `0/k` gives `k`.
    #[inline]
    pub fn gcf(&self) -> T {
        self.numer.gcd(&self.denom)
    }

    /// Reduce the fraction to lowest terms in place
    pub fn simplify(&mut self) {
        let g = self.gcf();
        if g.is_zero() || g.is_one() {
            return;
        }
        self.numer = self.numer / g;
        self.denom = self.denom / g;
    }

    /// Returns a simplified version of self.
    #[inline]
    pub fn simplified(self) -> Self {
        let mut result = self;
        result.simplify();
        result
    }

    /// Returns the reciprocal `denom / numer`, with the sign moved to the numerator
    pub fn recip(&self) -> Result<Self, FractionError> {
        self.check()?;
        if self.numer.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Self::normalized(self.denom, self.numer)
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        (self.numer % self.denom).is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Absolute value of the fraction
    ///
    /// # Panics
    /// if negating the numerator overflows
    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Converts to an integer, rounding towards zero
    #[inline]
    pub fn to_integer(&self) -> Approximation<T> {
        if self.is_integer() {
            Approximation::Exact(self.numer / self.denom)
        } else {
            Approximation::Approximated(self.numer / self.denom)
        }
    }
}

impl<T: FractionBase> From<T> for Fraction<T> {
    #[inline]
    fn from(whole: T) -> Self {
        Self::from_integer(whole)
    }
}

impl<T: FractionBase> TryFrom<Ratio<T>> for Fraction<T> {
    type Error = FractionError;

    /// The fields of the ratio are kept as they are, except for the sign of the denominator
    #[inline]
    fn try_from(r: Ratio<T>) -> Result<Self, FractionError> {
        let (numer, denom): (T, T) = r.into();
        Self::normalized(numer, denom)
    }
}

impl<T> From<Fraction<T>> for Ratio<T> {
    #[inline]
    fn from(f: Fraction<T>) -> Self {
        Ratio::new_raw(f.numer, f.denom)
    }
}

impl<T> Into<(T, T)> for Fraction<T> {
    /// Deconstruct the fraction into tuple `(numer, denom)`
    fn into(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

impl<T: FractionBase> Default for Fraction<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FractionBase> Zero for Fraction<T> {
    #[inline]
    fn zero() -> Self {
        Self::new_raw(T::zero(), T::one())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: FractionBase> One for Fraction<T> {
    #[inline]
    fn one() -> Self {
        Self::new_raw(T::one(), T::one())
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

impl<T: FractionBase> FromPrimitive for Fraction<T> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Self::from)
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Self::from)
    }

    /// Floats are rounded to [DECIMAL_SCALE], see [Fraction::from_float]
    #[inline]
    fn from_f64(f: f64) -> Option<Self> {
        Self::from_float(f).ok()
    }
}

impl<T: FractionBase> ToPrimitive for Fraction<T> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        match self.to_integer() {
            Approximation::Exact(v) => v.to_i64(),
            Approximation::Approximated(_) => None,
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        match self.to_integer() {
            Approximation::Exact(v) => v.to_u64(),
            Approximation::Approximated(_) => None,
        }
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub const THIRD: Fraction<i32> = Fraction::new_raw(1, 3);
    pub const FIFTH: Fraction<i32> = Fraction::new_raw(2, 10); // non-reduced version of 1/5

    fn frac(n: i32, d: i32) -> Fraction<i32> {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn construction_test() {
        assert!(Fraction::new(1, 3).is_ok());
        assert!(Fraction::new(2, 10).is_ok());
        assert!(Fraction::new(0, 5).is_ok());
        assert_eq!(Fraction::new(5, 0), Err(FractionError::InvalidDenominator));
        assert_eq!(Fraction::new(999, 0), Err(FractionError::InvalidDenominator));
        assert_eq!(Fraction::new(1, -2), Err(FractionError::InvalidDenominator));

        assert_eq!(Fraction::from(1), frac(1, 1));
        assert_eq!(Fraction::from(4), frac(8, 2));
        assert_eq!(frac(0, 5), Fraction::from(0));
        assert_eq!(frac(10, 5), Fraction::from(2));
    }

    #[test]
    fn accessor_test() {
        let mut f1 = THIRD;
        assert_eq!(f1.numer(), 1);
        assert_eq!(f1.denom(), 3);
        assert_eq!(f1.set_denom(0), Err(FractionError::InvalidDenominator));
        assert_eq!(f1.set_denom(-3), Err(FractionError::InvalidDenominator));
        assert_eq!(f1.denom(), 3);

        let mut f2 = FIFTH;
        assert_eq!(f2.parts(), (&2, &10));
        f2.set_numer(0);
        assert_eq!(f2.numer(), 0);
        assert!(f2.set_denom(7).is_ok());
        assert_eq!(f2.denom(), 7);

        // fields are stored as given
        for &(a, b) in &[(3, 9), (-4, 6), (0, 1), (i32::MAX, i32::MAX)] {
            let f = frac(a, b);
            assert_eq!((f.numer(), f.denom()), (a, b));
        }
    }

    #[test]
    fn simplify_test() {
        let mut f1 = frac(8, 6);
        let mut f2 = frac(16, 12);
        assert_eq!(f1, f2);

        assert_eq!(f1.gcf(), 2);
        assert_eq!(f2.gcf(), 4);
        f1.simplify();
        f2.simplify();
        assert_eq!(f1, f2);
        assert_eq!(f1.parts(), (&4, &3));
        assert_eq!(f2.parts(), (&4, &3));

        // idempotent
        f1.simplify();
        assert_eq!(f1.parts(), (&4, &3));

        let mut zero = frac(0, 7);
        assert_eq!(zero.gcf(), 7);
        zero.simplify();
        assert_eq!(zero.parts(), (&0, &1));

        assert_eq!(frac(-6, 4).simplified().parts(), (&-3, &2));
    }

    #[test]
    fn recip_test() {
        assert_eq!(frac(2, 3).recip().unwrap().parts(), (&3, &2));
        assert_eq!(frac(-2, 3).recip().unwrap().parts(), (&-3, &2));
        assert_eq!(frac(0, 3).recip(), Err(FractionError::DivisionByZero));
        assert_eq!(
            Fraction::<i32>::new_raw(1, 0).recip(),
            Err(FractionError::InvalidDenominator)
        );
        assert_eq!(
            Fraction::<i8>::new_raw(1, i8::MIN).recip(),
            Err(FractionError::InvalidDenominator)
        );
    }

    #[test]
    fn conversion_test() {
        assert_eq!(frac(7, 2).to_integer(), Approximation::Approximated(3));
        assert_eq!(frac(-7, 2).to_integer(), Approximation::Approximated(-3));
        assert_eq!(frac(8, 2).to_integer(), Approximation::Exact(4));
        assert!(frac(8, 2).is_integer());
        assert!(!THIRD.is_integer());

        assert_eq!(frac(8, 2).to_i32(), Some(4));
        assert_eq!(frac(7, 2).to_i32(), None);
        assert!(matches!(frac(1, 4).to_f64(), Some(v) if (v - 0.25).abs() < 1e-12));

        assert_eq!(Fraction::<i32>::from_i64(5), Some(frac(5, 1)));
        assert_eq!(Fraction::<i8>::from_i64(1000), None);
        assert_eq!(Fraction::<i32>::from_f64(0.5), Some(frac(1, 2)));
        assert_eq!(Fraction::<i32>::from_f64(f64::NAN), None);

        let r: Ratio<i32> = frac(2, 4).into();
        assert_eq!((r.numer(), r.denom()), (&2, &4));
        let f = Fraction::try_from(Ratio::new_raw(1, -2)).unwrap();
        assert_eq!(f.parts(), (&-1, &2));
        assert_eq!(
            Fraction::try_from(Ratio::new_raw(1, 0)),
            Err(FractionError::InvalidDenominator)
        );

        let (n, d): (i32, i32) = frac(3, 4).into();
        assert_eq!((n, d), (3, 4));
    }

    #[test]
    fn property_test() {
        assert!(Fraction::<i32>::zero().is_zero());
        assert!(Fraction::<i32>::one().is_one());
        assert!(frac(3, 3).is_one());
        assert_eq!(Fraction::<i32>::default(), frac(0, 1));
        assert!(frac(-1, 2).is_negative());
        assert!(frac(1, 2).is_positive());
        assert!(!frac(0, 2).is_positive());
        assert_eq!(frac(-1, 2).abs(), frac(1, 2));
    }
}

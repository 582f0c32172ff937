//! Arithmetic operators on fractions
//!
//! The `try_*` methods are the primitive forms, they validate both operands and
//! check every intermediate product for overflow. The `std::ops` traits delegate
//! to them and panic on failure, floats are first converted through
//! [Fraction::from_float].

use super::Fraction;
use crate::error::FractionError;
use crate::traits::FractionBase;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};

#[inline]
fn product<T: FractionBase>(lhs: T, rhs: T) -> Result<T, FractionError> {
    lhs.checked_mul(&rhs).ok_or(FractionError::Overflow)
}

#[inline]
fn unwrap_op<T>(result: Result<Fraction<T>, FractionError>) -> Fraction<T> {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

impl<T: FractionBase> Fraction<T> {
    /// `a/b + c/d = (a*d + c*b) / (b*d)`, not simplified
    pub fn try_add(self, rhs: Self) -> Result<Self, FractionError> {
        self.check()?;
        rhs.check()?;
        let ad = product(self.numer, rhs.denom)?;
        let cb = product(rhs.numer, self.denom)?;
        let numer = ad.checked_add(&cb).ok_or(FractionError::Overflow)?;
        Ok(Self::new_raw(numer, product(self.denom, rhs.denom)?))
    }

    /// `a/b - c/d = (a*d - c*b) / (b*d)`, not simplified
    pub fn try_sub(self, rhs: Self) -> Result<Self, FractionError> {
        self.check()?;
        rhs.check()?;
        let ad = product(self.numer, rhs.denom)?;
        let cb = product(rhs.numer, self.denom)?;
        let numer = ad.checked_sub(&cb).ok_or(FractionError::Overflow)?;
        Ok(Self::new_raw(numer, product(self.denom, rhs.denom)?))
    }

    /// `a/b * c/d = (a*c) / (b*d)`, not simplified
    pub fn try_mul(self, rhs: Self) -> Result<Self, FractionError> {
        self.check()?;
        rhs.check()?;
        Ok(Self::new_raw(
            product(self.numer, rhs.numer)?,
            product(self.denom, rhs.denom)?,
        ))
    }

    /// `a/b / c/d = (a*d) / (b*c)`, not simplified.
    ///
    /// Fails with [FractionError::DivisionByZero] if `rhs` has the value zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, FractionError> {
        self.check()?;
        rhs.check()?;
        if rhs.numer.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Self::normalized(product(self.numer, rhs.denom)?, product(self.denom, rhs.numer)?)
    }

    pub fn try_neg(self) -> Result<Self, FractionError> {
        self.check()?;
        let numer = T::zero()
            .checked_sub(&self.numer)
            .ok_or(FractionError::Overflow)?;
        Ok(Self::new_raw(numer, self.denom))
    }

    /// Prefix increment, returns the value after adding one.
    ///
    /// The result is not simplified, `1/2` becomes `3/2` and `2/4` becomes `6/4`.
    /// On failure self is left unchanged.
    #[inline]
    pub fn pre_inc(&mut self) -> Result<Self, FractionError> {
        *self = self.try_add(Self::new_raw(T::one(), T::one()))?;
        Ok(*self)
    }

    /// Postfix increment, returns the value before adding one
    #[inline]
    pub fn post_inc(&mut self) -> Result<Self, FractionError> {
        let before = *self;
        *self = before.try_add(Self::new_raw(T::one(), T::one()))?;
        Ok(before)
    }

    /// Prefix decrement, returns the value after subtracting one
    #[inline]
    pub fn pre_dec(&mut self) -> Result<Self, FractionError> {
        *self = self.try_sub(Self::new_raw(T::one(), T::one()))?;
        Ok(*self)
    }

    /// Postfix decrement, returns the value before subtracting one
    #[inline]
    pub fn post_dec(&mut self) -> Result<Self, FractionError> {
        let before = *self;
        *self = before.try_sub(Self::new_raw(T::one(), T::one()))?;
        Ok(before)
    }
}

macro_rules! arith_impl {
    (impl $imp:ident, $method:ident, $try_method:ident; $($int:ty)*) => {
        /// # Panics
        /// if an operand has an invalid denominator, the divisor is zero or the result overflows
        impl<T: FractionBase> $imp<Fraction<T>> for Fraction<T> {
            type Output = Fraction<T>;
            #[inline]
            fn $method(self, rhs: Fraction<T>) -> Fraction<T> {
                unwrap_op(self.$try_method(rhs))
            }
        }

        // Abstracts the a/b `op` x = a/b `op` round(x*s)/s pattern
        impl<T: FractionBase> $imp<f64> for Fraction<T> {
            type Output = Fraction<T>;
            #[inline]
            fn $method(self, rhs: f64) -> Fraction<T> {
                unwrap_op(Fraction::from_float(rhs).and_then(|rhs| self.$try_method(rhs)))
            }
        }

        impl<T: FractionBase> $imp<Fraction<T>> for f64 {
            type Output = Fraction<T>;
            #[inline]
            fn $method(self, rhs: Fraction<T>) -> Fraction<T> {
                unwrap_op(Fraction::from_float(self).and_then(|lhs| lhs.$try_method(rhs)))
            }
        }

        // Abstracts the a/b `op` c = a/b `op` c/1 pattern
        $(
            impl $imp<$int> for Fraction<$int> {
                type Output = Fraction<$int>;
                #[inline]
                fn $method(self, rhs: $int) -> Fraction<$int> {
                    unwrap_op(self.$try_method(Fraction::from(rhs)))
                }
            }

            impl $imp<Fraction<$int>> for $int {
                type Output = Fraction<$int>;
                #[inline]
                fn $method(self, rhs: Fraction<$int>) -> Fraction<$int> {
                    unwrap_op(Fraction::from(self).$try_method(rhs))
                }
            }
        )*
    };
}

arith_impl!(impl Add, add, try_add; i8 i16 i32 i64 i128 isize);
arith_impl!(impl Sub, sub, try_sub; i8 i16 i32 i64 i128 isize);
arith_impl!(impl Mul, mul, try_mul; i8 i16 i32 i64 i128 isize);
arith_impl!(impl Div, div, try_div; i8 i16 i32 i64 i128 isize);

macro_rules! arith_assign_impl {
    (impl $imp:ident, $method:ident, $try_method:ident) => {
        impl<T: FractionBase> $imp<Fraction<T>> for Fraction<T> {
            #[inline]
            fn $method(&mut self, rhs: Fraction<T>) {
                *self = unwrap_op(self.$try_method(rhs));
            }
        }

        impl<T: FractionBase> $imp<f64> for Fraction<T> {
            #[inline]
            fn $method(&mut self, rhs: f64) {
                *self = unwrap_op(Fraction::from_float(rhs).and_then(|rhs| self.$try_method(rhs)));
            }
        }
    };
}

arith_assign_impl!(impl AddAssign, add_assign, try_add);
arith_assign_impl!(impl SubAssign, sub_assign, try_sub);
arith_assign_impl!(impl MulAssign, mul_assign, try_mul);
arith_assign_impl!(impl DivAssign, div_assign, try_div);

impl<T: FractionBase> Neg for Fraction<T> {
    type Output = Fraction<T>;
    #[inline]
    fn neg(self) -> Fraction<T> {
        unwrap_op(self.try_neg())
    }
}

macro_rules! checked_impl {
    (impl $imp:ident, $method:ident, $try_method:ident) => {
        impl<T: FractionBase> $imp for Fraction<T> {
            #[inline]
            fn $method(&self, v: &Self) -> Option<Self> {
                self.$try_method(*v).ok()
            }
        }
    };
}

checked_impl!(impl CheckedAdd, checked_add, try_add);
checked_impl!(impl CheckedSub, checked_sub, try_sub);
checked_impl!(impl CheckedMul, checked_mul, try_mul);
checked_impl!(impl CheckedDiv, checked_div, try_div);

use core::fmt::Display;
use core::hash::Hash;
use num_integer::Integer;
use num_traits::{FromPrimitive, PrimInt, Signed};

/// A helper trait to define valid integer types that can be used for [Fraction][crate::Fraction].
///
/// Only fixed-width signed integers qualify, arithmetic on them is always checked.
pub trait FractionBase: PrimInt + Integer + Signed + FromPrimitive + Hash + Display {}
impl<T: PrimInt + Integer + Signed + FromPrimitive + Hash + Display> FractionBase for T {}

/// Result of a conversion that may lose information
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Return the contained value regardless of exactness
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

//! Value comparison of fractions, among themselves and against floats

use super::Fraction;
use crate::traits::FractionBase;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use num_integer::Integer;
use num_traits::ToPrimitive;

// Compare a/b with c/d (b, d > 0) without any multiplication. The integer parts
// are compared first, then the reciprocals of the fractional parts in reverse.
fn cmp_by_division<T: FractionBase>(mut a: T, mut b: T, mut c: T, mut d: T) -> Ordering {
    let mut reversed = false;
    loop {
        let (q1, r1) = a.div_mod_floor(&b);
        let (q2, r2) = c.div_mod_floor(&d);
        let ord = match q1.cmp(&q2) {
            Ordering::Equal => match (r1.is_zero(), r2.is_zero()) {
                (true, true) => return Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => {
                    a = b;
                    b = r1;
                    c = d;
                    d = r2;
                    reversed = !reversed;
                    continue;
                }
            },
            ord => ord,
        };
        return if reversed { ord.reverse() } else { ord };
    }
}

impl<T: FractionBase> Fraction<T> {
    // None if either side has an invalid denominator
    fn value_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.check().is_err() || other.check().is_err() {
            return None;
        }
        if self.denom == other.denom {
            return Some(self.numer.cmp(&other.numer));
        }

        // cross multiplication, falling back to division when it overflows
        match (
            self.numer.checked_mul(&other.denom),
            other.numer.checked_mul(&self.denom),
        ) {
            (Some(l), Some(r)) => Some(l.cmp(&r)),
            _ => Some(cmp_by_division(
                self.numer,
                self.denom,
                other.numer,
                other.denom,
            )),
        }
    }

    // Floats that cannot be scaled into T are compared as floats
    fn float_cmp(&self, other: f64) -> Option<Ordering> {
        match Self::from_float(other) {
            Ok(v) => self.value_cmp(&v),
            Err(_) => self.to_f64()?.partial_cmp(&other),
        }
    }
}

impl<T: FractionBase> PartialEq for Fraction<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value_cmp(other) == Some(Ordering::Equal)
    }
}

impl<T: FractionBase> Eq for Fraction<T> {}

impl<T: FractionBase> PartialOrd for Fraction<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value_cmp(other)
    }
}

impl<T: FractionBase> Ord for Fraction<T> {
    /// # Panics
    /// if either side has a zero denominator
    fn cmp(&self, other: &Self) -> Ordering {
        match self.value_cmp(other) {
            Some(ord) => ord,
            None => panic!("cannot order a fraction with an invalid denominator"),
        }
    }
}

impl<T: FractionBase> Hash for Fraction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // equal values must hash the same, so hash the lowest terms
        let reduced = self.simplified();
        reduced.numer.hash(state);
        reduced.denom.hash(state);
    }
}

impl<T: FractionBase> PartialEq<f64> for Fraction<T> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.float_cmp(*other) == Some(Ordering::Equal)
    }
}

impl<T: FractionBase> PartialOrd<f64> for Fraction<T> {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.float_cmp(*other)
    }
}

impl<T: FractionBase> PartialEq<Fraction<T>> for f64 {
    #[inline]
    fn eq(&self, other: &Fraction<T>) -> bool {
        other.float_cmp(*self) == Some(Ordering::Equal)
    }
}

impl<T: FractionBase> PartialOrd<Fraction<T>> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &Fraction<T>) -> Option<Ordering> {
        other.float_cmp(*self).map(Ordering::reverse)
    }
}

//! Exact fractions over primitive signed integers.
//!
//! A [Fraction] keeps its numerator and denominator as given, reduction only
//! happens through [Fraction::simplify]. Arithmetic is checked and reported
//! through [FractionError], floats take part by rounding them to
//! [DECIMAL_SCALE].
//!
//! ```
//! use num_fraction::Fraction32;
//!
//! let a = Fraction32::new(3, 5).unwrap();
//! let b = 0.6 + a;
//! assert_eq!(b, Fraction32::new(6, 5).unwrap());
//! assert_eq!(b.to_string(), "30/25");
//! assert_eq!(b.simplified().to_string(), "6/5");
//! ```

mod error;
mod fraction;
pub mod traits;

pub use error::{FractionError, ParseErrorKind, ParseFractionError};
pub use fraction::{Fraction, DECIMAL_SCALE};
pub use traits::{Approximation, FractionBase};

pub type Fraction32 = Fraction<i32>;
pub type Fraction64 = Fraction<i64>;

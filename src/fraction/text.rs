//! Text format `numer/denom` for fractions

use super::Fraction;
use crate::error::{ParseErrorKind, ParseFractionError};
use crate::traits::FractionBase;
use core::str::FromStr;
use log::debug;
use std::fmt;
use std::io::{self, BufRead, Write};

impl<T: FractionBase> fmt::Display for Fraction<T> {
    /// Renders as `numer/denom`, always with both parts and without simplification
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_some() {
            f.pad(&format!("{}/{}", self.numer, self.denom))
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[inline]
fn parse_int<T: FractionBase>(s: &str) -> Result<T, ParseFractionError> {
    T::from_str_radix(s, 10).map_err(|_| ParseFractionError::new(ParseErrorKind::InvalidInteger))
}

impl<T: FractionBase> FromStr for Fraction<T> {
    type Err = ParseFractionError;

    /// Parses `numer/denom` or just `numer`, surrounded by optional whitespace
    fn from_str(s: &str) -> Result<Self, ParseFractionError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseFractionError::new(ParseErrorKind::Empty));
        }

        let mut split = s.splitn(2, '/');
        let numer = parse_int(split.next().unwrap_or(s))?;
        let denom = match split.next() {
            Some(d) => parse_int(d)?,
            None => T::one(),
        };
        Fraction::new(numer, denom)
            .map_err(|_| ParseFractionError::new(ParseErrorKind::InvalidDenominator))
    }
}

#[inline]
fn is_fraction_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'+' || b == b'-' || b == b'/'
}

// Skip leading whitespace, then consume the longest run of fraction characters.
// Bytes after the run stay in the reader.
fn read_token<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut token = String::new();
    let mut leading = true;
    loop {
        let (consumed, done) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }

            let mut consumed = 0;
            let mut done = false;
            for &b in buf {
                if leading && b.is_ascii_whitespace() {
                    consumed += 1;
                } else if is_fraction_byte(b) {
                    leading = false;
                    token.push(char::from(b));
                    consumed += 1;
                } else {
                    done = true;
                    break;
                }
            }
            (consumed, done)
        };
        reader.consume(consumed);
        if done {
            break;
        }
    }
    Ok(token)
}

impl<T: FractionBase> Fraction<T> {
    /// Write the fraction as `numer/denom`
    #[inline]
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Read a fraction in the `numer/denom` format and assign it to self.
    ///
    /// Leading whitespace is skipped and the reader is left just past the
    /// consumed text. Malformed input fails with [io::ErrorKind::InvalidData]
    /// wrapping a [ParseFractionError], input holding nothing but whitespace with
    /// [io::ErrorKind::UnexpectedEof]. Self is unchanged on failure.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> io::Result<()> {
        let token = read_token(&mut reader)?;
        if token.is_empty() {
            let (kind, parse_kind) = if reader.fill_buf()?.is_empty() {
                (io::ErrorKind::UnexpectedEof, ParseErrorKind::Empty)
            } else {
                (io::ErrorKind::InvalidData, ParseErrorKind::InvalidInteger)
            };
            return Err(io::Error::new(kind, ParseFractionError::new(parse_kind)));
        }

        match token.parse::<Self>() {
            Ok(v) => {
                *self = v;
                Ok(())
            }
            Err(e) => {
                debug!("failed to read fraction from {:?}: {}", token, e);
                Err(io::Error::new(io::ErrorKind::InvalidData, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn frac(n: i32, d: i32) -> Fraction<i32> {
        Fraction::new(n, d).unwrap()
    }

    fn parse_kind(s: &str) -> Option<ParseErrorKind> {
        s.parse::<Fraction<i32>>().err().map(|e| e.kind())
    }

    #[test]
    fn formatting_test() {
        assert_eq!(format!("{}", frac(1, 5)), "1/5");
        assert_eq!(format!("{}", frac(2, 10)), "2/10");
        assert_eq!(format!("{}", frac(-3, 4)), "-3/4");
        assert_eq!(format!("{}", Fraction::from(7)), "7/1");
        assert_eq!(format!("{:>6}", frac(1, 5)), "   1/5");
        assert_eq!(format!("{:<5}|", frac(1, 5)), "1/5  |");
    }

    #[test]
    fn parse_test() {
        assert_eq!("1/5".parse::<Fraction<i32>>().unwrap().parts(), (&1, &5));
        assert_eq!("2/10".parse::<Fraction<i32>>().unwrap().parts(), (&2, &10));
        assert_eq!("-3/4".parse::<Fraction<i32>>().unwrap(), frac(-3, 4));
        assert_eq!(" 7 ".parse::<Fraction<i32>>().unwrap().parts(), (&7, &1));
        assert_eq!("+3/4".parse::<Fraction<i64>>().unwrap().parts(), (&3, &4));

        assert_eq!(parse_kind(""), Some(ParseErrorKind::Empty));
        assert_eq!(parse_kind("   "), Some(ParseErrorKind::Empty));
        assert_eq!(parse_kind("a/b"), Some(ParseErrorKind::InvalidInteger));
        assert_eq!(parse_kind("1/"), Some(ParseErrorKind::InvalidInteger));
        assert_eq!(parse_kind("/2"), Some(ParseErrorKind::InvalidInteger));
        assert_eq!(parse_kind("1/2/3"), Some(ParseErrorKind::InvalidInteger));
        assert_eq!(parse_kind("1 / 2"), Some(ParseErrorKind::InvalidInteger));
        assert_eq!(parse_kind("1/0"), Some(ParseErrorKind::InvalidDenominator));
        assert_eq!(parse_kind("1/-2"), Some(ParseErrorKind::InvalidDenominator));
        assert_eq!(parse_kind("99999999999/1"), Some(ParseErrorKind::InvalidInteger));
    }

    #[test]
    fn write_test() {
        let mut output = Vec::new();
        frac(1, 5).write_to(&mut output).unwrap();
        writeln!(output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "1/5\n");
    }

    #[test]
    fn read_test() {
        let mut f = frac(0, 1);
        let mut input = Cursor::new("1/5");
        f.read_from(&mut input).unwrap();
        assert_eq!(f, frac(1, 5));
        assert_eq!(f.parts(), (&1, &5));

        // the reader stops right after the fraction
        let mut input = Cursor::new("  3/4 rest\n-1/2");
        f.read_from(&mut input).unwrap();
        assert_eq!(f.parts(), (&3, &4));
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " rest\n-1/2");

        // consecutive reads
        let mut input = Cursor::new("1/2\n-2/3 4");
        let (mut a, mut b, mut c) = (frac(0, 1), frac(0, 1), frac(0, 1));
        a.read_from(&mut input).unwrap();
        b.read_from(&mut input).unwrap();
        c.read_from(&mut input).unwrap();
        assert_eq!((a, b, c), (frac(1, 2), frac(-2, 3), frac(4, 1)));
    }

    #[test]
    fn round_trip_test() {
        let mut output = Vec::new();
        frac(1, 5).write_to(&mut output).unwrap();
        let mut f = frac(0, 1);
        f.read_from(Cursor::new(output)).unwrap();
        assert_eq!(f, frac(1, 5));
    }

    #[test]
    fn read_failure_test() {
        let mut f = frac(1, 5);

        let err = f.read_from(Cursor::new("1/0")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(f.parts(), (&1, &5));

        let mut input = Cursor::new("abc");
        let err = f.read_from(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(input.position(), 0);

        let err = f.read_from(Cursor::new("   ")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let err = f.read_from(Cursor::new("1//2")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.into_inner().unwrap().downcast::<ParseFractionError>().is_ok());
        assert_eq!(f.parts(), (&1, &5));
    }
}

// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

use crate::misc;
use rug::float::ParseFloatError;
use rug::Float;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

// A parsed number rounded to the requested precision.
pub(crate) enum Parsed {
    Real(Float),
    Complex(Float, Float),
}

macro_rules! parse_error {
    ($kind:expr) => {
        Err(ParseComplexError { kind: $kind })
    };
}

pub(crate) fn check_radix(radix: i32) -> Result<(), ParseComplexError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        parse_error!(ParseErrorKind::InvalidRadix(radix))
    }
}

#[inline]
fn parse_float(bytes: &[u8], radix: i32, prec: u32) -> Result<Float, ParseFloatError> {
    Float::parse_radix(bytes, radix).map(|incomplete| Float::with_val(prec, incomplete))
}

// Accepts "re", "(re im)" and "(re, im)", with optional whitespace.
pub(crate) fn parse(mut bytes: &[u8], radix: i32, prec: u32) -> Result<Parsed, ParseComplexError> {
    check_radix(radix)?;
    bytes = misc::trim_end(misc::trim_start(bytes));
    if bytes.is_empty() {
        return parse_error!(ParseErrorKind::NoDigits);
    }
    if let Some((inside, remainder)) = misc::matched_brackets(bytes) {
        if !misc::trim_start(remainder).is_empty() {
            return parse_error!(ParseErrorKind::CloseNotLast);
        }
        bytes = misc::trim_end(misc::trim_start(inside));
    } else {
        return match parse_float(bytes, radix, prec) {
            Ok(re) => Ok(Parsed::Real(re)),
            Err(e) => parse_error!(ParseErrorKind::InvalidFloat(e)),
        };
    };
    if bytes.is_empty() {
        return parse_error!(ParseErrorKind::NoDigits);
    }
    let (real, imag) = if let Some(comma) = misc::find_outside_brackets(bytes, b',') {
        let real = misc::trim_end(&bytes[..comma]);
        if real.is_empty() {
            return parse_error!(ParseErrorKind::NoRealDigits);
        }
        let imag = misc::trim_start(&bytes[comma + 1..]);
        if imag.is_empty() {
            return parse_error!(ParseErrorKind::NoImagDigits);
        }
        if misc::find_outside_brackets(imag, b',').is_some() {
            return parse_error!(ParseErrorKind::MultipleSeparators);
        }
        (real, imag)
    } else if let Some(space) = misc::find_space_outside_brackets(bytes) {
        let real = &bytes[..space];
        let imag = misc::trim_start(&bytes[space + 1..]);
        if misc::find_space_outside_brackets(imag).is_some() {
            return parse_error!(ParseErrorKind::MultipleSeparators);
        }
        (real, imag)
    } else {
        return parse_error!(ParseErrorKind::MissingSeparator);
    };
    let re = match parse_float(real, radix, prec) {
        Ok(re) => re,
        Err(e) => return parse_error!(ParseErrorKind::InvalidRealFloat(e)),
    };
    let im = match parse_float(imag, radix, prec) {
        Ok(im) => im,
        Err(e) => return parse_error!(ParseErrorKind::InvalidImagFloat(e)),
    };
    Ok(Parsed::Complex(re, im))
}

// Parses one decimal component given on its own.
pub(crate) fn parse_part(text: &str, imag: bool, prec: u32) -> Result<Float, ParseComplexError> {
    match parse_float(text.as_bytes(), 10, prec) {
        Ok(f) => Ok(f),
        Err(e) if imag => parse_error!(ParseErrorKind::InvalidImagFloat(e)),
        Err(e) => parse_error!(ParseErrorKind::InvalidRealFloat(e)),
    }
}

/**
An error which can be returned when parsing a
[`Complex`](../struct.Complex.html) number.

# Examples

```rust
use mpcomplex::complex::ParseComplexError;
use mpcomplex::{Complex, Error};
// This string is not a complex number.
let s = "something completely different (_!_!_)";
let error: ParseComplexError = match Complex::parse_radix(s, 4, 53) {
    Err(Error::Parse(error)) => error,
    _ => unreachable!(),
};
println!("Parse error: {}", error);
```
*/
#[derive(Clone, Debug)]
pub struct ParseComplexError {
    kind: ParseErrorKind,
}

#[derive(Clone, Debug)]
enum ParseErrorKind {
    NoDigits,
    NoRealDigits,
    NoImagDigits,
    InvalidFloat(ParseFloatError),
    InvalidRealFloat(ParseFloatError),
    InvalidImagFloat(ParseFloatError),
    MissingSeparator,
    MultipleSeparators,
    CloseNotLast,
    InvalidRadix(i32),
}

impl Display for ParseComplexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        use self::ParseErrorKind::*;
        match self.kind {
            NoDigits => f.write_str("string has no digits"),
            NoRealDigits => f.write_str("string has no real digits"),
            NoImagDigits => f.write_str("string has no imaginary digits"),
            InvalidFloat(ref e) => write!(f, "string is not a valid float: {}", e),
            InvalidRealFloat(ref e) => {
                write!(f, "real part of string is not a valid float: {}", e)
            }
            InvalidImagFloat(ref e) => {
                write!(f, "imaginary part of string is not a valid float: {}", e)
            }
            MissingSeparator => f.write_str("string has no separator inside brackets"),
            MultipleSeparators => {
                f.write_str("string has more than one separator inside brackets")
            }
            CloseNotLast => f.write_str("string has more characters after closing bracket"),
            InvalidRadix(radix) => write!(f, "radix {} is not in the range 2..=36", radix),
        }
    }
}

impl Error for ParseComplexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use self::ParseErrorKind::*;
        match self.kind {
            InvalidFloat(ref e) | InvalidRealFloat(ref e) | InvalidImagFloat(ref e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_parse_shapes() {
        match parse(b"1.5", 10, 53) {
            Ok(Parsed::Real(re)) => assert_eq!((re.prec(), re), (53, Float::with_val(53, 1.5))),
            _ => panic!("1.5 not parsed as a real number"),
        }
        match parse(b" (1 2) ", 10, 20) {
            Ok(Parsed::Complex(re, im)) => {
                assert_eq!((re.prec(), im.prec()), (20, 20));
                assert_eq!((re, im), (Float::with_val(20, 1), Float::with_val(20, 2)));
            }
            _ => panic!("(1 2) not parsed as a complex number"),
        }
        assert!(matches!(parse(b"(1, 2)", 10, 53), Ok(Parsed::Complex(_, _))));
        match parse(b"(ff ab)", 16, 4) {
            Ok(Parsed::Complex(re, im)) => {
                assert_eq!(re, 256);
                assert_eq!(im, 176);
            }
            _ => panic!("(ff ab) not parsed as a complex number"),
        }
    }

    #[test]
    fn check_parse_errors() {
        let bad = [
            ("", 10),
            ("()", 10),
            ("(0 0 0)", 10),
            ("(0) ", 10),
            ("(, 0)", 10),
            ("(0, )", 10),
            ("(0,,0 )", 10),
            (" ( 2)", 10),
            ("+(1 1)", 10),
            ("(1 1@1a)", 16),
            ("(8 )", 9),
            ("(1 2) 3", 10),
            ("1", 1),
            ("1", 37),
        ];
        for &(s, radix) in bad.iter() {
            assert!(parse(s.as_bytes(), radix, 53).is_err(), "{} parsed correctly", s);
        }
    }

    fn parse_err(bytes: &[u8], radix: i32) -> ParseComplexError {
        match parse(bytes, radix, 53) {
            Ok(_) => panic!("{:?} parsed correctly", bytes),
            Err(e) => e,
        }
    }

    #[test]
    fn check_error_source() {
        let err = parse_err(b"(x 1)", 10);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("real part"));
        let err = match parse_part("1.5z", true, 53) {
            Ok(_) => panic!("1.5z parsed correctly"),
            Err(e) => e,
        };
        assert!(err.to_string().starts_with("imaginary part"));
        let err = parse_err(b"1", 40);
        assert!(err.source().is_none());
    }
}

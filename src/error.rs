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

use crate::complex::ParseComplexError;
use crate::prec::PrecError;
use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};

/**
The error returned by fallible constructors and resizes of
[`Complex`](struct.Complex.html) numbers.

# Examples

```rust
use mpcomplex::{Complex, Error};
match Complex::with_val(0, 1.5) {
    Err(Error::Prec(e)) => assert_eq!(e.requested(), 0),
    _ => unreachable!(),
}
match Complex::from_str_prec("(1 x)", 53) {
    Err(Error::Parse(e)) => println!("{}", e),
    _ => unreachable!(),
}
```
*/
#[derive(Clone, Debug)]
pub enum Error {
    /// A precision outside the allowed range was requested.
    Prec(PrecError),
    /// Text could not be parsed.
    Parse(ParseComplexError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Error::Prec(ref e) => Display::fmt(e, f),
            Error::Parse(ref e) => Display::fmt(e, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::Prec(ref e) => Some(e),
            Error::Parse(ref e) => Some(e),
        }
    }
}

impl From<PrecError> for Error {
    #[inline]
    fn from(e: PrecError) -> Error {
        Error::Prec(e)
    }
}

impl From<ParseComplexError> for Error {
    #[inline]
    fn from(e: ParseComplexError) -> Error {
        Error::Parse(e)
    }
}

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

//! Precision bounds and validation.
//!
//! Every entry point of [`Complex`](../struct.Complex.html) that
//! accepts an explicit precision goes through [`check_prec`], so an
//! out-of-range precision is always reported the same way.

use az::{Az, CheckedAs};
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The precision type, a signed number of significant bits.
pub type Prec = i64;

/// Returns the minimum value for the precision.
///
/// # Examples
///
/// ```rust
/// use mpcomplex::prec;
/// println!("Minimum precision is {}", prec::prec_min());
/// ```
#[inline]
pub fn prec_min() -> Prec {
    rug::float::prec_min().az::<Prec>()
}

/// Returns the maximum value for the precision.
///
/// # Examples
///
/// ```rust
/// use mpcomplex::prec;
/// println!("Maximum precision is {}", prec::prec_max());
/// ```
#[inline]
pub fn prec_max() -> Prec {
    rug::float::prec_max().az::<Prec>()
}

/// The operation during which a precision was rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PrecOp {
    /// A new value was being constructed.
    Init,
    /// The precision of an existing value was being changed.
    Set,
}

/**
An error which is returned when a precision is outside the allowed
range.

# Examples

```rust
use mpcomplex::prec::{self, PrecOp};
let err = prec::check_prec(0, PrecOp::Init).unwrap_err();
assert_eq!(err.requested(), 0);
assert_eq!(err.min(), prec::prec_min());
assert_eq!(err.max(), prec::prec_max());
```
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrecError {
    op: PrecOp,
    requested: Prec,
    min: Prec,
    max: Prec,
}

impl PrecError {
    /// Returns the rejected precision.
    #[inline]
    pub fn requested(&self) -> Prec {
        self.requested
    }

    /// Returns the minimum allowed precision.
    #[inline]
    pub fn min(&self) -> Prec {
        self.min
    }

    /// Returns the maximum allowed precision.
    #[inline]
    pub fn max(&self) -> Prec {
        self.max
    }

    /// Returns the operation that was attempted.
    #[inline]
    pub fn op(&self) -> PrecOp {
        self.op
    }
}

impl Display for PrecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.op {
            PrecOp::Init => write!(
                f,
                "cannot init a complex with a precision of {}",
                self.requested
            )?,
            PrecOp::Set => write!(
                f,
                "cannot set the precision of a complex to the value {}",
                self.requested
            )?,
        }
        write!(
            f,
            ": the maximum allowed precision is {}, the minimum allowed precision is {}",
            self.max, self.min
        )
    }
}

impl Error for PrecError {}

/// Checks that `prec` lies within
/// [`prec_min()`]`..=`[`prec_max()`] and returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use mpcomplex::prec::{self, PrecOp};
/// assert_eq!(prec::check_prec(53, PrecOp::Set), Ok(53));
/// assert!(prec::check_prec(-1, PrecOp::Set).is_err());
/// ```
pub fn check_prec(prec: Prec, op: PrecOp) -> Result<Prec, PrecError> {
    let (min, max) = (prec_min(), prec_max());
    if prec < min || prec > max {
        log::debug!("rejected precision {} ({:?}), bounds {}..={}", prec, op, min, max);
        return Err(PrecError {
            op,
            requested: prec,
            min,
            max,
        });
    }
    Ok(prec)
}

// Converts a precision that already went through check_prec.
#[inline]
pub(crate) fn raw_prec(prec: Prec) -> u32 {
    match prec.checked_as::<u32>() {
        Some(p) => p,
        None => unreachable!("unchecked precision {}", prec),
    }
}

// Clamps a deduced precision into the allowed range.
#[inline]
pub(crate) fn clamp_prec(prec: Prec) -> Prec {
    prec.max(prec_min()).min(prec_max())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bounds() {
        assert!(prec_min() >= 1);
        assert!(prec_max() > prec_min());
        for &p in &[prec_min(), 2, 53, 1000, prec_max()] {
            assert_eq!(check_prec(p, PrecOp::Init), Ok(p));
        }
    }

    #[test]
    fn check_out_of_range() {
        for &p in &[i64::MIN, -1, 0, prec_min() - 1, prec_max() + 1, i64::MAX] {
            let err = check_prec(p, PrecOp::Set).unwrap_err();
            assert_eq!(err.requested(), p);
            assert_eq!(err.min(), prec_min());
            assert_eq!(err.max(), prec_max());
            assert_eq!(err.op(), PrecOp::Set);
        }
    }

    #[test]
    fn check_messages() {
        let init = check_prec(0, PrecOp::Init).unwrap_err().to_string();
        assert!(init.starts_with("cannot init a complex with a precision of 0"));
        assert!(init.contains(&format!("maximum allowed precision is {}", prec_max())));
        assert!(init.contains(&format!("minimum allowed precision is {}", prec_min())));
        let set = check_prec(-5, PrecOp::Set).unwrap_err().to_string();
        assert!(set.starts_with("cannot set the precision of a complex to the value -5"));
    }

    #[test]
    fn check_clamp() {
        assert_eq!(clamp_prec(0), prec_min());
        assert_eq!(clamp_prec(64), 64);
        assert_eq!(clamp_prec(i64::MAX), prec_max());
        assert_eq!(raw_prec(53), 53u32);
    }
}

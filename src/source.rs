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

//! Classification of the values a [`Complex`] number can be built
//! from.
//!
//! Every supported input is turned into one of a closed set of tags
//! before any conversion takes place:
//!
//!   * [`RealValue`] for real-valued inputs: native numbers,
//!     [`Integer`], [`Rational`] and [`Float`];
//!   * [`ComplexValue`] for anything that can be assigned to a
//!     [`Complex`] number, which is either a single real value or a
//!     pair of real values;
//!   * [`PartValue`] for a single component given to
//!     [`Complex::from_parts_prec`], which may also be text.
//!
//! Each tag has exactly one precision deduction rule and one
//! conversion into the backend [`Float`].
//!
//! [`Complex`]: ../struct.Complex.html
//! [`Complex::from_parts_prec`]: ../struct.Complex.html#method.from_parts_prec

use crate::prec::{self, Prec};
use crate::Complex;
use rug::{Assign, Float, Integer, Rational};
use std::borrow::Cow;

#[cfg(gmp_limb_bits_64)]
const LIMB_BITS: Prec = 64;
#[cfg(gmp_limb_bits_32)]
const LIMB_BITS: Prec = 32;

/// A native number together with the number of value bits of its
/// type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Native {
    /// A signed integer and the number of its value bits, not
    /// counting the sign bit.
    Signed(i128, u32),
    /// An unsigned integer and the number of its value bits.
    Unsigned(u128, u32),
    /// A single-precision float.
    F32(f32),
    /// A double-precision float.
    F64(f64),
}

impl Native {
    /// Returns the precision deduced from the type of the number.
    ///
    /// Integers use the number of value bits of their type, floats
    /// use the number of bits in their significand.
    #[inline]
    pub fn deduce_prec(&self) -> Prec {
        let bits = match *self {
            Native::Signed(_, bits) | Native::Unsigned(_, bits) => Prec::from(bits),
            Native::F32(_) => Prec::from(f32::MANTISSA_DIGITS),
            Native::F64(_) => Prec::from(f64::MANTISSA_DIGITS),
        };
        prec::clamp_prec(bits)
    }

    fn assign_to(&self, dst: &mut Float) {
        match *self {
            Native::Signed(i, _) => dst.assign(i),
            Native::Unsigned(u, _) => dst.assign(u),
            Native::F32(f) => dst.assign(f),
            Native::F64(f) => dst.assign(f),
        }
    }

    fn eq_float(&self, f: &Float) -> bool {
        match *self {
            Native::Signed(i, _) => *f == i,
            Native::Unsigned(u, _) => *f == u,
            Native::F32(x) => *f == x,
            Native::F64(x) => *f == x,
        }
    }
}

/// A classified real-valued source.
///
/// Values are either borrowed or owned; an owned [`Float`] is adopted
/// without copying its limbs whenever its precision can be kept.
#[derive(Clone, Debug)]
pub enum RealValue<'a> {
    /// A native integer or float.
    Native(Native),
    /// An arbitrary-precision integer.
    Integer(Cow<'a, Integer>),
    /// An arbitrary-precision rational number.
    Rational(Cow<'a, Rational>),
    /// A multi-precision floating-point number.
    Float(Cow<'a, Float>),
}

// Number of limbs times the limb size, like the size of the
// underlying mpz.
fn limb_bits(int: &Integer) -> Prec {
    let bits = Prec::from(int.significant_bits());
    (bits + LIMB_BITS - 1) / LIMB_BITS * LIMB_BITS
}

impl RealValue<'_> {
    /// Returns the precision that is used for this value when no
    /// explicit precision is given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::source::RealSource;
    /// use rug::Float;
    /// assert_eq!(5i32.into_real_value().deduce_prec(), 31);
    /// assert_eq!(5u64.into_real_value().deduce_prec(), 64);
    /// assert_eq!(1.5f64.into_real_value().deduce_prec(), 53);
    /// let f = Float::with_val(100, 1.5);
    /// assert_eq!((&f).into_real_value().deduce_prec(), 100);
    /// ```
    pub fn deduce_prec(&self) -> Prec {
        match *self {
            RealValue::Native(ref n) => n.deduce_prec(),
            RealValue::Integer(ref i) => prec::clamp_prec(limb_bits(i)),
            RealValue::Rational(ref r) => {
                prec::clamp_prec(limb_bits(r.numer()) + limb_bits(r.denom()))
            }
            RealValue::Float(ref f) => Prec::from(f.prec()),
        }
    }

    /// Converts into a [`Float`], either at the deduced precision or
    /// at the given raw precision, rounding to the nearest.
    pub(crate) fn into_float(self, prec: Option<u32>) -> Float {
        let prec = match prec {
            Some(p) => p,
            None => {
                if let RealValue::Float(Cow::Owned(f)) = self {
                    return f;
                }
                crate::prec::raw_prec(self.deduce_prec())
            }
        };
        match self {
            RealValue::Float(Cow::Owned(mut f)) => {
                f.set_prec(prec);
                f
            }
            other => {
                let mut f = Float::new(prec);
                other.set_float(&mut f);
                f
            }
        }
    }

    /// Sets the value of `dst` keeping its precision, rounding to the
    /// nearest.
    pub(crate) fn set_float(&self, dst: &mut Float) {
        match *self {
            RealValue::Native(ref n) => n.assign_to(dst),
            RealValue::Integer(ref i) => dst.assign(&**i),
            RealValue::Rational(ref r) => dst.assign(&**r),
            RealValue::Float(ref f) => dst.assign(&**f),
        }
    }

    /// Checks whether `f` is exactly equal to this value.
    pub(crate) fn eq_float(&self, f: &Float) -> bool {
        match *self {
            RealValue::Native(ref n) => n.eq_float(f),
            RealValue::Integer(ref i) => *f == **i,
            RealValue::Rational(ref r) => *f == **r,
            RealValue::Float(ref g) => *f == **g,
        }
    }
}

/// A classified source that can be assigned to a [`Complex`] number.
///
/// [`Complex`]: ../struct.Complex.html
#[derive(Clone, Debug)]
pub enum ComplexValue<'a> {
    /// A real value, the imaginary part is zero.
    Real(RealValue<'a>),
    /// A real part and an imaginary part.
    Pair(RealValue<'a>, RealValue<'a>),
}

/// A classified component for
/// [`Complex::from_parts_prec`](../struct.Complex.html#method.from_parts_prec).
#[derive(Clone, Debug)]
pub enum PartValue<'a> {
    /// A real value.
    Value(RealValue<'a>),
    /// A decimal string, parsed by the backend.
    Text(Cow<'a, str>),
}

/// Real-valued types that can be used to build a [`Complex`] number.
///
/// [`Complex`]: ../struct.Complex.html
pub trait RealSource<'a> {
    /// Classifies the value.
    fn into_real_value(self) -> RealValue<'a>;
}

/// Types that can be assigned to a [`Complex`] number.
///
/// [`Complex`]: ../struct.Complex.html
pub trait ComplexSource<'a> {
    /// Classifies the value.
    fn into_complex_value(self) -> ComplexValue<'a>;
}

/// Types that can be used as one component of a [`Complex`] number
/// when an explicit precision is given, which includes text.
///
/// [`Complex`]: ../struct.Complex.html
pub trait PartSource<'a> {
    /// Classifies the value.
    fn into_part_value(self) -> PartValue<'a>;
}

macro_rules! real_source {
    ($($T:ty => |$x:ident| $e:expr;)*) => { $(
        impl<'a> RealSource<'a> for $T {
            #[inline]
            fn into_real_value(self) -> RealValue<'a> {
                let $x = self;
                $e
            }
        }

        impl<'a> ComplexSource<'a> for $T {
            #[inline]
            fn into_complex_value(self) -> ComplexValue<'a> {
                ComplexValue::Real(self.into_real_value())
            }
        }

        impl<'a> PartSource<'a> for $T {
            #[inline]
            fn into_part_value(self) -> PartValue<'a> {
                PartValue::Value(self.into_real_value())
            }
        }
    )* };
}

macro_rules! native_source {
    ($Variant:ident, $Wide:ty; $($T:ty)*) => {
        real_source! { $(
            $T => |x| RealValue::Native(Native::$Variant(
                <$Wide>::from(x),
                <$T>::BITS - u32::from(<$T>::MIN != 0),
            ));
        )* }
    };
}

native_source! { Signed, i128; i8 i16 i32 i64 i128 }
native_source! { Unsigned, u128; u8 u16 u32 u64 u128 }

real_source! {
    isize => |x| RealValue::Native(Native::Signed(x as i128, isize::BITS - 1));
    usize => |x| RealValue::Native(Native::Unsigned(x as u128, usize::BITS));
    bool => |x| RealValue::Native(Native::Unsigned(u128::from(x), 1));
    f32 => |x| RealValue::Native(Native::F32(x));
    f64 => |x| RealValue::Native(Native::F64(x));
    Integer => |x| RealValue::Integer(Cow::Owned(x));
    &'a Integer => |x| RealValue::Integer(Cow::Borrowed(x));
    Rational => |x| RealValue::Rational(Cow::Owned(x));
    &'a Rational => |x| RealValue::Rational(Cow::Borrowed(x));
    Float => |x| RealValue::Float(Cow::Owned(x));
    &'a Float => |x| RealValue::Float(Cow::Borrowed(x));
}

macro_rules! text_source {
    ($($T:ty => |$x:ident| $e:expr;)*) => { $(
        impl<'a> PartSource<'a> for $T {
            #[inline]
            fn into_part_value(self) -> PartValue<'a> {
                let $x = self;
                PartValue::Text($e)
            }
        }
    )* };
}

text_source! {
    &'a str => |s| Cow::Borrowed(s);
    &'a String => |s| Cow::Borrowed(s.as_str());
    String => |s| Cow::Owned(s);
}

impl<'a, Re, Im> ComplexSource<'a> for (Re, Im)
where
    Re: RealSource<'a>,
    Im: RealSource<'a>,
{
    #[inline]
    fn into_complex_value(self) -> ComplexValue<'a> {
        ComplexValue::Pair(self.0.into_real_value(), self.1.into_real_value())
    }
}

impl<'a> ComplexSource<'a> for Complex {
    #[inline]
    fn into_complex_value(self) -> ComplexValue<'a> {
        let (re, im) = self.into_real_imag();
        ComplexValue::Pair(re.into_real_value(), im.into_real_value())
    }
}

impl<'a> ComplexSource<'a> for &'a Complex {
    #[inline]
    fn into_complex_value(self) -> ComplexValue<'a> {
        let (re, im) = self.as_real_imag();
        ComplexValue::Pair(re.into_real_value(), im.into_real_value())
    }
}

impl<'a> ComplexSource<'a> for rug::Complex {
    #[inline]
    fn into_complex_value(self) -> ComplexValue<'a> {
        let (re, im) = self.into_real_imag();
        ComplexValue::Pair(re.into_real_value(), im.into_real_value())
    }
}

impl<'a> ComplexSource<'a> for &'a rug::Complex {
    #[inline]
    fn into_complex_value(self) -> ComplexValue<'a> {
        ComplexValue::Pair(self.real().into_real_value(), self.imag().into_real_value())
    }
}

#[cfg(feature = "num-complex")]
macro_rules! num_complex_source {
    ($($T:ty)*) => { $(
        impl<'a> ComplexSource<'a> for num_complex::Complex<$T> {
            #[inline]
            fn into_complex_value(self) -> ComplexValue<'a> {
                ComplexValue::Pair(self.re.into_real_value(), self.im.into_real_value())
            }
        }

        impl<'a> ComplexSource<'a> for &'a num_complex::Complex<$T> {
            #[inline]
            fn into_complex_value(self) -> ComplexValue<'a> {
                ComplexValue::Pair(self.re.into_real_value(), self.im.into_real_value())
            }
        }
    )* };
}

#[cfg(feature = "num-complex")]
num_complex_source! { f32 f64 }

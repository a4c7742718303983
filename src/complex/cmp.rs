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

use crate::source::{RealSource, RealValue};
use crate::Complex;
use rug::{Float, Integer, Rational};

impl Complex {
    // The imaginary part is zero and the real part equals val.
    #[inline]
    fn eq_real(&self, val: RealValue<'_>) -> bool {
        let (re, im) = self.as_real_imag();
        im.is_zero() && val.eq_float(re)
    }

    #[inline]
    fn eq_pair(&self, re: RealValue<'_>, im: RealValue<'_>) -> bool {
        let (self_re, self_im) = self.as_real_imag();
        re.eq_float(self_re) && im.eq_float(self_im)
    }
}

impl PartialEq for Complex {
    #[inline]
    fn eq(&self, other: &Complex) -> bool {
        let (re, im) = self.as_real_imag();
        let (other_re, other_im) = other.as_real_imag();
        *re == *other_re && *im == *other_im
    }
}

macro_rules! eq_real {
    ($($T:ty => |$x:ident| $val:expr;)*) => { $(
        impl PartialEq<$T> for Complex {
            #[inline]
            fn eq(&self, other: &$T) -> bool {
                let $x = other;
                self.eq_real($val)
            }
        }

        impl PartialEq<Complex> for $T {
            #[inline]
            fn eq(&self, other: &Complex) -> bool {
                let $x = self;
                other.eq_real($val)
            }
        }
    )* };
}

macro_rules! eq_native {
    ($($T:ty)*) => {
        eq_real! { $($T => |x| (*x).into_real_value();)* }
    };
}

eq_native! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize bool f32 f64 }

eq_real! {
    Integer => |x| x.into_real_value();
    Rational => |x| x.into_real_value();
    Float => |x| x.into_real_value();
}

impl PartialEq<rug::Complex> for Complex {
    #[inline]
    fn eq(&self, other: &rug::Complex) -> bool {
        self.eq_pair(other.real().into_real_value(), other.imag().into_real_value())
    }
}

impl PartialEq<Complex> for rug::Complex {
    #[inline]
    fn eq(&self, other: &Complex) -> bool {
        other.eq(self)
    }
}

#[cfg(feature = "num-complex")]
macro_rules! eq_num_complex {
    ($($T:ty)*) => { $(
        impl PartialEq<num_complex::Complex<$T>> for Complex {
            #[inline]
            fn eq(&self, other: &num_complex::Complex<$T>) -> bool {
                self.eq_pair(other.re.into_real_value(), other.im.into_real_value())
            }
        }

        impl PartialEq<Complex> for num_complex::Complex<$T> {
            #[inline]
            fn eq(&self, other: &Complex) -> bool {
                other.eq(self)
            }
        }
    )* };
}

#[cfg(feature = "num-complex")]
eq_num_complex! { f32 f64 }

#[cfg(test)]
mod tests {
    use crate::Complex;
    use rug::{Float, Integer, Rational};

    #[test]
    fn check_eq_ignores_prec() {
        let a = Complex::with_val(10, (1.5, -2)).unwrap();
        let b = Complex::with_val(200, (1.5, -2)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Complex::from_parts(1.5, 2));
        let zero = Complex::new();
        let neg = Complex::from_parts(-0.0, -0.0);
        assert_eq!(zero, neg);
    }

    #[test]
    fn check_eq_nan() {
        let mut c = Complex::from_parts(1, 1);
        c.set_prec(53).unwrap();
        assert_ne!(c, c.clone());
        assert_ne!(c, 0);
    }

    #[test]
    fn check_eq_real() {
        let c = Complex::from_value(3);
        assert_eq!(c, 3i8);
        assert_eq!(3u128, c);
        assert_eq!(c, 3.0f32);
        assert_eq!(c, Integer::from(3));
        assert_eq!(Rational::from((6, 2)), c);
        assert_eq!(c, Float::with_val(5, 3));
        assert_eq!(Complex::from_value(true), true);
        assert_ne!(Complex::from_parts(3, 1), 3);
        assert_ne!(c, 4);
    }

    #[test]
    fn check_eq_pairs() {
        let c = Complex::from_parts(0.5, -4);
        let r = rug::Complex::with_val(8, (0.5, -4));
        assert_eq!(c, r);
        assert_eq!(r, c);
        assert_ne!(c, rug::Complex::with_val(8, (0.5, 4)));
    }

    #[cfg(feature = "num-complex")]
    #[test]
    fn check_eq_num_complex() {
        let c = Complex::from_parts(0.25, 8);
        assert_eq!(c, num_complex::Complex::new(0.25f64, 8.0));
        assert_eq!(num_complex::Complex::new(0.25f32, 8.0), c);
        assert_ne!(c, num_complex::Complex::new(0.25f64, -8.0));
    }
}

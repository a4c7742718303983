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

use crate::source::{ComplexSource, RealSource};
use crate::Complex;
use rug::{Assign, Float, Integer, Rational};
use std::fmt::{
    Binary, Debug, Display, Formatter, LowerExp, LowerHex, Octal, Result as FmtResult, UpperExp,
    UpperHex,
};

impl Clone for Complex {
    #[inline]
    fn clone(&self) -> Complex {
        let (re, im) = self.as_real_imag();
        Complex::from_floats(re.clone(), im.clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Complex) {
        self.assign(source);
    }
}

impl Default for Complex {
    #[inline]
    fn default() -> Complex {
        Complex::new()
    }
}

impl<'a, T> Assign<T> for Complex
where
    T: ComplexSource<'a>,
{
    #[inline]
    fn assign(&mut self, src: T) {
        self.assign_value(src.into_complex_value());
    }
}

from_source! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    bool f32 f64
    Integer Rational Float rug::Complex
}
from_source! { ref Integer Rational Float rug::Complex Complex }

#[cfg(feature = "num-complex")]
from_source! { num_complex::Complex<f32> num_complex::Complex<f64> }
#[cfg(feature = "num-complex")]
from_source! { ref num_complex::Complex<f32> num_complex::Complex<f64> }

impl<'a, 'b, Re, Im> From<(Re, Im)> for Complex
where
    Re: RealSource<'a>,
    Im: RealSource<'b>,
{
    #[inline]
    fn from((re, im): (Re, Im)) -> Self {
        Complex::from_parts(re, im)
    }
}

impl From<Complex> for rug::Complex {
    #[inline]
    fn from(src: Complex) -> rug::Complex {
        // Safety: both parts are initialized and ownership moves over.
        unsafe { rug::Complex::from_raw(src.into_raw()) }
    }
}

fmt_parts! { Display LowerExp UpperExp Binary Octal LowerHex UpperHex }

impl Debug for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if !self.is_valid() {
            return f.write_str("Complex(<moved-from>)");
        }
        f.write_str("(")?;
        Debug::fmt(&*self.real(), f)?;
        f.write_str(" ")?;
        Debug::fmt(&*self.imag(), f)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Assign, Complex};
    use rug::{Float, Integer, Rational};

    #[test]
    fn check_clone_keeps_prec() {
        let a = Complex::with_val(77, (1.25, -3)).unwrap();
        let b = a.clone();
        assert_eq!(b.prec(), 77);
        assert_eq!(a, b);
        let mut c = Complex::from_value(1u8);
        c.clone_from(&a);
        assert_eq!(c.prec(), 77);
        assert_eq!(c, a);
    }

    #[test]
    fn check_clone_from_into_moved_from() {
        let a = Complex::from_parts(1.5, 2.5);
        let mut b = Complex::from_value(9);
        let _ = b.take();
        b.clone_from(&a);
        assert!(b.is_valid());
        assert_eq!(b.prec(), 53);
        assert_eq!(b, a);
    }

    #[test]
    fn check_default() {
        let c = Complex::default();
        assert_eq!(c.prec(), crate::prec::prec_min());
        assert!(c.real().is_zero() && c.imag().is_zero());
        assert!(c.real().is_sign_positive() && c.imag().is_sign_positive());
    }

    #[test]
    fn check_from_conversions() {
        let c = Complex::from(-5i64);
        assert_eq!(c.prec(), 63);
        assert_eq!(c, -5);
        let c = Complex::from(true);
        assert_eq!(c.prec(), 1);
        assert_eq!(c, 1);
        let c = Complex::from(&Rational::from((1, 4)));
        assert_eq!(c, 0.25);
        let c = Complex::from((Integer::from(3), 0.5f32));
        assert!(c.prec() >= 32);
        assert_eq!(c, Complex::from_parts(3, 0.5));
        let c = Complex::from(Float::with_val(40, 1.5));
        assert_eq!(c.prec(), 40);
        let r = rug::Complex::with_val(30, (1, 2));
        let c = Complex::from(&r);
        assert_eq!(c.prec(), 30);
        assert_eq!(c, r);
    }

    #[cfg(feature = "num-complex")]
    #[test]
    fn check_from_num_complex() {
        let c = Complex::from(num_complex::Complex::new(1.5f32, -2.0f32));
        assert_eq!(c.prec(), 24);
        assert_eq!(c, num_complex::Complex::new(1.5f32, -2.0f32));
        let c = Complex::from(&num_complex::Complex::new(0.5f64, 4.0f64));
        assert_eq!(c.prec(), 53);
    }

    #[test]
    fn check_into_rug() {
        let c = Complex::with_val(45, (2, -7)).unwrap();
        let r = rug::Complex::from(c);
        assert_eq!(r.prec(), (45, 45));
        assert_eq!(*r.real(), 2);
        assert_eq!(*r.imag(), -7);
    }

    #[test]
    fn check_assign_real_resets_imag() {
        let mut c = Complex::with_val(100, (1, 2)).unwrap();
        c.assign(2.5f32);
        assert_eq!(c.prec(), 24);
        assert_eq!(*c.real(), 2.5);
        assert!(c.imag().is_zero() && c.imag().is_sign_positive());
        c.assign(Float::with_val(300, 1));
        assert_eq!(c.prec(), 300);
        assert_eq!(c, 1);
    }

    #[test]
    fn check_assign_pair_widens() {
        let mut c = Complex::new();
        c.assign((1u8, Float::with_val(90, 0.75)));
        assert_eq!(c.prec(), 90);
        assert_eq!(c, Complex::from_parts(1, 0.75));
        let src = Complex::with_val(12, (3, 4)).unwrap();
        c.assign(&src);
        assert_eq!(c.prec(), 12);
        assert_eq!(c, src);
    }

    #[test]
    fn check_assign_into_moved_from() {
        let mut c = Complex::from_value(1);
        let _ = c.take();
        c.assign(-4i8);
        assert!(c.is_valid());
        assert_eq!(c.prec(), 7);
        assert_eq!(c, -4);
    }

    #[test]
    fn check_formatting() {
        let c = Complex::from_parts(1.5, -2);
        let (re, im) = (Float::with_val(53, 1.5), Float::with_val(53, -2));
        assert_eq!(format!("{}", c), format!("({} {})", re, im));
        assert_eq!(format!("{:.2}", c), format!("({:.2} {:.2})", re, im));
        assert_eq!(format!("{:x}", c), format!("({:x} {:x})", re, im));
        let s = format!("{:?}", c);
        assert!(s.starts_with('(') && s.ends_with(')'));
        let mut d = c.clone();
        let _ = d.take();
        assert_eq!(format!("{:?}", d), "Complex(<moved-from>)");
    }
}

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

//! Multi-precision complex numbers with one shared precision.
//!
//! This module provides support for complex numbers of type
//! [`Complex`](../struct.Complex.html), and the references to their
//! real and imaginary parts.

pub(crate) mod big;
mod borrow;
mod cmp;
pub(crate) mod parse;
#[cfg(feature = "serde")]
mod serde;
mod traits;

pub use crate::complex::big::swap;
pub use crate::complex::borrow::{ImagMut, ImagRef, RealMut, RealRef};
pub use crate::complex::parse::ParseComplexError;

#[cfg(test)]
mod tests {
    use crate::prec::{self, PrecOp};
    use crate::{Assign, Complex, Error};
    use rug::{Float, Integer, Rational};

    fn same_prec(c: &Complex) -> bool {
        c.real().prec() == c.imag().prec()
    }

    #[test]
    fn check_explicit_prec() {
        for &p in &[1, 2, 24, 53, 64, 1000] {
            let c = Complex::with_val(p, 1.5).unwrap();
            assert_eq!(c.prec(), p);
            let c = Complex::with_val(p, (Integer::from(7), -0.25f32)).unwrap();
            assert_eq!(c.prec(), p);
            assert!(same_prec(&c));
            let c = Complex::from_parts_prec("0.5", "-1", p).unwrap();
            assert_eq!(c.prec(), p);
            assert!(same_prec(&c));
        }
    }

    #[test]
    fn check_prec_out_of_range() {
        let min = prec::prec_min();
        let max = prec::prec_max();
        for &p in &[min - 1, -5, max + 1, i64::MAX] {
            match Complex::with_val(p, 1) {
                Err(Error::Prec(e)) => {
                    assert_eq!(e.requested(), p);
                    assert_eq!(e.op(), PrecOp::Init);
                    assert_eq!((e.min(), e.max()), (min, max));
                }
                _ => panic!("precision {} accepted", p),
            }
            assert!(Complex::from_parts_prec(1, 2, p).is_err());
            assert!(Complex::from_str_prec("(1 2)", p).is_err());

            let mut c = Complex::from_parts(1, 2);
            match c.set_prec(p) {
                Err(Error::Prec(e)) => {
                    assert_eq!(e.requested(), p);
                    assert_eq!(e.op(), PrecOp::Set);
                }
                _ => panic!("precision {} accepted", p),
            }
            assert!(c.prec_round(p).is_err());
            assert_eq!(c, Complex::from_parts(1, 2));
        }
    }

    #[test]
    fn check_real_construction() {
        fn check<'a, T>(x: T, expected: i64)
        where
            T: crate::source::ComplexSource<'a> + Clone + PartialEq<Complex>,
        {
            let c = Complex::from_value(x.clone());
            assert_eq!(c.prec(), expected);
            assert!(same_prec(&c));
            assert!(c.imag().is_zero() && c.imag().is_sign_positive());
            assert!(x == c);
        }
        check(-3i8, 7);
        check(200u8, 8);
        check(true, 1);
        check(1.5f32, 24);
        check(1.5f64, 53);
        check(Float::with_val(123, 1.25), 123);
        check(Rational::from((3, 4)), Complex::from_value(Rational::from((3, 4))).prec());
        let i = Integer::from(-9);
        assert_eq!(Complex::from_value(&i), i);
    }

    #[test]
    fn check_move_construction() {
        let mut a = Complex::with_val(80, (1.5, -0.5)).unwrap();
        let before = a.clone();
        let b = a.take();
        assert!(!a.is_valid());
        assert!(b.is_valid());
        assert_eq!(b.prec(), 80);
        assert_eq!(b, before);
        drop(a);
        drop(b);
    }

    #[test]
    fn check_move_with_prec() {
        let a = Complex::with_val(80, (1.5, -0.5)).unwrap();
        let b = Complex::with_val(10, a).unwrap();
        assert_eq!(b.prec(), 10);
        assert_eq!(b, Complex::from_parts(1.5, -0.5));
    }

    #[test]
    fn check_move_assignment() {
        let mut a = Complex::from_parts(1u8, 2u8);
        let mut b = Complex::with_val(60, (3, 4)).unwrap();
        a.assign_move(&mut b);
        assert_eq!(a.prec(), 60);
        assert_eq!(a, Complex::from_parts(3, 4));
        assert_eq!(b.prec(), 8);
        assert_eq!(b, Complex::from_parts(1, 2));

        let mut dead = Complex::new();
        let _ = dead.take();
        a.assign_move(&mut dead);
        assert!(!a.is_valid());
        assert_eq!(dead, Complex::from_parts(3, 4));
    }

    #[test]
    #[should_panic(expected = "moved-from")]
    fn check_moved_from_read_panics() {
        let mut a = Complex::new();
        let _ = a.take();
        let _ = a.prec();
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "different precisions")]
    fn check_diverging_prec_is_caught() {
        let mut c = Complex::with_val(53, (1, 2)).unwrap();
        c.real_mut().set_prec(64);
        let _ = c.prec();
    }

    #[test]
    fn check_equality() {
        let a = Complex::from_parts(3, 4);
        assert_eq!(a, Complex::from_parts(3, 4));
        assert_ne!(a, 3);
        assert_ne!(3, a);
        let b = Complex::from_parts(3, 0);
        assert_eq!(b, 3);
        assert_eq!(3, b);
    }

    #[test]
    fn check_pair_deduction_takes_max() {
        let c = Complex::from_parts(1u8, 1.5f64);
        assert_eq!(c.prec(), 53);
        let c = Complex::from_parts(Float::with_val(200, 1), 2i16);
        assert_eq!(c.prec(), 200);
        let c = Complex::from_parts(true, 2u64);
        assert_eq!(c.prec(), 64);
        assert!(same_prec(&c));
    }

    #[test]
    fn check_assign_real() {
        let mut c = Complex::with_val(100, (5, 6)).unwrap();
        c.assign(-2i32);
        assert_eq!(c.prec(), 31);
        assert!(same_prec(&c));
        assert!(c.imag().is_zero());
        assert_eq!(c, -2);
        c.assign(&Rational::from((1, 2)));
        assert!(same_prec(&c));
        assert_eq!(c, 0.5);
    }

    #[test]
    fn check_assign_complex() {
        let mut c = Complex::new();
        c.assign(rug::Complex::with_val((20, 70), (1, 2)));
        assert_eq!(c.prec(), 70);
        assert!(same_prec(&c));
        assert_eq!(c, Complex::from_parts(1, 2));
        let src = Complex::with_val(9, (3, -3)).unwrap();
        c.assign(&src);
        assert_eq!(c.prec(), 9);
        assert_eq!(c, src);
    }

    #[test]
    fn check_set_keeps_prec() {
        let mut c = Complex::with_val(30, (1, 1)).unwrap();
        c.set(Float::with_val(200, 0.5));
        assert_eq!(c.prec(), 30);
        assert_eq!(c, 0.5);
        c.set((2, 3));
        assert_eq!(c.prec(), 30);
        assert_eq!(c, Complex::from_parts(2, 3));
    }

    #[test]
    fn check_prec_round_and_set_prec() {
        let mut c = Complex::with_val(53, (1.0 / 3.0, 2.0 / 3.0)).unwrap();
        c.prec_round(10).unwrap();
        assert_eq!(c.prec(), 10);
        assert_eq!(
            c,
            Complex::with_val(10, (1.0 / 3.0, 2.0 / 3.0)).unwrap()
        );
        c.set_prec(20).unwrap();
        assert_eq!(c.prec(), 20);
        assert!(c.real().is_nan() && c.imag().is_nan());
    }

    #[test]
    fn check_proxy_round_trip() {
        let mut c = Complex::with_val(53, (1, 2)).unwrap();
        {
            let mut re = c.real_mut();
            *re += 10;
        }
        assert!(c.is_valid());
        assert_eq!(c, Complex::from_parts(11, 2));
        {
            let mut im = c.imag_mut();
            im.assign(-0.5);
        }
        assert_eq!(c, Complex::from_parts(11, -0.5));
    }

    #[test]
    fn check_swap() {
        let mut a = Complex::with_val(16, (1, 2)).unwrap();
        let mut b = Complex::with_val(90, (3, 4)).unwrap();
        let (a_old, b_old) = (a.clone(), b.clone());
        // Safety: both values are valid and only their limb pointers are read.
        let limbs = |c: &Complex| unsafe { ((*c.as_raw()).re.d, (*c.as_raw()).im.d) };
        let (a_limbs, b_limbs) = (limbs(&a), limbs(&b));
        super::swap(&mut a, &mut b);
        assert_eq!(limbs(&a), b_limbs);
        assert_eq!(limbs(&b), a_limbs);
        assert_eq!((a.prec(), b.prec()), (90, 16));
        assert_eq!(*a.real(), *b_old.real());
        assert_eq!(*a.imag(), *b_old.imag());
        assert_eq!(*b.real(), *a_old.real());
        assert_eq!(*b.imag(), *a_old.imag());
        a.swap(&mut b);
        assert_eq!(a, a_old);
        assert_eq!(b, b_old);
    }

    #[test]
    fn check_parse() {
        let c = Complex::from_str_prec("(1.5, -2.25)", 53).unwrap();
        assert_eq!(c, Complex::from_parts(1.5, -2.25));
        let c = Complex::parse_radix("(1.1 -10)", 2, 8).unwrap();
        assert_eq!(c.prec(), 8);
        assert_eq!(c, Complex::from_parts(1.5, -2));
        assert!(matches!(
            Complex::from_str_prec("(1 2", 53),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            Complex::from_parts_prec("1.5", "abc", 53),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn check_raw() {
        let c = Complex::with_val(33, (1, -1)).unwrap();
        let raw = c.into_raw();
        // Safety: raw was just released by a Complex.
        let mut c = unsafe { Complex::from_raw(raw) };
        assert_eq!(c.prec(), 33);

        let src = rug::Complex::with_val((10, 50), (0.5, 4));
        // Safety: src is initialized and outlives the calls.
        let copy = unsafe { Complex::from_raw_ref(src.as_raw()) };
        assert_eq!(copy.prec(), 50);
        assert_eq!(copy, src);
        unsafe { c.assign_raw(src.as_raw()) };
        assert_eq!(c.prec(), 50);
        assert_eq!(c, src);
        let keep = Complex::with_val(12, 0).unwrap();
        let mut kept = keep.clone();
        unsafe { kept.set_raw(src.as_raw()) };
        assert_eq!(kept.prec(), 12);
        assert_eq!(kept, src);

        let owned = Complex::with_val(70, (2, 2)).unwrap().into_raw();
        unsafe { c.assign_raw_owned(owned) };
        assert_eq!(c.prec(), 70);
        assert_eq!(c, Complex::from_parts(2, 2));
        assert!(!c.as_raw().is_null());
    }

    #[test]
    fn check_prec_error_display() {
        let e = match Complex::with_val(0, 1) {
            Err(e) => e,
            Ok(_) => panic!("precision 0 accepted"),
        };
        match prec::check_prec(0, PrecOp::Init) {
            Err(pe) => assert_eq!(e.to_string(), pe.to_string()),
            Ok(_) => panic!("precision 0 accepted"),
        }
    }
}

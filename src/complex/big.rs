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

use crate::complex::borrow::{ImagMut, ImagRef, RealMut, RealRef};
use crate::complex::parse::{self, Parsed};
use crate::prec::{self, Prec, PrecOp};
use crate::source::{
    ComplexSource, ComplexValue, PartSource, PartValue, RealSource, RealValue,
};
use crate::Error;
use az::Az;
use gmp_mpfr_sys::mpc::{self, mpc_t};
use gmp_mpfr_sys::mpfr;
use rug::float::Special;
use rug::{Assign, Float};
use std::mem;

/**
A multi-precision complex number whose real and imaginary parts
always share one precision.

The precision is either deduced from the source value or given
explicitly, in which case it is checked against
[`prec_min`](prec/fn.prec_min.html) and
[`prec_max`](prec/fn.prec_max.html).

# Examples

```rust
use mpcomplex::{Assign, Complex};
// precision deduced from i32 (31 bits) and f64 (53 bits)
let mut c = Complex::from_parts(3, 0.5);
assert_eq!(c.prec(), 53);
// explicit precision
let d = Complex::with_val(100, &c).unwrap();
assert_eq!(d.prec(), 100);
assert_eq!(c, d);
// assigning a real value clears the imaginary part
c.assign(7u8);
assert_eq!(c.prec(), 8);
assert_eq!(c, 7);
```

A value can be left in a moved-from state by [`take`], after which
it can only be assigned to or dropped.

```rust
use mpcomplex::Complex;
let mut a = Complex::from_parts(1, 2);
let b = a.take();
assert!(!a.is_valid());
assert_eq!(b, Complex::from_parts(1, 2));
```

[`take`]: #method.take
*/
pub struct Complex {
    inner: Option<mpc_t>,
}

// Safety: the limbs are owned exclusively, and shared references only
// read them.
unsafe impl Send for Complex {}
unsafe impl Sync for Complex {}

impl Drop for Complex {
    #[inline]
    fn drop(&mut self) {
        if let Some(ref mut raw) = self.inner {
            // Safety: raw is initialized and owned by self.
            unsafe {
                mpc::clear(raw);
            }
        }
    }
}

#[cold]
#[inline(never)]
fn moved_from() -> ! {
    panic!("use of a moved-from Complex");
}

// Resizes f to prec, discarding its value.
#[inline]
fn set_prec_nan(f: &mut Float, prec: u32) {
    // Safety: f is initialized and prec was validated.
    unsafe {
        mpfr::set_prec(f.as_raw_mut(), prec.az::<mpfr::prec_t>());
    }
}

impl Complex {
    // Takes over the storage of both floats. They must have the same
    // precision.
    #[inline]
    pub(crate) fn from_floats(re: Float, im: Float) -> Complex {
        debug_assert_eq!(re.prec(), im.prec());
        Complex {
            inner: Some(mpc_t {
                re: re.into_raw(),
                im: im.into_raw(),
            }),
        }
    }

    fn from_complex_value(val: ComplexValue<'_>) -> Complex {
        match val {
            ComplexValue::Real(re) => {
                let re = re.into_float(None);
                let im = Float::new(re.prec());
                Complex::from_floats(re, im)
            }
            ComplexValue::Pair(re, im) => Complex::from_real_values(re, im),
        }
    }

    fn from_real_values(re: RealValue<'_>, im: RealValue<'_>) -> Complex {
        let prec = prec::raw_prec(re.deduce_prec().max(im.deduce_prec()));
        Complex::from_floats(re.into_float(Some(prec)), im.into_float(Some(prec)))
    }

    #[inline]
    pub(crate) fn raw(&self) -> &mpc_t {
        match self.inner {
            Some(ref raw) => raw,
            None => moved_from(),
        }
    }

    #[inline]
    pub(crate) fn raw_mut(&mut self) -> &mut mpc_t {
        match self.inner {
            Some(ref mut raw) => raw,
            None => moved_from(),
        }
    }

    // Borrows both parts for the lifetime of self.
    #[inline]
    pub(crate) fn as_real_imag(&self) -> (&Float, &Float) {
        let raw = self.raw();
        // Safety: Float is repr(transparent) over mpfr_t and both parts
        // are initialized.
        unsafe {
            (
                &*cast_ptr!(&raw.re, Float),
                &*cast_ptr!(&raw.im, Float),
            )
        }
    }

    /// Creates a new [`Complex`] number with the value `(0, 0)` and the
    /// minimum precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::{prec, Complex};
    /// let c = Complex::new();
    /// assert_eq!(c.prec(), prec::prec_min());
    /// assert_eq!(c, 0);
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    #[inline]
    pub fn new() -> Self {
        let prec = prec::raw_prec(prec::prec_min());
        Complex::from_floats(Float::new(prec), Float::new(prec))
    }

    /// Creates a new [`Complex`] number from a value, deducing the
    /// precision from the value.
    ///
    /// For a real value, the real part is converted at the precision
    /// deduced for the value and the imaginary part is set to +0 at
    /// the same precision. An owned [`Float`] is adopted as the real
    /// part without copying.
    ///
    /// For a complex value, the result is the same as
    /// [`from_parts`] applied to its real and imaginary parts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// use rug::{Float, Integer};
    /// let c = Complex::from_value(-3i16);
    /// assert_eq!(c.prec(), 15);
    /// assert_eq!(c, -3);
    /// let c = Complex::from_value(Float::with_val(80, 1.5));
    /// assert_eq!(c.prec(), 80);
    /// let c = Complex::from_value(&Integer::from(5));
    /// assert_eq!(c, 5);
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    /// [`Float`]: https://docs.rs/rug/*/rug/struct.Float.html
    /// [`from_parts`]: #method.from_parts
    #[inline]
    pub fn from_value<'a, T>(val: T) -> Self
    where
        T: ComplexSource<'a>,
    {
        Complex::from_complex_value(val.into_complex_value())
    }

    /// Creates a new [`Complex`] number with the specified precision
    /// and with the given value, rounding to the nearest.
    ///
    /// Passing a [`Complex`] number by value reuses its storage and
    /// rounds it to the new precision; passing it by reference copies
    /// it.
    ///
    /// # Errors
    ///
    /// Returns an error if `prec` is out of the allowed range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let c = Complex::with_val(4, 3.3).unwrap();
    /// assert_eq!(c.prec(), 4);
    /// // 3.3 is rounded to 3.25
    /// assert_eq!(c, 3.25);
    /// assert!(Complex::with_val(0, 1).is_err());
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    pub fn with_val<'a, T>(prec: Prec, val: T) -> Result<Self, Error>
    where
        T: ComplexSource<'a>,
    {
        let prec = prec::raw_prec(prec::check_prec(prec, PrecOp::Init)?);
        Ok(match val.into_complex_value() {
            ComplexValue::Real(re) => Complex::from_floats(re.into_float(Some(prec)), Float::new(prec)),
            ComplexValue::Pair(re, im) => {
                Complex::from_floats(re.into_float(Some(prec)), im.into_float(Some(prec)))
            }
        })
    }

    /// Creates a new [`Complex`] number from a real part and an
    /// imaginary part.
    ///
    /// The precision is the larger of the precisions deduced for the
    /// two parts, so neither part is truncated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// use rug::Float;
    /// let c = Complex::from_parts(1u8, Float::with_val(70, 0.25));
    /// assert_eq!(c.prec(), 70);
    /// assert_eq!(*c.real(), 1);
    /// assert_eq!(*c.imag(), 0.25);
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    #[inline]
    pub fn from_parts<'a, 'b, Re, Im>(re: Re, im: Im) -> Self
    where
        Re: RealSource<'a>,
        Im: RealSource<'b>,
    {
        Complex::from_real_values(re.into_real_value(), im.into_real_value())
    }

    /// Creates a new [`Complex`] number from a real part and an
    /// imaginary part with the specified precision, rounding to the
    /// nearest.
    ///
    /// Either part can be a decimal string, which is parsed by the
    /// backend. Text is only accepted together with an explicit
    /// precision.
    ///
    /// # Errors
    ///
    /// Returns an error if `prec` is out of the allowed range, or if a
    /// string is not a valid number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let c = Complex::from_parts_prec("1.5", 2, 64).unwrap();
    /// assert_eq!(c.prec(), 64);
    /// assert_eq!(*c.real(), 1.5);
    /// assert_eq!(*c.imag(), 2);
    /// assert!(Complex::from_parts_prec(1, "2.x", 64).is_err());
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    pub fn from_parts_prec<'a, 'b, Re, Im>(re: Re, im: Im, prec: Prec) -> Result<Self, Error>
    where
        Re: PartSource<'a>,
        Im: PartSource<'b>,
    {
        fn part_float(part: PartValue<'_>, prec: u32, imag: bool) -> Result<Float, Error> {
            match part {
                PartValue::Value(val) => Ok(val.into_float(Some(prec))),
                PartValue::Text(text) => Ok(parse::parse_part(&text, imag, prec)?),
            }
        }

        let prec = prec::raw_prec(prec::check_prec(prec, PrecOp::Init)?);
        let re = part_float(re.into_part_value(), prec, false)?;
        let im = part_float(im.into_part_value(), prec, true)?;
        Ok(Complex::from_floats(re, im))
    }

    /// Parses a [`Complex`] number with the specified radix and
    /// precision, rounding to the nearest.
    ///
    /// The string can be a real number, or the real and imaginary
    /// parts inside brackets separated by whitespace or a comma, for
    /// example `"(1.5 -2)"` or `"(1.5, -2)"`.
    ///
    /// # Errors
    ///
    /// Returns an error if `prec` is out of the allowed range, if
    /// `radix` is not in the range 2 to 36, or if the string is not a
    /// valid complex number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let c = Complex::parse_radix("(ff, -1.8)", 16, 53).unwrap();
    /// assert_eq!(c, Complex::from_parts(255, -1.5));
    /// let r = Complex::parse_radix("101", 2, 53).unwrap();
    /// assert_eq!(r, 5);
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    pub fn parse_radix<S>(src: S, radix: i32, prec: Prec) -> Result<Self, Error>
    where
        S: AsRef<[u8]>,
    {
        let prec = prec::raw_prec(prec::check_prec(prec, PrecOp::Init)?);
        Ok(match parse::parse(src.as_ref(), radix, prec)? {
            Parsed::Real(re) => Complex::from_floats(re, Float::new(prec)),
            Parsed::Complex(re, im) => Complex::from_floats(re, im),
        })
    }

    /// Parses a decimal [`Complex`] number with the specified
    /// precision, rounding to the nearest.
    ///
    /// See [`parse_radix`] for the accepted format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let c = Complex::from_str_prec("(3 4)", 24).unwrap();
    /// assert_eq!(c.prec(), 24);
    /// assert_eq!(c, Complex::from_parts(3, 4));
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    /// [`parse_radix`]: #method.parse_radix
    #[inline]
    pub fn from_str_prec(src: &str, prec: Prec) -> Result<Self, Error> {
        Complex::parse_radix(src, 10, prec)
    }

    /// Returns `true` unless the number was left in a moved-from state
    /// by [`take`].
    ///
    /// [`take`]: #method.take
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Moves the number out, leaving `self` in a moved-from state.
    ///
    /// No memory is allocated or released. The moved-from value can
    /// only be assigned to or dropped; any other use panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let mut a = Complex::from_parts(1.5, 2.5);
    /// let b = a.take();
    /// assert!(!a.is_valid());
    /// assert!(b.is_valid());
    /// assert_eq!(b, Complex::from_parts(1.5, 2.5));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Complex {
        log::trace!("moving out of Complex, valid: {}", self.is_valid());
        Complex {
            inner: self.inner.take(),
        }
    }

    /// Exchanges the storage of `self` and `src`.
    ///
    /// This is move assignment: `self` ends up with the value of `src`,
    /// and `src` holds whatever `self` held before, which is released
    /// when `src` is dropped. Either side may be in a moved-from state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let mut a = Complex::new();
    /// let mut b = Complex::from_parts(1, 2);
    /// a.assign_move(&mut b);
    /// assert_eq!(a, Complex::from_parts(1, 2));
    /// assert_eq!(b, 0);
    /// ```
    #[inline]
    pub fn assign_move(&mut self, src: &mut Complex) {
        log::trace!("move assignment of Complex");
        mem::swap(&mut self.inner, &mut src.inner);
    }

    /// Swaps the values of two [`Complex`] numbers, including their
    /// precision, without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let mut a = Complex::from_parts(1u8, 2u8);
    /// let mut b = Complex::from_parts(3.5, 4.5);
    /// a.swap(&mut b);
    /// assert_eq!((a.prec(), b.prec()), (53, 8));
    /// assert_eq!(a, Complex::from_parts(3.5, 4.5));
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    #[inline]
    pub fn swap(&mut self, other: &mut Complex) {
        mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Returns the precision shared by the real and imaginary parts.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let c = Complex::from_parts(1u16, 2.5f32);
    /// assert_eq!(c.prec(), 24);
    /// ```
    #[inline]
    pub fn prec(&self) -> Prec {
        let (re, im) = self.as_real_imag();
        debug_assert_eq!(
            re.prec(),
            im.prec(),
            "real and imaginary parts have different precisions"
        );
        Prec::from(re.prec())
    }

    /// Sets the precision of both parts, discarding the value.
    ///
    /// Both parts are NaN afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if `prec` is out of the allowed range, in
    /// which case the number is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let mut c = Complex::from_parts(1, 2);
    /// c.set_prec(100).unwrap();
    /// assert_eq!(c.prec(), 100);
    /// assert!(c.real().is_nan() && c.imag().is_nan());
    /// assert!(c.set_prec(0).is_err());
    /// ```
    pub fn set_prec(&mut self, prec: Prec) -> Result<(), Error> {
        let prec = prec::check_prec(prec, PrecOp::Set)?;
        let raw = self.raw_mut();
        // Safety: raw is initialized and prec was validated.
        unsafe {
            mpc::set_prec(raw, prec.az::<mpfr::prec_t>());
        }
        Ok(())
    }

    /// Sets the precision of both parts, rounding the value to the
    /// nearest.
    ///
    /// # Errors
    ///
    /// Returns an error if `prec` is out of the allowed range, in
    /// which case the number is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let mut c = Complex::with_val(6, (4.875, 4.625)).unwrap();
    /// c.prec_round(4).unwrap();
    /// assert_eq!(c, Complex::from_parts(5.0, 4.5));
    /// ```
    pub fn prec_round(&mut self, prec: Prec) -> Result<(), Error> {
        let prec = prec::raw_prec(prec::check_prec(prec, PrecOp::Set)?);
        let (mut re, mut im) = self.parts_mut();
        re.set_prec(prec);
        im.set_prec(prec);
        Ok(())
    }

    /// Borrows the real part.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    #[inline]
    pub fn real(&self) -> RealRef<'_> {
        RealRef::new(&self.raw().re)
    }

    /// Borrows the imaginary part.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    #[inline]
    pub fn imag(&self) -> ImagRef<'_> {
        ImagRef::new(&self.raw().im)
    }

    /// Borrows the real part mutably.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    #[inline]
    pub fn real_mut(&mut self) -> RealMut<'_> {
        RealMut::new(&mut self.raw_mut().re)
    }

    /// Borrows the imaginary part mutably.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    #[inline]
    pub fn imag_mut(&mut self) -> ImagMut<'_> {
        ImagMut::new(&mut self.raw_mut().im)
    }

    /// Borrows the real and imaginary parts mutably at the same time.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let mut c = Complex::from_parts(1.5, 2.5);
    /// {
    ///     let (mut re, mut im) = c.parts_mut();
    ///     std::mem::swap(&mut *re, &mut *im);
    /// }
    /// assert_eq!(c, Complex::from_parts(2.5, 1.5));
    /// ```
    #[inline]
    pub fn parts_mut(&mut self) -> (RealMut<'_>, ImagMut<'_>) {
        let raw = self.raw_mut();
        (RealMut::new(&mut raw.re), ImagMut::new(&mut raw.im))
    }

    /// Converts into the real and imaginary parts.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let (re, im) = Complex::from_parts(1.5, -2).into_real_imag();
    /// assert_eq!(re, 1.5);
    /// assert_eq!(im, -2);
    /// ```
    #[inline]
    pub fn into_real_imag(mut self) -> (Float, Float) {
        match self.inner.take() {
            // Safety: ownership of both parts moves into the floats.
            Some(raw) => unsafe { (Float::from_raw(raw.re), Float::from_raw(raw.im)) },
            None => moved_from(),
        }
    }

    /// Sets the value keeping the current precision, rounding to the
    /// nearest.
    ///
    /// A real value sets the imaginary part to +0.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let mut c = Complex::with_val(4, (1, 1)).unwrap();
    /// c.set(3.3);
    /// assert_eq!(c.prec(), 4);
    /// assert_eq!(c, 3.25);
    /// ```
    pub fn set<'a, T>(&mut self, val: T)
    where
        T: ComplexSource<'a>,
    {
        let (mut re, mut im) = self.parts_mut();
        match val.into_complex_value() {
            ComplexValue::Real(x) => {
                x.set_float(&mut re);
                im.assign(Special::Zero);
            }
            ComplexValue::Pair(x, y) => {
                x.set_float(&mut re);
                y.set_float(&mut im);
            }
        }
    }

    // Generic assignment. A real value replaces the real part at its
    // deduced precision and zeroes the imaginary part at the same
    // precision. A complex value resizes both parts destructively to
    // the larger deduced precision before either is set.
    pub(crate) fn assign_value(&mut self, val: ComplexValue<'_>) {
        if !self.is_valid() {
            *self = Complex::from_complex_value(val);
            return;
        }
        let (mut re, mut im) = self.parts_mut();
        match val {
            ComplexValue::Real(x) => {
                *re = x.into_float(None);
                set_prec_nan(&mut im, re.prec());
                im.assign(Special::Zero);
            }
            ComplexValue::Pair(x, y) => {
                let prec = prec::raw_prec(x.deduce_prec().max(y.deduce_prec()));
                set_prec_nan(&mut re, prec);
                set_prec_nan(&mut im, prec);
                x.set_float(&mut re);
                y.set_float(&mut im);
            }
        }
    }

    /// Formats both parts exactly in the given radix, as
    /// `"(re im)"`.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is less than 2 or greater than 36, or if the
    /// number is in a moved-from state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let c = Complex::with_val(8, (5, -1.5)).unwrap();
    /// let s = c.to_string_radix(2);
    /// assert!(s.starts_with('(') && s.ends_with(')'));
    /// assert_eq!(s.split(' ').count(), 2);
    /// ```
    pub fn to_string_radix(&self, radix: i32) -> String {
        let (re, im) = self.as_real_imag();
        format!(
            "({} {})",
            re.to_string_radix(radix, None),
            im.to_string_radix(radix, None)
        )
    }

    /// Creates a [`Complex`] number from an initialized
    /// [MPC complex number][`mpc_t`], taking ownership of it.
    ///
    /// # Safety
    ///
    ///   * The value must be initialized, and its real and imaginary
    ///     parts must have the same precision.
    ///   * The [`mpc_t`] type can be considered as a kind of pointer,
    ///     so there can be multiple copies of it. Since this function
    ///     takes over ownership, no other copies of the passed value
    ///     should exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let c = Complex::from_parts(1, 2);
    /// let raw = c.into_raw();
    /// // Safety: raw is initialized and owned by nobody else.
    /// let d = unsafe { Complex::from_raw(raw) };
    /// assert_eq!(d, Complex::from_parts(1, 2));
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    /// [`mpc_t`]: https://docs.rs/gmp-mpfr-sys/*/gmp_mpfr_sys/mpc/struct.mpc_t.html
    #[inline]
    pub unsafe fn from_raw(raw: mpc_t) -> Self {
        debug_assert_eq!(raw.re.prec, raw.im.prec);
        Complex { inner: Some(raw) }
    }

    /// Creates a [`Complex`] number by copying an initialized
    /// [MPC complex number][`mpc_t`].
    ///
    /// The precision is the larger of the precisions of the two parts.
    ///
    /// # Safety
    ///
    /// `raw` must point to an initialized value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpcomplex::Complex;
    /// let src = rug::Complex::with_val((20, 40), (1, 2));
    /// // Safety: src is initialized and outlives the call.
    /// let c = unsafe { Complex::from_raw_ref(src.as_raw()) };
    /// assert_eq!(c.prec(), 40);
    /// assert_eq!(c, Complex::from_parts(1, 2));
    /// ```
    ///
    /// [`Complex`]: struct.Complex.html
    /// [`mpc_t`]: https://docs.rs/gmp-mpfr-sys/*/gmp_mpfr_sys/mpc/struct.mpc_t.html
    pub unsafe fn from_raw_ref(raw: *const mpc_t) -> Self {
        let (re, im) = unsafe { raw_parts(raw) };
        Complex::from_parts(re, im)
    }

    /// Assigns a copy of an initialized [MPC complex number][`mpc_t`],
    /// taking its precision like assignment from a [`Complex`] number.
    ///
    /// # Safety
    ///
    /// `raw` must point to an initialized value that does not alias
    /// `self`.
    ///
    /// [`Complex`]: struct.Complex.html
    /// [`mpc_t`]: https://docs.rs/gmp-mpfr-sys/*/gmp_mpfr_sys/mpc/struct.mpc_t.html
    pub unsafe fn assign_raw(&mut self, raw: *const mpc_t) {
        let (re, im) = unsafe { raw_parts(raw) };
        self.assign_value(ComplexValue::Pair(
            re.into_real_value(),
            im.into_real_value(),
        ));
    }

    /// Takes ownership of an initialized
    /// [MPC complex number][`mpc_t`], releasing the current value.
    ///
    /// # Safety
    ///
    /// The same requirements as for [`from_raw`] apply.
    ///
    /// [`from_raw`]: #method.from_raw
    /// [`mpc_t`]: https://docs.rs/gmp-mpfr-sys/*/gmp_mpfr_sys/mpc/struct.mpc_t.html
    #[inline]
    pub unsafe fn assign_raw_owned(&mut self, raw: mpc_t) {
        *self = unsafe { Complex::from_raw(raw) };
    }

    /// Sets the value from an initialized
    /// [MPC complex number][`mpc_t`], keeping the current precision.
    ///
    /// # Safety
    ///
    /// `raw` must point to an initialized value that does not alias
    /// `self`.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    ///
    /// [`mpc_t`]: https://docs.rs/gmp-mpfr-sys/*/gmp_mpfr_sys/mpc/struct.mpc_t.html
    pub unsafe fn set_raw(&mut self, raw: *const mpc_t) {
        let (re, im) = unsafe { raw_parts(raw) };
        let (mut dst_re, mut dst_im) = self.parts_mut();
        dst_re.assign(re);
        dst_im.assign(im);
    }

    /// Converts a [`Complex`] number into an
    /// [MPC complex number][`mpc_t`].
    ///
    /// The returned object should be freed to avoid memory leaks.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    ///
    /// [`Complex`]: struct.Complex.html
    /// [`mpc_t`]: https://docs.rs/gmp-mpfr-sys/*/gmp_mpfr_sys/mpc/struct.mpc_t.html
    #[inline]
    pub fn into_raw(mut self) -> mpc_t {
        match self.inner.take() {
            Some(raw) => raw,
            None => moved_from(),
        }
    }

    /// Returns a pointer to the inner
    /// [MPC complex number][`mpc_t`].
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    ///
    /// [`mpc_t`]: https://docs.rs/gmp-mpfr-sys/*/gmp_mpfr_sys/mpc/struct.mpc_t.html
    #[inline]
    pub fn as_raw(&self) -> *const mpc_t {
        self.raw()
    }

    /// Returns an unsafe mutable pointer to the inner
    /// [MPC complex number][`mpc_t`].
    ///
    /// The real and imaginary parts must have the same precision
    /// again before the number is used.
    ///
    /// # Panics
    ///
    /// Panics if the number is in a moved-from state.
    ///
    /// [`mpc_t`]: https://docs.rs/gmp-mpfr-sys/*/gmp_mpfr_sys/mpc/struct.mpc_t.html
    #[inline]
    pub fn as_raw_mut(&mut self) -> *mut mpc_t {
        self.raw_mut()
    }
}

// Safety: raw must point to an initialized value that outlives 'a.
unsafe fn raw_parts<'a>(raw: *const mpc_t) -> (&'a Float, &'a Float) {
    unsafe {
        (
            &*cast_ptr!(&(*raw).re, Float),
            &*cast_ptr!(&(*raw).im, Float),
        )
    }
}

/// Swaps the values of two [`Complex`] numbers without allocating.
///
/// # Examples
///
/// ```rust
/// use mpcomplex::{complex, Complex};
/// let mut a = Complex::from_value(1);
/// let mut b = Complex::from_value(2.5);
/// complex::swap(&mut a, &mut b);
/// assert_eq!((a.prec(), b.prec()), (53, 31));
/// ```
///
/// [`Complex`]: ../struct.Complex.html
#[inline]
pub fn swap(a: &mut Complex, b: &mut Complex) {
    a.swap(b);
}

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

use crate::Complex;
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use gmp_mpfr_sys::mpfr::mpfr_t;
use rug::Float;

// The references point straight at the part inside the Complex, so
// every change lands in place. The marker keeps them on one thread.
type NoSend = PhantomData<*const ()>;

macro_rules! part_ref {
    ($(#[$attr:meta])* $Name:ident) => {
        $(#[$attr])*
        pub struct $Name<'a> {
            value: &'a Float,
            marker: NoSend,
        }

        impl<'a> $Name<'a> {
            #[inline]
            pub(crate) fn new(slot: &'a mpfr_t) -> $Name<'a> {
                $Name {
                    // Safety: Float is repr(transparent) over mpfr_t and
                    // slot belongs to a valid Complex.
                    value: unsafe { &*cast_ptr!(slot, Float) },
                    marker: PhantomData,
                }
            }
        }

        impl Deref for $Name<'_> {
            type Target = Float;
            #[inline]
            fn deref(&self) -> &Float {
                self.value
            }
        }

        impl Display for $Name<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                Display::fmt(&**self, f)
            }
        }

        impl Debug for $Name<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                Debug::fmt(&**self, f)
            }
        }
    };
}

macro_rules! part_mut {
    ($(#[$attr:meta])* $Name:ident, $part:literal) => {
        $(#[$attr])*
        pub struct $Name<'a> {
            value: &'a mut Float,
            prec: u32,
            marker: NoSend,
        }

        impl<'a> $Name<'a> {
            #[inline]
            pub(crate) fn new(slot: &'a mut mpfr_t) -> $Name<'a> {
                // Safety: Float is repr(transparent) over mpfr_t and
                // slot belongs to a valid Complex.
                let value = unsafe { &mut *cast_ptr_mut!(slot, Float) };
                let prec = value.prec();
                $Name {
                    value,
                    prec,
                    marker: PhantomData,
                }
            }
        }

        impl Deref for $Name<'_> {
            type Target = Float;
            #[inline]
            fn deref(&self) -> &Float {
                &*self.value
            }
        }

        impl DerefMut for $Name<'_> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Float {
                &mut *self.value
            }
        }

        impl Drop for $Name<'_> {
            #[inline]
            fn drop(&mut self) {
                if self.value.prec() != self.prec {
                    log::trace!(
                        "{} part precision changed from {} to {} through a reference",
                        $part,
                        self.prec,
                        self.value.prec()
                    );
                }
            }
        }

        impl Display for $Name<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                Display::fmt(&**self, f)
            }
        }

        impl Debug for $Name<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                Debug::fmt(&**self, f)
            }
        }
    };
}

part_ref! {
    /**
    A read-only reference to the real part of a [`Complex`] number.

    The struct implements <code>[Deref]\<[Target][Deref::Target] = [Float]></code>.
    It points at the storage of the real part; no memory is allocated
    when it is created and none is released when it is dropped.

    # Examples

    ```rust
    use mpcomplex::Complex;
    let c = Complex::from_parts(4.5, -2.25);
    let re = c.real();
    assert_eq!(*re, 4.5);
    assert_eq!(re.prec(), 53);
    ```

    A reference cannot be sent to another thread.

    ```compile_fail
    use mpcomplex::Complex;
    fn send<T: Send>(_: T) {}
    let c = Complex::new();
    send(c.real());
    ```
    */
    RealRef
}

part_ref! {
    /**
    A read-only reference to the imaginary part of a [`Complex`]
    number.

    The struct implements <code>[Deref]\<[Target][Deref::Target] = [Float]></code>.
    It points at the storage of the imaginary part; no memory is
    allocated when it is created and none is released when it is
    dropped.

    # Examples

    ```rust
    use mpcomplex::Complex;
    let c = Complex::from_parts(4.5, -2.25);
    assert_eq!(*c.imag(), -2.25);
    ```
    */
    ImagRef
}

part_mut! {
    /**
    A mutable reference to the real part of a [`Complex`] number.

    The struct implements <code>[DerefMut]\<[Target][Deref::Target] = [Float]></code>,
    so any [`Float`] operation can be applied in place. Changes,
    including any reallocation of the limbs, go directly into the
    [`Complex`] number.

    Changing the precision through the reference is allowed, but the
    precision of both parts has to be equal again before
    [`Complex::prec`] is called.

    # Examples

    ```rust
    use mpcomplex::Complex;
    let mut c = Complex::from_parts(1.5, 2.5);
    {
        let mut re = c.real_mut();
        *re *= 4;
    }
    assert_eq!(c, Complex::from_parts(6.0, 2.5));
    ```
    */
    RealMut, "real"
}

part_mut! {
    /**
    A mutable reference to the imaginary part of a [`Complex`]
    number.

    The struct implements <code>[DerefMut]\<[Target][Deref::Target] = [Float]></code>,
    so any [`Float`] operation can be applied in place. Changes,
    including any reallocation of the limbs, go directly into the
    [`Complex`] number.

    # Examples

    ```rust
    use mpcomplex::Complex;
    let mut c = Complex::from_parts(1.5, 2.5);
    *c.imag_mut() += 1;
    assert_eq!(*c.imag(), 3.5);
    ```
    */
    ImagMut, "imaginary"
}

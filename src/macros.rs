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

// Reinterprets a reference or pointer to a raw MPFR value as a
// pointer to a type that is #[repr(transparent)] over it.
macro_rules! cast_ptr {
    ($src:expr, $T:ty) => {{
        let ptr: *const _ = $src;
        ptr.cast::<$T>()
    }};
}

macro_rules! cast_ptr_mut {
    ($src:expr, $T:ty) => {{
        let ptr: *mut _ = $src;
        ptr.cast::<$T>()
    }};
}

// Conversions into Complex for concrete source types, all going
// through Complex::from_value.
macro_rules! from_source {
    (ref $($T:ty)*) => { $(
        impl<'a> From<&'a $T> for Complex {
            #[inline]
            fn from(src: &'a $T) -> Complex {
                Complex::from_value(src)
            }
        }
    )* };
    ($($T:ty)*) => { $(
        impl From<$T> for Complex {
            #[inline]
            fn from(src: $T) -> Complex {
                Complex::from_value(src)
            }
        }
    )* };
}

// Formatting traits that render both parts as "(re im)", forwarding
// the formatter options to each part.
macro_rules! fmt_parts {
    ($($Trait:ident)*) => { $(
        impl $Trait for Complex {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("(")?;
                $Trait::fmt(&*self.real(), f)?;
                f.write_str(" ")?;
                $Trait::fmt(&*self.imag(), f)?;
                f.write_str(")")
            }
        }
    )* };
}

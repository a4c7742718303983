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

//! # Multi-precision complex numbers with a shared precision
//!
//! The `mpcomplex` crate provides the [`Complex`] type, a complex
//! number made of two multi-precision floating-point numbers from the
//! [GNU MPFR Library](https://www.mpfr.org/), using the storage layout
//! of the [GNU MPC Library](https://www.multiprecision.org/mpc/).
//! Unlike a general MPC number, the real and imaginary parts of a
//! [`Complex`] number always have the same precision.
//!
//! This crate is free software: you can redistribute it and/or modify
//! it under the terms of the GNU Lesser General Public License as
//! published by the Free Software Foundation, either version 3 of the
//! License, or (at your option) any later version.
//!
//! # Basic use
//!
//! A [`Complex`] number can be built from native numbers, from the
//! arbitrary-precision [`Integer`], [`Rational`] and [`Float`] types,
//! from other complex types, or from text. When no precision is given,
//! it is deduced from the source value.
//!
//! ```rust
//! use mpcomplex::{Assign, Complex};
//! use rug::Float;
//!
//! // an i32 has 31 value bits
//! let a = Complex::from_value(-7);
//! assert_eq!(a.prec(), 31);
//! assert_eq!(a, -7);
//!
//! // the larger deduced precision wins
//! let b = Complex::from_parts(1u8, Float::with_val(100, 0.5));
//! assert_eq!(b.prec(), 100);
//!
//! // text always needs an explicit precision
//! let mut c = Complex::from_str_prec("(1.5 -2.5)", 64).unwrap();
//! assert_eq!(c.prec(), 64);
//!
//! // both parts can be changed through references
//! *c.real_mut() += 1;
//! assert_eq!(*c.real(), 2.5);
//!
//! c.assign(&b);
//! assert_eq!(c.prec(), 100);
//! assert_eq!(c, b);
//! ```
//!
//! # Optional features
//!
//!   * `num-complex`, enabled by default, adds conversions from and
//!     comparisons with [`num_complex::Complex`] of `f32` and `f64`.
//!   * `serde` adds serialization support.
//!
//! [`Complex`]: struct.Complex.html
//! [`Float`]: https://docs.rs/rug/*/rug/struct.Float.html
//! [`Integer`]: https://docs.rs/rug/*/rug/struct.Integer.html
//! [`Rational`]: https://docs.rs/rug/*/rug/struct.Rational.html
//! [`num_complex::Complex`]: https://docs.rs/num-complex/*/num_complex/struct.Complex.html

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod complex;
mod error;
mod misc;
pub mod prec;
#[cfg(feature = "serde")]
mod serdeize;
pub mod source;

pub use crate::complex::big::Complex;
pub use crate::error::Error;
pub use rug::Assign;

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

use std::env;
use std::ffi::OsString;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(gmp_limb_bits_32)");
    println!("cargo:rustc-check-cfg=cfg(gmp_limb_bits_64)");
    let bits = cargo_env("DEP_GMP_LIMB_BITS");
    let bits = bits
        .to_str()
        .expect("DEP_GMP_LIMB_BITS contains unexpected characters");
    if bits != "32" && bits != "64" {
        panic!("Limb bits not 32 or 64: \"{}\"", bits);
    }
    println!("cargo:rustc-cfg=gmp_limb_bits_{}", bits);
}

fn cargo_env(name: &str) -> OsString {
    env::var_os(name).unwrap_or_else(|| {
        panic!(
            "environment variable not found: {}, please use cargo",
            name
        )
    })
}

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

use crate::prec;
use crate::serdeize::{self, Data};
use crate::Complex;
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

impl Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let prec = self.prec();
        let (re, im) = self.as_real_imag();
        let radix = if prec <= 32 || (!re.is_normal() && !im.is_normal()) {
            10
        } else {
            16
        };
        let value = self.to_string_radix(radix);
        serdeize::serialize("Complex", &Data { prec, radix, value }, serializer)
    }
}

impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> Result<Complex, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Data { prec, radix, value } = serdeize::deserialize("Complex", deserializer)?;
        let (min, max) = (prec::prec_min(), prec::prec_max());
        serdeize::check_range::<_, D::Error>("precision", prec, min, max)?;
        serdeize::check_range::<_, D::Error>("radix", radix, 2, 36)?;
        Complex::parse_radix(&value, radix, prec).map_err(DeError::custom)
    }
}

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

pub fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

pub fn trim_end(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &bytes[..end]
}

// If bytes starts with '(', returns the contents up to the matching
// ')' and whatever follows it.
pub fn matched_brackets(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    if bytes.first() != Some(&b'(') {
        return None;
    }
    let mut level = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => level += 1,
            b')' => {
                level -= 1;
                if level == 0 {
                    return Some((&bytes[1..i], &bytes[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

pub fn find_outside_brackets(bytes: &[u8], pattern: u8) -> Option<usize> {
    let mut level = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => level += 1,
            b')' if level > 0 => level -= 1,
            _ if b == pattern && level == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

pub fn find_space_outside_brackets(bytes: &[u8]) -> Option<usize> {
    let mut level = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => level += 1,
            b')' if level > 0 => level -= 1,
            _ if b.is_ascii_whitespace() && level == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_trim() {
        assert_eq!(trim_start(b"  a b "), b"a b ");
        assert_eq!(trim_end(b" a b  "), b" a b");
        assert_eq!(trim_start(b"   "), b"");
        assert_eq!(trim_end(b"   "), b"");
    }

    #[test]
    fn check_brackets() {
        assert_eq!(matched_brackets(b"(1 2) x"), Some((&b"1 2"[..], &b" x"[..])));
        assert_eq!(matched_brackets(b"((1) 2)"), Some((&b"(1) 2"[..], &b""[..])));
        assert_eq!(matched_brackets(b"(1 2"), None);
        assert_eq!(matched_brackets(b"1 2)"), None);
        assert_eq!(find_outside_brackets(b"(1,2),3", b','), Some(5));
        assert_eq!(find_space_outside_brackets(b"(1 2) 3"), Some(5));
        assert_eq!(find_space_outside_brackets(b"12"), None);
    }
}

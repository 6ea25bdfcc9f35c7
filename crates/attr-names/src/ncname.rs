//! XML "non-colonized name" validation.
//!
//! @see https://www.w3.org/TR/xml-names/#NT-NCName

use std::cmp::Ordering::{Equal, Greater, Less};

// XML 1.0 fifth-edition Name character classes with the colon removed.
// Sorted, non-overlapping, and binary-searched.

const NC_NAME_START_CHAR_TABLE: &[(char, char)] = &[
    ('A', 'Z'),
    ('_', '_'),
    ('a', 'z'),
    ('\u{C0}', '\u{D6}'),
    ('\u{D8}', '\u{F6}'),
    ('\u{F8}', '\u{2FF}'),
    ('\u{370}', '\u{37D}'),
    ('\u{37F}', '\u{1FFF}'),
    ('\u{200C}', '\u{200D}'),
    ('\u{2070}', '\u{218F}'),
    ('\u{2C00}', '\u{2FEF}'),
    ('\u{3001}', '\u{D7FF}'),
    ('\u{F900}', '\u{FDCF}'),
    ('\u{FDF0}', '\u{FFFD}'),
    ('\u{10000}', '\u{EFFFF}'),
];

const NC_NAME_CHAR_TABLE: &[(char, char)] = &[
    ('-', '.'),
    ('0', '9'),
    ('A', 'Z'),
    ('_', '_'),
    ('a', 'z'),
    ('\u{B7}', '\u{B7}'),
    ('\u{C0}', '\u{D6}'),
    ('\u{D8}', '\u{F6}'),
    ('\u{F8}', '\u{37D}'),
    ('\u{37F}', '\u{1FFF}'),
    ('\u{200C}', '\u{200D}'),
    ('\u{203F}', '\u{2040}'),
    ('\u{2070}', '\u{218F}'),
    ('\u{2C00}', '\u{2FEF}'),
    ('\u{3001}', '\u{D7FF}'),
    ('\u{F900}', '\u{FDCF}'),
    ('\u{FDF0}', '\u{FFFD}'),
    ('\u{10000}', '\u{EFFFF}'),
];

fn in_table(c: char, table: &[(char, char)]) -> bool {
    table
        .binary_search_by(|&(low, high)| {
            if c < low {
                Greater
            } else if c > high {
                Less
            } else {
                Equal
            }
        })
        .is_ok()
}

/// Whether `name` matches the NCName production: a non-empty XML Name with
/// no colon anywhere in it.
pub fn is_ncname(name: &str) -> bool {
    // Most rejections in practice are colonified names; reject those before
    // walking character classes.
    if memchr::memchr(b':', name.as_bytes()).is_some() {
        return false;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if in_table(first, NC_NAME_START_CHAR_TABLE) => {
            chars.all(|c| in_table(c, NC_NAME_CHAR_TABLE))
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_ascii_names() {
        assert!(is_ncname("div"));
        assert!(is_ncname("data-foo"));
        assert!(is_ncname("_private"));
        assert!(is_ncname("a1-b.c"));
    }

    #[test]
    fn rejects_colons() {
        assert!(!is_ncname("xml:lang"));
        assert!(!is_ncname("xmlns:xlink"));
        assert!(!is_ncname(":leading"));
        assert!(!is_ncname("trailing:"));
    }

    #[test]
    fn rejects_bad_start_characters() {
        assert!(!is_ncname(""));
        assert!(!is_ncname("9lives"));
        assert!(!is_ncname("-dash"));
        assert!(!is_ncname(".dot"));
        assert!(!is_ncname("\u{B7}mid"));
    }

    #[test]
    fn accepts_non_ascii_letters() {
        assert!(is_ncname("h\u{E9}llo"));
        assert!(is_ncname("\u{C0}"));
        assert!(is_ncname("\u{4E2D}\u{6587}"));
    }

    #[test]
    fn rejects_spaces_and_symbols() {
        assert!(!is_ncname("loopend "));
        assert!(!is_ncname("a b"));
        assert!(!is_ncname("a/b"));
    }
}

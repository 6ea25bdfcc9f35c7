/// Computes the 32-bit fingerprint of a lowercase attribute name.
///
/// Mixes the name's length, its first byte, and up to four bytes from each
/// end of the buffer through two interleaved shift-accumulators which are
/// XORed together. The result is unique for every name in the generated
/// table, so a fingerprint can narrow a binary search, but it is not a
/// general hash: lookups must still compare the candidate's local name
/// against the input before trusting a match.
///
/// For names shorter than four bytes the tail loop revisits bytes already
/// mixed in from the front. The table hashes were produced with that overlap
/// included, so it must be preserved exactly.
///
/// The buffer must not be empty.
pub(crate) fn fingerprint(name: &[u8]) -> i32 {
    let mut hash: i32 = name.len() as i32;
    let mut hash2: i32 = 0;
    hash = (hash << 5).wrapping_add(name[0] as i32 - 0x60);
    let mut j = name.len();
    for i in 0..4 {
        if j == 0 {
            break;
        }
        j -= 1;
        hash = (hash << 5).wrapping_add(name[j] as i32 - 0x60);
        hash2 = (hash2 << 6).wrapping_add(name[i] as i32 - 0x5F);
    }
    hash ^ hash2
}

#[cfg(test)]
mod test {
    use super::*;

    // Expected values in these tests are entries of the ported hash table.

    #[test]
    fn single_byte_names() {
        assert_eq!(fingerprint(b"d"), 1153);
        assert_eq!(fingerprint(b"k"), 1383);
        assert_eq!(fingerprint(b"r"), 1601);
        assert_eq!(fingerprint(b"z"), 1857);
    }

    #[test]
    fn short_names_revisit_leading_bytes() {
        // Two- and three-byte names run the tail loop back across bytes the
        // head already consumed.
        assert_eq!(fingerprint(b"by"), 68600);
        assert_eq!(fingerprint(b"id"), 75276);
        assert_eq!(fingerprint(b"alt"), 3207892);
    }

    #[test]
    fn longer_names() {
        assert_eq!(fingerprint(b"lang"), 150445028);
        assert_eq!(fingerprint(b"checked"), 237143271);
        assert_eq!(fingerprint(b"xmlns"), 200104642);
        assert_eq!(fingerprint(b"xlink:href"), 367510727);
        assert_eq!(fingerprint(b"viewbox"), 254844367);
    }
}

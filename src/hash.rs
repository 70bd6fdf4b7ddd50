/// Maps a key to a bucket index in `[0, max)` using djb2.
///
/// The key is hashed as a raw byte sequence: accumulator seeded with 5381,
/// then `acc * 33 + byte` for each byte, with wrapping `u64` arithmetic.
/// Identical byte input always produces an identical index, so bucket
/// placement is reproducible across runs and platforms. Do not modify this.
pub fn hash(key: &str, max: usize) -> usize {
    let mut acc: u64 = 5381;
    for byte in key.bytes() {
        acc = acc.wrapping_mul(33).wrapping_add(u64::from(byte));
    }
    (acc % max as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::hash;

    #[test]
    fn deterministic() {
        assert_eq!(hash("abc", 100), hash("abc", 100));
        assert_eq!(hash("line_1", 2), hash("line_1", 2));
    }

    #[test]
    fn golden_values() {
        // djb2("abc") = ((5381*33 + 97)*33 + 98)*33 + 99 = 193485963
        assert_eq!(hash("abc", 1024), 139);
        assert_eq!(hash("abc", 100), 63);
    }

    #[test]
    fn empty_key_hashes_to_seed() {
        assert_eq!(hash("", 1024), 5381 % 1024);
        assert_eq!(hash("", 1), 0);
    }

    #[test]
    fn in_range() {
        for max in 1..=16 {
            assert!(hash("anything at all", max) < max);
        }
    }

    #[test]
    fn bytes_not_chars() {
        // Multi-byte UTF-8 input is folded in byte by byte.
        let acc = "é".bytes().fold(5381u64, |acc, b| {
            acc.wrapping_mul(33).wrapping_add(u64::from(b))
        });
        assert_eq!(hash("é", 1 << 20), (acc % (1 << 20)) as usize);
    }
}

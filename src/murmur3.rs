//! MurmurHash3 x64_128 mixing core.
//!
//! Operates on an already validated byte slice and returns the two finalized
//! 64-bit lanes `(h1, h2)`. Output packing lives in [`crate::digest`].
//!
//! All arithmetic wraps modulo 2^64. Block words are decoded explicitly as
//! little-endian so results do not depend on host byte order or alignment.

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// Bytes consumed per iteration of the block loop.
pub(crate) const BLOCK_LEN: usize = 16;

/// Hash `data` with the given seed, returning the finalized `(h1, h2)` lanes.
pub(crate) fn hash_x64_128(data: &[u8], seed: u64) -> (u64, u64) {
    let mut h1 = seed;
    let mut h2 = seed;

    // body
    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        let (lo, hi) = block.split_at(8);

        h1 ^= mix_k1(read_u64_le(lo));
        h1 = h1
            .rotate_left(27)
            .wrapping_add(h2)
            .wrapping_mul(5)
            .wrapping_add(0x52dc_e729);

        h2 ^= mix_k2(read_u64_le(hi));
        h2 = h2
            .rotate_left(31)
            .wrapping_add(h1)
            .wrapping_mul(5)
            .wrapping_add(0x3849_5ab5);
    }

    (h1, h2) = absorb_tail(blocks.remainder(), h1, h2);

    // finalization
    let len = data.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

/// Fold the 0..=15 leftover bytes into the lanes.
///
/// Bytes are absorbed from the highest index down; each lane is mixed once its
/// lowest byte (index 8 for `k2`, index 0 for `k1`) has been folded in.
fn absorb_tail(tail: &[u8], mut h1: u64, mut h2: u64) -> (u64, u64) {
    let mut k1: u64 = 0;
    let mut k2: u64 = 0;
    for (i, &byte) in tail.iter().enumerate().rev() {
        if i >= 8 {
            k2 ^= u64::from(byte) << ((i - 8) * 8);
            if i == 8 {
                h2 ^= mix_k2(k2);
            }
        } else {
            k1 ^= u64::from(byte) << (i * 8);
            if i == 0 {
                h1 ^= mix_k1(k1);
            }
        }
    }
    (h1, h2)
}

#[inline]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Final avalanche mix.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// Decode an 8-byte little-endian word. `bytes` is always exactly one half block.
#[inline]
fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tail absorption written as the explicit per-length fall-through cascade,
    /// used to cross-check the loop form above.
    fn cascade_tail(tail: &[u8], mut h1: u64, mut h2: u64) -> (u64, u64) {
        let mut k1: u64 = 0;
        let mut k2: u64 = 0;
        let n = tail.len();
        if n >= 15 {
            k2 ^= u64::from(tail[14]) << 48;
        }
        if n >= 14 {
            k2 ^= u64::from(tail[13]) << 40;
        }
        if n >= 13 {
            k2 ^= u64::from(tail[12]) << 32;
        }
        if n >= 12 {
            k2 ^= u64::from(tail[11]) << 24;
        }
        if n >= 11 {
            k2 ^= u64::from(tail[10]) << 16;
        }
        if n >= 10 {
            k2 ^= u64::from(tail[9]) << 8;
        }
        if n >= 9 {
            k2 ^= u64::from(tail[8]);
            h2 ^= mix_k2(k2);
        }
        if n >= 8 {
            k1 ^= u64::from(tail[7]) << 56;
        }
        if n >= 7 {
            k1 ^= u64::from(tail[6]) << 48;
        }
        if n >= 6 {
            k1 ^= u64::from(tail[5]) << 40;
        }
        if n >= 5 {
            k1 ^= u64::from(tail[4]) << 32;
        }
        if n >= 4 {
            k1 ^= u64::from(tail[3]) << 24;
        }
        if n >= 3 {
            k1 ^= u64::from(tail[2]) << 16;
        }
        if n >= 2 {
            k1 ^= u64::from(tail[1]) << 8;
        }
        if n >= 1 {
            k1 ^= u64::from(tail[0]);
            h1 ^= mix_k1(k1);
        }
        (h1, h2)
    }

    #[test]
    fn test_empty_input_zero_seed_is_zero() {
        assert_eq!(hash_x64_128(&[], 0), (0, 0));
        assert_eq!(fmix64(0), 0);
    }

    #[test]
    fn test_known_lanes() {
        assert_eq!(
            hash_x64_128(b"hello", 0),
            (0xcbd8_a7b3_41bd_9b02, 0x5b1e_906a_48ae_1d19)
        );
    }

    #[test]
    fn test_tail_loop_matches_cascade() {
        let data: Vec<u8> = (0u8..32).map(|b| b.wrapping_mul(37).wrapping_add(11)).collect();

        for len in 0..BLOCK_LEN {
            let tail = &data[..len];

            assert_eq!(
                absorb_tail(tail, 0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210),
                cascade_tail(tail, 0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210),
                "tail length {len}"
            );
        }
    }

    #[test]
    fn test_every_tail_length_changes_output() {
        let data = [0xa5u8; 31];
        let mut seen = std::collections::HashSet::new();
        for len in 16..=31 {
            assert!(seen.insert(hash_x64_128(&data[..len], 0)), "length {len}");
        }
    }

    #[test]
    fn test_read_u64_le() {
        assert_eq!(
            read_u64_le(&[1, 2, 3, 4, 5, 6, 7, 8]),
            0x0807_0605_0403_0201
        );
    }

    #[test]
    fn test_seed_feeds_both_lanes() {
        let (a1, a2) = hash_x64_128(b"", 25);
        assert_ne!(a1, 0);
        assert_ne!(a2, 0);
        assert_ne!(hash_x64_128(b"abc", 1), hash_x64_128(b"abc", 2));
    }
}

#![no_main]
use libfuzzer_sys::fuzz_target;
use murmur3_digest::Hasher;

/// Fuzz windowed hashing.
///
/// The first two bytes pick a signed offset and length into the rest of the
/// input. In-bounds windows must hash the same as the sliced bytes; anything
/// else must be rejected without panicking.
fuzz_target!(|data: &[u8]| {
    let [offset, length, rest @ ..] = data else {
        return;
    };
    let offset = i16::from(*offset as i8);
    let length = i16::from(*length as i8);
    let hasher = Hasher::with_seed(u64::from(rest.len() as u32));

    match hasher.compute_hash_window(rest, offset, length) {
        Ok(digest) => {
            let start = offset as usize;
            let end = start + length as usize;
            assert_eq!(digest, hasher.compute_hash(&rest[start..end]));
        }
        Err(_) => {
            assert!(
                offset < 0 || length < 0 || offset as usize + length as usize > rest.len()
            );
        }
    }
});

use xxhash_rust::xxh3::xxh3_128;

pub use xxhash_rust::xxh3::Xxh3;

/// Width of every content hash embedded in output filenames.
pub const HASH_HEX_LEN: usize = 32;

/// 128-bit XXH3 digest of `input`, as 32 lowercase hex characters.
pub fn xxhash_hex(input: &[u8]) -> String {
  digest_to_hex(xxh3_128(input))
}

pub fn digest_to_hex(digest: u128) -> String {
  format!("{digest:032x}")
}

#[test]
fn test_xxhash_hex() {
  let hash = xxhash_hex(b"hello");
  assert_eq!(hash.len(), HASH_HEX_LEN);
  assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  assert_eq!(hash, xxhash_hex(b"hello"));
  assert_ne!(hash, xxhash_hex(b"hello!"));

  let mut hasher = Xxh3::default();
  hasher.update(b"hel");
  hasher.update(b"lo");
  assert_eq!(digest_to_hex(hasher.digest128()), hash);

  assert_eq!(digest_to_hex(1), "00000000000000000000000000000001");
}

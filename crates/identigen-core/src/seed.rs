// crates/identigen-core/src/seed.rs
//
// Input string -> SHA-512 digest, read as one big-endian unsigned integer.

use sha2::{Digest, Sha512};

pub const DIGEST_LEN: usize = 64;

/// A 512-bit seed. The digest bytes are the big-endian encoding of the integer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    digest: [u8; DIGEST_LEN],
}

impl Seed {
    /// Hash the UTF-8 bytes of `text`. The empty string is valid input.
    pub fn derive(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let hash = Sha512::digest(bytes);
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(hash.as_slice());
        Self { digest }
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.digest
    }

    /// Lowercase base-16 form of the seed integer (always 128 digits).
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(DIGEST_LEN * 2);
        for b in self.digest {
            s.push_str(&format!("{b:02x}"));
        }
        s
    }

    /// The seed integer as little-endian 32-bit words: least significant word
    /// first, high zero words trimmed, never empty.
    ///
    /// This is the key layout MT19937's `init_by_array` takes for arbitrary
    /// precision seeds.
    pub fn key_words(&self) -> Vec<u32> {
        let mut words: Vec<u32> = self
            .digest
            .rchunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();

        while words.len() > 1 && words.last() == Some(&0) {
            words.pop();
        }
        words
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hex = self.to_hex();
        write!(f, "Seed({}..)", &hex[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alice_digest_hex() {
        let s = Seed::derive("alice");
        assert_eq!(
            s.to_hex(),
            "408b27d3097eea5a46bf2ab6433a7234a33d5e49957b13ec7acc2ca08e1a13c7\
             5272c90c8d3385d47ede5420a7a9623aad817d9f8a70bd100a0acea7400daa59"
        );
    }

    #[test]
    fn empty_string_is_sha512_of_nothing() {
        let s = Seed::derive("");
        assert!(s.to_hex().starts_with("cf83e1357eefb8bd"));
    }

    #[test]
    fn key_words_are_least_significant_first() {
        let s = Seed::derive("alice");
        let words = s.key_words();
        assert_eq!(words.len(), 16);
        assert_eq!(words[0], 0x400d_aa59);
        assert_eq!(words[15], 0x408b_27d3);
    }

    #[test]
    fn key_words_trim_high_zero_words() {
        let mut digest = [0u8; DIGEST_LEN];
        digest[DIGEST_LEN - 1] = 7;
        let s = Seed { digest };
        assert_eq!(s.key_words(), vec![7]);

        let zero = Seed { digest: [0u8; DIGEST_LEN] };
        assert_eq!(zero.key_words(), vec![0]);
    }
}

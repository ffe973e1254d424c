use std::hash::{BuildHasher, Hash, Hasher};

use crate::token::Token;

const DJB2_SEED: u64 = 5381;

/// Multiplicative string hash: `h = h * 33 + byte` over every byte written.
#[derive(Clone, Copy, Debug)]
pub struct Djb2Hasher {
    hash: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { hash: DJB2_SEED }
    }
}

impl Hasher for Djb2Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash = (self.hash << 5).wrapping_add(self.hash).wrapping_add(b as u64);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}

/// `BuildHasher` producing [`Djb2Hasher`]s. Deterministic for the process lifetime.
#[derive(Clone, Copy, Debug, Default)]
pub struct Djb2State;

impl BuildHasher for Djb2State {
    type Hasher = Djb2Hasher;

    fn build_hasher(&self) -> Djb2Hasher {
        Djb2Hasher::default()
    }
}

/// Hashes a prefix and reduces it to a bucket index in `[0, width)`.
///
/// Tokens are fed one after another without a length prefix, so the hash is
/// taken over the characters of all words in order.
#[inline]
pub(crate) fn bucket_of<S: BuildHasher>(hasher: &S, key: &[Token], width: usize) -> usize {
    let mut state = hasher.build_hasher();
    for token in key {
        token.hash(&mut state);
    }
    (state.finish() % width as u64) as usize
}

//! Markov chain random text generation over words.
//!
//! Input text is split into whitespace-delimited words. Every run of N words
//! (the prefix) is recorded together with the word that followed it, in a
//! fixed-width hash table with chained buckets. Generation starts from a
//! prefix of sentinels and repeatedly draws a successor for the current
//! prefix by single-pass reservoir sampling, sliding the prefix forward.
//!
//! ```
//! use markov::{scanner, Chain};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let chain = Chain::build(scanner::words("the cat sat on the mat the cat ran"));
//! let text = chain.generate(100, SmallRng::seed_from_u64(1));
//! assert_eq!(text[0], "the");
//! ```

mod chain;
pub use chain::{Chain, Words};

mod config;
pub use config::{Config, DEFAULT_BUCKETS, DEFAULT_PREFIX_LEN, DEFAULT_WORD_LIMIT};

mod error;
pub use error::{Error, Result};

mod hashing;
pub use hashing::{Djb2Hasher, Djb2State};

mod index;
pub use index::{BucketChain, IndexStats, PrefixIndex, State, StateId};

mod prefix;
pub use prefix::Window;

mod sampling;
pub use sampling::reservoir_pick;

pub mod scanner;

mod token;
pub use token::Token;

use std::hash::BuildHasher;
use std::io::Write;
use std::iter::FusedIterator;

use rand::Rng;

use crate::config::Config;
use crate::error::Result;
use crate::hashing::Djb2State;
use crate::index::PrefixIndex;
use crate::prefix::Window;
use crate::sampling::reservoir_pick;
use crate::token::Token;

/// A built Markov chain over words.
///
/// A `Chain` only exists after a complete build pass, so every prefix reached
/// while generating has been recorded. Generation borrows the chain
/// immutably and may run any number of times, each with its own random
/// source.
pub struct Chain<S = Djb2State> {
    index: PrefixIndex<S>,
}

impl Chain {
    /// Builds a chain with the default prefix length and bucket count.
    pub fn build<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let config = Config::default();
        Self::from_index(PrefixIndex::new(config.prefix_len, config.buckets), tokens)
    }

    pub fn build_with<I, T>(config: &Config, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        config.validate()?;
        Ok(Self::from_index(PrefixIndex::new(config.prefix_len, config.buckets), tokens))
    }
}

impl<S: BuildHasher> Chain<S> {
    /// Builds a chain whose index hashes prefixes with `hasher` instead of djb2.
    pub fn build_with_hasher<I, T>(config: &Config, hasher: S, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        config.validate()?;
        let index = PrefixIndex::with_hasher(config.prefix_len, config.buckets, hasher);
        Ok(Self::from_index(index, tokens))
    }

    /// Runs the build pass over `tokens` into a fresh `index`.
    ///
    /// Starting from a window of sentinels, each token is recorded as a
    /// suffix of the current window and then slid into it. Once the input is
    /// exhausted the sentinel itself is recorded against the final window,
    /// giving generation a path to the end of the text.
    fn from_index<I, T>(mut index: PrefixIndex<S>, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        debug_assert!(index.is_empty(), "build pass needs an empty index");
        let mut window = Window::new(index.prefix_len());
        for token in tokens {
            let token = token.into();
            let id = index.lookup_or_create(window.as_slice());
            index.add_observation(id, token.clone());
            window.slide(token);
        }
        let id = index.lookup_or_create(window.as_slice());
        index.add_observation(id, Token::Sentinel);

        if log::log_enabled!(log::Level::Debug) {
            let stats = index.stats();
            log::debug!(
                "chain built: {} states, {} observations, {}/{} buckets occupied, longest chain {}",
                stats.states,
                stats.observations,
                stats.occupied_buckets,
                index.width(),
                stats.longest_chain
            );
        }

        Chain { index }
    }

    pub fn index(&self) -> &PrefixIndex<S> {
        &self.index
    }

    /// Lazily generates at most `limit` words.
    pub fn words<R: Rng>(&self, limit: usize, rng: R) -> Words<'_, S, R> {
        Words {
            index: &self.index,
            window: Window::new(self.index.prefix_len()),
            remaining: limit,
            rng,
        }
    }

    pub fn generate<R: Rng>(&self, limit: usize, rng: R) -> Vec<String> {
        self.words(limit, rng).map(str::to_owned).collect()
    }

    /// Writes each generated word followed by a single space. Returns the
    /// number of words written.
    pub fn write_to<W: Write, R: Rng>(&self, mut out: W, limit: usize, rng: R) -> Result<usize> {
        let mut written = 0;
        for word in self.words(limit, rng) {
            out.write_all(word.as_bytes())?;
            out.write_all(b" ")?;
            written += 1;
        }
        out.flush()?;
        Ok(written)
    }
}

/// Iterator returned by [`Chain::words`].
///
/// Stops when the word limit is reached or the end sentinel is drawn.
pub struct Words<'a, S, R> {
    index: &'a PrefixIndex<S>,
    window: Window,
    remaining: usize,
    rng: R,
}

impl<'a, S: BuildHasher, R: Rng> Iterator for Words<'a, S, R> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let index = self.index;
        let state = match index.lookup(self.window.as_slice()) {
            Some(state) => state,
            None => panic!(
                "prefix {:?} was never recorded during build",
                self.window.as_slice()
            ),
        };

        // Every state receives an observation when it is created.
        let picked = match reservoir_pick(state.suffixes(), &mut self.rng) {
            Some(picked) => picked,
            None => panic!("prefix {:?} has no suffixes", state.prefix()),
        };

        match picked {
            Token::Sentinel => {
                self.remaining = 0;
                None
            }
            Token::Word(text) => {
                self.window.slide(picked.clone());
                Some(&**text)
            }
        }
    }
}

impl<S: BuildHasher, R: Rng> FusedIterator for Words<'_, S, R> {}

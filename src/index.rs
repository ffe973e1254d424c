use std::hash::BuildHasher;

use crate::hashing::{bucket_of, Djb2State};
use crate::token::Token;

/// Handle to a state node owned by a [`PrefixIndex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(usize);

/// One distinct prefix and every token observed immediately after it.
#[derive(Debug)]
pub struct State {
    prefix: Box<[Token]>,
    // Stored oldest first; iterated newest first.
    suffixes: Vec<Token>,
    next: Option<StateId>,
}

impl State {
    pub fn prefix(&self) -> &[Token] {
        &self.prefix
    }

    /// Suffixes in reverse-chronological order, duplicates included.
    pub fn suffixes(&self) -> impl ExactSizeIterator<Item = &Token> + '_ {
        self.suffixes.iter().rev()
    }

    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub states: usize,
    pub observations: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
}

/// Fixed-width hash table from an N-token prefix to its [`State`].
///
/// Each bucket heads a singly linked chain of states whose prefix hashes to
/// it. New states are linked at the head of their chain. A prefix appears in
/// at most one state, since `lookup_or_create` is the only way in.
pub struct PrefixIndex<S = Djb2State> {
    prefix_len: usize,
    width: usize,
    buckets: Vec<Option<StateId>>,
    states: Vec<State>,
    observations: usize,
    hasher: S,
}

impl PrefixIndex {
    pub fn new(prefix_len: usize, width: usize) -> Self {
        Self::with_hasher(prefix_len, width, Djb2State)
    }
}

impl<S: BuildHasher> PrefixIndex<S> {
    pub fn with_hasher(prefix_len: usize, width: usize, hasher: S) -> Self {
        assert!(width > 0, "bucket count must be non-zero");
        PrefixIndex {
            prefix_len,
            width,
            buckets: vec![None; width],
            states: Vec::new(),
            observations: 0,
            hasher,
        }
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of distinct prefixes.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Total number of suffix entries across all states.
    pub fn observations(&self) -> usize {
        self.observations
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    fn find(&self, bucket: usize, key: &[Token]) -> Option<StateId> {
        let mut cursor = self.buckets[bucket];
        while let Some(id) = cursor {
            let state = &self.states[id.0];
            if &*state.prefix == key {
                return Some(id);
            }
            cursor = state.next;
        }
        None
    }

    /// Looks up `key` without creating anything.
    pub fn lookup(&self, key: &[Token]) -> Option<&State> {
        let bucket = bucket_of(&self.hasher, key, self.width);
        self.find(bucket, key).map(|id| self.state(id))
    }

    /// Returns the state for `key`, creating an empty one at the head of its
    /// bucket chain if the prefix has not been seen. Repeated calls with the
    /// same key return the same id.
    pub fn lookup_or_create(&mut self, key: &[Token]) -> StateId {
        assert_eq!(key.len(), self.prefix_len, "prefix length mismatch");

        let bucket = bucket_of(&self.hasher, key, self.width);
        if let Some(id) = self.find(bucket, key) {
            return id;
        }

        let id = StateId(self.states.len());
        self.states.push(State {
            prefix: key.into(),
            suffixes: Vec::new(),
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(id);
        id
    }

    /// Records `word` as observed after the state's prefix. No dedup: a word
    /// seen k times is k times as likely to be drawn.
    #[inline]
    pub fn add_observation(&mut self, id: StateId, word: Token) {
        self.states[id.0].suffixes.push(word);
        self.observations += 1;
    }

    /// States chained in `bucket`, head first.
    pub fn chain(&self, bucket: usize) -> BucketChain<'_> {
        BucketChain {
            states: &self.states,
            cursor: self.buckets.get(bucket).copied().flatten(),
        }
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            states: self.states.len(),
            observations: self.observations,
            ..IndexStats::default()
        };
        for bucket in 0..self.width {
            let length = self.chain(bucket).count();
            if length > 0 {
                stats.occupied_buckets += 1;
            }
            stats.longest_chain = stats.longest_chain.max(length);
        }
        stats
    }
}

/// Iterator over one bucket chain.
pub struct BucketChain<'a> {
    states: &'a [State],
    cursor: Option<StateId>,
}

impl<'a> Iterator for BucketChain<'a> {
    type Item = &'a State;

    fn next(&mut self) -> Option<&'a State> {
        let state = &self.states[self.cursor?.0];
        self.cursor = state.next;
        Some(state)
    }
}

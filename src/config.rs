use crate::error::{Error, Result};

pub const DEFAULT_PREFIX_LEN: usize = 2;
pub const DEFAULT_BUCKETS: usize = 4093;
pub const DEFAULT_WORD_LIMIT: usize = 10_000;

/// Parameters for building and sampling a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of words of context (N).
    pub prefix_len: usize,
    /// Hash table size. Affects collision rate, not output.
    pub buckets: usize,
    /// Maximum number of words produced.
    pub word_limit: usize,
    /// Seed for the random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
            buckets: DEFAULT_BUCKETS,
            word_limit: DEFAULT_WORD_LIMIT,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.prefix_len == 0 {
            return Err(Error::InvalidConfig("prefix length must be at least 1".to_owned()));
        }
        if self.buckets == 0 {
            return Err(Error::InvalidConfig("bucket count must be at least 1".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prefix_len, 2);
        assert_eq!(config.buckets, 4093);
        assert_eq!(config.word_limit, 10_000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_prefix() {
        let config = Config { prefix_len: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_buckets() {
        let config = Config { buckets: 0, ..Config::default() };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration: bucket count must be at least 1");
    }

    #[test]
    fn test_zero_word_limit_is_valid() {
        let config = Config { word_limit: 0, ..Config::default() };
        assert!(config.validate().is_ok());
    }
}

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Byte fed to the hasher for the sentinel. Never appears inside a scanned word.
const SENTINEL_BYTE: u8 = b'\n';

/// A single element of the chain: either a word from the input or the
/// sentinel marking "before the start" / "after the end" of the text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Token {
    Sentinel,
    Word(Arc<str>),
}

impl Token {
    pub fn word(text: &str) -> Self {
        Token::Word(Arc::from(text))
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Token::Sentinel)
    }

    /// Returns the word text, `None` for the sentinel.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Sentinel => None,
            Token::Word(text) => Some(text),
        }
    }
}

// Hashes the raw bytes only, so a prefix hashes as the concatenation of its
// words. This is what the djb2 bucket hash expects.
impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Token::Sentinel => state.write_u8(SENTINEL_BYTE),
            Token::Word(text) => state.write(text.as_bytes()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Sentinel => f.write_str("<sentinel>"),
            Token::Word(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::word(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Token::Word(Arc::from(text))
    }
}

impl From<Arc<str>> for Token {
    fn from(text: Arc<str>) -> Self {
        Token::Word(text)
    }
}

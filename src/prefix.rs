use crate::token::Token;

/// Rolling window of the `n` most recent tokens, used as lookup context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    tokens: Box<[Token]>,
}

impl Window {
    /// Creates a window of `len` sentinels.
    pub fn new(len: usize) -> Self {
        Window {
            tokens: vec![Token::Sentinel; len].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Drops the oldest token and appends `next`.
    #[inline]
    pub fn slide(&mut self, next: Token) {
        if let Some(last) = self.tokens.len().checked_sub(1) {
            self.tokens.rotate_left(1);
            self.tokens[last] = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_sentinels() {
        let window = Window::new(3);
        assert_eq!(window.len(), 3);
        assert!(window.as_slice().iter().all(Token::is_sentinel));
    }

    #[test]
    fn test_slide_drops_oldest() {
        let mut window = Window::new(2);
        window.slide(Token::word("t1"));
        assert_eq!(window.as_slice(), &[Token::Sentinel, Token::word("t1")]);
        window.slide(Token::word("t2"));
        assert_eq!(window.as_slice(), &[Token::word("t1"), Token::word("t2")]);
        window.slide(Token::word("t3"));
        assert_eq!(window.as_slice(), &[Token::word("t2"), Token::word("t3")]);
    }

    #[test]
    fn test_single_word_window() {
        let mut window = Window::new(1);
        window.slide(Token::word("a"));
        window.slide(Token::word("b"));
        assert_eq!(window.as_slice(), &[Token::word("b")]);
    }

    #[test]
    fn test_empty_window_ignores_slide() {
        let mut window = Window::new(0);
        window.slide(Token::word("a"));
        assert!(window.is_empty());
    }
}

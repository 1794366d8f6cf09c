use std::{
    ops::{Deref, DerefMut},
    slice::{Iter, IterMut},
};

/// A normalized search term, either a full field value or one of its n-grams.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Token(String);

impl Token {
    pub fn inner(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for Token {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Token {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(String::from(value))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Terms produced for one field value, in emission order. May repeat when a
/// value contains the same substring twice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.0.push(token)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Token> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, Token> {
        self.0.iter_mut()
    }

    /// Drops tokens a normalizer emptied or rejected.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Token) -> bool,
    {
        self.0.retain(f)
    }

    /// Number of distinct terms.
    pub fn distinct(&self) -> usize {
        let mut terms = self.0.iter().map(Token::as_str).collect::<Vec<_>>();
        terms.sort_unstable();
        terms.dedup();
        terms.len()
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Self(value)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        $crate::token::Tokens::from(vec![
            $( $crate::token::Token::from($token) ),*
        ])
    }};
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn test_token_char_len() {
        assert_eq!(Token::from("abc").char_len(), 3);
        assert_eq!(Token::from("çağrı").char_len(), 5);
        assert_eq!(Token::from("").char_len(), 0);
    }

    #[test]
    fn test_tokens_macro() {
        let tokens = tokens!["one", "two"];
        assert_eq!(tokens.count(), 2);
        assert_eq!(tokens.iter().next().map(Token::as_str), Some("one"));
    }

    #[test]
    fn test_tokens_distinct_and_retain() {
        let mut tokens = tokens!["aaaa", "aaa", "aaa", ""];
        assert_eq!(tokens.count(), 4);
        assert_eq!(tokens.distinct(), 3);

        tokens.retain(|token| !token.is_empty());
        assert_eq!(tokens, tokens!["aaaa", "aaa", "aaa"]);
    }
}

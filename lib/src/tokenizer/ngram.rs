use crate::{
    token::{Token, Tokens},
    tokenizer::{TextTokenizer, MIN_GRAM},
};

/// Emits the full value followed by every contiguous substring of at least
/// `min_gram` characters.
///
/// A value of `L` characters yields `O(L²)` keys, which is what makes a
/// substring query a single hash lookup.
#[derive(Clone, Debug)]
pub struct NGram {
    min_gram: usize,
}

impl Default for NGram {
    fn default() -> Self {
        Self::new(MIN_GRAM)
    }
}

impl NGram {
    /// `min_gram` of zero is treated as one.
    pub fn new(min_gram: usize) -> Self {
        Self {
            min_gram: min_gram.max(1),
        }
    }

    #[inline]
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }
}

impl TextTokenizer for NGram {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        let text = text.as_ref();
        if text.is_empty() {
            return Tokens::new();
        }

        // Byte offsets of every char boundary, including the end.
        let bounds = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect::<Vec<_>>();
        let chars = bounds.len() - 1;

        let span = (chars + 1).saturating_sub(self.min_gram);
        let mut tokens = Tokens::with_capacity(1 + span * (span + 1) / 2);
        tokens.push(Token::from(text));

        for start in 0..chars {
            for end in (start + self.min_gram)..=chars {
                if start == 0 && end == chars {
                    continue;
                }
                tokens.push(Token::from(&text[bounds[start]..bounds[end]]));
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        tokenizer::{NGram, TextTokenizer},
        tokens,
    };

    #[test]
    fn test_ngram_basic() {
        let tokens = NGram::default().tokenize("abcd");
        assert_eq!(tokens, tokens!["abcd", "abc", "bcd"]);
    }

    #[test]
    fn test_ngram_five_chars() {
        let tokens = NGram::default().tokenize("hello");
        assert_eq!(
            tokens,
            tokens!["hello", "hel", "hell", "ell", "ello", "llo"]
        );
    }

    #[test]
    fn test_ngram_short_value_full_term_only() {
        assert_eq!(NGram::default().tokenize("ab"), tokens!["ab"]);
        assert_eq!(NGram::default().tokenize("abc"), tokens!["abc"]);
    }

    #[test]
    fn test_ngram_empty() {
        assert_eq!(NGram::default().tokenize(""), tokens![]);
    }

    #[test]
    fn test_ngram_multibyte() {
        let tokens = NGram::default().tokenize("çağr");
        assert_eq!(tokens, tokens!["çağr", "çağ", "ağr"]);
    }

    #[test]
    fn test_ngram_custom_min_gram() {
        let tokens = NGram::new(2).tokenize("abc");
        assert_eq!(tokens, tokens!["abc", "ab", "bc"]);
        assert_eq!(NGram::new(0).min_gram(), 1);
    }

    #[test]
    fn test_ngram_count() {
        // Substrings of length >= 3 in a 10 char value: sum of (10 - k + 1), k = 3..=10.
        let tokens = NGram::default().tokenize("0123456789");
        assert_eq!(tokens.count(), 36);
    }
}

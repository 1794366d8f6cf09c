mod exact;
mod ngram;

pub use {exact::Exact, ngram::NGram};

use crate::token::Tokens;

/// Minimum length, in characters, of an indexed substring.
pub const MIN_GRAM: usize = 3;

/// Expands a normalized field value into the keys it is indexed under.
#[derive(Clone, Debug)]
pub enum Tokenizer {
    NGram(NGram),
    Exact(Exact),
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::NGram(NGram::default())
    }
}

impl Tokenizer {
    pub fn tokenize(&self, text: &str) -> Tokens {
        match self {
            Tokenizer::NGram(tokenizer) => tokenizer.tokenize(text),
            Tokenizer::Exact(tokenizer) => tokenizer.tokenize(text),
        }
    }

    /// Shortest substring length guaranteed to exist as a key, if any.
    pub fn min_gram(&self) -> Option<usize> {
        match self {
            Tokenizer::NGram(tokenizer) => Some(tokenizer.min_gram()),
            Tokenizer::Exact(_) => None,
        }
    }
}

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens;
}

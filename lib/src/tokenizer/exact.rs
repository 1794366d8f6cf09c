use crate::{
    token::{Token, Tokens},
    tokenizer::TextTokenizer,
};

/// Indexes the full value only.
#[derive(Clone, Debug, Default)]
pub struct Exact;

impl Exact {
    pub fn new() -> Self {
        Self
    }
}

impl TextTokenizer for Exact {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        let text = text.as_ref();
        if text.is_empty() {
            return Tokens::new();
        }

        Tokens::from(vec![Token::from(text)])
    }
}

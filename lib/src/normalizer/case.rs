use crate::{normalizer::TextNormalizer, token::Tokens};

/// Unicode-aware lower-casing.
#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            // Titlecase letters such as ǅ are not uppercase yet still change.
            let lowered = token.to_lowercase();
            if lowered != **token {
                **token = lowered;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Lowercase;
    use crate::{normalizer::TextNormalizer, tokens};

    #[test]
    fn test_normalizer_lowercase() {
        let mut tokens = tokens!["The", "TokeniZED", "String"];
        Lowercase::new().normalize(&mut tokens);
        assert_eq!(tokens, tokens!["the", "tokenized", "string"])
    }

    #[test]
    fn test_normalizer_all_lowercase() {
        let mut tokens = tokens!["the", "tokenized", "string"];
        Lowercase::new().normalize(&mut tokens);
        assert_eq!(tokens, tokens!["the", "tokenized", "string"])
    }

    #[test]
    fn test_normalizer_lowercase_unicode() {
        let mut tokens = tokens!["ÉLAN", "Ünal", "ǅemal", "ǈubica"];
        Lowercase::new().normalize(&mut tokens);
        assert_eq!(tokens, tokens!["élan", "ünal", "ǆemal", "ǉubica"])
    }
}

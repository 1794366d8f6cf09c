pub mod case;

pub use case::Lowercase;

use crate::token::{Token, Tokens};

pub trait TextNormalizerClone {
    fn clone_box(&self) -> Box<dyn TextNormalizer>;
}

impl<T> TextNormalizerClone for T
where
    T: 'static + TextNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn TextNormalizer> {
        Box::new(self.clone())
    }
}

pub trait TextNormalizer: TextNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&self, tokens: &mut Tokens);
}

impl Clone for Box<dyn TextNormalizer> {
    fn clone(&self) -> Box<dyn TextNormalizer> {
        self.clone_box()
    }
}

/// Ordered list of normalizers applied to field values and queries alike.
#[derive(Clone, Debug)]
pub struct NormalizerPipeline(Vec<Box<dyn TextNormalizer>>);

impl Default for NormalizerPipeline {
    /// Lower-casing only.
    fn default() -> Self {
        let mut pipeline = Self::new();
        pipeline.insert(Box::new(Lowercase::new()));
        pipeline
    }
}

impl NormalizerPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, normalizer: Box<dyn TextNormalizer>) -> &mut Self {
        self.0.push(normalizer);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn run(&self, tokens: &mut Tokens) {
        self.0.iter().for_each(|normalizer| {
            normalizer.normalize(tokens);
        })
    }

    /// Normalizes a single value. Returns `None` when a normalizer drops it.
    pub fn apply(&self, value: &str) -> Option<String> {
        let mut tokens = Tokens::from(vec![Token::from(value)]);
        self.run(&mut tokens);
        tokens.into_iter().next().map(Token::inner)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        normalizer::{Lowercase, NormalizerPipeline, TextNormalizer},
        token::Tokens,
        tokens,
    };

    #[derive(Clone, Debug)]
    struct Trim;

    impl TextNormalizer for Trim {
        fn normalize(&self, tokens: &mut Tokens) {
            tokens.iter_mut().for_each(|token| {
                let trimmed = token.trim().to_string();
                **token = trimmed;
            });
            tokens.retain(|token| !token.is_empty());
        }
    }

    #[test]
    fn test_normalizer_pipeline_default_lowercases() {
        let pipeline = NormalizerPipeline::default();
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.apply("Alice SMITH"), Some("alice smith".to_string()));
    }

    #[test]
    fn test_normalizer_pipeline_order() {
        let mut tokens = tokens!["  Hot Lead ", "   ", "COLD"];

        let mut pipeline = NormalizerPipeline::new();
        pipeline.insert(Box::new(Trim));
        pipeline.insert(Box::new(Lowercase::new()));
        pipeline.run(&mut tokens);

        assert_eq!(tokens, tokens!["hot lead", "cold"]);
    }

    #[test]
    fn test_normalizer_pipeline_apply_dropped() {
        let mut pipeline = NormalizerPipeline::new();
        pipeline.insert(Box::new(Trim));
        assert_eq!(pipeline.apply("   "), None);
    }

    #[test]
    fn test_normalizer_pipeline_empty_is_identity() {
        let pipeline = NormalizerPipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply("MiXeD"), Some("MiXeD".to_string()));
    }
}

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered normalized sentences for one document or batch, with a per-run
/// used-set so no sentence backs two questions in the same run.
#[derive(Debug, Clone, Default)]
pub struct SentencePool {
    sentences: Vec<String>,
    used: HashSet<String>,
}

impl SentencePool {
    pub fn new(sentences: Vec<String>) -> Self {
        Self {
            sentences,
            used: HashSet::new(),
        }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// A shuffled copy of the pool; the pool's own order is untouched.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<String> {
        let mut copy = self.sentences.clone();
        copy.shuffle(rng);
        copy
    }

    pub fn is_used(&self, sentence: &str) -> bool {
        self.used.contains(sentence)
    }

    pub fn mark_used(&mut self, sentence: &str) {
        self.used.insert(sentence.to_string());
    }
}

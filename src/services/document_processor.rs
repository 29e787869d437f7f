use std::sync::Arc;

use rand::Rng;

use crate::{
    config::Config,
    errors::EngineResult,
    models::domain::Question,
    services::{sentence_normalizer, structured_parser, synthesizer},
};

/// Per-document extraction policy: recover authored questions first, and
/// only synthesize fill-in-the-blank questions when the authored yield is
/// too thin. Thin or empty content is never an error.
pub struct DocumentProcessor {
    config: Arc<Config>,
}

impl DocumentProcessor {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Questions for one document's raw text, ids left at 0 pending the
    /// orchestrator's global renumbering.
    pub fn process<R: Rng>(&self, raw_text: &str, rng: &mut R) -> EngineResult<Vec<Question>> {
        let mut questions = structured_parser::parse_questions(raw_text);
        for question in &mut questions {
            question.id = 0;
        }
        let structured_count = questions.len();

        if structured_count < self.config.structured_yield_threshold {
            let mut pool = sentence_normalizer::build_sentence_pool(raw_text);
            let synthesized = synthesizer::synthesize_questions(
                &mut pool,
                self.config.per_document_synth_cap,
                self.config.shuffle_sentences,
                rng,
            );
            log::info!(
                "Structured yield {structured_count} below threshold {}; synthesized {} questions from {} sentences",
                self.config.structured_yield_threshold,
                synthesized.len(),
                pool.len()
            );
            questions.extend(synthesized);
        }

        Ok(questions)
    }
}

use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub target_question_count: usize,
    pub structured_yield_threshold: usize,
    pub per_document_synth_cap: usize,
    pub shuffle_sentences: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            target_question_count: env::var("QUIZFORGE_TARGET_QUESTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            structured_yield_threshold: env::var("QUIZFORGE_STRUCTURED_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            per_document_synth_cap: env::var("QUIZFORGE_SYNTH_CAP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(25),
            shuffle_sentences: env::var("QUIZFORGE_SHUFFLE_SENTENCES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    pub fn test_config() -> Self {
        Self {
            target_question_count: 100,
            structured_yield_threshold: 10,
            per_document_synth_cap: 25,
            shuffle_sentences: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_question_count: 100,
            structured_yield_threshold: 10,
            per_document_synth_cap: 25,
            shuffle_sentences: true,
        }
    }
}

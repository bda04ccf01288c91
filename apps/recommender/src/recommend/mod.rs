// Job recommendation engine: skill tokenizing, TF-IDF scoring, ranking.
// Pure computation lives in tokenize/tfidf/ranking; pipeline is the only part that
// talks to a SkillStore.

pub mod handlers;
pub mod pipeline;
pub mod ranking;
pub mod tfidf;
pub mod tokenize;

pub use pipeline::{
    recommend, score_postings, Recommendation, RecommendationRequest, DEFAULT_LIMIT,
};

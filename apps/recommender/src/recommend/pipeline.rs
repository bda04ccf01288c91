use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::RecommendError;
use crate::models::job_posting::{JobPosting, OpportunityType};
use crate::store::SkillStore;

use super::ranking::{rank_top_k, round_score};
use super::tfidf::{cosine_similarity, TfidfVectorizer};

/// Default number of postings returned per student.
pub const DEFAULT_LIMIT: usize = 5;

/// One recommended posting. Serializes as `{"id", "title", "match_score"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i32,
    pub title: String,
    pub match_score: f64,
}

#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub student_id: Option<String>,
    pub opportunity_type: Option<OpportunityType>,
    pub limit: usize,
}

impl RecommendationRequest {
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            opportunity_type: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Scores every posting against the student's skills.
///
/// The corpus is all posting skill texts followed by the student's, so IDF is
/// computed over `postings.len() + 1` documents. Returns one score per posting,
/// in posting order.
pub fn score_postings(student_skills: &str, postings: &[JobPosting]) -> Vec<f64> {
    let mut corpus: Vec<&str> = postings.iter().map(|p| p.skills.as_str()).collect();
    corpus.push(student_skills);

    let mut vectorizer = TfidfVectorizer::new();
    let mut rows = vectorizer.fit_transform(&corpus);
    let Some(student_row) = rows.pop() else {
        return Vec::new();
    };
    debug!(
        vocabulary = vectorizer.vocabulary_size(),
        documents = corpus.len(),
        "Fitted TF-IDF"
    );

    rows.iter()
        .map(|job_row| cosine_similarity(&student_row, job_row))
        .collect()
}

/// Runs one recommendation: resume lookup, corpus retrieval, scoring, ranking.
///
/// Nothing touches the store until the student id has been validated, and the
/// posting query only runs once a resume has been found.
pub async fn recommend(
    store: &dyn SkillStore,
    request: &RecommendationRequest,
) -> Result<Vec<Recommendation>, RecommendError> {
    let student_id = request
        .student_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(RecommendError::MissingInput)?;

    if request.limit == 0 {
        return Err(RecommendError::InvalidInput(
            "limit must be greater than zero".to_string(),
        ));
    }

    let student_skills = store
        .latest_resume_skills(student_id)
        .await?
        .ok_or(RecommendError::ResumeNotFound)?;

    let postings = store.job_postings(request.opportunity_type).await?;
    if postings.is_empty() {
        return Err(RecommendError::EmptyJobCorpus);
    }

    let scores = score_postings(&student_skills, &postings);
    let recommendations: Vec<Recommendation> = rank_top_k(&scores, request.limit)
        .into_iter()
        .map(|idx| Recommendation {
            id: postings[idx].id,
            title: postings[idx].title.clone(),
            match_score: round_score(scores[idx]),
        })
        .collect();

    info!(
        student_id,
        postings = postings.len(),
        returned = recommendations.len(),
        top_score = recommendations.first().map(|r| r.match_score),
        "Recommendations computed"
    );

    Ok(recommendations)
}

//! Read-only access to resumes and job postings.
//!
//! The pipeline only ever sees the `SkillStore` trait, so the Postgres backend can be
//! replaced by an in-memory one in tests.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::RecommendError;
use crate::models::job_posting::{JobPosting, JobPostingRow, OpportunityType};
use crate::models::resume::ResumeSkillsRow;

#[async_trait]
pub trait SkillStore: Send + Sync {
    /// Skill text of the student's most recent resume (highest id), or `None` when the
    /// student has no resume. A NULL skills column comes back as `Some("")`.
    async fn latest_resume_skills(&self, student_id: &str)
        -> Result<Option<String>, RecommendError>;

    /// Every posting, optionally restricted to one opportunity type, ordered by id.
    async fn job_postings(
        &self,
        opportunity_type: Option<OpportunityType>,
    ) -> Result<Vec<JobPosting>, RecommendError>;
}

/// Postgres-backed store. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct PgSkillStore {
    pool: PgPool,
}

impl PgSkillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Closes the pool and waits for every connection to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SkillStore for PgSkillStore {
    async fn latest_resume_skills(
        &self,
        student_id: &str,
    ) -> Result<Option<String>, RecommendError> {
        // student_id is compared as text so the key column type does not matter
        let row: Option<ResumeSkillsRow> = sqlx::query_as(
            "SELECT skills FROM resumes WHERE student_id::text = $1 ORDER BY id DESC LIMIT 1",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        debug!(found = row.is_some(), "Resume lookup finished");
        Ok(row.map(ResumeSkillsRow::into_skills))
    }

    async fn job_postings(
        &self,
        opportunity_type: Option<OpportunityType>,
    ) -> Result<Vec<JobPosting>, RecommendError> {
        let rows: Vec<JobPostingRow> = match opportunity_type {
            Some(kind) => {
                sqlx::query_as(
                    r#"
                    SELECT id, COALESCE(job_title, '') AS job_title, skills
                    FROM job_postings
                    WHERE opportunity_type = $1
                    ORDER BY id
                    "#,
                )
                .bind(kind.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, COALESCE(job_title, '') AS job_title, skills
                    FROM job_postings
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!(count = rows.len(), "Fetched job postings");
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// In-memory store used by pipeline and route tests.
    #[derive(Default)]
    pub struct InMemoryStore {
        /// (student_id, skills) in insertion order; later rows are more recent.
        pub resumes: Vec<(String, Option<String>)>,
        /// (posting, opportunity type)
        pub postings: Vec<(JobPosting, OpportunityType)>,
        pub queries: AtomicUsize,
    }

    impl InMemoryStore {
        pub fn with_resume(mut self, student_id: &str, skills: &str) -> Self {
            self.resumes
                .push((student_id.to_string(), Some(skills.to_string())));
            self
        }

        pub fn with_posting(self, id: i32, title: &str, skills: Option<&str>) -> Self {
            self.with_posting_of(id, title, skills, OpportunityType::Job)
        }

        pub fn with_posting_of(
            mut self,
            id: i32,
            title: &str,
            skills: Option<&str>,
            kind: OpportunityType,
        ) -> Self {
            let row = JobPostingRow {
                id,
                job_title: title.to_string(),
                skills: skills.map(str::to_string),
            };
            self.postings.push((JobPosting::from(row), kind));
            self
        }

        pub fn query_count(&self) -> usize {
            self.queries.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SkillStore for InMemoryStore {
        async fn latest_resume_skills(
            &self,
            student_id: &str,
        ) -> Result<Option<String>, RecommendError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .resumes
                .iter()
                .rev()
                .find(|(id, _)| id == student_id)
                .map(|(_, skills)| skills.clone().unwrap_or_default()))
        }

        async fn job_postings(
            &self,
            opportunity_type: Option<OpportunityType>,
        ) -> Result<Vec<JobPosting>, RecommendError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            let mut postings: Vec<JobPosting> = self
                .postings
                .iter()
                .filter(|(_, kind)| opportunity_type.map_or(true, |k| k == *kind))
                .map(|(posting, _)| posting.clone())
                .collect();
            postings.sort_by_key(|p| p.id);
            Ok(postings)
        }
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPostingRow {
    pub id: i32,
    pub job_title: String,
    pub skills: Option<String>,
}

/// A posting as seen by the scorer. Absent skill text is already normalized to "".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i32,
    pub title: String,
    pub skills: String,
}

impl From<JobPostingRow> for JobPosting {
    fn from(row: JobPostingRow) -> Self {
        JobPosting {
            id: row.id,
            title: row.job_title,
            skills: row.skills.unwrap_or_default(),
        }
    }
}

/// Which kind of posting to score against. `None` in a request means every posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    Job,
    Internship,
}

impl OpportunityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Job => "job",
            OpportunityType::Internship => "internship",
        }
    }
}

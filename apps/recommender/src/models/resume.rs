use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Skills column of a student's resume row. NULL when the student left it blank.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSkillsRow {
    pub skills: Option<String>,
}

impl ResumeSkillsRow {
    pub fn into_skills(self) -> String {
        self.skills.unwrap_or_default()
    }
}

//! One-shot command line run: `recommend-jobs <student_id>`.
//!
//! Stdout receives exactly one JSON document, either the recommendation list or an
//! `{"error": ...}` object. Logs go to stderr.

use std::process::ExitCode;

use tracing::{info, warn};

use crate::config::Config;
use crate::db::create_pool;
use crate::errors::RecommendError;
use crate::logging;
use crate::recommend::{recommend, Recommendation, RecommendationRequest};
use crate::store::PgSkillStore;

/// Reads the student id from the process arguments (program name excluded).
/// Extra arguments are ignored.
pub fn student_id_from_args<I>(args: I) -> Result<String, RecommendError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let student_id = args
        .next()
        .filter(|id| !id.trim().is_empty())
        .ok_or(RecommendError::MissingInput)?;
    let extra = args.count();
    if extra > 0 {
        warn!(extra, "Ignoring extra command line arguments");
    }
    Ok(student_id)
}

/// Serializes the outcome of a run as the single stdout document.
pub fn render(result: &Result<Vec<Recommendation>, RecommendError>) -> String {
    match result {
        Ok(recommendations) => serde_json::to_string(recommendations).unwrap_or_else(|e| {
            RecommendError::Internal(e.into()).to_json().to_string()
        }),
        Err(e) => e.to_json().to_string(),
    }
}

/// Full run against Postgres. The pool holds a single connection and is closed
/// before returning, whatever the outcome.
pub async fn run<I>(args: I) -> ExitCode
where
    I: IntoIterator<Item = String>,
{
    let result = execute(args).await;
    println!("{}", render(&result));
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn execute<I>(args: I) -> Result<Vec<Recommendation>, RecommendError>
where
    I: IntoIterator<Item = String>,
{
    // checked before configuration so a bare invocation never touches the store
    let student_id = student_id_from_args(args)?;

    let config = Config::from_env()?;
    logging::init_stderr(&config.rust_log);

    let store = PgSkillStore::new(create_pool(&config.database_url, 1).await?);
    let request = RecommendationRequest {
        limit: config.recommendation_limit,
        ..RecommendationRequest::for_student(student_id)
    };

    let result = recommend(&store, &request).await;
    store.close().await;
    info!("Database connection released");

    result
}

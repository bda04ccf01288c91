pub mod job_posting;
pub mod resume;

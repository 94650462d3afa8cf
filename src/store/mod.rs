// src/store/mod.rs
//! Per-entity repositories over the shared SQLite pool.
//!
//! Every repository follows the same contract: `list()`, `get_by_id()`,
//! `create()` plus entity-specific mutators. Absence is reported as
//! `Option::None` / an empty `Vec`; the web layer maps that to 404.

pub mod applications;
pub mod assessments;
pub mod candidates;
pub mod interviews;
pub mod jobs;
pub mod questions;
pub mod responses;

pub use applications::{
    Application, ApplicationFilter, ApplicationRepository, ApplicationSort, ApplicationStatus,
};
pub use assessments::{Assessment, AssessmentRepository};
pub use candidates::{Candidate, CandidateRepository, ResumeProfile};
pub use interviews::{Interview, InterviewRepository, InterviewStatus};
pub use jobs::{Job, JobRepository, NewJob};
pub use questions::{Question, QuestionKind, QuestionRepository};
pub use responses::{Response, ResponseRepository};

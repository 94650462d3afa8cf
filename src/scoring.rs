// src/scoring.rs
//! Placeholder assessment and resume analysis.
//!
//! None of this performs real analysis: the scorecard is random noise and
//! the resume profile is a fixture. Both stand in for an AI pipeline that
//! does not exist yet and must stay clearly separated from real logic.

use rand::Rng;

use crate::store::ResumeProfile;

/// Five-axis interview scorecard, each axis scored 1-5
#[derive(Debug, Clone, Copy)]
pub struct Scorecard {
    pub empathy: i64,
    pub collaboration: i64,
    pub confidence: i64,
    pub english: i64,
    pub professionalism: i64,
}

/// Draw a scorecard with each axis independently uniform over 1..=5.
/// Stub: no response audio is consulted.
pub fn draw_scorecard() -> Scorecard {
    let mut rng = rand::thread_rng();

    Scorecard {
        empathy: rng.gen_range(1..=5),
        collaboration: rng.gen_range(1..=5),
        confidence: rng.gen_range(1..=5),
        english: rng.gen_range(1..=5),
        professionalism: rng.gen_range(1..=5),
    }
}

/// Fixture profile attached after a resume upload. Stub: the uploaded
/// document is stored but never read.
pub fn mock_resume_profile() -> ResumeProfile {
    ResumeProfile {
        skills: vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
        ],
        education: "Sample University".to_string(),
        experience: "3 years of development experience".to_string(),
    }
}

/// Placeholder transcription recorded with every audio response.
/// Stub: no speech-to-text runs.
pub const MOCK_TRANSCRIPTION: &str = "This is a mock transcription of the audio response.";

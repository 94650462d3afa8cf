// src/matching.rs
//! Keyword skill matching between a job posting and a candidate profile.
//!
//! A job skill counts as matched when it and a candidate skill contain
//! each other case-insensitively in either direction ("React" matches
//! "React Native"). This is a keyword scan, not semantic matching.

/// Outcome of matching a candidate against a job's required skills.
/// `score` is None when either side has no skills to compare.
#[derive(Debug, Clone, Default)]
pub struct SkillMatch {
    pub score: Option<i64>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

pub fn match_skills(job_skills: &[String], candidate_skills: &[String]) -> SkillMatch {
    if job_skills.is_empty() || candidate_skills.is_empty() {
        return SkillMatch::default();
    }

    let candidate_lower: Vec<String> = candidate_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in job_skills {
        let skill_lower = skill.to_lowercase();
        let found = candidate_lower
            .iter()
            .any(|c| c.contains(&skill_lower) || skill_lower.contains(c.as_str()));

        if found {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let score = (matched.len() as f64 / job_skills.len() as f64 * 100.0).round() as i64;

    SkillMatch {
        score: Some(score),
        matched,
        missing,
    }
}

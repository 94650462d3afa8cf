// src/question_bank.rs
//! The fixed interview script. Every interview gets the same three
//! questions (one technical, two behavioral); the script is not
//! parameterized by job or candidate.

use crate::store::QuestionKind;

#[derive(Debug, Clone, Copy)]
pub struct QuestionTemplate {
    pub text: &'static str,
    pub kind: QuestionKind,
    pub skill_assessed: &'static str,
}

pub const INTERVIEW_SCRIPT: [QuestionTemplate; 3] = [
    QuestionTemplate {
        text: "Tell me about your experience with JavaScript.",
        kind: QuestionKind::Technical,
        skill_assessed: "JavaScript",
    },
    QuestionTemplate {
        text: "Describe a challenging project you worked on recently.",
        kind: QuestionKind::Behavioral,
        skill_assessed: "Problem Solving",
    },
    QuestionTemplate {
        text: "How do you handle conflicts in a team environment?",
        kind: QuestionKind::Behavioral,
        skill_assessed: "Teamwork",
    },
];

//! Text Extraction Engine — turns a pasted job-posting blob into a structured
//! draft a human confirms instead of retyping.
//!
//! The parser is a pure function over the input string and the fixed skills
//! dictionary: deterministic, side-effect free, and infallible. A field with no
//! matching rule is simply left unset; callers merge results additively via
//! [`ParsedJobPosting::apply_to`] so an absent field never clobbers what the
//! user already typed.
//!
//! Precedence is data, not control flow: [`RULE_SEQUENCE`] is the single
//! ordered list of (name, rule) pairs, evaluated top to bottom. Auditing or
//! re-ordering a rule means editing that table, nothing else.

pub mod handlers;
mod rules;
pub mod skills;

use serde::{Deserialize, Serialize};

use crate::models::job::{JobPostingDraft, JobSubType, JobType, WorkMode};

/// Best-effort structured read of a pasted posting. Every field is optional;
/// `description` is the one field the parser always sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobPosting {
    pub title: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub job_sub_type: Option<JobSubType>,
    pub work_mode: Option<WorkMode>,
    pub pay_per_hour: Option<f64>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub experience_required_years: Option<u32>,
    pub skills: Vec<String>,
    pub description: Option<String>,
}

impl ParsedJobPosting {
    /// Additive merge into a form draft: only fields the parser populated are
    /// written, so existing user input survives a re-paste. Skills are
    /// appended without duplicates.
    pub fn apply_to(&self, draft: &mut JobPostingDraft) {
        if let Some(title) = &self.title {
            draft.title = Some(title.clone());
        }
        if let Some(location) = &self.location {
            draft.location = Some(location.clone());
        }
        if let Some(job_type) = self.job_type {
            draft.job_type = Some(job_type);
            draft.job_sub_type = self.job_sub_type;
        }
        if let Some(work_mode) = self.work_mode {
            draft.work_mode = Some(work_mode);
        }
        if let Some(pay) = self.pay_per_hour {
            draft.pay_per_hour = Some(pay);
        }
        if let Some(min) = self.salary_min {
            draft.salary_min = Some(min);
        }
        if let Some(max) = self.salary_max {
            draft.salary_max = Some(max);
        }
        if let Some(years) = self.experience_required_years {
            draft.experience_required_years = Some(years);
        }
        for skill in &self.skills {
            if !draft.skills.contains(skill) {
                draft.skills.push(skill.clone());
            }
        }
        if let Some(description) = &self.description {
            draft.description = Some(description.clone());
        }
    }
}

/// Shared view of the input handed to every rule.
pub(crate) struct RuleInput<'a> {
    pub text: &'a str,
    pub lines: Vec<&'a str>,
}

type Rule = fn(&RuleInput, &mut ParsedJobPosting);

/// The ordered rule table. Order is load-bearing: the salary rule defers to a
/// pay-rate hit, and the location fallback reads the resolved work mode.
const RULE_SEQUENCE: &[(&str, Rule)] = &[
    ("title", rules::title),
    ("pay_rate", rules::pay_rate),
    ("salary_range", rules::salary_range),
    ("job_type", rules::job_type),
    ("work_mode", rules::work_mode),
    ("location", rules::location),
    ("experience", rules::experience),
    ("skills", rules::skills),
    ("description", rules::description),
];

/// Parses pasted job-posting text. Never fails; an unrecognizable input yields
/// a record holding just the trimmed description.
pub fn parse_job_text(text: &str) -> ParsedJobPosting {
    let input = RuleInput {
        text,
        lines: text.lines().collect(),
    };
    let mut parsed = ParsedJobPosting::default();
    for (_name, rule) in RULE_SEQUENCE {
        rule(&input, &mut parsed);
    }
    parsed
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! The individual Smart-Paste rules, one function per extracted field.
//!
//! Each rule tests independently over the full pasted text and writes at most
//! its own fields. Precedence lives entirely in the rule sequence declared in
//! `mod.rs` and, for job type, in [`JOB_TYPE_RULES`] — no rule reaches into
//! another's output except where the sequence explicitly allows it (the salary
//! rule yields to a prior pay-rate hit, the location rule may read the already
//! resolved work mode).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::skills::match_skills;
use crate::extraction::{ParsedJobPosting, RuleInput};
use crate::models::job::{JobSubType, JobType, WorkMode};

// ────────────────────────────────────────────────────────────────────────────
// Patterns
// ────────────────────────────────────────────────────────────────────────────

static PAY_RATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\s*(\d+(?:\.\d+)?)\s*(?:/\s*hr\b|/\s*hour\b|per\s+hour\b)").unwrap()
});

// Two dollar amounts joined by a hyphen or en-dash, each optionally k-suffixed.
static SALARY_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\s*(\d+(?:\.\d+)?)\s*k?\s*[-–]\s*\$?\s*(\d+(?:\.\d+)?)\s*k?\b").unwrap()
});

static C2C_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bc2c\b|corp\s*[-\s]?\s*to\s*[-\s]?\s*corp").unwrap());
static C2H_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bc2h\b|contract\s*[-\s]?\s*to\s*[-\s]?\s*hire").unwrap());
static TEN99_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b1099\b").unwrap());
static W2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bw-?2\b").unwrap());
static CONTRACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bcontract(?:or)?\b").unwrap());
static FULL_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bfull[\s-]?time\b|\bfulltime\b").unwrap());
static PART_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bpart[\s-]?time\b|\bparttime\b").unwrap());
static DIRECT_HIRE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bdirect[\s-]?hire\b").unwrap());
static SALARIED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsalar(?:y|ied)\b").unwrap());

static REMOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bremote\b|\bwork\s+from\s+home\b|\bwfh\b").unwrap());
static HYBRID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bhybrid\b").unwrap());
static ONSITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bon[\s-]?site\b|\bin[\s-]?office\b").unwrap());

// Labeled location line, anchored at line start.
static LOCATION_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*(?:work\s+location|location|city)\s*:\s*(\S.*?)\s*$").unwrap()
});
static MODE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:remote|hybrid|on[\s-]?site|wfh)\b").unwrap());
static YEARS_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\byears?\b").unwrap());

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*years?\s+(?:of\s+)?(?:hands[\s-]?on\s+)?(?:experience|exp)\b")
        .unwrap()
});

// ────────────────────────────────────────────────────────────────────────────
// Job-type decision table
// ────────────────────────────────────────────────────────────────────────────

/// One row of the job-type decision table. The first row whose `applies`
/// predicate hits wins; later rows never run for the same text.
struct JobTypeRule {
    #[allow(dead_code)]
    name: &'static str,
    applies: fn(&str) -> bool,
    job_type: JobType,
    sub_type: fn(&str) -> Option<JobSubType>,
}

/// Fixed priority order: C2C → C2H → 1099 → W2-contract → bare contract →
/// full-time (with a secondary sub-type scan) → part-time.
static JOB_TYPE_RULES: &[JobTypeRule] = &[
    JobTypeRule {
        name: "c2c",
        applies: |t| C2C_RE.is_match(t),
        job_type: JobType::Contract,
        sub_type: |_| Some(JobSubType::C2c),
    },
    JobTypeRule {
        name: "c2h",
        applies: |t| C2H_RE.is_match(t),
        job_type: JobType::Contract,
        sub_type: |_| Some(JobSubType::C2h),
    },
    JobTypeRule {
        name: "1099",
        applies: |t| TEN99_RE.is_match(t),
        job_type: JobType::Contract,
        sub_type: |_| Some(JobSubType::Ten99),
    },
    JobTypeRule {
        name: "w2_contract",
        applies: |t| W2_RE.is_match(t) && CONTRACT_RE.is_match(t),
        job_type: JobType::Contract,
        sub_type: |_| Some(JobSubType::W2),
    },
    JobTypeRule {
        name: "contract",
        applies: |t| CONTRACT_RE.is_match(t),
        job_type: JobType::Contract,
        sub_type: |_| None,
    },
    JobTypeRule {
        name: "full_time",
        applies: |t| FULL_TIME_RE.is_match(t),
        job_type: JobType::FullTime,
        sub_type: |t| {
            if DIRECT_HIRE_RE.is_match(t) {
                Some(JobSubType::DirectHire)
            } else if SALARIED_RE.is_match(t) {
                Some(JobSubType::Salary)
            } else if W2_RE.is_match(t) {
                Some(JobSubType::W2)
            } else {
                None
            }
        },
    },
    JobTypeRule {
        name: "part_time",
        applies: |t| PART_TIME_RE.is_match(t),
        job_type: JobType::PartTime,
        sub_type: |_| None,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Rules, in sequence order
// ────────────────────────────────────────────────────────────────────────────

/// Rule 1: title = first non-empty line, trimmed at the line boundary only.
pub(crate) fn title(input: &RuleInput, out: &mut ParsedJobPosting) {
    out.title = input
        .lines
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .map(str::to_string);
}

/// Rule 2: hourly pay rate, e.g. `$60/hr`, `$62.50 per hour`.
pub(crate) fn pay_rate(input: &RuleInput, out: &mut ParsedJobPosting) {
    if let Some(caps) = PAY_RATE_RE.captures(input.text) {
        out.pay_per_hour = caps[1].parse::<f64>().ok();
    }
}

/// Rule 3: salary range. Skipped entirely when rule 2 already matched — pay
/// rate and salary range are mutually exclusive by rule order, not by schema.
/// A first number below 2000 means both ends are expressed in thousands
/// ("80-120" reads as $80k–$120k). Min/max pass through unordered.
pub(crate) fn salary_range(input: &RuleInput, out: &mut ParsedJobPosting) {
    if out.pay_per_hour.is_some() {
        return;
    }
    let Some(caps) = SALARY_RANGE_RE.captures(input.text) else {
        return;
    };
    let (Ok(first), Ok(second)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) else {
        return;
    };
    let factor = if first < 2000.0 { 1000.0 } else { 1.0 };
    out.salary_min = Some((first * factor).round() as u32);
    out.salary_max = Some((second * factor).round() as u32);
}

/// Rule 4: job type and sub-type via the decision table. First row wins; only
/// one type/sub-type pair is ever written.
pub(crate) fn job_type(input: &RuleInput, out: &mut ParsedJobPosting) {
    for rule in JOB_TYPE_RULES {
        if (rule.applies)(input.text) {
            out.job_type = Some(rule.job_type);
            out.job_sub_type = (rule.sub_type)(input.text);
            return;
        }
    }
}

/// Rule 5: work mode, priority remote → hybrid → onsite.
pub(crate) fn work_mode(input: &RuleInput, out: &mut ParsedJobPosting) {
    out.work_mode = if REMOTE_RE.is_match(input.text) {
        Some(WorkMode::Remote)
    } else if HYBRID_RE.is_match(input.text) {
        Some(WorkMode::Hybrid)
    } else if ONSITE_RE.is_match(input.text) {
        Some(WorkMode::Onsite)
    } else {
        None
    };
}

/// Rule 6: location. A labeled `Location:`/`City:`/`Work Location:` line wins
/// outright. Otherwise lines 2–4 are scanned for something location-shaped:
/// starts with a work-mode keyword or contains a comma, is under 40 chars, and
/// carries no dollar sign or year(s) token. Falls back to "Remote" when the
/// work mode already resolved remote.
pub(crate) fn location(input: &RuleInput, out: &mut ParsedJobPosting) {
    if let Some(caps) = LOCATION_LABEL_RE.captures(input.text) {
        out.location = Some(caps[1].to_string());
        return;
    }
    for line in input.lines.iter().skip(1).take(3) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let location_shaped = MODE_PREFIX_RE.is_match(line) || line.contains(',');
        if location_shaped
            && line.len() < 40
            && !line.contains('$')
            && !YEARS_TOKEN_RE.is_match(line)
        {
            out.location = Some(line.to_string());
            return;
        }
    }
    if out.work_mode == Some(WorkMode::Remote) {
        out.location = Some("Remote".to_string());
    }
}

/// Rule 7: required experience, e.g. "5+ years of hands-on experience".
pub(crate) fn experience(input: &RuleInput, out: &mut ParsedJobPosting) {
    if let Some(caps) = EXPERIENCE_RE.captures(input.text) {
        out.experience_required_years = caps[1].parse::<u32>().ok();
    }
}

/// Rule 8: dictionary skills, in dictionary order.
pub(crate) fn skills(input: &RuleInput, out: &mut ParsedJobPosting) {
    out.skills = match_skills(input.text);
}

/// Rule 9: description = the whole input, trimmed at the ends only. Always set.
pub(crate) fn description(input: &RuleInput, out: &mut ParsedJobPosting) {
    out.description = Some(input.text.trim().to_string());
}

//! Per-row outreach gating.
//!
//! The quick poke is the cheap first touch; the mail template is the committed
//! follow-up. A 24-hour cooldown after a poke keeps the order honest. Vendors
//! are exempt from both percentage thresholds (they may contact any visible
//! candidate) but not from the cooldown, and an emailed contact is terminal —
//! nothing re-enables either action for that row.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::poke::PokeRecord;

/// Minimum match percentage for the quick poke (non-vendors).
pub const POKE_MIN_MATCH: u8 = 25;
/// Minimum match percentage for the mail template (non-vendors).
pub const MAIL_MIN_MATCH: u8 = 75;
/// Hours that must elapse after a poke before the mail template unlocks.
pub const MAIL_COOLDOWN_HOURS: i64 = 24;

/// Prior outreach toward one row's target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutreachHistory {
    pub poked: bool,
    pub emailed: bool,
    pub last_poke_at: Option<DateTime<Utc>>,
}

impl OutreachHistory {
    /// Collapses the sent-poke history onto a single target. When both the row
    /// and a record carry a job id, they must agree; records without a job id
    /// count against every job.
    pub fn for_target(
        records: &[PokeRecord],
        target_email: &str,
        job_id: Option<Uuid>,
    ) -> OutreachHistory {
        let mut history = OutreachHistory::default();
        for record in records {
            if !record.target_email.eq_ignore_ascii_case(target_email) {
                continue;
            }
            if let (Some(row_job), Some(record_job)) = (job_id, record.job_id) {
                if row_job != record_job {
                    continue;
                }
            }
            if record.is_email {
                history.emailed = true;
            } else {
                history.poked = true;
                history.last_poke_at = match history.last_poke_at {
                    Some(prev) if prev >= record.created_at => Some(prev),
                    _ => Some(record.created_at),
                };
            }
        }
        history
    }
}

/// Which outreach actions a row currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ActionGate {
    pub can_poke: bool,
    pub can_mail: bool,
}

/// Evaluates the gate for one row at `now`.
pub fn evaluate(
    match_percentage: u8,
    is_vendor: bool,
    history: &OutreachHistory,
    now: DateTime<Utc>,
) -> ActionGate {
    ActionGate {
        can_poke: poke_denial_reason(match_percentage, is_vendor, history).is_none(),
        can_mail: mail_denial_reason(match_percentage, is_vendor, history, now).is_none(),
    }
}

/// Why the quick poke is unavailable, or `None` when it is allowed. The first
/// failing rule wins, so the message names the actual blocker.
pub fn poke_denial_reason(
    match_percentage: u8,
    is_vendor: bool,
    history: &OutreachHistory,
) -> Option<&'static str> {
    if history.emailed {
        return Some("this contact has already received an email");
    }
    if history.poked {
        return Some("this contact has already been poked");
    }
    if !is_vendor && match_percentage < POKE_MIN_MATCH {
        return Some("match percentage is below the poke threshold");
    }
    None
}

/// Why the mail template is unavailable, or `None` when it is allowed.
pub fn mail_denial_reason(
    match_percentage: u8,
    is_vendor: bool,
    history: &OutreachHistory,
    now: DateTime<Utc>,
) -> Option<&'static str> {
    if history.emailed {
        return Some("this contact has already received an email");
    }
    if !is_vendor && match_percentage < MAIL_MIN_MATCH {
        return Some("match percentage is below the email threshold");
    }
    if let Some(poked_at) = history.last_poke_at {
        if now - poked_at < Duration::hours(MAIL_COOLDOWN_HOURS) {
            return Some("a poke went out less than 24 hours ago");
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poke_record(target: &str, is_email: bool, created_at: DateTime<Utc>) -> PokeRecord {
        PokeRecord {
            id: Uuid::new_v4(),
            sender_name: "Me".to_string(),
            sender_email: "me@example.com".to_string(),
            target_name: "Target".to_string(),
            target_email: target.to_string(),
            is_email,
            created_at,
            job_id: None,
            job_title: None,
        }
    }

    fn now() -> DateTime<Utc> {
        "2026-08-06T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_low_match_candidate_gets_nothing() {
        let gate = evaluate(20, false, &OutreachHistory::default(), now());
        assert!(!gate.can_poke);
        assert!(!gate.can_mail);
    }

    #[test]
    fn test_mid_match_candidate_can_only_poke() {
        let gate = evaluate(50, false, &OutreachHistory::default(), now());
        assert!(gate.can_poke);
        assert!(!gate.can_mail);
    }

    #[test]
    fn test_high_match_candidate_gets_both_before_any_contact() {
        let gate = evaluate(80, false, &OutreachHistory::default(), now());
        assert!(gate.can_poke);
        assert!(gate.can_mail);
    }

    #[test]
    fn test_recent_poke_blocks_mail_and_repoke() {
        let history = OutreachHistory {
            poked: true,
            emailed: false,
            last_poke_at: Some(now() - Duration::hours(1)),
        };
        let gate = evaluate(80, false, &history, now());
        assert!(!gate.can_poke, "already poked");
        assert!(!gate.can_mail, "cooldown still running");
    }

    #[test]
    fn test_cooldown_expiry_unlocks_mail() {
        let history = OutreachHistory {
            poked: true,
            emailed: false,
            last_poke_at: Some(now() - Duration::hours(24)),
        };
        let gate = evaluate(80, false, &history, now());
        assert!(!gate.can_poke);
        assert!(gate.can_mail, "exactly 24h satisfies the cooldown");
    }

    #[test]
    fn test_emailed_row_is_terminal() {
        let history = OutreachHistory {
            poked: false,
            emailed: true,
            last_poke_at: None,
        };
        let gate = evaluate(100, true, &history, now());
        assert!(!gate.can_poke);
        assert!(!gate.can_mail);
    }

    #[test]
    fn test_vendor_skips_percentage_thresholds_not_cooldown() {
        let gate = evaluate(5, true, &OutreachHistory::default(), now());
        assert!(gate.can_poke);
        assert!(gate.can_mail);

        let history = OutreachHistory {
            poked: true,
            emailed: false,
            last_poke_at: Some(now() - Duration::hours(2)),
        };
        let gate = evaluate(5, true, &history, now());
        assert!(!gate.can_poke);
        assert!(!gate.can_mail, "cooldown applies to vendors too");
    }

    #[test]
    fn test_history_collapses_latest_poke_and_matches_case_insensitively() {
        let records = vec![
            poke_record("Dana@acme.example", false, now() - Duration::hours(30)),
            poke_record("dana@acme.example", false, now() - Duration::hours(3)),
            poke_record("other@acme.example", true, now() - Duration::hours(1)),
        ];
        let history = OutreachHistory::for_target(&records, "dana@acme.example", None);
        assert!(history.poked);
        assert!(!history.emailed);
        assert_eq!(history.last_poke_at, Some(now() - Duration::hours(3)));
    }

    #[test]
    fn test_history_scoped_by_job_id_when_both_present() {
        let job_a = Uuid::new_v4();
        let job_b = Uuid::new_v4();
        let mut record = poke_record("dana@acme.example", false, now() - Duration::hours(1));
        record.job_id = Some(job_a);

        let history = OutreachHistory::for_target(&[record.clone()], "dana@acme.example", Some(job_b));
        assert!(!history.poked);

        let history = OutreachHistory::for_target(&[record], "dana@acme.example", Some(job_a));
        assert!(history.poked);
    }
}

//! Outreach — the quick poke and the composed mail template.
//!
//! Gating is enforced here again on every send, not just reflected in the
//! table view: a stale dashboard can never push a blocked action through.

pub mod handlers;

/// A composed, still-editable mail.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MailTemplate {
    pub subject: String,
    pub body: String,
}

/// Builds the default mail for a match. The caller may edit both fields before
/// sending.
pub fn compose_mail(
    target_name: &str,
    subject_context: &str,
    match_percentage: u8,
    sender_name: &str,
) -> MailTemplate {
    let subject = if subject_context.trim().is_empty() {
        format!("{sender_name} would like to connect")
    } else {
        format!("Regarding {}", subject_context.trim())
    };

    let greeting = if target_name.trim().is_empty() {
        "there".to_string()
    } else {
        target_name.trim().to_string()
    };

    let body = format!(
        "Hi {greeting},\n\n\
         You came up as a {match_percentage}% match{context}. I'd love to talk about \
         whether this could be a fit — my resume is attached.\n\n\
         Best regards,\n{sender_name}",
        context = if subject_context.trim().is_empty() {
            String::new()
        } else {
            format!(" for {}", subject_context.trim())
        }
    );

    MailTemplate { subject, body }
}

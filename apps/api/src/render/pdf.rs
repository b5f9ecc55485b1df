//! Default attachment renderer: lays out the candidate profile with the static
//! font metrics and writes a single-page PDF by hand.
//!
//! The document is intentionally minimal — one page, one built-in Helvetica
//! font, fixed margins. Anything fancier belongs behind the
//! [`AttachmentRenderer`](super::AttachmentRenderer) seam in a real rendering
//! backend.

use async_trait::async_trait;
use bytes::Bytes;

use crate::models::profile::CandidateProfile;
use crate::render::font_metrics::BODY_FONT;
use crate::render::{AttachmentRenderer, RenderError};

// US letter, 1" margins.
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 10.0;
const LEADING: f32 = 14.0;

/// Pure-Rust renderer used when no external rendering backend is configured.
pub struct TextPdfRenderer;

#[async_trait]
impl AttachmentRenderer for TextPdfRenderer {
    /// Layout and byte assembly are CPU-bound, so the real work runs inside
    /// `spawn_blocking` to keep the scheduler unblocked.
    async fn render_profile(&self, profile: &CandidateProfile) -> Result<Bytes, RenderError> {
        let profile = profile.clone();
        tokio::task::spawn_blocking(move || render_sync(&profile))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

fn render_sync(profile: &CandidateProfile) -> Result<Bytes, RenderError> {
    if profile.full_name.trim().is_empty() {
        return Err(RenderError::EmptyProfile);
    }
    let body = compose_body_lines(profile);
    Ok(write_pdf(profile.full_name.trim(), &body))
}

/// Flattens the profile into wrapped body lines. Empty strings become blank
/// separator lines.
fn compose_body_lines(profile: &CandidateProfile) -> Vec<String> {
    let max_width_em = (PAGE_WIDTH - 2.0 * MARGIN) / BODY_SIZE;
    let mut lines = Vec::new();

    if let Some(headline) = profile.headline.as_deref().filter(|h| !h.trim().is_empty()) {
        lines.push(headline.trim().to_string());
    }

    let mut contact: Vec<&str> = vec![profile.email.as_str()];
    if let Some(phone) = profile.phone.as_deref() {
        contact.push(phone);
    }
    if let Some(location) = profile.location.as_deref() {
        contact.push(location);
    }
    lines.push(contact.join(" | "));
    lines.push(String::new());

    if let Some(years) = profile.experience_years {
        lines.push(format!("Experience: {years} years"));
    }
    if let Some(rate) = profile.expected_pay_per_hour {
        lines.push(format!("Expected rate: ${rate:.2}/hr"));
    }
    if let Some(mode) = profile.preferred_work_mode {
        lines.push(format!("Preferred work mode: {}", mode.label()));
    }

    if !profile.skills.is_empty() {
        lines.push(String::new());
        let skills = format!("Skills: {}", profile.skills.join(", "));
        lines.extend(BODY_FONT.wrap(&skills, max_width_em));
    }

    if let Some(summary) = profile.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(String::new());
        lines.extend(BODY_FONT.wrap(summary.trim(), max_width_em));
    }

    // Single page: clip whatever the page cannot hold.
    let title_block = TITLE_SIZE + LEADING;
    let max_lines = ((PAGE_HEIGHT - 2.0 * MARGIN - title_block) / LEADING) as usize;
    lines.truncate(max_lines);
    lines
}

/// Escapes a string for a PDF literal, mapping non-ASCII to '?'.
fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Assembles the document: catalog, page tree, one page, Helvetica, and a
/// content stream with the title plus leading-advanced body lines.
fn write_pdf(title: &str, body_lines: &[String]) -> Bytes {
    let mut content = String::new();
    let title_y = PAGE_HEIGHT - MARGIN;
    content.push_str(&format!(
        "BT /F1 {TITLE_SIZE} Tf {MARGIN} {title_y} Td ({}) Tj ET\n",
        escape_pdf_text(title)
    ));

    let body_start_y = title_y - TITLE_SIZE - LEADING;
    content.push_str(&format!(
        "BT /F1 {BODY_SIZE} Tf {LEADING} TL {MARGIN} {body_start_y} Td\n"
    ));
    for (i, line) in body_lines.iter().enumerate() {
        if i > 0 {
            content.push_str("T*\n");
        }
        content.push_str(&format!("({}) Tj\n", escape_pdf_text(line)));
    }
    content.push_str("ET\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
    ];

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, object));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));

    Bytes::from(out.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::WorkMode;
    use uuid::Uuid;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            headline: Some("Backend Engineer".to_string()),
            location: Some("Austin, TX".to_string()),
            preferred_work_mode: Some(WorkMode::Remote),
            desired_job_types: vec![],
            expected_pay_per_hour: Some(95.0),
            experience_years: Some(7),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            summary: Some("Ships reliable systems (and documentation).".to_string()),
            membership: None,
        }
    }

    #[test]
    fn test_render_produces_pdf_framing() {
        let bytes = render_sync(&profile()).unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/BaseFont /Helvetica"));
    }

    #[test]
    fn test_render_contains_escaped_profile_text() {
        let bytes = render_sync(&profile()).unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("(Ada Lovelace) Tj"));
        // Parentheses in the summary are escaped in the literal.
        assert!(text.contains(r"\(and documentation\)"));
    }

    #[test]
    fn test_render_rejects_nameless_profile() {
        let mut p = profile();
        p.full_name = "  ".to_string();
        assert!(matches!(render_sync(&p), Err(RenderError::EmptyProfile)));
    }

    #[test]
    fn test_compose_lines_include_contact_and_skills() {
        let lines = compose_body_lines(&profile());
        assert!(lines
            .iter()
            .any(|l| l.contains("ada@example.com") && l.contains("Austin, TX")));
        assert!(lines.iter().any(|l| l.starts_with("Skills: Rust")));
    }

    #[test]
    fn test_escape_pdf_text_handles_specials_and_non_ascii() {
        assert_eq!(escape_pdf_text(r"a(b)c\d"), r"a\(b\)c\\d");
        assert_eq!(escape_pdf_text("naïve"), "na?ve");
    }
}

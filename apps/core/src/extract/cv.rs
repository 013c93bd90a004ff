//! CV/resume extraction: section-bounded captures plus a contact block.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Pair;

static EDUCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EDUCATION").expect("Invalid regex: education marker"));

static WORK_EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)WORK\s+EXPERIENCE").expect("Invalid regex: work experience marker")
});

static RESEARCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)RESEARCH").expect("Invalid regex: research marker"));

static RESEARCH_EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)RESEARCH\s+EXPERIENCE").expect("Invalid regex: research experience marker")
});

static SKILLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SKILLS").expect("Invalid regex: skills marker"));

static NAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][A-Z\s]+)\n").expect("Invalid regex: name line"));

static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+")
        .expect("Invalid regex: email address")
});

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d{10,15}").expect("Invalid regex: phone number"));

/// Capture the text between a section marker and the nearest of the given
/// end markers (or end of text). Returns `None` when the marker is absent
/// or the section body is blank.
fn section_after<'a>(text: &'a str, start: &Regex, ends: &[&Regex]) -> Option<&'a str> {
    let m = start.find(text)?;
    let rest = &text[m.end()..];
    let mut cut = rest.len();
    for end in ends {
        if let Some(em) = end.find(rest) {
            cut = cut.min(em.start());
        }
    }
    let section = rest[..cut].trim();
    if section.is_empty() {
        None
    } else {
        Some(section)
    }
}

/// Extract candidates from a resume. Missing sections are skipped.
pub fn extract(text: &str) -> Vec<Pair> {
    let mut pairs = Vec::new();

    if let Some(education) = section_after(text, &EDUCATION, &[&*WORK_EXPERIENCE, &*RESEARCH]) {
        pairs.push(Pair::tagged(
            "What is the candidate's educational background?",
            education,
            &["cv", "education"],
        ));
    }

    if let Some(work) = section_after(text, &WORK_EXPERIENCE, &[&*RESEARCH, &*EDUCATION, &*SKILLS]) {
        pairs.push(Pair::tagged(
            "What is the candidate's work experience?",
            work,
            &["cv", "experience"],
        ));
    }

    if let Some(research) = section_after(text, &RESEARCH_EXPERIENCE, &[&*SKILLS]) {
        pairs.push(Pair::tagged(
            "What research experience does the candidate have?",
            research,
            &["cv", "research"],
        ));
    }

    if let Some(skills) = section_after(text, &SKILLS, &[&*EDUCATION, &*WORK_EXPERIENCE, &*RESEARCH]) {
        pairs.push(Pair::tagged(
            "What skills does the candidate have?",
            skills,
            &["cv", "skills"],
        ));
    }

    if let Some(contact) = contact_block(text) {
        pairs.push(Pair::tagged(
            "What are the candidate's contact details?",
            contact,
            &["cv", "contact"],
        ));
    }

    pairs
}

/// Assemble a contact block from the leading all-caps name line plus any
/// email address and phone number found in the text. The name line is the
/// anchor; without it no contact pair is produced.
fn contact_block(text: &str) -> Option<String> {
    let name = NAME_LINE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())?;

    let mut contact = format!("Name: {name}");
    if let Some(email) = EMAIL_ADDRESS.find(text) {
        contact.push_str(&format!("\nEmail: {}", email.as_str()));
    }
    if let Some(phone) = PHONE_NUMBER.find(text) {
        contact.push_str(&format!("\nPhone: {}", phone.as_str()));
    }
    Some(contact)
}

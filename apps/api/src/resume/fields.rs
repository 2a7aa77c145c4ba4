//! Heuristic field extraction: name, email, phone, skills.
//!
//! Each extractor is a pure function over canonical text and returns `None`
//! when it finds nothing. They are independent of one another, except that
//! the detected email is offered to the name extractor as a fallback hint.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::models::ParsedFields;
use crate::resume::skills::{capitalize, extract_skills};

static RE_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[\w.-]+@[\w.-]+\.\w+").unwrap());
static RE_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\+?\d{1,3}[\s-]?)?\d{10}").unwrap());
static RE_PHONE_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d+]").unwrap());
static RE_NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z.'\-\s]*[A-Za-z]$").unwrap());
static RE_LOCAL_PART_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[._\-]+").unwrap());

/// The name is expected near the top of the document.
const NAME_SCAN_LINES: usize = 30;
const NAME_MAX_CHARS: usize = 60;

const LINK_MARKERS: &[&str] = &["@", "linkedin", "github", "www."];

const LABEL_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "cv",
    "contact",
    "email",
    "phone",
    "mobile",
    "address",
    "skills",
    "experience",
    "education",
    "summary",
    "objective",
    "projects",
    "certifications",
];

/// Runs every extractor over `text`.
pub fn parse_fields(filename: &str, text: &str) -> ParsedFields {
    let email = extract_email(text);
    let name = extract_name(text, email.as_deref());
    let phone = extract_phone(text);
    let skills = extract_skills(text);

    tracing::debug!(
        filename,
        has_name = name.is_some(),
        has_email = email.is_some(),
        has_phone = phone.is_some(),
        skill_count = skills.as_ref().map_or(0, Vec::len),
        "Parsed resume fields"
    );

    ParsedFields {
        filename: filename.to_string(),
        name,
        email,
        phone,
        skills,
    }
}

/// First email-looking token in reading order.
pub fn extract_email(text: &str) -> Option<String> {
    RE_EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First ten-digit number with an optional country code, reduced to digits and `+`.
pub fn extract_phone(text: &str) -> Option<String> {
    let matched = RE_PHONE.find(text)?;
    Some(RE_PHONE_STRIP.replace_all(matched.as_str(), "").into_owned())
}

/// Guesses the candidate's name from the first lines of the document,
/// falling back to the local part of `email_hint`.
pub fn extract_name(text: &str, email_hint: Option<&str>) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| !is_skippable_line(line) && looks_like_name(line))
        .map(str::to_string)
        .or_else(|| email_hint.and_then(name_from_email))
}

fn is_skippable_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    LINK_MARKERS.iter().any(|m| lower.contains(m))
        || LABEL_WORDS.iter().any(|w| lower.contains(w))
        || line.chars().count() > NAME_MAX_CHARS
}

fn looks_like_name(line: &str) -> bool {
    if !RE_NAME_LINE.is_match(line) || line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let words = line
        .split_whitespace()
        .filter(|word| word.chars().filter(char::is_ascii_alphabetic).count() >= 2)
        .count();
    words >= 2
}

/// "jane.doe@x.com" -> "Jane Doe". Needs at least two purely alphabetic segments.
fn name_from_email(email: &str) -> Option<String> {
    let (local, _) = email.split_once('@')?;
    let parts: Vec<&str> = RE_LOCAL_PART_SEPARATORS
        .split(local)
        .filter(|part| !part.is_empty() && part.chars().all(char::is_alphabetic))
        .collect();

    if parts.len() < 2 {
        return None;
    }

    Some(
        parts
            .iter()
            .take(3)
            .map(|part| capitalize(part))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

//! Canonicalizes extracted text before field parsing.
//!
//! The output never contains `\r`, tabs, runs of spaces, lines with
//! leading/trailing whitespace, or more than one consecutive blank line.
//! `normalize(normalize(x)) == normalize(x)` for every input.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_TABS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").unwrap());
static RE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());
static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalizes a raw byte buffer, dropping byte sequences that are not valid UTF-8.
#[allow(dead_code)]
pub fn normalize_bytes(raw: &[u8]) -> String {
    normalize(&decode_dropping_invalid(raw))
}

/// Normalizes already-decoded text into canonical form.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = RE_TABS.replace_all(&text, " ");
    let text = text
        .split('\n')
        .map(|line| RE_SPACES.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let text = RE_BLANK_LINES.replace_all(&text, "\n\n");

    text.trim().to_string()
}

/// Decodes UTF-8, skipping invalid sequences instead of substituting U+FFFD.
fn decode_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(len) => bytes = &rest[len..],
                    // Truncated sequence at the end of input.
                    None => return out,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "\n\n\n",
        "John   Smith\r\nEmail:\tjohn@x.com\r\r\r\rPhone",
        "\t\tleading tabs\t and\t\ttrailing  \t",
        "a\n\n\n\n\nb\n \n \n \nc",
        "  Jane\u{00a0}Doe  \n\n",
        "line one\rline two\r\nline three\n",
        "multi \t \t mixed \t whitespace",
    ];

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize_bytes(b""), "");
    }

    #[test]
    fn test_line_endings_become_lf() {
        assert_eq!(normalize("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_tabs_and_space_runs_collapse() {
        assert_eq!(normalize("Skills:\t\tPython,   Rust"), "Skills: Python, Rust");
        assert_eq!(normalize("a \t b"), "a b");
    }

    #[test]
    fn test_lines_are_trimmed() {
        assert_eq!(normalize("  John Smith  \n   Engineer "), "John Smith\nEngineer");
    }

    #[test]
    fn test_blank_line_runs_collapse_to_one() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n  \n\t\n \nb"), "a\n\nb");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_whole_result_is_trimmed() {
        assert_eq!(normalize("\n\n  hello \n\n\n"), "hello");
    }

    #[test]
    fn test_invalid_utf8_is_dropped_not_replaced() {
        let raw = b"Jo\xffhn \xc3\x28Smith\xe2\x82";
        let out = normalize_bytes(raw);
        assert_eq!(out, "John (Smith");
        assert!(!out.contains('\u{fffd}'));
    }

    #[test]
    fn test_valid_multibyte_survives() {
        assert_eq!(normalize_bytes("José Müller".as_bytes()), "José Müller");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for sample in SAMPLES {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_canonical_form_invariants() {
        for sample in SAMPLES {
            let out = normalize(sample);
            assert!(!out.contains('\r'));
            assert!(!out.contains('\t'));
            assert!(!out.contains("\n\n\n"));
            for line in out.split('\n') {
                assert_eq!(line, line.trim(), "untrimmed line in {out:?}");
                assert!(!line.contains("  "));
            }
        }
    }
}

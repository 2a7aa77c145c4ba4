//! Skill detection against a fixed technology vocabulary.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

/// Every term the parser looks for, lowercase.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "sql",
    "c++",
    "c#",
    "go",
    "golang",
    "ruby",
    "php",
    "react",
    "angular",
    "vue",
    "node",
    "node.js",
    "django",
    "flask",
    "spring",
    "fastapi",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "pandas",
    "numpy",
    "scikit-learn",
    "pytorch",
    "tensorflow",
];

/// Terms whose display form is their literal spelling title-cased.
const SYMBOL_TERMS: &[&str] = &["c++", "c#"];

/// Display-form overrides, keyed by lowercase display form.
static DISPLAY_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("node", "Node.js"),
        ("node.js", "Node.js"),
        ("aws", "AWS"),
        ("gcp", "GCP"),
        ("sql", "SQL"),
    ])
});

/// Returns the vocabulary skills mentioned in `text`, display-cased,
/// unique, and sorted case-insensitively. `None` when nothing matched.
pub fn extract_skills(text: &str) -> Option<Vec<String>> {
    let lower = text.to_lowercase();

    let mut found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|term| contains_bounded(&lower, term))
        .map(|term| display_name(term))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if found.is_empty() {
        return None;
    }

    found.sort_by_key(|skill| skill.to_lowercase());
    Some(found)
}

/// True when `term` occurs in `haystack` with no ASCII letter or digit
/// directly before or after it.
fn contains_bounded(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        before_ok && after_ok
    })
}

fn display_name(term: &str) -> String {
    let cased = if SYMBOL_TERMS.contains(&term) {
        term.to_uppercase()
    } else {
        capitalize(term)
    };

    match DISPLAY_OVERRIDES.get(cased.to_lowercase().as_str()) {
        Some(display) => (*display).to_string(),
        None => cased,
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_not_matched_inside_javascript() {
        let skills = extract_skills("javascript developer").unwrap();
        assert_eq!(skills, vec!["Javascript"]);
    }

    #[test]
    fn test_cpp_matches_as_literal() {
        let skills = extract_skills("I use C++ daily").unwrap();
        assert_eq!(skills, vec!["C++"]);
    }

    #[test]
    fn test_csharp_display_form() {
        let skills = extract_skills("Backend in C#, frontend in Vue").unwrap();
        assert_eq!(skills, vec!["C#", "Vue"]);
    }

    #[test]
    fn test_lookup_table_rewrites_display_forms() {
        let skills = extract_skills("aws, gcp and sql").unwrap();
        assert_eq!(skills, vec!["AWS", "GCP", "SQL"]);
    }

    #[test]
    fn test_node_variants_collapse_to_one_entry() {
        let skills = extract_skills("Built APIs with Node.js and plain node").unwrap();
        assert_eq!(skills, vec!["Node.js"]);
        let skills = extract_skills("node.js").unwrap();
        assert_eq!(skills, vec!["Node.js"]);
    }

    #[test]
    fn test_boundaries_reject_alphanumeric_neighbours() {
        assert!(extract_skills("going gopher cargo").is_none());
        assert!(extract_skills("python3 mysql8").is_none());
        assert_eq!(extract_skills("(go)").unwrap(), vec!["Go"]);
    }

    #[test]
    fn test_later_occurrence_can_satisfy_boundary() {
        let skills = extract_skills("javascript, then java").unwrap();
        assert_eq!(skills, vec!["Java", "Javascript"]);
    }

    #[test]
    fn test_no_skills_is_none() {
        assert!(extract_skills("").is_none());
        assert!(extract_skills("Accountant with ten years of experience").is_none());
    }

    #[test]
    fn test_hyphenated_terms_capitalize_first_letter_only() {
        let skills = extract_skills("scikit-learn, pandas, numpy").unwrap();
        assert_eq!(skills, vec!["Numpy", "Pandas", "Scikit-learn"]);
    }

    #[test]
    fn test_output_sorted_and_unique() {
        let text = "Python python PYTHON React react Docker AWS aws Go golang c++ C# \
                    node node.js kubernetes terraform redis tensorflow pytorch";
        let skills = extract_skills(text).unwrap();

        let mut sorted = skills.clone();
        sorted.sort_by_key(|s| s.to_lowercase());
        assert_eq!(skills, sorted);

        let unique: BTreeSet<_> = skills.iter().map(|s| s.to_lowercase()).collect();
        assert_eq!(unique.len(), skills.len());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("jOHN"), "John");
        assert_eq!(capitalize(""), "");
    }
}

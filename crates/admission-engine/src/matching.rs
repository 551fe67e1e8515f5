//! Case-insensitive text matching shared by the eligibility gate and the predictor.

/// True when either value contains the other, ignoring case and surrounding whitespace.
///
/// Blank values never match, so a missing region cannot satisfy a region rule.
pub fn contains_either_way(left: &str, right: &str) -> bool {
    let left = fold(left);
    let right = fold(right);
    if left.is_empty() || right.is_empty() {
        return false;
    }

    left.contains(&right) || right.contains(&left)
}

/// Optional-aware variant of [`contains_either_way`].
pub fn option_contains_either_way(value: Option<&str>, other: &str) -> bool {
    value.is_some_and(|value| contains_either_way(value, other))
}

/// Trimmed, case-insensitive equality. Blank values never match.
pub fn equals_ignore_case(left: &str, right: &str) -> bool {
    let left = fold(left);
    !left.is_empty() && left == fold(right)
}

/// True when the words of `term` start consecutive words of `haystack`, ignoring case.
///
/// Words are alphanumeric runs, so `"NIT"` matches `"NIT Warangal"` and the campus code `"NITW"`
/// but not `"Community College"`, and `"IIT"` does not match `"IIIT"`.
pub fn contains_word_prefix(haystack: &str, term: &str) -> bool {
    let needle = words(term);
    if needle.is_empty() {
        return false;
    }

    let words = words(haystack);
    words.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(word, prefix)| word.starts_with(prefix.as_str()))
    })
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

fn words(value: &str) -> Vec<String> {
    value
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

use crate::domain::Category;
use crate::matching::{contains_either_way, equals_ignore_case};

/// Open-merit labels every student may additionally be evaluated against.
pub const MERIT_CATEGORIES: [&str; 2] = ["General", "OPEN"];

/// Ordered cutoff categories a student may be evaluated against: their own, then open merit.
pub fn eligible_categories(declared: &Category) -> Vec<String> {
    let mut categories = vec![declared.label().to_string()];
    for merit in MERIT_CATEGORIES {
        if !categories
            .iter()
            .any(|existing| equals_ignore_case(existing, merit))
        {
            categories.push(merit.to_string());
        }
    }
    categories
}

/// First eligible category matching a record's published category, exactly or by substring.
pub fn matched_category<'a>(eligible: &'a [String], record_category: &str) -> Option<&'a str> {
    eligible
        .iter()
        .find(|category| {
            equals_ignore_case(category, record_category)
                || contains_either_way(category, record_category)
        })
        .map(String::as_str)
}

pub fn is_merit_category(category: &str) -> bool {
    MERIT_CATEGORIES
        .iter()
        .any(|merit| equals_ignore_case(merit, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_category_falls_back_to_open_merit() {
        assert_eq!(
            eligible_categories(&Category::Sc),
            vec!["SC".to_string(), "General".to_string(), "OPEN".to_string()]
        );
    }

    #[test]
    fn general_category_is_not_duplicated() {
        assert_eq!(
            eligible_categories(&Category::General),
            vec!["General".to_string(), "OPEN".to_string()]
        );
    }

    #[test]
    fn unknown_category_is_kept_alongside_merit() {
        let eligible = eligible_categories(&Category::Other("BC-B".to_string()));
        assert_eq!(eligible[0], "BC-B");
        assert_eq!(matched_category(&eligible, "bc-b"), Some("BC-B"));
        assert_eq!(matched_category(&eligible, "OPEN"), Some("OPEN"));
    }

    #[test]
    fn matching_prefers_declared_category_and_allows_substrings() {
        let eligible = eligible_categories(&Category::Obc);
        assert_eq!(matched_category(&eligible, "OBC-NCL"), Some("OBC"));
        assert_eq!(matched_category(&eligible, "general"), Some("General"));
        assert_eq!(matched_category(&eligible, "ST"), None);
    }

    #[test]
    fn merit_categories_are_recognized_case_insensitively() {
        assert!(is_merit_category("open"));
        assert!(is_merit_category("GENERAL"));
        assert!(!is_merit_category("SC"));
    }
}

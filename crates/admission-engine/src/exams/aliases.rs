use super::ExamId;

const TELANGANA_HINTS: &[&str] = &["TS", "TG", "TELANGANA"];
const ANDHRA_HINTS: &[&str] = &["AP", "ANDHRA"];

/// Heuristic resolution for exam names that miss every canonical spelling.
pub(super) fn resolve(exam_name: &str) -> Option<ExamId> {
    let compact: String = exam_name
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_uppercase())
        .collect();
    if compact.is_empty() {
        return None;
    }

    let tokens: Vec<String> = exam_name
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_uppercase)
        .collect();
    let has_hint = |hints: &[&str]| {
        hints.iter().any(|hint| {
            compact.starts_with(hint)
                || tokens.iter().any(|token| token == hint)
                || (hint.len() > 2 && compact.contains(hint))
        })
    };

    if compact.contains("EAMCET") || compact.contains("EAPCET") {
        return Some(if has_hint(TELANGANA_HINTS) {
            ExamId::TsEamcet
        } else if has_hint(ANDHRA_HINTS) {
            ExamId::ApEamcet
        } else {
            ExamId::Eamcet
        });
    }

    if compact.contains("WBJEE") {
        return Some(ExamId::Wbjee);
    }
    if compact.contains("JEEADV") {
        return Some(ExamId::JeeAdvanced);
    }
    if compact == "JEE" || compact.contains("JEEMAIN") || compact == "AIEEE" {
        return Some(ExamId::JeeMain);
    }
    if compact.contains("NEET") {
        return Some(ExamId::NeetUg);
    }
    if compact.contains("KCET") || compact.contains("KARNATAKACET") {
        return Some(ExamId::Kcet);
    }
    if compact.contains("MHTCET") || compact.contains("MAHACET") {
        return Some(ExamId::MhtCet);
    }

    None
}

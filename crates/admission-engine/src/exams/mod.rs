//! Static registry of entrance exams and the institutions they may be matched against.

mod aliases;
mod rules;

use serde::{Deserialize, Serialize};

/// Closed set of exams the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamId {
    JeeMain,
    JeeAdvanced,
    NeetUg,
    TsEamcet,
    ApEamcet,
    Eamcet,
    Kcet,
    MhtCet,
    Wbjee,
}

impl ExamId {
    pub const ALL: [ExamId; 9] = [
        ExamId::JeeMain,
        ExamId::JeeAdvanced,
        ExamId::NeetUg,
        ExamId::TsEamcet,
        ExamId::ApEamcet,
        ExamId::Eamcet,
        ExamId::Kcet,
        ExamId::MhtCet,
        ExamId::Wbjee,
    ];

    pub fn rule(self) -> &'static ExamRule {
        rules::rule_for(self)
    }

    pub fn name(self) -> &'static str {
        self.rule().name
    }
}

impl std::fmt::Display for ExamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamLevel {
    National,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamDomain {
    Engineering,
    Medical,
}

/// Matching constraints for one exam.
///
/// Only the disallowed lists gate institutions, so an institution matching both lists is
/// rejected. `allowed_types` describes where the exam's ranks are normally used.
#[derive(Debug, PartialEq)]
pub struct ExamRule {
    pub id: ExamId,
    pub name: &'static str,
    pub level: ExamLevel,
    pub domain: ExamDomain,
    pub counselling_body: &'static str,
    pub allowed_types: &'static [&'static str],
    pub disallowed_types: &'static [&'static str],
    pub disallowed_keywords: &'static [&'static str],
    /// `None` means the exam is accepted in every region.
    pub allowed_regions: Option<&'static [&'static str]>,
    pub rationale: &'static str,
    pub notes: &'static str,
}

impl ExamRule {
    /// Resolve an exam name to its rule, see [`lookup`].
    pub fn lookup(exam_name: &str) -> Option<&'static ExamRule> {
        lookup(exam_name).map(ExamId::rule)
    }

    pub fn info(&self) -> ExamInfo {
        ExamInfo {
            exam: self.id,
            name: self.name.to_string(),
            level: self.level,
            domain: self.domain,
            counselling_body: self.counselling_body.to_string(),
            allowed_types: to_strings(self.allowed_types),
            disallowed_types: to_strings(self.disallowed_types),
            allowed_regions: self.allowed_regions.map(to_strings),
            notes: self.notes.to_string(),
        }
    }
}

/// Display metadata for an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamInfo {
    pub exam: ExamId,
    pub name: String,
    pub level: ExamLevel,
    pub domain: ExamDomain,
    pub counselling_body: String,
    pub allowed_types: Vec<String>,
    pub disallowed_types: Vec<String>,
    pub allowed_regions: Option<Vec<String>>,
    pub notes: String,
}

/// Resolve an exam name: exact canonical name, then case-insensitive name, then alias heuristics.
///
/// Returns `None` for wholly unrecognized exams; callers must treat that as a hard rejection.
pub fn lookup(exam_name: &str) -> Option<ExamId> {
    if let Some(id) = ExamId::ALL.iter().copied().find(|id| id.name() == exam_name) {
        return Some(id);
    }

    let trimmed = exam_name.trim();
    if let Some(id) = ExamId::ALL
        .iter()
        .copied()
        .find(|id| id.name().eq_ignore_ascii_case(trimmed))
    {
        return Some(id);
    }

    aliases::resolve(trimmed)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Canonical names of every supported exam, in registry order.
pub fn supported_exams() -> Vec<String> {
    ExamId::ALL.iter().map(|id| id.name().to_string()).collect()
}

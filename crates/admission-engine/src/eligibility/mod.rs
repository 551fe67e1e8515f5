//! Hard gate deciding whether an exam may be matched against an institution at all.

mod decision;

pub use decision::{EligibilityDecision, RejectionReason};

use crate::domain::Institution;
use crate::exams::{self, ExamInfo, ExamRule};
use crate::matching::{contains_word_prefix, option_contains_either_way};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Evaluate one institution against one exam rule.
///
/// Checks run in a fixed order and the first failure wins: disallowed name keywords, then
/// disallowed institution types, then the region restriction. Keyword checks must precede the
/// region check so a national institute sitting inside a state exam's region is still rejected.
pub fn evaluate_eligibility(institution: &Institution, rule: &ExamRule) -> EligibilityDecision {
    if let Some(keyword) = rule
        .disallowed_keywords
        .iter()
        .find(|keyword| contains_word_prefix(&institution.name, keyword))
    {
        return EligibilityDecision::Ineligible(RejectionReason::DisallowedKeyword {
            exam: rule.name.to_string(),
            keyword: keyword.to_string(),
            rationale: rule.rationale.to_string(),
        });
    }

    if let Some(institution_type) = rule.disallowed_types.iter().find(|institution_type| {
        institution
            .kind
            .as_deref()
            .is_some_and(|kind| contains_word_prefix(kind, institution_type))
            || contains_word_prefix(&institution.name, institution_type)
    }) {
        return EligibilityDecision::Ineligible(RejectionReason::DisallowedType {
            exam: rule.name.to_string(),
            institution_type: institution_type.to_string(),
        });
    }

    if let Some(allowed) = rule.allowed_regions {
        let in_region = allowed
            .iter()
            .any(|region| option_contains_either_way(institution.region.as_deref(), region));
        if !in_region {
            return EligibilityDecision::Ineligible(RejectionReason::RegionMismatch {
                exam: rule.name.to_string(),
                region: institution.region.clone(),
                allowed_regions: allowed.iter().map(|region| region.to_string()).collect(),
            });
        }
    }

    EligibilityDecision::Eligible {
        reason: format!("{} ranks are accepted by {}", rule.name, institution.name),
    }
}

/// Institution turned away by the gate or by a location filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedInstitution {
    pub institution: Institution,
    pub reason: RejectionReason,
}

/// Result of gating a batch of institutions for one exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityBatch {
    pub exam: ExamInfo,
    pub eligible: Vec<Institution>,
    pub rejected: Vec<RejectedInstitution>,
}

impl EligibilityBatch {
    pub fn is_eligible(&self, institution_id: &crate::domain::InstitutionId) -> bool {
        self.eligible
            .iter()
            .any(|institution| &institution.id == institution_id)
    }
}

/// Raised when the exam name cannot be resolved; nothing passes the gate.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum EligibilityError {
    #[error("exam '{exam}' is not recognized; supported exams: {}", .supported.join(", "))]
    UnrecognizedExam { exam: String, supported: Vec<String> },
}

/// Gate every institution for `exam_name`, then apply the optional city and region filters.
///
/// Filters use bidirectional, case-insensitive substring matching; blank filters are ignored.
pub fn filter_batch(
    institutions: &[Institution],
    exam_name: &str,
    city: Option<&str>,
    region: Option<&str>,
) -> Result<EligibilityBatch, EligibilityError> {
    let rule = ExamRule::lookup(exam_name).ok_or_else(|| EligibilityError::UnrecognizedExam {
        exam: exam_name.to_string(),
        supported: exams::supported_exams(),
    })?;

    let city = city.map(str::trim).filter(|value| !value.is_empty());
    let region = region.map(str::trim).filter(|value| !value.is_empty());

    let mut eligible = Vec::new();
    let mut rejected = Vec::new();

    for institution in institutions {
        let reason = match evaluate_eligibility(institution, rule) {
            EligibilityDecision::Ineligible(reason) => Some(reason),
            EligibilityDecision::Eligible { .. } => location_mismatch(institution, city, region),
        };

        match reason {
            Some(reason) => {
                debug!(
                    exam = rule.name,
                    institution = %institution.id,
                    reason = %reason.summary(),
                    "institution rejected"
                );
                rejected.push(RejectedInstitution {
                    institution: institution.clone(),
                    reason,
                });
            }
            None => eligible.push(institution.clone()),
        }
    }

    info!(
        exam = rule.name,
        eligible = eligible.len(),
        rejected = rejected.len(),
        "eligibility batch filtered"
    );

    Ok(EligibilityBatch {
        exam: rule.info(),
        eligible,
        rejected,
    })
}

fn location_mismatch(
    institution: &Institution,
    city: Option<&str>,
    region: Option<&str>,
) -> Option<RejectionReason> {
    if let Some(requested) = city {
        if !option_contains_either_way(institution.city.as_deref(), requested) {
            return Some(RejectionReason::OutsideCity {
                city: institution.city.clone(),
                requested: requested.to_string(),
            });
        }
    }

    if let Some(requested) = region {
        if !option_contains_either_way(institution.region.as_deref(), requested) {
            return Some(RejectionReason::OutsideRegion {
                region: institution.region.clone(),
                requested: requested.to_string(),
            });
        }
    }

    None
}

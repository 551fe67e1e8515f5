use serde::{Deserialize, Serialize};

/// Outcome of checking one institution against one exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EligibilityDecision {
    Eligible { reason: String },
    Ineligible(RejectionReason),
}

impl EligibilityDecision {
    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityDecision::Eligible { .. })
    }

    pub fn reason(&self) -> String {
        match self {
            EligibilityDecision::Eligible { reason } => reason.clone(),
            EligibilityDecision::Ineligible(reason) => reason.summary(),
        }
    }
}

/// Why an institution did not pass the gate or a location filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    DisallowedKeyword {
        exam: String,
        keyword: String,
        rationale: String,
    },
    DisallowedType {
        exam: String,
        institution_type: String,
    },
    RegionMismatch {
        exam: String,
        region: Option<String>,
        allowed_regions: Vec<String>,
    },
    OutsideCity {
        city: Option<String>,
        requested: String,
    },
    OutsideRegion {
        region: Option<String>,
        requested: String,
    },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::DisallowedKeyword {
                exam,
                keyword,
                rationale,
            } => format!("not eligible through {exam}: name matches '{keyword}' ({rationale})"),
            RejectionReason::DisallowedType {
                exam,
                institution_type,
            } => format!("{institution_type} institutions do not admit through {exam}"),
            RejectionReason::RegionMismatch {
                exam,
                region,
                allowed_regions,
            } => format!(
                "region '{}' is outside {exam} coverage ({})",
                region.as_deref().unwrap_or("unknown"),
                allowed_regions.join(", ")
            ),
            RejectionReason::OutsideCity { city, requested } => format!(
                "city '{}' does not match requested city '{requested}'",
                city.as_deref().unwrap_or("unknown")
            ),
            RejectionReason::OutsideRegion { region, requested } => format!(
                "region '{}' does not match requested region '{requested}'",
                region.as_deref().unwrap_or("unknown")
            ),
        }
    }
}

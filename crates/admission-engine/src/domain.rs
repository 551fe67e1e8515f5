use serde::{Deserialize, Serialize};

/// Opaque identifier supplied by the record source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionId(pub String);

impl InstitutionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstitutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Institution descriptor consumed by the eligibility gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: InstitutionId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub branches: Vec<String>,
    #[serde(default)]
    pub fees: Option<FeeSchedule>,
    /// Numeric rating; lower is better.
    #[serde(default)]
    pub rank_tier: Option<u16>,
}

/// Annual fee schedule in the institution's local currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub annual_tuition: Option<u32>,
    pub hostel: Option<u32>,
}

impl FeeSchedule {
    pub fn annual_total(&self) -> Option<u32> {
        match (self.annual_tuition, self.hostel) {
            (None, None) => None,
            (tuition, hostel) => {
                Some(tuition.unwrap_or(0).saturating_add(hostel.unwrap_or(0)))
            }
        }
    }
}

/// The slice of an institution a cutoff record carries with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionRef {
    pub id: InstitutionId,
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
}

/// Bare descriptor for gating records when no institution export is available.
impl From<&InstitutionRef> for Institution {
    fn from(reference: &InstitutionRef) -> Self {
        Self {
            id: reference.id.clone(),
            name: reference.name.clone(),
            kind: None,
            region: reference.region.clone(),
            city: None,
            branches: Vec::new(),
            fees: None,
            rank_tier: None,
        }
    }
}

/// Historical admission boundary for one institution, branch, category and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffRecord {
    pub institution: InstitutionRef,
    pub branch: String,
    /// Raw category label as published; matched leniently against the fallback policy.
    pub category: String,
    pub year: i32,
    #[serde(default)]
    pub opening_rank: Option<i64>,
    #[serde(default)]
    pub closing_rank: Option<i64>,
    #[serde(default)]
    pub quota: Option<String>,
}

impl CutoffRecord {
    /// Closing rank when usable, otherwise the opening rank.
    pub fn effective_rank(&self) -> Option<i64> {
        self.closing_rank
            .filter(|rank| *rank > 0)
            .or(self.opening_rank.filter(|rank| *rank > 0))
    }
}

/// Reservation category declared by a student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    General,
    Ews,
    Obc,
    Sc,
    St,
    Pwd,
    Other(String),
}

impl Category {
    /// Parse a declared category. Blank input yields `None`; unknown labels are kept verbatim.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let category = match trimmed.to_ascii_uppercase().as_str() {
            "GENERAL" | "GEN" | "OPEN" | "UR" | "OC" => Self::General,
            "EWS" | "GEN-EWS" => Self::Ews,
            "OBC" | "OBC-NCL" | "OBC NCL" => Self::Obc,
            "SC" => Self::Sc,
            "ST" => Self::St,
            "PWD" | "PH" => Self::Pwd,
            _ => Self::Other(trimmed.to_string()),
        };

        Some(category)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::General => "General",
            Self::Ews => "EWS",
            Self::Obc => "OBC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Pwd => "PwD",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, Self::General)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(opening: Option<i64>, closing: Option<i64>) -> CutoffRecord {
        CutoffRecord {
            institution: InstitutionRef {
                id: InstitutionId("ou".to_string()),
                name: "Osmania University".to_string(),
                region: Some("Telangana".to_string()),
            },
            branch: "CSE".to_string(),
            category: "General".to_string(),
            year: 2024,
            opening_rank: opening,
            closing_rank: closing,
            quota: None,
        }
    }

    #[test]
    fn effective_rank_prefers_closing_then_opening() {
        assert_eq!(record(Some(100), Some(900)).effective_rank(), Some(900));
        assert_eq!(record(Some(100), None).effective_rank(), Some(100));
        assert_eq!(record(Some(100), Some(0)).effective_rank(), Some(100));
        assert_eq!(record(None, None).effective_rank(), None);
    }

    #[test]
    fn institution_from_reference_carries_identity_and_region() {
        let institution = Institution::from(&record(None, Some(900)).institution);
        assert_eq!(institution.id.as_str(), "ou");
        assert_eq!(institution.region.as_deref(), Some("Telangana"));
        assert!(institution.kind.is_none());
        assert!(institution.branches.is_empty());
    }

    #[test]
    fn category_parse_recognizes_aliases_and_keeps_unknown_labels() {
        assert_eq!(Category::parse(" open "), Some(Category::General));
        assert_eq!(Category::parse("obc-ncl"), Some(Category::Obc));
        assert_eq!(Category::parse("sc"), Some(Category::Sc));
        assert_eq!(
            Category::parse("BC-A"),
            Some(Category::Other("BC-A".to_string()))
        );
        assert_eq!(Category::parse("   "), None);
    }

    #[test]
    fn fee_total_sums_available_parts() {
        let fees = FeeSchedule {
            annual_tuition: Some(100_000),
            hostel: None,
        };
        assert_eq!(fees.annual_total(), Some(100_000));
        let empty = FeeSchedule {
            annual_tuition: None,
            hostel: None,
        };
        assert_eq!(empty.annual_total(), None);
    }
}

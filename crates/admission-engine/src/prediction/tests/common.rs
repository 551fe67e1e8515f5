use crate::config::PredictorConfig;
use crate::domain::{CutoffRecord, InstitutionId, InstitutionRef};
use crate::prediction::{PredictionRequest, Predictor, RankInput};

pub(super) const TARGET_YEAR: i32 = 2025;

pub(super) fn predictor() -> Predictor {
    Predictor::new(
        crate::prediction::PercentageTiers,
        PredictorConfig {
            target_year: Some(TARGET_YEAR),
            ..PredictorConfig::default()
        },
    )
}

pub(super) fn institution(id: &str, region: Option<&str>) -> InstitutionRef {
    InstitutionRef {
        id: InstitutionId(id.to_string()),
        name: id.to_ascii_uppercase(),
        region: region.map(str::to_string),
    }
}

pub(super) fn cutoff(
    institution: &InstitutionRef,
    branch: &str,
    category: &str,
    year: i32,
    closing_rank: Option<i64>,
) -> CutoffRecord {
    CutoffRecord {
        institution: institution.clone(),
        branch: branch.to_string(),
        category: category.to_string(),
        year,
        opening_rank: None,
        closing_rank,
        quota: Some("AI".to_string()),
    }
}

pub(super) fn request(rank: i64, category: &str) -> PredictionRequest {
    PredictionRequest {
        rank: Some(RankInput::Integer(rank)),
        category: Some(category.to_string()),
        home_state: None,
        preferred_branches: Vec::new(),
        target_year: Some(TARGET_YEAR),
    }
}

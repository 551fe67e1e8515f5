//! Rank-to-candidate prediction over caller-supplied cutoff records.
//!
//! Callers are expected to pass cutoff records already filtered through the
//! [`eligibility`](crate::eligibility) gate; the predictor itself never looks at exams.

mod category;
mod normalizer;
mod probability;
mod trend;
mod validation;

#[cfg(test)]
mod tests;

pub use category::{eligible_categories, is_merit_category, matched_category, MERIT_CATEGORIES};
pub use normalizer::{RankNormalizer, DEFAULT_INFLATION_FACTOR};
pub use probability::{
    Assessment, ColorHint, MarginTiers, PercentageTiers, ProbabilityLabel, ProbabilityModel,
};
pub use trend::{analyze_trend, trend_for, HistoricalCutoff, Trend, TrendAnalysis};
pub use validation::{validate_category, validate_rank, RankError, RankInput};

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PredictorConfig;
use crate::domain::{Category, CutoffRecord, InstitutionId};
use crate::matching::{contains_either_way, equals_ignore_case};

/// Student-side inputs for one prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub rank: Option<RankInput>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub home_state: Option<String>,
    #[serde(default)]
    pub preferred_branches: Vec<String>,
    /// Defaults to the configured target year, then the current calendar year.
    #[serde(default)]
    pub target_year: Option<i32>,
}

/// Validation failures reported to the caller instead of being defaulted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error(transparent)]
    InvalidRank(#[from] RankError),
    #[error("a category is required to predict colleges")]
    MissingCategory,
}

/// Informational annotations on a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateNote {
    HomeStateQuota { state: String, bonus: u8 },
    MeritFallback { declared_category: String },
}

impl CandidateNote {
    pub fn summary(&self) -> String {
        match self {
            CandidateNote::HomeStateQuota { state, bonus } => {
                format!("home-state quota for {state} (+{bonus})")
            }
            CandidateNote::MeritFallback { declared_category } => {
                format!("matched on open merit; declared category {declared_category}")
            }
        }
    }
}

/// Best admission pathway found for one (institution, branch) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionCandidate {
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub branch: String,
    /// Cutoff projected onto the target year.
    pub cutoff_rank: i64,
    pub original_cutoff_rank: i64,
    pub student_rank: i64,
    /// `cutoff_rank - student_rank`; positive means the student is ahead of the cutoff.
    pub margin: i64,
    pub probability: u8,
    pub label: ProbabilityLabel,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<ColorHint>,
    pub year: i32,
    pub category_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<CandidateNote>,
}

/// Distinguishes "no data" from "data, but nothing reachable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Matched,
    NoUsableData,
    AllBelowFloor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub student_rank: i64,
    pub category: String,
    pub target_year: i32,
    pub status: ReportStatus,
    pub message: String,
    pub records_considered: usize,
    pub candidates: Vec<PredictionCandidate>,
}

struct Scored {
    candidate: PredictionCandidate,
    region: Option<String>,
    matched_merit: bool,
}

/// Stateless predictor parameterised by a probability model.
#[derive(Debug, Clone)]
pub struct Predictor<M = PercentageTiers> {
    model: M,
    normalizer: RankNormalizer,
    config: PredictorConfig,
}

impl Default for Predictor<PercentageTiers> {
    fn default() -> Self {
        Self::new(PercentageTiers, PredictorConfig::default())
    }
}

impl<M: ProbabilityModel> Predictor<M> {
    pub fn new(model: M, config: PredictorConfig) -> Self {
        Self {
            model,
            normalizer: RankNormalizer::new(config.inflation_factor),
            config,
        }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Score every usable cutoff record and return deduplicated candidates, best first.
    pub fn predict(
        &self,
        request: &PredictionRequest,
        records: &[CutoffRecord],
    ) -> Result<PredictionReport, PredictionError> {
        let student_rank = validate_rank(request.rank.as_ref())?;
        let declared = validate_category(request.category.as_deref())
            .ok_or(PredictionError::MissingCategory)?;
        let target_year = request
            .target_year
            .or(self.config.target_year)
            .unwrap_or_else(|| chrono::Local::now().year());

        let eligible = eligible_categories(&declared);
        let branches: Vec<&str> = request
            .preferred_branches
            .iter()
            .map(|branch| branch.trim())
            .filter(|branch| !branch.is_empty())
            .collect();

        let mut scored: Vec<Scored> = Vec::new();
        let mut index: HashMap<(InstitutionId, String), usize> = HashMap::new();
        let mut usable = 0usize;

        for record in records {
            let Some(matched) = matched_category(&eligible, &record.category) else {
                continue;
            };

            if !branches.is_empty()
                && !branches
                    .iter()
                    .any(|branch| contains_either_way(&record.branch, branch))
            {
                continue;
            }

            let Some(original_cutoff) = record.effective_rank() else {
                debug!(
                    institution = %record.institution.id,
                    branch = %record.branch,
                    "cutoff record has no usable rank"
                );
                continue;
            };
            usable += 1;

            let cutoff_rank = if record.year < target_year {
                self.normalizer
                    .normalize(original_cutoff, record.year, target_year)
            } else {
                original_cutoff
            };

            let assessment = self.model.assess(Some(student_rank), Some(cutoff_rank));
            if assessment.probability < self.config.probability_floor {
                continue;
            }

            let candidate = PredictionCandidate {
                institution_id: record.institution.id.clone(),
                institution_name: record.institution.name.clone(),
                branch: record.branch.clone(),
                cutoff_rank,
                original_cutoff_rank: original_cutoff,
                student_rank,
                margin: cutoff_rank - student_rank,
                probability: assessment.probability,
                label: assessment.label,
                rationale: assessment.reason,
                color_hint: assessment.color_hint,
                year: record.year,
                category_used: record.category.clone(),
                quota: record.quota.clone(),
                notes: Vec::new(),
            };
            let entry = Scored {
                candidate,
                region: record.institution.region.clone(),
                matched_merit: is_merit_category(matched),
            };

            let key = (record.institution.id.clone(), record.branch.trim().to_string());
            match index.get(&key) {
                Some(&position) => {
                    if entry.candidate.probability > scored[position].candidate.probability {
                        scored[position] = entry;
                    }
                }
                None => {
                    index.insert(key, scored.len());
                    scored.push(entry);
                }
            }
        }

        let mut candidates: Vec<PredictionCandidate> = scored
            .into_iter()
            .map(|entry| self.finalize(entry, &declared, request.home_state.as_deref()))
            .collect();
        candidates.sort_by(|a, b| match b.probability.cmp(&a.probability) {
            Ordering::Equal => b.margin.cmp(&a.margin),
            other => other,
        });

        let (status, message) = if candidates.is_empty() && usable == 0 {
            (
                ReportStatus::NoUsableData,
                "No cutoff data matched the requested category and branches".to_string(),
            )
        } else if candidates.is_empty() {
            (
                ReportStatus::AllBelowFloor,
                format!(
                    "Cutoff data exists, but rank {student_rank} is too far behind every cutoff"
                ),
            )
        } else {
            (
                ReportStatus::Matched,
                format!("{} college options found", candidates.len()),
            )
        };

        info!(
            student_rank,
            category = declared.label(),
            target_year,
            records = records.len(),
            usable,
            candidates = candidates.len(),
            "prediction completed"
        );

        Ok(PredictionReport {
            student_rank,
            category: declared.label().to_string(),
            target_year,
            status,
            message,
            records_considered: records.len(),
            candidates,
        })
    }

    fn finalize(
        &self,
        entry: Scored,
        declared: &Category,
        home_state: Option<&str>,
    ) -> PredictionCandidate {
        let Scored {
            mut candidate,
            region,
            matched_merit,
        } = entry;

        if let (Some(state), Some(region)) = (home_state, region.as_deref()) {
            if equals_ignore_case(state, region) {
                candidate.probability = self.apply_home_state_bonus(candidate.probability);
                candidate.notes.push(CandidateNote::HomeStateQuota {
                    state: region.trim().to_string(),
                    bonus: self.config.home_state_bonus,
                });
            }
        }

        if matched_merit && !declared.is_general() {
            candidate.notes.push(CandidateNote::MeritFallback {
                declared_category: declared.label().to_string(),
            });
        }

        candidate
    }

    /// Add the flat home-state bonus without exceeding the configured cap.
    ///
    /// A probability already above the cap is left as is.
    pub fn apply_home_state_bonus(&self, probability: u8) -> u8 {
        let boosted = probability.saturating_add(self.config.home_state_bonus);
        boosted.min(self.config.probability_cap).max(probability)
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::{CutoffRecord, InstitutionId};
use crate::matching::equals_ignore_case;

/// Year-over-year rank movement that counts as a real shift.
const TREND_THRESHOLD: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    GettingEasier,
    GettingTougher,
    Stable,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalCutoff {
    pub year: i32,
    pub cutoff_rank: i64,
}

/// Explanatory trend between the two most recent cutoffs. Never used for gating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub trend: Trend,
    pub change: Option<i64>,
    pub change_percent: Option<f64>,
    pub message: String,
}

pub fn analyze_trend(history: &[HistoricalCutoff]) -> TrendAnalysis {
    if history.len() < 2 {
        return TrendAnalysis {
            trend: Trend::InsufficientData,
            change: None,
            change_percent: None,
            message: "At least two years of cutoff data are needed to spot a trend".to_string(),
        };
    }

    let mut sorted = history.to_vec();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    let (latest, previous) = (sorted[0], sorted[1]);

    let change = latest.cutoff_rank - previous.cutoff_rank;
    let change_percent = (previous.cutoff_rank > 0)
        .then(|| (change as f64 / previous.cutoff_rank as f64 * 1000.0).round() / 10.0);

    let (trend, message) = if change > TREND_THRESHOLD {
        (
            Trend::GettingEasier,
            format!(
                "Closing rank rose by {change} from {} to {}; admission is getting easier",
                previous.year, latest.year
            ),
        )
    } else if change < -TREND_THRESHOLD {
        (
            Trend::GettingTougher,
            format!(
                "Closing rank fell by {} from {} to {}; admission is getting tougher",
                change.abs(),
                previous.year,
                latest.year
            ),
        )
    } else {
        (
            Trend::Stable,
            format!(
                "Closing rank held steady between {} and {}",
                previous.year, latest.year
            ),
        )
    };

    TrendAnalysis {
        trend,
        change: Some(change),
        change_percent,
        message,
    }
}

/// Trend for one admission pathway, using closing ranks and falling back to opening ranks.
pub fn trend_for(
    records: &[CutoffRecord],
    institution_id: &InstitutionId,
    branch: &str,
    category: &str,
) -> TrendAnalysis {
    let history: Vec<HistoricalCutoff> = records
        .iter()
        .filter(|record| {
            &record.institution.id == institution_id
                && equals_ignore_case(&record.branch, branch)
                && equals_ignore_case(&record.category, category)
        })
        .filter_map(|record| {
            record.effective_rank().map(|cutoff_rank| HistoricalCutoff {
                year: record.year,
                cutoff_rank,
            })
        })
        .collect();

    analyze_trend(&history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InstitutionRef;

    fn point(year: i32, cutoff_rank: i64) -> HistoricalCutoff {
        HistoricalCutoff { year, cutoff_rank }
    }

    #[test]
    fn single_point_is_insufficient() {
        let analysis = analyze_trend(&[point(2024, 12_000)]);
        assert_eq!(analysis.trend, Trend::InsufficientData);
        assert!(analysis.change.is_none());
    }

    #[test]
    fn compares_two_most_recent_years_regardless_of_input_order() {
        let analysis = analyze_trend(&[point(2022, 1_000), point(2024, 15_000), point(2023, 12_000)]);
        assert_eq!(analysis.trend, Trend::GettingEasier);
        assert_eq!(analysis.change, Some(3_000));
        assert_eq!(analysis.change_percent, Some(25.0));
    }

    #[test]
    fn falling_closing_rank_is_tougher() {
        let analysis = analyze_trend(&[point(2023, 15_000), point(2024, 13_500)]);
        assert_eq!(analysis.trend, Trend::GettingTougher);
        assert_eq!(analysis.change, Some(-1_500));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(
            analyze_trend(&[point(2023, 10_000), point(2024, 11_000)]).trend,
            Trend::Stable
        );
        assert_eq!(
            analyze_trend(&[point(2023, 10_000), point(2024, 9_000)]).trend,
            Trend::Stable
        );
    }

    #[test]
    fn trend_for_selects_one_pathway() {
        let institution = InstitutionRef {
            id: InstitutionId("cbit".to_string()),
            name: "CBIT".to_string(),
            region: Some("Telangana".to_string()),
        };
        let record = |branch: &str, category: &str, year: i32, closing: i64| CutoffRecord {
            institution: institution.clone(),
            branch: branch.to_string(),
            category: category.to_string(),
            year,
            opening_rank: None,
            closing_rank: Some(closing),
            quota: None,
        };
        let records = vec![
            record("CSE", "General", 2023, 4_000),
            record("CSE", "General", 2024, 6_500),
            record("ECE", "General", 2024, 1_000),
            record("CSE", "SC", 2024, 30_000),
        ];

        let analysis = trend_for(&records, &institution.id, "cse", "general");
        assert_eq!(analysis.trend, Trend::GettingEasier);
        assert_eq!(analysis.change, Some(2_500));
    }
}

use serde::{Deserialize, Serialize};

/// Tier label attached to a probability estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbabilityLabel {
    VeryHigh,
    High,
    Good,
    Moderate,
    Ambitious,
    Low,
    VeryLow,
    NoChance,
    Invalid,
    NoData,
}

/// Display hint for percentage-based tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorHint {
    DarkGreen,
    Green,
    LightGreen,
    Yellow,
    Orange,
    Red,
    Gray,
}

/// Probability estimate for one (student rank, cutoff rank) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// 0-100.
    pub probability: u8,
    pub label: ProbabilityLabel,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<ColorHint>,
}

impl Assessment {
    fn new(probability: u8, label: ProbabilityLabel, reason: &str) -> Self {
        Self {
            probability,
            label,
            reason: reason.to_string(),
            color_hint: None,
        }
    }

    fn with_color(mut self, color: ColorHint) -> Self {
        self.color_hint = Some(color);
        self
    }
}

/// Strategy mapping a student rank and a cutoff rank to an admission probability.
pub trait ProbabilityModel {
    fn assess(&self, student_rank: Option<i64>, cutoff_rank: Option<i64>) -> Assessment;
}

fn validated(student_rank: Option<i64>, cutoff_rank: Option<i64>) -> Result<(i64, i64), Assessment> {
    match (student_rank, cutoff_rank) {
        (None, _) | (Some(i64::MIN..=0), _) => Err(Assessment::new(
            0,
            ProbabilityLabel::Invalid,
            "A valid positive rank is required",
        )),
        (_, None) | (_, Some(i64::MIN..=0)) => Err(Assessment::new(
            0,
            ProbabilityLabel::NoData,
            "No usable cutoff data for this option",
        )),
        (Some(student), Some(cutoff)) => Ok((student, cutoff)),
    }
}

/// Scale-invariant tiers on `student_rank / cutoff_rank * 100`. Preferred for all predictions.
#[derive(Debug, Default, Clone, Copy)]
pub struct PercentageTiers;

impl PercentageTiers {
    const TIERS: [(f64, u8, ProbabilityLabel, ColorHint, &'static str); 6] = [
        (
            50.0,
            95,
            ProbabilityLabel::VeryHigh,
            ColorHint::DarkGreen,
            "Your rank is well inside the historical cutoff",
        ),
        (
            75.0,
            85,
            ProbabilityLabel::High,
            ColorHint::Green,
            "Your rank is comfortably inside the historical cutoff",
        ),
        (
            100.0,
            70,
            ProbabilityLabel::Good,
            ColorHint::LightGreen,
            "Your rank is within the historical cutoff",
        ),
        (
            115.0,
            45,
            ProbabilityLabel::Moderate,
            ColorHint::Yellow,
            "Your rank is slightly beyond the cutoff; later rounds may open up",
        ),
        (
            130.0,
            25,
            ProbabilityLabel::Low,
            ColorHint::Orange,
            "Your rank is beyond the cutoff; admission depends on seat vacancies",
        ),
        (
            150.0,
            15,
            ProbabilityLabel::VeryLow,
            ColorHint::Red,
            "Your rank is far beyond the cutoff",
        ),
    ];
}

impl ProbabilityModel for PercentageTiers {
    fn assess(&self, student_rank: Option<i64>, cutoff_rank: Option<i64>) -> Assessment {
        let (student, cutoff) = match validated(student_rank, cutoff_rank) {
            Ok(ranks) => ranks,
            Err(invalid) => return invalid.with_color(ColorHint::Gray),
        };

        let ratio = student as f64 * 100.0 / cutoff as f64;
        Self::TIERS
            .iter()
            .find(|(bound, ..)| ratio <= *bound)
            .map(|(_, probability, label, color, reason)| {
                Assessment::new(*probability, *label, reason).with_color(*color)
            })
            .unwrap_or_else(|| {
                Assessment::new(
                    5,
                    ProbabilityLabel::NoChance,
                    "Your rank is outside the historical admission range",
                )
                .with_color(ColorHint::Gray)
            })
    }
}

/// Legacy tiers on the absolute margin `cutoff_rank - student_rank`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarginTiers;

impl MarginTiers {
    const TIERS: [(i64, u8, ProbabilityLabel, &'static str); 5] = [
        (
            5000,
            90,
            ProbabilityLabel::High,
            "Your rank is far ahead of last year's closing rank",
        ),
        (
            2000,
            80,
            ProbabilityLabel::High,
            "Your rank is comfortably ahead of last year's closing rank",
        ),
        (
            500,
            65,
            ProbabilityLabel::Moderate,
            "Your rank is ahead of last year's closing rank",
        ),
        (
            -500,
            45,
            ProbabilityLabel::Ambitious,
            "Your rank is close to last year's closing rank",
        ),
        (
            -2000,
            30,
            ProbabilityLabel::Low,
            "Your rank is behind last year's closing rank",
        ),
    ];
}

impl ProbabilityModel for MarginTiers {
    fn assess(&self, student_rank: Option<i64>, cutoff_rank: Option<i64>) -> Assessment {
        let (student, cutoff) = match validated(student_rank, cutoff_rank) {
            Ok(ranks) => ranks,
            Err(invalid) => return invalid,
        };

        let margin = cutoff - student;
        Self::TIERS
            .iter()
            .find(|(threshold, ..)| margin >= *threshold)
            .map(|(_, probability, label, reason)| {
                Assessment::new(*probability, *label, reason)
            })
            .unwrap_or_else(|| {
                Assessment::new(
                    15,
                    ProbabilityLabel::VeryLow,
                    "Your rank is far behind last year's closing rank",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_tiers_follow_ratio_bounds() {
        let model = PercentageTiers;
        let cases = [
            (5_000, 10_000, 95, ProbabilityLabel::VeryHigh),
            (7_500, 10_000, 85, ProbabilityLabel::High),
            (10_000, 10_000, 70, ProbabilityLabel::Good),
            (11_500, 10_000, 45, ProbabilityLabel::Moderate),
            (13_000, 10_000, 25, ProbabilityLabel::Low),
            (15_000, 10_000, 15, ProbabilityLabel::VeryLow),
            (15_001, 10_000, 5, ProbabilityLabel::NoChance),
        ];

        for (student, cutoff, probability, label) in cases {
            let assessment = model.assess(Some(student), Some(cutoff));
            assert_eq!(assessment.probability, probability, "{student}/{cutoff}");
            assert_eq!(assessment.label, label, "{student}/{cutoff}");
            assert!(assessment.color_hint.is_some());
        }
    }

    #[test]
    fn percentage_probability_is_non_increasing_in_ratio() {
        let model = PercentageTiers;
        let cutoff = 20_000;
        let mut previous = u8::MAX;
        for student in (1..=40_000).step_by(97) {
            let probability = model.assess(Some(student), Some(cutoff)).probability;
            assert!(probability <= previous, "rank {student} raised probability");
            previous = probability;
        }
    }

    #[test]
    fn percentage_tiers_are_scale_invariant() {
        let model = PercentageTiers;
        let small = model.assess(Some(900), Some(1_000));
        let large = model.assess(Some(90_000), Some(100_000));
        assert_eq!(small.label, large.label);
        assert_eq!(small.probability, large.probability);
    }

    #[test]
    fn margin_tiers_follow_thresholds() {
        let model = MarginTiers;
        let cases = [
            (10_000, 15_000, 90, ProbabilityLabel::High),
            (10_000, 12_000, 80, ProbabilityLabel::High),
            (10_000, 10_500, 65, ProbabilityLabel::Moderate),
            (10_000, 9_500, 45, ProbabilityLabel::Ambitious),
            (10_000, 8_000, 30, ProbabilityLabel::Low),
            (10_000, 7_999, 15, ProbabilityLabel::VeryLow),
        ];

        for (student, cutoff, probability, label) in cases {
            let assessment = model.assess(Some(student), Some(cutoff));
            assert_eq!(assessment.probability, probability, "{student}/{cutoff}");
            assert_eq!(assessment.label, label, "{student}/{cutoff}");
            assert!(assessment.color_hint.is_none());
        }
    }

    #[test]
    fn invalid_inputs_are_labelled_for_both_models() {
        let models: [&dyn ProbabilityModel; 2] = [&PercentageTiers, &MarginTiers];
        for model in models {
            let missing = model.assess(None, Some(1_000));
            assert_eq!((missing.probability, missing.label), (0, ProbabilityLabel::Invalid));

            let negative = model.assess(Some(-3), Some(1_000));
            assert_eq!(negative.label, ProbabilityLabel::Invalid);

            let no_data = model.assess(Some(1_000), None);
            assert_eq!((no_data.probability, no_data.label), (0, ProbabilityLabel::NoData));

            let zero_cutoff = model.assess(Some(1_000), Some(0));
            assert_eq!(zero_cutoff.label, ProbabilityLabel::NoData);
        }
    }

    #[test]
    fn labels_serialize_in_screaming_case() {
        let json = serde_json::to_string(&ProbabilityLabel::VeryHigh).expect("serialize");
        assert_eq!(json, "\"VERY_HIGH\"");
    }
}

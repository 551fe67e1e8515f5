use admission_engine::eligibility::EligibilityBatch;
use admission_engine::exams::ExamInfo;
use admission_engine::prediction::{PredictionCandidate, PredictionReport};

/// Presentation bands; the engine itself never buckets or truncates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Safe,
    Moderate,
    Ambitious,
}

impl Band {
    fn for_probability(probability: u8) -> Self {
        match probability {
            70..=u8::MAX => Band::Safe,
            40..=69 => Band::Moderate,
            _ => Band::Ambitious,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Band::Safe => "Safe",
            Band::Moderate => "Moderate",
            Band::Ambitious => "Ambitious",
        }
    }
}

pub(crate) fn exams(exams: &[ExamInfo]) {
    println!("Supported exams");
    for exam in exams {
        let regions = exam
            .allowed_regions
            .as_ref()
            .map(|regions| regions.join(", "))
            .unwrap_or_else(|| "all regions".to_string());
        println!(
            "- {} ({:?}, {:?}) | {} | {}",
            exam.name, exam.level, exam.domain, exam.counselling_body, regions
        );
        println!(
            "  types: {} | excluded: {}",
            exam.allowed_types.join(", "),
            exam.disallowed_types.join(", ")
        );
        println!("  {}", exam.notes);
    }
}

pub(crate) fn eligibility(batch: &EligibilityBatch) {
    println!(
        "{} ({}): {} eligible, {} rejected",
        batch.exam.name,
        batch.exam.counselling_body,
        batch.eligible.len(),
        batch.rejected.len()
    );

    let mut eligible: Vec<_> = batch.eligible.iter().collect();
    eligible.sort_by_key(|institution| institution.rank_tier.unwrap_or(u16::MAX));
    for institution in eligible {
        let fees = institution
            .fees
            .and_then(|fees| fees.annual_total())
            .map(|total| format!(" | fees {total}/yr"))
            .unwrap_or_default();
        println!(
            "  + {} [{}]{}",
            institution.name,
            institution.city.as_deref().unwrap_or("-"),
            fees
        );
    }

    for rejected in &batch.rejected {
        println!(
            "  - {}: {}",
            rejected.institution.name,
            rejected.reason.summary()
        );
    }
}

pub(crate) fn prediction(report: &PredictionReport) {
    println!(
        "Rank {} | {} | target year {}",
        report.student_rank, report.category, report.target_year
    );
    println!("{}", report.message);

    for band in [Band::Safe, Band::Moderate, Band::Ambitious] {
        let candidates: Vec<&PredictionCandidate> = report
            .candidates
            .iter()
            .filter(|candidate| Band::for_probability(candidate.probability) == band)
            .collect();
        if candidates.is_empty() {
            continue;
        }

        println!("\n{} ({})", band.title(), candidates.len());
        for candidate in candidates {
            println!(
                "  {:>3}% {:?} {} - {} (cutoff {} from {} in {}, margin {:+})",
                candidate.probability,
                candidate.label,
                candidate.institution_name,
                candidate.branch,
                candidate.cutoff_rank,
                candidate.original_cutoff_rank,
                candidate.year,
                candidate.margin
            );
            for note in &candidate.notes {
                println!("        note: {}", note.summary());
            }
        }
    }
}

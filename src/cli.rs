use crate::render;
use admission_engine::config::AppConfig;
use admission_engine::domain::{CutoffRecord, Institution, InstitutionId};
use admission_engine::eligibility::filter_batch;
use admission_engine::error::AppError;
use admission_engine::exams::ExamId;
use admission_engine::prediction::{
    trend_for, PercentageTiers, PredictionRequest, Predictor, RankInput,
};
use admission_engine::records::{CutoffImporter, InstitutionImporter};
use admission_engine::telemetry;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "admission-predictor",
    about = "Match entrance-exam ranks against historical cutoffs and estimate admission chances",
    version
)]
struct Cli {
    /// Raise engine logging to debug (-v) or trace (-vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported exams and the institutions they cover
    Exams(OutputArgs),
    /// Check which institutions accept a given exam
    Eligibility(EligibilityArgs),
    /// Predict admission chances for a rank against cutoff records
    Predict(PredictArgs),
    /// Show the recent cutoff trend for one institution, branch and category
    Trend(TrendArgs),
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Emit JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct EligibilityArgs {
    /// Exam name (e.g. "TS EAMCET", "JEE Main")
    #[arg(long)]
    exam: String,
    /// Institution CSV export
    #[arg(long)]
    institutions: PathBuf,
    /// Only keep institutions in this city
    #[arg(long)]
    city: Option<String>,
    /// Only keep institutions in this region
    #[arg(long)]
    region: Option<String>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct PredictArgs {
    /// Entrance exam rank
    #[arg(long)]
    rank: Option<String>,
    /// Reservation category (General, EWS, OBC, SC, ST, PwD, ...)
    #[arg(long)]
    category: Option<String>,
    /// Home state used for state-quota bonuses
    #[arg(long)]
    home_state: Option<String>,
    /// Preferred branch; repeat for several
    #[arg(long = "branch")]
    branches: Vec<String>,
    /// Cutoff CSV export
    #[arg(long)]
    cutoffs: PathBuf,
    /// Year to project cutoffs onto (defaults to config, then the current year)
    #[arg(long)]
    target_year: Option<i32>,
    /// Gate cutoff records through this exam's eligibility rules first
    #[arg(long)]
    exam: Option<String>,
    /// Institution CSV export used by the eligibility gate
    #[arg(long, requires = "exam")]
    institutions: Option<PathBuf>,
    /// Only keep institutions in this city (requires --exam)
    #[arg(long, requires = "exam")]
    city: Option<String>,
    /// Only keep institutions in this region (requires --exam)
    #[arg(long, requires = "exam")]
    region: Option<String>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct TrendArgs {
    /// Cutoff CSV export
    #[arg(long)]
    cutoffs: PathBuf,
    #[arg(long)]
    institution: String,
    #[arg(long)]
    branch: String,
    #[arg(long)]
    category: String,
    #[command(flatten)]
    output: OutputArgs,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, cli.verbose)?;
    info!(environment = ?config.environment, "admission predictor starting");

    match cli.command {
        Command::Exams(output) => run_exams(output),
        Command::Eligibility(args) => run_eligibility(args),
        Command::Predict(args) => run_predict(args, config),
        Command::Trend(args) => run_trend(args),
    }
}

fn run_exams(output: OutputArgs) -> Result<(), AppError> {
    let exams: Vec<_> = ExamId::ALL.iter().map(|id| id.rule().info()).collect();
    if output.json {
        return print_json(&exams);
    }

    render::exams(&exams);
    Ok(())
}

fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let institutions = InstitutionImporter::from_path(&args.institutions)?;
    let batch = filter_batch(
        &institutions,
        &args.exam,
        args.city.as_deref(),
        args.region.as_deref(),
    )?;

    if args.output.json {
        return print_json(&batch);
    }

    render::eligibility(&batch);
    Ok(())
}

fn run_predict(args: PredictArgs, config: AppConfig) -> Result<(), AppError> {
    let PredictArgs {
        rank,
        category,
        home_state,
        branches,
        cutoffs,
        target_year,
        exam,
        institutions,
        city,
        region,
        output,
    } = args;

    let mut records = CutoffImporter::from_path(cutoffs)?;

    if let Some(exam) = exam {
        let institutions = match institutions {
            Some(path) => InstitutionImporter::from_path(path)?,
            None => institutions_from_cutoffs(&records),
        };
        let batch = filter_batch(&institutions, &exam, city.as_deref(), region.as_deref())?;
        let before = records.len();
        records.retain(|record| batch.is_eligible(&record.institution.id));
        info!(
            exam = %batch.exam.name,
            kept = records.len(),
            dropped = before - records.len(),
            "cutoff records gated"
        );
    }

    let request = PredictionRequest {
        rank: rank.map(RankInput::Text),
        category,
        home_state,
        preferred_branches: branches,
        target_year,
    };
    let predictor = Predictor::new(PercentageTiers, config.predictor);
    let report = predictor.predict(&request, &records)?;

    if output.json {
        return print_json(&report);
    }

    render::prediction(&report);
    Ok(())
}

fn run_trend(args: TrendArgs) -> Result<(), AppError> {
    let records = CutoffImporter::from_path(&args.cutoffs)?;
    let analysis = trend_for(
        &records,
        &InstitutionId(args.institution.clone()),
        &args.branch,
        &args.category,
    );

    if args.output.json {
        return print_json(&analysis);
    }

    println!(
        "{} / {} / {}: {:?}",
        args.institution, args.branch, args.category, analysis.trend
    );
    println!("{}", analysis.message);
    Ok(())
}

/// Minimal institution descriptors for gating when no institution export is supplied.
fn institutions_from_cutoffs(records: &[CutoffRecord]) -> Vec<Institution> {
    let mut seen = BTreeMap::new();
    for record in records {
        seen.entry(record.institution.id.clone())
            .or_insert_with(|| Institution::from(&record.institution));
    }
    seen.into_values().collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

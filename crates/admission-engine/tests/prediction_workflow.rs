use admission_engine::config::PredictorConfig;
use admission_engine::eligibility::filter_batch;
use admission_engine::prediction::{
    trend_for, CandidateNote, PercentageTiers, PredictionRequest, Predictor, RankInput,
    ReportStatus, Trend,
};
use admission_engine::records::{CutoffImporter, InstitutionImporter};

const INSTITUTIONS: &str = "id,name,type,region,city,branches,annual_tuition,hostel_fee,rank_tier\n\
nitw,NIT Warangal,NIT,Telangana,Warangal,CSE;ECE,150000,40000,1\n\
ou,Osmania University,State University,Telangana,Hyderabad,CSE;ECE,45000,,2\n\
cbit,CBIT,Private,Telangana,Hyderabad,CSE;ECE;IT,140000,,3\n\
rvce,RV College of Engineering,Private,Karnataka,Bengaluru,CSE,250000,,2\n";

const CUTOFFS: &str = "institution_id,institution_name,region,branch,category,year,opening_rank,closing_rank,quota\n\
nitw,NIT Warangal,Telangana,CSE,General,2024,100,2500,HS\n\
ou,Osmania University,Telangana,CSE,General,2023,300,9000,\n\
ou,Osmania University,Telangana,CSE,General,2024,300,11000,\n\
ou,Osmania University,Telangana,CSE,SC,2024,2000,40000,\n\
cbit,CBIT,Telangana,CSE,General,2024,500,12000,\n\
cbit,CBIT,Telangana,IT,General,2024,900,16000,\n\
cbit,CBIT,Telangana,ECE,General,2024,1500,,\n\
rvce,RV College of Engineering,Karnataka,CSE,General,2024,100,20000,\n";

fn predictor() -> Predictor {
    Predictor::new(
        PercentageTiers,
        PredictorConfig {
            target_year: Some(2025),
            ..PredictorConfig::default()
        },
    )
}

#[test]
fn gated_prediction_for_state_exam() {
    let institutions =
        InstitutionImporter::from_reader(INSTITUTIONS.as_bytes()).expect("institutions import");
    let cutoffs = CutoffImporter::from_reader(CUTOFFS.as_bytes()).expect("cutoffs import");

    let batch = filter_batch(&institutions, "TS EAMCET", None, None).expect("known exam");
    let gated: Vec<_> = cutoffs
        .into_iter()
        .filter(|record| batch.is_eligible(&record.institution.id))
        .collect();
    assert!(gated.iter().all(|record| record.institution.id.as_str() != "nitw"));
    assert!(gated.iter().all(|record| record.institution.id.as_str() != "rvce"));

    let request = PredictionRequest {
        rank: Some(RankInput::Text("12000".to_string())),
        category: Some("SC".to_string()),
        home_state: Some("Telangana".to_string()),
        preferred_branches: vec!["CSE".to_string(), "IT".to_string()],
        target_year: None,
    };
    let report = predictor()
        .predict(&request, &gated)
        .expect("prediction succeeds");

    assert_eq!(report.status, ReportStatus::Matched);
    assert_eq!(report.target_year, 2025);

    let summary: Vec<(&str, &str, u8)> = report
        .candidates
        .iter()
        .map(|candidate| {
            (
                candidate.institution_id.as_str(),
                candidate.branch.as_str(),
                candidate.probability,
            )
        })
        .collect();
    // ou/CSE: SC 40000 -> 42000 (ratio 28.6%) beats the general pathways; 95 stays capped.
    // cbit/IT: 16800 (71.4%) -> 85 + 5. cbit/CSE: 12600 (95.2%) -> 70 + 5.
    assert_eq!(
        summary,
        vec![("ou", "CSE", 95), ("cbit", "IT", 90), ("cbit", "CSE", 75)]
    );

    let cbit_cse = &report.candidates[2];
    assert!(cbit_cse
        .notes
        .iter()
        .any(|note| matches!(note, CandidateNote::MeritFallback { .. })));
    assert!(cbit_cse
        .notes
        .iter()
        .any(|note| matches!(note, CandidateNote::HomeStateQuota { .. })));

    let ou_cse = &report.candidates[0];
    assert_eq!(ou_cse.category_used, "SC");
    assert!(!ou_cse
        .notes
        .iter()
        .any(|note| matches!(note, CandidateNote::MeritFallback { .. })));
}

#[test]
fn trend_reads_imported_history() {
    let cutoffs = CutoffImporter::from_reader(CUTOFFS.as_bytes()).expect("cutoffs import");
    let ou = cutoffs
        .iter()
        .find(|record| record.institution.id.as_str() == "ou")
        .map(|record| record.institution.id.clone())
        .expect("ou present");

    let analysis = trend_for(&cutoffs, &ou, "CSE", "General");
    assert_eq!(analysis.trend, Trend::GettingEasier);
    assert_eq!(analysis.change, Some(2_000));

    let single = trend_for(&cutoffs, &ou, "CSE", "SC");
    assert_eq!(single.trend, Trend::InsufficientData);
}

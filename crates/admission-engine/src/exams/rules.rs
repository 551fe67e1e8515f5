use super::{ExamDomain, ExamId, ExamLevel, ExamRule};

const NATIONAL_INSTITUTE_KEYWORDS: &[&str] = &[
    "IIT",
    "NIT",
    "IIIT",
    "Indian Institute of Technology",
    "National Institute of Technology",
    "Indian Institute of Information Technology",
    "International Institute of Information Technology",
    "BITS",
    "AIIMS",
];

const STATE_ENGINEERING_TYPES: &[&str] = &[
    "State University",
    "Government",
    "Private",
    "Autonomous",
    "Affiliated",
];

const STATE_EXCLUDED_TYPES: &[&str] = &[
    "IIT", "NIT", "IIIT", "GFTI", "Central", "Deemed", "Medical",
];

const TELANGANA: &[&str] = &["Telangana"];
const ANDHRA_PRADESH: &[&str] = &["Andhra Pradesh"];
const TELUGU_STATES: &[&str] = &["Telangana", "Andhra Pradesh"];
const KARNATAKA: &[&str] = &["Karnataka"];
const MAHARASHTRA: &[&str] = &["Maharashtra"];
const WEST_BENGAL: &[&str] = &["West Bengal"];

const STATE_RATIONALE: &str =
    "state counselling only allots seats in the state's own universities and affiliated colleges";

static JEE_MAIN: ExamRule = ExamRule {
    id: ExamId::JeeMain,
    name: "JEE Main",
    level: ExamLevel::National,
    domain: ExamDomain::Engineering,
    counselling_body: "JoSAA / CSAB",
    allowed_types: &["NIT", "IIIT", "GFTI", "State University", "Private", "Deemed"],
    disallowed_types: &["IIT", "Medical"],
    disallowed_keywords: &["Indian Institute of Technology", "AIIMS", "Medical College"],
    allowed_regions: None,
    rationale: "IITs admit only through JEE Advanced; JEE Main ranks cover NITs, IIITs and GFTIs",
    notes: "Home-state quota applies to NIT seats; private universities may accept JEE Main scores directly.",
};

static JEE_ADVANCED: ExamRule = ExamRule {
    id: ExamId::JeeAdvanced,
    name: "JEE Advanced",
    level: ExamLevel::National,
    domain: ExamDomain::Engineering,
    counselling_body: "JoSAA",
    allowed_types: &["IIT"],
    disallowed_types: &[
        "NIT",
        "IIIT",
        "GFTI",
        "Private",
        "State University",
        "Deemed",
        "Medical",
    ],
    disallowed_keywords: &[
        "National Institute of Technology",
        "Indian Institute of Information Technology",
        "AIIMS",
    ],
    allowed_regions: None,
    rationale: "JEE Advanced ranks are only used for IIT seat allocation",
    notes: "Candidates must also clear the JEE Main qualifying cutoff.",
};

static NEET_UG: ExamRule = ExamRule {
    id: ExamId::NeetUg,
    name: "NEET UG",
    level: ExamLevel::National,
    domain: ExamDomain::Medical,
    counselling_body: "MCC / State DME",
    allowed_types: &[
        "Medical",
        "AIIMS",
        "JIPMER",
        "Dental",
        "Government",
        "Private",
        "Deemed",
    ],
    disallowed_types: &["IIT", "NIT", "IIIT", "Engineering"],
    disallowed_keywords: &["Institute of Technology", "Engineering"],
    allowed_regions: None,
    rationale: "NEET UG only governs medical and dental admissions",
    notes: "15% all-India quota through MCC; the remaining seats through state counselling.",
};

static TS_EAMCET: ExamRule = ExamRule {
    id: ExamId::TsEamcet,
    name: "TS EAMCET",
    level: ExamLevel::State,
    domain: ExamDomain::Engineering,
    counselling_body: "TSCHE (TS EAMCET counselling)",
    allowed_types: STATE_ENGINEERING_TYPES,
    disallowed_types: STATE_EXCLUDED_TYPES,
    disallowed_keywords: NATIONAL_INSTITUTE_KEYWORDS,
    allowed_regions: Some(TELANGANA),
    rationale: STATE_RATIONALE,
    notes: "85% of seats are reserved for local candidates of Telangana.",
};

static AP_EAMCET: ExamRule = ExamRule {
    id: ExamId::ApEamcet,
    name: "AP EAMCET",
    level: ExamLevel::State,
    domain: ExamDomain::Engineering,
    counselling_body: "APSCHE (AP EAPCET counselling)",
    allowed_types: STATE_ENGINEERING_TYPES,
    disallowed_types: STATE_EXCLUDED_TYPES,
    disallowed_keywords: NATIONAL_INSTITUTE_KEYWORDS,
    allowed_regions: Some(ANDHRA_PRADESH),
    rationale: STATE_RATIONALE,
    notes: "Now conducted as AP EAPCET; local-area reservation applies.",
};

static EAMCET: ExamRule = ExamRule {
    id: ExamId::Eamcet,
    name: "EAMCET",
    level: ExamLevel::State,
    domain: ExamDomain::Engineering,
    counselling_body: "TSCHE / APSCHE",
    allowed_types: STATE_ENGINEERING_TYPES,
    disallowed_types: STATE_EXCLUDED_TYPES,
    disallowed_keywords: NATIONAL_INSTITUTE_KEYWORDS,
    allowed_regions: Some(TELUGU_STATES),
    rationale: STATE_RATIONALE,
    notes: "Unspecified EAMCET variant; matched against both Telangana and Andhra Pradesh.",
};

static KCET: ExamRule = ExamRule {
    id: ExamId::Kcet,
    name: "KCET",
    level: ExamLevel::State,
    domain: ExamDomain::Engineering,
    counselling_body: "Karnataka Examinations Authority",
    allowed_types: STATE_ENGINEERING_TYPES,
    disallowed_types: STATE_EXCLUDED_TYPES,
    disallowed_keywords: NATIONAL_INSTITUTE_KEYWORDS,
    allowed_regions: Some(KARNATAKA),
    rationale: STATE_RATIONALE,
    notes: "Rank is computed from 50% CET and 50% qualifying exam marks.",
};

static MHT_CET: ExamRule = ExamRule {
    id: ExamId::MhtCet,
    name: "MHT CET",
    level: ExamLevel::State,
    domain: ExamDomain::Engineering,
    counselling_body: "State CET Cell, Maharashtra",
    allowed_types: STATE_ENGINEERING_TYPES,
    disallowed_types: STATE_EXCLUDED_TYPES,
    disallowed_keywords: NATIONAL_INSTITUTE_KEYWORDS,
    allowed_regions: Some(MAHARASHTRA),
    rationale: STATE_RATIONALE,
    notes: "Home-university and other-than-home-university seats are allotted separately.",
};

static WBJEE: ExamRule = ExamRule {
    id: ExamId::Wbjee,
    name: "WBJEE",
    level: ExamLevel::State,
    domain: ExamDomain::Engineering,
    counselling_body: "WBJEEB",
    allowed_types: STATE_ENGINEERING_TYPES,
    disallowed_types: STATE_EXCLUDED_TYPES,
    disallowed_keywords: NATIONAL_INSTITUTE_KEYWORDS,
    allowed_regions: Some(WEST_BENGAL),
    rationale: STATE_RATIONALE,
    notes: "Covers state universities, government and self-financed colleges in West Bengal.",
};

pub(super) fn rule_for(id: ExamId) -> &'static ExamRule {
    match id {
        ExamId::JeeMain => &JEE_MAIN,
        ExamId::JeeAdvanced => &JEE_ADVANCED,
        ExamId::NeetUg => &NEET_UG,
        ExamId::TsEamcet => &TS_EAMCET,
        ExamId::ApEamcet => &AP_EAMCET,
        ExamId::Eamcet => &EAMCET,
        ExamId::Kcet => &KCET,
        ExamId::MhtCet => &MHT_CET,
        ExamId::Wbjee => &WBJEE,
    }
}

use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::domain::{CutoffRecord, FeeSchedule, Institution, InstitutionId, InstitutionRef};

pub(crate) fn parse_cutoffs<R: Read>(reader: R) -> Result<Vec<CutoffRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<CutoffRow>() {
        let row = row?;
        records.push(CutoffRecord {
            institution: InstitutionRef {
                id: InstitutionId(row.institution_id),
                name: row.institution_name,
                region: row.region,
            },
            branch: row.branch,
            category: row.category,
            year: row.year,
            opening_rank: row.opening_rank,
            closing_rank: row.closing_rank,
            quota: row.quota,
        });
    }

    Ok(records)
}

pub(crate) fn parse_institutions<R: Read>(reader: R) -> Result<Vec<Institution>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut institutions = Vec::new();

    for row in csv_reader.deserialize::<InstitutionRow>() {
        let row = row?;
        let fees = match (row.annual_tuition, row.hostel_fee) {
            (None, None) => None,
            (annual_tuition, hostel) => Some(FeeSchedule {
                annual_tuition,
                hostel,
            }),
        };
        let branches = row
            .branches
            .as_deref()
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|branch| !branch.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        institutions.push(Institution {
            id: InstitutionId(row.id),
            name: row.name,
            kind: row.kind,
            region: row.region,
            city: row.city,
            branches,
            fees,
            rank_tier: row.rank_tier,
        });
    }

    Ok(institutions)
}

#[derive(Debug, Deserialize)]
struct CutoffRow {
    institution_id: String,
    institution_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    region: Option<String>,
    branch: String,
    category: String,
    year: i32,
    #[serde(default, deserialize_with = "optional_number")]
    opening_rank: Option<i64>,
    #[serde(default, deserialize_with = "optional_number")]
    closing_rank: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    quota: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InstitutionRow {
    id: String,
    name: String,
    #[serde(rename = "type", default, deserialize_with = "empty_string_as_none")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    city: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    branches: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    annual_tuition: Option<u32>,
    #[serde(default, deserialize_with = "optional_number")]
    hostel_fee: Option<u32>,
    #[serde(default, deserialize_with = "optional_number")]
    rank_tier: Option<u16>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Blank cells become `None`; thousands separators are tolerated.
fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let Some(raw) = empty_string_as_none(deserializer)? else {
        return Ok(None);
    };

    let cleaned = raw.trim().replace(',', "");
    cleaned
        .parse::<T>()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("'{raw}' is not a valid number")))
}

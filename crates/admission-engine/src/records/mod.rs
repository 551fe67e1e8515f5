//! CSV import of cutoff and institution records.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::domain::{CutoffRecord, Institution};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read record export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid record CSV data: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CutoffImporter;

impl CutoffImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CutoffRecord>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CutoffRecord>, ImportError> {
        let records = parser::parse_cutoffs(reader)?;
        tracing::debug!(records = records.len(), "cutoff records imported");
        Ok(records)
    }
}

pub struct InstitutionImporter;

impl InstitutionImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Institution>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Institution>, ImportError> {
        let institutions = parser::parse_institutions(reader)?;
        tracing::debug!(institutions = institutions.len(), "institutions imported");
        Ok(institutions)
    }
}

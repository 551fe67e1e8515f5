//! Eligibility gating and admission probability scoring for rank-based college predictions.
//!
//! The engine is a pure, synchronous computation over records supplied by the caller:
//! [`eligibility`] decides which institutions an exam may be matched against, and
//! [`prediction`] turns a student's rank plus historical cutoffs into ranked candidates.

pub mod config;
pub mod domain;
pub mod eligibility;
pub mod error;
pub mod exams;
pub mod matching;
pub mod prediction;
pub mod records;
pub mod telemetry;

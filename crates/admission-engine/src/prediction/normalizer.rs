/// Yearly growth of rank numbers as candidate pools expand.
pub const DEFAULT_INFLATION_FACTOR: f64 = 1.05;

/// Projects historical cutoff ranks onto a target year with compounding inflation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankNormalizer {
    factor: f64,
}

impl Default for RankNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_INFLATION_FACTOR)
    }
}

impl RankNormalizer {
    pub fn new(factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            DEFAULT_INFLATION_FACTOR
        };

        Self { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// `round(rank * factor^(target_year - cutoff_year))`.
    ///
    /// Non-positive ranks and same-year or backward projections are returned unchanged.
    pub fn normalize(&self, cutoff_rank: i64, cutoff_year: i32, target_year: i32) -> i64 {
        if cutoff_rank <= 0 || target_year <= cutoff_year {
            return cutoff_rank;
        }

        let years = i64::from(target_year) - i64::from(cutoff_year);
        let years = i32::try_from(years).unwrap_or(i32::MAX);
        let projected = cutoff_rank as f64 * self.factor.powi(years);
        projected.round().min(i64::MAX as f64) as i64
    }
}

/// Tunables for the aggregation stage.
#[derive(Debug, Clone)]
pub struct AggregationProfile {
    /// Categories kept before the rest collapse into one "Others" entry.
    pub top_categories: usize,
    /// Minimum parsed percentage for a term to count as high frequency.
    pub high_frequency_min: f64,
}

impl AggregationProfile {
    pub fn default_v1() -> Self {
        Self {
            top_categories: 6,
            high_frequency_min: 80.0,
        }
    }
}

impl Default for AggregationProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::model::UnifiedRecord;
use crate::model::profile::AggregationProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PercentageBucket {
    #[serde(rename = "100%")]
    Full,
    #[serde(rename = "80-99%")]
    From80,
    #[serde(rename = "60-79%")]
    From60,
    #[serde(rename = "40-59%")]
    From40,
    #[serde(rename = "20-39%")]
    From20,
    #[serde(rename = "0-19%")]
    Below20,
}

impl PercentageBucket {
    pub const DISPLAY_ORDER: [PercentageBucket; 6] = [
        PercentageBucket::Full,
        PercentageBucket::From80,
        PercentageBucket::From60,
        PercentageBucket::From40,
        PercentageBucket::From20,
        PercentageBucket::Below20,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PercentageBucket::Full => "100%",
            PercentageBucket::From80 => "80-99%",
            PercentageBucket::From60 => "60-79%",
            PercentageBucket::From40 => "40-59%",
            PercentageBucket::From20 => "20-39%",
            PercentageBucket::Below20 => "0-19%",
        }
    }

    /// `percent` is expected in [0, 100]; anything at or above 100 is `Full`.
    pub fn for_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            PercentageBucket::Full
        } else if percent >= 80.0 {
            PercentageBucket::From80
        } else if percent >= 60.0 {
            PercentageBucket::From60
        } else if percent >= 40.0 {
            PercentageBucket::From40
        } else if percent >= 20.0 {
            PercentageBucket::From20
        } else {
            PercentageBucket::Below20
        }
    }

    fn index(self) -> usize {
        match self {
            PercentageBucket::Full => 0,
            PercentageBucket::From80 => 1,
            PercentageBucket::From60 => 2,
            PercentageBucket::From40 => 3,
            PercentageBucket::From20 => 4,
            PercentageBucket::Below20 => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub range: PercentageBucket,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_terms: usize,
    pub unique_categories: usize,
    pub high_frequency_terms: usize,
    pub top_category: String,
}

#[derive(Debug, Clone)]
pub struct Stage4Output {
    pub distribution: Vec<CategoryCount>,
    pub histogram: Vec<BucketCount>,
    pub stats: StatsSummary,
    pub unparseable_percentages: usize,
}

/// First `<number>%` in the text, integer or decimal.
fn find_percent_token(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    for (pos, _) in text.match_indices('%') {
        let mut start = pos;
        while start > 0 && (bytes[start - 1].is_ascii_digit() || bytes[start - 1] == b'.') {
            start -= 1;
        }
        let mut token = &text[start..pos];
        // "v1.5%" style prefixes: keep the longest suffix that parses.
        while !token.is_empty() {
            if token.as_bytes()[0].is_ascii_digit() {
                if let Ok(v) = token.parse::<f64>() {
                    return Some(v);
                }
            }
            token = &token[1..];
        }
    }
    None
}

/// Percentage carried by a record's trial-percentage text, before clamping.
///
/// A `<number>%` token wins. Otherwise the whole text must be a bare number:
/// values above 1 are already percentages, values at or below 1 are fractions.
pub fn parse_percentage(text: &str) -> Option<f64> {
    if let Some(v) = find_percent_token(text) {
        return Some(v);
    }
    let bare = text.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    if bare > 1.0 { Some(bare) } else { Some(bare * 100.0) }
}

/// Clamped to [0, 100]; unparseable text reads as 0.
pub fn percentage_value(text: &str) -> f64 {
    parse_percentage(text).unwrap_or(0.0).clamp(0.0, 100.0)
}

/// Category occurrences in first-seen order.
pub fn count_categories(records: &[&UnifiedRecord]) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for record in records {
        match index.get(record.category.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(record.category.as_str(), counts.len());
                counts.push(CategoryCount {
                    category: record.category.clone(),
                    count: 1,
                });
            }
        }
    }
    counts
}

pub fn others_label(n_collapsed: usize) -> String {
    format!("Others ({n_collapsed} categories)")
}

/// Count-descending distribution. Ties keep first-seen order. Past `top_n`
/// entries the remainder collapses into one "Others" entry.
pub fn category_distribution(records: &[&UnifiedRecord], top_n: usize) -> Vec<CategoryCount> {
    let mut counts = count_categories(records);
    counts.sort_by(|a, b| b.count.cmp(&a.count));

    if counts.len() <= top_n {
        return counts;
    }
    let rest = counts.split_off(top_n);
    counts.push(CategoryCount {
        category: others_label(rest.len()),
        count: rest.iter().map(|c| c.count).sum(),
    });
    counts
}

/// Buckets in display order; empty buckets are left out.
pub fn percentage_histogram(records: &[&UnifiedRecord]) -> Vec<BucketCount> {
    let mut counts = [0usize; 6];
    for record in records {
        let bucket = PercentageBucket::for_percent(percentage_value(&record.trial_percentage));
        counts[bucket.index()] += 1;
    }
    PercentageBucket::DISPLAY_ORDER
        .iter()
        .filter(|b| counts[b.index()] > 0)
        .map(|&range| BucketCount {
            range,
            count: counts[range.index()],
        })
        .collect()
}

pub fn compute_stats(records: &[&UnifiedRecord], profile: &AggregationProfile) -> StatsSummary {
    let counts = count_categories(records);
    let high_frequency_terms = records
        .iter()
        .filter(|r| percentage_value(&r.trial_percentage) >= profile.high_frequency_min)
        .count();

    let mut top: Option<&CategoryCount> = None;
    for c in &counts {
        if top.is_none_or(|t| c.count > t.count) {
            top = Some(c);
        }
    }

    StatsSummary {
        total_terms: records.len(),
        unique_categories: counts.len(),
        high_frequency_terms,
        top_category: top
            .map(|c| c.category.clone())
            .unwrap_or_else(|| "N/A".to_string()),
    }
}

pub fn run_stage4(records: &[&UnifiedRecord], profile: &AggregationProfile) -> Stage4Output {
    let mut unparseable_percentages = 0usize;
    for record in records {
        if parse_percentage(&record.trial_percentage).is_none() {
            unparseable_percentages += 1;
            debug!(
                term = %record.term,
                text = %record.trial_percentage,
                "unparseable trial percentage read as 0"
            );
        }
    }

    Stage4Output {
        distribution: category_distribution(records, profile.top_categories),
        histogram: percentage_histogram(records),
        stats: compute_stats(records, profile),
        unparseable_percentages,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_aggregate.rs"]
mod tests;

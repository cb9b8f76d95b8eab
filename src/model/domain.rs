use std::fmt;

use serde::Serialize;

/// Medical area a dataset belongs to. Each domain has its own dataset file and
/// its own label vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Neurology,
    Oncology,
}

const NEUROLOGY_LABELS: &[&str] = &[
    "Alzheimer's Disease",
    "Parkinson's Disease",
    "Epilepsy",
    "Multiple Sclerosis",
    "ALS",
    "Huntington's Disease",
];

const ONCOLOGY_LABELS: &[&str] = &["Lung Cancer", "Breast Cancer", "Blood Cancer", "Skin Cancer"];

impl Domain {
    pub fn all() -> &'static [Domain] {
        &[Domain::Neurology, Domain::Oncology]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Neurology => "neurology",
            Domain::Oncology => "oncology",
        }
    }

    /// Capitalised stem used for dataset file names and page titles.
    pub fn title(self) -> &'static str {
        match self {
            Domain::Neurology => "Neurology",
            Domain::Oncology => "Oncology",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Domain::Neurology => "Neurological Disorders",
            Domain::Oncology => "Cancer Types",
        }
    }

    /// Table column heading for the condition field.
    pub fn condition_heading(self) -> &'static str {
        match self {
            Domain::Neurology => "Disorder",
            Domain::Oncology => "Cancer Type",
        }
    }

    pub fn panel_heading(self) -> &'static str {
        match self {
            Domain::Neurology => "Neurological Disorder",
            Domain::Oncology => "Cancer Type",
        }
    }

    /// Sidebar vocabulary, in display order.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Domain::Neurology => NEUROLOGY_LABELS,
            Domain::Oncology => ONCOLOGY_LABELS,
        }
    }

    /// Label selected when switching to this domain.
    pub fn default_label(self) -> &'static str {
        self.labels()[0]
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use crate::model::Domain;

#[derive(Debug, Clone, Copy)]
pub struct TrialGroupDef {
    pub domain: Domain,
    pub label: &'static str,
    pub trials: &'static [&'static str],
}

const ALZHEIMERS: &[&str] = &[
    "CLARITY-AD",
    "EMERGE",
    "ENGAGE",
    "EXPEDITION3",
    "GRADUATE I",
    "GRADUATE II",
    "TRAILBLAZER-ALZ",
    "AMARANTH",
    "TAURIEL",
    "DIAN-TU",
    "A4 Study",
    "TOMMORROW",
];
const PARKINSONS: &[&str] = &[
    "SPARK",
    "STEADY-PD III",
    "SURE-PD3",
    "PROUD",
    "PASADENA",
    "BIIB054-201",
    "PRASINEZUMAB",
    "CINPANEMAB",
];
const EPILEPSY: &[&str] = &[
    "ELEVATE",
    "NAUTILUS",
    "YKP3089-E01",
    "REALIZE",
    "EPIMAG",
    "FREEDOM",
    "RESTORE-1",
];
const MULTIPLE_SCLEROSIS: &[&str] = &[
    "ASCLEPIOS I",
    "ASCLEPIOS II",
    "DECIDE",
    "OPERA I",
    "OPERA II",
    "LIBERTY",
    "OLYMPUS",
    "ORATORIO",
    "CLARITY",
    "ADVANCE",
];
const ALS: &[&str] = &[
    "CENTAUR",
    "PHOENIX",
    "HEALEY ALS",
    "VALOR",
    "FORTITUDE-ALS",
    "LIGHTHOUSE",
    "ATLAS",
    "COURAGE-ALS",
];
const HUNTINGTONS: &[&str] = &[
    "GENERATION HD1",
    "PRECISION-HD1",
    "PRECISION-HD2",
    "SIGNAL",
    "PROOF-HD",
    "VIBRANT-HD",
    "KINECT-HD",
    "LEGATO-HD",
    "MITIGATE-HD",
];

const LUNG: &[&str] = &[
    "KEYNOTE-189",
    "KEYNOTE-407",
    "IMpower150",
    "ADAURA",
    "FLAURA",
    "ALEX",
    "ALINA",
    "CROWN",
    "MARIPOSA",
    "KEYNOTE-042",
    "CheckMate 9LA",
    "IMpower130",
    "KEYNOTE-024",
    "TROPION-Lung01",
    "DESTINY-Lung02",
];
const BREAST: &[&str] = &[
    "KATHERINE",
    "APHINITY",
    "CLEOPATRA",
    "EMILIA",
    "DESTINY-Breast01",
    "MONARCH 2",
    "MONARCH 3",
    "PALOMA-2",
    "PALOMA-3",
    "KEYNOTE-355",
    "IMpassion130",
    "DESTINY-Breast03",
    "TROPiCS-02",
];
const BLOOD: &[&str] = &[
    "ZUMA-1",
    "JULIET",
    "SCHOLAR-1",
    "TRANSCEND",
    "CARTITUDE-1",
    "KarMMa",
    "LEGEND-2",
    "CARTITUDE-2",
    "ZUMA-2",
    "ELARA",
    "CARTITUDE-4",
    "MajesTEC-1",
];
const SKIN: &[&str] = &[
    "KEYNOTE-006",
    "CheckMate 067",
    "COMBI-d",
    "COMBI-v",
    "COLUMBUS",
    "BEACON",
    "RELATIVITY-047",
    "DREAMseq",
    "KEYNOTE-716",
    "CheckMate 238",
    "IMspire150",
    "KEYNOTE-054",
];

// The "<site> Cancer" labels used by the sidebar list the core subset of the
// short-label groups.
const LUNG_CANCER: &[&str] = LUNG.split_at(11).0;
const BREAST_CANCER: &[&str] = BREAST.split_at(10).0;
const BLOOD_CANCER: &[&str] = BLOOD.split_at(10).0;
const SKIN_CANCER: &[&str] = SKIN.split_at(10).0;

const BUILTIN_TRIAL_GROUPS: &[TrialGroupDef] = &[
    TrialGroupDef {
        domain: Domain::Neurology,
        label: "Alzheimer's Disease",
        trials: ALZHEIMERS,
    },
    TrialGroupDef {
        domain: Domain::Neurology,
        label: "Parkinson's Disease",
        trials: PARKINSONS,
    },
    TrialGroupDef {
        domain: Domain::Neurology,
        label: "Epilepsy",
        trials: EPILEPSY,
    },
    TrialGroupDef {
        domain: Domain::Neurology,
        label: "Multiple Sclerosis",
        trials: MULTIPLE_SCLEROSIS,
    },
    TrialGroupDef {
        domain: Domain::Neurology,
        label: "ALS",
        trials: ALS,
    },
    TrialGroupDef {
        domain: Domain::Neurology,
        label: "Huntington's Disease",
        trials: HUNTINGTONS,
    },
    TrialGroupDef {
        domain: Domain::Oncology,
        label: "Lung",
        trials: LUNG,
    },
    TrialGroupDef {
        domain: Domain::Oncology,
        label: "Breast",
        trials: BREAST,
    },
    TrialGroupDef {
        domain: Domain::Oncology,
        label: "Blood",
        trials: BLOOD,
    },
    TrialGroupDef {
        domain: Domain::Oncology,
        label: "Skin",
        trials: SKIN,
    },
    TrialGroupDef {
        domain: Domain::Oncology,
        label: "Lung Cancer",
        trials: LUNG_CANCER,
    },
    TrialGroupDef {
        domain: Domain::Oncology,
        label: "Breast Cancer",
        trials: BREAST_CANCER,
    },
    TrialGroupDef {
        domain: Domain::Oncology,
        label: "Blood Cancer",
        trials: BLOOD_CANCER,
    },
    TrialGroupDef {
        domain: Domain::Oncology,
        label: "Skin Cancer",
        trials: SKIN_CANCER,
    },
];

/// ClinicalTrials.gov identifiers for trials with a known registry entry.
const REGISTRY_IDS: &[(&str, &str)] = &[
    ("CLARITY-AD", "NCT03887455"),
    ("EMERGE", "NCT02484547"),
    ("ENGAGE", "NCT02477800"),
    ("TRAILBLAZER-ALZ", "NCT03367403"),
    ("A4 Study", "NCT02008357"),
    ("ASCLEPIOS I", "NCT02792218"),
    ("ASCLEPIOS II", "NCT02792231"),
    ("OPERA I", "NCT01247324"),
    ("OPERA II", "NCT01412333"),
    ("ORATORIO", "NCT01194570"),
    ("CENTAUR", "NCT03127514"),
    ("VALOR", "NCT02623699"),
    ("GENERATION HD1", "NCT03761849"),
    ("KEYNOTE-189", "NCT02578680"),
    ("KEYNOTE-407", "NCT02775435"),
    ("IMpower150", "NCT02366143"),
    ("ADAURA", "NCT02511106"),
    ("FLAURA", "NCT02296125"),
    ("ALEX", "NCT02075840"),
    ("CROWN", "NCT03052608"),
    ("KEYNOTE-042", "NCT02220894"),
    ("CheckMate 9LA", "NCT03215706"),
    ("KEYNOTE-024", "NCT02142738"),
    ("KATHERINE", "NCT01772472"),
    ("APHINITY", "NCT01358877"),
    ("CLEOPATRA", "NCT00567190"),
    ("EMILIA", "NCT00829166"),
    ("MONARCH 2", "NCT02107703"),
    ("MONARCH 3", "NCT02246621"),
    ("PALOMA-2", "NCT01740427"),
    ("PALOMA-3", "NCT01942135"),
    ("KEYNOTE-355", "NCT02819518"),
    ("DESTINY-Breast03", "NCT03529110"),
    ("ZUMA-1", "NCT02348216"),
    ("JULIET", "NCT02445248"),
    ("TRANSCEND", "NCT02631044"),
    ("CARTITUDE-1", "NCT03548207"),
    ("KarMMa", "NCT03361748"),
    ("ZUMA-2", "NCT02601313"),
    ("ELARA", "NCT03568461"),
    ("KEYNOTE-006", "NCT01866319"),
    ("CheckMate 067", "NCT01844505"),
    ("COMBI-d", "NCT01584648"),
    ("COMBI-v", "NCT01597908"),
    ("COLUMBUS", "NCT01909453"),
    ("RELATIVITY-047", "NCT03470922"),
    ("CheckMate 238", "NCT02388906"),
    ("KEYNOTE-054", "NCT02362594"),
];

pub fn builtin_trial_groups() -> &'static [TrialGroupDef] {
    BUILTIN_TRIAL_GROUPS
}

pub fn builtin_registry_ids() -> &'static [(&'static str, &'static str)] {
    REGISTRY_IDS
}

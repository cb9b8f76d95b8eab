use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::KbError;
use crate::model::{Domain, RawRecord};

pub fn dataset_candidates(domain: Domain) -> [String; 4] {
    let title = domain.title();
    let lower = domain.as_str();
    [
        format!("{title}.json"),
        format!("{lower}.json"),
        format!("{title}.json.gz"),
        format!("{lower}.json.gz"),
    ]
}

pub fn find_dataset_path(input_dir: &Path, domain: Domain) -> Result<PathBuf, KbError> {
    let candidates = dataset_candidates(domain);
    for name in &candidates {
        let path = input_dir.join(name);
        if path.is_file() {
            return Ok(path);
        }
    }
    Err(KbError::MissingInput(format!(
        "no {} dataset in {} (looked for {})",
        domain,
        input_dir.display(),
        candidates.join(", ")
    )))
}

/// Reads a JSON array of raw records. Anything but a top-level array is
/// rejected; individual records tolerate missing keys.
pub fn parse_raw_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<RawRecord>, KbError> {
    let value: serde_json::Value = serde_json::from_reader(reader).map_err(|source| KbError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if !value.is_array() {
        return Err(KbError::InvalidInput(format!(
            "{} must contain a JSON array of records",
            path.display()
        )));
    }
    Vec::<RawRecord>::deserialize(value).map_err(|source| KbError::Json {
        path: path.to_path_buf(),
        source,
    })
}

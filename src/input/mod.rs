use std::path::{Path, PathBuf};

use tracing::info;

pub mod json;
pub mod reader;

use json::{find_dataset_path, parse_raw_records};
use reader::open_maybe_gz;

use crate::error::KbError;
use crate::model::{Domain, RawRecord};

#[derive(Debug, Clone)]
pub struct DatasetBundle {
    pub domain: Domain,
    pub path: PathBuf,
    pub raw: Vec<RawRecord>,
}

pub fn load_dataset(input_dir: &Path, domain: Domain) -> Result<DatasetBundle, KbError> {
    let path = find_dataset_path(input_dir, domain)?;
    info!(domain = %domain, path = %path.display(), "loading dataset");

    let reader = open_maybe_gz(&path)?;
    let raw = parse_raw_records(reader, &path)?;
    info!(domain = %domain, records = raw.len(), "dataset loaded");

    Ok(DatasetBundle { domain, path, raw })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

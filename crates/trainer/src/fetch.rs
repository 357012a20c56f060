//! One-time dataset download (cargo feature `fetch`).
//!
//! The dataset is public and static; a failed download is a fatal
//! [`BuildError`], never retried here.

use std::path::Path;

use tracing::info;

use crate::errors::BuildError;

/// Published raw-layout copy of the dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/ageron/handson-ml2/master/datasets/housing/housing.csv";

/// Download `url` to `dest` unless `dest` already exists.
pub fn fetch_dataset(url: &str, dest: &Path) -> Result<(), BuildError> {
    if dest.exists() {
        info!(path = %dest.display(), "dataset already present, skipping download");
        return Ok(());
    }

    info!(url, path = %dest.display(), "downloading dataset");

    let body = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(|resp| resp.text())
        .map_err(|err| BuildError::Dataset(format!("download of {url} failed: {err}")))?;

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|err| BuildError::Dataset(format!("cannot create {}: {err}", parent.display())))?;
    }
    std::fs::write(dest, body)
        .map_err(|err| BuildError::Dataset(format!("cannot write {}: {err}", dest.display())))?;

    Ok(())
}

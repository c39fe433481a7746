use std::fs::{self, DirEntry, ReadDir};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::QuestionBank;

pub fn read_data_dir(data_path: impl AsRef<Path>) -> Result<ReadDir> {
    let data_path = data_path.as_ref();
    let data_path = fs::canonicalize(data_path)
        .with_context(|| format!("cannot resolve data path {}", data_path.display()))?;
    let entries = fs::read_dir(data_path)?;

    Ok(entries)
}

pub fn read_data(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();

    if path.is_dir() {
        bail!("{} is a directory", path.display());
    };

    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

pub fn write_data(path: impl AsRef<Path>, data: String) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format!("{data}\n"))
        .with_context(|| format!("cannot write {}", path.display()))?;

    Ok(())
}

/// Formats every `.json` bank in `data_path`, sorted by key. Other entries
/// are skipped.
pub fn load_banks_and_write_formatted(data_path: impl AsRef<Path>) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    for dir_entry in read_data_dir(data_path)? {
        let dir_entry = dir_entry?;

        if !is_bank_file(&dir_entry)? {
            log::debug!("skipping {}", dir_entry.path().display());
            continue;
        }

        banks.push(QuestionBank::load_and_write_formatted(dir_entry.path())?);
    }

    banks.sort_by(|a, b| a.key.cmp(&b.key));

    Ok(banks)
}

fn is_bank_file(dir_entry: &DirEntry) -> Result<bool> {
    let path = dir_entry.path();

    Ok(dir_entry.file_type()?.is_file()
        && path.extension().and_then(|extension| extension.to_str()) == Some("json"))
}

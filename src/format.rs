use std::path::PathBuf;

use anyhow::Result;
use question_store::load_banks_and_write_formatted;

pub fn format(data_path: PathBuf) -> Result<()> {
    let banks = load_banks_and_write_formatted(&data_path)?;

    for bank in &banks {
        log::info!(
            "formatted {} ({} question(s), {})",
            bank.key,
            bank.questions.len(),
            bank.hash
        );
    }

    log::info!("{} bank(s) in {}", banks.len(), data_path.display());

    Ok(())
}

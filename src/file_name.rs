use std::path::PathBuf;

use crate::{config::LogFileConfig, errors::Error};

/// Not `.log`: version control usually ignores those, and these files are
/// committed for comparison against later runs. Existing logs depend on it.
pub const TESTLOG_EXTENSION: &str = ".testlog";

/// Builds `<base_name>[.<locale>]<suffix>.testlog` under the configured directory
pub fn log_file_name(
    base_name: &str,
    has_locale_specific_data: bool,
    config: &LogFileConfig,
) -> Result<PathBuf, Error> {
    if base_name.is_empty() {
        return Err(Error::EmptyBaseName);
    }

    let mut file_name = String::from(base_name);

    if has_locale_specific_data {
        file_name.push('.');
        file_name.push_str(config.locale().name());
    }

    file_name.push_str(config.suffix.segment());
    file_name.push_str(TESTLOG_EXTENSION);

    Ok(match config.directory() {
        Some(directory) => directory.join(file_name),
        None => PathBuf::from(file_name),
    })
}

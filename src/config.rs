use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{locale::Locale, suffix::Suffix};

/// Settings shared by every log file of a test run.
///
/// Built once by the harness and passed to each [`crate::LogFile::open`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFileConfig {
    pub suffix: Suffix,
    /// Overrides the host's default locale when set
    pub locale: Option<Locale>,
    /// Directory the log files are created in, the working directory if unset
    pub directory: Option<PathBuf>,
}

impl LogFileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suffix(mut self, suffix: Option<&str>) -> Self {
        self.suffix.set(suffix);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// The configured locale, or the host's current default
    pub fn locale(&self) -> Locale {
        match &self.locale {
            Some(locale) => locale.clone(),
            None => Locale::host(),
        }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = LogFileConfig::new()
            .with_suffix(Some("v2"))
            .with_locale(Locale::new("fr_FR"))
            .with_directory("logs");

        assert_eq!(config.suffix.segment(), ".v2");
        assert_eq!(config.locale().name(), "fr_FR");
        assert_eq!(config.directory(), Some(Path::new("logs")));
    }

    #[test]
    fn test_locale_falls_back_to_host() {
        assert_eq!(LogFileConfig::new().locale(), Locale::host());
    }

    #[test]
    fn test_survives_postcard_encoding() {
        let config = LogFileConfig::new()
            .with_suffix(Some("nightly"))
            .with_locale(Locale::new("en_GB"));

        let bytes = postcard::to_allocvec(&config).unwrap();
        let decoded: LogFileConfig = postcard::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, config);
    }
}

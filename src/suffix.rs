use serde::{Deserialize, Serialize};

const SEPARATOR: char = '.';

/// Optional segment inserted into every log file name before the extension.
///
/// The segment is stored already prefixed with a period, so it can be
/// concatenated as-is. An unset suffix is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct Suffix {
    segment: String,
}

impl Suffix {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(value: Option<&str>) -> Self {
        let mut suffix = Self::none();
        suffix.set(value);
        suffix
    }

    /// Overwrites the stored suffix. `None` clears it.
    pub fn set(&mut self, value: Option<&str>) {
        self.segment = match value {
            Some(value) => format!("{SEPARATOR}{value}"),
            None => String::new(),
        };
    }

    /// The period-prefixed segment, or `""` when unset
    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }
}

impl From<Option<String>> for Suffix {
    fn from(value: Option<String>) -> Self {
        Suffix::new(value.as_deref())
    }
}

impl From<Suffix> for Option<String> {
    fn from(suffix: Suffix) -> Self {
        suffix
            .segment
            .strip_prefix(SEPARATOR)
            .map(|value| value.to_owned())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Consulted in order, the first non-empty value wins
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Used when no locale is configured, or for the "C"/"POSIX" locales
const POSIX_LOCALE: &str = "en_US_POSIX";

/// A canonical locale name, such as `en_US`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale {
    name: String,
}

impl Locale {
    /// Wraps an already canonical name without touching it
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The current default locale of the host environment
    pub fn host() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the default locale from the given variable lookup
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let posix_id = LOCALE_VARIABLES
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.is_empty())
            .unwrap_or_default();

        Self::from_posix_id(&posix_id)
    }

    /// Canonicalizes a POSIX locale id (`language[_REGION][.codeset][@modifier]`).
    ///
    /// The codeset is dropped and the modifier becomes an upper-case variant,
    /// so `de_DE.UTF-8@euro` is named `de_DE_EURO`.
    pub fn from_posix_id(posix_id: &str) -> Self {
        let posix_id = posix_id.trim();
        let (main, modifier) = match posix_id.split_once('@') {
            Some((main, modifier)) => (main, Some(modifier)),
            None => (posix_id, None),
        };
        let main = main.split_once('.').map_or(main, |(main, _codeset)| main);

        if main.is_empty() || main == "C" || main == "POSIX" {
            return Self::new(POSIX_LOCALE);
        }

        let mut name = String::with_capacity(posix_id.len());
        for (i, part) in main.split(['_', '-']).enumerate() {
            if i == 0 {
                name.push_str(&part.to_ascii_lowercase());
                continue;
            }

            name.push('_');
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                // Script subtag, e.g. Hant
                let (first, rest) = part.split_at(1);
                name.push_str(&first.to_ascii_uppercase());
                name.push_str(&rest.to_ascii_lowercase());
            } else {
                name.push_str(&part.to_ascii_uppercase());
            }
        }

        if let Some(modifier) = modifier {
            let modifier = modifier
                .split_once('.')
                .map_or(modifier, |(modifier, _codeset)| modifier);
            let variant = match modifier {
                "nynorsk" => "NY".to_owned(),
                other => other.to_ascii_uppercase(),
            };

            // A variant without a region keeps an empty region slot
            name.push_str(if name.contains('_') { "_" } else { "__" });
            name.push_str(&variant);
        }

        Self::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_codeset_is_dropped() {
        assert_eq!(Locale::from_posix_id("en_US.UTF-8").name(), "en_US");
        assert_eq!(Locale::from_posix_id("fr_CA").name(), "fr_CA");
    }

    #[test]
    fn test_case_is_normalized() {
        assert_eq!(Locale::from_posix_id("EN_us").name(), "en_US");
        assert_eq!(Locale::from_posix_id("zh-hant-tw").name(), "zh_Hant_TW");
    }

    #[test]
    fn test_posix_locales() {
        assert_eq!(Locale::from_posix_id("").name(), POSIX_LOCALE);
        assert_eq!(Locale::from_posix_id("C").name(), POSIX_LOCALE);
        assert_eq!(Locale::from_posix_id("C.UTF-8").name(), POSIX_LOCALE);
        assert_eq!(Locale::from_posix_id("POSIX").name(), POSIX_LOCALE);
    }

    #[test]
    fn test_modifier_becomes_variant() {
        assert_eq!(Locale::from_posix_id("de_DE@euro").name(), "de_DE_EURO");
        assert_eq!(Locale::from_posix_id("de_DE.ISO-8859-15@euro").name(), "de_DE_EURO");
        assert_eq!(Locale::from_posix_id("no_NO@nynorsk").name(), "no_NO_NY");
        assert_eq!(Locale::from_posix_id("aa@b").name(), "aa__B");
    }

    #[test]
    fn test_variable_precedence() {
        let lookup = lookup_in(&[("LANG", "de_DE.UTF-8"), ("LC_MESSAGES", "fr_FR")]);
        assert_eq!(Locale::from_lookup(lookup).name(), "fr_FR");

        let lookup = lookup_in(&[("LANG", "de_DE.UTF-8"), ("LC_ALL", "ja_JP.eucJP")]);
        assert_eq!(Locale::from_lookup(lookup).name(), "ja_JP");
    }

    #[test]
    fn test_empty_variables_are_skipped() {
        let lookup = lookup_in(&[("LC_ALL", ""), ("LANG", "en_GB.UTF-8")]);
        assert_eq!(Locale::from_lookup(lookup).name(), "en_GB");

        assert_eq!(Locale::from_lookup(lookup_in(&[])).name(), POSIX_LOCALE);
    }
}

/// because of we don't have a lot of resource which need to i18n,
/// so we just use a simple way to i18n
pub mod en_us;
pub mod ru_ru;

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// i18n language type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageType {
    #[default]
    EnUS,
    RuRU,
}

impl LanguageType {
    /// Picks the resource matching this language.
    pub fn pick(self, en_us: &'static str, ru_ru: &'static str) -> &'static str {
        match self {
            LanguageType::EnUS => en_us,
            LanguageType::RuRU => ru_ru,
        }
    }
}

impl Display for LanguageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageType::EnUS => write!(f, "en_us"),
            LanguageType::RuRU => write!(f, "ru_ru"),
        }
    }
}

impl FromStr for LanguageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en_us" => Ok(LanguageType::EnUS),
            "ru_ru" => Ok(LanguageType::RuRU),
            _ => Err(format!("Invalid language type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_its_name() {
        for lang in [LanguageType::EnUS, LanguageType::RuRU] {
            assert_eq!(lang.to_string().parse::<LanguageType>(), Ok(lang));
        }
        assert!("zh_cn".parse::<LanguageType>().is_err());
    }

    fn keys(resource: &str) -> Vec<&str> {
        let mut keys: Vec<_> = resource
            .lines()
            .filter_map(|line| line.split_once(" = ").map(|(key, _)| key.trim()))
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn every_resource_has_the_same_keys_in_both_languages() {
        let pairs = [
            (en_us::NAV, ru_ru::NAV),
            (en_us::ALERT, ru_ru::ALERT),
            (en_us::CONFIRM, ru_ru::CONFIRM),
            (en_us::ADMIN, ru_ru::ADMIN),
            (en_us::USERS_TABLE, ru_ru::USERS_TABLE),
            (en_us::USER_FORM, ru_ru::USER_FORM),
            (en_us::PROFILE, ru_ru::PROFILE),
            (en_us::PROFILE_FORM, ru_ru::PROFILE_FORM),
            (en_us::ROLES, ru_ru::ROLES),
        ];
        for (en, ru) in pairs {
            assert_eq!(keys(en), keys(ru));
        }
    }

    #[test]
    fn pick_matches_language() {
        assert_eq!(LanguageType::RuRU.pick(en_us::NAV, ru_ru::NAV), ru_ru::NAV);
    }
}

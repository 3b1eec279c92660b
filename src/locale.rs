use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Locales a person record can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    EnGb,
    EnUs,
    CsCz,
    Fr,
    De,
}

impl Locale {
    pub const ALL: [Locale; 5] = [
        Locale::EnGb,
        Locale::EnUs,
        Locale::CsCz,
        Locale::Fr,
        Locale::De,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnGb => "en_gb",
            Locale::EnUs => "en_us",
            Locale::CsCz => "cs_cz",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    /// Two letter country code written to `address.country`.
    pub fn country_code(self) -> &'static str {
        match self {
            Locale::EnGb => "gb",
            Locale::EnUs => "us",
            Locale::CsCz => "cz",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag() == s)
            .ok_or_else(|| format!("Unknown locale '{}'", s))
    }
}

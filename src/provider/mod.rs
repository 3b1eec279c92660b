//! Locale aware fake data for person records.
//!
//! Providers are plain tables of names, places and formatting patterns. All
//! randomness comes from the RNG handed in by the caller, so a seeded RNG
//! yields reproducible records.

use rand::{Rng, RngCore, seq::IndexedRandom};

use crate::{locale::Locale, models::Sex};

mod cs_cz;
mod de;
mod en_gb;
mod en_us;
mod fr;

/// Source of randomized field values for one locale.
pub trait PersonProvider {
    fn locale(&self) -> Locale;

    fn sex(&self, rng: &mut dyn RngCore) -> Sex;

    fn first_name(&self, rng: &mut dyn RngCore, sex: Sex) -> String;

    fn last_name(&self, rng: &mut dyn RngCore, sex: Sex) -> String;

    /// Builds an email address out of the given names.
    fn email(&self, rng: &mut dyn RngCore, first_name: &str, last_name: &str) -> String;

    fn zip_code(&self, rng: &mut dyn RngCore) -> String;

    fn city(&self, rng: &mut dyn RngCore) -> String;

    /// Street level address line, e.g. `221 Baker Street` or `Dlouhá 12`.
    fn street_address(&self, rng: &mut dyn RngCore) -> String;
}

/// Where the building number goes relative to the street name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StreetOrder {
    NumberFirst,
    NumberLast,
}

#[derive(Debug)]
pub(crate) struct LocaleData {
    pub male_first_names: &'static [&'static str],
    pub female_first_names: &'static [&'static str],
    pub male_last_names: &'static [&'static str],
    pub female_last_names: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub streets: &'static [&'static str],
    pub street_order: StreetOrder,
    /// `#` is replaced by a digit.
    pub building_numbers: &'static [&'static str],
    /// `#` is replaced by a digit, `?` by an upper case letter.
    pub zip_codes: &'static [&'static str],
    pub email_domains: &'static [&'static str],
}

/// Provider backed by the built-in tables of a locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleProvider {
    locale: Locale,
    data: &'static LocaleData,
}

impl LocaleProvider {
    pub fn new(locale: Locale) -> Self {
        let data = match locale {
            Locale::EnGb => &en_gb::DATA,
            Locale::EnUs => &en_us::DATA,
            Locale::CsCz => &cs_cz::DATA,
            Locale::Fr => &fr::DATA,
            Locale::De => &de::DATA,
        };

        Self { locale, data }
    }
}

impl PersonProvider for LocaleProvider {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn sex(&self, rng: &mut dyn RngCore) -> Sex {
        if rng.random_bool(0.5) {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    fn first_name(&self, rng: &mut dyn RngCore, sex: Sex) -> String {
        let names = match sex {
            Sex::Female => self.data.female_first_names,
            Sex::Male => self.data.male_first_names,
        };
        pick(names, rng).to_string()
    }

    fn last_name(&self, rng: &mut dyn RngCore, sex: Sex) -> String {
        let names = match sex {
            Sex::Female => self.data.female_last_names,
            Sex::Male => self.data.male_last_names,
        };
        pick(names, rng).to_string()
    }

    fn email(&self, rng: &mut dyn RngCore, first_name: &str, last_name: &str) -> String {
        let user_name = user_name(rng, first_name, last_name);
        let domain = pick(self.data.email_domains, rng);
        format!("{}@{}", user_name, domain)
    }

    fn zip_code(&self, rng: &mut dyn RngCore) -> String {
        let pattern = pick(self.data.zip_codes, rng);
        replace_symbols(pattern, rng)
    }

    fn city(&self, rng: &mut dyn RngCore) -> String {
        pick(self.data.cities, rng).to_string()
    }

    fn street_address(&self, rng: &mut dyn RngCore) -> String {
        let number = replace_symbols(pick(self.data.building_numbers, rng), rng);
        let street = pick(self.data.streets, rng);
        match self.data.street_order {
            StreetOrder::NumberFirst => format!("{} {}", number, street),
            StreetOrder::NumberLast => format!("{} {}", street, number),
        }
    }
}

fn pick(items: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str {
    // Tables are compile time constants and never empty.
    items.choose(rng).copied().unwrap_or_default()
}

/// Expands `#` into a digit and `?` into an upper case ASCII letter.
fn replace_symbols(pattern: &str, rng: &mut dyn RngCore) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.random_range(0..10u8)),
            '?' => char::from(b'A' + rng.random_range(0..26u8)),
            other => other,
        })
        .collect()
}

fn user_name(rng: &mut dyn RngCore, first_name: &str, last_name: &str) -> String {
    let separator = if rng.random_bool(0.5) { '.' } else { '_' };
    let raw = match rng.random_range(0..3) {
        0 => format!("{}{}", first_name, rng.random_range(0..100)),
        1 => format!("{}{}{}", first_name, separator, last_name),
        _ => format!(
            "{}{}{}{}",
            first_name,
            separator,
            last_name,
            rng.random_range(0..100)
        ),
    };

    let mut ascii = String::with_capacity(raw.len());
    for c in raw.chars() {
        if let Some(folded) = fold_to_ascii(c) {
            ascii.push_str(folded);
        } else if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-') {
            ascii.push(c);
        }
    }

    // Local part may not start or end with a dot.
    ascii.trim_matches('.').to_string()
}

fn fold_to_ascii(c: char) -> Option<&'static str> {
    let folded = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => "a",
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => "A",
        'č' | 'ç' | 'ć' => "c",
        'Č' | 'Ç' | 'Ć' => "C",
        'ď' => "d",
        'Ď' => "D",
        'é' | 'è' | 'ê' | 'ë' | 'ě' => "e",
        'É' | 'È' | 'Ê' | 'Ë' | 'Ě' => "E",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'Í' | 'Ì' | 'Î' | 'Ï' => "I",
        'ň' | 'ñ' => "n",
        'Ň' | 'Ñ' => "N",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => "o",
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => "O",
        'ř' => "r",
        'Ř' => "R",
        'š' | 'ś' => "s",
        'Š' | 'Ś' => "S",
        'ť' => "t",
        'Ť' => "T",
        'ú' | 'ù' | 'û' | 'ü' | 'ů' => "u",
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ů' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' | 'Ÿ' => "Y",
        'ž' | 'ź' | 'ż' => "z",
        'Ž' | 'Ź' | 'Ż' => "Z",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn is_email_safe(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-'))
    }

    #[test]
    fn every_table_is_populated() {
        for locale in Locale::ALL {
            let data = LocaleProvider::new(locale).data;
            for table in [
                data.male_first_names,
                data.female_first_names,
                data.male_last_names,
                data.female_last_names,
                data.cities,
                data.streets,
                data.building_numbers,
                data.zip_codes,
                data.email_domains,
            ] {
                assert!(!table.is_empty(), "empty table for {}", locale);
            }
        }
    }

    #[test]
    fn first_names_follow_sex() {
        let mut rng = rng();
        for locale in Locale::ALL {
            let provider = LocaleProvider::new(locale);
            for _ in 0..50 {
                let female = provider.first_name(&mut rng, Sex::Female);
                assert!(provider.data.female_first_names.contains(&female.as_str()));
                let male = provider.first_name(&mut rng, Sex::Male);
                assert!(provider.data.male_first_names.contains(&male.as_str()));
            }
        }
    }

    #[test]
    fn czech_female_last_names_use_feminine_forms() {
        let provider = LocaleProvider::new(Locale::CsCz);
        let mut rng = rng();
        for _ in 0..50 {
            let name = provider.last_name(&mut rng, Sex::Female);
            assert!(name.ends_with('á'), "{} is not a feminine surname", name);
        }
    }

    #[test]
    fn emails_are_ascii_and_use_locale_domains() {
        let mut rng = rng();
        for locale in Locale::ALL {
            let provider = LocaleProvider::new(locale);
            for _ in 0..50 {
                let email = provider.email(&mut rng, "Jiří", "Dvořák");
                let (user, domain) = email.split_once('@').unwrap();
                assert!(user.starts_with("Jiri"), "{}", email);
                assert!(is_email_safe(user), "{}", email);
                assert!(provider.data.email_domains.contains(&domain));
            }
        }
    }

    #[test]
    fn user_names_drop_spaces_and_apostrophes() {
        let mut rng = rng();
        for _ in 0..50 {
            let user = user_name(&mut rng, "Mary Ann", "O'Neil-Straße");
            assert!(user.starts_with("MaryAnn"), "{}", user);
            assert!(is_email_safe(&user), "{}", user);
            assert!(!user.starts_with('.') && !user.ends_with('.'));
        }
    }

    #[test]
    fn replace_symbols_fills_digits_and_letters() {
        let mut rng = rng();
        let code = replace_symbols("??# #??", &mut rng);
        let chars: Vec<char> = code.chars().collect();
        assert_eq!(chars.len(), 7);
        assert!(chars[0].is_ascii_uppercase() && chars[1].is_ascii_uppercase());
        assert!(chars[2].is_ascii_digit());
        assert_eq!(chars[3], ' ');
        assert!(chars[4].is_ascii_digit());
        assert!(chars[5].is_ascii_uppercase() && chars[6].is_ascii_uppercase());
    }

    #[test]
    fn zip_codes_match_locale_formats() {
        let mut rng = rng();
        for _ in 0..50 {
            let us = LocaleProvider::new(Locale::EnUs).zip_code(&mut rng);
            assert!(us.len() == 5 && us.chars().all(|c| c.is_ascii_digit()), "{}", us);

            let cz = LocaleProvider::new(Locale::CsCz).zip_code(&mut rng);
            assert_eq!(cz.len(), 6, "{}", cz);
            assert_eq!(cz.chars().nth(3), Some(' '));

            let de = LocaleProvider::new(Locale::De).zip_code(&mut rng);
            assert!(de.len() == 5 && de.chars().all(|c| c.is_ascii_digit()), "{}", de);
        }
    }

    #[test]
    fn street_address_order_depends_on_locale() {
        let mut rng = rng();
        let gb = LocaleProvider::new(Locale::EnGb).street_address(&mut rng);
        assert!(gb.starts_with(|c: char| c.is_ascii_digit()), "{}", gb);

        let de = LocaleProvider::new(Locale::De).street_address(&mut rng);
        assert!(de.ends_with(|c: char| c.is_ascii_digit()), "{}", de);
    }

    #[test]
    fn same_seed_gives_same_values() {
        let provider = LocaleProvider::new(Locale::Fr);
        let mut a = rng();
        let mut b = rng();
        assert_eq!(provider.city(&mut a), provider.city(&mut b));
        assert_eq!(provider.street_address(&mut a), provider.street_address(&mut b));
        assert_eq!(provider.zip_code(&mut a), provider.zip_code(&mut b));
    }
}

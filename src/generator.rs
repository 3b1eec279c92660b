use rand::{Rng, SeedableRng, rngs::StdRng};
use uuid::{Builder, Uuid};

use crate::{
    error::{GenerateError, Result},
    locale::Locale,
    models::{Address, Person},
    provider::{LocaleProvider, PersonProvider},
};

/// Produces independent synthetic person records.
pub struct Generator {
    rng: StdRng,
    providers: Vec<Box<dyn PersonProvider>>,
    sex_provider: Box<dyn PersonProvider>,
}

impl Generator {
    /// Generator over every supported locale. Without a seed the RNG is
    /// seeded from the operating system.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            rng,
            providers: Locale::ALL
                .into_iter()
                .map(|locale| Box::new(LocaleProvider::new(locale)) as Box<dyn PersonProvider>)
                .collect(),
            // Sex is always drawn from the en_gb provider, whatever the record's locale.
            sex_provider: Box::new(LocaleProvider::new(Locale::EnGb)),
        }
    }

    pub fn with_providers(
        rng: StdRng,
        providers: Vec<Box<dyn PersonProvider>>,
        sex_provider: Box<dyn PersonProvider>,
    ) -> Result<Self> {
        if providers.is_empty() {
            return Err(GenerateError::NoProviders);
        }

        Ok(Self {
            rng,
            providers,
            sex_provider,
        })
    }

    pub fn person(&mut self) -> Person {
        let provider = &self.providers[self.rng.random_range(0..self.providers.len())];
        let locale = provider.locale();

        let id = random_uuid(&mut self.rng);
        let sex = self.sex_provider.sex(&mut self.rng);
        let first_name = provider.first_name(&mut self.rng, sex);
        let last_name = provider.last_name(&mut self.rng, sex);
        let email = provider.email(&mut self.rng, &first_name, &last_name);

        let address = Address {
            country: locale.country_code().to_string(),
            zip_code: provider.zip_code(&mut self.rng),
            city: provider.city(&mut self.rng),
            line1: provider.street_address(&mut self.rng),
        };

        Person::new(id, &first_name, &last_name, &email, sex, address, locale)
    }

    /// Lazily yields `count` records.
    pub fn people(&mut self, count: usize) -> impl Iterator<Item = Person> + '_ {
        (0..count).map(move |_| self.person())
    }

    pub fn generate(&mut self, count: usize) -> Vec<Person> {
        tracing::debug!("Generating {} person records", count);
        self.people(count).collect()
    }
}

/// Version 4 UUID built from the generator's own RNG, so seeded runs repeat.
fn random_uuid(rng: &mut StdRng) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}

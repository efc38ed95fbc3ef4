//! Synthetic person records for filling the register.
//!
//! Records are produced by rejection sampling: a candidate is drawn, checked
//! with the same [`Validator`] that guards command `2`, and discarded if it
//! does not pass. The dataset is a block of generic records followed by a
//! block whose surnames start with a fixed letter and whose gender is the
//! first configured one, so the filtered query always has something to find.
//!
//! ```rust,no_run
//! use roster::libs::config::Config;
//! use roster::libs::generator::{DatasetGenerator, FakeNames};
//! use roster::libs::validator::Validator;
//!
//! let config = Config::default();
//! let validator = Validator::new(&config)?;
//! let mut generator = DatasetGenerator::new(&validator, &config.dataset, FakeNames);
//! let dataset = generator.generate_dataset()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::config::DatasetConfig;
use crate::libs::person::NewPerson;
use crate::libs::validator::Validator;
use chrono::{Duration, NaiveDate};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// How often bulk generation reports progress, in records.
const PROGRESS_STEP: usize = 100_000;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no valid person generated after {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },
}

/// The three parts of a generated name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

/// Source of random names.
pub trait NameSource {
    fn person_name<R: Rng + ?Sized>(&mut self, rng: &mut R, gender: &str) -> PersonName;
}

/// English names from the `fake` crate, with a patronymic built from a
/// father's first name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeNames;

impl NameSource for FakeNames {
    fn person_name<R: Rng + ?Sized>(&mut self, rng: &mut R, gender: &str) -> PersonName {
        let surname: String = LastName(EN).fake_with_rng(rng);
        let name: String = FirstName(EN).fake_with_rng(rng);
        let father: String = FirstName(EN).fake_with_rng(rng);
        let suffix = if gender == "female" { "ovna" } else { "ovich" };

        PersonName {
            surname,
            name,
            patronymic: format!("{father}{suffix}"),
        }
    }
}

pub struct DatasetGenerator<'a, N: NameSource> {
    validator: &'a Validator,
    dataset: &'a DatasetConfig,
    names: N,
    rng: ChaCha8Rng,
    rejected: u64,
}

impl<'a, N: NameSource> DatasetGenerator<'a, N> {
    pub fn new(validator: &'a Validator, dataset: &'a DatasetConfig, names: N) -> Self {
        let rng = match dataset.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        DatasetGenerator {
            validator,
            dataset,
            names,
            rng,
            rejected: 0,
        }
    }

    /// Candidates discarded by validation so far.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Draws one unvalidated candidate.
    ///
    /// With `start_letter` the first character of the surname is replaced.
    /// The birth date is uniform between the configured oldest date and the
    /// youngest date that still gives the minimum age.
    pub fn generate_person_data(&mut self, start_letter: Option<char>, forced_gender: Option<&str>) -> NewPerson {
        let gender = match forced_gender {
            Some(gender) => gender.to_string(),
            None => self.validator.genders().choose(&mut self.rng).cloned().unwrap_or_default(),
        };
        let person_name = self.names.person_name(&mut self.rng, &gender);
        let surname = match start_letter {
            Some(letter) => replace_first_letter(&person_name.surname, letter),
            None => person_name.surname,
        };
        let full_name = format!("{} {} {}", surname, person_name.name, person_name.patronymic);

        NewPerson {
            full_name,
            birth_date: self.random_birth_date(),
            gender,
        }
    }

    /// Generic records followed by the forced-prefix block.
    ///
    /// # Errors
    ///
    /// Only when `max_attempts` is configured and one slot exceeds it.
    pub fn generate_dataset(&mut self) -> Result<Vec<NewPerson>, GenerationError> {
        let total = self.dataset.generic_count + self.dataset.forced_count;
        let mut dataset = Vec::with_capacity(total);

        for _ in 0..self.dataset.generic_count {
            dataset.push(self.sample(None, None)?);
            report_progress(dataset.len(), total);
        }

        let forced_gender = self.validator.genders().first().cloned().unwrap_or_default();
        for _ in 0..self.dataset.forced_count {
            dataset.push(self.sample(Some(self.dataset.forced_letter), Some(&forced_gender))?);
            report_progress(dataset.len(), total);
        }
        tracing::info!(total, rejected = self.rejected, "dataset generated");

        Ok(dataset)
    }

    fn sample(&mut self, start_letter: Option<char>, forced_gender: Option<&str>) -> Result<NewPerson, GenerationError> {
        let mut attempts = 0;
        loop {
            let candidate = self.generate_person_data(start_letter, forced_gender);
            let birth_date = candidate.birth_date.format("%Y-%m-%d").to_string();
            if self.validator.validate_person_data(&candidate.full_name, &birth_date, &candidate.gender) {
                return Ok(candidate);
            }
            attempts += 1;
            self.rejected += 1;
            tracing::trace!(full_name = %candidate.full_name, "candidate rejected");
            if let Some(max_attempts) = self.dataset.max_attempts {
                if attempts >= max_attempts {
                    return Err(GenerationError::AttemptsExhausted { attempts });
                }
            }
        }
    }

    fn random_birth_date(&mut self) -> NaiveDate {
        let oldest = self.dataset.oldest_birth_date;
        let span = (self.validator.youngest_birth_date() - oldest).num_days().max(0);
        oldest + Duration::days(self.rng.random_range(0..=span))
    }
}

fn replace_first_letter(surname: &str, letter: char) -> String {
    let mut chars = surname.chars();
    chars.next();
    format!("{letter}{}", chars.as_str())
}

fn report_progress(done: usize, total: usize) {
    if done % PROGRESS_STEP == 0 {
        tracing::info!(done, total, "generating persons");
    }
}

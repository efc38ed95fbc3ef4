//! Command-line and person record validation.
//!
//! The validator answers yes/no questions and never fails: a malformed date
//! or an unknown gender simply makes the record invalid. The only fallible
//! step is construction, which compiles the configured patterns.

use crate::libs::config::{Config, FULL_NAME_MAX_LEN, GENDER_MAX_LEN};
use crate::libs::person::NewPerson;
use anyhow::Result;
use chrono::{Local, Months, NaiveDate};
use regex::Regex;

/// Recognized command codes, in dispatch order.
pub const COMMAND_CODES: [&str; 5] = ["1", "2", "3", "4", "5"];

/// The only command that takes arguments: a person record.
pub const INSERT_COMMAND_CODE: &str = "2";

pub struct Validator {
    min_age: u32,
    genders: Vec<String>,
    full_name_pattern: Regex,
    date_pattern: Regex,
    today: NaiveDate,
}

impl Validator {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_today(config, Local::now().date_naive())
    }

    /// Builds a validator that treats `today` as the current date.
    pub fn with_today(config: &Config, today: NaiveDate) -> Result<Self> {
        Ok(Validator {
            min_age: config.min_age,
            genders: config.genders.clone(),
            full_name_pattern: Regex::new(&config.full_name_pattern)?,
            date_pattern: Regex::new(&config.date_pattern)?,
            today,
        })
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    pub fn genders(&self) -> &[String] {
        &self.genders
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Latest birth date that still gives the minimum age today.
    ///
    /// Shifting back from 29 February lands on 28 February.
    pub fn youngest_birth_date(&self) -> NaiveDate {
        self.today
            .checked_sub_months(Months::new(self.min_age * 12))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Checks the shape of the raw command line (without the program name).
    ///
    /// The first argument must be a known command code. The insert command
    /// takes exactly one valid person record; every other command takes
    /// nothing.
    pub fn validate_inner_data<S: AsRef<str>>(&self, args: &[S]) -> bool {
        let Some((code, arguments)) = args.split_first() else {
            return false;
        };
        let code: &str = code.as_ref();
        if !COMMAND_CODES.contains(&code) {
            return false;
        }
        if code != INSERT_COMMAND_CODE {
            return arguments.is_empty();
        }
        match arguments {
            [full_name, birth_date, gender] => self.validate_person_data(full_name.as_ref(), birth_date.as_ref(), gender.as_ref()),
            _ => false,
        }
    }

    /// Checks one person record given as raw strings.
    pub fn validate_person_data(&self, full_name: &str, birth_date: &str, gender: &str) -> bool {
        let name = full_name.trim().to_lowercase();
        if name.chars().count() > FULL_NAME_MAX_LEN || !self.full_name_pattern.is_match(&name) {
            return false;
        }
        if !self.date_pattern.is_match(birth_date) {
            return false;
        }
        let Some(birth_date) = parse_date(birth_date) else {
            return false;
        };
        if birth_date > self.youngest_birth_date() {
            return false;
        }
        let gender = gender.to_lowercase();
        gender.chars().count() <= GENDER_MAX_LEN && self.genders.contains(&gender)
    }

    /// Validates and converts a record; `None` when it is invalid.
    pub fn parse_person(&self, full_name: &str, birth_date: &str, gender: &str) -> Option<NewPerson> {
        if !self.validate_person_data(full_name, birth_date, gender) {
            return None;
        }
        parse_date(birth_date).map(|date| NewPerson::new(full_name, date, gender))
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

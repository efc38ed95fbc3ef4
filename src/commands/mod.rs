//! Command-line entry point and command dispatch.
//!
//! The tool is driven by a numeric command code:
//!
//! | code | action |
//! |------|--------|
//! | `1`  | create the `person` table |
//! | `2`  | add one person: `2 <full_name> <birth_date> <gender>` |
//! | `3`  | list persons whose name and birth date pair is unique |
//! | `4`  | generate and insert the synthetic dataset |
//! | `5`  | timed query of first-gender persons with an `F` surname |
//!
//! Arguments go through the [`Validator`] gate before the store is touched.
//! Every command except `1` also requires the table to exist.

pub mod add;
pub mod create;
pub mod fill;
pub mod prefix;
pub mod unique;

use crate::{
    db::{
        error::StoreError,
        persons::{PersonRepository, Persons},
    },
    libs::{config::Config, messages::Message, person::NewPerson, validator::Validator},
    msg_debug, msg_error, msg_print,
};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command code: 1 create table, 2 add person, 3 unique persons, 4 fill, 5 timed query
    code: Option<String>,

    /// Person record for command 2: full name, birth date (YYYY-MM-DD), gender
    args: Vec<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(long)]
    db: Option<PathBuf>,

    /// File the query time of command 5 is appended to
    #[arg(long)]
    time_log: Option<PathBuf>,

    /// Seed for the synthetic dataset of command 4
    #[arg(long)]
    seed: Option<u64>,
}

/// How a run ended, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// No command code at all.
    NotExecuted,
    /// Unknown code or malformed arguments.
    Rejected,
    /// The table does not exist yet.
    SchemaMissing,
}

impl Outcome {
    /// Process exit status: 0 done, 1 missing table, 2 no or rejected arguments.
    pub fn status(self) -> u8 {
        match self {
            Outcome::Done => 0,
            Outcome::SchemaMissing => 1,
            Outcome::NotExecuted | Outcome::Rejected => 2,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// A validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateTable,
    AddPerson(NewPerson),
    UniquePersons,
    AutomaticFilling,
    GenderPrefixQuery,
}

impl Command {
    /// Maps already validated arguments to a command.
    pub fn parse<S: AsRef<str>>(validator: &Validator, inner_data: &[S]) -> Option<Command> {
        let (code, arguments) = inner_data.split_first()?;
        let code: &str = code.as_ref();
        match (code, arguments) {
            ("1", []) => Some(Command::CreateTable),
            ("2", [full_name, birth_date, gender]) => validator
                .parse_person(full_name.as_ref(), birth_date.as_ref(), gender.as_ref())
                .map(Command::AddPerson),
            ("3", []) => Some(Command::UniquePersons),
            ("4", []) => Some(Command::AutomaticFilling),
            ("5", []) => Some(Command::GenderPrefixQuery),
            _ => None,
        }
    }

    fn needs_schema(&self) -> bool {
        !matches!(self, Command::CreateTable)
    }

    fn execute<R: PersonRepository>(self, persons: &mut R, validator: &Validator, config: &Config) -> Result<()> {
        match self {
            Command::CreateTable => create::cmd(persons),
            Command::AddPerson(person) => add::cmd(persons, &person),
            Command::UniquePersons => unique::cmd(persons, validator.today()),
            Command::AutomaticFilling => fill::cmd(persons, validator, config),
            Command::GenderPrefixQuery => prefix::cmd(persons, config),
        }
    }
}

impl Cli {
    pub fn menu() -> Result<ExitCode> {
        let cli = Self::parse();
        Ok(cli.run()?.exit_code())
    }

    pub fn run(self) -> Result<Outcome> {
        let Some(code) = self.code else {
            msg_print!(Message::CommandNotExecuted);
            return Ok(Outcome::NotExecuted);
        };

        let config = Config::read(self.config.as_deref())?.with_overrides(self.db, self.time_log, self.seed);
        if let Some(path) = &self.config {
            msg_debug!(Message::ConfigLoaded(path.display().to_string()));
        }

        let mut inner_data = vec![code];
        inner_data.extend(self.args);
        dispatch(&inner_data, &config)
    }
}

/// Validates the raw arguments and runs one command against the store.
pub fn dispatch<S: AsRef<str>>(inner_data: &[S], config: &Config) -> Result<Outcome> {
    let validator = Validator::new(config)?;
    dispatch_with(inner_data, config, &validator)
}

/// [`dispatch`] with a caller-provided validator, which fixes "today".
pub fn dispatch_with<S: AsRef<str>>(inner_data: &[S], config: &Config, validator: &Validator) -> Result<Outcome> {
    let command = if validator.validate_inner_data(inner_data) {
        Command::parse(validator, inner_data)
    } else {
        None
    };
    let Some(command) = command else {
        let raw: Vec<&str> = inner_data.iter().map(|arg| arg.as_ref()).collect();
        msg_error!(Message::InvalidArguments(raw.join(" ")));
        msg_print!(Message::UnknownCommandHint);
        return Ok(Outcome::Rejected);
    };
    tracing::debug!(?command, db = %config.db_file.display(), "dispatching");

    let mut persons = Persons::open(&config.db_file)?;
    if command.needs_schema() {
        match persons.ensure_schema() {
            Ok(()) => {}
            Err(e @ StoreError::SchemaMissing { .. }) => {
                msg_error!(Message::SchemaMissing(e.to_string()));
                msg_print!(Message::SchemaMissingHint);
                persons.close()?;
                return Ok(Outcome::SchemaMissing);
            }
            Err(e) => return Err(e.into()),
        }
    }

    command.execute(&mut persons, validator, config)?;
    persons.close()?;

    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_status_codes() {
        assert_eq!(Outcome::Done.status(), 0);
        assert_eq!(Outcome::SchemaMissing.status(), 1);
        assert_eq!(Outcome::NotExecuted.status(), 2);
        assert_eq!(Outcome::Rejected.status(), 2);
    }
}

//! Database layer for the roster application.
//!
//! A single SQLite table, `person`, reached through `rusqlite`:
//!
//! ```text
//! person (
//!     id          INTEGER PRIMARY KEY AUTOINCREMENT,
//!     full_name   TEXT  -- at most 100 characters, title-cased
//!     birth_date  DATE  -- YYYY-MM-DD
//!     gender      TEXT  -- at most 10 characters, indexed by gender_index
//! )
//! ```
//!
//! Every write runs in its own transaction, so a failed bulk fill keeps the
//! rows committed before the failure.
//!
//! ```rust,no_run
//! use roster::db::persons::{PersonRepository, Persons};
//! use roster::libs::person::NewPerson;
//! use chrono::NaiveDate;
//!
//! let mut persons = Persons::open("list_of_employees.sqlite".as_ref())?;
//! persons.create_schema()?;
//! let birth_date = NaiveDate::from_ymd_opt(1990, 1, 31).unwrap();
//! persons.insert(&NewPerson::new("ivanov ivan ivanovich", birth_date, "male"))?;
//! # Ok::<(), roster::db::error::StoreError>(())
//! ```

/// Connection setup.
pub mod db;

/// Store error kinds the dispatcher matches on.
pub mod error;

/// The `person` table and its repository trait.
pub mod persons;

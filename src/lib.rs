//! # Roster - a small employee register
//!
//! A command-line utility that keeps a persisted table of person records
//! (full name, birth date, gender) in SQLite.
//!
//! ## Features
//!
//! - **Validation**: name and date patterns, minimum working age, known genders
//! - **Register**: table creation, single inserts, a listing of persons with a
//!   unique name and birth date pair
//! - **Synthetic Data**: a million generated persons plus a block of `F`
//!   surnames, rejection-sampled against the same validation rules
//! - **Timed Query**: filtered lookup whose duration is appended to `time.txt`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster::commands::Cli;
//!
//! fn main() -> anyhow::Result<std::process::ExitCode> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

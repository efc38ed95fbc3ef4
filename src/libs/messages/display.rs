//! Display implementation for roster application messages.
//!
//! All user-facing text lives here so that commands only ever pick a
//! [`Message`] variant and let the messaging macros route it.
//!
//! ## Message Categories
//!
//! - **Command Line Messages**: argument gate rejections
//! - **Schema Messages**: table creation and the missing-table hint
//! - **Person Messages**: insert confirmations and listing lines
//! - **Dataset Messages**: generation and bulk-insert progress
//! - **Timing Messages**: filtered query duration reports
//! - **Configuration Messages**: config file loading failures
//!
//! Listing lines are plain space-separated fields so that the output of
//! commands `3` and `5` stays easy to pipe into other tools:
//!
//! ```text
//! Fedorov Ivan Petrovich 1990-04-12 male 34
//! Fedorov Ivan Petrovich male
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === COMMAND LINE MESSAGES ===
            Message::CommandNotExecuted => "The command was not executed. Must be 1 or 4 arguments.".to_string(),
            Message::InvalidArguments(args) => format!("The command was not executed. Invalid arguments: {}", args),
            Message::UnknownCommandHint => {
                "Usage: roster <1|2|3|4|5> [full_name birth_date gender]\n  \
                 1 - create the table\n  \
                 2 - add a person, e.g. 2 \"ivanov ivan ivanovich\" 1990-01-31 male\n  \
                 3 - list persons with a unique name and birth date\n  \
                 4 - fill the table with synthetic persons\n  \
                 5 - timed query of 'F' surnames"
                    .to_string()
            }

            // === SCHEMA MESSAGES ===
            Message::TableCreated(table) => format!("Table '{}' is ready", table),
            Message::SchemaMissing(error) => format!("{}.", error),
            Message::SchemaMissingHint => "You should create a table with the command 1.".to_string(),

            // === PERSON MESSAGES ===
            Message::PersonAdded(name) => format!("Person '{}' added", name),
            Message::UniquePersonLine {
                full_name,
                birth_date,
                gender,
                age,
            } => format!("{} {} {} {}", full_name, birth_date, gender, age),
            Message::FilteredPersonLine { full_name, gender } => format!("{} {}", full_name, gender),

            // === DATASET MESSAGES ===
            Message::DatasetGenerating(total) => format!("Generating {} synthetic persons...", total),
            Message::DatasetGenerated(total, rejected) => {
                format!("Generated {} persons ({} candidates rejected by validation)", total, rejected)
            }
            Message::DatasetInserting(total) => format!("Inserting {} persons...", total),
            Message::DatasetInserted(total) => format!("Inserted {} persons", total),
            Message::DatasetProgress(done, total) => format!("{} / {}", done, total),

            // === TIMING MESSAGES ===
            Message::QueryTimeLogged(seconds, path) => format!("Query took {} s, appended to {}", seconds, path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigReadError(path) => format!("Failed to read configuration file {}", path),
            Message::ConfigParseError(details) => format!("Failed to parse configuration: {}", details),
            Message::ConfigNoGenders => "Configuration must list at least one gender".to_string(),
            Message::ConfigBadPattern(pattern) => format!("Invalid validation pattern: {}", pattern),

            // === GENERAL MESSAGES ===
            Message::OperationFailed(error) => format!("Operation failed: {}", error),
        };

        write!(f, "{}", text)
    }
}

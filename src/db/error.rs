use thiserror::Error;

/// Failures of the person store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The table was never created; command `1` has to run first.
    #[error("Table '{table}' does not exist")]
    SchemaMissing { table: &'static str },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

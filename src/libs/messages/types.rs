#[derive(Debug, Clone)]
pub enum Message {
    // === COMMAND LINE MESSAGES ===
    CommandNotExecuted,
    InvalidArguments(String), // raw arguments joined with spaces
    UnknownCommandHint,

    // === SCHEMA MESSAGES ===
    TableCreated(String),      // table name
    SchemaMissing(String),     // underlying store error
    SchemaMissingHint,

    // === PERSON MESSAGES ===
    PersonAdded(String), // stored full name
    UniquePersonLine {
        full_name: String,
        birth_date: String,
        gender: String,
        age: i32,
    },
    FilteredPersonLine {
        full_name: String,
        gender: String,
    },

    // === DATASET MESSAGES ===
    DatasetGenerating(usize),       // total records
    DatasetGenerated(usize, u64),   // records, rejected candidates
    DatasetInserting(usize),        // records
    DatasetInserted(usize),         // records
    DatasetProgress(usize, usize),  // done, total

    // === TIMING MESSAGES ===
    QueryTimeLogged(f64, String), // seconds, log path

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String),       // path
    ConfigReadError(String),    // path
    ConfigParseError(String),   // details
    ConfigNoGenders,
    ConfigBadPattern(String),   // pattern

    // === GENERAL MESSAGES ===
    OperationFailed(String), // error
}

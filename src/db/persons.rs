//! The `person` table and its repository.
//!
//! Every write and every query runs in its own transaction.

use super::db::Db;
use super::error::{StoreError, StoreResult};
use crate::libs::person::{NewPerson, Person};
use rusqlite::{params, Connection, Row};
use std::path::Path;

pub const TABLE_PERSON: &str = "person";

const SCHEMA_PERSON: &str = "CREATE TABLE IF NOT EXISTS person (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT CHECK (length(full_name) <= 100),
    birth_date DATE,
    gender TEXT CHECK (length(gender) <= 10)
)";
const INDEX_GENDER: &str = "CREATE INDEX IF NOT EXISTS gender_index ON person (gender)";
const SELECT_TABLE_EXISTS: &str = "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";
const INSERT_PERSON: &str = "INSERT INTO person (full_name, birth_date, gender) VALUES (?1, ?2, ?3)";
const COUNT_PERSONS: &str = "SELECT count(*) FROM person";
const SELECT_UNIQUE_PAIRS: &str = "SELECT id, full_name, birth_date, gender FROM person
    WHERE (full_name, birth_date) IN (
        SELECT full_name, birth_date FROM person
        GROUP BY full_name, birth_date
        HAVING count(*) = 1
    )
    ORDER BY full_name";
const SELECT_BY_GENDER_AND_PREFIX: &str = "SELECT id, full_name, birth_date, gender FROM person
    WHERE gender = ?1 AND substr(full_name, 1, length(?2)) = ?2";

/// Storage operations on person records.
pub trait PersonRepository {
    /// Creates the table and the gender index if they are missing.
    fn create_schema(&mut self) -> StoreResult<()>;

    /// Stores one record, normalized, in its own transaction. Returns the new id.
    fn insert(&mut self, person: &NewPerson) -> StoreResult<i64>;

    /// Records whose (full_name, birth_date) pair occurs exactly once,
    /// ordered by full_name.
    fn select_unique_pairs(&mut self) -> StoreResult<Vec<Person>>;

    /// Records with exactly `gender` whose name starts with `prefix`
    /// (case-sensitive).
    fn select_by_gender_and_prefix(&mut self, gender: &str, prefix: &str) -> StoreResult<Vec<Person>>;
}

pub struct Persons {
    conn: Connection,
}

impl Persons {
    pub fn new(db: Db) -> Self {
        Persons { conn: db.conn }
    }

    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Self::new(Db::open(path)?))
    }

    pub fn schema_exists(&self) -> StoreResult<bool> {
        let count: i64 = self.conn.query_row(SELECT_TABLE_EXISTS, [TABLE_PERSON], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Fails with [`StoreError::SchemaMissing`] when the table is absent.
    pub fn ensure_schema(&self) -> StoreResult<()> {
        if self.schema_exists()? {
            Ok(())
        } else {
            Err(StoreError::SchemaMissing { table: TABLE_PERSON })
        }
    }

    pub fn count(&self) -> StoreResult<i64> {
        Ok(self.conn.query_row(COUNT_PERSONS, [], |row| row.get(0))?)
    }

    pub fn close(self) -> StoreResult<()> {
        Db { conn: self.conn }.close()
    }

    fn select(&mut self, sql: &str, params: impl rusqlite::Params) -> StoreResult<Vec<Person>> {
        let tx = self.conn.transaction()?;
        let persons = {
            let mut stmt = tx.prepare(sql)?;
            let person_iter = stmt.query_map(params, person_from_row)?;
            let mut persons = Vec::new();
            for person in person_iter {
                persons.push(person?);
            }
            persons
        };
        tx.commit()?;

        Ok(persons)
    }
}

impl PersonRepository for Persons {
    fn create_schema(&mut self) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute(SCHEMA_PERSON, [])?;
        tx.execute(INDEX_GENDER, [])?;
        tx.commit()?;

        Ok(())
    }

    fn insert(&mut self, person: &NewPerson) -> StoreResult<i64> {
        let person = person.normalized();
        let tx = self.conn.transaction()?;
        tx.execute(INSERT_PERSON, params![person.full_name, person.birth_date, person.gender])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(id)
    }

    fn select_unique_pairs(&mut self) -> StoreResult<Vec<Person>> {
        self.select(SELECT_UNIQUE_PAIRS, [])
    }

    fn select_by_gender_and_prefix(&mut self, gender: &str, prefix: &str) -> StoreResult<Vec<Person>> {
        self.select(SELECT_BY_GENDER_AND_PREFIX, params![gender, prefix])
    }
}

fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        full_name: row.get(1)?,
        birth_date: row.get(2)?,
        gender: row.get(3)?,
    })
}

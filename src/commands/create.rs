use crate::{
    db::persons::{PersonRepository, TABLE_PERSON},
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;

/// Creates the `person` table. Safe to run on an existing store.
pub fn cmd<R: PersonRepository>(persons: &mut R) -> Result<()> {
    persons.create_schema()?;
    msg_success!(Message::TableCreated(TABLE_PERSON.to_string()));
    Ok(())
}

use crate::{
    db::persons::PersonRepository,
    libs::{messages::Message, person::NewPerson},
    msg_success,
};
use anyhow::Result;

/// Stores one person with a title-cased name and a lower-cased gender.
pub fn add_person<R: PersonRepository>(persons: &mut R, person: &NewPerson) -> Result<i64> {
    let id = persons.insert(person)?;
    tracing::debug!(id, "person inserted");
    Ok(id)
}

pub fn cmd<R: PersonRepository>(persons: &mut R, person: &NewPerson) -> Result<()> {
    add_person(persons, person)?;
    msg_success!(Message::PersonAdded(person.normalized().full_name));
    Ok(())
}

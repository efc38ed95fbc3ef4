use crate::{
    db::persons::PersonRepository,
    libs::{messages::Message, person::Person},
    msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;

/// Persons whose name and birth date pair appears exactly once, by name.
pub fn get_unique_persons<R: PersonRepository>(persons: &mut R) -> Result<Vec<Person>> {
    Ok(persons.select_unique_pairs()?)
}

/// Prints `name birth_date gender age` for every unique person.
pub fn cmd<R: PersonRepository>(persons: &mut R, today: NaiveDate) -> Result<()> {
    for person in get_unique_persons(persons)? {
        msg_print!(Message::UniquePersonLine {
            age: person.age_on(today),
            birth_date: person.birth_date.format("%Y-%m-%d").to_string(),
            full_name: person.full_name,
            gender: person.gender,
        });
    }
    Ok(())
}

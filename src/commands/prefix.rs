use crate::{
    db::persons::PersonRepository,
    libs::{config::Config, messages::Message, person::Person, timing},
    msg_debug, msg_print,
};
use anyhow::Result;

/// Surname prefix the timed query looks for.
pub const NAME_PREFIX: &str = "F";

/// Selects persons of the first configured gender whose name starts with
/// `F`, and appends the query time in seconds to the timing log.
pub fn get_by_gender_f<R: PersonRepository>(persons: &mut R, config: &Config) -> Result<Vec<Person>> {
    let gender = config.primary_gender();
    let (selected, elapsed) = timing::measure(|| persons.select_by_gender_and_prefix(gender, NAME_PREFIX));
    let selected = selected?;

    let seconds = timing::append(&config.time_log_file, elapsed)?;
    msg_debug!(Message::QueryTimeLogged(seconds, config.time_log_file.display().to_string()));

    Ok(selected)
}

/// Prints `name gender` for every match of [`get_by_gender_f`].
pub fn cmd<R: PersonRepository>(persons: &mut R, config: &Config) -> Result<()> {
    for person in get_by_gender_f(persons, config)? {
        msg_print!(Message::FilteredPersonLine {
            full_name: person.full_name,
            gender: person.gender,
        });
    }
    Ok(())
}

use crate::{
    db::persons::PersonRepository,
    libs::{
        config::Config,
        generator::{DatasetGenerator, FakeNames},
        messages::Message,
        person::NewPerson,
        validator::Validator,
    },
    msg_debug, msg_info, msg_success,
};
use anyhow::Result;

const PROGRESS_STEP: usize = 100_000;

/// Inserts the records one by one, each in its own transaction.
///
/// A failure stops the fill; everything inserted before it stays committed.
pub fn automatic_filling<R: PersonRepository>(persons: &mut R, dataset: &[NewPerson]) -> Result<usize> {
    for (index, person) in dataset.iter().enumerate() {
        persons.insert(person)?;
        let done = index + 1;
        if done % PROGRESS_STEP == 0 {
            tracing::info!(done, total = dataset.len(), "inserting persons");
            msg_debug!(Message::DatasetProgress(done, dataset.len()));
        }
    }
    Ok(dataset.len())
}

/// Generates the synthetic dataset and stores it.
pub fn cmd<R: PersonRepository>(persons: &mut R, validator: &Validator, config: &Config) -> Result<()> {
    let total = config.dataset.generic_count + config.dataset.forced_count;
    msg_info!(Message::DatasetGenerating(total));

    let mut generator = DatasetGenerator::new(validator, &config.dataset, FakeNames);
    let dataset = generator.generate_dataset()?;
    msg_info!(Message::DatasetGenerated(dataset.len(), generator.rejected()));

    msg_info!(Message::DatasetInserting(dataset.len()));
    let inserted = automatic_filling(persons, &dataset)?;
    msg_success!(Message::DatasetInserted(inserted));
    Ok(())
}

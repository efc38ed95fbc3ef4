#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::Parser;
    use roster::commands::{dispatch_with, fill, prefix, unique, Cli, Command, Outcome};
    use roster::db::persons::{PersonRepository, Persons};
    use roster::libs::config::{Config, DatasetConfig};
    use roster::libs::person::NewPerson;
    use roster::libs::validator::Validator;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommandTestContext {
        _temp_dir: TempDir,
        config: Config,
        validator: Validator,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config {
                db_file: temp_dir.path().join("list_of_employees.sqlite"),
                time_log_file: temp_dir.path().join("time.txt"),
                dataset: DatasetConfig {
                    generic_count: 40,
                    forced_count: 5,
                    seed: Some(7),
                    ..DatasetConfig::default()
                },
                ..Config::default()
            };
            let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            let validator = Validator::with_today(&config, today).unwrap();

            CommandTestContext {
                _temp_dir: temp_dir,
                config,
                validator,
            }
        }
    }

    impl CommandTestContext {
        fn run(&self, args: &[&str]) -> Outcome {
            dispatch_with(args, &self.config, &self.validator).unwrap()
        }

        fn persons(&self) -> Persons {
            Persons::open(&self.config.db_file).unwrap()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_rejects_bad_shapes_before_touching_store(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["0"]), Outcome::Rejected);
        assert_eq!(ctx.run(&["6"]), Outcome::Rejected);
        assert_eq!(ctx.run(&["1", "extra"]), Outcome::Rejected);
        assert_eq!(ctx.run(&["2"]), Outcome::Rejected);
        assert_eq!(ctx.run(&["2", "john q. public", "2000-01-01", "male"]), Outcome::Rejected);
        assert_eq!(ctx.run(&["2", "john public", "2000-01-01", "male"]), Outcome::Rejected);
        assert_eq!(ctx.run(&["2", "john quincy public", "2010-01-01", "male"]), Outcome::Rejected);
        assert!(!ctx.config.db_file.exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_commands_need_table(ctx: &mut CommandTestContext) {
        for code in ["3", "4", "5"] {
            assert_eq!(ctx.run(&[code]), Outcome::SchemaMissing);
        }
        assert_eq!(ctx.run(&["2", "john quincy public", "2000-01-01", "male"]), Outcome::SchemaMissing);
        assert!(!ctx.config.time_log_file.exists());

        assert_eq!(ctx.run(&["1"]), Outcome::Done);
        assert_eq!(ctx.run(&["1"]), Outcome::Done);
        assert_eq!(ctx.run(&["3"]), Outcome::Done);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_person_stores_title_case(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["1"]), Outcome::Done);
        assert_eq!(ctx.run(&["2", "john quincy public", "2000-01-01", "Male"]), Outcome::Done);

        let mut persons = ctx.persons();
        let stored = persons.select_unique_pairs().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].full_name, "John Quincy Public");
        assert_eq!(stored[0].birth_date, date(2000, 1, 1));
        assert_eq!(stored[0].gender, "male");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_person_accepts_single_letter_middle_name(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["1"]), Outcome::Done);
        assert_eq!(ctx.run(&["2", "john q public", "2000-01-01", "male"]), Outcome::Done);
        assert_eq!(ctx.run(&["2", "john q. public", "2000-01-01", "male"]), Outcome::Rejected);

        let mut persons = ctx.persons();
        let stored = persons.select_unique_pairs().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].full_name, "John Q Public");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_unique_listing_and_age(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["1"]), Outcome::Done);
        ctx.run(&["2", "ivanov ivan ivanovich", "2000-06-15", "male"]);
        ctx.run(&["2", "petrov petr petrovich", "1990-01-01", "male"]);
        ctx.run(&["2", "petrov petr petrovich", "1990-01-01", "male"]);

        let mut persons = ctx.persons();
        let listed = unique::get_unique_persons(&mut persons).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].full_name, "Ivanov Ivan Ivanovich");
        assert_eq!(listed[0].age_on(date(2024, 6, 14)), 23);
        assert_eq!(listed[0].age_on(ctx.validator.today()), 24);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_timed_query_appends_one_line_per_run(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["1"]), Outcome::Done);
        ctx.run(&["2", "fedorov ivan petrovich", "1980-01-01", "male"]);
        ctx.run(&["2", "fedorova anna petrovna", "1980-01-01", "female"]);

        assert_eq!(ctx.run(&["5"]), Outcome::Done);
        assert_eq!(ctx.run(&["5"]), Outcome::Done);

        let content = fs::read_to_string(&ctx.config.time_log_file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let seconds: f64 = line.parse().unwrap();
            assert!(seconds >= 0.0);
        }

        let mut persons = ctx.persons();
        let selected = prefix::get_by_gender_f(&mut persons, &ctx.config).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].full_name, "Fedorov Ivan Petrovich");
        assert_eq!(fs::read_to_string(&ctx.config.time_log_file).unwrap().lines().count(), 3);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_fill_inserts_whole_dataset(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["1"]), Outcome::Done);
        assert_eq!(ctx.run(&["4"]), Outcome::Done);

        let mut persons = ctx.persons();
        assert_eq!(persons.count().unwrap(), 45);

        let forced = persons.select_by_gender_and_prefix("male", "F").unwrap();
        assert!(forced.len() >= 5);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_fill_keeps_records_committed_before_failure(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["1"]), Outcome::Done);

        let overlong = format!("{} ivan ivanovich", "a".repeat(200));
        let dataset = [
            NewPerson::new("ivanov ivan ivanovich", date(1990, 1, 31), "male"),
            NewPerson::new(&overlong, date(1990, 1, 31), "male"),
            NewPerson::new("petrov petr petrovich", date(1985, 5, 5), "male"),
        ];

        let mut persons = ctx.persons();
        assert!(fill::automatic_filling(&mut persons, &dataset).is_err());
        assert_eq!(persons.count().unwrap(), 1);

        let stored = persons.select_unique_pairs().unwrap();
        assert_eq!(stored[0].full_name, "Ivanov Ivan Ivanovich");
    }

    #[test]
    fn test_parse_maps_codes() {
        let config = Config::default();
        let validator = Validator::with_today(&config, date(2024, 6, 15)).unwrap();

        assert_eq!(Command::parse(&validator, &["1"]), Some(Command::CreateTable));
        assert_eq!(Command::parse(&validator, &["3"]), Some(Command::UniquePersons));
        assert_eq!(Command::parse(&validator, &["4"]), Some(Command::AutomaticFilling));
        assert_eq!(Command::parse(&validator, &["5"]), Some(Command::GenderPrefixQuery));
        assert_eq!(
            Command::parse(&validator, &["2", "ivanov ivan ivanovich", "1990-01-31", "male"]),
            Some(Command::AddPerson(NewPerson::new("ivanov ivan ivanovich", date(1990, 1, 31), "male")))
        );
        assert_eq!(Command::parse(&validator, &["2", "ivanov", "1990-01-31", "male"]), None);
        assert_eq!(Command::parse::<&str>(&validator, &[]), None);
    }

    #[test]
    fn test_cli_without_code_is_not_executed() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert_eq!(cli.run().unwrap(), Outcome::NotExecuted);
    }

    #[test]
    fn test_cli_runs_against_given_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db = temp_dir.path().join("staff.sqlite");
        let db_arg = db.to_str().unwrap();

        let cli = Cli::try_parse_from(["roster", "--db", db_arg, "1"]).unwrap();
        assert_eq!(cli.run().unwrap(), Outcome::Done);

        let cli = Cli::try_parse_from(["roster", "--db", db_arg, "2", "ivanov ivan ivanovich", "1990-01-31", "male"]).unwrap();
        assert_eq!(cli.run().unwrap(), Outcome::Done);

        let cli = Cli::try_parse_from(["roster", "--db", db_arg, "7"]).unwrap();
        assert_eq!(cli.run().unwrap(), Outcome::Rejected);

        assert_eq!(Persons::open(&db).unwrap().count().unwrap(), 1);
    }
}

//! Person records and the age calculation.

use chrono::{Datelike, NaiveDate};

/// A stored person record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

/// A person record that has not been stored yet.
///
/// Values are kept as given; normalization (title-cased name, lower-cased
/// gender) happens on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

impl NewPerson {
    pub fn new(full_name: &str, birth_date: NaiveDate, gender: &str) -> Self {
        NewPerson {
            full_name: full_name.to_string(),
            birth_date,
            gender: gender.to_string(),
        }
    }

    /// Name and gender in the form they are stored in.
    pub fn normalized(&self) -> NewPerson {
        NewPerson {
            full_name: title_case(self.full_name.trim()),
            birth_date: self.birth_date,
            gender: self.gender.to_lowercase(),
        }
    }
}

impl Person {
    /// Age in full years on `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.birth_date, today)
    }
}

/// Calendar age: the year difference, minus one while this year's birthday
/// is still ahead.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let birthday_ahead = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    today.year() - birth_date.year() - i32::from(birthday_ahead)
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// A word starts after any non-alphabetic character, so hyphenated parts
/// are capitalized too: `anna-maria` becomes `Anna-Maria`.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_before_and_after_birthday() {
        let birth = date(2000, 6, 15);
        assert_eq!(age_on(birth, date(2024, 6, 14)), 23);
        assert_eq!(age_on(birth, date(2024, 6, 15)), 24);
        assert_eq!(age_on(birth, date(2024, 12, 31)), 24);
        assert_eq!(age_on(birth, date(2024, 1, 1)), 23);
    }

    #[test]
    fn leap_day_birthday() {
        let birth = date(2004, 2, 29);
        assert_eq!(age_on(birth, date(2021, 2, 28)), 16);
        assert_eq!(age_on(birth, date(2021, 3, 1)), 17);
    }

    #[test]
    fn title_case_words_and_hyphens() {
        assert_eq!(title_case("ivanov ivan ivanovich"), "Ivanov Ivan Ivanovich");
        assert_eq!(title_case("anna-maria petrova ivanovna"), "Anna-Maria Petrova Ivanovna");
        assert_eq!(title_case("FEDOROV oleg"), "Fedorov Oleg");
    }

    #[test]
    fn normalized_trims_and_lowercases_gender() {
        let person = NewPerson::new("  john quincy public ", date(1990, 1, 1), "MALE");
        let normalized = person.normalized();
        assert_eq!(normalized.full_name, "John Quincy Public");
        assert_eq!(normalized.gender, "male");
        assert_eq!(normalized.birth_date, person.birth_date);
    }
}

//! Fake personal-data source.
//!
//! The generator only depends on the [`FakeSource`] trait; [`UsFake`] is the
//! built-in US-locale implementation backed by constant pools.

use chrono::{Duration, Local, Months, NaiveDate};
use rand::Rng;

use crate::error::GenError;

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Andrew", "Paul", "Joshua",
    "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald", "Edward", "Jason", "Jeffrey",
    "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin",
    "Scott", "Brandon", "Benjamin", "Samuel",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
    "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly",
    "Emily", "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa", "Deborah",
    "Stephanie", "Rebecca", "Sharon", "Laura", "Cynthia", "Kathleen", "Amy", "Angela",
    "Shirley", "Anna", "Brenda", "Pamela", "Emma", "Nicole", "Helen",
];

const NEUTRAL_FIRST_NAMES: &[&str] = &[
    "Alex", "Avery", "Cameron", "Casey", "Charlie", "Dakota", "Drew", "Emerson", "Finley",
    "Harper", "Hayden", "Jamie", "Jordan", "Kendall", "Morgan", "Parker", "Quinn", "Riley",
    "Rowan", "Taylor",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park",
    "River", "Sunset", "Highland", "Jefferson", "Lincoln", "Madison", "Franklin", "Chestnut",
    "Walnut", "Spring",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Dr", "Ln", "Rd", "Ct", "Way"];

/// On-demand supplier of human-readable personal data.
///
/// Every call returns one independent value. No uniqueness is guaranteed;
/// globally unique identifiers are assigned by the batch generator, never by
/// this source.
pub trait FakeSource {
    /// # Errors
    /// Errors when the source cannot produce a value.
    fn male_first_name(&mut self) -> Result<String, GenError>;

    /// # Errors
    /// Errors when the source cannot produce a value.
    fn female_first_name(&mut self) -> Result<String, GenError>;

    /// # Errors
    /// Errors when the source cannot produce a value.
    fn neutral_first_name(&mut self) -> Result<String, GenError>;

    /// # Errors
    /// Errors when the source cannot produce a value.
    fn last_name(&mut self) -> Result<String, GenError>;

    /// # Errors
    /// Errors when the source cannot produce a value.
    fn street_address(&mut self) -> Result<String, GenError>;

    /// # Errors
    /// Errors when the source cannot produce a value.
    fn zip_code(&mut self) -> Result<String, GenError>;

    /// # Errors
    /// Errors when the source cannot produce a value.
    fn phone_number(&mut self) -> Result<String, GenError>;

    /// Uniform date draw from `start..=end`.
    ///
    /// # Errors
    /// Errors when the range is empty (`start > end`).
    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> Result<NaiveDate, GenError>;

    /// Birth date for someone aged within `min_age..=max_age` years today.
    ///
    /// # Errors
    /// Errors when the age window is empty.
    fn date_of_birth(&mut self, min_age: u32, max_age: u32) -> Result<NaiveDate, GenError>;

    /// # Errors
    /// Errors when the source cannot produce a value.
    fn national_id(&mut self) -> Result<String, GenError>;

    /// # Errors
    /// Errors when the source cannot produce a value.
    fn bank_account_number(&mut self) -> Result<String, GenError>;
}

/// US-locale fake data drawn from constant pools with the given RNG.
pub struct UsFake<R: Rng> {
    rng: R,
    today: NaiveDate,
}

impl<R: Rng> UsFake<R> {
    pub fn new(rng: R) -> Self {
        Self::with_today(rng, Local::now().date_naive())
    }

    /// Pins "today" for age calculations; used to make tests date-stable.
    pub fn with_today(rng: R, today: NaiveDate) -> Self {
        UsFake { rng, today }
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> String {
        pool[self.rng.gen_range(0..pool.len())].to_string()
    }
}

impl<R: Rng> FakeSource for UsFake<R> {
    fn male_first_name(&mut self) -> Result<String, GenError> {
        Ok(self.pick(MALE_FIRST_NAMES))
    }

    fn female_first_name(&mut self) -> Result<String, GenError> {
        Ok(self.pick(FEMALE_FIRST_NAMES))
    }

    fn neutral_first_name(&mut self) -> Result<String, GenError> {
        Ok(self.pick(NEUTRAL_FIRST_NAMES))
    }

    fn last_name(&mut self) -> Result<String, GenError> {
        Ok(self.pick(LAST_NAMES))
    }

    fn street_address(&mut self) -> Result<String, GenError> {
        let number: u32 = self.rng.gen_range(1..=9999);
        let street = self.pick(STREET_NAMES);
        let suffix = self.pick(STREET_SUFFIXES);
        Ok(format!("{} {} {}", number, street, suffix))
    }

    fn zip_code(&mut self) -> Result<String, GenError> {
        // Real assignable ZIPs start at 00501.
        Ok(format!("{:05}", self.rng.gen_range(501..=99950)))
    }

    fn phone_number(&mut self) -> Result<String, GenError> {
        let area: u32 = self.rng.gen_range(200..=999);
        let prefix: u32 = self.rng.gen_range(200..=999);
        let line: u32 = self.rng.gen_range(1000..=9999);
        Ok(format!("+1-{}-{}-{}", area, prefix, line))
    }

    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> Result<NaiveDate, GenError> {
        let span = (end - start).num_days();
        if span < 0 {
            return Err(GenError::SourceUnavailable(format!(
                "empty date range {} to {}",
                start, end
            )));
        }
        Ok(start + Duration::days(self.rng.gen_range(0..=span)))
    }

    fn date_of_birth(&mut self, min_age: u32, max_age: u32) -> Result<NaiveDate, GenError> {
        if min_age > max_age {
            return Err(GenError::SourceUnavailable(format!(
                "empty age window {} to {}",
                min_age, max_age
            )));
        }
        // Calendar years, not 365-day approximations: the youngest allowed
        // birth date is exactly `min_age` years before today, the oldest one
        // day past `max_age + 1` years before today.
        let latest = self.today - Months::new(12 * min_age);
        let earliest = self.today - Months::new(12 * (max_age + 1)) + Duration::days(1);
        self.date_between(earliest, latest)
    }

    fn national_id(&mut self) -> Result<String, GenError> {
        let area: u32 = self.rng.gen_range(100..=899);
        let group: u32 = self.rng.gen_range(10..=99);
        let serial: u32 = self.rng.gen_range(1000..=9999);
        Ok(format!("{:03}-{:02}-{:04}", area, group, serial))
    }

    fn bank_account_number(&mut self) -> Result<String, GenError> {
        let digits: String = (0..12)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10)))
            .collect();
        Ok(digits)
    }
}

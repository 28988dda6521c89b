//! Stochastic employee-record batch generation.
//!
//! [`RecordBatchGenerator`] turns a `(count, start_id)` request into a fully
//! populated batch whose cross-field invariants hold for every row: job
//! titles belong to their department, cities to their state, review dates
//! follow hire dates, and the employee level is derived from tenure. The id
//! range is threaded explicitly through calls so chunked callers can keep
//! ids contiguous without any hidden counter.

use chrono::{Duration, Local, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::{LogNormal, Normal, Poisson};

use crate::error::GenError;
use crate::fake::FakeSource;
use crate::record::{
    format_employee_id, Amount, Education, EmployeeLevel, EmployeeRecord, EmploymentStatus,
    Gender, Shift, WorkLocation, MAX_ID_SEQUENCE,
};
use crate::tables::{DEPARTMENT_TITLES, STATE_CITIES};

/// Hire dates are drawn uniformly from this many days before `as_of`.
pub const HIRE_WINDOW_DAYS: i64 = 5 * 365;
/// Reviews for long-tenured employees are at least this many days old.
pub const REVIEW_LAG_DAYS: i64 = 365;

pub const SALARY_FLOOR: f64 = 30_000.0;
pub const SALARY_CEILING: f64 = 200_000.0;

const MIN_EMPLOYEE_AGE: u32 = 18;
const MAX_EMPLOYEE_AGE: u32 = 65;

/// Location/spread of one education tier's salary draw.
///
/// Salaries are log-normal: `median` is the distribution median in dollars
/// and `sigma` the standard deviation of the underlying log-scale Gaussian.
#[derive(Debug, Clone, Copy)]
pub struct SalaryTier {
    pub median: f64,
    pub sigma: f64,
}

/// Per-education salary tiers, indexed in [`Education::ALL`] order.
#[derive(Debug, Clone)]
pub struct SalaryModel {
    tiers: [SalaryTier; 4],
}

impl SalaryModel {
    #[must_use]
    pub fn new(tiers: [SalaryTier; 4]) -> Self {
        SalaryModel { tiers }
    }

    #[must_use]
    pub fn tier(&self, education: Education) -> SalaryTier {
        self.tiers[education as usize]
    }
}

impl Default for SalaryModel {
    /// Medians 45k/60k/80k/100k with sigmas tuned so the dollar spread
    /// roughly matches 10k/12k/15k/20k per tier.
    fn default() -> Self {
        SalaryModel::new([
            SalaryTier {
                median: 45_000.0,
                sigma: 0.22,
            },
            SalaryTier {
                median: 60_000.0,
                sigma: 0.20,
            },
            SalaryTier {
                median: 80_000.0,
                sigma: 0.19,
            },
            SalaryTier {
                median: 100_000.0,
                sigma: 0.20,
            },
        ])
    }
}

/// Knobs the generator exposes; everything else is a fixed policy.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// The date all tenure math is computed against.
    pub as_of: NaiveDate,
    pub salary_model: SalaryModel,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            as_of: Local::now().date_naive(),
            salary_model: SalaryModel::default(),
        }
    }
}

/// Produces in-memory batches of employee records.
///
/// Stateless between calls apart from RNG advancement: the caller passes the
/// id offset in and gets the next unused one back.
pub struct RecordBatchGenerator<F: FakeSource, R: Rng> {
    fake: F,
    rng: R,
    config: GeneratorConfig,
    gender_dist: WeightedIndex<u32>,
    education_dist: WeightedIndex<u32>,
    status_dist: WeightedIndex<u32>,
    work_location_dist: WeightedIndex<u32>,
    shift_dist: WeightedIndex<u32>,
    salary_dists: [LogNormal<f64>; 4],
    performance_dist: Normal<f64>,
    bonus_dist: Normal<f64>,
    vacation_dist: Poisson<f64>,
    sick_dist: Poisson<f64>,
}

impl<F: FakeSource, R: Rng> RecordBatchGenerator<F, R> {
    /// Generator with the default configuration (today's date, built-in
    /// salary tiers).
    ///
    /// # Panics
    /// Only if the built-in constant distribution parameters were invalid,
    /// which they are not.
    pub fn new(fake: F, rng: R) -> Self {
        Self::with_config(fake, rng, GeneratorConfig::default())
            .expect("default configuration is valid")
    }

    /// # Errors
    /// Errors when the salary model contains a non-positive median or a
    /// negative sigma.
    pub fn with_config(fake: F, rng: R, config: GeneratorConfig) -> Result<Self, GenError> {
        let model = &config.salary_model;
        let salary_dists = [
            salary_dist(model.tier(Education::HighSchool))?,
            salary_dist(model.tier(Education::Professional))?,
            salary_dist(model.tier(Education::Master))?,
            salary_dist(model.tier(Education::PhD))?,
        ];
        Ok(RecordBatchGenerator {
            fake,
            rng,
            config,
            gender_dist: WeightedIndex::new(Gender::WEIGHTS).expect("static weights are valid"),
            education_dist: WeightedIndex::new(Education::WEIGHTS)
                .expect("static weights are valid"),
            status_dist: WeightedIndex::new(EmploymentStatus::WEIGHTS)
                .expect("static weights are valid"),
            work_location_dist: WeightedIndex::new(WorkLocation::WEIGHTS)
                .expect("static weights are valid"),
            shift_dist: WeightedIndex::new(Shift::WEIGHTS).expect("static weights are valid"),
            salary_dists,
            performance_dist: Normal::new(75.0, 10.0).expect("static parameters are valid"),
            bonus_dist: Normal::new(5.0, 2.0).expect("static parameters are valid"),
            vacation_dist: Poisson::new(15.0).expect("static parameters are valid"),
            sick_dist: Poisson::new(5.0).expect("static parameters are valid"),
        })
    }

    /// Generates exactly `count` records with ids
    /// `start_id ..= start_id + count - 1` and returns the batch together
    /// with the next unused id.
    ///
    /// # Errors
    /// 1. `count` is zero
    /// 2. `start_id` is zero
    /// 3. The id range would overflow the fixed-width id space
    /// 4. The fake data source fails; no partial batch is returned
    pub fn generate(
        &mut self,
        count: u64,
        start_id: u64,
    ) -> Result<(Vec<EmployeeRecord>, u64), GenError> {
        if count == 0 {
            return Err(GenError::InvalidRowCount);
        }
        if start_id == 0 {
            return Err(GenError::InvalidStartId);
        }
        let last = start_id
            .checked_add(count - 1)
            .filter(|&last| last <= MAX_ID_SEQUENCE)
            .ok_or(GenError::IdSpaceExhausted)?;

        #[allow(clippy::cast_possible_truncation)]
        let mut batch = Vec::with_capacity(count as usize);
        for sequence in start_id..=last {
            batch.push(self.generate_record(sequence)?);
        }
        Ok((batch, last + 1))
    }

    fn generate_record(&mut self, sequence: u64) -> Result<EmployeeRecord, GenError> {
        let as_of = self.config.as_of;

        let gender = Gender::ALL[self.gender_dist.sample(&mut self.rng)];
        let first_name = match gender {
            Gender::Male => self.fake.male_first_name()?,
            Gender::Female => self.fake.female_first_name()?,
            Gender::Other => self.fake.neutral_first_name()?,
        };
        let last_name = self.fake.last_name()?;
        let email = format!(
            "{}.{}@company.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );

        let education = Education::ALL[self.education_dist.sample(&mut self.rng)];
        let base_salary = Amount::clipped(
            self.salary_dists[education as usize].sample(&mut self.rng),
            SALARY_FLOOR,
            SALARY_CEILING,
        )?;

        let (department, titles) =
            DEPARTMENT_TITLES[self.rng.gen_range(0..DEPARTMENT_TITLES.len())];
        let job_title = titles[self.rng.gen_range(0..titles.len())];

        let hire_date = self
            .fake
            .date_between(as_of - Duration::days(HIRE_WINDOW_DAYS), as_of)?;
        let days_service = (as_of - hire_date).num_days();
        let one_year_ago = as_of - Duration::days(REVIEW_LAG_DAYS);
        // Recent hires can have been reviewed any time since they joined;
        // everyone else was last reviewed at least a year ago.
        let last_review_date = if hire_date > one_year_ago {
            self.fake.date_between(hire_date, as_of)?
        } else {
            self.fake.date_between(hire_date, one_year_ago)?
        };

        let (state, cities) = STATE_CITIES[self.rng.gen_range(0..STATE_CITIES.len())];
        let city = cities[self.rng.gen_range(0..cities.len())];

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let vacation_days = self.vacation_dist.sample(&mut self.rng) as u32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let sick_days = self.sick_dist.sample(&mut self.rng) as u32;

        Ok(EmployeeRecord {
            employee_id: format_employee_id(sequence),
            first_name,
            last_name,
            email,
            phone_number: self.fake.phone_number()?,
            department,
            job_title,
            hire_date,
            days_service,
            base_salary,
            bonus_percentage: Amount::clipped(
                self.bonus_dist.sample(&mut self.rng),
                0.0,
                15.0,
            )?,
            status: EmploymentStatus::ALL[self.status_dist.sample(&mut self.rng)],
            birth_date: self.fake.date_of_birth(MIN_EMPLOYEE_AGE, MAX_EMPLOYEE_AGE)?,
            address: self.fake.street_address()?,
            city,
            state,
            zip_code: self.fake.zip_code()?,
            country: "USA",
            gender,
            education,
            performance_score: Amount::clipped(
                self.performance_dist.sample(&mut self.rng),
                0.0,
                100.0,
            )?,
            last_review_date,
            employee_level: EmployeeLevel::from_days_service(days_service),
            vacation_days,
            sick_days,
            work_location: WorkLocation::ALL[self.work_location_dist.sample(&mut self.rng)],
            shift: Shift::ALL[self.shift_dist.sample(&mut self.rng)],
            emergency_contact: self.fake.phone_number()?,
            ssn: self.fake.national_id()?,
            bank_account: self.fake.bank_account_number()?,
        })
    }
}

fn salary_dist(tier: SalaryTier) -> Result<LogNormal<f64>, GenError> {
    if tier.median <= 0.0 {
        return Err(GenError::InvalidSalaryModel);
    }
    LogNormal::new(tier.median.ln(), tier.sigma).map_err(|_| GenError::InvalidSalaryModel)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::fake::UsFake;
    use crate::tables::titles_of;

    fn fixed_as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    fn generator(seed: u64) -> RecordBatchGenerator<UsFake<StdRng>, StdRng> {
        let as_of = fixed_as_of();
        let config = GeneratorConfig {
            as_of,
            salary_model: SalaryModel::default(),
        };
        RecordBatchGenerator::with_config(
            UsFake::with_today(StdRng::seed_from_u64(seed), as_of),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
            config,
        )
        .unwrap()
    }

    /// Fake source that is permanently down; every batch request must fail
    /// as a whole.
    struct DownSource;

    impl FakeSource for DownSource {
        fn male_first_name(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn female_first_name(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn neutral_first_name(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn last_name(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn street_address(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn zip_code(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn phone_number(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn date_between(
            &mut self,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<NaiveDate, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn date_of_birth(&mut self, _min_age: u32, _max_age: u32) -> Result<NaiveDate, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn national_id(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
        fn bank_account_number(&mut self) -> Result<String, GenError> {
            Err(GenError::SourceUnavailable("down".to_string()))
        }
    }

    #[test]
    fn test_generate_count_and_ids() {
        let mut generator = generator(1);
        let (batch, next) = generator.generate(25, 1).unwrap();
        assert_eq!(batch.len(), 25);
        assert_eq!(next, 26);
        for (offset, record) in (0_u64..).zip(batch.iter()) {
            assert_eq!(record.employee_id, format_employee_id(1 + offset));
        }

        // Continuing from the returned offset keeps ids contiguous.
        let (batch, next) = generator.generate(5, next).unwrap();
        assert_eq!(batch[0].employee_id, "EMP000000000026");
        assert_eq!(next, 31);
    }

    #[test]
    fn test_generate_rejects_bad_arguments() {
        let mut generator = generator(2);
        assert!(matches!(
            generator.generate(0, 1),
            Err(GenError::InvalidRowCount)
        ));
        assert!(matches!(
            generator.generate(10, 0),
            Err(GenError::InvalidStartId)
        ));
    }

    #[test]
    fn test_generate_rejects_id_space_overflow() {
        let mut generator = generator(3);
        assert!(matches!(
            generator.generate(2, MAX_ID_SEQUENCE),
            Err(GenError::IdSpaceExhausted)
        ));
        assert!(matches!(
            generator.generate(u64::MAX, 2),
            Err(GenError::IdSpaceExhausted)
        ));
        // The last id still fits.
        let (batch, next) = generator.generate(1, MAX_ID_SEQUENCE).unwrap();
        assert_eq!(batch[0].employee_id, "EMP999999999999");
        assert_eq!(next, MAX_ID_SEQUENCE + 1);
    }

    #[test]
    fn test_generate_fails_whole_batch_on_source_error() {
        let mut generator = RecordBatchGenerator::with_config(
            DownSource,
            StdRng::seed_from_u64(4),
            GeneratorConfig {
                as_of: fixed_as_of(),
                salary_model: SalaryModel::default(),
            },
        )
        .unwrap();
        assert!(matches!(
            generator.generate(10, 1),
            Err(GenError::SourceUnavailable(_))
        ));
    }

    #[test]
    fn test_cross_field_invariants() {
        let mut generator = generator(5);
        let as_of = fixed_as_of();
        let one_year_ago = as_of - Duration::days(REVIEW_LAG_DAYS);
        let (batch, _) = generator.generate(500, 1).unwrap();
        for record in &batch {
            assert!(titles_of(record.department)
                .unwrap()
                .contains(&record.job_title));
            assert_eq!(
                record.email,
                format!(
                    "{}.{}@company.com",
                    record.first_name.to_lowercase(),
                    record.last_name.to_lowercase()
                )
            );
            assert_eq!(record.days_service, (as_of - record.hire_date).num_days());
            assert_eq!(
                record.employee_level,
                EmployeeLevel::from_days_service(record.days_service)
            );
            assert!(record.last_review_date >= record.hire_date);
            if record.hire_date <= one_year_ago {
                assert!(record.last_review_date <= one_year_ago);
            } else {
                assert!(record.last_review_date <= as_of);
            }
            assert!(record.hire_date >= as_of - Duration::days(HIRE_WINDOW_DAYS));
            assert!(record.hire_date <= as_of);
            assert_eq!(record.country, "USA");
        }
    }

    #[test]
    fn test_numeric_bounds() {
        let mut generator = generator(6);
        let (batch, _) = generator.generate(500, 1).unwrap();
        let floor = Amount::clipped(SALARY_FLOOR, SALARY_FLOOR, SALARY_CEILING).unwrap();
        let ceiling = Amount::clipped(SALARY_CEILING, SALARY_FLOOR, SALARY_CEILING).unwrap();
        let zero = Amount::clipped(0.0, 0.0, 100.0).unwrap();
        for record in &batch {
            assert!(record.base_salary >= floor && record.base_salary <= ceiling);
            assert!(record.bonus_percentage >= zero);
            assert!(record.bonus_percentage <= Amount::clipped(15.0, 0.0, 15.0).unwrap());
            assert!(record.performance_score >= zero);
            assert!(record.performance_score <= Amount::clipped(100.0, 0.0, 100.0).unwrap());
        }
    }

    #[test]
    fn test_invalid_salary_model_rejected() {
        let bad_tier = SalaryTier {
            median: -1.0,
            sigma: 0.2,
        };
        let model = SalaryModel::new([bad_tier; 4]);
        let result = RecordBatchGenerator::with_config(
            UsFake::new(StdRng::seed_from_u64(7)),
            StdRng::seed_from_u64(8),
            GeneratorConfig {
                as_of: fixed_as_of(),
                salary_model: model,
            },
        );
        assert!(matches!(result, Err(GenError::InvalidSalaryModel)));
    }
}

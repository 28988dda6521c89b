use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::Serialize;

use crate::error::GenError;

/// Constant prefix of every employee id.
pub const ID_PREFIX: &str = "EMP";
/// Zero-padded width of the numeric part of an employee id.
pub const ID_DIGITS: usize = 12;
/// Largest sequence number that fits the fixed-width id format.
pub const MAX_ID_SEQUENCE: u64 = 999_999_999_999;

pub const NUM_DECIMAL_PLACES: u32 = 2;

/// Formats a sequence number as a fixed-width employee id, e.g. `EMP000000000042`.
#[must_use]
pub fn format_employee_id(sequence: u64) -> String {
    format!("{}{:0width$}", ID_PREFIX, sequence, width = ID_DIGITS)
}

/// A bounded numeric column value carried at exactly two decimal places.
///
/// Sampled values land here after clipping, so serialized output always
/// shows two decimals regardless of the raw draw.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Clips `value` into `[min, max]` and rescales it to two decimal places.
    ///
    /// # Errors
    /// Errors when `value` is not a finite number.
    pub fn clipped(value: f64, min: f64, max: f64) -> Result<Self, GenError> {
        if !value.is_finite() {
            return Err(GenError::NonFiniteSample);
        }
        let mut decimal =
            Decimal::from_f64(value.clamp(min, max)).ok_or(GenError::NonFiniteSample)?;
        decimal.rescale(NUM_DECIMAL_PLACES);
        Ok(Amount(decimal))
    }

    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
    /// Draw weights, in [`Gender::ALL`] order: 45% / 45% / 10%.
    pub const WEIGHTS: [u32; 3] = [45, 45, 10];
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Education {
    #[serde(rename = "High School")]
    HighSchool,
    Professional,
    Master,
    #[serde(rename = "PhD")]
    PhD,
}

impl Education {
    pub const ALL: [Education; 4] = [
        Education::HighSchool,
        Education::Professional,
        Education::Master,
        Education::PhD,
    ];
    /// Draw weights, in [`Education::ALL`] order: 20% / 50% / 25% / 5%.
    pub const WEIGHTS: [u32; 4] = [20, 50, 25, 5];
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentStatus {
    Active,
    Inactive,
    Leave,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 3] = [
        EmploymentStatus::Active,
        EmploymentStatus::Inactive,
        EmploymentStatus::Leave,
    ];
    /// Draw weights, in [`EmploymentStatus::ALL`] order: 85% / 10% / 5%.
    pub const WEIGHTS: [u32; 3] = [85, 10, 5];
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkLocation {
    Office,
    Remote,
    Hybrid,
}

impl WorkLocation {
    pub const ALL: [WorkLocation; 3] = [
        WorkLocation::Office,
        WorkLocation::Remote,
        WorkLocation::Hybrid,
    ];
    /// Draw weights, in [`WorkLocation::ALL`] order: 50% / 30% / 20%.
    pub const WEIGHTS: [u32; 3] = [50, 30, 20];
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Day,
    Night,
    Flexible,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Day, Shift::Night, Shift::Flexible];
    /// Draw weights, in [`Shift::ALL`] order: 60% / 30% / 10%.
    pub const WEIGHTS: [u32; 3] = [60, 30, 10];
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeLevel {
    Entry,
    Mid,
    Senior,
}

impl EmployeeLevel {
    /// Tier derived from full days of service: under one year is `Entry`,
    /// one to two years (inclusive) is `Mid`, beyond that `Senior`.
    #[must_use]
    pub fn from_days_service(days: i64) -> Self {
        match days {
            i64::MIN..=364 => EmployeeLevel::Entry,
            365..=730 => EmployeeLevel::Mid,
            _ => EmployeeLevel::Senior,
        }
    }
}

/// One generated employee row.
///
/// Field order is the CSV column order; `csv::Writer` emits the header from
/// these names on the first serialized record.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub department: &'static str,
    pub job_title: &'static str,
    pub hire_date: NaiveDate,
    pub days_service: i64,
    pub base_salary: Amount,
    pub bonus_percentage: Amount,
    pub status: EmploymentStatus,
    pub birth_date: NaiveDate,
    pub address: String,
    pub city: &'static str,
    pub state: &'static str,
    pub zip_code: String,
    pub country: &'static str,
    pub gender: Gender,
    pub education: Education,
    pub performance_score: Amount,
    pub last_review_date: NaiveDate,
    pub employee_level: EmployeeLevel,
    pub vacation_days: u32,
    pub sick_days: u32,
    pub work_location: WorkLocation,
    pub shift: Shift,
    pub emergency_contact: String,
    pub ssn: String,
    pub bank_account: String,
}

//! Gregorian ⇄ Persian (Jalali) calendar conversion.
//!
//! Both calendars convert to and from a [`JulianDay`], which is what makes the
//! conversions exact in both directions. Jalali arithmetic follows the
//! 2820-year grand cycle, with the leap rule `((y + 38) * 31) mod 128 < 31`.
//!
//! ```
//! use jalali_date::{format, jalali_to_gregorian, to_jalali};
//!
//! let nowruz = to_jalali("2024-03-20").unwrap();
//! assert_eq!((nowruz.year(), nowruz.month(), nowruz.day()), (1403, 1, 1));
//! assert_eq!(format("2024-03-20", "YYYY/MM/DD").unwrap(), "1403/01/01");
//! assert_eq!(jalali_to_gregorian(1403, 1, 1).unwrap().to_string(), "2024-03-20");
//! ```

mod consts;
mod format;
mod gregorian;
mod jalali;
pub mod numerals;
mod prelude;
mod types;

pub use consts::*;
pub use format::{Formatted, Pattern, format_jalali};
pub use gregorian::GregorianDate;
pub use jalali::{
    JalaliDate, is_valid_jalali_date, jalali_to_julian_day, julian_day_to_jalali,
    month_start_weekday, next_month, previous_month,
};
pub use types::{
    Day, JalaliYear, JulianDay, Month, Time, Weekday, Year, days_in_month, is_leap_year,
    is_persian_leap_year, persian_month_length,
};

use crate::prelude::*;

/// A date could not be parsed, or a component is outside its valid range.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidDateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid time: {_0}")]
    InvalidTime(String),
    #[display(fmt = "Julian day {_0} is outside the supported range")]
    InvalidJulianDay(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for InvalidDateError {}

/// Anything that can be turned into a Gregorian date: a [`GregorianDate`] or an ISO-8601 string.
pub trait DateInput {
    /// # Errors
    /// Returns `InvalidDateError` if the value does not describe a valid date.
    fn to_gregorian(&self) -> Result<GregorianDate, InvalidDateError>;
}

impl DateInput for GregorianDate {
    fn to_gregorian(&self) -> Result<GregorianDate, InvalidDateError> {
        Ok(*self)
    }
}

impl DateInput for str {
    fn to_gregorian(&self) -> Result<GregorianDate, InvalidDateError> {
        self.parse()
    }
}

impl DateInput for String {
    fn to_gregorian(&self) -> Result<GregorianDate, InvalidDateError> {
        self.parse()
    }
}

/// Julian Day Number of a Gregorian date given by its components.
///
/// # Errors
/// Returns `InvalidDateError` if the year is outside `MIN_YEAR..=MAX_YEAR` or the
/// month or day is out of range.
pub fn gregorian_to_julian_day(year: u16, month: u8, day: u8) -> Result<JulianDay, InvalidDateError> {
    Ok(GregorianDate::new(year, month, day)?.to_julian_day())
}

/// Converts a Gregorian date or date-time string to the Jalali calendar.
///
/// # Errors
/// Returns `InvalidDateError` if the input cannot be parsed, or falls before Farvardin 1, year 1.
pub fn to_jalali<D: DateInput + ?Sized>(input: &D) -> Result<JalaliDate, InvalidDateError> {
    let converted = input
        .to_gregorian()
        .and_then(|date| JalaliDate::from_gregorian(&date).map(|jalali| (date, jalali)));
    match converted {
        Ok((date, jalali)) => {
            log::trace!("converted {date} to {jalali}");
            Ok(jalali)
        },
        Err(err) => {
            log::debug!("date conversion failed: {err}");
            Err(err)
        },
    }
}

/// Converts a Jalali date to the Gregorian calendar (at midnight).
///
/// # Errors
/// Returns `InvalidDateError` if the Jalali date does not exist, or falls after 9999-12-31.
pub fn jalali_to_gregorian(year: u16, month: u8, day: u8) -> Result<GregorianDate, InvalidDateError> {
    JalaliDate::new(year, month, day)?.to_gregorian()
}

/// Converts `input` to the Jalali calendar and renders it with a token pattern.
/// See the [`Pattern`] docs for the token set.
///
/// # Errors
/// Returns `InvalidDateError` under the same conditions as [`to_jalali`].
pub fn format<D: DateInput + ?Sized>(input: &D, pattern: &str) -> Result<String, InvalidDateError> {
    Ok(format_jalali(&to_jalali(input)?, pattern))
}

use crate::InvalidDateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GRAND_CYCLE_BASE_YEAR, GRAND_CYCLE_YEARS, GREGORIAN_CYCLE, JALALI_DAYS_IN_MONTH,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_JALALI_YEAR, MAX_MONTH, MAX_YEAR, MIN_DAY, TIME_SEPARATOR,
    WEEKDAY_JDN_OFFSET, WEEKDAY_NAMES, WEEKDAY_SHORT_NAMES,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

const MAX_HOUR: u8 = 23;
const MAX_MINUTE: u8 = 59;
const MAX_SECOND: u8 = 59;

/// A Gregorian year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, InvalidDateError> {
        let non_zero = NonZeroU16::new(value).ok_or(InvalidDateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(InvalidDateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = InvalidDateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A Jalali year in `1..=MAX_JALALI_YEAR`, the years whose days all have a Gregorian counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct JalaliYear(NonZeroU16);

impl JalaliYear {
    /// # Errors
    /// Returns `InvalidDateError::InvalidYear` if the value is 0 or > `MAX_JALALI_YEAR`.
    pub fn new(value: u16) -> Result<Self, InvalidDateError> {
        let non_zero = NonZeroU16::new(value).ok_or(InvalidDateError::InvalidYear(value))?;
        if value > MAX_JALALI_YEAR {
            return Err(InvalidDateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_persian_leap_year(self.get())
    }
}

impl TryFrom<u16> for JalaliYear {
    type Error = InvalidDateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JalaliYear> for u16 {
    fn from(year: JalaliYear) -> Self {
        year.get()
    }
}

impl fmt::Display for JalaliYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
/// Both calendars have twelve months, so the type is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InvalidDateError> {
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(InvalidDateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day of the month, validated against the month it belongs to.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a day of a Gregorian month.
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, InvalidDateError> {
        Self::within(value, days_in_month(year.get(), month.get()), year.get(), month)
    }

    /// Creates a day of a Jalali month. Esfand 30 is only valid in leap years.
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new_jalali(value: u8, year: JalaliYear, month: Month) -> Result<Self, InvalidDateError> {
        Self::within(value, persian_month_length(year.get(), month.get()), year.get(), month)
    }

    fn within(value: u8, max_day: u8, year: u16, month: Month) -> Result<Self, InvalidDateError> {
        let invalid = || InvalidDateError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > max_day {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidDateError;

    /// Without a year and month only the widest bound, `MIN_DAY..=MAX_DAY`, is checked.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let invalid = InvalidDateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        };
        if value < MIN_DAY || value > MAX_DAY {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A Julian Day Number: a continuous count of days shared by both calendars.
/// 2000-01-01 (Gregorian) is JDN 2451545.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a raw day number. No validation happens here; conversions check their own domain.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day number
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day of the week this JDN falls on
    pub const fn weekday(self) -> Weekday {
        Weekday::from_index((self.0 + WEEKDAY_JDN_OFFSET).rem_euclid(7) as u8)
    }
}

/// Day of the week, in Persian order (the week starts on Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    /// Builds a weekday from its index; values are taken modulo 7.
    pub const fn from_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Saturday,
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            _ => Self::Friday,
        }
    }

    /// 0 for Saturday through 6 for Friday
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Persian name, e.g. "شنبه"
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// One-letter label used in month grid headers
    pub const fn short_name(self) -> &'static str {
        WEEKDAY_SHORT_NAMES[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wall-clock time of day, to the second.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    /// Midnight
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a new Time, validating each component
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidTime` if hour > 23, minute > 59 or second > 59.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, InvalidDateError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND {
            return Err(InvalidDateError::InvalidTime(format!(
                "{hour:02}{TIME_SEPARATOR}{minute:02}{TIME_SEPARATOR}{second:02}"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    pub const fn is_midnight(self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}",
            self.hour, self.minute, self.second
        )
    }
}

// Helper functions

/// Gregorian leap year: divisible by 4, and not by 100 unless also by 400.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Position of `year` inside the 2820-year grand cycle, in `474..=3293`.
pub(crate) const fn cycle_year(year: i64) -> i64 {
    let base = if year >= 0 {
        year - GRAND_CYCLE_BASE_YEAR
    } else {
        year - (GRAND_CYCLE_BASE_YEAR - 1)
    };
    GRAND_CYCLE_BASE_YEAR + base.rem_euclid(GRAND_CYCLE_YEARS)
}

/// Jalali leap year: `((y + 38) * 31) mod 128 < 31`.
///
/// `y` is the year's position in the 2820-year grand cycle, which is the
/// year itself for 474 through 3293. Outside that window the reduction keeps
/// this rule in step with the day counts used by the JDN conversions.
pub const fn is_persian_leap_year(year: u16) -> bool {
    let y = cycle_year(year as i64);
    ((y + 38) * 31) % 128 < 31
}

/// Days in a Jalali month: 31 for months 1-6, 30 for 7-11, 29 or 30 for Esfand.
pub const fn persian_month_length(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_persian_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month as usize]
    }
}

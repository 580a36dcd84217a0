use std::{fmt, str::FromStr};

use crate::{
    InvalidDateError,
    consts::{DATE_SEPARATOR, GREGORIAN_EPOCH_BASE, MAX_JULIAN_DAY, MIN_JULIAN_DAY, TIME_SEPARATOR},
    numerals::normalize_digits,
    types::{Day, JulianDay, Month, Time, Year, is_leap_year},
};

/// A proleptic Gregorian date with a wall-clock time.
///
/// Years are limited to `MIN_YEAR..=MAX_YEAR`; there is no year 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
    time:  Time,
}

impl GregorianDate {
    /// Creates a date at midnight.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if the year, month or day is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Assembles a date from components that are already validated.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self {
            year,
            month,
            day,
            time: Time::MIDNIGHT,
        }
    }

    /// Creates a date with a time of day.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if any component is out of range.
    pub fn with_time(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, InvalidDateError> {
        let time = Time::new(hour, minute, second)?;
        Ok(Self::new(year, month, day)?.at(time))
    }

    /// Returns a copy of this date at the given time
    pub const fn at(self, time: Time) -> Self {
        Self { time, ..self }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    #[inline]
    pub const fn time(&self) -> Time {
        self.time
    }

    /// Returns the same calendar day at midnight
    pub const fn date(&self) -> Self {
        self.at(Time::MIDNIGHT)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Julian Day Number of this date (the time of day is ignored).
    pub const fn to_julian_day(&self) -> JulianDay {
        let y = self.year() as i64 - 1;
        let m = self.month() as i64;
        let month_adjust = if m <= 2 {
            0
        } else if is_leap_year(self.year()) {
            -1
        } else {
            -2
        };
        JulianDay::new(
            GREGORIAN_EPOCH_BASE + 365 * y + y.div_euclid(4) - y.div_euclid(100)
                + y.div_euclid(400)
                + (367 * m - 362).div_euclid(12)
                + month_adjust
                + self.day() as i64,
        )
    }

    /// Inverse of [`Self::to_julian_day`] (Fliegel and Van Flandern). The result is at midnight.
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidJulianDay` if the day falls outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_julian_day(jdn: JulianDay) -> Result<Self, InvalidDateError> {
        let invalid = || InvalidDateError::InvalidJulianDay(jdn.get());
        if !(MIN_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&jdn.get()) {
            return Err(invalid());
        }

        let a = jdn.get() + 32_044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);

        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);

        let year = u16::try_from(year).map_err(|_| invalid())?;
        let month = u8::try_from(month).map_err(|_| invalid())?;
        let day = u8::try_from(day).map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

/// Parses a run of ASCII digits. Signs, spaces and empty strings are rejected.
fn parse_digits<T: FromStr>(s: &str) -> Result<T, InvalidDateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidDateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| InvalidDateError::InvalidFormat(s.to_owned()))
}

/// Drops a trailing `Z` or `±HH:MM` / `±HHMM` UTC offset. The wall-clock time is kept as written.
fn strip_offset(time: &str) -> Result<&str, InvalidDateError> {
    if let Some(rest) = time.strip_suffix(['Z', 'z']) {
        return Ok(rest);
    }
    let Some(pos) = time.rfind(['+', '-']) else {
        return Ok(time);
    };
    let offset = &time[pos + 1..];
    let valid = match offset.split_once(TIME_SEPARATOR) {
        Some((h, m)) => h.len() == 2 && m.len() == 2 && parse_digits::<u8>(h).is_ok() && parse_digits::<u8>(m).is_ok(),
        None => offset.len() == 4 && parse_digits::<u16>(offset).is_ok(),
    };
    if !valid {
        return Err(InvalidDateError::InvalidFormat(time.to_owned()));
    }
    Ok(&time[..pos])
}

pub(crate) fn parse_time(s: &str) -> Result<Time, InvalidDateError> {
    let clock = strip_offset(s)?;
    let parts: Vec<&str> = clock.split(TIME_SEPARATOR).collect();
    let (hour, minute, second) = match parts.as_slice() {
        [h, m] => (*h, *m, "0"),
        [h, m, sec] => {
            // fractional seconds are accepted and truncated
            let whole = match sec.split_once('.') {
                Some((whole, fraction)) => {
                    parse_digits::<u64>(fraction)?;
                    whole
                },
                None => *sec,
            };
            (*h, *m, whole)
        },
        _ => return Err(InvalidDateError::InvalidTime(s.to_owned())),
    };
    Time::new(parse_digits(hour)?, parse_digits(minute)?, parse_digits(second)?)
}

impl FromStr for GregorianDate {
    type Err = InvalidDateError;

    /// Accepts `YYYY-MM-DD`, optionally followed by `T` or a space and
    /// `HH:MM[:SS[.fff]]` with an optional `Z` / `±HH:MM` suffix.
    /// Persian and Arabic-Indic digits are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_digits(s);
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(InvalidDateError::EmptyInput);
        }

        let (date_part, time_part) = match trimmed.split_once(['T', ' ']) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (trimmed, None),
        };

        let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(InvalidDateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {date_part}"
            )));
        };
        let date = Self::new(parse_digits(year)?, parse_digits(month)?, parse_digits(day)?)?;

        match time_part {
            Some(time) => Ok(date.at(parse_time(time)?)),
            None => Ok(date),
        }
    }
}

impl TryFrom<&str> for GregorianDate {
    type Error = InvalidDateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{}",
            self.year, self.month, self.day
        )?;
        if !self.time.is_midnight() {
            write!(f, "T{}", self.time)?;
        }
        Ok(())
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

use std::{fmt, str::FromStr};

use crate::{
    GregorianDate, InvalidDateError,
    consts::{
        DATE_SEPARATOR, ESFAND, GRAND_CYCLE_BASE_YEAR, GRAND_CYCLE_DAYS, GRAND_CYCLE_YEARS,
        JALALI_CYCLE_EPOCH, JALALI_EPOCH_BASE, JALALI_SEPARATOR, LAST_31_DAY_MONTH, MAX_JALALI_YEAR,
        MAX_MONTH, MONTH_NAMES, MONTH_SHORT_NAMES,
    },
    format::format_jalali,
    gregorian::parse_time,
    numerals::normalize_digits,
    types::{Day, JalaliYear, JulianDay, Month, Time, Weekday, persian_month_length},
};

/// Day of the year on which Mehr (month 7) starts
const FIRST_30_DAY_MONTH_START: i64 = 31 * LAST_31_DAY_MONTH as i64 + 1;

/// JDN of the last day of `MAX_JALALI_YEAR`
const MAX_JALALI_JULIAN_DAY: i64 = jalali_jdn(MAX_JALALI_YEAR as i64 + 1, 1, 1) - 1;

/// Days in a grand cycle, minus one: the position of the last day of the cycle's final year
const LAST_DAY_OF_GRAND_CYCLE: i64 = GRAND_CYCLE_DAYS - 1;

/// A date in the Persian (Jalali, Solar Hijri) calendar, with the weekday it falls on
/// and the wall-clock time carried over from the converted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year:    JalaliYear,
    month:   Month,
    day:     Day,
    time:    Time,
    weekday: Weekday,
}

fn validate(year: u16, month: u8, day: u8) -> Result<(JalaliYear, Month, Day), InvalidDateError> {
    let year = JalaliYear::new(year)?;
    let month = Month::new(month)?;
    let day = Day::new_jalali(day, year, month)?;
    Ok((year, month, day))
}

/// Returns true if `year/month/day` names a real Jalali day within `1..=MAX_JALALI_YEAR`.
/// Esfand 30 is only valid in leap years.
pub fn is_valid_jalali_date(year: u16, month: u8, day: u8) -> bool {
    validate(year, month, day).is_ok()
}

/// Day offset of the first of `month` from Farvardin 1
const fn month_offset(month: i64) -> i64 {
    if month <= LAST_31_DAY_MONTH as i64 + 1 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + LAST_31_DAY_MONTH as i64
    }
}

/// Arithmetic core of [`jalali_to_julian_day`], without range checks.
const fn jalali_jdn(year: i64, month: i64, day: i64) -> i64 {
    let epbase = if year >= 0 {
        year - GRAND_CYCLE_BASE_YEAR
    } else {
        year - (GRAND_CYCLE_BASE_YEAR - 1)
    };
    let epyear = GRAND_CYCLE_BASE_YEAR + epbase.rem_euclid(GRAND_CYCLE_YEARS);

    day + month_offset(month)
        + (epyear * 682 - 110).div_euclid(2816)
        + (epyear - 1) * 365
        + epbase.div_euclid(GRAND_CYCLE_YEARS) * GRAND_CYCLE_DAYS
        + JALALI_EPOCH_BASE
}

/// Julian Day Number of a Jalali date.
///
/// Only the component bounds are checked here (month 1-12, day 1-31, year >= 1);
/// use [`is_valid_jalali_date`] for the month-length check.
///
/// # Errors
/// Returns `InvalidDateError` if a component is out of bounds.
pub fn jalali_to_julian_day(year: u16, month: u8, day: u8) -> Result<JulianDay, InvalidDateError> {
    if year == 0 {
        return Err(InvalidDateError::InvalidYear(year));
    }
    let month = Month::new(month)?;
    let day = Day::try_from(day).map_err(|_| InvalidDateError::InvalidDay {
        year,
        month: month.get(),
        day,
    })?;
    Ok(JulianDay::new(jalali_jdn(
        i64::from(year),
        i64::from(month.get()),
        i64::from(day.get()),
    )))
}

/// Jalali date on which a Julian Day Number falls, using the 2820-year grand cycle.
///
/// # Errors
/// Returns `InvalidDateError::InvalidJulianDay` if the date falls outside Jalali
/// years `1..=MAX_JALALI_YEAR`.
pub fn julian_day_to_jalali(jdn: JulianDay) -> Result<JalaliDate, InvalidDateError> {
    let invalid = || InvalidDateError::InvalidJulianDay(jdn.get());
    if !(JALALI_EPOCH_BASE + 1..=MAX_JALALI_JULIAN_DAY).contains(&jdn.get()) {
        return Err(invalid());
    }

    let depoch = jdn.get() - JALALI_CYCLE_EPOCH;
    let cycle = depoch.div_euclid(GRAND_CYCLE_DAYS);
    let cyear = depoch.rem_euclid(GRAND_CYCLE_DAYS);

    let ycycle = if cyear == LAST_DAY_OF_GRAND_CYCLE {
        GRAND_CYCLE_YEARS
    } else {
        let a1 = cyear.div_euclid(366);
        let a2 = cyear.rem_euclid(366);
        (2134 * a1 + 2816 * a2 + 2815).div_euclid(1_028_522) + a1 + 1
    };
    let mut year = ycycle + GRAND_CYCLE_YEARS * cycle + GRAND_CYCLE_BASE_YEAR;
    if year <= 0 {
        year -= 1;
    }

    let yday = jdn.get() - jalali_jdn(year, 1, 1) + 1;
    let month = if yday < FIRST_30_DAY_MONTH_START {
        (yday + 30).div_euclid(31)
    } else {
        (yday - 6 + 29).div_euclid(30)
    };
    let day = jdn.get() - jalali_jdn(year, month, 1) + 1;

    let year = u16::try_from(year).map_err(|_| invalid())?;
    let month = u8::try_from(month).map_err(|_| invalid())?;
    let day = u8::try_from(day).map_err(|_| invalid())?;
    let (year, month, day) = validate(year, month, day).map_err(|_| invalid())?;

    Ok(JalaliDate {
        year,
        month,
        day,
        time: Time::MIDNIGHT,
        weekday: jdn.weekday(),
    })
}

/// The month after `year/month`, or None past `MAX_JALALI_YEAR`.
pub fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == ESFAND {
        (year < MAX_JALALI_YEAR).then(|| (year + 1, 1))
    } else {
        Some((year, month + 1))
    }
}

/// The month before `year/month`, or None before Farvardin 1.
pub fn previous_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == 1 {
        (year > 1).then(|| (year - 1, ESFAND))
    } else {
        Some((year, month - 1))
    }
}

/// Weekday of the first day of a Jalali month, for laying out a month grid.
///
/// # Errors
/// Returns `InvalidDateError` if the month is out of range.
pub fn month_start_weekday(year: u16, month: u8) -> Result<Weekday, InvalidDateError> {
    Ok(JalaliDate::new(year, month, 1)?.weekday())
}

impl JalaliDate {
    /// Creates a Jalali date at midnight.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if the date does not exist or is outside `1..=MAX_JALALI_YEAR`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        let (year, month, day) = validate(year, month, day)?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Assembles a date from components that are already validated.
    pub const fn from_parts(year: JalaliYear, month: Month, day: Day) -> Self {
        let jdn = jalali_jdn(year.get() as i64, month.get() as i64, day.get() as i64);
        Self {
            year,
            month,
            day,
            time: Time::MIDNIGHT,
            weekday: JulianDay::new(jdn).weekday(),
        }
    }

    /// Converts a Gregorian date, keeping its time of day.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if the date falls before Farvardin 1, year 1.
    pub fn from_gregorian(date: &GregorianDate) -> Result<Self, InvalidDateError> {
        Ok(julian_day_to_jalali(date.to_julian_day())?.at(date.time()))
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

    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Persian month name, e.g. "فروردین"
    pub const fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month() - 1) as usize]
    }

    /// Latin month abbreviation, e.g. "Far"
    pub const fn month_short_name(&self) -> &'static str {
        MONTH_SHORT_NAMES[(self.month() - 1) as usize]
    }

    pub const fn weekday_name(&self) -> &'static str {
        self.weekday.name()
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    pub const fn days_in_month(&self) -> u8 {
        persian_month_length(self.year(), self.month())
    }

    /// Day of the year, 1 for Farvardin 1
    pub const fn ordinal(&self) -> u16 {
        month_offset(self.month() as i64) as u16 + self.day() as u16
    }

    pub const fn to_julian_day(&self) -> JulianDay {
        JulianDay::new(jalali_jdn(
            self.year() as i64,
            self.month() as i64,
            self.day() as i64,
        ))
    }

    /// Converts back to the Gregorian calendar, keeping the time of day.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if the day falls after 9999-12-31.
    pub fn to_gregorian(&self) -> Result<GregorianDate, InvalidDateError> {
        Ok(GregorianDate::from_julian_day(self.to_julian_day())?.at(self.time))
    }

    /// Renders this date with a token pattern; see [`crate::Pattern`].
    pub fn format(&self, pattern: &str) -> String {
        format_jalali(self, pattern)
    }

    /// Default display form: `D Month YYYY`, with `، HH:mm` appended
    /// when the hour or minute is non-zero.
    pub fn display_with_time(&self) -> String {
        if self.time.hour() > 0 || self.time.minute() > 0 {
            self.format("D Month YYYY، HH:mm")
        } else {
            self.format("D Month YYYY")
        }
    }
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, InvalidDateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidDateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| InvalidDateError::InvalidFormat(s.to_owned()))
}

impl FromStr for JalaliDate {
    type Err = InvalidDateError;

    /// Accepts `YYYY/MM/DD` or `YYYY-MM-DD`, in ASCII, Persian or Arabic-Indic digits,
    /// optionally followed by `T` and a `HH:MM[:SS]` time as written by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_digits(s);
        let input = normalized.trim();
        if input.is_empty() {
            return Err(InvalidDateError::EmptyInput);
        }
        let (trimmed, time) = match input.split_once('T') {
            Some((date, time)) => (date.trim(), Some(parse_time(time.trim())?)),
            None => (input, None),
        };

        let has_slash = trimmed.contains(JALALI_SEPARATOR);
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let separator = match (has_slash, has_hyphen) {
            (true, false) => JALALI_SEPARATOR,
            (false, true) => DATE_SEPARATOR,
            (true, true) => {
                return Err(InvalidDateError::InvalidFormat(format!(
                    "Mixed delimiters ({JALALI_SEPARATOR} and {DATE_SEPARATOR})"
                )));
            },
            (false, false) => return Err(InvalidDateError::InvalidFormat(trimmed.to_owned())),
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(InvalidDateError::InvalidFormat(format!(
                "Expected 3 components separated by {separator}, found {}",
                parts.len()
            )));
        };
        let date = Self::new(parse_component(year)?, parse_component(month)?, parse_component(day)?)?;
        Ok(time.map_or(date, |time| date.at(time)))
    }
}

/// `YYYY/MM/DD`, with `THH:MM:SS` appended unless the time is midnight.
impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{JALALI_SEPARATOR}{}{JALALI_SEPARATOR}{}",
            self.year, self.month, self.day
        )?;
        if !self.time.is_midnight() {
            write!(f, "T{}", self.time)?;
        }
        Ok(())
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::is_persian_leap_year;

    fn jalali(year: u16, month: u8, day: u8) -> JalaliDate {
        JalaliDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_jalali_to_julian_day_known_values() {
        assert_eq!(jalali_to_julian_day(1, 1, 1).unwrap().get(), 1_948_321);
        assert_eq!(jalali_to_julian_day(475, 1, 1).unwrap().get(), JALALI_CYCLE_EPOCH);
        assert_eq!(jalali_to_julian_day(1403, 1, 1).unwrap().get(), 2_460_390);
        assert_eq!(jalali_to_julian_day(1304, 1, 1).unwrap().get(), 2_424_231);
    }

    #[test]
    fn test_jalali_to_julian_day_month_offsets() {
        let nowruz = jalali_to_julian_day(1402, 1, 1).unwrap().get();
        assert_eq!(jalali_to_julian_day(1402, 7, 1).unwrap().get() - nowruz, 186);
        assert_eq!(jalali_to_julian_day(1402, 8, 1).unwrap().get() - nowruz, 216);
        assert_eq!(jalali_to_julian_day(1402, 12, 1).unwrap().get() - nowruz, 336);
    }

    #[test]
    fn test_jalali_to_julian_day_bounds() {
        assert!(matches!(jalali_to_julian_day(0, 1, 1), Err(InvalidDateError::InvalidYear(0))));
        assert!(matches!(jalali_to_julian_day(1403, 0, 1), Err(InvalidDateError::InvalidMonth(0))));
        assert!(matches!(jalali_to_julian_day(1403, 13, 1), Err(InvalidDateError::InvalidMonth(13))));
        assert!(matches!(jalali_to_julian_day(1403, 1, 0), Err(InvalidDateError::InvalidDay { .. })));
        assert!(matches!(jalali_to_julian_day(1403, 1, 32), Err(InvalidDateError::InvalidDay { .. })));
    }

    #[test]
    fn test_julian_day_to_jalali_known_values() {
        let date = julian_day_to_jalali(JulianDay::new(2_460_390)).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1403, 1, 1));
        assert_eq!(date.weekday(), Weekday::Wednesday);

        let first = julian_day_to_jalali(JulianDay::new(1_948_321)).unwrap();
        assert_eq!((first.year(), first.month(), first.day()), (1, 1, 1));
    }

    #[test]
    fn test_julian_day_to_jalali_rejects_out_of_range() {
        assert!(matches!(
            julian_day_to_jalali(JulianDay::new(0)),
            Err(InvalidDateError::InvalidJulianDay(0))
        ));
        assert!(julian_day_to_jalali(JulianDay::new(-1)).is_err());
        // the day before Farvardin 1, year 1
        assert!(julian_day_to_jalali(JulianDay::new(1_948_320)).is_err());
        for raw in [i64::MAX, i64::MIN] {
            assert!(julian_day_to_jalali(JulianDay::new(raw)).is_err());
        }

        let last = julian_day_to_jalali(JulianDay::new(MAX_JALALI_JULIAN_DAY)).unwrap();
        assert_eq!((last.year(), last.month(), last.day()), (MAX_JALALI_YEAR, 12, last.days_in_month()));
        assert!(julian_day_to_jalali(JulianDay::new(MAX_JALALI_JULIAN_DAY + 1)).is_err());
    }

    #[test]
    fn test_julian_day_round_trip_over_grand_cycle() {
        // every day from year 1 through the end of the first full grand cycle
        let start = jalali_to_julian_day(1, 1, 1).unwrap().get();
        let end = jalali_to_julian_day(3294, 1, 1).unwrap().get();
        for jdn in start..end {
            let date = julian_day_to_jalali(JulianDay::new(jdn)).unwrap();
            assert!(is_valid_jalali_date(date.year(), date.month(), date.day()), "{date}");
            assert_eq!(date.to_julian_day().get(), jdn, "{date}");
        }
    }

    #[test]
    fn test_leap_rule_matches_year_length_over_grand_cycle() {
        for year in 474..=3293_u16 {
            let length = jalali_to_julian_day(year + 1, 1, 1).unwrap().get()
                - jalali_to_julian_day(year, 1, 1).unwrap().get();
            let leap = is_persian_leap_year(year);
            assert_eq!(length, if leap { 366 } else { 365 }, "year {year}");
            assert_eq!(persian_month_length(year, 12), if leap { 30 } else { 29 });
            assert_eq!(is_valid_jalali_date(year, 12, 30), leap, "year {year}");
            assert!(is_valid_jalali_date(year, 12, 29));
        }
    }

    #[test]
    fn test_is_valid_jalali_date() {
        assert!(is_valid_jalali_date(1404, 12, 30));
        assert!(!is_valid_jalali_date(1404, 12, 31));
        assert!(!is_valid_jalali_date(1403, 12, 30));
        assert!(is_valid_jalali_date(1403, 6, 31));
        assert!(!is_valid_jalali_date(1403, 7, 31));
        assert!(!is_valid_jalali_date(1403, 0, 1));
        assert!(!is_valid_jalali_date(1403, 13, 1));
        assert!(!is_valid_jalali_date(1403, 1, 0));
        assert!(!is_valid_jalali_date(0, 1, 1));
        assert!(!is_valid_jalali_date(MAX_JALALI_YEAR + 1, 1, 1));
    }

    #[test]
    fn test_new_errors() {
        assert!(matches!(JalaliDate::new(0, 1, 1), Err(InvalidDateError::InvalidYear(0))));
        assert!(matches!(JalaliDate::new(1403, 13, 1), Err(InvalidDateError::InvalidMonth(13))));
        assert!(matches!(
            JalaliDate::new(1403, 12, 30),
            Err(InvalidDateError::InvalidDay { year: 1403, month: 12, day: 30 })
        ));
    }

    #[test]
    fn test_names_and_accessors() {
        let date = jalali(1403, 1, 1);
        assert_eq!(date.month_name(), "فروردین");
        assert_eq!(date.month_short_name(), "Far");
        assert_eq!(date.weekday_name(), "چهارشنبه");
        assert_eq!(jalali(1403, 12, 1).month_name(), "اسفند");
        assert_eq!(jalali(1403, 12, 1).days_in_month(), 29);
        assert!(!date.is_leap_year());
        assert!(jalali(1404, 1, 1).is_leap_year());
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(jalali(1403, 1, 1).ordinal(), 1);
        assert_eq!(jalali(1403, 6, 31).ordinal(), 186);
        assert_eq!(jalali(1403, 7, 1).ordinal(), 187);
        assert_eq!(jalali(1403, 12, 29).ordinal(), 365);
        assert_eq!(jalali(1404, 12, 30).ordinal(), 366);
    }

    #[test]
    fn test_gregorian_conversion_keeps_time() {
        let gregorian = GregorianDate::with_time(2024, 3, 20, 14, 30, 5).unwrap();
        let date = JalaliDate::from_gregorian(&gregorian).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1403, 1, 1));
        assert_eq!(date.time(), gregorian.time());
        assert_eq!(date.to_gregorian().unwrap(), gregorian);
    }

    #[test]
    fn test_to_gregorian_past_max_year() {
        let last = GregorianDate::new(9999, 12, 31).unwrap();
        let date = JalaliDate::from_gregorian(&last).unwrap();
        assert_eq!(date.year(), MAX_JALALI_YEAR);
        assert_eq!(date.to_gregorian().unwrap(), last);

        let after = jalali(MAX_JALALI_YEAR, 12, 1);
        assert!(matches!(after.to_gregorian(), Err(InvalidDateError::InvalidJulianDay(_))));
    }

    #[test]
    fn test_month_navigation() {
        assert_eq!(next_month(1403, 1), Some((1403, 2)));
        assert_eq!(next_month(1403, 12), Some((1404, 1)));
        assert_eq!(next_month(MAX_JALALI_YEAR, 12), None);
        assert_eq!(previous_month(1403, 2), Some((1403, 1)));
        assert_eq!(previous_month(1403, 1), Some((1402, 12)));
        assert_eq!(previous_month(1, 1), None);
    }

    #[test]
    fn test_month_start_weekday() {
        // Farvardin 1403 starts on Wednesday, Ordibehesht 31 days later on Saturday
        assert_eq!(month_start_weekday(1403, 1).unwrap(), Weekday::Wednesday);
        assert_eq!(month_start_weekday(1403, 2).unwrap(), Weekday::Saturday);
        assert!(month_start_weekday(1403, 13).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("1403/01/01".parse::<JalaliDate>().unwrap(), jalali(1403, 1, 1));
        assert_eq!("1403-1-1".parse::<JalaliDate>().unwrap(), jalali(1403, 1, 1));
        assert_eq!("۱۴۰۳/۰۱/۰۱".parse::<JalaliDate>().unwrap(), jalali(1403, 1, 1));
        assert_eq!(" 1404 / 12 / 30 ".parse::<JalaliDate>().unwrap(), jalali(1404, 12, 30));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<JalaliDate>(), Err(InvalidDateError::EmptyInput)));
        assert!(matches!("1403".parse::<JalaliDate>(), Err(InvalidDateError::InvalidFormat(_))));
        assert!(matches!("1403/01-01".parse::<JalaliDate>(), Err(InvalidDateError::InvalidFormat(_))));
        assert!(matches!("1403/01/01/01".parse::<JalaliDate>(), Err(InvalidDateError::InvalidFormat(_))));
        assert!(matches!("1403/xx/01".parse::<JalaliDate>(), Err(InvalidDateError::InvalidFormat(_))));
        assert!(matches!("1403/12/30".parse::<JalaliDate>(), Err(InvalidDateError::InvalidDay { .. })));
    }

    #[test]
    fn test_display_and_serde() {
        let date = jalali(1403, 1, 1);
        assert_eq!(date.to_string(), "1403/01/01");

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1403/01/01""#);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1403/12/30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_time_of_day_survives_display_and_serde() {
        let gregorian = GregorianDate::with_time(2024, 3, 20, 14, 30, 5).unwrap();
        let date = JalaliDate::from_gregorian(&gregorian).unwrap();
        assert_eq!(date.to_string(), "1403/01/01T14:30:05");

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1403/01/01T14:30:05""#);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
        assert_eq!(parsed.time(), gregorian.time());
        assert_eq!(parsed.to_gregorian().unwrap(), gregorian);

        assert_eq!(
            "1403-01-01T08:15".parse::<JalaliDate>().unwrap().time(),
            Time::new(8, 15, 0).unwrap()
        );
        assert!("1403/01/01T25:00".parse::<JalaliDate>().is_err());
    }

    #[test]
    fn test_from_parts_matches_new() {
        let year = JalaliYear::new(1403).unwrap();
        let month = Month::new(1).unwrap();
        let day = Day::new_jalali(1, year, month).unwrap();
        let date = JalaliDate::from_parts(year, month, day);
        assert_eq!(date, jalali(1403, 1, 1));
        assert_eq!(date.weekday(), Weekday::Wednesday);
    }

    #[test]
    fn test_display_with_time() {
        let date = jalali(1403, 1, 1);
        assert_eq!(date.display_with_time(), "1 فروردین 1403");
        let evening = date.at(Time::new(18, 5, 0).unwrap());
        assert_eq!(evening.display_with_time(), "1 فروردین 1403، 18:05");
    }
}

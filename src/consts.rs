/// Minimum valid Gregorian year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid Jalali year (inclusive). 9999-12-31 falls in Dey 9378.
pub const MAX_JALALI_YEAR: u16 = 9378;

/// Maximum valid month, in both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month in either calendar
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Month number for Esfand, the only Jalali month whose length varies
pub const ESFAND: u8 = 12;

/// Last month with 31 days (Shahrivar)
pub const LAST_31_DAY_MONTH: u8 = 6;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Jalali month (index 0 unused). Esfand shows the common-year length.
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// JDN of 0001-01-01 in the proleptic Gregorian calendar, minus one
pub(crate) const GREGORIAN_EPOCH_BASE: i64 = 1_721_425;

/// JDN of 0001-01-01, the first day `GregorianDate` can hold
pub const MIN_JULIAN_DAY: i64 = GREGORIAN_EPOCH_BASE + 1;

/// JDN of 9999-12-31, the last day `GregorianDate` can hold
pub const MAX_JULIAN_DAY: i64 = 5_373_484;

/// JDN of Farvardin 1, year 1, minus one
pub(crate) const JALALI_EPOCH_BASE: i64 = 1_948_320;

/// JDN of Farvardin 1, 475, the first year of the grand cycle used for decomposition
pub(crate) const JALALI_CYCLE_EPOCH: i64 = 2_121_446;

/// Years in the Jalali grand cycle
pub(crate) const GRAND_CYCLE_YEARS: i64 = 2820;

/// Days in the Jalali grand cycle
pub(crate) const GRAND_CYCLE_DAYS: i64 = 1_029_983;

/// Year offset at which the arithmetic grand cycles start
pub(crate) const GRAND_CYCLE_BASE_YEAR: i64 = 474;

/// Added to a JDN before `mod 7` so that Saturday lands on weekday 0
pub const WEEKDAY_JDN_OFFSET: i64 = 2;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Jalali date component separator used for display
pub const JALALI_SEPARATOR: char = '/';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';

/// Jalali month names, Farvardin first
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Latin abbreviations of the Jalali months
pub const MONTH_SHORT_NAMES: [&str; 12] = [
    "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
];

/// Weekday names, Saturday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
];

/// One-letter weekday labels for month grids, Saturday first
pub const WEEKDAY_SHORT_NAMES: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

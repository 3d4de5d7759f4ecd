use std::fmt;

use crate::{
    calendar_to_jd, calendar_to_mjd, calendar_to_weekday, calendar_to_year_day, is_valid_date,
    Result,
};

/// A date in the Julian or Gregorian calendar, whichever was in force on that day.
///
/// Years use astronomical numbering: year 0 is 1 BCE, year -1 is 2 BCE and so on. The day
/// of month is a real number whose fractional part is the time of day, so 4.81 is the 4th
/// at 19:26:24. Day 1.5 of January -4712 is the zero point of the Julian day count.
///
/// Constructing a `CalendarDate` does not validate it. Use [`is_valid_date`] (or
/// [`CalendarDate::is_valid`]) to find out whether it denotes a day that actually existed;
/// every conversion does this check and fails with [`crate::Error::InvalidDate`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: f64,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u8, day: f64) -> Self {
        CalendarDate { year, month, day }
    }

    /// Day of month with the time of day dropped.
    pub fn day_of_month(&self) -> f64 {
        self.day.floor()
    }

    pub fn is_valid(&self) -> bool {
        is_valid_date(self)
    }

    pub fn to_jd(&self) -> Result<f64> {
        calendar_to_jd(self)
    }

    pub fn to_mjd(&self) -> Result<f64> {
        calendar_to_mjd(self)
    }

    /// Day of week, 0 = Sunday.
    pub fn weekday(&self) -> Result<u8> {
        calendar_to_weekday(self)
    }

    pub fn year_day(&self) -> Result<u16> {
        calendar_to_year_day(self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad the integer part of the day to two digits but keep whatever fraction there is.
        let day = if self.day >= 0.0 && self.day < 10.0 {
            format!("0{}", self.day)
        } else {
            format!("{}", self.day)
        };
        write!(f, "{}-{:02}-{}", self.year, self.month, day)
    }
}

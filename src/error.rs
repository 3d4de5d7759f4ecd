use thiserror::Error;

use crate::CalendarDate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Not a real calendar day, or one of the days skipped in October 1582.
    #[error("invalid date: {0}")]
    InvalidDate(CalendarDate),

    #[error("date {0} is before the modified julian day epoch 1858-11-17")]
    DateBeforeModifiedEpoch(CalendarDate),

    #[error("invalid julian day: {0}")]
    InvalidJulianDay(f64),

    #[error("invalid modified julian day: {0}")]
    InvalidModifiedJulianDay(f64),

    #[error("invalid arguments: day {year_day} of year {year}")]
    InvalidYearDayArguments { year_day: i32, year: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;

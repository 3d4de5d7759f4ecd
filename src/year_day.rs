use crate::calendar_system::is_leap_year;
use crate::classify::require_valid;
use crate::{CalendarDate, Error, Result};

// The formula counts every February as 30 days long and corrects by K days from March on.
fn february_correction(year: i32) -> i32 {
    if is_leap_year(year) {
        1
    } else {
        2
    }
}

/// Day of the year of `date`, 1 for January 1. Time of day is ignored.
///
/// # Errors
///
/// [`Error::InvalidDate`] if `date` is not a valid date.
pub fn calendar_to_year_day(date: &CalendarDate) -> Result<u16> {
    require_valid(date)?;

    let k = february_correction(date.year);
    let month = i32::from(date.month);
    let day = date.day_of_month() as i32;
    let year_day = 275 * month / 9 - k * ((month + 9) / 12) + day - 30;
    log::trace!("{date} is day {year_day} of the year");
    Ok(year_day as u16)
}

/// The date (at 0h) that is day `year_day` of `year`.
///
/// Day 365 of a common year and day 366 of a leap year are accepted and give 31 December,
/// so every date reachable through [`calendar_to_year_day`] maps back. Stricter bounds that
/// reject the last day of the year are not applied.
///
/// # Errors
///
/// [`Error::InvalidYearDayArguments`] if `year_day` is less than 1 or greater than the number
/// of days in `year`.
pub fn year_day_to_calendar(year_day: i32, year: i32) -> Result<CalendarDate> {
    let k = february_correction(year);
    let days_in_year = if k == 1 { 366 } else { 365 };
    if year_day <= 0 || year_day > days_in_year {
        log::debug!("rejecting day {year_day} of year {year}");
        return Err(Error::InvalidYearDayArguments { year_day, year });
    }

    let month = if year_day < 32 {
        1
    } else {
        (9.0 * f64::from(k + year_day) / 275.0 + 0.98).floor() as i32
    };
    let day = year_day - 275 * month / 9 + k * ((month + 9) / 12) + 30;

    Ok(CalendarDate::new(year, month as u8, f64::from(day)))
}

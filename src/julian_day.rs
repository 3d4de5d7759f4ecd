// Conversions between calendar dates and the Julian day count.
//
// Julian day (JD) counts days since noon of -4712-01-01 in the proleptic Julian calendar,
// which is why integer JDs fall at noon and dates at 0h end in .5. The Modified Julian day
// (MJD) moves the zero point to 1858-11-17 at 0h.
//
// The forward direction shifts January and February to months 13 and 14 of the preceding
// year. That puts the leap day at the very end of the (March-based) year, so month lengths
// collapse into the single term INT(30.6001 * (month + 1)) and the leap days into
// INT(365.25 * year). B then subtracts the century years that are not Gregorian leap years,
// i.e. the days the Gregorian calendar has dropped relative to the Julian one. The inverse
// direction undoes each of those steps.

use num_integer::Integer;

use crate::calendar_system::CalendarSystem;
use crate::classify::{calendar_system_of, is_after_modified_epoch};
use crate::floor::FloorSplit;
use crate::reform::{FIRST_GREGORIAN_JDN, GREGORIAN_REFORM, JD0_OFFSET, MJD_OFFSET};
use crate::{CalendarDate, Error, Result};

// Days the Gregorian calendar is behind the Julian one for computational year `year`
// (negated), where `year` has already been shifted for January and February.
fn gregorian_correction(year: i64) -> i64 {
    let a = Integer::div_floor(&year, &100);
    2 - a + Integer::div_floor(&a, &4)
}

/// Julian day of `date`. Fractions of a day carry through, so 2000-01-01.5 is JD 2451545.
///
/// # Errors
///
/// [`Error::InvalidDate`] if `date` is not a valid date, see [`crate::is_valid_date`].
pub fn calendar_to_jd(date: &CalendarDate) -> Result<f64> {
    let system = calendar_system_of(date)?;

    // Widened so that the shifts below can't overflow at the ends of the i32 range.
    let (mut year, mut month) = (i64::from(date.year), i64::from(date.month));
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let b = match system {
        CalendarSystem::Julian => 0,
        CalendarSystem::Gregorian => gregorian_correction(year),
    };

    let jd = (365.25 * (year + 4716) as f64).int()
        + (30.6001 * (month + 1) as f64).int()
        + date.day
        + b as f64
        - 1524.5;
    log::trace!("{date} is JD {jd}");
    Ok(jd)
}

/// Modified Julian day of `date`.
///
/// # Errors
///
/// [`Error::InvalidDate`] if `date` is not a valid date, [`Error::DateBeforeModifiedEpoch`]
/// if it is before 1858-11-17.
pub fn calendar_to_mjd(date: &CalendarDate) -> Result<f64> {
    if !is_after_modified_epoch(date)? {
        log::debug!("{date} is before the MJD epoch");
        return Err(Error::DateBeforeModifiedEpoch(*date));
    }
    Ok(calendar_to_jd(date)? - MJD_OFFSET)
}

/// JD of January 0.0 of `year`, i.e. of December 31 of the year before at 0h. Adding the
/// day of year to this gives the JD of a date at 0h.
pub fn jd0_of(year: i32) -> f64 {
    let year = i64::from(year) - 1;
    let b = if year >= i64::from(GREGORIAN_REFORM.year()) {
        gregorian_correction(year)
    } else {
        0
    };
    (365.25 * year as f64).int() + b as f64 + JD0_OFFSET
}

/// Calendar date of Julian day `jd`. The day of month keeps the fraction of the day,
/// rounded to hundredths.
///
/// Day numbers before 2299161 (1582-10-15) come out in the Julian calendar, later ones in
/// the Gregorian calendar.
///
/// # Errors
///
/// [`Error::InvalidJulianDay`] if `jd` is negative or not finite, or if the date it falls on
/// has a year outside the range of `i32`.
pub fn jd_to_calendar(jd: f64) -> Result<CalendarDate> {
    if !jd.is_finite() || jd < 0.0 {
        log::debug!("rejecting julian day {jd}");
        return Err(Error::InvalidJulianDay(jd));
    }

    let (mut z, f) = (jd + 0.5).split();
    let mut f = f.round_hundredths();
    if f >= 1.0 {
        // The time of day rounds up to midnight of the next day.
        z += 1.0;
        f = 0.0;
    }

    let a = if z < FIRST_GREGORIAN_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).int();
        z + 1.0 + alpha - (alpha / 4.0).int()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).int();
    let d = (365.25 * c).int();
    let e = ((b - d) / 30.6001).int();

    let day = (b - d - (30.6001 * e).int() + f).round_hundredths();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let Some(year) = num_traits::cast::<f64, i32>(year) else {
        log::debug!("julian day {jd} is past the last representable year");
        return Err(Error::InvalidJulianDay(jd));
    };

    let date = CalendarDate::new(year, month as u8, day);
    log::trace!("JD {jd} is {date}");
    Ok(date)
}

/// Calendar date of Modified Julian day `mjd`.
///
/// # Errors
///
/// [`Error::InvalidModifiedJulianDay`] if `mjd` is negative or not finite, or if the date
/// it falls on has a year outside the range of `i32`.
pub fn mjd_to_calendar(mjd: f64) -> Result<CalendarDate> {
    if !mjd.is_finite() || mjd < 0.0 {
        log::debug!("rejecting modified julian day {mjd}");
        return Err(Error::InvalidModifiedJulianDay(mjd));
    }
    jd_to_calendar(mjd + MJD_OFFSET).map_err(|_| Error::InvalidModifiedJulianDay(mjd))
}

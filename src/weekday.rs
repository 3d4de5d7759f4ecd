use num_integer::Integer;

use crate::floor::FloorSplit;
use crate::{calendar_to_jd, CalendarDate, Result};

/// English weekday names indexed by [`calendar_to_weekday`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Day of the week of `date`, 0 for Sunday through 6 for Saturday.
///
/// # Errors
///
/// [`crate::Error::InvalidDate`] if `date` is not a valid date.
pub fn calendar_to_weekday(date: &CalendarDate) -> Result<u8> {
    let jd = calendar_to_jd(date)?;
    // JD 0 was a Monday. Floor-mod so that dates before the JD epoch work too.
    let weekday = ((jd + 1.5).int() as i64).mod_floor(&7) as u8;
    log::trace!("{date} is weekday {weekday}");
    Ok(weekday)
}

/// Day of the week of `date` looked up in `names`, which starts with Sunday.
///
/// ```
/// use jdcal::{calendar_to_weekday_name, CalendarDate, WEEKDAY_NAMES};
///
/// let date = CalendarDate::new(1954, 6, 30.0);
/// assert_eq!(calendar_to_weekday_name(&date, &WEEKDAY_NAMES), Ok(&"Wednesday"));
/// ```
///
/// # Errors
///
/// [`crate::Error::InvalidDate`] if `date` is not a valid date.
pub fn calendar_to_weekday_name<'a, T>(date: &CalendarDate, names: &'a [T; 7]) -> Result<&'a T> {
    let weekday = calendar_to_weekday(date)?;
    Ok(&names[weekday as usize])
}

//! Conversions between calendar dates and the Julian day count.
//!
//! Dates up to 1582-10-04 are in the Julian calendar and dates from 1582-10-15 on are in the
//! Gregorian calendar, with the ten days in between rejected as nonexistent. Both calendars
//! are extended proleptically, with astronomical year numbering, back to the Julian day
//! epoch at noon of -4712-01-01.
//!
//! ```
//! use jdcal::{calendar_to_jd, jd_to_calendar, CalendarDate};
//!
//! let date = CalendarDate::new(1957, 10, 4.81);
//! assert_eq!(calendar_to_jd(&date), Ok(2436116.31));
//! assert_eq!(jd_to_calendar(2436116.31), Ok(date));
//! ```

pub use calendar_date::CalendarDate;
pub use calendar_system::{is_leap_year, CalendarSystem};
pub use classify::{calendar_system_of, is_after_modified_epoch, is_julian_calendar};
pub use error::{Error, Result};
pub use julian_day::{calendar_to_jd, calendar_to_mjd, jd0_of, jd_to_calendar, mjd_to_calendar};
pub use reform::{Reform, FIRST_GREGORIAN_JDN, GREGORIAN_REFORM, JD0_OFFSET, MJD_OFFSET};
pub use validate::{days_in_month, is_valid_date};
pub use weekday::{calendar_to_weekday, calendar_to_weekday_name, WEEKDAY_NAMES};
pub use year_day::{calendar_to_year_day, year_day_to_calendar};

mod calendar_date;
mod calendar_system;
mod classify;
mod error;
mod floor;
mod julian_day;
mod reform;
mod validate;
mod weekday;
mod year_day;

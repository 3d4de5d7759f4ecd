use crate::calendar_system::CalendarSystem;
use crate::reform::GREGORIAN_REFORM;
use crate::{is_valid_date, CalendarDate, Error, Result};

pub(crate) fn require_valid(date: &CalendarDate) -> Result<()> {
    if is_valid_date(date) {
        Ok(())
    } else {
        log::debug!("rejecting invalid date {date}");
        Err(Error::InvalidDate(*date))
    }
}

/// Which calendar `date` belongs to: Julian up to and including 1582-10-04, Gregorian from
/// 1582-10-15 on.
pub fn calendar_system_of(date: &CalendarDate) -> Result<CalendarSystem> {
    require_valid(date)?;
    // Valid dates can't be in the gap, so anything before its start is before 1582-10-15.
    if *date < GREGORIAN_REFORM.gap_start {
        Ok(CalendarSystem::Julian)
    } else {
        Ok(CalendarSystem::Gregorian)
    }
}

pub fn is_julian_calendar(date: &CalendarDate) -> Result<bool> {
    Ok(calendar_system_of(date)? == CalendarSystem::Julian)
}

/// Whether `date` is on or after 1858-11-17, the zero point of the MJD count.
pub fn is_after_modified_epoch(date: &CalendarDate) -> Result<bool> {
    require_valid(date)?;
    // The fraction counts, so 1858-11-16.99 is still before the epoch.
    Ok(*date >= GREGORIAN_REFORM.modified_epoch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn julian(year: i32, month: u8, day: f64) -> bool {
        is_julian_calendar(&CalendarDate::new(year, month, day)).unwrap()
    }

    fn after_epoch(year: i32, month: u8, day: f64) -> bool {
        is_after_modified_epoch(&CalendarDate::new(year, month, day)).unwrap()
    }

    #[test]
    fn invalid_date() {
        let date = CalendarDate::new(2000, 13, 1.0);
        assert_eq!(is_julian_calendar(&date), Err(Error::InvalidDate(date)));
        assert_eq!(calendar_system_of(&date), Err(Error::InvalidDate(date)));
        assert_eq!(is_after_modified_epoch(&date), Err(Error::InvalidDate(date)));

        let date = CalendarDate::new(1582, 10, 10.0);
        assert_eq!(is_julian_calendar(&date), Err(Error::InvalidDate(date)));
    }

    #[test]
    fn test_is_julian_calendar() {
        assert!(!julian(2023, 1, 1.0));
        assert!(julian(1582, 10, 4.0));
        assert!(julian(1582, 10, 4.9));
        assert!(julian(1581, 10, 10.0));
        assert!(julian(1582, 5, 10.0));
        assert!(!julian(1582, 11, 10.0));
        assert!(julian(1582, 10, 1.0));
        assert!(!julian(1582, 10, 15.0));
        assert!(julian(-4712, 1, 1.5));
    }

    #[test]
    fn test_calendar_system_of() {
        assert_eq!(
            calendar_system_of(&CalendarDate::new(1582, 10, 4.0)),
            Ok(CalendarSystem::Julian)
        );
        assert_eq!(
            calendar_system_of(&CalendarDate::new(1582, 10, 15.0)),
            Ok(CalendarSystem::Gregorian)
        );
    }

    #[test]
    fn test_is_after_modified_epoch() {
        assert!(after_epoch(1858, 11, 17.0));
        assert!(after_epoch(1858, 11, 17.5));
        assert!(after_epoch(1858, 11, 18.0));
        assert!(after_epoch(1858, 12, 1.0));
        assert!(after_epoch(1859, 1, 1.0));
        assert!(after_epoch(2023, 8, 26.0));
        assert!(!after_epoch(1858, 11, 16.0));
        assert!(!after_epoch(1858, 11, 16.99));
        assert!(!after_epoch(1858, 10, 30.0));
        assert!(!after_epoch(1582, 10, 17.0));
        assert!(!after_epoch(-4712, 1, 1.5));
    }
}

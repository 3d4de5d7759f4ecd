use crate::calendar_system::is_leap_year;
use crate::reform::GREGORIAN_REFORM;
use crate::CalendarDate;

const MONTH_LENGTHS_NON_LEAP_YEAR: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in `month` of `year`, or `None` if `month` is not in 1-12.
///
/// February follows the leap rule of the calendar in force for the year. The ten days that
/// October 1582 is missing are not accounted for here; see [`is_valid_date`].
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(MONTH_LENGTHS_NON_LEAP_YEAR[(month - 1) as usize])
    }
}

/// Whether `date` denotes a day that existed in the calendar in force at the time.
///
/// Only the integer part of the day is checked, any fraction is taken as time of day. Dates
/// before 1582 use the Julian leap rule, so 1500-02-29 is valid even though it wouldn't be in
/// the proleptic Gregorian calendar. The days 1582-10-05 through 1582-10-14 were skipped by
/// the reform and are invalid.
pub fn is_valid_date(date: &CalendarDate) -> bool {
    if !date.day.is_finite() {
        return false;
    }
    let Some(month_length) = days_in_month(date.year, date.month) else {
        return false;
    };
    let day = date.day_of_month();
    if day < 1.0 || day > f64::from(month_length) {
        return false;
    }

    !GREGORIAN_REFORM.gap_contains(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(year: i32, month: u8, day: f64) -> bool {
        is_valid_date(&CalendarDate::new(year, month, day))
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), Some(31));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(1500, 2), Some(29));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 0), None);
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn calendar_date_format() {
        assert!(valid(2023, 1, 1.0));
        assert!(valid(2023, 1, 1.5));
        assert!(valid(333, 1, 1.0));
        assert!(valid(-1000, 1, 1.0));
        assert!(valid(-4712, 1, 1.5));
        assert!(valid(2023, 1, 31.99));
        assert!(!valid(2023, 13, 1.0));
        assert!(!valid(2023, 0, 1.0));
        assert!(!valid(2023, 2, 29.0));
        assert!(!valid(2023, 1, 32.0));
        assert!(!valid(1582, 1, 34.0));
        assert!(!valid(2023, 1, 0.0));
        assert!(!valid(2023, 1, 0.5));
        assert!(!valid(2023, 1, -1.0));
        assert!(!valid(2023, 2, f64::NAN));
        assert!(!valid(2023, 2, f64::INFINITY));
    }

    #[test]
    fn julian_leap_day() {
        assert!(valid(-1000, 2, 29.0));
        assert!(valid(1500, 2, 29.0));
        assert!(valid(1580, 2, 29.0));
        assert!(!valid(1581, 2, 29.0));
        assert!(!valid(1582, 2, 29.0));
        assert!(!valid(1700, 2, 29.0));
        assert!(valid(1600, 2, 29.0));
    }

    #[test]
    fn nonexistent_date() {
        for day in 5..=14 {
            assert!(!valid(1582, 10, day as f64), "1582-10-{day} should not exist");
        }
        assert!(!valid(1582, 10, 10.5));
        assert!(valid(1582, 10, 4.0));
        assert!(valid(1582, 10, 4.99));
        assert!(valid(1582, 10, 15.0));
        assert!(valid(1582, 1, 1.0));
        assert!(valid(2023, 10, 10.0));
        assert!(valid(1581, 10, 10.0));
    }
}

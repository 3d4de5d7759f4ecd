use crate::CalendarDate;

/// The fixed dates that the day-count conversions are built around.
///
/// The Gregorian reform of 1582 dropped ten days: Thursday 4 October (Julian) was followed
/// by Friday 15 October (Gregorian). Dates in `gap_start..=gap_end` never existed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reform {
    /// First day of the gap.
    pub gap_start: CalendarDate,
    /// Last day of the gap.
    pub gap_end: CalendarDate,
    /// Zero point (at 0h) of the Modified Julian Day count.
    pub modified_epoch: CalendarDate,
}

pub const GREGORIAN_REFORM: Reform = Reform {
    gap_start: CalendarDate::new(1582, 10, 5.0),
    gap_end: CalendarDate::new(1582, 10, 14.0),
    modified_epoch: CalendarDate::new(1858, 11, 17.0),
};

/// JD of the modified epoch, i.e. MJD = JD - MJD_OFFSET.
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// Day number (INT(JD + 0.5)) of 1582-10-15, the first Gregorian day.
pub const FIRST_GREGORIAN_JDN: f64 = 2_299_161.0;

/// JD of January 0.0 of year 1 in the Julian calendar (i.e. 0-12-31 at 0h).
pub const JD0_OFFSET: f64 = 1_721_422.5;

impl Reform {
    /// The year in which the Gregorian calendar came into force.
    pub fn year(&self) -> i32 {
        self.gap_start.year
    }

    /// Whether `date` lies within the gap, comparing the integer day only.
    pub(crate) fn gap_contains(&self, date: &CalendarDate) -> bool {
        let day = date.day_of_month();
        date.year == self.gap_start.year
            && date.month == self.gap_start.month
            && day >= self.gap_start.day
            && day <= self.gap_end.day
    }
}

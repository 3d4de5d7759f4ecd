use crate::reform::GREGORIAN_REFORM;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarSystem {
    Julian,
    Gregorian,
}

fn is_julian_leap_year(year: i32) -> bool {
    year % 4 == 0
}

fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

// Indexed by CalendarSystem.
const LEAP_RULES: [fn(i32) -> bool; 2] = [is_julian_leap_year, is_gregorian_leap_year];

impl CalendarSystem {
    /// The calendar whose leap rule applies to the whole of `year`.
    ///
    /// This switches on the reform year rather than the reform date, so all of 1582 counts as
    /// Julian here even though its last months were Gregorian. 1582 is not a leap year under
    /// either rule so the distinction never changes an answer.
    pub fn for_year(year: i32) -> Self {
        if year <= GREGORIAN_REFORM.year() {
            CalendarSystem::Julian
        } else {
            CalendarSystem::Gregorian
        }
    }

    pub fn is_leap_year(self, year: i32) -> bool {
        LEAP_RULES[self as usize](year)
    }
}

/// Whether `year` has a 29th of February.
///
/// Julian rule (every 4th year) up to and including 1582, Gregorian rule (every 4th year
/// except centuries not divisible by 400) after that. Negative years follow the Julian rule,
/// so -1000 is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    CalendarSystem::for_year(year).is_leap_year(year)
}

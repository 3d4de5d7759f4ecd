// All of the day-count formulas are written in terms of INT(x), the greatest integer
// less than or equal to x. Note that this is floor and not truncation: INT(-7.83) is -8.
// Using truncation here would shift every date before year 0 by one day.

pub(crate) trait FloorSplit: Sized {
    /// Greatest integer less than or equal to self.
    fn int(self) -> Self;

    /// Split into integer and fractional part, e.g. 29.5 -> (29, 0.5). The fractional
    /// part is always in [0, 1).
    fn split(self) -> (Self, Self);

    fn round_hundredths(self) -> Self;
}

impl FloorSplit for f64 {
    fn int(self) -> Self {
        self.floor()
    }

    fn split(self) -> (Self, Self) {
        let int = self.floor();
        (int, self - int)
    }

    fn round_hundredths(self) -> Self {
        (self * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_is_floor() {
        assert_eq!((7.0_f64 / 4.0).int(), 1.0);
        assert_eq!((8.0_f64 / 4.0).int(), 2.0);
        assert_eq!(5.02_f64.int(), 5.0);
        assert_eq!(5.9999_f64.int(), 5.0);
        assert_eq!((-7.83_f64).int(), -8.0);
    }

    #[test]
    fn split() {
        assert_eq!(29.5_f64.split(), (29.0, 0.5));
        assert_eq!(2451545.0_f64.split(), (2451545.0, 0.0));
        assert_eq!((-0.25_f64).split(), (-1.0, 0.75));
    }

    #[test]
    fn round_hundredths() {
        assert_eq!(4.809999_f64.round_hundredths(), 4.81);
        assert_eq!(17.8999999_f64.round_hundredths(), 17.9);
        assert_eq!(1.0_f64.round_hundredths(), 1.0);
        assert_eq!(0.996_f64.round_hundredths(), 1.0);
    }
}

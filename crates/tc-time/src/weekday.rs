//! Weekday helpers on top of [`chrono::Weekday`].

use chrono::Weekday;

/// School-week classification of a [`Weekday`].
pub trait WeekdayExt {
    /// Return `true` if this is Saturday or Sunday.
    fn is_weekend(&self) -> bool;

    /// Return `true` if this is Monday–Friday.
    fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    fn ordinal(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }

    fn ordinal(&self) -> u8 {
        self.number_from_monday() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_days() {
        assert!(Weekday::Sat.is_weekend());
        assert!(Weekday::Sun.is_weekend());
        assert!(!Weekday::Fri.is_weekend());
    }

    #[test]
    fn school_week_is_five_days() {
        let days = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        assert_eq!(days.iter().filter(|d| d.is_weekday()).count(), 5);
    }

    #[test]
    fn ordinals() {
        assert_eq!(Weekday::Mon.ordinal(), 1);
        assert_eq!(Weekday::Fri.ordinal(), 5);
        assert_eq!(Weekday::Sun.ordinal(), 7);
    }
}

//! Calendar month periods
//!
//! A period is a calendar month identified by its first and last day, both
//! inclusive. Ordering follows (year, month), which is chronological.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a period; returns None for a month outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        // Constructors guarantee a valid (year, month)
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|first| first.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Step back `months` months, stopping at the earliest representable month
    pub fn minus_months(&self, months: u32) -> Self {
        let earliest = i64::from(NaiveDate::MIN.year()) * 12;
        let index = (i64::from(self.year) * 12 + i64::from(self.month) - 1 - i64::from(months))
            .max(earliest);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Chart label, e.g. "Apr 2025"
    pub fn label(&self) -> String {
        self.start_date().format("%b %Y").to_string()
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb = MonthPeriod::new(2024, 2).unwrap();
        assert_eq!(feb.start_date(), date(2024, 2, 1));
        assert_eq!(feb.end_date(), date(2024, 2, 29));

        let dec = MonthPeriod::new(2025, 12).unwrap();
        assert_eq!(dec.end_date(), date(2025, 12, 31));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let apr = MonthPeriod::new(2025, 4).unwrap();
        assert!(apr.contains(date(2025, 4, 1)));
        assert!(apr.contains(date(2025, 4, 30)));
        assert!(!apr.contains(date(2025, 3, 31)));
        assert!(!apr.contains(date(2025, 5, 1)));
    }

    #[test]
    fn test_navigation() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        assert_eq!(jan.minus_months(1), MonthPeriod::new(2024, 12).unwrap());
        assert_eq!(jan.minus_months(1).next(), jan);
        assert_eq!(jan.minus_months(2), MonthPeriod::new(2024, 11).unwrap());
        assert_eq!(jan.minus_months(0), jan);
        assert_eq!(jan.minus_months(25), MonthPeriod::new(2022, 12).unwrap());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dec = MonthPeriod::new(2024, 12).unwrap();
        let jan = MonthPeriod::new(2025, 1).unwrap();
        let apr = MonthPeriod::new(2025, 4).unwrap();
        assert!(dec < jan);
        assert!(jan < apr);
        assert!(apr.label() < jan.label());
    }

    #[test]
    fn test_label() {
        assert_eq!(MonthPeriod::new(2025, 4).unwrap().label(), "Apr 2025");
        assert_eq!(MonthPeriod::containing(date(2025, 9, 17)).label(), "Sep 2025");
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthPeriod::new(2025, 3).unwrap().to_string(), "2025-03");
    }

    #[test]
    fn test_bounds_at_calendar_limits() {
        let last = MonthPeriod::containing(NaiveDate::MAX);
        assert_eq!(last.end_date(), NaiveDate::MAX);
        assert!(last.contains(NaiveDate::MAX));

        let first = MonthPeriod::containing(NaiveDate::MIN);
        assert_eq!(first.start_date(), NaiveDate::MIN);
    }

    #[test]
    fn test_minus_months_large_steps() {
        let apr = MonthPeriod::new(2025, 4).unwrap();
        assert_eq!(apr.minus_months(12 * 2025), MonthPeriod::new(0, 4).unwrap());

        let floor = apr.minus_months(u32::MAX);
        assert!(floor < apr);
        assert_eq!(floor.year(), NaiveDate::MIN.year());
        assert_eq!(floor.month(), 1);
    }
}

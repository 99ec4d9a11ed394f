//! Vacation balance model.
//!
//! A balance tracks the paid-vacation entitlement for one employee for one
//! anniversary year. Exactly one balance per employee is "current": the one
//! with the greatest year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The yearly paid-vacation entitlement of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationBalance {
    /// Unique identifier for the balance.
    pub id: String,
    /// The employee this balance belongs to.
    pub employee_id: String,
    /// The anniversary year this balance covers.
    pub year: i32,
    /// Total entitled days for the year, including the experience bonus.
    pub total_days: i32,
    /// Days consumed so far. Never negative; debits add, credits subtract
    /// with a clamp at zero.
    pub used_days: i32,
    /// The experience-bonus component of `total_days`.
    pub bonus_days: i32,
    /// First day of the covered period (the work anniversary).
    pub period_start: NaiveDate,
    /// Last day of the covered period (anniversary + 1 year − 1 day).
    pub period_end: NaiveDate,
}

impl VacationBalance {
    /// Days still available in this balance.
    ///
    /// Always computed, never persisted.
    pub fn remaining_days(&self) -> i32 {
        self.total_days - self.used_days
    }

    /// Returns true if the given inclusive span lies strictly within the
    /// balance period bounds.
    pub fn contains_strictly(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start > self.period_start && end < self.period_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_balance() -> VacationBalance {
        VacationBalance {
            id: "bal_001".to_string(),
            employee_id: "emp_001".to_string(),
            year: 2026,
            total_days: 24,
            used_days: 5,
            bonus_days: 0,
            period_start: date(2026, 2, 1),
            period_end: date(2027, 1, 31),
        }
    }

    #[test]
    fn test_remaining_days_is_total_minus_used() {
        let balance = make_balance();
        assert_eq!(balance.remaining_days(), 19);
    }

    #[test]
    fn test_remaining_days_can_reach_zero() {
        let mut balance = make_balance();
        balance.used_days = 24;
        assert_eq!(balance.remaining_days(), 0);
    }

    #[test]
    fn test_contains_strictly_excludes_boundaries() {
        let balance = make_balance();
        assert!(balance.contains_strictly(date(2026, 2, 2), date(2027, 1, 30)));
        // Spans touching either bound are not strictly contained
        assert!(!balance.contains_strictly(date(2026, 2, 1), date(2026, 2, 10)));
        assert!(!balance.contains_strictly(date(2027, 1, 20), date(2027, 1, 31)));
    }

    #[test]
    fn test_serde_round_trip() {
        let balance = make_balance();
        let json = serde_json::to_string(&balance).unwrap();
        let back: VacationBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(balance, back);
    }
}

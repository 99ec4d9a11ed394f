//! Policy configuration types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from the YAML policy file.

use serde::Deserialize;

use crate::models::EmployeeRole;

/// One experience-bonus tier: employees with at least `min_years` of
/// service receive `bonus_days` extra vacation days per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BonusTier {
    /// Minimum whole years of service for this tier.
    pub min_years: i32,
    /// Extra entitled days granted by this tier.
    pub bonus_days: i32,
}

/// The complete vacation policy.
///
/// Thresholds that were hard-coded lookup tables in earlier systems live
/// here as explicit configuration loaded at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VacationPolicy {
    /// Base yearly entitlement before any experience bonus.
    pub base_entitlement_days: i32,
    /// Minimum calendar days between submission and the vacation start.
    pub min_lead_time_days: i64,
    /// Maximum vacation length, measured as the exclusive difference
    /// `end − start` in days.
    pub max_duration_days: i64,
    /// Minimum months of employment before any vacation may be requested.
    pub min_tenure_months: u32,
    /// Minimum months between the end of the last vacation and today.
    pub cooldown_months: u32,
    /// Unpaid-leave day count above which the entitlement is pro-rated
    /// and unpaid days are subtracted from the payment period.
    pub unpaid_prorate_threshold: i64,
    /// Number of most-recent payroll records used for payment calculation.
    pub payroll_window: usize,
    /// Experience-bonus tiers, ordered by `min_years` descending.
    pub bonus_tiers: Vec<BonusTier>,
    /// Role whose active members are notified of new submissions.
    pub notify_role: EmployeeRole,
}

impl Default for VacationPolicy {
    fn default() -> Self {
        Self {
            base_entitlement_days: 24,
            min_lead_time_days: 7,
            max_duration_days: 24,
            min_tenure_months: 6,
            cooldown_months: 5,
            unpaid_prorate_threshold: 15,
            payroll_window: 12,
            bonus_tiers: vec![
                BonusTier { min_years: 20, bonus_days: 10 },
                BonusTier { min_years: 15, bonus_days: 7 },
                BonusTier { min_years: 10, bonus_days: 5 },
                BonusTier { min_years: 5, bonus_days: 3 },
            ],
            notify_role: EmployeeRole::SeniorHr,
        }
    }
}

impl VacationPolicy {
    /// Bonus days for the given number of whole years of service.
    ///
    /// Walks the tiers in order and returns the first match, so tiers must
    /// be sorted by `min_years` descending (the loader enforces this).
    pub fn bonus_days_for_years(&self, years: i32) -> i32 {
        self.bonus_tiers
            .iter()
            .find(|tier| years >= tier.min_years)
            .map(|tier| tier.bonus_days)
            .unwrap_or(0)
    }
}

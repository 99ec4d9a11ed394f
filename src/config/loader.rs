//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the vacation
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::VacationPolicy;

/// Loads and provides access to the vacation policy.
///
/// The `PolicyLoader` reads a single YAML file and validates it. Missing
/// fields fall back to the compiled-in defaults, so a partial policy file
/// is valid.
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// let policy = loader.policy();
/// assert_eq!(policy.min_lead_time_days, 7);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: VacationPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing and
    /// [`EngineError::ConfigParseError`] when it contains invalid YAML or
    /// fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let policy: VacationPolicy =
            serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        Self::validate(&policy).map_err(|message| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        })?;

        Ok(Self { policy })
    }

    /// Builds a loader around the compiled-in default policy.
    pub fn with_defaults() -> Self {
        Self {
            policy: VacationPolicy::default(),
        }
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &VacationPolicy {
        &self.policy
    }

    fn validate(policy: &VacationPolicy) -> Result<(), String> {
        if policy.base_entitlement_days <= 0 {
            return Err("base_entitlement_days must be positive".to_string());
        }
        if policy.payroll_window == 0 {
            return Err("payroll_window must be at least 1".to_string());
        }
        let mut previous: Option<i32> = None;
        for tier in &policy.bonus_tiers {
            if tier.min_years <= 0 || tier.bonus_days < 0 {
                return Err(format!(
                    "invalid bonus tier: min_years {} / bonus_days {}",
                    tier.min_years, tier.bonus_days
                ));
            }
            if let Some(prev) = previous {
                if tier.min_years >= prev {
                    return Err("bonus_tiers must be sorted by min_years descending".to_string());
                }
            }
            previous = Some(tier.min_years);
        }
        Ok(())
    }
}

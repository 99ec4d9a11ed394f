//! Policy configuration for the Vacation Engine.
//!
//! This module provides the strongly-typed vacation policy (lead times,
//! duration caps, entitlements, bonus tiers, notification role) and a loader
//! that reads it from a YAML file. All thresholds have compiled-in defaults
//! so the engine can run without a config file.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Base entitlement: {} days", loader.policy().base_entitlement_days);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{BonusTier, VacationPolicy};

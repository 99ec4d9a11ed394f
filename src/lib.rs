//! Vacation Engine for HR leave management
//!
//! This crate provides functionality for checking vacation request
//! eligibility against company policy, calculating paid-leave payment
//! amounts from payroll history, and keeping per-employee vacation
//! balances consistent through the request lifecycle.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod checker;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

//! Calculation pipeline for the income tax estimate.
//!
//! Each stage is a small calculator over plain values, run in this order:
//! net salary, reliefs, bracket allocation, projection. [`TaxEstimator`]
//! chains them.

pub mod allocation;
pub mod common;
pub mod estimator;
pub mod net_salary;
pub mod projection;
pub mod relief;

pub use allocation::{Allocation, BracketAllocator, allocate};
pub use estimator::{EstimateWarning, TaxEstimate, TaxEstimator, estimate};
pub use net_salary::{NetSalary, NetSalaryCalculator, compute_annual_net_salary};
pub use projection::{MONTHS_PER_YEAR, project};
pub use relief::{ReliefCalculator, Reliefs, compute_taxable_income};

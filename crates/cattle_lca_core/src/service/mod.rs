//! Country-bound resource services.
//!
//! # Responsibility
//! - Assemble wrappers into a `Loader` and expose them through `LcaDataManager`.
//! - Keep calculators decoupled from table and column names.

pub mod cohort_table;
pub mod lca_data_manager;
pub mod loader;
pub mod practices;

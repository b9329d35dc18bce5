//! Emission-factor and animal-parameter resources for cattle life-cycle
//! assessment.
//!
//! Country-scoped tables are read once from a SQLite resource store into
//! immutable wrappers; calculators query them through `LcaDataManager`.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{configure_database_path, database_path};
pub use db::{open_store, open_store_in_memory, CountryCode, DbError, DbResult, TableStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::animal::{AnimalAttributes, AnimalData, AnimalRecord};
pub use model::cohort::{Cohort, Gender};
pub use model::{LookupError, LookupResult};
pub use service::cohort_table::CohortParameter;
pub use service::lca_data_manager::LcaDataManager;
pub use service::loader::Loader;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Single entry point the emissions calculator reads resources through.
//!
//! # Responsibility
//! - Own one `Loader` and the cohort parameter table derived from it.
//! - Expose the named getters the calculator depends on.
//!
//! # Invariants
//! - Every getter is a pure function of the data read at construction.
//! - Failures from wrappers are returned unchanged.
//!
//! # See also
//! - `service::cohort_table` for the cohort parameter mapping.
//! - `service::practices` for grazing, storage and spreading names.

use super::cohort_table::{self, CohortParameter, CohortTable};
use super::loader::Loader;
use super::practices::{GrazingType, SpreadingType, StorageType};
use crate::db::{CountryCode, DbResult};
use crate::model::cohort::{Cohort, Gender};
use crate::model::upstream::{
    AMMONIUM_NITRATE_FERTILISER, DIESEL_DIRECT, DIESEL_INDIRECT, ELECTRICITY_CONSUMED, LIME,
    POTASSIUM_CHLORIDE, TRIPLE_SUPERPHOSPHATE, UREA_FERTILISER,
};
use crate::model::LookupResult;
use rusqlite::Connection;
use std::path::Path;

/// Milk density, kg per litre.
pub const MILK_DENSITY: f64 = 1.033;
/// Reference milk fat content, percent.
pub const MILK_FAT: f64 = 3.5;

/// Country-bound, read-only view of every resource the calculator needs.
///
/// `Send + Sync`: share one instance across calculator threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct LcaDataManager {
    loader: Loader,
    cohorts: CohortTable,
}

impl LcaDataManager {
    /// Builds a manager over the configured resource store.
    ///
    /// # Errors
    /// - Any `Loader::new` failure.
    pub fn new(country: impl Into<CountryCode>) -> DbResult<Self> {
        Ok(Self::from_loader(Loader::new(country)?))
    }

    pub fn open(path: impl AsRef<Path>, country: impl Into<CountryCode>) -> DbResult<Self> {
        Ok(Self::from_loader(Loader::open(path, country)?))
    }

    pub fn from_connection(conn: Connection, country: impl Into<CountryCode>) -> DbResult<Self> {
        Ok(Self::from_loader(Loader::from_connection(conn, country)?))
    }

    pub fn from_loader(loader: Loader) -> Self {
        let cohorts = CohortTable::build(loader.animal_features(), loader.emissions_factors());
        Self { loader, cohorts }
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn country(&self) -> &CountryCode {
        self.loader.country()
    }

    pub fn mature_weight_average(&self) -> LookupResult<f64> {
        cohort_table::mature_weight_average(self.loader.animal_features())
    }

    pub fn cohort_keys(&self) -> Vec<Cohort> {
        self.cohorts.cohorts().collect()
    }

    pub fn cohort_gender(&self, cohort: &str) -> LookupResult<Gender> {
        Ok(cohort.parse::<Cohort>()?.gender())
    }

    /// Value of `parameter` for `cohort`, both given by name.
    ///
    /// # Errors
    /// - `UnknownCohort` when `cohort` is not a recognized cohort.
    /// - `UnknownParameter` when `parameter` is not a cohort parameter.
    /// - `MissingValue` when the country has no value, or the parameter does
    ///   not apply to the cohort.
    pub fn get_cohort_parameter(&self, cohort: &str, parameter: &str) -> LookupResult<f64> {
        let cohort = cohort.parse::<Cohort>()?;
        let parameter = parameter.parse::<CohortParameter>()?;
        self.cohort_parameter(cohort, parameter)
    }

    pub fn cohort_parameter(
        &self,
        cohort: Cohort,
        parameter: CohortParameter,
    ) -> LookupResult<f64> {
        self.cohorts.get(cohort, parameter)
    }

    /// Maintenance activity coefficient for a grazing situation.
    pub fn get_grazing_type(&self, grazing_type: &str) -> LookupResult<f64> {
        let grazing = grazing_type.parse::<GrazingType>()?;
        self.factor(grazing.feeding_situation_column())
    }

    pub fn get_storage_tan(&self, storage_type: &str) -> LookupResult<f64> {
        let storage = storage_type.parse::<StorageType>()?;
        self.factor(storage.tan_column())
    }

    pub fn get_storage_mcf(&self, storage_type: &str) -> LookupResult<f64> {
        let storage = storage_type.parse::<StorageType>()?;
        self.factor(storage.mcf_column())
    }

    pub fn get_storage_n2o(&self, storage_type: &str) -> LookupResult<f64> {
        let storage = storage_type.parse::<StorageType>()?;
        self.factor(storage.n2o_column())
    }

    pub fn get_daily_spreading(&self, spreading_type: &str) -> LookupResult<f64> {
        let spreading = spreading_type.parse::<SpreadingType>()?;
        self.factor(spreading.nh3_column())
    }

    pub fn get_milk_density(&self) -> f64 {
        MILK_DENSITY
    }

    pub fn get_fat(&self) -> f64 {
        MILK_FAT
    }

    pub fn get_concentrate_digestibility(&self, con_type: &str) -> LookupResult<f64> {
        self.loader.concentrates().con_dry_matter_digestibility(con_type)
    }

    pub fn get_con_dry_matter_gross_energy(&self, con_type: &str) -> LookupResult<f64> {
        self.loader.concentrates().gross_energy_mje_dry_matter(con_type)
    }

    pub fn get_concentrate_crude_protein(&self, con_type: &str) -> LookupResult<f64> {
        self.loader.concentrates().con_crude_protein(con_type)
    }

    pub fn get_concentrate_digestible_energy(&self, con_type: &str) -> LookupResult<f64> {
        self.loader.concentrates().con_digestible_energy(con_type)
    }

    pub fn get_upstream_concentrate_co2e(&self, con_type: &str) -> LookupResult<f64> {
        self.loader.concentrates().con_co2_e(con_type)
    }

    pub fn get_upstream_concentrate_po4e(&self, con_type: &str) -> LookupResult<f64> {
        self.loader.concentrates().con_po4_e(con_type)
    }

    pub fn get_forage_digestibility(&self, forage: &str) -> LookupResult<f64> {
        self.loader.grass().forage_dry_matter_digestibility(forage)
    }

    pub fn get_grass_dry_matter_gross_energy(&self, forage: &str) -> LookupResult<f64> {
        self.loader.grass().gross_energy_mje_dry_matter(forage)
    }

    pub fn get_grass_crude_protein(&self, forage: &str) -> LookupResult<f64> {
        self.loader.grass().crude_protein(forage)
    }

    pub fn get_ef_urea(&self) -> LookupResult<f64> {
        self.loader.emissions_factors().ef_urea()
    }

    /// Urea applied with the NBPT urease inhibitor.
    pub fn get_ef_urea_abated(&self) -> LookupResult<f64> {
        self.loader.emissions_factors().ef_urea_and_nbpt()
    }

    pub fn get_ef_urea_to_nh3_and_nox(&self) -> LookupResult<f64> {
        self.loader
            .emissions_factors()
            .ef_frac_gasf_urea_fertilisers_to_nh3_and_nox()
    }

    pub fn get_ef_urea_abated_to_nh3_and_nox(&self) -> LookupResult<f64> {
        self.loader
            .emissions_factors()
            .ef_frac_gasf_urea_and_nbpt_to_nh3_and_nox()
    }

    pub fn get_ef_fraction_leach_runoff(&self) -> LookupResult<f64> {
        self.loader.emissions_factors().ef_frac_leach_runoff()
    }

    pub fn get_indirect_atmospheric_deposition(&self) -> LookupResult<f64> {
        self.loader
            .emissions_factors()
            .ef_indirect_n2o_atmospheric_deposition_to_soils_and_water()
    }

    pub fn get_indirect_leaching(&self) -> LookupResult<f64> {
        self.loader
            .emissions_factors()
            .ef_indirect_n2o_from_leaching_and_runoff()
    }

    pub fn get_ef_urea_co2(&self) -> LookupResult<f64> {
        self.loader.emissions_factors().ef_urea_co2()
    }

    pub fn get_ef_lime_co2(&self) -> LookupResult<f64> {
        self.loader.emissions_factors().ef_lime_co2()
    }

    pub fn get_frac_p_leach(&self) -> LookupResult<f64> {
        self.loader.emissions_factors().ef_frac_p_leach()
    }

    pub fn get_ef_an_fertiliser(&self) -> LookupResult<f64> {
        self.loader.emissions_factors().ef_ammonium_nitrate()
    }

    pub fn get_ef_an_fertiliser_to_nh3_and_nox(&self) -> LookupResult<f64> {
        self.loader
            .emissions_factors()
            .ef_frac_gasf_ammonium_fertilisers_to_nh3_and_nox()
    }

    pub fn get_upstream_diesel_co2e_indirect(&self) -> LookupResult<f64> {
        self.upstream_co2e(DIESEL_INDIRECT)
    }

    pub fn get_upstream_diesel_co2e_direct(&self) -> LookupResult<f64> {
        self.upstream_co2e(DIESEL_DIRECT)
    }

    pub fn get_upstream_diesel_po4e_indirect(&self) -> LookupResult<f64> {
        self.upstream_po4e(DIESEL_INDIRECT)
    }

    pub fn get_upstream_diesel_po4e_direct(&self) -> LookupResult<f64> {
        self.upstream_po4e(DIESEL_DIRECT)
    }

    pub fn get_upstream_electricity_co2e(&self) -> LookupResult<f64> {
        self.upstream_co2e(ELECTRICITY_CONSUMED)
    }

    pub fn get_upstream_electricity_po4e(&self) -> LookupResult<f64> {
        self.upstream_po4e(ELECTRICITY_CONSUMED)
    }

    pub fn get_upstream_an_fertiliser_co2e(&self) -> LookupResult<f64> {
        self.upstream_co2e(AMMONIUM_NITRATE_FERTILISER)
    }

    pub fn get_upstream_an_fertiliser_po4e(&self) -> LookupResult<f64> {
        self.upstream_po4e(AMMONIUM_NITRATE_FERTILISER)
    }

    pub fn get_upstream_urea_fertiliser_co2e(&self) -> LookupResult<f64> {
        self.upstream_co2e(UREA_FERTILISER)
    }

    pub fn get_upstream_urea_fertiliser_po4e(&self) -> LookupResult<f64> {
        self.upstream_po4e(UREA_FERTILISER)
    }

    pub fn get_upstream_triple_phosphate_co2e(&self) -> LookupResult<f64> {
        self.upstream_co2e(TRIPLE_SUPERPHOSPHATE)
    }

    pub fn get_upstream_triple_phosphate_po4e(&self) -> LookupResult<f64> {
        self.upstream_po4e(TRIPLE_SUPERPHOSPHATE)
    }

    pub fn get_upstream_potassium_chloride_co2e(&self) -> LookupResult<f64> {
        self.upstream_co2e(POTASSIUM_CHLORIDE)
    }

    pub fn get_upstream_potassium_chloride_po4e(&self) -> LookupResult<f64> {
        self.upstream_po4e(POTASSIUM_CHLORIDE)
    }

    pub fn get_upstream_lime_co2e(&self) -> LookupResult<f64> {
        self.upstream_co2e(LIME)
    }

    pub fn get_upstream_lime_po4e(&self) -> LookupResult<f64> {
        self.upstream_po4e(LIME)
    }

    fn factor(&self, column: &str) -> LookupResult<f64> {
        self.loader.emissions_factors().get(column)
    }

    fn upstream_co2e(&self, upstream_type: &str) -> LookupResult<f64> {
        self.loader.upstream().upstream_kg_co2e(upstream_type)
    }

    fn upstream_po4e(&self, upstream_type: &str) -> LookupResult<f64> {
        self.loader.upstream().upstream_kg_po4e(upstream_type)
    }
}

#[cfg(test)]
mod tests {
    use super::LcaDataManager;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn manager_is_shareable_across_threads() {
        assert_send_sync::<LcaDataManager>();
    }
}

//! Country-specific IPCC-style emission factors.
//!
//! # Invariants
//! - One row per country; an absent row makes every getter `MissingValue`.
//! - Getter names follow the store columns except `ef_frac_p_leach`, which
//!   reads `Frac_P_Leach`.

use super::columns::emissions_factors as col;
use super::country_row::CountryRow;
use super::LookupResult;
use crate::db::{DbResult, RowSet};

#[derive(Debug, Clone, PartialEq)]
pub struct EmissionsFactors {
    row: CountryRow,
}

macro_rules! factor_getters {
    ($($(#[$meta:meta])* $name:ident => $column:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> LookupResult<f64> {
                self.get($column)
            }
        )*
    };
}

impl EmissionsFactors {
    /// # Errors
    /// - `DbError::InvalidData` when `rows` holds more than one row.
    pub fn from_rows(rows: RowSet, country: &str) -> DbResult<Self> {
        Ok(Self {
            row: CountryRow::from_rows(rows, country)?,
        })
    }

    /// Any factor column by name.
    pub fn get(&self, field: &str) -> LookupResult<f64> {
        self.row.value(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.row.has_column(field)
    }

    pub fn country(&self) -> &str {
        self.row.country()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.row.columns()
    }

    pub fn is_loaded(&self) -> bool {
        self.row.is_loaded()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_loaded()
    }

    factor_getters! {
        ef_net_energy_for_maintenance_non_lactating_cow =>
            col::EF_NET_ENERGY_FOR_MAINTENANCE_NON_LACTATING_COW;
        ef_net_energy_for_maintenance_lactating_cow =>
            col::EF_NET_ENERGY_FOR_MAINTENANCE_LACTATING_COW;
        ef_net_energy_for_maintenance_bulls => col::EF_NET_ENERGY_FOR_MAINTENANCE_BULLS;
        ef_feeding_situation_pasture => col::EF_FEEDING_SITUATION_PASTURE;
        ef_feeding_situation_large_area => col::EF_FEEDING_SITUATION_LARGE_AREA;
        ef_feeding_situation_stall => col::EF_FEEDING_SITUATION_STALL;
        ef_net_energy_for_growth_females => col::EF_NET_ENERGY_FOR_GROWTH_FEMALES;
        ef_net_energy_for_growth_castrates => col::EF_NET_ENERGY_FOR_GROWTH_CASTRATES;
        ef_net_energy_for_growth_bulls => col::EF_NET_ENERGY_FOR_GROWTH_BULLS;
        ef_net_energy_for_pregnancy => col::EF_NET_ENERGY_FOR_PREGNANCY;
        ef_methane_conversion_factor_dairy_cow => col::EF_METHANE_CONVERSION_FACTOR_DAIRY_COW;
        ef_methane_conversion_factor_steer => col::EF_METHANE_CONVERSION_FACTOR_STEER;
        ef_methane_conversion_factor_calves => col::EF_METHANE_CONVERSION_FACTOR_CALVES;
        ef_methane_conversion_factor_bulls => col::EF_METHANE_CONVERSION_FACTOR_BULLS;
        /// Fraction of TAN in dung and urine deposited on pasture lost as NH3 and NOx.
        ef_frac_gasm_total_ammonia_nitrogen_pasture_range_paddock_deposition =>
            col::EF_FRACGASM_TOTAL_AMMONIA_NITROGEN_PASTURE_RANGE_PADDOCK_DEPOSITION;
        ef_cpp_pasture_range_paddock_for_dairy_and_non_dairy_direct_n2o =>
            col::EF_CPP_PASTURE_RANGE_PADDOCK_FOR_DAIRY_AND_NON_DAIRY_DIRECT_N2O;
        ef_direct_n2o_emissions_soils => col::EF_DIRECT_N2O_EMISSIONS_SOILS;
        ef_indirect_n2o_atmospheric_deposition_to_soils_and_water =>
            col::EF_INDIRECT_N2O_ATMOSPHERIC_DEPOSITION_TO_SOILS_AND_WATER;
        ef_indirect_n2o_from_leaching_and_runoff =>
            col::EF_INDIRECT_N2O_FROM_LEACHING_AND_RUNOFF;
        ef_tan_house_liquid => col::EF_TAN_HOUSE_LIQUID;
        ef_tan_house_solid => col::EF_TAN_HOUSE_SOLID;
        ef_tan_storage_tank => col::EF_TAN_STORAGE_TANK;
        ef_tan_storage_solid => col::EF_TAN_STORAGE_SOLID;
        ef_mcf_liquid_tank => col::EF_MCF_LIQUID_TANK;
        ef_mcf_solid_storage => col::EF_MCF_SOLID_STORAGE;
        ef_mcf_anaerobic_digestion => col::EF_MCF_ANAEROBIC_DIGESTION;
        ef_n2o_direct_storage_tank_liquid => col::EF_N2O_DIRECT_STORAGE_TANK_LIQUID;
        ef_n2o_direct_storage_tank_solid => col::EF_N2O_DIRECT_STORAGE_TANK_SOLID;
        ef_n2o_direct_storage_solid => col::EF_N2O_DIRECT_STORAGE_SOLID;
        ef_n2o_direct_storage_tank_anaerobic_digestion =>
            col::EF_N2O_DIRECT_STORAGE_TANK_ANAEROBIC_DIGESTION;
        ef_nh3_daily_spreading_none => col::EF_NH3_DAILY_SPREADING_NONE;
        ef_nh3_daily_spreading_manure => col::EF_NH3_DAILY_SPREADING_MANURE;
        ef_nh3_daily_spreading_broadcast => col::EF_NH3_DAILY_SPREADING_BROADCAST;
        ef_nh3_daily_spreading_injection => col::EF_NH3_DAILY_SPREADING_INJECTION;
        ef_nh3_daily_spreading_trailing_hose => col::EF_NH3_DAILY_SPREADING_TRALING_HOSE;
        ef_urea => col::EF_UREA;
        ef_urea_and_nbpt => col::EF_UREA_AND_NBPT;
        ef_frac_gasf_urea_fertilisers_to_nh3_and_nox =>
            col::EF_FRACGASF_UREA_FERTILISERS_TO_NH3_AND_NOX;
        ef_frac_gasf_urea_and_nbpt_to_nh3_and_nox =>
            col::EF_FRACGASF_UREA_AND_NBPT_TO_NH3_AND_NOX;
        ef_frac_leach_runoff => col::EF_FRAC_LEACH_RUNOFF;
        ef_ammonium_nitrate => col::EF_AMMONIUM_NITRATE;
        ef_frac_gasf_ammonium_fertilisers_to_nh3_and_nox =>
            col::EF_FRACGASF_AMMONIUM_FERTILISERS_TO_NH3_AND_NOX;
        /// Fraction of applied phosphorus lost to leaching.
        ef_frac_p_leach => col::FRAC_P_LEACH;
        ef_urea_co2 => col::EF_UREA_CO2;
        ef_lime_co2 => col::EF_LIME_CO2;
    }
}

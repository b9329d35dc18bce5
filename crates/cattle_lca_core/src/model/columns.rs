//! Column names of the resource tables.
//!
//! These names are the wire format between this crate and the store and must
//! match `db/schema/0001_resource_tables.sql`.

pub mod grass {
    pub const GRASS_GENUS: &str = "grass_genus";
    pub const FORAGE_DRY_MATTER_DIGESTIBILITY: &str = "forage_dry_matter_digestibility";
    pub const CRUDE_PROTEIN: &str = "crude_protein";
    pub const GROSS_ENERGY: &str = "gross_energy";
}

pub mod concentrate {
    pub const CON_TYPE: &str = "con_type";
    pub const CON_DRY_MATTER_DIGESTIBILITY: &str = "con_dry_matter_digestibility";
    pub const CON_DIGESTIBLE_ENERGY: &str = "con_digestible_energy";
    pub const CON_CRUDE_PROTEIN: &str = "con_crude_protein";
    pub const GROSS_ENERGY_MJE_DRY_MATTER: &str = "gross_energy_mje_dry_matter";
    pub const CON_CO2_E: &str = "con_co2_e";
    pub const CON_PO4_E: &str = "con_po4_e";
}

pub mod upstream {
    pub const UPSTREAM_TYPE: &str = "upstream_type";
    pub const UPSTREAM_FU: &str = "upstream_fu";
    pub const UPSTREAM_KG_CO2E: &str = "upstream_kg_co2e";
    pub const UPSTREAM_KG_PO4E: &str = "upstream_kg_po4e";
    pub const UPSTREAM_KG_SO2E: &str = "upstream_kg_so2e";
    pub const UPSTREAM_MJE: &str = "upstream_mje";
    pub const UPSTREAM_KG_SBE: &str = "upstream_kg_sbe";
}

/// Per-cohort columns are named `{cohort}_weight_gain` and
/// `{cohort}_n_retention`; see `Cohort::name`.
pub mod animal_features {
    pub const BIRTH_WEIGHT: &str = "birth_weight";
    pub const MATURE_WEIGHT_BULLS: &str = "mature_weight_bulls";
    pub const MATURE_WEIGHT_DAIRY_COWS: &str = "mature_weight_dairy_cows";
    pub const MATURE_WEIGHT_SUCKLER_COWS: &str = "mature_weight_suckler_cows";
    pub const WEIGHT_GAIN_SUFFIX: &str = "_weight_gain";
    pub const N_RETENTION_SUFFIX: &str = "_n_retention";
}

pub mod emissions_factors {
    pub const EF_NET_ENERGY_FOR_MAINTENANCE_NON_LACTATING_COW: &str =
        "ef_net_energy_for_maintenance_non_lactating_cow";
    pub const EF_NET_ENERGY_FOR_MAINTENANCE_LACTATING_COW: &str =
        "ef_net_energy_for_maintenance_lactating_cow";
    pub const EF_NET_ENERGY_FOR_MAINTENANCE_BULLS: &str = "ef_net_energy_for_maintenance_bulls";
    pub const EF_FEEDING_SITUATION_PASTURE: &str = "ef_feeding_situation_pasture";
    pub const EF_FEEDING_SITUATION_LARGE_AREA: &str = "ef_feeding_situation_large_area";
    pub const EF_FEEDING_SITUATION_STALL: &str = "ef_feeding_situation_stall";
    pub const EF_NET_ENERGY_FOR_GROWTH_FEMALES: &str = "ef_net_energy_for_growth_females";
    pub const EF_NET_ENERGY_FOR_GROWTH_CASTRATES: &str = "ef_net_energy_for_growth_castrates";
    pub const EF_NET_ENERGY_FOR_GROWTH_BULLS: &str = "ef_net_energy_for_growth_bulls";
    pub const EF_NET_ENERGY_FOR_PREGNANCY: &str = "ef_net_energy_for_pregnancy";
    pub const EF_METHANE_CONVERSION_FACTOR_DAIRY_COW: &str =
        "ef_methane_conversion_factor_dairy_cow";
    pub const EF_METHANE_CONVERSION_FACTOR_STEER: &str = "ef_methane_conversion_factor_steer";
    pub const EF_METHANE_CONVERSION_FACTOR_CALVES: &str = "ef_methane_conversion_factor_calves";
    pub const EF_METHANE_CONVERSION_FACTOR_BULLS: &str = "ef_methane_conversion_factor_bulls";
    pub const EF_FRACGASM_TOTAL_AMMONIA_NITROGEN_PASTURE_RANGE_PADDOCK_DEPOSITION: &str =
        "ef_fracGASM_total_ammonia_nitrogen_pasture_range_paddock_deposition";
    pub const EF_CPP_PASTURE_RANGE_PADDOCK_FOR_DAIRY_AND_NON_DAIRY_DIRECT_N2O: &str =
        "ef_cpp_pasture_range_paddock_for_dairy_and_non_dairy_direct_n2o";
    pub const EF_DIRECT_N2O_EMISSIONS_SOILS: &str = "ef_direct_n2o_emissions_soils";
    pub const EF_INDIRECT_N2O_ATMOSPHERIC_DEPOSITION_TO_SOILS_AND_WATER: &str =
        "ef_indirect_n2o_atmospheric_deposition_to_soils_and_water";
    pub const EF_INDIRECT_N2O_FROM_LEACHING_AND_RUNOFF: &str =
        "ef_indirect_n2o_from_leaching_and_runoff";
    pub const EF_TAN_HOUSE_LIQUID: &str = "ef_TAN_house_liquid";
    pub const EF_TAN_HOUSE_SOLID: &str = "ef_TAN_house_solid";
    pub const EF_TAN_STORAGE_TANK: &str = "ef_TAN_storage_tank";
    pub const EF_TAN_STORAGE_SOLID: &str = "ef_TAN_storage_solid";
    pub const EF_MCF_LIQUID_TANK: &str = "ef_mcf_liquid_tank";
    pub const EF_MCF_SOLID_STORAGE: &str = "ef_mcf_solid_storage";
    pub const EF_MCF_ANAEROBIC_DIGESTION: &str = "ef_mcf_anaerobic_digestion";
    pub const EF_N2O_DIRECT_STORAGE_TANK_LIQUID: &str = "ef_n2o_direct_storage_tank_liquid";
    pub const EF_N2O_DIRECT_STORAGE_TANK_SOLID: &str = "ef_n2o_direct_storage_tank_solid";
    pub const EF_N2O_DIRECT_STORAGE_SOLID: &str = "ef_n2o_direct_storage_solid";
    pub const EF_N2O_DIRECT_STORAGE_TANK_ANAEROBIC_DIGESTION: &str =
        "ef_n2o_direct_storage_tank_anaerobic_digestion";
    pub const EF_NH3_DAILY_SPREADING_NONE: &str = "ef_nh3_daily_spreading_none";
    pub const EF_NH3_DAILY_SPREADING_MANURE: &str = "ef_nh3_daily_spreading_manure";
    pub const EF_NH3_DAILY_SPREADING_BROADCAST: &str = "ef_nh3_daily_spreading_broadcast";
    pub const EF_NH3_DAILY_SPREADING_INJECTION: &str = "ef_nh3_daily_spreading_injection";
    /// Spelling follows the store column.
    pub const EF_NH3_DAILY_SPREADING_TRALING_HOSE: &str = "ef_nh3_daily_spreading_traling_hose";
    pub const EF_UREA: &str = "ef_urea";
    pub const EF_UREA_AND_NBPT: &str = "ef_urea_and_nbpt";
    pub const EF_FRACGASF_UREA_FERTILISERS_TO_NH3_AND_NOX: &str =
        "ef_fracGASF_urea_fertilisers_to_nh3_and_nox";
    pub const EF_FRACGASF_UREA_AND_NBPT_TO_NH3_AND_NOX: &str =
        "ef_fracGASF_urea_and_nbpt_to_nh3_and_nox";
    pub const EF_FRAC_LEACH_RUNOFF: &str = "ef_frac_leach_runoff";
    pub const EF_AMMONIUM_NITRATE: &str = "ef_ammonium_nitrate";
    pub const EF_FRACGASF_AMMONIUM_FERTILISERS_TO_NH3_AND_NOX: &str =
        "ef_fracGASF_ammonium_fertilisers_to_nh3_and_nox";
    pub const FRAC_P_LEACH: &str = "Frac_P_Leach";
    pub const EF_UREA_CO2: &str = "ef_urea_co2";
    pub const EF_LIME_CO2: &str = "ef_lime_co2";
}

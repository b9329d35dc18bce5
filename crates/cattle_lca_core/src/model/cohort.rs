//! Recognized cattle cohorts.
//!
//! # Invariants
//! - `Cohort::name` is the exact prefix of the per-cohort animal-feature
//!   columns and the key the calculator passes in.
//! - The set is closed: any other name is `LookupError::UnknownCohort`.

use super::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

/// Age and sex class of a cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    Cow,
    Bull,
    Calf,
    Heifer,
    Steer,
}

/// Sub-population of cattle with its own physiological parameters.
///
/// Crosses are dairy × dairy (`DxD`), dairy × beef (`DxB`) and beef × beef
/// (`BxB`).
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cohort {
    #[serde(rename = "dairy_cows")]
    DairyCows,
    #[serde(rename = "suckler_cows")]
    SucklerCows,
    #[serde(rename = "bulls")]
    Bulls,
    DxD_calves_m,
    DxD_calves_f,
    DxB_calves_m,
    DxB_calves_f,
    BxB_calves_m,
    BxB_calves_f,
    DxD_heifers_less_2_yr,
    DxD_steers_less_2_yr,
    DxB_heifers_less_2_yr,
    DxB_steers_less_2_yr,
    BxB_heifers_less_2_yr,
    BxB_steers_less_2_yr,
    DxD_heifers_more_2_yr,
    DxD_steers_more_2_yr,
    DxB_heifers_more_2_yr,
    DxB_steers_more_2_yr,
    BxB_heifers_more_2_yr,
    BxB_steers_more_2_yr,
}

impl Cohort {
    pub const ALL: [Cohort; 21] = [
        Cohort::DairyCows,
        Cohort::SucklerCows,
        Cohort::Bulls,
        Cohort::DxD_calves_m,
        Cohort::DxD_calves_f,
        Cohort::DxB_calves_m,
        Cohort::DxB_calves_f,
        Cohort::BxB_calves_m,
        Cohort::BxB_calves_f,
        Cohort::DxD_heifers_less_2_yr,
        Cohort::DxD_steers_less_2_yr,
        Cohort::DxB_heifers_less_2_yr,
        Cohort::DxB_steers_less_2_yr,
        Cohort::BxB_heifers_less_2_yr,
        Cohort::BxB_steers_less_2_yr,
        Cohort::DxD_heifers_more_2_yr,
        Cohort::DxD_steers_more_2_yr,
        Cohort::DxB_heifers_more_2_yr,
        Cohort::DxB_steers_more_2_yr,
        Cohort::BxB_heifers_more_2_yr,
        Cohort::BxB_steers_more_2_yr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DairyCows => "dairy_cows",
            Self::SucklerCows => "suckler_cows",
            Self::Bulls => "bulls",
            Self::DxD_calves_m => "DxD_calves_m",
            Self::DxD_calves_f => "DxD_calves_f",
            Self::DxB_calves_m => "DxB_calves_m",
            Self::DxB_calves_f => "DxB_calves_f",
            Self::BxB_calves_m => "BxB_calves_m",
            Self::BxB_calves_f => "BxB_calves_f",
            Self::DxD_heifers_less_2_yr => "DxD_heifers_less_2_yr",
            Self::DxD_steers_less_2_yr => "DxD_steers_less_2_yr",
            Self::DxB_heifers_less_2_yr => "DxB_heifers_less_2_yr",
            Self::DxB_steers_less_2_yr => "DxB_steers_less_2_yr",
            Self::BxB_heifers_less_2_yr => "BxB_heifers_less_2_yr",
            Self::BxB_steers_less_2_yr => "BxB_steers_less_2_yr",
            Self::DxD_heifers_more_2_yr => "DxD_heifers_more_2_yr",
            Self::DxD_steers_more_2_yr => "DxD_steers_more_2_yr",
            Self::DxB_heifers_more_2_yr => "DxB_heifers_more_2_yr",
            Self::DxB_steers_more_2_yr => "DxB_steers_more_2_yr",
            Self::BxB_heifers_more_2_yr => "BxB_heifers_more_2_yr",
            Self::BxB_steers_more_2_yr => "BxB_steers_more_2_yr",
        }
    }

    pub fn gender(self) -> Gender {
        match self {
            Self::DairyCows
            | Self::SucklerCows
            | Self::DxD_calves_f
            | Self::DxB_calves_f
            | Self::BxB_calves_f
            | Self::DxD_heifers_less_2_yr
            | Self::DxB_heifers_less_2_yr
            | Self::BxB_heifers_less_2_yr
            | Self::DxD_heifers_more_2_yr
            | Self::DxB_heifers_more_2_yr
            | Self::BxB_heifers_more_2_yr => Gender::Female,
            Self::Bulls
            | Self::DxD_calves_m
            | Self::DxB_calves_m
            | Self::BxB_calves_m
            | Self::DxD_steers_less_2_yr
            | Self::DxB_steers_less_2_yr
            | Self::BxB_steers_less_2_yr
            | Self::DxD_steers_more_2_yr
            | Self::DxB_steers_more_2_yr
            | Self::BxB_steers_more_2_yr => Gender::Male,
        }
    }

    pub fn life_stage(self) -> LifeStage {
        match self {
            Self::DairyCows | Self::SucklerCows => LifeStage::Cow,
            Self::Bulls => LifeStage::Bull,
            Self::DxD_calves_m
            | Self::DxD_calves_f
            | Self::DxB_calves_m
            | Self::DxB_calves_f
            | Self::BxB_calves_m
            | Self::BxB_calves_f => LifeStage::Calf,
            Self::DxD_heifers_less_2_yr
            | Self::DxB_heifers_less_2_yr
            | Self::BxB_heifers_less_2_yr
            | Self::DxD_heifers_more_2_yr
            | Self::DxB_heifers_more_2_yr
            | Self::BxB_heifers_more_2_yr => LifeStage::Heifer,
            Self::DxD_steers_less_2_yr
            | Self::DxB_steers_less_2_yr
            | Self::BxB_steers_less_2_yr
            | Self::DxD_steers_more_2_yr
            | Self::DxB_steers_more_2_yr
            | Self::BxB_steers_more_2_yr => LifeStage::Steer,
        }
    }

    /// Adult breeding females (lactating).
    pub fn is_cow(self) -> bool {
        self.life_stage() == LifeStage::Cow
    }

    /// Column holding this cohort's daily weight gain.
    pub fn weight_gain_column(self) -> String {
        format!(
            "{}{}",
            self.name(),
            super::columns::animal_features::WEIGHT_GAIN_SUFFIX
        )
    }

    /// Column holding this cohort's nitrogen retention.
    pub fn n_retention_column(self) -> String {
        format!(
            "{}{}",
            self.name(),
            super::columns::animal_features::N_RETENTION_SUFFIX
        )
    }
}

impl Display for Cohort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cohort {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cohort| cohort.name() == value)
            .ok_or_else(|| LookupError::UnknownCohort(value.to_string()))
    }
}

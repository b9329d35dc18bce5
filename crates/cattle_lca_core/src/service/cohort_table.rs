//! Two-level `(cohort, parameter)` view over the country's flat factor rows.
//!
//! # Responsibility
//! - Decide, per cohort and parameter, which store column supplies the value.
//! - Resolve every pair once, when the manager is built.
//!
//! # Invariants
//! - Keys are exactly `Cohort::ALL` × `CohortParameter::ALL`.
//! - A pair resolves to its own cohort's column or a shared factor, never to
//!   another cohort's per-cohort column.

use crate::model::animal_features::AnimalFeatures;
use crate::model::cohort::{Cohort, Gender, LifeStage};
use crate::model::columns::{animal_features as feature_col, emissions_factors as ef_col};
use crate::model::emissions_factors::EmissionsFactors;
use crate::model::{LookupError, LookupResult};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const SOURCE: &str = "cohort_parameters";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CohortParameter {
    MethaneConversionFactor,
    NRetention,
    TotalAmmoniaNitrogen,
    DirectN2oEmissionsFactors,
    AtmosphericDeposition,
    Leaching,
    /// Net energy for maintenance coefficient.
    Coefficient,
    WeightGain,
    /// Net energy for growth coefficient.
    Growth,
    MatureWeight,
    /// Net energy for pregnancy coefficient; cows only.
    Pregnancy,
    ProportionN2oToSoils,
}

impl CohortParameter {
    pub const ALL: [CohortParameter; 12] = [
        Self::MethaneConversionFactor,
        Self::NRetention,
        Self::TotalAmmoniaNitrogen,
        Self::DirectN2oEmissionsFactors,
        Self::AtmosphericDeposition,
        Self::Leaching,
        Self::Coefficient,
        Self::WeightGain,
        Self::Growth,
        Self::MatureWeight,
        Self::Pregnancy,
        Self::ProportionN2oToSoils,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::MethaneConversionFactor => "methane_conversion_factor",
            Self::NRetention => "N_retention",
            Self::TotalAmmoniaNitrogen => "total_ammonia_nitrogen",
            Self::DirectN2oEmissionsFactors => "direct_n2o_emissions_factors",
            Self::AtmosphericDeposition => "atmospheric_deposition",
            Self::Leaching => "leaching",
            Self::Coefficient => "coefficient",
            Self::WeightGain => "weight_gain",
            Self::Growth => "growth",
            Self::MatureWeight => "mature_weight",
            Self::Pregnancy => "pregnancy",
            Self::ProportionN2oToSoils => "proportion_n2o_to_soils",
        }
    }
}

impl Display for CohortParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CohortParameter {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|parameter| parameter.name() == value)
            .ok_or_else(|| LookupError::UnknownParameter(value.to_string()))
    }
}

/// Where a `(cohort, parameter)` value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterSource {
    EmissionsFactor(&'static str),
    AnimalFeature(String),
    /// Mean of dairy-cow and suckler-cow mature weight.
    MatureWeightAverage,
    NotApplicable,
}

impl ParameterSource {
    pub fn for_pair(cohort: Cohort, parameter: CohortParameter) -> Self {
        use CohortParameter as P;

        let stage = cohort.life_stage();
        match parameter {
            P::MethaneConversionFactor => Self::EmissionsFactor(match stage {
                LifeStage::Cow | LifeStage::Heifer => ef_col::EF_METHANE_CONVERSION_FACTOR_DAIRY_COW,
                LifeStage::Bull => ef_col::EF_METHANE_CONVERSION_FACTOR_BULLS,
                LifeStage::Calf => ef_col::EF_METHANE_CONVERSION_FACTOR_CALVES,
                LifeStage::Steer => ef_col::EF_METHANE_CONVERSION_FACTOR_STEER,
            }),
            P::NRetention => Self::AnimalFeature(cohort.n_retention_column()),
            P::TotalAmmoniaNitrogen => Self::EmissionsFactor(
                ef_col::EF_FRACGASM_TOTAL_AMMONIA_NITROGEN_PASTURE_RANGE_PADDOCK_DEPOSITION,
            ),
            P::DirectN2oEmissionsFactors => Self::EmissionsFactor(
                ef_col::EF_CPP_PASTURE_RANGE_PADDOCK_FOR_DAIRY_AND_NON_DAIRY_DIRECT_N2O,
            ),
            P::AtmosphericDeposition => Self::EmissionsFactor(
                ef_col::EF_INDIRECT_N2O_ATMOSPHERIC_DEPOSITION_TO_SOILS_AND_WATER,
            ),
            P::Leaching => {
                Self::EmissionsFactor(ef_col::EF_INDIRECT_N2O_FROM_LEACHING_AND_RUNOFF)
            }
            P::Coefficient => Self::EmissionsFactor(match stage {
                LifeStage::Cow => ef_col::EF_NET_ENERGY_FOR_MAINTENANCE_LACTATING_COW,
                LifeStage::Bull => ef_col::EF_NET_ENERGY_FOR_MAINTENANCE_BULLS,
                _ => ef_col::EF_NET_ENERGY_FOR_MAINTENANCE_NON_LACTATING_COW,
            }),
            P::WeightGain => Self::AnimalFeature(cohort.weight_gain_column()),
            P::Growth => Self::EmissionsFactor(match (cohort.gender(), stage) {
                (Gender::Female, _) => ef_col::EF_NET_ENERGY_FOR_GROWTH_FEMALES,
                (Gender::Male, LifeStage::Bull) => ef_col::EF_NET_ENERGY_FOR_GROWTH_BULLS,
                (Gender::Male, _) => ef_col::EF_NET_ENERGY_FOR_GROWTH_CASTRATES,
            }),
            P::MatureWeight => mature_weight_source(cohort),
            P::Pregnancy if stage == LifeStage::Cow => {
                Self::EmissionsFactor(ef_col::EF_NET_ENERGY_FOR_PREGNANCY)
            }
            P::Pregnancy => Self::NotApplicable,
            P::ProportionN2oToSoils => {
                Self::EmissionsFactor(ef_col::EF_DIRECT_N2O_EMISSIONS_SOILS)
            }
        }
    }
}

fn mature_weight_source(cohort: Cohort) -> ParameterSource {
    use Cohort as C;

    if cohort.gender() == Gender::Male {
        return ParameterSource::AnimalFeature(feature_col::MATURE_WEIGHT_BULLS.to_string());
    }
    match cohort {
        C::DairyCows | C::DxD_calves_f | C::DxD_heifers_less_2_yr | C::DxD_heifers_more_2_yr => {
            ParameterSource::AnimalFeature(feature_col::MATURE_WEIGHT_DAIRY_COWS.to_string())
        }
        C::DxB_calves_f | C::DxB_heifers_less_2_yr | C::DxB_heifers_more_2_yr => {
            ParameterSource::MatureWeightAverage
        }
        _ => ParameterSource::AnimalFeature(feature_col::MATURE_WEIGHT_SUCKLER_COWS.to_string()),
    }
}

/// Mean of dairy-cow and suckler-cow mature weight, equally weighted.
pub fn mature_weight_average(features: &AnimalFeatures) -> LookupResult<f64> {
    let dairy = features.mature_weight_dairy_cows()?;
    let suckler = features.mature_weight_suckler_cows()?;
    Ok((dairy + suckler) / 2.0)
}

/// Every `(cohort, parameter)` pair resolved against one country's rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortTable {
    values: BTreeMap<Cohort, BTreeMap<CohortParameter, LookupResult<f64>>>,
}

fn missing(cohort: Cohort, parameter: CohortParameter) -> LookupError {
    LookupError::MissingValue {
        source: SOURCE,
        key: cohort.name().to_string(),
        field: parameter.name().to_string(),
    }
}

impl CohortTable {
    pub fn build(features: &AnimalFeatures, factors: &EmissionsFactors) -> Self {
        let values = Cohort::ALL
            .into_iter()
            .map(|cohort| {
                let parameters = CohortParameter::ALL
                    .into_iter()
                    .map(|parameter| {
                        let value = match ParameterSource::for_pair(cohort, parameter) {
                            ParameterSource::EmissionsFactor(column) => factors.get(column),
                            ParameterSource::AnimalFeature(column) => features.get(&column),
                            ParameterSource::MatureWeightAverage => {
                                mature_weight_average(features)
                            }
                            ParameterSource::NotApplicable => Err(missing(cohort, parameter)),
                        };
                        // A column absent from the store is missing data, not a bad name.
                        let value = value.map_err(|err| match err {
                            LookupError::UnknownParameter(_) => missing(cohort, parameter),
                            other => other,
                        });
                        (parameter, value)
                    })
                    .collect();
                (cohort, parameters)
            })
            .collect();

        Self { values }
    }

    pub fn get(&self, cohort: Cohort, parameter: CohortParameter) -> LookupResult<f64> {
        self.values
            .get(&cohort)
            .and_then(|parameters| parameters.get(&parameter))
            .cloned()
            .unwrap_or_else(|| Err(missing(cohort, parameter)))
    }

    pub fn cohorts(&self) -> impl Iterator<Item = Cohort> + '_ {
        self.values.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{CohortParameter, ParameterSource};
    use crate::model::cohort::Cohort;
    use crate::model::LookupError;

    #[test]
    fn parameter_names_round_trip() {
        for parameter in CohortParameter::ALL {
            assert_eq!(parameter.name().parse::<CohortParameter>().expect("known name"), parameter);
        }
        assert_eq!(
            "gender".parse::<CohortParameter>().unwrap_err(),
            LookupError::UnknownParameter("gender".to_string())
        );
    }

    #[test]
    fn per_cohort_sources_use_the_cohort_own_column() {
        for cohort in Cohort::ALL {
            let expected = cohort.weight_gain_column();
            assert_eq!(
                ParameterSource::for_pair(cohort, CohortParameter::WeightGain),
                ParameterSource::AnimalFeature(expected)
            );
            assert_eq!(
                ParameterSource::for_pair(cohort, CohortParameter::NRetention),
                ParameterSource::AnimalFeature(cohort.n_retention_column())
            );
        }
    }

    #[test]
    fn mature_weight_follows_breed_line() {
        let source = |cohort| ParameterSource::for_pair(cohort, CohortParameter::MatureWeight);
        assert_eq!(
            source(Cohort::DxD_heifers_less_2_yr),
            ParameterSource::AnimalFeature("mature_weight_dairy_cows".to_string())
        );
        assert_eq!(
            source(Cohort::BxB_calves_f),
            ParameterSource::AnimalFeature("mature_weight_suckler_cows".to_string())
        );
        assert_eq!(
            source(Cohort::DxB_heifers_more_2_yr),
            ParameterSource::MatureWeightAverage
        );
        assert_eq!(
            source(Cohort::DxD_steers_more_2_yr),
            ParameterSource::AnimalFeature("mature_weight_bulls".to_string())
        );
    }

    #[test]
    fn growth_and_maintenance_split_by_stage() {
        assert_eq!(
            ParameterSource::for_pair(Cohort::Bulls, CohortParameter::Growth),
            ParameterSource::EmissionsFactor("ef_net_energy_for_growth_bulls")
        );
        assert_eq!(
            ParameterSource::for_pair(Cohort::DxD_calves_m, CohortParameter::Growth),
            ParameterSource::EmissionsFactor("ef_net_energy_for_growth_castrates")
        );
        assert_eq!(
            ParameterSource::for_pair(Cohort::SucklerCows, CohortParameter::Coefficient),
            ParameterSource::EmissionsFactor("ef_net_energy_for_maintenance_lactating_cow")
        );
        assert_eq!(
            ParameterSource::for_pair(Cohort::BxB_heifers_less_2_yr, CohortParameter::Coefficient),
            ParameterSource::EmissionsFactor("ef_net_energy_for_maintenance_non_lactating_cow")
        );
        assert_eq!(
            ParameterSource::for_pair(Cohort::DxB_heifers_less_2_yr, CohortParameter::MethaneConversionFactor),
            ParameterSource::EmissionsFactor("ef_methane_conversion_factor_dairy_cow")
        );
    }

    #[test]
    fn pregnancy_applies_to_cows_only() {
        assert_eq!(
            ParameterSource::for_pair(Cohort::DairyCows, CohortParameter::Pregnancy),
            ParameterSource::EmissionsFactor("ef_net_energy_for_pregnancy")
        );
        assert_eq!(
            ParameterSource::for_pair(Cohort::DxD_heifers_more_2_yr, CohortParameter::Pregnancy),
            ParameterSource::NotApplicable
        );
    }
}

//! Farm management practices and the emission factor each one selects.

use crate::model::columns::emissions_factors as col;
use crate::model::LookupError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Where animals graze; selects the maintenance activity coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrazingType {
    Pasture,
    LargeArea,
    Stall,
}

impl GrazingType {
    pub const ALL: [GrazingType; 3] = [Self::Pasture, Self::LargeArea, Self::Stall];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pasture => "pasture",
            Self::LargeArea => "large area",
            Self::Stall => "stall",
        }
    }

    pub fn feeding_situation_column(self) -> &'static str {
        match self {
            Self::Pasture => col::EF_FEEDING_SITUATION_PASTURE,
            Self::LargeArea => col::EF_FEEDING_SITUATION_LARGE_AREA,
            Self::Stall => col::EF_FEEDING_SITUATION_STALL,
        }
    }
}

/// Manure management storage system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    TankSolid,
    TankLiquid,
    Solid,
    Biodigester,
}

impl StorageType {
    pub const ALL: [StorageType; 4] = [
        Self::TankSolid,
        Self::TankLiquid,
        Self::Solid,
        Self::Biodigester,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::TankSolid => "tank solid",
            Self::TankLiquid => "tank liquid",
            Self::Solid => "solid",
            Self::Biodigester => "biodigester",
        }
    }

    /// Fraction of TAN lost as NH3 in housing.
    ///
    /// Both tank systems use the liquid housing factor.
    pub fn tan_column(self) -> &'static str {
        match self {
            Self::TankSolid | Self::TankLiquid => col::EF_TAN_HOUSE_LIQUID,
            Self::Solid => col::EF_TAN_HOUSE_SOLID,
            Self::Biodigester => col::EF_TAN_STORAGE_TANK,
        }
    }

    pub fn mcf_column(self) -> &'static str {
        match self {
            Self::TankSolid | Self::TankLiquid => col::EF_MCF_LIQUID_TANK,
            Self::Solid => col::EF_MCF_SOLID_STORAGE,
            Self::Biodigester => col::EF_MCF_ANAEROBIC_DIGESTION,
        }
    }

    pub fn n2o_column(self) -> &'static str {
        match self {
            Self::TankSolid => col::EF_N2O_DIRECT_STORAGE_TANK_SOLID,
            Self::TankLiquid => col::EF_N2O_DIRECT_STORAGE_TANK_LIQUID,
            Self::Solid => col::EF_N2O_DIRECT_STORAGE_SOLID,
            Self::Biodigester => col::EF_N2O_DIRECT_STORAGE_TANK_ANAEROBIC_DIGESTION,
        }
    }
}

/// Daily manure spreading technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpreadingType {
    None,
    Manure,
    Broadcast,
    Injection,
    TrailingHose,
}

impl SpreadingType {
    pub const ALL: [SpreadingType; 5] = [
        Self::None,
        Self::Manure,
        Self::Broadcast,
        Self::Injection,
        Self::TrailingHose,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Manure => "manure",
            Self::Broadcast => "broadcast",
            Self::Injection => "injection",
            Self::TrailingHose => "trailing hose",
        }
    }

    pub fn nh3_column(self) -> &'static str {
        match self {
            Self::None => col::EF_NH3_DAILY_SPREADING_NONE,
            Self::Manure => col::EF_NH3_DAILY_SPREADING_MANURE,
            Self::Broadcast => col::EF_NH3_DAILY_SPREADING_BROADCAST,
            Self::Injection => col::EF_NH3_DAILY_SPREADING_INJECTION,
            Self::TrailingHose => col::EF_NH3_DAILY_SPREADING_TRALING_HOSE,
        }
    }
}

macro_rules! practice_names {
    ($($kind:ident => $error:ident;)*) => {
        $(
            impl Display for $kind {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl FromStr for $kind {
                type Err = LookupError;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    Self::ALL
                        .into_iter()
                        .find(|kind| kind.name() == value)
                        .ok_or_else(|| LookupError::$error(value.to_string()))
                }
            }
        )*
    };
}

practice_names! {
    GrazingType => UnknownGrazingType;
    StorageType => UnknownStorageType;
    SpreadingType => UnknownSpreadingType;
}

//! Eager construction of every resource wrapper for one country.
//!
//! # Responsibility
//! - Read the five resource tables once and build their wrappers.
//! - Release the store connection before any lookup happens.
//!
//! # Invariants
//! - A `Loader` exists only if all five tables were read successfully.
//! - The bound country never changes; a new country needs a new `Loader`.
//! - Lookups through a `Loader` never touch the store.

use crate::config;
use crate::db::{CountryCode, DbResult, TableStore};
use crate::model::animal_features::AnimalFeatures;
use crate::model::columns::{
    concentrate as concentrate_col, grass as grass_col, upstream as upstream_col,
};
use crate::model::concentrate::Concentrate;
use crate::model::emissions_factors::EmissionsFactors;
use crate::model::grass::Grass;
use crate::model::upstream::Upstream;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// All resource wrappers for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct Loader {
    country: CountryCode,
    grass: Grass,
    concentrates: Concentrate,
    upstream: Upstream,
    animal_features: AnimalFeatures,
    emissions_factors: EmissionsFactors,
}

impl Loader {
    /// Loads from the configured resource store (see `config::database_path`).
    ///
    /// # Errors
    /// - `DbError::StoreUnavailable` when the store cannot be opened.
    /// - Any table read or wrapper construction error, first failure wins.
    pub fn new(country: impl Into<CountryCode>) -> DbResult<Self> {
        Self::open(config::database_path(), country)
    }

    /// Loads from the resource database file at `path`.
    pub fn open(path: impl AsRef<Path>, country: impl Into<CountryCode>) -> DbResult<Self> {
        Self::from_store(TableStore::open(path, country.into())?)
    }

    /// Loads from an open connection, e.g. a seeded in-memory store.
    pub fn from_connection(conn: Connection, country: impl Into<CountryCode>) -> DbResult<Self> {
        Self::from_store(TableStore::new(conn, country.into()))
    }

    /// Builds every wrapper from `store`, then drops it.
    pub fn from_store(store: TableStore) -> DbResult<Self> {
        let started_at = Instant::now();
        let country = store.country().clone();
        info!(
            "event=loader_build module=service status=start country={}",
            country
        );

        match Self::build(&store) {
            Ok(loader) => {
                info!(
                    "event=loader_build module=service status=ok country={} grass={} concentrates={} upstream={} animal_features={} emissions_factors={} duration_ms={}",
                    country,
                    loader.grass.len(),
                    loader.concentrates.len(),
                    loader.upstream.len(),
                    loader.animal_features.is_loaded(),
                    loader.emissions_factors.is_loaded(),
                    started_at.elapsed().as_millis()
                );
                Ok(loader)
            }
            Err(err) => {
                error!(
                    "event=loader_build module=service status=error country={} duration_ms={} error={}",
                    country,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn build(store: &TableStore) -> DbResult<Self> {
        let country = store.country().clone();
        let grass = Grass::from_rows(store.grass_data(Some(grass_col::GRASS_GENUS))?)?;
        let concentrates =
            Concentrate::from_rows(store.concentrate_data(Some(concentrate_col::CON_TYPE))?)?;
        let upstream = Upstream::from_rows(store.upstream_data(Some(upstream_col::UPSTREAM_TYPE))?)?;
        let animal_features =
            AnimalFeatures::from_rows(store.animal_features_data(None)?, country.as_str())?;
        let emissions_factors =
            EmissionsFactors::from_rows(store.emissions_factor_data(None)?, country.as_str())?;

        Ok(Self {
            country,
            grass,
            concentrates,
            upstream,
            animal_features,
            emissions_factors,
        })
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    pub fn grass(&self) -> &Grass {
        &self.grass
    }

    pub fn concentrates(&self) -> &Concentrate {
        &self.concentrates
    }

    pub fn upstream(&self) -> &Upstream {
        &self.upstream
    }

    pub fn animal_features(&self) -> &AnimalFeatures {
        &self.animal_features
    }

    pub fn emissions_factors(&self) -> &EmissionsFactors {
        &self.emissions_factors
    }

    /// `true` when every wrapper holds data for the bound country.
    pub fn is_complete(&self) -> bool {
        self.grass.is_loaded()
            && self.concentrates.is_loaded()
            && self.upstream.is_loaded()
            && self.animal_features.is_loaded()
            && self.emissions_factors.is_loaded()
    }
}

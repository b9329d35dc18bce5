//! Animal records supplied by the calculator.
//!
//! # Responsibility
//! - Define the fields a calculator may read from any animal representation.
//! - Provide a default record shape deserializable from farm input data.
//!
//! # Invariants
//! - Reads return the stored field verbatim; nothing is validated or derived.
//! - Records are never mutated through this module.
//! - `wool` is `None` for animals that do not produce wool.

use serde::{Deserialize, Serialize};

/// Read capability over one animal category of one farm.
///
/// Implement this for any record shape the calculator should accept.
pub trait AnimalAttributes {
    /// Concentrate fed, kg per head per day.
    fn con_amount(&self) -> f64;
    fn con_type(&self) -> &str;
    /// Grass genus name, or `average`.
    fn forage(&self) -> &str;
    /// Cohort name as supplied; parse with `Cohort::from_str`.
    fn cohort(&self) -> &str;
    fn pop(&self) -> f64;
    /// Live weight, kg.
    fn weight(&self) -> f64;
    /// Litres per head per day.
    fn daily_milk(&self) -> f64;
    fn year(&self) -> i32;
    fn grazing(&self) -> &str;
    /// Hours per day.
    fn t_outdoors(&self) -> f64;
    fn t_indoors(&self) -> f64;
    fn t_stabled(&self) -> f64;
    fn n_sold(&self) -> f64;
    fn n_bought(&self) -> f64;
    fn mm_storage(&self) -> &str;
    fn daily_spreading(&self) -> &str;
    /// Not applicable to cattle unless a record says otherwise.
    fn wool(&self) -> Option<f64> {
        None
    }
    fn ef_country(&self) -> &str;
    fn farm_id(&self) -> i64;
}

/// Stateless field reads over any [`AnimalAttributes`] implementation.
pub struct AnimalData;

impl AnimalData {
    pub fn get_animal_concentrate_amount<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.con_amount()
    }

    pub fn get_animal_concentrate_type<A: AnimalAttributes + ?Sized>(animal: &A) -> &str {
        animal.con_type()
    }

    pub fn get_animal_forage<A: AnimalAttributes + ?Sized>(animal: &A) -> &str {
        animal.forage()
    }

    pub fn get_animal_cohort<A: AnimalAttributes + ?Sized>(animal: &A) -> &str {
        animal.cohort()
    }

    pub fn get_animal_population<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.pop()
    }

    pub fn get_animal_weight<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.weight()
    }

    pub fn get_animal_daily_milk<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.daily_milk()
    }

    pub fn get_animal_year<A: AnimalAttributes + ?Sized>(animal: &A) -> i32 {
        animal.year()
    }

    pub fn get_animal_grazing<A: AnimalAttributes + ?Sized>(animal: &A) -> &str {
        animal.grazing()
    }

    pub fn get_animal_t_outdoors<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.t_outdoors()
    }

    pub fn get_animal_t_indoors<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.t_indoors()
    }

    pub fn get_animal_t_stabled<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.t_stabled()
    }

    pub fn get_animal_sold<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.n_sold()
    }

    pub fn get_animal_bought<A: AnimalAttributes + ?Sized>(animal: &A) -> f64 {
        animal.n_bought()
    }

    pub fn get_animal_mm_storage<A: AnimalAttributes + ?Sized>(animal: &A) -> &str {
        animal.mm_storage()
    }

    pub fn get_animal_daily_spreading<A: AnimalAttributes + ?Sized>(animal: &A) -> &str {
        animal.daily_spreading()
    }

    pub fn get_animal_wool<A: AnimalAttributes + ?Sized>(animal: &A) -> Option<f64> {
        animal.wool()
    }

    pub fn get_animal_ef_country<A: AnimalAttributes + ?Sized>(animal: &A) -> &str {
        animal.ef_country()
    }

    pub fn get_animal_farm_id<A: AnimalAttributes + ?Sized>(animal: &A) -> i64 {
        animal.farm_id()
    }
}

/// Default animal category record.
///
/// Absent fields take the farm-input defaults: grazed on pasture for the
/// whole day, fed the `average` forage, solid manure storage and no daily
/// spreading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub farm_id: i64,
    pub year: i32,
    pub cohort: String,
    pub ef_country: String,
    #[serde(default)]
    pub pop: f64,
    #[serde(default)]
    pub daily_milk: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default = "default_forage")]
    pub forage: String,
    #[serde(default = "default_grazing")]
    pub grazing: String,
    #[serde(default = "default_con_type")]
    pub con_type: String,
    #[serde(default)]
    pub con_amount: f64,
    #[serde(default = "default_t_outdoors")]
    pub t_outdoors: f64,
    #[serde(default)]
    pub t_indoors: f64,
    #[serde(default)]
    pub t_stabled: f64,
    #[serde(default = "default_mm_storage")]
    pub mm_storage: String,
    #[serde(default = "default_daily_spreading")]
    pub daily_spreading: String,
    #[serde(default)]
    pub n_sold: f64,
    #[serde(default)]
    pub n_bought: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wool: Option<f64>,
}

fn default_forage() -> String {
    "average".to_string()
}

fn default_grazing() -> String {
    "pasture".to_string()
}

fn default_con_type() -> String {
    "concentrate".to_string()
}

fn default_t_outdoors() -> f64 {
    24.0
}

fn default_mm_storage() -> String {
    "solid".to_string()
}

fn default_daily_spreading() -> String {
    "none".to_string()
}

impl AnimalAttributes for AnimalRecord {
    fn con_amount(&self) -> f64 {
        self.con_amount
    }

    fn con_type(&self) -> &str {
        &self.con_type
    }

    fn forage(&self) -> &str {
        &self.forage
    }

    fn cohort(&self) -> &str {
        &self.cohort
    }

    fn pop(&self) -> f64 {
        self.pop
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn daily_milk(&self) -> f64 {
        self.daily_milk
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn grazing(&self) -> &str {
        &self.grazing
    }

    fn t_outdoors(&self) -> f64 {
        self.t_outdoors
    }

    fn t_indoors(&self) -> f64 {
        self.t_indoors
    }

    fn t_stabled(&self) -> f64 {
        self.t_stabled
    }

    fn n_sold(&self) -> f64 {
        self.n_sold
    }

    fn n_bought(&self) -> f64 {
        self.n_bought
    }

    fn mm_storage(&self) -> &str {
        &self.mm_storage
    }

    fn daily_spreading(&self) -> &str {
        &self.daily_spreading
    }

    fn wool(&self) -> Option<f64> {
        self.wool
    }

    fn ef_country(&self) -> &str {
        &self.ef_country
    }

    fn farm_id(&self) -> i64 {
        self.farm_id
    }
}

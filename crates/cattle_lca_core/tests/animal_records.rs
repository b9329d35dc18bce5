mod common;

use cattle_lca_core::{AnimalData, AnimalRecord, Cohort, LcaDataManager};

const FARM_JSON: &str = r#"[
    {
        "farm_id": 2018,
        "year": 2020,
        "cohort": "dairy_cows",
        "ef_country": "ireland",
        "pop": 120,
        "daily_milk": 21.3,
        "weight": 538,
        "forage": "Lolium",
        "con_type": "Maize",
        "con_amount": 3.0,
        "t_outdoors": 18,
        "t_indoors": 6,
        "mm_storage": "tank liquid",
        "daily_spreading": "trailing hose",
        "n_sold": 12
    },
    {
        "farm_id": 2018,
        "year": 2020,
        "cohort": "DxB_calves_m",
        "ef_country": "ireland",
        "pop": 40
    }
]"#;

#[test]
fn farm_records_deserialize_with_defaults() {
    let records: Vec<AnimalRecord> = serde_json::from_str(FARM_JSON).expect("json fixture");
    let [cows, calves] = records.as_slice() else {
        panic!("expected two records");
    };

    assert_eq!(AnimalData::get_animal_population(cows), 120.0);
    assert_eq!(AnimalData::get_animal_mm_storage(cows), "tank liquid");
    assert_eq!(AnimalData::get_animal_sold(cows), 12.0);
    assert_eq!(AnimalData::get_animal_bought(cows), 0.0);

    assert_eq!(AnimalData::get_animal_forage(calves), "average");
    assert_eq!(AnimalData::get_animal_t_outdoors(calves), 24.0);
    assert_eq!(AnimalData::get_animal_t_stabled(calves), 0.0);
    assert_eq!(AnimalData::get_animal_daily_spreading(calves), "none");
    assert_eq!(AnimalData::get_animal_wool(calves), None);
    assert_eq!(AnimalData::get_animal_farm_id(calves), 2018);
}

#[test]
fn record_fields_drive_manager_lookups() {
    let manager =
        LcaDataManager::from_connection(common::seeded_memory_store(), "ireland")
            .expect("seeded manager");
    let records: Vec<AnimalRecord> = serde_json::from_str(FARM_JSON).expect("json fixture");

    for record in &records {
        let cohort: Cohort = AnimalData::get_animal_cohort(record).parse()
            .expect("record cohort should parse");
        assert!(manager
            .get_cohort_parameter(cohort.name(), "weight_gain")
            .is_ok());
        assert!(manager
            .get_forage_digestibility(AnimalData::get_animal_forage(record))
            .is_ok());
        assert!(manager
            .get_grazing_type(AnimalData::get_animal_grazing(record))
            .is_ok());
        assert!(manager
            .get_storage_tan(AnimalData::get_animal_mm_storage(record))
            .is_ok());
        assert!(manager
            .get_daily_spreading(AnimalData::get_animal_daily_spreading(record))
            .is_ok());
    }

    let cows = &records[0];
    assert_eq!(
        manager
            .get_con_dry_matter_gross_energy(AnimalData::get_animal_concentrate_type(cows))
            .expect("con dry matter gross energy"),
        18.7
    );
}

#[test]
fn records_serialize_back_without_wool() {
    let records: Vec<AnimalRecord> = serde_json::from_str(FARM_JSON).expect("json fixture");
    let value = serde_json::to_value(&records[1]).expect("record json");

    assert_eq!(value["cohort"], "DxB_calves_m");
    assert_eq!(value["grazing"], "pasture");
    assert!(value.get("wool").is_none());
}
